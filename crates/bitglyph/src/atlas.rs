//! Packed 1-bit glyph atlas
//!
//! The atlas stores one bit per pixel, row-major, most significant bit
//! first. Views created with [`BitAtlas::sub_image`] share the backing
//! buffer; nothing is copied.

use std::sync::Arc;

/// Number of glyph cells per atlas row and column.
pub const CELLS_PER_SIDE: i32 = 256;

/// An integer point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A half-open integer rectangle `[min, max)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// The largest rectangle contained by both. Empty intersections
    /// collapse to the zero rectangle.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() {
            Rect::default()
        } else {
            r
        }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.min.x + dx,
            self.min.y + dy,
            self.max.x + dx,
            self.max.y + dy,
        )
    }
}

/// A read-only view into a packed bitmap
#[derive(Clone, Debug)]
pub struct BitAtlas {
    bits: Arc<[u8]>,
    /// Pixels per row of the backing buffer
    stride: i32,
    bounds: Rect,
}

impl BitAtlas {
    /// Wrap packed bits covering a `width` × `height` image.
    ///
    /// `bits` must hold at least `width * height / 8` bytes; a short
    /// buffer reads as transparent past its end.
    pub fn new(bits: impl Into<Arc<[u8]>>, width: i32, height: i32) -> Self {
        Self {
            bits: bits.into(),
            stride: width,
            bounds: Rect::new(0, 0, width, height),
        }
    }

    fn empty() -> Self {
        Self {
            bits: Arc::from(Vec::new()),
            stride: 0,
            bounds: Rect::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the pixel at `(x, y)` is opaque. Anything outside the view
    /// is transparent.
    pub fn at(&self, x: i32, y: i32) -> bool {
        if !self.bounds.contains(Point::new(x, y)) {
            return false;
        }
        let idx = (self.stride as usize) * (y as usize) + (x as usize);
        match self.bits.get(idx / 8) {
            Some(byte) => (byte >> (7 - idx % 8)) & 1 != 0,
            None => false,
        }
    }

    /// A view of `r` clipped to this view's bounds.
    pub fn sub_image(&self, r: Rect) -> BitAtlas {
        let bounds = r.intersect(&self.bounds);
        if bounds.is_empty() {
            return BitAtlas::empty();
        }
        Self {
            bits: Arc::clone(&self.bits),
            stride: self.stride,
            bounds,
        }
    }

    /// Whether two views share the same backing buffer.
    pub fn shares_buffer(&self, other: &BitAtlas) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: i32, height: i32) -> BitAtlas {
        let mut bits = vec![0u8; (width * height / 8) as usize];
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    let idx = (width * y + x) as usize;
                    bits[idx / 8] |= 1 << (7 - idx % 8);
                }
            }
        }
        BitAtlas::new(bits, width, height)
    }

    #[test]
    fn test_msb_first_packing() {
        let atlas = BitAtlas::new(vec![0b1000_0001, 0b0100_0000], 16, 1);
        assert!(atlas.at(0, 0));
        assert!(!atlas.at(1, 0));
        assert!(atlas.at(7, 0));
        assert!(atlas.at(9, 0));
    }

    #[test]
    fn test_sub_image_bounds_are_clipped() {
        let atlas = checkerboard(16, 16);
        let rects = [
            Rect::new(2, 3, 8, 9),
            Rect::new(-4, -4, 4, 4),
            Rect::new(10, 10, 40, 40),
            Rect::new(20, 20, 30, 30),
            Rect::new(5, 5, 5, 9),
        ];
        for r in rects {
            let sub = atlas.sub_image(r);
            assert_eq!(sub.bounds(), r.intersect(&atlas.bounds()), "{r:?}");
        }
    }

    #[test]
    fn test_sub_image_shares_buffer() {
        let atlas = checkerboard(16, 16);
        let sub = atlas.sub_image(Rect::new(4, 4, 8, 8));
        assert!(sub.shares_buffer(&atlas));
        assert_eq!(sub.at(4, 4), atlas.at(4, 4));
        assert_eq!(sub.at(5, 4), atlas.at(5, 4));
    }

    #[test]
    fn test_outside_pixels_are_transparent() {
        let atlas = checkerboard(16, 16);
        let sub = atlas.sub_image(Rect::new(4, 4, 8, 8));
        // (2, 2) is opaque in the parent but outside the view.
        assert!(atlas.at(2, 2));
        assert!(!sub.at(2, 2));
        assert!(!sub.at(8, 8));
        assert!(!atlas.at(-1, 0));
        assert!(!atlas.at(16, 0));

        let empty = atlas.sub_image(Rect::new(20, 20, 24, 24));
        assert!(empty.bounds().is_empty());
        assert!(!empty.at(20, 20));
    }
}
