//! Source glyph bitmaps

/// A 1-bit glyph bitmap with its BDF placement
///
/// `x` and `y` are the BDF bounding-box offsets: `x` from the pen position
/// to the left edge, `y` from the baseline to the bottom edge. The shift
/// moves the ink inside the glyph box; ink shifted past the box is clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    pub shift_x: i32,
    pub shift_y: i32,
    bitmap: Vec<u8>,
    row_bytes: usize,
}

impl Glyph {
    /// Build a glyph from packed MSB-first rows. Short rows are padded with
    /// transparent pixels, missing rows are blank.
    pub fn from_rows(width: i32, height: i32, x: i32, y: i32, rows: &[Vec<u8>]) -> Self {
        let row_bytes = (width.max(0) as usize).div_ceil(8);
        let mut bitmap = vec![0u8; row_bytes * height.max(0) as usize];
        for (j, row) in rows.iter().take(height.max(0) as usize).enumerate() {
            let n = row.len().min(row_bytes);
            bitmap[j * row_bytes..j * row_bytes + n].copy_from_slice(&row[..n]);
        }
        Self {
            width,
            height,
            x,
            y,
            shift_x: 0,
            shift_y: 0,
            bitmap,
            row_bytes,
        }
    }

    /// Build a glyph by sampling `f` over the glyph box.
    pub fn from_fn(
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        mut f: impl FnMut(i32, i32) -> bool,
    ) -> Self {
        let mut glyph = Self::from_rows(width, height, x, y, &[]);
        for py in 0..height {
            for px in 0..width {
                if f(px, py) {
                    let bit = px as usize;
                    glyph.bitmap[py as usize * glyph.row_bytes + bit / 8] |= 1 << (7 - bit % 8);
                }
            }
        }
        glyph
    }

    pub fn with_shift(mut self, shift_x: i32, shift_y: i32) -> Self {
        self.shift_x = shift_x;
        self.shift_y = shift_y;
        self
    }

    /// Whether the pixel at `(px, py)` of the glyph box is inked, after
    /// applying the shift.
    pub fn at(&self, px: i32, py: i32) -> bool {
        let px = px - self.shift_x;
        let py = py - self.shift_y;
        if px < 0 || py < 0 || px >= self.width || py >= self.height {
            return false;
        }
        let byte = self.bitmap[py as usize * self.row_bytes + px as usize / 8];
        (byte >> (7 - px % 8)) & 1 != 0
    }

    /// Whether any pixel is inked.
    pub fn has_ink(&self) -> bool {
        (0..self.height).any(|py| (0..self.width).any(|px| self.at(px, py)))
    }

    /// Mirror horizontally. Column `px` samples column `width - px`, so the
    /// image moves one pixel left.
    pub fn mirrored(&self) -> Glyph {
        let w = self.width;
        Glyph::from_fn(self.width, self.height, self.x, self.y, |px, py| {
            self.at(w - px, py)
        })
    }

    /// Rotate by 180° and move the ink by `(shift_x, shift_y)` in the
    /// source's coordinates.
    pub fn rotated(&self, shift_x: i32, shift_y: i32) -> Glyph {
        let (w, h) = (self.width, self.height);
        Glyph::from_fn(self.width, self.height, self.x, self.y, |px, py| {
            self.at(w - px + shift_x, h - py + shift_y)
        })
    }

    /// Top-left of the glyph box in a cell whose baseline is `baseline`
    /// pixels below the cell's top edge.
    pub fn cell_origin(&self, baseline: i32) -> (i32, i32) {
        (self.x, baseline - self.height - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4x3, ink on the left column only
    fn left_bar() -> Glyph {
        Glyph::from_rows(4, 3, 0, 0, &[vec![0x80], vec![0x80], vec![0x80]])
    }

    #[test]
    fn test_at_and_shift() {
        let g = left_bar();
        assert!(g.at(0, 0));
        assert!(!g.at(1, 0));

        let g = left_bar().with_shift(1, -1);
        assert!(!g.at(0, 0));
        assert!(g.at(1, 0));
        assert!(g.at(1, 1));
        // the ink moved up one row, leaving the bottom row blank
        assert!(!g.at(1, 2));
    }

    #[test]
    fn test_mirrored() {
        let g = left_bar().mirrored();
        // column 0 moves to column 4, which is outside the box
        for py in 0..3 {
            for px in 0..4 {
                assert!(!g.at(px, py), "({px}, {py})");
            }
        }

        let g = Glyph::from_rows(4, 1, 0, 0, &[vec![0x40]]).mirrored();
        assert!(g.at(3, 0));
        assert!(!g.at(1, 0));
    }

    #[test]
    fn test_rotated() {
        let src = Glyph::from_rows(4, 4, 0, 0, &[vec![0x40]]);
        assert!(src.at(1, 0));

        // unshifted, (1, 0) would land at (3, 4), outside the box
        let g = src.rotated(0, 0);
        assert!(!g.has_ink());

        let g = src.rotated(-1, -1);
        assert!(g.at(2, 3));
        assert!(!g.at(1, 0));
    }

    #[test]
    fn test_cell_origin() {
        let g = Glyph::from_rows(6, 13, 0, -2, &[]);
        assert_eq!(g.cell_origin(12), (0, 1));
        assert!(!g.has_ink());
    }
}
