//! Text preview rendering

use bitglyph::{Dot, Face, Point};
use image::{GrayImage, Luma};

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

/// Draw one line of `text` in black on white, with a `margin` pixel border.
///
/// Kerning and skipped runes follow [`bitglyph::measure_string`], so the
/// image is exactly as wide as the measured string plus the margins.
pub fn render_line(face: &dyn Face, text: &str, margin: u32) -> GrayImage {
    let metrics = face.metrics();
    let width = bitglyph::measure_string(face, text).max(0) as u32 + margin * 2;
    let height = metrics.height.max(0) as u32 + margin * 2;
    let mut img = GrayImage::from_pixel(width, height, PAPER);

    let mut pen_x = margin as i32;
    let baseline = (margin as i32 + metrics.ascent) as f32;
    let mut prev: Option<char> = None;
    for r in text.chars() {
        if let Some(p) = prev {
            pen_x += face.kern(p, r);
        }
        let Some(draw) = face.glyph(Dot::new(pen_x as f32, baseline), r) else {
            continue;
        };
        for y in draw.rect.min.y..draw.rect.max.y {
            for x in draw.rect.min.x..draw.rect.max.x {
                let src = Point::new(
                    draw.mask_origin.x + x - draw.rect.min.x,
                    draw.mask_origin.y + y - draw.rect.min.y,
                );
                if !draw.mask.at(src.x, src.y) {
                    continue;
                }
                if let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) {
                    if px < width && py < height {
                        img.put_pixel(px, py, INK);
                    }
                }
            }
        }
        pen_x += draw.advance;
        prev = Some(r);
    }
    img
}
