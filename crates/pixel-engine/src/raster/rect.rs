use crate::canvas::Canvas;
use crate::coords::IVec2;
use crate::paint::{DrawingMode, Pixel};

use super::draw_line;

/// Outlines the axis-aligned rectangle spanned by two opposite corners.
///
/// Both corners are inclusive. Corners may be given in any order.
pub fn draw_rect(canvas: &mut Canvas, mode: DrawingMode, a: IVec2, b: IVec2, color: Pixel) {
    let tr = IVec2::new(b.x, a.y);
    let bl = IVec2::new(a.x, b.y);

    draw_line(canvas, mode, a, tr, color);
    draw_line(canvas, mode, tr, b, color);
    draw_line(canvas, mode, b, bl, color);
    draw_line(canvas, mode, bl, a, color);
}

/// Fills the closed rectangle spanned by two opposite corners, one span per row.
///
/// Only rows on the canvas are visited.
pub fn fill_rect(canvas: &mut Canvas, mode: DrawingMode, a: IVec2, b: IVec2, color: Pixel) {
    let bottom = i32::try_from(canvas.height()).unwrap_or(i32::MAX) - 1;
    let (y0, y1) = (a.y.min(b.y).max(0), a.y.max(b.y).min(bottom));
    for y in y0..=y1 {
        canvas.span(a.x, b.x, y, color, mode);
    }
}
