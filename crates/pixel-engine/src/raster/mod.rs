//! Integer scan conversion of primitives into a [`Canvas`](crate::canvas::Canvas).
//!
//! Every routine writes exclusively through `Canvas::blend`/`Canvas::span`,
//! so the active [`DrawingMode`](crate::paint::DrawingMode) applies to each
//! touched cell exactly as it would for a single-pixel draw.
//!
//! None of these functions fail. Off-canvas parts are dropped by the canvas
//! and degenerate shapes (zero radius, zero length, collinear vertices)
//! collapse to a smaller draw or to nothing.

mod circle;
mod line;
mod rect;
mod triangle;

pub use circle::{draw_circle, fill_circle};
pub use line::draw_line;
pub use rect::{draw_rect, fill_rect};
pub use triangle::{draw_triangle, fill_triangle};
