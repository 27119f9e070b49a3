//! Decoded images and the routines that copy them into a canvas.
//!
//! A [`Sprite`] is a read-only blit source. Blits sample nearest-neighbour,
//! multiply by a tint and write through the caller's [`DrawingMode`]
//! (see [`crate::paint`]). Samples that fall outside the source are skipped;
//! a zero-sized sprite draws nothing.
//!
//! [`DrawingMode`]: crate::paint::DrawingMode

mod blit;
mod region;
mod sprite;
mod warp;

pub use blit::{blit, blit_rotated, BlitOptions};
pub use region::Region;
pub use sprite::Sprite;
pub use warp::{blit_warped, WarpQuad};
