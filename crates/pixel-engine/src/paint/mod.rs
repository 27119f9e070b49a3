//! Colour model and compositing.
//!
//! Scope:
//! - `Pixel`: straight-alpha RGBA8 value, the unit every buffer stores
//! - `DrawingMode`: per-screen blend policy
//! - `compose`: the one function that decides what a write does to a destination
//!
//! Every primitive and blit funnels through `compose` (via `Canvas::blend`),
//! so a mode change affects all drawing uniformly.

mod compose;
mod mode;
mod pixel;

pub use compose::compose;
pub use mode::DrawingMode;
pub use pixel::*;
