//! Coordinate and size types shared by the canvas, rasterizer and input mapping.
//!
//! Canonical canvas space:
//! - integer pixels, origin top-left
//! - +X right, +Y down
//!
//! Integer and floating vectors never convert implicitly. Use the named
//! conversions (`IVec2::to_vec2`, `Vec2::floor`, `Vec2::trunc`) at the seams.

mod ivec2;
mod size;
mod vec2;
mod viewport;

pub use ivec2::IVec2;
pub use size::Size;
pub use vec2::Vec2;
pub use viewport::Viewport;
