//! Off-screen pixel buffer.

mod buffer;

pub use buffer::Canvas;
