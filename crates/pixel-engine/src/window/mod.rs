//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, folds platform events into the
//! per-tick input snapshot and presents the screen's canvas through the GPU
//! layer.

mod runtime;

pub use runtime::Runtime;
