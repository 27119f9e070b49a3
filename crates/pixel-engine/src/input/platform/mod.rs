//! Translation from windowing-system events into [`RawInput`](super::RawInput).

pub mod winit;
