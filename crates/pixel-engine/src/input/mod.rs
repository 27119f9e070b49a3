//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime folds platform events into a [`RawInput`] snapshot between
//! ticks; [`InputTracker`] turns consecutive snapshots into edge-triggered
//! [`ButtonState`]s.

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::RawInput;
pub use state::InputTracker;
pub use types::{ButtonState, Key, MouseButton, KEY_SLOTS, MOUSE_SLOTS};
