//! Time subsystem.
//!
//! Provides testable frame timing without coupling to the runtime:
//! - one `FrameClock` per screen
//! - call `tick()` once per tick to obtain `FrameTime`
//! - `tick_at()` takes the timestamp explicitly, for tests and replays

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
