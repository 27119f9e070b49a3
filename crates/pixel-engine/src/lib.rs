//! Pixel engine crate.
//!
//! A software canvas of logical pixels with scan-conversion primitives,
//! sprite blitting and tick-driven input tracking. The platform runtime
//! opens a window, feeds one input snapshot per tick to the [`Screen`]
//! (see [`core`]) and presents the finished canvas scaled up with the GPU.
//!
//! Everything below `window` and `device` is headless and testable without
//! a display.

pub mod canvas;
pub mod coords;
pub mod core;
pub mod paint;
pub mod raster;
pub mod sprite;

pub mod device;
pub mod window;
pub mod input;
pub mod time;

pub mod logging;

pub use crate::core::{App, AppControl, Screen, ScreenConfig};
