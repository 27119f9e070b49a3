//! Core engine-facing contracts.
//!
//! `Screen` is the drawable surface user code draws on each tick; `App` is
//! the capability the runtime drives. Neither depends on winit or wgpu, so
//! everything here is testable headless.

mod app;
mod config;
mod screen;

pub use app::{App, AppControl};
pub use config::{ConfigError, ScreenConfig};
pub use screen::Screen;
