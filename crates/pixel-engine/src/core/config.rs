use thiserror::Error;

use crate::coords::{IVec2, Size};
use crate::paint::DrawingMode;

/// Rejected screen configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("pixel scale must be at least 1")]
    InvalidScale,

    #[error("screen size {width}x{height} has a zero dimension")]
    InvalidSize { width: u32, height: u32 },
}

/// Construction parameters for a [`Screen`](super::Screen) and its window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// Logical canvas size in pixels.
    pub size: Size,
    /// Window pixels per canvas pixel.
    pub scale: u8,
    /// Initial window position on the desktop.
    pub position: IVec2,
    pub title: String,
    pub mode: DrawingMode,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            size: Size::new(256, 240),
            scale: 2,
            position: IVec2::new(100, 100),
            title: String::from("pixel"),
            mode: DrawingMode::NoAlpha,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl ScreenConfig {
    pub fn new(size: Size, scale: u8) -> Self {
        Self {
            size,
            scale,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_position(mut self, position: IVec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_mode(mut self, mode: DrawingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::InvalidScale);
        }
        if self.size.is_empty() {
            return Err(ConfigError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(())
    }

    /// Window client size before any user resize.
    pub fn window_size(&self) -> Size {
        self.size.scaled(self.scale as u32)
    }
}
