use crate::coords::{Size, Vec2};

use super::types::{Key, MouseButton, KEY_SLOTS, MOUSE_SLOTS};

/// Raw input snapshot handed to the core once per tick.
///
/// The runtime overwrites fields as platform events arrive; only the last
/// value before a tick is observed (no event queue). Pointer coordinates and
/// window size are in physical window pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInput {
    pub keys: [bool; KEY_SLOTS],
    pub mouse: [bool; MOUSE_SLOTS],
    pub pointer: Vec2,
    /// Accumulated wheel units (120 per line). Never reset.
    pub wheel: i32,
    pub window_size: Size,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            keys: [false; KEY_SLOTS],
            mouse: [false; MOUSE_SLOTS],
            pointer: Vec2::zero(),
            wheel: 0,
            window_size: Size::default(),
        }
    }
}

impl RawInput {
    /// Snapshot for a window of the given client size, nothing held.
    pub fn with_window(window_size: Size) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    #[inline]
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.keys[key.index()] = down;
    }

    #[inline]
    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.mouse[button.index()] = down;
    }

    #[inline]
    pub fn move_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    #[inline]
    pub fn scroll(&mut self, units: i32) {
        self.wheel = self.wheel.wrapping_add(units);
    }

    /// Drops every held key and button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys = [false; KEY_SLOTS];
        self.mouse = [false; MOUSE_SLOTS];
    }
}
