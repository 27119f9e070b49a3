use crate::coords::IVec2;

use super::frame::RawInput;
use super::types::{ButtonState, Key, MouseButton, KEY_SLOTS, MOUSE_SLOTS};

/// Debounced input state for a single screen.
///
/// Holds the previous raw snapshot for every slot and derives
/// pressed/held/released from the difference once per tick.
#[derive(Debug, Clone)]
pub struct InputTracker {
    keys: [ButtonState; KEY_SLOTS],
    keys_old: [bool; KEY_SLOTS],

    mouse: [ButtonState; MOUSE_SLOTS],
    mouse_old: [bool; MOUSE_SLOTS],

    /// Pointer in canvas coordinates.
    pub pointer: IVec2,
    pub wheel: i32,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            keys: [ButtonState::default(); KEY_SLOTS],
            keys_old: [false; KEY_SLOTS],
            mouse: [ButtonState::default(); MOUSE_SLOTS],
            mouse_old: [false; MOUSE_SLOTS],
            pointer: IVec2::zero(),
            wheel: 0,
        }
    }
}

/// Applies one tick of the transition rule to a single slot.
#[inline]
fn step(state: &mut ButtonState, old: &mut bool, new: bool) {
    state.pressed = false;
    state.released = false;

    if new != *old {
        if new {
            state.pressed = !state.held;
            state.held = true;
        } else {
            state.released = true;
            state.held = false;
        }
    }

    *old = new;
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every key and button by one tick and copies the wheel.
    ///
    /// The pointer is not touched here; it needs the viewport to map.
    pub fn update(&mut self, raw: &RawInput) {
        for ((state, old), &new) in self.keys.iter_mut().zip(&mut self.keys_old).zip(&raw.keys) {
            step(state, old, new);
        }
        for ((state, old), &new) in self.mouse.iter_mut().zip(&mut self.mouse_old).zip(&raw.mouse) {
            step(state, old, new);
        }
        self.wheel = raw.wheel;
    }

    #[inline]
    pub fn key(&self, key: Key) -> ButtonState {
        self.keys[key.index()]
    }

    #[inline]
    pub fn button(&self, button: MouseButton) -> ButtonState {
        self.mouse[button.index()]
    }
}
