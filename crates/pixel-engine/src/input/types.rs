use std::fmt;

/// Number of tracked keyboard slots.
pub const KEY_SLOTS: usize = 256;

/// Number of tracked mouse buttons.
pub const MOUSE_SLOTS: usize = 3;

/// Keyboard key identifier.
///
/// The discriminant is the key's slot in the tracker. Platform keys with no
/// variant here land in slot 0 ([`Key::None`]).
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Key {
    #[default]
    None = 0,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Up,
    Down,
    Left,
    Right,

    Space,
    Tab,
    Shift,
    Ctrl,
    Ins,
    Del,
    Home,
    End,
    PgUp,
    PgDn,

    Back,
    Escape,
    Return,
    Enter,
    Pause,
    Scroll,

    // Numpad
    Np0, Np1, Np2, Np3, Np4,
    Np5, Np6, Np7, Np8, Np9,
    NpMul,
    NpDiv,
    NpAdd,
    NpSub,
    NpDecimal,

    Period,
}

impl Key {
    /// Slot index in `[0, KEY_SLOTS)`.
    #[inline]
    pub const fn index(self) -> usize {
        self as u8 as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier. Only the three primary buttons are tracked.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    pub const ALL: [MouseButton; MOUSE_SLOTS] =
        [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    #[inline]
    pub const fn index(self) -> usize {
        self as u8 as usize
    }
}

/// Edge-triggered state of one key or button for the current tick.
///
/// `pressed` and `released` are one-tick pulses; `held` persists while the
/// input is down.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ButtonState {
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
}
