use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::coords::{Size, Vec2};
use crate::input::{Key, MouseButton, RawInput};

/// Wheel units per scrolled line.
pub const WHEEL_UNITS_PER_LINE: f32 = 120.0;

/// Folds a winit `WindowEvent` into the raw snapshot.
///
/// Events that carry no input are ignored. Key repeats are ignored too,
/// since they do not change the held state.
pub fn apply_window_event(raw: &mut RawInput, event: &WindowEvent) {
    match event {
        WindowEvent::Resized(size) => {
            raw.window_size = Size::new(size.width, size.height);
        }

        WindowEvent::Focused(false) => {
            // Releases are never delivered to an unfocused window.
            raw.release_all();
        }

        WindowEvent::CursorMoved { position, .. } => {
            raw.move_pointer(Vec2::new(position.x as f32, position.y as f32));
        }

        WindowEvent::MouseInput { state, button, .. } => {
            if let Some(b) = map_mouse_button(*button) {
                raw.set_button(b, *state == ElementState::Pressed);
            }
        }

        WindowEvent::MouseWheel { delta, .. } => {
            raw.scroll(wheel_units(*delta));
        }

        WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
            raw.set_key(map_key(event.physical_key), event.state == ElementState::Pressed);
        }

        _ => {}
    }
}

/// Vertical scroll converted to wheel units. Pixel deltas pass through verbatim.
pub fn wheel_units(delta: MouseScrollDelta) -> i32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => (y * WHEEL_UNITS_PER_LINE) as i32,
        MouseScrollDelta::PixelDelta(p) => p.y as i32,
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> Option<MouseButton> {
    match b {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Maps a physical key to its slot; anything unrepresented is `Key::None`.
pub fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::None;
    };

    match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,

        KeyCode::Space => Key::Space,
        KeyCode::Tab => Key::Tab,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Ctrl,
        KeyCode::Insert => Key::Ins,
        KeyCode::Delete => Key::Del,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PgUp,
        KeyCode::PageDown => Key::PgDn,

        KeyCode::Backspace => Key::Back,
        KeyCode::Escape => Key::Escape,
        KeyCode::NumpadEnter => Key::Return,
        KeyCode::Enter => Key::Enter,
        KeyCode::Pause => Key::Pause,
        KeyCode::ScrollLock => Key::Scroll,

        KeyCode::Numpad0 => Key::Np0,
        KeyCode::Numpad1 => Key::Np1,
        KeyCode::Numpad2 => Key::Np2,
        KeyCode::Numpad3 => Key::Np3,
        KeyCode::Numpad4 => Key::Np4,
        KeyCode::Numpad5 => Key::Np5,
        KeyCode::Numpad6 => Key::Np6,
        KeyCode::Numpad7 => Key::Np7,
        KeyCode::Numpad8 => Key::Np8,
        KeyCode::Numpad9 => Key::Np9,
        KeyCode::NumpadMultiply => Key::NpMul,
        KeyCode::NumpadDivide => Key::NpDiv,
        KeyCode::NumpadAdd => Key::NpAdd,
        KeyCode::NumpadSubtract => Key::NpSub,
        KeyCode::NumpadDecimal => Key::NpDecimal,

        KeyCode::Period => Key::Period,

        _ => Key::None,
    }
}
