use super::screen::Screen;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-tick behaviour supplied by the caller and driven by the runtime.
pub trait App {
    /// Called once after the window and GPU are ready, before the first tick.
    fn on_start(&mut self, screen: &mut Screen) {
        let _ = screen;
    }

    /// Called once per tick with the seconds elapsed since the previous tick.
    fn on_tick(&mut self, screen: &mut Screen, elapsed: f32) -> AppControl;
}

impl<F> App for F
where
    F: FnMut(&mut Screen, f32) -> AppControl,
{
    fn on_tick(&mut self, screen: &mut Screen, elapsed: f32) -> AppControl {
        self(screen, elapsed)
    }
}
