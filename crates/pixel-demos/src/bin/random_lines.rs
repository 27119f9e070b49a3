//! Fifty random lines per tick, blended on top of each other. ESC quits.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pixel_engine::coords::{IVec2, Size};
use pixel_engine::device::GpuInit;
use pixel_engine::input::Key;
use pixel_engine::logging::{init_logging, LoggingConfig};
use pixel_engine::paint::{DrawingMode, Pixel};
use pixel_engine::window::Runtime;
use pixel_engine::{AppControl, Screen, ScreenConfig};

const LINES_PER_TICK: usize = 50;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ScreenConfig::new(Size::new(500, 500), 2)
        .with_position(IVec2::new(500, 5))
        .with_title("Random lines")
        .with_mode(DrawingMode::FullAlpha);

    let mut rng = StdRng::from_os_rng();

    Runtime::run(
        config,
        GpuInit::default(),
        move |screen: &mut Screen, _elapsed: f32| {
            let size = screen.screen_size();
            let (w, h) = (size.width as i32, size.height as i32);

            for _ in 0..LINES_PER_TICK {
                let a = IVec2::new(rng.random_range(0..w), rng.random_range(0..h));
                let b = IVec2::new(rng.random_range(0..w), rng.random_range(0..h));
                screen.draw_line(a, b, Pixel::random(&mut rng));
            }

            if screen.key(Key::Escape).pressed {
                return AppControl::Exit;
            }
            AppControl::Continue
        },
    )
}
