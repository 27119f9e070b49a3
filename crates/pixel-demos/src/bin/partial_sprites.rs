//! Draws a 100×100 region of a sprite.
//!
//! Usage: `partial-sprites [IMAGE]`. Falls back to a generated gradient.
//! ESC quits.

use anyhow::Result;

use pixel_engine::coords::{IVec2, Size, Vec2};
use pixel_engine::device::GpuInit;
use pixel_engine::input::Key;
use pixel_engine::logging::{init_logging, LoggingConfig};
use pixel_engine::paint::{DrawingMode, Pixel};
use pixel_engine::sprite::{BlitOptions, Region, Sprite};
use pixel_engine::window::Runtime;
use pixel_engine::{AppControl, Screen, ScreenConfig};

fn gradient(size: u32) -> Sprite {
    let mut sprite = Sprite::new(Size::new(size, size));
    for y in 0..size {
        for x in 0..size {
            let r = (x * 255 / size) as u8;
            let g = (y * 255 / size) as u8;
            sprite.set(x as i32, y as i32, Pixel::rgb(r, g, 128));
        }
    }
    sprite
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sprite = std::env::args()
        .nth(1)
        .map(Sprite::from_file)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| gradient(300));

    let config = ScreenConfig::new(Size::new(500, 500), 2)
        .with_position(IVec2::new(500, 5))
        .with_title("Partial sprites")
        .with_mode(DrawingMode::FullAlpha);

    let region = Region::new(100, 100, 100, 100);
    let opts = BlitOptions::default();

    Runtime::run(
        config,
        GpuInit::default(),
        move |screen: &mut Screen, _elapsed: f32| {
            screen.clear();
            screen.draw_partial_sprite(Vec2::zero(), region, &sprite, &opts);

            if screen.key(Key::Escape).pressed {
                screen.close();
            }
            AppControl::Continue
        },
    )
}
