//! Plain, scaled, rotated and warped blits of one sprite.
//!
//! Usage: `sprites [IMAGE]`. Without an image (or when it cannot be decoded)
//! a generated checkerboard is used. ESC quits.

use anyhow::Result;

use pixel_engine::coords::{IVec2, Size, Vec2};
use pixel_engine::device::GpuInit;
use pixel_engine::input::Key;
use pixel_engine::logging::{init_logging, LoggingConfig};
use pixel_engine::paint::{DrawingMode, Pixel, CYAN, DARK_BLUE, YELLOW};
use pixel_engine::sprite::{BlitOptions, Sprite, WarpQuad};
use pixel_engine::window::Runtime;
use pixel_engine::{App, AppControl, Screen, ScreenConfig};

fn checkerboard(size: u32, cell: u32) -> Sprite {
    let mut sprite = Sprite::new(Size::new(size, size));
    for y in 0..size {
        for x in 0..size {
            let color = if ((x / cell) + (y / cell)) % 2 == 0 {
                YELLOW
            } else {
                DARK_BLUE.with_alpha(160)
            };
            sprite.set(x as i32, y as i32, color);
        }
    }
    sprite
}

struct Sprites {
    sprite: Sprite,
    angle: f32,
    time: f32,
}

impl App for Sprites {
    fn on_start(&mut self, screen: &mut Screen) {
        log::info!(
            "sprite {}x{} on a {}x{} screen",
            self.sprite.width(),
            self.sprite.height(),
            screen.screen_size().width,
            screen.screen_size().height
        );
    }

    fn on_tick(&mut self, screen: &mut Screen, elapsed: f32) -> AppControl {
        self.time += elapsed;
        self.angle += elapsed;

        screen.clear_with(Pixel::rgb(24, 24, 32));

        let plain = BlitOptions::default();
        screen.draw_sprite(Vec2::new(10.0, 10.0), &self.sprite, &plain);

        let scaled = BlitOptions::default()
            .with_scale(Vec2::new(2.0, 1.5))
            .with_tint(CYAN);
        screen.draw_sprite(Vec2::new(10.0, 120.0), &self.sprite, &scaled);

        let pivot = Vec2::new(
            self.sprite.width() as f32 / 2.0,
            self.sprite.height() as f32 / 2.0,
        );
        screen.draw_rotated_sprite(Vec2::new(360.0, 100.0), &self.sprite, self.angle, pivot, &plain);

        let sway = self.time.sin() * 40.0;
        let quad = WarpQuad::new([
            Vec2::new(250.0 + sway, 280.0),
            Vec2::new(220.0, 470.0),
            Vec2::new(480.0, 450.0),
            Vec2::new(430.0 - sway, 300.0),
        ]);
        screen.draw_warped_sprite(&self.sprite, &quad);

        if screen.key(Key::Escape).pressed {
            screen.close();
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sprite = match std::env::args().nth(1) {
        Some(path) => Sprite::from_file(path),
        None => Sprite::empty(),
    };
    let sprite = if sprite.is_empty() {
        checkerboard(96, 12)
    } else {
        sprite
    };

    let config = ScreenConfig::new(Size::new(500, 500), 2)
        .with_position(IVec2::new(500, 5))
        .with_title("Sprites")
        .with_mode(DrawingMode::FullAlpha);

    let app = Sprites {
        sprite,
        angle: 0.0,
        time: 0.0,
    };
    Runtime::run(config, GpuInit::default(), app)
}
