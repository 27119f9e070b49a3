//! Two bodies orbiting each other.
//!
//! Velocity vectors are drawn in red and accelerations in blue. ESC quits.

use anyhow::Result;

use pixel_engine::coords::{IVec2, Size, Vec2};
use pixel_engine::device::GpuInit;
use pixel_engine::input::Key;
use pixel_engine::logging::{init_logging, LoggingConfig};
use pixel_engine::paint::{DrawingMode, BLUE, RED, WHITE};
use pixel_engine::window::Runtime;
use pixel_engine::{App, AppControl, Screen, ScreenConfig};

const G: f32 = 10.0;
const TIME_SCALE: f32 = 2.0;

struct Body {
    pos: Vec2,
    vel: Vec2,
    acc: Vec2,
    mass: f32,
    /// Radius per unit of mass.
    density: f32,
}

impl Body {
    fn radius(&self) -> u32 {
        (self.mass * self.density) as u32
    }

    fn step(&mut self, force: Vec2, dt: f32) {
        self.acc = force / self.mass;
        self.vel = self.vel + self.acc * (dt * TIME_SCALE);
        self.pos = self.pos + self.vel * (dt * TIME_SCALE);
    }

    fn draw(&self, screen: &mut Screen) {
        let tip = |v: Vec2| (self.pos + v).trunc();
        screen.fill_circle(self.pos.trunc(), self.radius(), WHITE);
        screen.draw_line(self.pos.trunc(), tip(self.vel), RED);
        screen.draw_line(self.pos.trunc(), tip(self.acc), BLUE);
    }
}

struct Gravitation {
    heavy: Body,
    light: Body,
}

impl Gravitation {
    fn new() -> Self {
        Self {
            heavy: Body {
                pos: Vec2::new(250.0, 250.0),
                vel: Vec2::zero(),
                acc: Vec2::zero(),
                mass: 10_000.0,
                density: 0.005,
            },
            light: Body {
                pos: Vec2::new(350.0, 250.0),
                vel: Vec2::new(0.0, -30.0),
                acc: Vec2::zero(),
                mass: 100.0,
                density: 0.05,
            },
        }
    }

    /// Force acting on `heavy`; `light` receives the opposite.
    fn attraction(&self) -> Vec2 {
        let d = self.light.pos - self.heavy.pos;
        let r2 = d.x * d.x + d.y * d.y;
        if r2 <= f32::EPSILON {
            return Vec2::zero();
        }
        let f = G * self.heavy.mass * self.light.mass / r2;
        d * (f / r2.sqrt())
    }
}

impl App for Gravitation {
    fn on_tick(&mut self, screen: &mut Screen, elapsed: f32) -> AppControl {
        screen.clear();

        let force = self.attraction();
        self.heavy.step(force, elapsed);
        self.light.step(force * -1.0, elapsed);

        self.heavy.draw(screen);
        self.light.draw(screen);

        if screen.key(Key::Escape).pressed {
            screen.close();
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ScreenConfig::new(Size::new(500, 500), 2)
        .with_position(IVec2::new(500, 5))
        .with_title("Gravitation")
        .with_mode(DrawingMode::NoAlpha);

    Runtime::run(config, GpuInit::default(), Gravitation::new())
}
