use std::time::Instant;

use crate::canvas::Canvas;
use crate::coords::{IVec2, Size, Vec2, Viewport};
use crate::input::{ButtonState, InputTracker, Key, MouseButton, RawInput};
use crate::paint::{DrawingMode, Pixel};
use crate::raster;
use crate::sprite::{self, BlitOptions, Region, Sprite, WarpQuad};
use crate::time::{FrameClock, FrameTime};

use super::config::{ConfigError, ScreenConfig};

/// The drawable surface.
///
/// Owns the canvas, the active drawing mode, input and timing state, and the
/// mapping between the window and the canvas. Platform code feeds it one
/// [`RawInput`] per tick and presents [`Screen::canvas`] afterwards; nothing
/// here touches the window or the GPU.
#[derive(Debug, Clone)]
pub struct Screen {
    canvas: Canvas,
    mode: DrawingMode,
    input: InputTracker,
    clock: FrameClock,
    viewport: Viewport,

    name: String,
    window_pos: IVec2,
    elapsed: f32,
    fps: u32,
    should_exist: bool,
}

impl Screen {
    pub fn new(config: &ScreenConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        log::debug!(
            "screen {:?}: {}x{} at scale {}",
            config.title,
            config.size.width,
            config.size.height,
            config.scale
        );

        Ok(Self {
            canvas: Canvas::new(config.size),
            mode: config.mode,
            input: InputTracker::new(),
            clock: FrameClock::new(),
            viewport: Viewport::new(config.size, config.scale),
            name: config.title.clone(),
            window_pos: config.position,
            elapsed: 0.0,
            fps: 0,
            should_exist: true,
        })
    }

    // ── tick ─────────────────────────────────────────────────────────────

    /// Advances one tick using the current time.
    pub fn tick(&mut self, raw: &RawInput) -> FrameTime {
        self.tick_at(raw, Instant::now())
    }

    /// Advances one tick: clock, viewport, buttons, pointer and wheel.
    pub fn tick_at(&mut self, raw: &RawInput, now: Instant) -> FrameTime {
        let time = self.clock.tick_at(now);
        self.elapsed = time.dt;
        self.fps = time.fps;

        if raw.window_size != self.viewport.window_size() {
            self.viewport.fit(raw.window_size);
        }

        self.input.update(raw);
        self.input.pointer = self.viewport.map_pointer(raw.pointer);

        time
    }

    /// Restarts frame timing so the next tick does not count the time spent
    /// since the last one (startup, a blocking load).
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    // ── lifecycle ────────────────────────────────────────────────────────

    /// Requests the runtime to stop after the current tick.
    pub fn close(&mut self) {
        self.should_exist = false;
    }

    pub fn should_exist(&self) -> bool {
        self.should_exist
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Window title: `"<name> - FPS: <fps>"`.
    pub fn title(&self) -> String {
        format!("{} - FPS: {}", self.name, self.fps)
    }

    pub fn drawing_mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn set_drawing_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    pub(crate) fn set_window_pos(&mut self, pos: IVec2) {
        self.window_pos = pos;
    }

    // ── drawing ──────────────────────────────────────────────────────────

    /// Clears the canvas to `BLANK`.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Sets every canvas pixel to `color`, ignoring the drawing mode.
    pub fn clear_with(&mut self, color: Pixel) {
        self.canvas.fill(color);
    }

    pub fn draw(&mut self, pos: impl Into<IVec2>, color: Pixel) {
        let p = pos.into();
        self.canvas.blend(p.x, p.y, color, self.mode);
    }

    pub fn draw_line(&mut self, a: impl Into<IVec2>, b: impl Into<IVec2>, color: Pixel) {
        raster::draw_line(&mut self.canvas, self.mode, a.into(), b.into(), color);
    }

    pub fn draw_circle(&mut self, center: impl Into<IVec2>, radius: u32, color: Pixel) {
        raster::draw_circle(&mut self.canvas, self.mode, center.into(), radius, color);
    }

    pub fn fill_circle(&mut self, center: impl Into<IVec2>, radius: u32, color: Pixel) {
        raster::fill_circle(&mut self.canvas, self.mode, center.into(), radius, color);
    }

    pub fn draw_rect(&mut self, a: impl Into<IVec2>, b: impl Into<IVec2>, color: Pixel) {
        raster::draw_rect(&mut self.canvas, self.mode, a.into(), b.into(), color);
    }

    pub fn fill_rect(&mut self, a: impl Into<IVec2>, b: impl Into<IVec2>, color: Pixel) {
        raster::fill_rect(&mut self.canvas, self.mode, a.into(), b.into(), color);
    }

    pub fn draw_triangle(
        &mut self,
        p1: impl Into<IVec2>,
        p2: impl Into<IVec2>,
        p3: impl Into<IVec2>,
        color: Pixel,
    ) {
        raster::draw_triangle(&mut self.canvas, self.mode, p1.into(), p2.into(), p3.into(), color);
    }

    /// Fills a triangle. Vertex order matters; see [`raster::fill_triangle`].
    pub fn fill_triangle(
        &mut self,
        p1: impl Into<IVec2>,
        p2: impl Into<IVec2>,
        p3: impl Into<IVec2>,
        color: Pixel,
    ) {
        raster::fill_triangle(&mut self.canvas, self.mode, p1.into(), p2.into(), p3.into(), color);
    }

    /// Blits the whole sprite with its top-left at `pos`. `opts.region` is ignored.
    pub fn draw_sprite(&mut self, pos: Vec2, sprite: &Sprite, opts: &BlitOptions) {
        let opts = BlitOptions { region: None, ..*opts };
        sprite::blit(&mut self.canvas, self.mode, pos, sprite, &opts);
    }

    pub fn draw_partial_sprite(&mut self, pos: Vec2, region: Region, sprite: &Sprite, opts: &BlitOptions) {
        let opts = opts.with_region(region);
        sprite::blit(&mut self.canvas, self.mode, pos, sprite, &opts);
    }

    /// Blits the sprite rotated by `angle` radians; `pivot` (sprite pixels) lands on `pos`.
    pub fn draw_rotated_sprite(
        &mut self,
        pos: Vec2,
        sprite: &Sprite,
        angle: f32,
        pivot: Vec2,
        opts: &BlitOptions,
    ) {
        let opts = BlitOptions { region: None, ..*opts };
        sprite::blit_rotated(&mut self.canvas, self.mode, pos, sprite, angle, pivot, &opts);
    }

    /// Like [`draw_rotated_sprite`](Self::draw_rotated_sprite); `pivot` is relative to `region`.
    pub fn draw_partial_rotated_sprite(
        &mut self,
        pos: Vec2,
        sprite: &Sprite,
        angle: f32,
        region: Region,
        pivot: Vec2,
        opts: &BlitOptions,
    ) {
        let opts = opts.with_region(region);
        sprite::blit_rotated(&mut self.canvas, self.mode, pos, sprite, angle, pivot, &opts);
    }

    pub fn draw_warped_sprite(&mut self, sprite: &Sprite, quad: &WarpQuad) {
        sprite::blit_warped(&mut self.canvas, self.mode, sprite, quad, None);
    }

    pub fn draw_partial_warped_sprite(&mut self, sprite: &Sprite, quad: &WarpQuad, region: Region) {
        sprite::blit_warped(&mut self.canvas, self.mode, sprite, quad, Some(region));
    }

    // ── queries ──────────────────────────────────────────────────────────

    /// Logical canvas size.
    pub fn screen_size(&self) -> Size {
        self.canvas.size()
    }

    /// Largest valid canvas coordinate on each axis.
    pub fn drawable_size(&self) -> IVec2 {
        let s = self.canvas.size();
        IVec2::new(s.width as i32 - 1, s.height as i32 - 1)
    }

    /// Physical window client size as of the last tick.
    pub fn window_size(&self) -> Size {
        self.viewport.window_size()
    }

    pub fn window_pos(&self) -> IVec2 {
        self.window_pos
    }

    /// Pointer in canvas coordinates, clamped to the canvas.
    pub fn mouse_pos(&self) -> IVec2 {
        self.input.pointer
    }

    /// Accumulated wheel units since startup (120 per line).
    pub fn mouse_wheel(&self) -> i32 {
        self.input.wheel
    }

    pub fn mouse(&self, button: MouseButton) -> ButtonState {
        self.input.button(button)
    }

    pub fn mouse_left(&self) -> ButtonState {
        self.mouse(MouseButton::Left)
    }

    pub fn mouse_right(&self) -> ButtonState {
        self.mouse(MouseButton::Right)
    }

    pub fn mouse_middle(&self) -> ButtonState {
        self.mouse(MouseButton::Middle)
    }

    pub fn key(&self, key: Key) -> ButtonState {
        self.input.key(key)
    }

    /// Seconds between the last two ticks.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
