use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::{DrawingMode, Pixel, WHITE};

use super::{Region, Sprite};

/// Per-call blit parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlitOptions {
    /// Destination pixels per source pixel, per axis.
    pub scale: Vec2,
    pub tint: Pixel,
    /// Source sub-rectangle; `None` blits the whole sprite.
    pub region: Option<Region>,
}

impl Default for BlitOptions {
    fn default() -> Self {
        Self {
            scale: Vec2::splat(1.0),
            tint: WHITE,
            region: None,
        }
    }
}

impl BlitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tint(mut self, tint: Pixel) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Source rectangle and scale, or `None` when the blit has nothing to draw.
    fn resolve(&self, sprite: &Sprite) -> Option<(Region, Vec2)> {
        let s = self.scale;
        if sprite.is_empty() || !s.is_finite() || s.x <= 0.0 || s.y <= 0.0 {
            return None;
        }
        let region = self.region.unwrap_or(Region::full(sprite.size()));
        (!region.is_empty()).then_some((region, s))
    }
}

#[inline]
fn sample(sprite: &Sprite, region: Region, x: i32, y: i32) -> Option<Pixel> {
    let (sx, sy) = region.source(x, y)?;
    sprite.get(sx, sy)
}

/// Copies `sprite` (or `opts.region` of it) with its top-left at `pos`.
///
/// The footprint is `ceil(region extent * scale)`; destination cell `i`
/// samples source cell `floor(i / scale)`. The footprint is clipped to the
/// canvas before any cell is visited.
pub fn blit(canvas: &mut Canvas, mode: DrawingMode, pos: Vec2, sprite: &Sprite, opts: &BlitOptions) {
    let Some((region, scale)) = opts.resolve(sprite) else {
        return;
    };
    if !pos.is_finite() {
        return;
    }

    let origin = pos.floor();
    let (ox, oy) = (i64::from(origin.x), i64::from(origin.y));
    let w = (region.width as f32 * scale.x).ceil() as i64;
    let h = (region.height as f32 * scale.y).ceil() as i64;

    // Footprint cells whose destination lies on the canvas.
    let (i0, i1) = ((-ox).max(0), w.min(i64::from(canvas.width()) - ox));
    let (j0, j1) = ((-oy).max(0), h.min(i64::from(canvas.height()) - oy));

    for j in j0..j1 {
        let dy = (oy + j) as i32;
        let sy = (j as f32 / scale.y) as i32;
        for i in i0..i1 {
            let sx = (i as f32 / scale.x) as i32;
            if let Some(p) = sample(sprite, region, sx, sy) {
                canvas.blend((ox + i) as i32, dy, p.tinted(opts.tint), mode);
            }
        }
    }
}

/// Copies `sprite` rotated by `angle` radians around `pivot`.
///
/// `pivot` is in region-local source pixels and lands on `pos` in the
/// destination. Each destination pixel centre is rotated back by `-angle`,
/// divided by the scale and sampled nearest-neighbour.
pub fn blit_rotated(
    canvas: &mut Canvas,
    mode: DrawingMode,
    pos: Vec2,
    sprite: &Sprite,
    angle: f32,
    pivot: Vec2,
    opts: &BlitOptions,
) {
    let Some((region, scale)) = opts.resolve(sprite) else {
        return;
    };
    if !pos.is_finite() || !pivot.is_finite() || !angle.is_finite() {
        return;
    }

    let (rw, rh) = (region.width as f32, region.height as f32);
    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(rw, 0.0),
        Vec2::new(0.0, rh),
        Vec2::new(rw, rh),
    ]
    .map(|c| (c - pivot).scale(scale).rotated(angle) + pos);

    let (mut lo, mut hi) = (corners[0], corners[0]);
    for c in &corners[1..] {
        lo = Vec2::new(lo.x.min(c.x), lo.y.min(c.y));
        hi = Vec2::new(hi.x.max(c.x), hi.y.max(c.y));
    }

    let x0 = (lo.x.floor() as i32).max(0);
    let y0 = (lo.y.floor() as i32).max(0);
    let x1 = (hi.x.ceil() as i32).min(canvas.width() as i32);
    let y1 = (hi.y.ceil() as i32).min(canvas.height() as i32);

    for y in y0..y1 {
        for x in x0..x1 {
            let rel = (Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - pos).rotated(-angle);
            let src = Vec2::new(rel.x / scale.x, rel.y / scale.y) + pivot;
            if src.x < 0.0 || src.y < 0.0 {
                continue;
            }
            let cell = src.floor();
            if let Some(p) = sample(sprite, region, cell.x, cell.y) {
                canvas.blend(x, y, p.tinted(opts.tint), mode);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Size;
    use crate::paint::{BLANK, BLUE, GREEN, RED, YELLOW};
    use std::f32::consts::FRAC_PI_2;

    /// 2x2 sprite: RED GREEN / BLUE YELLOW.
    fn quad() -> Sprite {
        Sprite::from_pixels(Size::new(2, 2), vec![RED, GREEN, BLUE, YELLOW]).unwrap()
    }

    /// 4x4 sprite whose pixel at (x, y) has r = x, g = y.
    fn ramp() -> Sprite {
        let mut s = Sprite::new(Size::new(4, 4));
        for y in 0..4 {
            for x in 0..4 {
                s.set(x, y, Pixel::rgb(x as u8, y as u8, 0));
            }
        }
        s
    }

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(Size::new(w, h))
    }

    // ── plain ────────────────────────────────────────────────────────────

    #[test]
    fn copies_at_position() {
        let mut c = canvas(5, 5);
        blit(&mut c, DrawingMode::NoAlpha, Vec2::new(2.0, 1.0), &quad(), &BlitOptions::new());
        assert_eq!(c.get(2, 1), Some(RED));
        assert_eq!(c.get(3, 1), Some(GREEN));
        assert_eq!(c.get(2, 2), Some(BLUE));
        assert_eq!(c.get(3, 2), Some(YELLOW));
        assert_eq!(c.get(4, 1), Some(BLANK));
        assert_eq!(c.get(1, 1), Some(BLANK));
    }

    #[test]
    fn integer_scale_repeats_pixels() {
        let mut c = canvas(8, 8);
        let opts = BlitOptions::new().with_scale(Vec2::splat(2.0));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &quad(), &opts);
        for (x, y, p) in [(0, 0, RED), (1, 1, RED), (2, 0, GREEN), (3, 1, GREEN), (0, 3, BLUE), (3, 3, YELLOW)] {
            assert_eq!(c.get(x, y), Some(p), "({x},{y})");
        }
        assert_eq!(c.get(4, 0), Some(BLANK));
        assert_eq!(c.get(0, 4), Some(BLANK));
    }

    #[test]
    fn fractional_scale_shrinks() {
        let mut c = canvas(8, 8);
        let opts = BlitOptions::new().with_scale(Vec2::splat(0.5));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &ramp(), &opts);
        // Footprint 2x2, sampling source cells 0 and 2.
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(0, 0, 0)));
        assert_eq!(c.get(1, 1), Some(Pixel::rgb(2, 2, 0)));
        assert_eq!(c.get(2, 0), Some(BLANK));
    }

    #[test]
    fn tint_multiplies() {
        let mut c = canvas(2, 2);
        let s = Sprite::from_pixels(Size::new(1, 1), vec![Pixel::rgb(200, 100, 255)]).unwrap();
        let opts = BlitOptions::new().with_tint(Pixel::rgb(128, 255, 0));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &s, &opts);
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(100, 100, 0)));
    }

    #[test]
    fn draws_through_drawing_mode() {
        let mut c = canvas(2, 1);
        c.fill(BLUE);
        let s = Sprite::from_pixels(Size::new(2, 1), vec![RED.with_alpha(100), RED]).unwrap();
        blit(&mut c, DrawingMode::Mask, Vec2::zero(), &s, &BlitOptions::new());
        assert_eq!(c.get(0, 0), Some(BLUE));
        assert_eq!(c.get(1, 0), Some(RED));
    }

    #[test]
    fn clipped_at_canvas_edges() {
        let mut c = canvas(3, 3);
        blit(&mut c, DrawingMode::NoAlpha, Vec2::new(-1.0, 2.0), &quad(), &BlitOptions::new());
        assert_eq!(c.get(0, 2), Some(GREEN));
        assert_eq!(c.pixels().iter().filter(|&&p| p != BLANK).count(), 1);
    }

    #[test]
    fn noop_cases() {
        let mut c = canvas(4, 4);
        let before = c.clone();
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &Sprite::empty(), &BlitOptions::new());
        for scale in [Vec2::new(0.0, 1.0), Vec2::new(1.0, -2.0), Vec2::new(f32::NAN, 1.0)] {
            let opts = BlitOptions::new().with_scale(scale);
            blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &quad(), &opts);
        }
        let opts = BlitOptions::new().with_region(Region::new(0, 0, 0, 2));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &quad(), &opts);
        assert_eq!(c, before);
    }

    // ── partial ──────────────────────────────────────────────────────────

    #[test]
    fn region_selects_sub_rectangle() {
        let mut c = canvas(4, 4);
        let opts = BlitOptions::new().with_region(Region::new(1, 2, 2, 1));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &ramp(), &opts);
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(1, 2, 0)));
        assert_eq!(c.get(1, 0), Some(Pixel::rgb(2, 2, 0)));
        assert_eq!(c.pixels().iter().filter(|&&p| p != BLANK).count(), 2);
    }

    #[test]
    fn region_past_source_edge_skips_samples() {
        let mut c = canvas(8, 8);
        let opts = BlitOptions::new().with_region(Region::new(3, 3, 4, 4));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &ramp(), &opts);
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(3, 3, 0)));
        assert_eq!(c.pixels().iter().filter(|&&p| p != BLANK).count(), 1);
    }

    // ── rotated ──────────────────────────────────────────────────────────

    #[test]
    fn zero_angle_matches_plain_blit() {
        let mut a = canvas(8, 8);
        let mut b = canvas(8, 8);
        let opts = BlitOptions::new().with_scale(Vec2::splat(2.0));
        blit(&mut a, DrawingMode::NoAlpha, Vec2::new(1.0, 2.0), &ramp(), &opts);
        blit_rotated(&mut b, DrawingMode::NoAlpha, Vec2::new(1.0, 2.0), &ramp(), 0.0, Vec2::zero(), &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn quarter_turn_about_centre() {
        let mut c = canvas(2, 2);
        blit_rotated(
            &mut c,
            DrawingMode::NoAlpha,
            Vec2::splat(1.0),
            &quad(),
            FRAC_PI_2,
            Vec2::splat(1.0),
            &BlitOptions::new(),
        );
        // +Y is down, so a positive angle turns clockwise on screen.
        assert_eq!(c.get(0, 0), Some(BLUE));
        assert_eq!(c.get(1, 0), Some(RED));
        assert_eq!(c.get(1, 1), Some(GREEN));
        assert_eq!(c.get(0, 1), Some(YELLOW));
    }

    #[test]
    fn rotated_region_is_respected() {
        let mut c = canvas(4, 4);
        let opts = BlitOptions::new().with_region(Region::new(2, 2, 1, 1));
        blit_rotated(&mut c, DrawingMode::NoAlpha, Vec2::new(1.0, 1.0), &ramp(), 0.0, Vec2::zero(), &opts);
        assert_eq!(c.get(1, 1), Some(Pixel::rgb(2, 2, 0)));
        assert_eq!(c.pixels().iter().filter(|&&p| p != BLANK).count(), 1);
    }

    #[test]
    fn rotated_empty_sprite_is_noop() {
        let mut c = canvas(4, 4);
        let before = c.clone();
        blit_rotated(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &Sprite::empty(), 1.0, Vec2::zero(), &BlitOptions::new());
        assert_eq!(c, before);
    }

    // ── extreme positions ────────────────────────────────────────────────

    #[test]
    fn far_away_position_draws_nothing() {
        let mut c = canvas(4, 4);
        let opts = BlitOptions::new();
        for pos in [
            Vec2::new(3.0e9, 0.0),
            Vec2::new(-3.0e9, 0.0),
            Vec2::new(0.0, 3.0e9),
            Vec2::new(f32::NAN, 1.0),
        ] {
            blit(&mut c, DrawingMode::NoAlpha, pos, &quad(), &opts);
        }
        assert!(c.pixels().iter().all(|&p| p == BLANK));
    }

    #[test]
    fn region_offset_past_i32_draws_nothing() {
        let mut c = canvas(4, 4);
        let opts = BlitOptions::new().with_region(Region::new(i32::MAX as u32, 0, 2, 1));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::zero(), &quad(), &opts);
        assert!(c.pixels().iter().all(|&p| p == BLANK));
    }

    #[test]
    fn huge_scale_is_clipped_to_canvas() {
        let mut c = canvas(4, 4);
        let opts = BlitOptions::new().with_scale(Vec2::splat(1.0e9));
        blit(&mut c, DrawingMode::NoAlpha, Vec2::new(-2.0, -2.0), &quad(), &opts);
        assert!(c.pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn partially_left_of_canvas_keeps_visible_cells() {
        let mut c = canvas(4, 4);
        blit(&mut c, DrawingMode::NoAlpha, Vec2::new(-1.0, -1.0), &quad(), &BlitOptions::new());
        assert_eq!(c.get(0, 0), Some(YELLOW));
        assert_eq!(c.get(1, 0), Some(BLANK));
    }
}
