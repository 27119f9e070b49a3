use crate::canvas::Canvas;
use crate::coords::Vec2;
use crate::paint::{DrawingMode, Pixel, WHITE};

use super::{Region, Sprite};

/// Destination quad for a warped blit.
///
/// Corners are ordered top-left, bottom-left, bottom-right, top-right in
/// source terms; `uv` gives the normalised source coordinate at each corner
/// and `w` the per-corner weight used for the perspective-style divide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WarpQuad {
    pub pos: [Vec2; 4],
    pub uv: [Vec2; 4],
    pub w: [f32; 4],
    pub tint: Pixel,
}

impl Default for WarpQuad {
    fn default() -> Self {
        Self::new([Vec2::zero(); 4])
    }
}

impl WarpQuad {
    pub fn new(pos: [Vec2; 4]) -> Self {
        Self {
            pos,
            uv: [
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
            ],
            w: [1.0; 4],
            tint: WHITE,
        }
    }

    pub fn with_uv(mut self, uv: [Vec2; 4]) -> Self {
        self.uv = uv;
        self
    }

    pub fn with_weights(mut self, w: [f32; 4]) -> Self {
        self.w = w;
        self
    }

    pub fn with_tint(mut self, tint: Pixel) -> Self {
        self.tint = tint;
        self
    }

    fn is_finite(&self) -> bool {
        self.pos.iter().chain(&self.uv).all(|v| v.is_finite())
            && self.w.iter().all(|w| w.is_finite())
    }

    /// Interpolated source UV at `p`, or `None` if `p` is outside the quad.
    fn uv_at(&self, p: Vec2) -> Option<Vec2> {
        const TRIS: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

        for [a, b, c] in TRIS {
            let Some([l0, l1, l2]) = barycentric(self.pos[a], self.pos[b], self.pos[c], p) else {
                continue;
            };
            let q = l0 * self.w[a] + l1 * self.w[b] + l2 * self.w[c];
            if q <= 0.0 {
                return None;
            }
            let uvw = self.uv[a] * (l0 * self.w[a])
                + self.uv[b] * (l1 * self.w[b])
                + self.uv[c] * (l2 * self.w[c]);
            return Some(uvw / q);
        }
        None
    }
}

/// Signed doubled area of `(a, b, p)`.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Barycentric weights of `p` in triangle `abc`, or `None` if `p` is outside
/// or the triangle has no area. Points on an edge count as inside.
fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<[f32; 3]> {
    let area = edge(a, b, c);
    if area == 0.0 {
        return None;
    }
    let l0 = edge(b, c, p) / area;
    let l1 = edge(c, a, p) / area;
    let l2 = edge(a, b, p) / area;
    (l0 >= 0.0 && l1 >= 0.0 && l2 >= 0.0).then_some([l0, l1, l2])
}

/// Maps `sprite` (or `region` of it) onto an arbitrary quad.
///
/// The quad is split into triangles `(0,1,2)` and `(0,2,3)`. Every pixel
/// centre inside either triangle takes the UV interpolated from `uv * w`
/// divided by the interpolated `w`, and samples nearest-neighbour. Pixels
/// on the shared diagonal are drawn once. Degenerate quads draw nothing.
pub fn blit_warped(
    canvas: &mut Canvas,
    mode: DrawingMode,
    sprite: &Sprite,
    quad: &WarpQuad,
    region: Option<Region>,
) {
    let region = region.unwrap_or(Region::full(sprite.size()));
    if sprite.is_empty() || region.is_empty() || !quad.is_finite() {
        return;
    }

    let (mut lo, mut hi) = (quad.pos[0], quad.pos[0]);
    for p in &quad.pos[1..] {
        lo = Vec2::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = Vec2::new(hi.x.max(p.x), hi.y.max(p.y));
    }

    let x0 = (lo.x.floor() as i32).max(0);
    let y0 = (lo.y.floor() as i32).max(0);
    let x1 = (hi.x.ceil() as i32).min(canvas.width() as i32);
    let y1 = (hi.y.ceil() as i32).min(canvas.height() as i32);

    let (rw, rh) = (region.width as f32, region.height as f32);
    let max_x = i32::try_from(region.width).unwrap_or(i32::MAX) - 1;
    let max_y = i32::try_from(region.height).unwrap_or(i32::MAX) - 1;

    for y in y0..y1 {
        for x in x0..x1 {
            let Some(uv) = quad.uv_at(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)) else {
                continue;
            };
            if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
                continue;
            }
            let sx = ((uv.x * rw) as i32).min(max_x);
            let sy = ((uv.y * rh) as i32).min(max_y);
            if let Some(p) = region.source(sx, sy).and_then(|(sx, sy)| sprite.get(sx, sy)) {
                canvas.blend(x, y, p.tinted(quad.tint), mode);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Size;
    use crate::paint::{BLANK, BLUE, GREEN, RED, YELLOW};

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn ramp() -> Sprite {
        let mut s = Sprite::new(Size::new(4, 4));
        for y in 0..4 {
            for x in 0..4 {
                s.set(x, y, Pixel::rgb(x as u8, y as u8, 0));
            }
        }
        s
    }

    fn painted(c: &Canvas) -> usize {
        c.pixels().iter().filter(|&&p| p != BLANK).count()
    }

    // ── geometry ─────────────────────────────────────────────────────────

    #[test]
    fn barycentric_inside_and_outside() {
        let (a, b, c) = (v(0.0, 0.0), v(0.0, 4.0), v(4.0, 4.0));
        let l = barycentric(a, b, c, v(1.0, 3.0)).unwrap();
        assert!((l.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!(barycentric(a, b, c, v(3.0, 1.0)).is_none());
        assert!(barycentric(a, a, c, v(0.0, 0.0)).is_none());
    }

    // ── blits ────────────────────────────────────────────────────────────

    #[test]
    fn axis_aligned_quad_is_a_copy() {
        let mut c = Canvas::new(Size::new(6, 6));
        let quad = WarpQuad::new([v(1.0, 1.0), v(1.0, 5.0), v(5.0, 5.0), v(5.0, 1.0)]);
        blit_warped(&mut c, DrawingMode::NoAlpha, &ramp(), &quad, None);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(c.get(x + 1, y + 1), Some(Pixel::rgb(x as u8, y as u8, 0)), "({x},{y})");
            }
        }
        assert_eq!(painted(&c), 16);
    }

    #[test]
    fn doubled_quad_scales_up() {
        let s = Sprite::from_pixels(Size::new(2, 2), vec![RED, GREEN, BLUE, YELLOW]).unwrap();
        let mut c = Canvas::new(Size::new(4, 4));
        let quad = WarpQuad::new([v(0.0, 0.0), v(0.0, 4.0), v(4.0, 4.0), v(4.0, 0.0)]);
        blit_warped(&mut c, DrawingMode::NoAlpha, &s, &quad, None);
        assert_eq!(c.get(1, 1), Some(RED));
        assert_eq!(c.get(2, 1), Some(GREEN));
        assert_eq!(c.get(1, 2), Some(BLUE));
        assert_eq!(c.get(3, 3), Some(YELLOW));
    }

    #[test]
    fn swapped_uv_mirrors() {
        let s = Sprite::from_pixels(Size::new(2, 1), vec![RED, GREEN]).unwrap();
        let mut c = Canvas::new(Size::new(2, 1));
        let quad = WarpQuad::new([v(0.0, 0.0), v(0.0, 1.0), v(2.0, 1.0), v(2.0, 0.0)])
            .with_uv([v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(0.0, 0.0)]);
        blit_warped(&mut c, DrawingMode::NoAlpha, &s, &quad, None);
        assert_eq!(c.get(0, 0), Some(GREEN));
        assert_eq!(c.get(1, 0), Some(RED));
    }

    #[test]
    fn shared_diagonal_is_drawn_once() {
        let s = Sprite::from_pixels(Size::new(1, 1), vec![RED.with_alpha(128)]).unwrap();
        let mut once = Canvas::new(Size::new(4, 4));
        once.fill(BLUE);
        let mut plain = once.clone();

        let quad = WarpQuad::new([v(0.0, 0.0), v(0.0, 4.0), v(4.0, 4.0), v(4.0, 0.0)]);
        blit_warped(&mut once, DrawingMode::FullAlpha, &s, &quad, None);
        plain.blend(0, 0, RED.with_alpha(128), DrawingMode::FullAlpha);

        // Diagonal cell (0,0) centre lies on the split; it must match a single blend.
        assert_eq!(once.get(0, 0), plain.get(0, 0));
        assert_eq!(once.get(2, 2), plain.get(0, 0));
    }

    #[test]
    fn region_limits_sampling() {
        let mut c = Canvas::new(Size::new(2, 2));
        let quad = WarpQuad::new([v(0.0, 0.0), v(0.0, 2.0), v(2.0, 2.0), v(2.0, 0.0)]);
        blit_warped(&mut c, DrawingMode::NoAlpha, &ramp(), &quad, Some(Region::new(2, 1, 2, 2)));
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(2, 1, 0)));
        assert_eq!(c.get(1, 1), Some(Pixel::rgb(3, 2, 0)));
    }

    #[test]
    fn tint_applies() {
        let s = Sprite::from_pixels(Size::new(1, 1), vec![Pixel::rgb(200, 100, 255)]).unwrap();
        let mut c = Canvas::new(Size::new(1, 1));
        let quad = WarpQuad::new([v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0)])
            .with_tint(Pixel::rgb(128, 255, 0));
        blit_warped(&mut c, DrawingMode::NoAlpha, &s, &quad, None);
        assert_eq!(c.get(0, 0), Some(Pixel::rgb(100, 100, 0)));
    }

    #[test]
    fn degenerate_quads_draw_nothing() {
        let mut c = Canvas::new(Size::new(8, 8));
        let flat = WarpQuad::new([v(0.0, 2.0), v(3.0, 2.0), v(6.0, 2.0), v(7.0, 2.0)]);
        let point = WarpQuad::new([v(3.0, 3.0); 4]);
        let nan = WarpQuad::new([v(f32::NAN, 0.0), v(0.0, 4.0), v(4.0, 4.0), v(4.0, 0.0)]);
        for q in [flat, point, nan] {
            blit_warped(&mut c, DrawingMode::NoAlpha, &ramp(), &q, None);
        }
        blit_warped(&mut c, DrawingMode::NoAlpha, &Sprite::empty(), &WarpQuad::default(), None);
        assert_eq!(painted(&c), 0);
    }

    #[test]
    fn weights_shift_interpolation() {
        // Heavier weight on the right edge pulls the middle sample to the right.
        let s = Sprite::from_pixels(Size::new(2, 1), vec![RED, GREEN]).unwrap();
        let pos = [v(0.0, 0.0), v(0.0, 1.0), v(4.0, 1.0), v(4.0, 0.0)];

        let mut even = Canvas::new(Size::new(4, 1));
        blit_warped(&mut even, DrawingMode::NoAlpha, &s, &WarpQuad::new(pos), None);
        assert_eq!(even.get(1, 0), Some(RED));

        let mut skewed = Canvas::new(Size::new(4, 1));
        let quad = WarpQuad::new(pos).with_weights([1.0, 1.0, 4.0, 4.0]);
        blit_warped(&mut skewed, DrawingMode::NoAlpha, &s, &quad, None);
        assert_eq!(skewed.get(1, 0), Some(GREEN));
    }
}
