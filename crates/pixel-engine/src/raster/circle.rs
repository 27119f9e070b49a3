use crate::canvas::Canvas;
use crate::coords::IVec2;
use crate::paint::{DrawingMode, Pixel};

/// Midpoint circle walk over one octant.
///
/// Calls `visit(x, y)` for each step with `x` increasing from 0 and `y`
/// decreasing from `radius` while `y >= x`. Stops early once `x` passes
/// `reach`; callers pass the distance beyond which every mirrored cell is
/// off the canvas.
fn walk_octant(radius: u32, reach: i64, mut visit: impl FnMut(i64, i64)) {
    let r = i64::from(radius);
    let mut x = 0i64;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while y >= x && x <= reach {
        visit(x, y);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Largest distance from `c` to any cell in `0..len`.
fn reach(c: i32, len: u32) -> i64 {
    let c = i64::from(c);
    c.abs().max((i64::from(len) - 1 - c).abs())
}

/// Narrows an `i64` coordinate to `i32`, keeping off-canvas values off-canvas.
#[inline]
fn narrow(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Draws a circle outline using 8-way symmetry. Radius 0 draws nothing.
pub fn draw_circle(canvas: &mut Canvas, mode: DrawingMode, center: IVec2, radius: u32, color: Pixel) {
    if radius == 0 || canvas.is_empty() {
        return;
    }

    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    // Every mirrored point has one coordinate offset by x, so once x is out
    // of reach on either axis the rest of the octant is off the canvas.
    let limit = reach(center.x, canvas.width()).min(reach(center.y, canvas.height()));
    walk_octant(radius, limit, |x, y| {
        for (px, py) in [
            (cx + x, cy - y),
            (cx + y, cy - x),
            (cx + y, cy + x),
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx - y, cy + x),
            (cx - y, cy - x),
            (cx - x, cy - y),
        ] {
            canvas.blend(narrow(px), narrow(py), color, mode);
        }
    });
}

/// Fills a disc with four closed scanlines per midpoint step. Radius 0 draws nothing.
///
/// Rows near the cardinal points are visited more than once; under
/// `FullAlpha` those rows accumulate coverage.
pub fn fill_circle(canvas: &mut Canvas, mode: DrawingMode, center: IVec2, radius: u32, color: Pixel) {
    if radius == 0 || canvas.is_empty() {
        return;
    }

    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    // Spans sit on rows cy ± x and cy ± y with y >= x.
    let limit = reach(center.y, canvas.height());
    walk_octant(radius, limit, |x, y| {
        for (half, row) in [(x, cy - y), (y, cy - x), (x, cy + y), (y, cy + x)] {
            canvas.span(narrow(cx - half), narrow(cx + half), narrow(row), color, mode);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{BLANK, WHITE};
    use crate::raster::testing::{canvas, painted};

    const C: i32 = 50;

    fn outline(r: u32) -> std::collections::BTreeSet<(i32, i32)> {
        let mut c = canvas(101, 101);
        draw_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(C, C), r, WHITE);
        painted(&c)
    }

    fn disc(r: u32) -> std::collections::BTreeSet<(i32, i32)> {
        let mut c = canvas(101, 101);
        fill_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(C, C), r, WHITE);
        painted(&c)
    }

    fn dist((x, y): (i32, i32)) -> f32 {
        (((x - C) * (x - C) + (y - C) * (y - C)) as f32).sqrt()
    }

    #[test]
    fn zero_radius_is_noop() {
        assert!(outline(0).is_empty());
        assert!(disc(0).is_empty());
    }

    #[test]
    fn outline_stays_near_radius() {
        for r in 1..=40u32 {
            for p in outline(r) {
                let d = dist(p);
                assert!(d >= r as f32 - 1.0 && d <= r as f32 + 1.0, "r={r} p={p:?} d={d}");
            }
        }
    }

    #[test]
    fn fill_stays_within_radius() {
        for r in 1..=40u32 {
            for p in disc(r) {
                assert!(dist(p) <= r as f32 + 0.5, "r={r} p={p:?}");
            }
        }
    }

    #[test]
    fn fill_covers_outline() {
        for r in 1..=40u32 {
            assert!(outline(r).is_subset(&disc(r)), "r={r}");
        }
    }

    #[test]
    fn cardinal_points_are_reached() {
        let r = 12;
        let cells = outline(r);
        let r = r as i32;
        for p in [(C, C - r), (C, C + r), (C - r, C), (C + r, C)] {
            assert!(cells.contains(&p), "{p:?}");
        }
    }

    #[test]
    fn filled_disc_on_small_canvas() {
        let mut c = canvas(11, 11);
        fill_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(5, 5), 3, WHITE);
        assert_eq!(c.get(5, 5), Some(WHITE));
        assert_eq!(c.get(0, 0), Some(BLANK));
        // Row through the centre spans exactly [2, 8].
        for x in 0..11 {
            let expected = if (2..=8).contains(&x) { WHITE } else { BLANK };
            assert_eq!(c.get(x, 5), Some(expected));
        }
    }

    #[test]
    fn circle_partly_off_canvas_is_clipped() {
        let mut c = canvas(10, 10);
        fill_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(0, 0), 4, WHITE);
        assert_eq!(c.get(0, 0), Some(WHITE));
        assert_eq!(c.get(9, 9), Some(BLANK));
    }

    // ── extreme radii ────────────────────────────────────────────────────

    #[test]
    fn huge_radius_outline_misses_small_canvas() {
        let mut c = canvas(9, 9);
        draw_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(4, 4), 1 << 30, WHITE);
        draw_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(4, 4), u32::MAX, WHITE);
        assert!(painted(&c).is_empty());
    }

    #[test]
    fn huge_radius_fill_covers_canvas() {
        let mut c = canvas(9, 9);
        fill_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(4, 4), 1 << 30, WHITE);
        assert_eq!(painted(&c).len(), 81);
    }

    #[test]
    fn centre_at_i32_limit_does_not_overflow() {
        let mut c = canvas(9, 9);
        draw_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(i32::MAX, i32::MIN), 40, WHITE);
        fill_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(i32::MIN, i32::MAX), 40, WHITE);
        assert!(painted(&c).is_empty());
    }

    #[test]
    fn early_stop_keeps_partial_circle() {
        // Centre off to the left: only the right-hand arc lands on the canvas.
        let mut c = canvas(20, 20);
        draw_circle(&mut c, DrawingMode::NoAlpha, IVec2::new(-10, 10), 15, WHITE);
        let clipped = painted(&c);

        let mut big = canvas(60, 60);
        draw_circle(&mut big, DrawingMode::NoAlpha, IVec2::new(20, 40), 15, WHITE);
        let expected: std::collections::BTreeSet<_> = painted(&big)
            .into_iter()
            .map(|(x, y)| (x - 30, y - 30))
            .filter(|&(x, y)| (0..20).contains(&x) && (0..20).contains(&y))
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(clipped, expected);
    }
}
