use crate::canvas::Canvas;
use crate::coords::IVec2;
use crate::paint::{DrawingMode, Pixel};

use super::draw_line;

/// Draws the three edges of a triangle.
pub fn draw_triangle(
    canvas: &mut Canvas,
    mode: DrawingMode,
    p1: IVec2,
    p2: IVec2,
    p3: IVec2,
    color: Pixel,
) {
    draw_line(canvas, mode, p1, p2, color);
    draw_line(canvas, mode, p2, p3, color);
    draw_line(canvas, mode, p3, p1, color);
}

/// Integer DDA state for one triangle edge.
///
/// Steep edges swap their deltas so that the walk always advances the
/// major axis by one per step. Coordinates are widened to `i64`.
struct Edge {
    dx: i64,
    dy: i64,
    sign: i64,
    steep: bool,
    err: i64,
}

impl Edge {
    fn new(from: IVec2, to: IVec2) -> Self {
        let (mut dx, sign) = {
            let d = i64::from(to.x) - i64::from(from.x);
            if d < 0 { (-d, -1) } else { (d, 1) }
        };
        let mut dy = i64::from(to.y) - i64::from(from.y);
        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut dx, &mut dy);
        }
        Self { dx, dy, sign, steep, err: dx >> 1 }
    }

    /// A shallow edge whose error term never reaches `dx`.
    ///
    /// Only unsorted vertices produce one (`p3` above `p1`, or level with it
    /// and to the side). Walking it never yields a row break.
    fn never_breaks(&self) -> bool {
        !self.steep && (self.dy < 0 || (self.dy == 0 && self.dx > 0))
    }

    /// Advances `x` along the long edge for one scanline.
    ///
    /// Shallow edges move `x` in place until the error term wraps; steep
    /// edges leave it and return the sub-step to apply once the row is
    /// emitted. With `stop_at_target` the walk also ends when `x` reaches
    /// `target_x`. An edge that never breaks stops at `target_x`, or at once
    /// if `x` is already past it.
    fn advance(&mut self, x: &mut i64, target_x: i64, stop_at_target: bool) -> i64 {
        let runaway = self.never_breaks();
        let mut sub = 0;
        'walk: loop {
            if stop_at_target && *x == target_x {
                break;
            }
            if runaway && (target_x - *x) * self.sign <= 0 {
                break;
            }
            self.err += self.dy;
            while self.err >= self.dx {
                self.err -= self.dx;
                if self.steep {
                    sub = self.sign;
                } else {
                    break 'walk;
                }
            }
            if self.steep {
                break;
            }
            *x += self.sign;
        }
        sub
    }
}

/// Writes the closed span `[a, b]` on row `y`, dropping rows outside `i32`.
fn span(canvas: &mut Canvas, mode: DrawingMode, a: i64, b: i64, y: i64, color: Pixel) {
    let Ok(y) = i32::try_from(y) else {
        return;
    };
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    canvas.span(clamp(a), clamp(b), y, color, mode);
}

/// Fills a triangle by walking two edges one scanline at a time.
///
/// Vertices are consumed in the order given: rows are produced from `p1.y`
/// downwards, first along the edge `p1 -> p2`, then along `p2 -> p3`, with
/// `p1 -> p3` as the opposite side. Input sorted by ascending `y` covers the
/// full triangle. Other orders produce order-dependent rows; a long edge that
/// would otherwise walk forever stops at `p3.x`.
pub fn fill_triangle(
    canvas: &mut Canvas,
    mode: DrawingMode,
    p1: IVec2,
    p2: IVec2,
    p3: IVec2,
    color: Pixel,
) {
    let target = i64::from(p3.x);
    let mut y = i64::from(p1.y);
    let mut t1x = i64::from(p1.x);
    let mut t2x = t1x;

    let mut long = Edge::new(p1, p3);

    // Upper half: p1 -> p2.
    if p1.y != p2.y {
        let mut e = Edge::new(p1, p2);
        let mut i = 0;
        while i < e.dx {
            let mut t1xp = 0;
            let (mut lo, mut hi) = (t1x.min(t2x), t1x.max(t2x));

            'walk: while i < e.dx {
                i += 1;
                e.err += e.dy;
                while e.err >= e.dx {
                    e.err -= e.dx;
                    if e.steep {
                        t1xp = e.sign;
                    } else {
                        break 'walk;
                    }
                }
                if e.steep {
                    break;
                }
                t1x += e.sign;
            }
            let t2xp = long.advance(&mut t2x, target, false);

            lo = lo.min(t1x).min(t2x);
            hi = hi.max(t1x).max(t2x);
            span(canvas, mode, lo, hi, y, color);

            if !e.steep {
                t1x += e.sign;
            }
            t1x += t1xp;
            if !long.steep {
                t2x += long.sign;
            }
            t2x += t2xp;

            y += 1;
            if y == i64::from(p2.y) {
                break;
            }
        }
    }

    // Lower half: p2 -> p3.
    let mut e = Edge::new(p2, p3);
    t1x = i64::from(p2.x);
    let mut i = 0;
    while i <= e.dx {
        let mut t1xp = 0;
        let (mut lo, mut hi) = (t1x.min(t2x), t1x.max(t2x));

        while i < e.dx {
            e.err += e.dy;
            if e.err >= e.dx {
                e.err -= e.dx;
                if e.steep {
                    t1xp = e.sign;
                }
                break;
            }
            if e.steep {
                break;
            }
            t1x += e.sign;
            i += 1;
        }
        let t2xp = long.advance(&mut t2x, target, true);

        lo = lo.min(t1x).min(t2x);
        hi = hi.max(t1x).max(t2x);
        span(canvas, mode, lo, hi, y, color);

        if !e.steep {
            t1x += e.sign;
        }
        t1x += t1xp;
        if !long.steep {
            t2x += long.sign;
        }
        t2x += t2xp;

        y += 1;
        if y > i64::from(p3.y) {
            return;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{BLANK, WHITE};
    use crate::raster::testing::{canvas, painted};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    fn filled(a: IVec2, b: IVec2, c: IVec2) -> std::collections::BTreeSet<(i32, i32)> {
        let mut cv = canvas(128, 128);
        fill_triangle(&mut cv, DrawingMode::NoAlpha, a, b, c, WHITE);
        painted(&cv)
    }

    #[test]
    fn right_triangle_cell_count() {
        assert_eq!(filled(p(0, 0), p(0, 10), p(10, 10)).len(), 66);
    }

    #[test]
    fn isoceles_cell_count() {
        assert_eq!(filled(p(5, 0), p(0, 8), p(10, 8)).len(), 55);
    }

    #[test]
    fn small_corner_triangle() {
        let cells: Vec<_> = filled(p(0, 0), p(2, 0), p(0, 2)).into_iter().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn degenerate_triangles() {
        let one: Vec<_> = filled(p(3, 3), p(3, 3), p(3, 3)).into_iter().collect();
        assert_eq!(one, vec![(3, 3)]);
        assert_eq!(filled(p(0, 5), p(4, 5), p(9, 5)).len(), 10);
    }

    #[test]
    fn sorted_input_stays_in_bounds_and_hits_vertices() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut v: Vec<IVec2> = (0..3)
                .map(|_| p(rng.random_range(20..100), rng.random_range(20..100)))
                .collect();
            v.sort_by_key(|q| q.y);

            let cells = filled(v[0], v[1], v[2]);
            let (x0, x1) = (v.iter().map(|q| q.x).min().unwrap(), v.iter().map(|q| q.x).max().unwrap());
            let (y0, y1) = (v[0].y, v[2].y);
            for &(x, y) in &cells {
                assert!((x0..=x1).contains(&x) && (y0..=y1).contains(&y), "{v:?} ({x},{y})");
            }
            for q in &v {
                assert!(cells.contains(&(q.x, q.y)), "{v:?} missing {q:?}");
            }
        }
    }

    // ── unsorted vertices ────────────────────────────────────────────────

    #[test]
    fn unsorted_input_follows_edge_walk() {
        // p3 sits above p2, so the long edge p1 -> p3 keeps walking past
        // p3.x in the upper half and the rows narrow again at the bottom.
        let cells = filled(p(44, 28), p(104, 75), p(52, 60));
        assert_eq!(cells.len(), 1210);

        let row = |y: i32| {
            let xs: Vec<i32> = cells.iter().filter(|c| c.1 == y).map(|c| c.0).collect();
            (*xs.iter().min().unwrap(), *xs.iter().max().unwrap(), xs.len())
        };
        assert_eq!(row(28), (44, 44, 1));
        assert_eq!(row(40), (47, 59, 13));
        assert_eq!(row(61), (52, 86, 35));
        assert_eq!(row(62), (53, 88, 36));
        assert_eq!(row(74), (56, 103, 48));
        assert_eq!(row(75), (52, 104, 53));
        assert!(cells.iter().all(|&(_, y)| (28..=75).contains(&y)));
    }

    #[test]
    fn unsorted_input_terminates() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cv = canvas(64, 64);
        for _ in 0..2000 {
            let a = p(rng.random_range(-40..100), rng.random_range(-40..100));
            let b = p(rng.random_range(-40..100), rng.random_range(-40..100));
            let c = p(rng.random_range(-40..100), rng.random_range(-40..100));
            fill_triangle(&mut cv, DrawingMode::NoAlpha, a, b, c, WHITE);
        }
    }

    #[test]
    fn outline_touches_every_vertex() {
        let mut cv = canvas(32, 32);
        let (a, b, c) = (p(2, 3), p(28, 9), p(12, 30));
        draw_triangle(&mut cv, DrawingMode::NoAlpha, a, b, c, WHITE);
        for q in [a, b, c] {
            assert_eq!(cv.get(q.x, q.y), Some(WHITE));
        }
        // Centroid stays untouched.
        assert_eq!(cv.get(14, 14), Some(BLANK));
    }

    // ── extreme coordinates ──────────────────────────────────────────────

    #[test]
    fn vertices_near_i32_limits_do_not_overflow() {
        let mut cv = canvas(16, 16);
        let m = i32::MAX;
        fill_triangle(&mut cv, DrawingMode::NoAlpha, p(m - 3, m - 4), p(m, m - 2), p(m - 1, m), WHITE);
        fill_triangle(&mut cv, DrawingMode::NoAlpha, p(m, 0), p(m - 2, 3), p(m, 6), WHITE);
        let n = i32::MIN;
        fill_triangle(&mut cv, DrawingMode::NoAlpha, p(n + 2, n), p(n, n + 2), p(n + 1, n + 5), WHITE);
        assert!(painted(&cv).is_empty());
    }

    #[test]
    fn rows_off_canvas_are_skipped_not_wrapped() {
        let mut cv = canvas(16, 16);
        fill_triangle(&mut cv, DrawingMode::NoAlpha, p(2, -3), p(2, 4), p(9, 4), WHITE);
        let cells = painted(&cv);
        assert!(cells.iter().all(|&(x, y)| (2..=9).contains(&x) && (0..=4).contains(&y)));
        assert!(cells.contains(&(9, 4)));
    }
}
