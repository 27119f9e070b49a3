use crate::canvas::Canvas;
use crate::coords::IVec2;
use crate::paint::{DrawingMode, Pixel};

/// Draws the closed segment `a`–`b` with Bresenham's decision variable.
///
/// Axis-aligned segments are filled directly. Otherwise the longer axis
/// drives; the walk always starts from the endpoint with the smaller driving
/// coordinate, so `a→b` and `b→a` select the same cells.
///
/// Deltas are taken in `i64`, so endpoints anywhere in `i32` are accepted.
/// Only the part of the driving axis that lies on the canvas is walked.
pub fn draw_line(canvas: &mut Canvas, mode: DrawingMode, a: IVec2, b: IVec2, color: Pixel) {
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    if w == 0 || h == 0 {
        return;
    }

    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);

    if dx == 0 {
        let lo = i64::from(a.y.min(b.y)).max(0);
        let hi = i64::from(a.y.max(b.y)).min(h - 1);
        for y in lo..=hi {
            canvas.blend(a.x, y as i32, color, mode);
        }
        return;
    }

    if dy == 0 {
        canvas.span(a.x, b.x, a.y, color, mode);
        return;
    }

    let dx1 = dx.abs();
    let dy1 = dy.abs();
    // Secondary axis moves in the same direction as the primary when the
    // deltas share a sign.
    let step = if (dx < 0) == (dy < 0) { 1 } else { -1 };

    if dy1 <= dx1 {
        let (x0, y0) = if dx >= 0 { (a.x, a.y) } else { (b.x, b.y) };
        let walk = Walk {
            start: i64::from(x0),
            long: dx1,
            short: dy1,
            advance_on_tie: true,
        };
        walk.run(w, |x, n| {
            let y = i64::from(y0) + step * n;
            if (0..h).contains(&y) {
                canvas.blend(x as i32, y as i32, color, mode);
            }
        });
    } else {
        let (x0, y0) = if dy >= 0 { (a.x, a.y) } else { (b.x, b.y) };
        let walk = Walk {
            start: i64::from(y0),
            long: dy1,
            short: dx1,
            advance_on_tie: false,
        };
        walk.run(h, |y, n| {
            let x = i64::from(x0) + step * n;
            if (0..w).contains(&x) {
                canvas.blend(x as i32, y as i32, color, mode);
            }
        });
    }
}

/// One Bresenham walk along the driving axis.
///
/// Step `k` sits at driving coordinate `start + k`, `k` in `0..=long`.
/// Before step `k + 1` the decision variable is
/// `p = 2·short·(k+1) − long − 2·long·n`, with `n` the secondary advances so
/// far; the secondary axis advances when `p >= 0` (shallow lines) or `p > 0`
/// (steep lines).
struct Walk {
    start: i64,
    long: i64,
    short: i64,
    advance_on_tie: bool,
}

impl Walk {
    /// Secondary advances made in the first `k` steps.
    fn advances(&self, k: i64) -> i64 {
        let bias = if self.advance_on_tie { self.long } else { self.long - 1 };
        let num = 2 * i128::from(self.short) * i128::from(k) + i128::from(bias);
        num.div_euclid(2 * i128::from(self.long)) as i64
    }

    /// Calls `plot(driving, advances)` for every step whose driving
    /// coordinate lies in `[0, limit)`.
    fn run(&self, limit: i64, mut plot: impl FnMut(i64, i64)) {
        let first = (-self.start).max(0);
        let last = (limit - 1 - self.start).min(self.long);
        if first > last {
            return;
        }

        // Seed the decision variable at `first` so steps left of the canvas
        // are skipped without changing which cells are chosen.
        let mut n = self.advances(first);
        let seed = 2 * i128::from(self.short) * i128::from(first + 1)
            - i128::from(self.long)
            - 2 * i128::from(self.long) * i128::from(n);
        let mut p = seed as i64;

        for k in first..=last {
            plot(self.start + k, n);
            let advance = if self.advance_on_tie { p >= 0 } else { p > 0 };
            if advance {
                n += 1;
                p += 2 * (self.short - self.long);
            } else {
                p += 2 * self.short;
            }
        }
    }
}
