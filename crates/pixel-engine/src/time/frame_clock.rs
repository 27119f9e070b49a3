use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds. Not clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Frames counted over the last completed one-second window.
    pub fps: u32,

    /// True on the tick that completed a one-second window.
    pub fps_updated: bool,
}

/// Frame clock producing `FrameTime` snapshots and a rolling FPS value.
///
/// A stalled tick shows up as a large `dt` verbatim; callers that need a
/// stable step should clamp themselves.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,

    window_elapsed: f32,
    window_frames: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose first tick measures from `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            window_elapsed: 0.0,
            window_frames: 0,
            fps: 0,
        }
    }

    /// Resets the baseline so the next `dt` does not include a pause.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Moves the baseline to `now`. Frame index and FPS window are kept.
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }

    /// Advances the clock to the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;

        self.window_elapsed += dt;
        self.window_frames += 1;

        let fps_updated = self.window_elapsed >= 1.0;
        if fps_updated {
            self.window_elapsed -= 1.0;
            self.fps = self.window_frames;
            self.window_frames = 0;
            log::trace!("fps: {}", self.fps);
        }

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
            fps: self.fps,
            fps_updated,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Frames counted over the last completed window.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn dt_is_time_since_last_tick() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let a = clock.tick_at(t0 + ms(16));
        assert!((a.dt - 0.016).abs() < 1e-6);
        assert_eq!(a.frame_index, 0);

        let b = clock.tick_at(t0 + ms(50));
        assert!((b.dt - 0.034).abs() < 1e-6);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn stalls_are_not_clamped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 5.0).abs() < 1e-6);
    }

    #[test]
    fn time_going_backwards_gives_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(t0);
        let ft = clock.tick_at(t0 - ms(10));
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn fps_counts_ticks_per_second() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        // 100 ms steps: the 10th tick completes the first second.
        let mut updates = Vec::new();
        for i in 1..=25u64 {
            let ft = clock.tick_at(t0 + ms(100 * i) + ms(1));
            if ft.fps_updated {
                updates.push((i, ft.fps));
            }
        }
        assert_eq!(updates.first(), Some(&(10, 10)));
        assert_eq!(updates.len(), 2);
        assert_eq!(clock.fps(), 10);
    }

    #[test]
    fn reset_excludes_the_gap_from_dt() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        clock.tick_at(t0 + ms(10));

        clock.reset_at(t0 + Duration::from_secs(3));
        let ft = clock.tick_at(t0 + Duration::from_secs(3) + ms(20));
        assert!((ft.dt - 0.020).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn fps_is_zero_before_first_window() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let ft = clock.tick_at(t0 + ms(10));
        assert_eq!(ft.fps, 0);
        assert!(!ft.fps_updated);
    }
}
