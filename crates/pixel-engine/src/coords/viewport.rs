use super::{IVec2, Size, Vec2};

/// Letterboxed placement of the logical canvas inside the physical window.
///
/// The canvas keeps the aspect ratio of `screen × scale`. Whatever window
/// size the platform reports, the largest viewport with that aspect ratio is
/// centred in it; the remaining bars stay black.
///
/// All sizes here are physical window pixels except `screen`, which is the
/// logical canvas size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    screen: Size,
    scale: u32,
    window: Size,
    origin: IVec2,
    extent: Size,
}

impl Viewport {
    /// Creates a viewport for a window of exactly `screen × scale` pixels.
    pub fn new(screen: Size, scale: u8) -> Self {
        let scale = u32::from(scale.max(1));
        let mut vp = Self {
            screen,
            scale,
            window: Size::default(),
            origin: IVec2::zero(),
            extent: Size::default(),
        };
        vp.fit(screen.scaled(scale));
        vp
    }

    /// Recomputes the viewport for a new window size.
    ///
    /// Width-constrained fit is tried first; if the resulting height does not
    /// fit in the window the fit becomes height-constrained.
    pub fn fit(&mut self, window: Size) {
        self.window = window;

        let target = self.screen.scaled(self.scale);
        if target.is_empty() {
            self.extent = Size::default();
            self.origin = IVec2::zero();
            return;
        }

        let aspect = target.width as f32 / target.height as f32;

        let mut w = window.width;
        let mut h = (w as f32 / aspect) as u32;
        if h > window.height {
            h = window.height;
            w = (h as f32 * aspect) as u32;
        }

        self.extent = Size::new(w, h);
        self.origin = IVec2::new(
            (window.width.saturating_sub(w) / 2) as i32,
            (window.height.saturating_sub(h) / 2) as i32,
        );
    }

    /// Maps a raw pointer position (window client pixels) into canvas space.
    ///
    /// The result is clamped to `[0, width-1] × [0, height-1]`, so pointers over
    /// the letterbox bars or outside the window pin to the nearest canvas edge.
    pub fn map_pointer(&self, raw: Vec2) -> IVec2 {
        if self.screen.is_empty() {
            return IVec2::zero();
        }

        let local = raw - self.origin.to_vec2();
        let span_x = self.window.width as f32 - 2.0 * self.origin.x as f32;
        let span_y = self.window.height as f32 - 2.0 * self.origin.y as f32;

        let map = |v: f32, span: f32, logical: u32| -> i32 {
            if span <= 0.0 {
                return 0;
            }
            let mapped = (v / span * logical as f32) as i32;
            mapped.clamp(0, logical as i32 - 1)
        };

        IVec2::new(
            map(local.x, span_x, self.screen.width),
            map(local.y, span_y, self.screen.height),
        )
    }

    /// Logical canvas size.
    #[inline]
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Integer pixel scale requested at construction.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Physical window size this viewport was fitted to.
    #[inline]
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Top-left corner of the viewport inside the window.
    #[inline]
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    /// Viewport size in physical pixels.
    #[inline]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Returns true when the viewport covers at least one physical pixel.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.extent.is_empty()
    }
}
