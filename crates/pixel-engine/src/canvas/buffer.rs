use crate::coords::Size;
use crate::paint::{compose, DrawingMode, Pixel, BLANK};

/// Owned, row-major rectangle of pixels.
///
/// Invariant: `pixels.len() == width * height` at all times. Resizing
/// reallocates and clears; there is no content-preserving resize.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Allocates a cleared canvas (every pixel `BLANK`).
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLANK; size.area()],
        }
    }

    /// Builds a canvas around existing row-major pixel data.
    ///
    /// Returns `None` when the data length does not match `size`.
    pub fn from_pixels(size: Size, pixels: Vec<Pixel>) -> Option<Self> {
        (pixels.len() == size.area()).then_some(Self { size, pixels })
    }

    /// Discards the current contents and reallocates at `size`, cleared.
    pub fn resize(&mut self, size: Size) {
        log::debug!(
            "canvas resize {}x{} -> {}x{}",
            self.size.width,
            self.size.height,
            size.width,
            size.height
        );
        self.size = size;
        self.pixels = vec![BLANK; size.area()];
    }

    /// Zero-fills the buffer.
    pub fn clear(&mut self) {
        self.pixels.fill(BLANK);
    }

    /// Sets every pixel to `pixel`, ignoring the drawing mode.
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Row-major RGBA8 bytes, ready for texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.size
            .contains(x, y)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }

    /// Reads a pixel; `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes `pixel` at `(x, y)` through the compositor.
    ///
    /// Positions outside `[0, width) × [0, height)` are silently ignored so
    /// that rasterizers never need to clip per step.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, pixel: Pixel, mode: DrawingMode) {
        if let Some(i) = self.index(x, y) {
            let dst = &mut self.pixels[i];
            *dst = compose(mode, pixel, *dst);
        }
    }

    /// Writes the closed horizontal span `[x0, x1]` on row `y`.
    ///
    /// The span is clipped to the buffer first; the visible result is the same
    /// as calling [`blend`](Self::blend) for each cell.
    pub fn span(&mut self, x0: i32, x1: i32, y: i32, pixel: Pixel, mode: DrawingMode) {
        if y < 0 || y as u32 >= self.size.height || self.size.width == 0 {
            return;
        }
        let lo = x0.min(x1).max(0);
        let hi = x0.max(x1).min(self.size.width as i32 - 1);
        if lo > hi {
            return;
        }
        let row = y as usize * self.size.width as usize;
        for dst in &mut self.pixels[row + lo as usize..=row + hi as usize] {
            *dst = compose(mode, pixel, *dst);
        }
    }
}
