use std::path::Path;

use image::ImageError;

use crate::canvas::Canvas;
use crate::coords::Size;
use crate::paint::{DrawingMode, Pixel};

/// Decoded image usable as a blit source.
///
/// Storage is a [`Canvas`], so a sprite follows the same row-major layout
/// and resize-clears rule. A sprite whose decode failed is zero-sized and
/// every blit treats it as nothing to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pixels: Canvas,
}

impl Sprite {
    /// Cleared sprite of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            pixels: Canvas::new(size),
        }
    }

    /// Zero-sized sprite.
    pub fn empty() -> Self {
        Self::new(Size::default())
    }

    /// Wraps row-major pixel data. `None` if the length does not match `size`.
    pub fn from_pixels(size: Size, pixels: Vec<Pixel>) -> Option<Self> {
        Canvas::from_pixels(size, pixels).map(|pixels| Self { pixels })
    }

    /// Copies tightly packed RGBA8 bytes. `None` if the length does not match.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        let size = Size::new(width, height);
        if bytes.len() != size.area() * 4 {
            return None;
        }
        let pixels: &[Pixel] = bytemuck::try_cast_slice(bytes).ok()?;
        Self::from_pixels(size, pixels.to_vec())
    }

    /// Decodes an image file. Format is detected from the contents.
    pub fn decode(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let img = image::open(path)?;
        Ok(Self::from_image(img))
    }

    /// Decodes an in-memory encoded image.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img))
    }

    /// Loads an image file, falling back to a zero-sized sprite on failure.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::decode(path) {
            Ok(sprite) => {
                log::debug!(
                    "loaded sprite {} ({}x{})",
                    path.display(),
                    sprite.width(),
                    sprite.height()
                );
                sprite
            }
            Err(e) => {
                log::warn!("failed to decode sprite {}: {e}", path.display());
                Self::empty()
            }
        }
    }

    fn from_image(img: image::DynamicImage) -> Self {
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels: &[Pixel] = bytemuck::cast_slice(rgba.as_raw());
        Self {
            pixels: Canvas::from_pixels(Size::new(width, height), pixels.to_vec())
                .unwrap_or_else(|| Canvas::new(Size::default())),
        }
    }

    /// Reallocates at `size`; previous contents are discarded.
    pub fn resize(&mut self, size: Size) {
        self.pixels.resize(size);
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.pixels.get(x, y)
    }

    /// Overwrites one pixel; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        self.pixels.blend(x, y, pixel, DrawingMode::NoAlpha);
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.pixels.size()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        self.pixels.pixels()
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{BLANK, GREEN, RED};
    use std::io::Cursor;

    // ── construction ─────────────────────────────────────────────────────

    #[test]
    fn new_is_cleared() {
        let s = Sprite::new(Size::new(3, 2));
        assert_eq!(s.size(), Size::new(3, 2));
        assert!(s.pixels().iter().all(|&p| p == BLANK));
        assert!(!s.is_empty());
    }

    #[test]
    fn empty_has_no_pixels() {
        let s = Sprite::empty();
        assert!(s.is_empty());
        assert!(s.pixels().is_empty());
        assert_eq!(s.get(0, 0), None);
    }

    #[test]
    fn rgba8_bytes_map_to_pixels() {
        let bytes = [255, 0, 0, 255, 0, 255, 0, 255];
        let s = Sprite::from_rgba8(2, 1, &bytes).unwrap();
        assert_eq!(s.get(0, 0), Some(RED));
        assert_eq!(s.get(1, 0), Some(GREEN));
    }

    #[test]
    fn rgba8_length_mismatch() {
        assert!(Sprite::from_rgba8(2, 2, &[0; 15]).is_none());
        assert!(Sprite::from_pixels(Size::new(2, 2), vec![RED; 3]).is_none());
    }

    // ── mutation ─────────────────────────────────────────────────────────

    #[test]
    fn set_overwrites_and_clips() {
        let mut s = Sprite::new(Size::new(2, 2));
        s.set(1, 1, RED.with_alpha(10));
        s.set(5, 5, RED);
        assert_eq!(s.get(1, 1), Some(RED.with_alpha(10)));
        assert_eq!(s.pixels().iter().filter(|&&p| p != BLANK).count(), 1);
    }

    #[test]
    fn resize_clears() {
        let mut s = Sprite::from_pixels(Size::new(1, 1), vec![RED]).unwrap();
        s.resize(Size::new(2, 3));
        assert_eq!(s.size(), Size::new(2, 3));
        assert!(s.pixels().iter().all(|&p| p == BLANK));
    }

    // ── decoding ─────────────────────────────────────────────────────────

    #[test]
    fn decodes_png_bytes() {
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
        let mut encoded = Vec::new();
        img.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .unwrap();

        let s = Sprite::decode_bytes(&encoded).unwrap();
        assert_eq!(s.size(), Size::new(3, 2));
        assert_eq!(s.get(2, 1), Some(Pixel::rgba(1, 2, 3, 4)));
        assert_eq!(s.get(0, 0), Some(BLANK));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(Sprite::decode_bytes(b"not an image").is_err());
    }

    #[test]
    fn missing_file_yields_empty_sprite() {
        let s = Sprite::from_file("/definitely/not/here.png");
        assert!(s.is_empty());
    }
}
