use crate::coords::Size;

/// Integer sub-rectangle of a sprite, in source pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The whole of a source of `size`.
    #[inline]
    pub const fn full(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Maps a region-local cell to source coordinates.
    ///
    /// Returns `None` when the cell lies outside the region or the offset
    /// source coordinate does not fit in `i32`.
    #[inline]
    pub(crate) fn source(self, x: i32, y: i32) -> Option<(i32, i32)> {
        if !self.size().contains(x, y) {
            return None;
        }
        let sx = i32::try_from(self.x).ok()?.checked_add(x)?;
        let sy = i32::try_from(self.y).ok()?.checked_add(y)?;
        Some((sx, sy))
    }
}
