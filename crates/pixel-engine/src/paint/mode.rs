/// Blend policy applied to every write into a canvas.
///
/// The mode belongs to the screen, not to individual draw calls; it stays in
/// effect until changed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawingMode {
    /// Overwrite the destination unconditionally.
    #[default]
    NoAlpha,
    /// Linear interpolation of RGB by source alpha.
    FullAlpha,
    /// Overwrite only where the source is fully opaque; otherwise leave the destination.
    Mask,
}
