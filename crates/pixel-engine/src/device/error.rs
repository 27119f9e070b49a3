/// What the runtime should do after frame acquisition failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was configured again; this frame is dropped.
    Reconfigured,
    /// Transient failure. Drop this frame and try the next tick.
    SkipFrame,
    /// The device cannot continue (out of memory). The run ends with an error.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether the runtime may keep ticking.
    #[inline]
    pub fn is_recoverable(self) -> bool {
        !matches!(self, Self::Fatal)
    }
}
