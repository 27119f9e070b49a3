//! GPU device, surface and canvas presentation.
//!
//! This module is responsible for:
//! - creating the wgpu Adapter/Device/Queue and configuring the window surface
//! - acquiring frames and mapping surface errors to an action
//! - uploading the finished canvas and drawing it into the letterboxed viewport

mod error;
mod frame;
mod gpu;
mod init;
mod presenter;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use presenter::CanvasPresenter;
