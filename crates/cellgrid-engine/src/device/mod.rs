//! GPU device + surface management.
//!
//! This module is responsible for:
//! - resolving a named canvas (window) to draw into
//! - creating the wgpu Instance/Adapter/Device/Queue for that canvas
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//!
//! Every view acquires its own `Gpu`. Nothing in this module is shared between
//! views, so one failing acquisition leaves the others untouched.

mod canvas;
mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use canvas::{CanvasRegistry, DEFAULT_CANVAS_ID};
pub use context::Gpu;
pub use error::{AcquireError, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use init::GpuInit;
