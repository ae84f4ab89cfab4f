//! Rendering context handed to view renderers.
//!
//! Each renderer owns its GPU resources (pipelines, buffers, bind groups) and
//! records passes into the frame's encoder through a `RenderTarget`.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
