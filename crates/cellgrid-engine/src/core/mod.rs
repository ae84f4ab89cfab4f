//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and higher layers (the grid views, the studio). It avoids leaking runtime
//! internals into user code and provides consistent per-view contexts.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, ViewCtx};
