//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and one window per view, wires each window to its
//! own GPU context, and sleeps until the earliest view deadline.

mod runtime;

pub use runtime::{Runtime, RuntimeCtx, ViewConfig};
