//! Input subsystem.
//!
//! Deliberately pointer-only: the grid needs to know where the pointer is over
//! a canvas and when it leaves. Public API is platform-agnostic and does not
//! expose winit types; the runtime translates window events via
//! `platform::translate_window_event`.

pub(crate) mod platform;
mod types;

pub use types::{InputEvent, PointerMoveEvent};
