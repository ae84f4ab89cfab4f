//! Conway's Game of Life on the GPU, one grid per canvas.
//!
//! A view seeds two cell buffers, advances them with a compute pass on a fixed
//! timer and draws the current one as an instanced quad field. The cell under
//! the pointer is outlined.
//!
//! The CPU side ([`automaton`], [`grid`], [`driver`]) holds everything that can
//! be checked without a device.

pub mod app;
pub mod automaton;
pub mod config;
pub mod driver;
pub mod gpu;
pub mod grid;
pub mod handshake;
pub mod view;

pub use app::GridApplication;
pub use config::{ConfigError, GridConfig, LeavePolicy};
pub use grid::{GridDimensions, SelectedCell};
