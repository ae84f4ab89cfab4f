//! cellgrid engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the grid views:
//! canvas acquisition, the window loop, pointer input, timing and logging.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
