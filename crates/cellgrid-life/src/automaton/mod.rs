//! Automaton state and rules, independent of the GPU.
//!
//! - `PingPong` holds the two cell-state instances and decides which is current
//! - `rule` is the reference Game of Life step the compute shader implements
//! - `seed` builds the initial population
//! - `CpuLife` runs the whole thing on the CPU

mod cpu;
mod pingpong;
pub mod rule;
mod seed;

pub use cpu::CpuLife;
pub use pingpong::PingPong;
pub use seed::seed_cells;
