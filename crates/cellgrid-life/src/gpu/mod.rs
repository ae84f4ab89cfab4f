//! GPU side of a grid view.
//!
//! All pipelines share one bind group layout:
//!
//! | binding | resource                 | stages                     |
//! |---------|--------------------------|----------------------------|
//! | 0       | `GridUniform`            | vertex, fragment, compute  |
//! | 1       | current cell states      | vertex, compute            |
//! | 2       | next cell states         | compute                    |
//! | 3       | `SelectionUniform`       | vertex                     |
//!
//! One bind group exists per parity, so swapping the roles of the two cell
//! buffers never rebuilds anything.

mod layout;
mod render;
mod simulate;
mod store;
mod uniforms;

pub use layout::{grid_bind_group_layout, grid_pipeline_layout};
pub use render::GridRenderer;
pub use simulate::{dispatch_counts, life_shader_source, LifeSimulation};
pub use store::CellStore;
pub use uniforms::{GridUniform, GridVertex, SelectionUniform, CELL_QUAD, CELL_QUAD_INDICES, OUTLINE_LOOP};

/// Parses and validates a WGSL source the way wgpu does at module creation.
#[cfg(test)]
pub(crate) fn validate_wgsl(src: &str) {
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    let module = naga::front::wgsl::parse_str(src).unwrap_or_else(|e| panic!("{}", e.emit_to_string(src)));
    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{}", e.emit_to_string(src)));
}
