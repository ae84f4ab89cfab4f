use bytemuck::{Pod, Zeroable};

use crate::grid::GridDimensions;

// ── uniforms ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridUniform {
    /// `(cols, rows)` as floats.
    pub size: [f32; 2],
    /// Scale of the selection outline.
    pub box_ratio: f32,
    pub _pad: f32, // 16-byte alignment
}

impl GridUniform {
    pub fn new(dims: GridDimensions, box_ratio: f32) -> Self {
        Self {
            size: dims.as_vec2(),
            box_ratio,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SelectionUniform {
    /// Clip-space translation of the outline.
    pub offset: [f32; 2],
    pub _pad: [f32; 2],
}

impl SelectionUniform {
    pub fn new(offset: [f32; 2]) -> Self {
        Self {
            offset,
            _pad: [0.0; 2],
        }
    }
}

// ── geometry ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub pos: [f32; 2],
}

impl GridVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Cell quad; the gap to `±1` is the spacing between cells.
pub const CELL_QUAD: [GridVertex; 4] = [
    GridVertex::new(-0.8, -0.8),
    GridVertex::new(0.8, -0.8),
    GridVertex::new(0.8, 0.8),
    GridVertex::new(-0.8, 0.8),
];

pub const CELL_QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Closed unit square drawn as a line strip; scaled by the box ratio in the shader.
pub const OUTLINE_LOOP: [GridVertex; 5] = [
    GridVertex::new(-1.0, -1.0),
    GridVertex::new(1.0, -1.0),
    GridVertex::new(1.0, 1.0),
    GridVertex::new(-1.0, 1.0),
    GridVertex::new(-1.0, -1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_are_16_byte_blocks() {
        assert_eq!(std::mem::size_of::<GridUniform>(), 16);
        assert_eq!(std::mem::size_of::<SelectionUniform>(), 16);
    }

    #[test]
    fn grid_uniform_carries_dimensions() {
        let dims = GridDimensions::new(32, 16).unwrap();
        let u = GridUniform::new(dims, 0.9);
        assert_eq!(u.size, [32.0, 16.0]);
        assert_eq!(u.box_ratio, 0.9);
    }

    #[test]
    fn outline_is_closed() {
        assert_eq!(OUTLINE_LOOP[0], OUTLINE_LOOP[4]);
    }

    #[test]
    fn quad_triangles_cover_all_corners() {
        let mut seen = CELL_QUAD_INDICES.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
