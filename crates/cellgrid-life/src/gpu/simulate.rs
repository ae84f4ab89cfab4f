use crate::grid::GridDimensions;

use super::store::CellStore;

const WORKGROUP_PLACEHOLDER: &str = "WORKGROUP_SIZE";

/// Simulation shader with the workgroup edge filled in.
pub fn life_shader_source(workgroup_size: u32) -> String {
    include_str!("shaders/life.wgsl").replace(WORKGROUP_PLACEHOLDER, &workgroup_size.to_string())
}

/// Workgroups per axis needed to cover `dims` with square tiles of `workgroup_size`.
pub fn dispatch_counts(dims: GridDimensions, workgroup_size: u32) -> (u32, u32) {
    (
        dims.cols.div_ceil(workgroup_size),
        dims.rows.div_ceil(workgroup_size),
    )
}

/// Compute pipeline advancing the automaton by one generation per dispatch.
pub struct LifeSimulation {
    pipeline: wgpu::ComputePipeline,
    workgroup_size: u32,
}

impl LifeSimulation {
    pub fn new(device: &wgpu::Device, layout: &wgpu::PipelineLayout, workgroup_size: u32) -> Self {
        let source = life_shader_source(workgroup_size);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cellgrid life shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("cellgrid life pipeline"),
            layout: Some(layout),
            module: &shader,
            entry_point: Some("cs_main"),
            compilation_options: Default::default(),
            cache: None,
        });

        Self {
            pipeline,
            workgroup_size,
        }
    }

    /// Encodes one generation and swaps the store so the result is current.
    pub fn step(&self, encoder: &mut wgpu::CommandEncoder, store: &mut CellStore) {
        let (gx, gy) = dispatch_counts(store.dims(), self.workgroup_size);
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("cellgrid life pass"),
                timestamp_writes: None,
            });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, store.current_bind_group(), &[]);
            cpass.dispatch_workgroups(gx, gy, 1);
        }
        store.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_needs_no_extra_tile() {
        let dims = GridDimensions::new(32, 32).unwrap();
        assert_eq!(dispatch_counts(dims, 8), (4, 4));
    }

    #[test]
    fn partial_tiles_round_up() {
        let dims = GridDimensions::new(33, 7).unwrap();
        assert_eq!(dispatch_counts(dims, 8), (5, 1));
    }

    #[test]
    fn shader_gets_workgroup_size() {
        let src = life_shader_source(8);
        assert!(src.contains("@workgroup_size(8, 8)"));
        assert!(!src.contains(WORKGROUP_PLACEHOLDER));
    }

    #[test]
    fn life_shader_is_valid_wgsl() {
        for ws in [1, 8, 16] {
            crate::gpu::validate_wgsl(&life_shader_source(ws));
        }
    }
}
