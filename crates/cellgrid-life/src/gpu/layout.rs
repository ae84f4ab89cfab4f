use super::uniforms::{GridUniform, SelectionUniform};

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages, size: usize) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(size as u64),
        },
        count: None,
    }
}

fn storage_entry(binding: u32, visibility: wgpu::ShaderStages, read_only: bool) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Layout shared by the simulation, cell and outline pipelines.
pub fn grid_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    use wgpu::ShaderStages as S;

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("cellgrid bgl"),
        entries: &[
            uniform_entry(
                0,
                S::VERTEX | S::FRAGMENT | S::COMPUTE,
                std::mem::size_of::<GridUniform>(),
            ),
            storage_entry(1, S::VERTEX | S::COMPUTE, true),
            storage_entry(2, S::COMPUTE, false),
            uniform_entry(3, S::VERTEX, std::mem::size_of::<SelectionUniform>()),
        ],
    })
}

pub fn grid_pipeline_layout(device: &wgpu::Device, bgl: &wgpu::BindGroupLayout) -> wgpu::PipelineLayout {
    device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("cellgrid pipeline layout"),
        bind_group_layouts: &[bgl],
        immediate_size: 0,
    })
}
