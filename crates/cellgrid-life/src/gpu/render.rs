use wgpu::util::DeviceExt;

use cellgrid_engine::render::{RenderCtx, RenderTarget};

use super::store::CellStore;
use super::uniforms::{GridVertex, CELL_QUAD, CELL_QUAD_INDICES, OUTLINE_LOOP};

const CELL_SHADER: &str = include_str!("shaders/cells.wgsl");
const OUTLINE_SHADER: &str = include_str!("shaders/outline.wgsl");

/// Draws the cell field and the selection outline.
///
/// Geometry buffers are created up front; pipelines are built lazily for the
/// surface format and rebuilt if it changes.
pub struct GridRenderer {
    pipeline_layout: wgpu::PipelineLayout,

    pipeline_format: Option<wgpu::TextureFormat>,
    cell_pipeline: Option<wgpu::RenderPipeline>,
    outline_pipeline: Option<wgpu::RenderPipeline>,

    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    outline_vbo: wgpu::Buffer,
}

impl GridRenderer {
    pub fn new(device: &wgpu::Device, pipeline_layout: wgpu::PipelineLayout) -> Self {
        let quad_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid quad vbo"),
            contents: bytemuck::cast_slice(&CELL_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid quad ibo"),
            contents: bytemuck::cast_slice(&CELL_QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let outline_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid outline vbo"),
            contents: bytemuck::cast_slice(&OUTLINE_LOOP),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline_layout,
            pipeline_format: None,
            cell_pipeline: None,
            outline_pipeline: None,
            quad_vbo,
            quad_ibo,
            outline_vbo,
        }
    }

    /// Records the cell pass followed by the outline pass, both reading the
    /// store's current buffer.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, store: &CellStore) {
        self.ensure_pipelines(ctx);

        let Some(cell_pipeline) = self.cell_pipeline.as_ref() else { return };
        let Some(outline_pipeline) = self.outline_pipeline.as_ref() else { return };
        let bind_group = store.current_bind_group();
        let instances = store.dims().cell_count() as u32;

        {
            let attachment = target.color_attachment();
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cellgrid cell pass"),
                color_attachments: &[Some(attachment)],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(cell_pipeline);
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
            rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..CELL_QUAD_INDICES.len() as u32, 0, 0..instances);
        }

        // Loads over the cell field.
        let attachment = target.color_attachment();
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cellgrid outline pass"),
            color_attachments: &[Some(attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(outline_pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, self.outline_vbo.slice(..));
        rpass.draw(0..OUTLINE_LOOP.len() as u32, 0..1);
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.cell_pipeline.is_some()
            && self.outline_pipeline.is_some()
        {
            return;
        }

        let cell_shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cellgrid cell shader"),
            source: wgpu::ShaderSource::Wgsl(CELL_SHADER.into()),
        });
        let outline_shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cellgrid outline shader"),
            source: wgpu::ShaderSource::Wgsl(OUTLINE_SHADER.into()),
        });

        self.cell_pipeline = Some(self.build_pipeline(
            ctx,
            "cellgrid cell pipeline",
            &cell_shader,
            wgpu::PrimitiveTopology::TriangleList,
        ));
        self.outline_pipeline = Some(self.build_pipeline(
            ctx,
            "cellgrid outline pipeline",
            &outline_shader,
            wgpu::PrimitiveTopology::LineStrip,
        ));
        self.pipeline_format = Some(ctx.surface_format);

        log::debug!("grid pipelines built for {:?}", ctx.surface_format);
    }

    fn build_pipeline(
        &self,
        ctx: &RenderCtx<'_>,
        label: &str,
        shader: &wgpu::ShaderModule,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&self.pipeline_layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GridVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::validate_wgsl;

    #[test]
    fn cell_shader_is_valid_wgsl() {
        validate_wgsl(CELL_SHADER);
    }

    #[test]
    fn outline_shader_is_valid_wgsl() {
        validate_wgsl(OUTLINE_SHADER);
    }
}
