/// Renderer-facing context (device/queue + surface format + surface size).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Surface size in physical pixels.
    pub surface_size: (u32, u32),
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        surface_size: (u32, u32),
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            surface_size,
        }
    }
}

/// Target for drawing (encoder + color view).
///
/// Tracks whether the color attachment was cleared yet so that passes
/// composite back-to-front: the first pass clears, every later one loads.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pending_clear: Option<wgpu::Color>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        clear: wgpu::Color,
    ) -> Self {
        Self {
            encoder,
            color_view,
            pending_clear: Some(clear),
        }
    }

    /// Load op for the next render pass on this target.
    pub fn next_load_op(&mut self) -> wgpu::LoadOp<wgpu::Color> {
        match self.pending_clear.take() {
            Some(c) => wgpu::LoadOp::Clear(c),
            None => wgpu::LoadOp::Load,
        }
    }

    /// Color attachment for the next render pass, see [`next_load_op`](Self::next_load_op).
    pub fn color_attachment(&mut self) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view: self.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: self.next_load_op(),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }

    /// Clears the target if no pass has done so yet.
    pub(crate) fn flush_clear(&mut self) {
        if self.pending_clear.is_none() {
            return;
        }
        let attachment = self.color_attachment();
        let _rpass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cellgrid clear"),
            color_attachments: &[Some(attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}
