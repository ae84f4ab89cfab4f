use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-view handles passed to non-drawing callbacks.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct ViewCtx<'a, 'w> {
    pub id:        WindowId,
    pub canvas_id: &'a str,
    pub window:    &'a Window,
    pub gpu:       &'a Gpu<'w>,
    pub runtime:   &'a mut RuntimeCtx,
}

impl<'a, 'w> ViewCtx<'a, 'w> {
    /// Canvas size in physical pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let size = self.gpu.size();
        (size.width, size.height)
    }

    /// Schedules a redraw of this view. Multiple requests before the redraw coalesce.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a, 'w> {
    pub id:        WindowId,
    pub canvas_id: &'a str,
    pub window:    &'a Window,
    pub gpu:       &'a mut Gpu<'w>,
    pub runtime:   &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next surface texture, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then submits everything `draw` encoded as one batch
    /// and presents.
    ///
    /// The first pass `draw` opens on the target clears it to `clear`; later
    /// passes load. If `draw` opens no pass at all the surface is still cleared.
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("canvas `{}`: fatal surface error", self.canvas_id);
                    return AppControl::Exit;
                }
                log::warn!("canvas `{}`: frame skipped ({action:?})", self.canvas_id);
                return AppControl::Continue;
            }
        };

        let size = self.gpu.size();
        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            (size.width, size.height),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view, clear);
            draw(&rctx, &mut target);
            target.flush_clear();
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
