use std::time::Instant;

use winit::window::WindowId;

use crate::device::AcquireError;
use crate::input::InputEvent;

use super::ctx::{FrameCtx, ViewCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// All callbacks run on the event-loop thread, one at a time. A view is
/// identified by the `WindowId` of its canvas.
pub trait App {
    /// Called once the canvas of a new view has a device and surface.
    fn on_view_created(&mut self, view: &mut ViewCtx<'_, '_>);

    /// Called when a view's canvas could not be acquired. The view never starts.
    fn on_view_failed(&mut self, canvas_id: &str, err: &AcquireError) {
        log::error!("view `{canvas_id}` disabled: {err}");
    }

    /// Called for pointer events over a view.
    fn on_input(&mut self, view: &mut ViewCtx<'_, '_>, event: &InputEvent) -> AppControl {
        let _ = (view, event);
        AppControl::Continue
    }

    /// Called whenever the loop wakes up, before it goes back to sleep.
    ///
    /// Timer-driven work is expected to check its deadlines against `now` here.
    fn on_wake(&mut self, view: &mut ViewCtx<'_, '_>, now: Instant) -> AppControl {
        let _ = (view, now);
        AppControl::Continue
    }

    /// Earliest instant at which `view` needs `on_wake` again, if any.
    fn next_deadline(&self, view: WindowId) -> Option<Instant> {
        let _ = view;
        None
    }

    /// Called for every redraw of a view.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called after a view's window was closed and its GPU resources released.
    fn on_view_closed(&mut self, view: WindowId) {
        let _ = view;
    }
}
