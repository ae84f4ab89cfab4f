use std::collections::HashMap;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::WindowId;

use cellgrid_engine::core::{App as EngineApp, AppControl, FrameCtx, ViewCtx};
use cellgrid_engine::device::{AcquireError, GpuInit};
use cellgrid_engine::input::InputEvent;
use cellgrid_engine::window::{Runtime, ViewConfig};

use crate::config::GridConfig;
use crate::handshake::{ChildLink, ParentLink};
use crate::view::GridView;

/// Host of one or more grid views, each in its own window.
///
/// ```rust,ignore
/// GridApplication::new()
///     .view("grid-left", "left", GridConfig::default())
///     .view("grid-right", "right", GridConfig::new().seed(7))
///     .run()?;
/// ```
///
/// Every view receives its [`GridConfig`] through a [`ParentLink`] once its
/// canvas is ready, then runs independently of the others.
pub struct GridApplication {
    gpu_init: GpuInit,
    pending:  Vec<(ViewConfig, GridConfig)>,
    links:    HashMap<String, ParentLink<GridConfig>>,
    views:    HashMap<WindowId, GridView>,
}

impl Default for GridApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl GridApplication {
    pub fn new() -> Self {
        Self {
            gpu_init: GpuInit::default(),
            pending:  Vec::new(),
            links:    HashMap::new(),
            views:    HashMap::new(),
        }
    }

    /// Adds a view drawing into the canvas registered as `canvas_id`.
    ///
    /// The window is sized to the configured canvas.
    pub fn view(mut self, canvas_id: impl Into<String>, title: impl Into<String>, config: GridConfig) -> Self {
        let window = ViewConfig {
            canvas_id: canvas_id.into(),
            title: title.into(),
            size: PhysicalSize::new(config.canvas_width, config.canvas_height),
            resizable: false,
        };
        self.pending.push((window, config));
        self
    }

    pub fn gpu_init(mut self, init: GpuInit) -> Self {
        self.gpu_init = init;
        self
    }

    /// Validates every view, then runs until all windows are closed.
    pub fn run(mut self) -> Result<()> {
        anyhow::ensure!(!self.pending.is_empty(), "no grid view configured");

        let mut windows = Vec::with_capacity(self.pending.len());
        for (window, config) in std::mem::take(&mut self.pending) {
            config
                .validate()
                .with_context(|| format!("invalid grid configuration for `{}`", window.canvas_id))?;
            anyhow::ensure!(
                !self.links.contains_key(&window.canvas_id),
                "canvas id `{}` configured twice",
                window.canvas_id
            );
            self.links.insert(window.canvas_id.clone(), ParentLink::new(config));
            windows.push(window);
        }

        let gpu_init = self.gpu_init.clone();
        Runtime::run(windows, gpu_init, self)
    }

    /// Asks the host for the configuration of `canvas_id`.
    fn request_config(&mut self, canvas_id: &str) -> Option<GridConfig> {
        let link = self.links.get_mut(canvas_id)?;
        let mut child = ChildLink::new();
        let reply = link.receive(&child.announce())?;
        log::debug!("canvas `{canvas_id}`: {reply}");
        child.receive(reply);
        child.into_data()
    }
}

impl EngineApp for GridApplication {
    fn on_view_created(&mut self, ctx: &mut ViewCtx<'_, '_>) {
        let Some(config) = self.request_config(ctx.canvas_id) else {
            log::error!("canvas `{}` got no grid configuration", ctx.canvas_id);
            ctx.runtime.close_view(ctx.id);
            return;
        };

        match GridView::new(ctx.gpu.device(), &config, Instant::now()) {
            Ok(view) => {
                self.views.insert(ctx.id, view);
                ctx.request_redraw();
            }
            Err(e) => {
                log::error!("canvas `{}`: {e}", ctx.canvas_id);
                ctx.runtime.close_view(ctx.id);
            }
        }
    }

    fn on_view_failed(&mut self, canvas_id: &str, err: &AcquireError) {
        // The view never starts; the others keep running.
        log::error!("canvas `{canvas_id}` unavailable: {err}");
        self.links.remove(canvas_id);
    }

    fn on_input(&mut self, ctx: &mut ViewCtx<'_, '_>, event: &InputEvent) -> AppControl {
        let Some(view) = self.views.get_mut(&ctx.id) else {
            return AppControl::Continue;
        };

        let redraw = match event {
            InputEvent::PointerMoved(p) => view.pointer_moved(p.x, p.y, ctx.canvas_size()),
            InputEvent::PointerLeft => view.pointer_left(),
            InputEvent::PointerEntered => false,
        };
        if redraw {
            ctx.request_redraw();
        }
        AppControl::Continue
    }

    fn on_wake(&mut self, ctx: &mut ViewCtx<'_, '_>, now: Instant) -> AppControl {
        if let Some(view) = self.views.get_mut(&ctx.id) {
            if view.wake(now) {
                ctx.request_redraw();
            }
        }
        AppControl::Continue
    }

    fn next_deadline(&self, view: WindowId) -> Option<Instant> {
        self.views.get(&view).map(GridView::deadline)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match self.views.get_mut(&ctx.id) {
            Some(view) => view.render_frame(ctx),
            None => AppControl::Continue,
        }
    }

    fn on_view_closed(&mut self, id: WindowId) {
        if let Some(view) = self.views.remove(&id) {
            log::info!("grid view closed after {} steps", view.step());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_window_matches_canvas() {
        let app = GridApplication::new().view("grid-a", "A", GridConfig::new().canvas(400, 300));
        let (window, config) = &app.pending[0];
        assert_eq!(window.canvas_id, "grid-a");
        assert_eq!(window.size, PhysicalSize::new(400, 300));
        assert_eq!(config.canvas_width, 400);
    }

    #[test]
    fn config_is_handed_over_once() {
        let mut app = GridApplication::new();
        app.links
            .insert("grid-a".into(), ParentLink::new(GridConfig::new().seed(3)));

        let cfg = app.request_config("grid-a");
        assert_eq!(cfg.and_then(|c| c.seed), Some(3));
        assert_eq!(app.request_config("grid-a"), None);
        assert_eq!(app.request_config("unknown"), None);
    }

    #[test]
    fn run_rejects_invalid_config_before_opening_windows() {
        let err = GridApplication::new()
            .view("grid-a", "A", GridConfig::new().cell_size(0.0))
            .run()
            .unwrap_err();
        assert!(format!("{err:#}").contains("grid-a"));
    }

    #[test]
    fn run_rejects_duplicate_canvas_ids() {
        let err = GridApplication::new()
            .view("grid-a", "A", GridConfig::default())
            .view("grid-a", "B", GridConfig::default())
            .run()
            .unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn run_needs_a_view() {
        assert!(GridApplication::new().run().is_err());
    }
}
