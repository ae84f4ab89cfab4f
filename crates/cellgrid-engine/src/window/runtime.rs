use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::collections::HashMap;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, ViewCtx};
use crate::device::{CanvasRegistry, Gpu, GpuInit, DEFAULT_CANVAS_ID};
use crate::input::platform::translate_window_event;

/// Configuration of one view: a window acting as a named canvas.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Id the canvas is registered under; must be unique among open views.
    pub canvas_id: String,
    pub title: String,
    /// Canvas size in device pixels.
    pub size: PhysicalSize<u32>,
    pub resizable: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            title: "cellgrid".to_string(),
            size: PhysicalSize::new(640, 640),
            resizable: false,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn close_view(&mut self, id: WindowId) {
        self.commands.push(Command::CloseView(id));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    CloseView(WindowId),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens `views` once the platform is ready and drives `app` until every
    /// view is closed or the app asks to exit.
    pub fn run<A>(views: Vec<ViewConfig>, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        anyhow::ensure!(!views.is_empty(), "at least one view is required");

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(views, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct ViewEntry {
    canvas_id: String,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: Vec<ViewConfig>,
    gpu_init: GpuInit,
    app: A,

    views: HashMap<WindowId, ViewEntry>,
    started: bool,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: Vec<ViewConfig>, gpu_init: GpuInit, app: A) -> Self {
        Self {
            initial,
            gpu_init,
            app,
            views: HashMap::new(),
            started: false,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn canvas_in_use(&self, canvas_id: &str) -> bool {
        self.views
            .values()
            .any(|v| v.borrow_canvas_id().as_str() == canvas_id)
    }

    /// Opens a window and acquires its canvas.
    ///
    /// Window creation problems are errors of the runtime; acquisition problems
    /// only disable this view and are reported to the app.
    fn open_view(&mut self, event_loop: &ActiveEventLoop, config: ViewConfig) -> Result<()> {
        anyhow::ensure!(
            !self.canvas_in_use(&config.canvas_id),
            "canvas id `{}` is already in use",
            config.canvas_id
        );

        let attrs = Window::default_attributes()
            .with_title(config.title)
            .with_inner_size(config.size)
            .with_resizable(config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let canvas_id = config.canvas_id;
        let gpu_init = self.gpu_init.clone();
        let lookup_id = canvas_id.clone();

        let built = ViewEntryTryBuilder {
            canvas_id: canvas_id.clone(),
            window,
            gpu_builder: |w| {
                let mut canvases = CanvasRegistry::new();
                canvases.register(lookup_id.as_str(), w);
                pollster::block_on(Gpu::acquire(&canvases, &lookup_id, gpu_init))
            },
        }
        .try_build();

        let mut entry = match built {
            Ok(entry) => entry,
            Err(err) => {
                self.app.on_view_failed(&canvas_id, &err);
                return Ok(());
            }
        };

        let mut runtime_ctx = RuntimeCtx::default();
        let app = &mut self.app;
        entry.with_mut(|fields| {
            let mut ctx = ViewCtx {
                id,
                canvas_id: fields.canvas_id.as_str(),
                window: fields.window,
                gpu: fields.gpu,
                runtime: &mut runtime_ctx,
            };
            app.on_view_created(&mut ctx);
        });

        entry.with_window(|w| w.request_redraw());
        self.views.insert(id, entry);
        self.apply_commands(event_loop, runtime_ctx);
        Ok(())
    }

    fn close_view(&mut self, id: WindowId) {
        if self.views.remove(&id).is_some() {
            self.app.on_view_closed(id);
        }
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::CloseView(id) => self.close_view(id),
                Command::Exit => self.request_exit(),
            }
        }

        if self.started && self.views.is_empty() {
            self.request_exit();
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    /// Lets every view check its timers and returns the earliest pending deadline.
    fn wake_views(&mut self, now: Instant) -> (Option<Instant>, RuntimeCtx) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut exit = false;
        let app = &mut self.app;

        for (id, entry) in self.views.iter_mut() {
            let id = *id;
            entry.with_mut(|fields| {
                let mut ctx = ViewCtx {
                    id,
                    canvas_id: fields.canvas_id.as_str(),
                    window: fields.window,
                    gpu: fields.gpu,
                    runtime: &mut runtime_ctx,
                };
                if app.on_wake(&mut ctx, now) == AppControl::Exit {
                    exit = true;
                }
            });
        }

        if exit {
            runtime_ctx.exit();
        }

        let deadline = self
            .views
            .keys()
            .filter_map(|id| self.app.next_deadline(*id))
            .min();

        (deadline, runtime_ctx)
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        for config in std::mem::take(&mut self.initial) {
            if let Err(e) = self.open_view(event_loop, config) {
                log::error!("failed to open initial view: {e:#}");
            }
        }

        if self.views.is_empty() {
            log::error!("no view could be started");
            self.request_exit();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let (deadline, runtime_ctx) = self.wake_views(Instant::now());

        event_loop.set_control_flow(match deadline {
            Some(at) => ControlFlow::WaitUntil(at),
            None => ControlFlow::Wait,
        });

        self.apply_commands(event_loop, runtime_ctx);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.close_view(window_id);
                if self.views.is_empty() {
                    self.request_exit();
                    event_loop.exit();
                }
                return;
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.views.get_mut(&window_id) {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
                return;
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.views.get_mut(&window_id) {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
                return;
            }

            _ => {}
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, views) = (&mut self.app, &mut self.views);
        let Some(entry) = views.get_mut(&window_id) else {
            return;
        };

        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        if let WindowEvent::RedrawRequested = event {
            entry.with_mut(|fields| {
                let mut ctx = FrameCtx {
                    id: window_id,
                    canvas_id: fields.canvas_id.as_str(),
                    window: fields.window,
                    gpu: fields.gpu,
                    runtime: &mut runtime_ctx,
                };
                app_control = app.on_frame(&mut ctx);
            });
        } else if let Some(ev) = translate_window_event(&event) {
            entry.with_mut(|fields| {
                let mut ctx = ViewCtx {
                    id: window_id,
                    canvas_id: fields.canvas_id.as_str(),
                    window: fields.window,
                    gpu: fields.gpu,
                    runtime: &mut runtime_ctx,
                };
                app_control = app.on_input(&mut ctx, &ev);
            });
        }

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        self.apply_commands(event_loop, runtime_ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_uses_default_canvas() {
        let cfg = ViewConfig::default();
        assert_eq!(cfg.canvas_id, DEFAULT_CANVAS_ID);
        assert_eq!(cfg.size, PhysicalSize::new(640, 640));
        assert!(!cfg.resizable);
    }
}
