use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use cellgrid_engine::core::{AppControl, FrameCtx};

use crate::automaton::seed_cells;
use crate::config::{ConfigError, GridConfig};
use crate::driver::GridDriver;
use crate::gpu::{grid_bind_group_layout, grid_pipeline_layout, CellStore, GridRenderer, LifeSimulation};
use crate::grid::{GridDimensions, SelectedCell};

/// One running grid: GPU resources plus the driver scheduling them.
///
/// Dropping the view drops its timer with it; nothing keeps firing for a
/// closed canvas.
pub struct GridView {
    dims: GridDimensions,
    background: wgpu::Color,

    driver: GridDriver,
    store: CellStore,
    simulation: LifeSimulation,
    renderer: GridRenderer,
}

impl GridView {
    /// Validates `config`, seeds the store and arms the step timer at `now`.
    pub fn new(device: &wgpu::Device, config: &GridConfig, now: Instant) -> Result<Self, ConfigError> {
        let dims = config.validate()?;

        let seed = match config.seed {
            Some(s) => seed_cells(dims, config.seed_density, &mut StdRng::seed_from_u64(s)),
            None => seed_cells(dims, config.seed_density, &mut rand::thread_rng()),
        };

        let bgl = grid_bind_group_layout(device);
        let store = CellStore::initialize(device, &bgl, dims, config.cell_box_ratio, &seed);
        let layout = grid_pipeline_layout(device, &bgl);
        let simulation = LifeSimulation::new(device, &layout, config.workgroup_size);
        let renderer = GridRenderer::new(device, layout);

        let population = seed.iter().filter(|&&c| c == 1).count();
        log::info!(
            "grid {}x{} seeded with {population} live cells, stepping every {:?}",
            dims.cols,
            dims.rows,
            config.update_interval,
        );

        Ok(Self {
            dims,
            background: config.background,
            driver: GridDriver::new(dims, config.update_interval, config.leave_policy, now),
            store,
            simulation,
            renderer,
        })
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn selection(&self) -> SelectedCell {
        self.driver.selection()
    }

    /// Completed simulation steps.
    pub fn step(&self) -> u64 {
        self.store.step()
    }

    pub fn deadline(&self) -> Instant {
        self.driver.deadline()
    }

    /// Returns whether the view needs a redraw.
    pub fn wake(&mut self, now: Instant) -> bool {
        self.driver.on_timer(now)
    }

    /// Returns whether the view needs a redraw.
    pub fn pointer_moved(&mut self, x: f32, y: f32, (width, height): (u32, u32)) -> bool {
        self.driver.on_pointer_move(x, y, width, height)
    }

    /// Returns whether the view needs a redraw.
    pub fn pointer_left(&mut self) -> bool {
        self.driver.on_pointer_leave()
    }

    /// Encodes queued simulation steps, the cell field and the outline, then
    /// submits them as one batch.
    ///
    /// Queued work is only consumed once a surface texture was acquired, so a
    /// skipped frame loses nothing.
    pub fn render_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self {
            background,
            driver,
            store,
            simulation,
            renderer,
            ..
        } = self;

        frame.render(*background, |rctx, target| {
            if let Some(selection) = driver.take_selection_upload() {
                store.write_selection(rctx.queue, selection);
            }

            let steps = driver.take_pending_steps();
            for _ in 0..steps {
                simulation.step(target.encoder, store);
            }
            if steps > 0 {
                log::debug!("advanced {steps} step(s), now at {}", store.step());
            }

            renderer.render(rctx, target, store);
        })
    }
}
