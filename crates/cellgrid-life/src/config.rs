use std::time::Duration;

use crate::grid::GridDimensions;

/// What happens to the on-screen outline when the pointer leaves the canvas.
///
/// The selection itself is always reset to [`SelectedCell::NONE`](crate::grid::SelectedCell::NONE);
/// this only decides when the screen catches up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LeavePolicy {
    /// Redraw immediately so the outline disappears with the pointer.
    #[default]
    Redraw,
    /// Leave the last outline on screen until the next simulation tick redraws.
    WaitForTick,
}

/// Invalid grid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f32),

    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    Canvas { width: u32, height: u32 },

    #[error("a {width}x{height} canvas with {cell_size}px cells has no whole cell on some axis")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: f32,
    },

    #[error("grid must have at least one column and one row, got {cols}x{rows}")]
    ZeroDimension { cols: u32, rows: u32 },

    #[error("seed density must lie in [0, 1], got {0}")]
    SeedDensity(f64),

    #[error("cell box ratio must lie in (0, 1], got {0}")]
    CellBoxRatio(f32),

    #[error("update interval must be non-zero")]
    UpdateInterval,

    #[error("workgroup size must lie in 1..=16, got {0}")]
    WorkgroupSize(u32),
}

/// Configuration of one grid view.
///
/// Defaults reproduce a 640x640 canvas with 20px cells (a 32x32 grid) stepping
/// twice per second.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Edge of one cell in device pixels.
    pub cell_size: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,

    /// Scale of the selection outline relative to a cell.
    pub cell_box_ratio: f32,

    /// Probability that a cell starts alive.
    pub seed_density: f64,

    /// Fixed seed for the initial population; `None` draws from the thread RNG.
    pub seed: Option<u64>,

    /// Time between two simulation steps.
    pub update_interval: Duration,

    /// Edge of the square compute workgroup.
    pub workgroup_size: u32,

    pub leave_policy: LeavePolicy,

    /// Clear color behind the cell field.
    pub background: wgpu::Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            canvas_width: 640,
            canvas_height: 640,
            cell_box_ratio: 0.9,
            seed_density: 0.4,
            seed: None,
            update_interval: Duration::from_millis(500),
            workgroup_size: 8,
            leave_policy: LeavePolicy::Redraw,
            background: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.4,
                a: 1.0,
            },
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_size(mut self, px: f32) -> Self {
        self.cell_size = px;
        self
    }

    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn cell_box_ratio(mut self, ratio: f32) -> Self {
        self.cell_box_ratio = ratio;
        self
    }

    pub fn seed_density(mut self, density: f64) -> Self {
        self.seed_density = density;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    pub fn leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.leave_policy = policy;
        self
    }

    pub fn background(mut self, color: wgpu::Color) -> Self {
        self.background = color;
        self
    }

    /// Checks every field and derives the grid dimensions.
    pub fn validate(&self) -> Result<GridDimensions, ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Canvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(ConfigError::SeedDensity(self.seed_density));
        }
        if !(self.cell_box_ratio > 0.0 && self.cell_box_ratio <= 1.0) {
            return Err(ConfigError::CellBoxRatio(self.cell_box_ratio));
        }
        if self.update_interval.is_zero() {
            return Err(ConfigError::UpdateInterval);
        }
        if !(1..=16).contains(&self.workgroup_size) {
            return Err(ConfigError::WorkgroupSize(self.workgroup_size));
        }

        GridDimensions::from_canvas(self.canvas_width, self.canvas_height, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_32_by_32() {
        let dims = GridConfig::default().validate().unwrap();
        assert_eq!(dims, GridDimensions { cols: 32, rows: 32 });
    }

    #[test]
    fn non_square_canvas_floors_each_axis() {
        let dims = GridConfig::new().canvas(650, 300).validate().unwrap();
        assert_eq!(dims, GridDimensions { cols: 32, rows: 15 });
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert_eq!(
            GridConfig::new().cell_size(0.0).validate(),
            Err(ConfigError::CellSize(0.0))
        );
        assert!(matches!(
            GridConfig::new().cell_size(f32::NAN).validate(),
            Err(ConfigError::CellSize(_))
        ));
    }

    #[test]
    fn rejects_cells_larger_than_canvas() {
        let err = GridConfig::new().canvas(640, 10).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid { height: 10, .. }));
    }

    #[test]
    fn rejects_density_out_of_range() {
        assert_eq!(
            GridConfig::new().seed_density(1.5).validate(),
            Err(ConfigError::SeedDensity(1.5))
        );
    }

    #[test]
    fn rejects_zero_interval() {
        assert_eq!(
            GridConfig::new().update_interval(Duration::ZERO).validate(),
            Err(ConfigError::UpdateInterval)
        );
    }

    #[test]
    fn rejects_box_ratio_above_one() {
        assert_eq!(
            GridConfig::new().cell_box_ratio(1.2).validate(),
            Err(ConfigError::CellBoxRatio(1.2))
        );
    }

    #[test]
    fn default_leave_policy_redraws() {
        assert_eq!(GridConfig::default().leave_policy, LeavePolicy::Redraw);
    }
}
