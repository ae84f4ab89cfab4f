//! Grid geometry: dimensions, the selected cell, and the mappings between
//! pointer pixels, grid cells and clip space.
//!
//! Clip-space placement mirrors the vertex shaders exactly:
//!
//! ```text
//! offset(cell) = cell / dims * 2
//! clip         = (local * scale + 1) / dims - 1 + offset
//! ```
//!
//! so `local` in `[-1, 1]` at `scale = 1` covers exactly one cell.

use crate::config::ConfigError;

/// Number of cell columns and rows. Both are always non-zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridDimensions {
    pub cols: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(cols: u32, rows: u32) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::ZeroDimension { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Whole cells that fit a `width` x `height` canvas.
    pub fn from_canvas(width: u32, height: u32, cell_size: f32) -> Result<Self, ConfigError> {
        let cols = (width as f32 / cell_size).floor() as u32;
        let rows = (height as f32 / cell_size).floor() as u32;
        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self { cols, rows })
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Flat index of `(col, row)`; row-major.
    #[inline]
    pub fn index(self, col: u32, row: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coords(self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index % cols) as u32, (index / cols) as u32)
    }

    pub fn as_vec2(self) -> [f32; 2] {
        [self.cols as f32, self.rows as f32]
    }
}

/// Grid cell under the pointer, or [`SelectedCell::NONE`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SelectedCell {
    pub col: i32,
    pub row: i32,
}

impl SelectedCell {
    /// Nothing selected: pointer outside the canvas or not moved yet.
    pub const NONE: Self = Self { col: -1, row: -1 };

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for SelectedCell {
    fn default() -> Self {
        Self::NONE
    }
}

/// Offset that parks the outline outside clip space.
///
/// Any `scale <= 1` keeps the whole outline below `-1` on both axes.
pub const OFF_GRID_OFFSET: [f32; 2] = [-4.0, -4.0];

/// Maps a pointer position (device pixels, top-left origin) to a grid cell.
///
/// The grid's origin is bottom-left, so the row is flipped. Positions outside
/// `[0, width) x [0, height)` map to [`SelectedCell::NONE`].
pub fn map_pointer(x: f32, y: f32, width: u32, height: u32, dims: GridDimensions) -> SelectedCell {
    let (w, h) = (width as f32, height as f32);
    if !(x >= 0.0 && y >= 0.0 && x < w && y < h) {
        return SelectedCell::NONE;
    }

    let col = ((x / w * dims.cols as f32).floor() as u32).min(dims.cols - 1);
    let row_from_top = ((y / h * dims.rows as f32).floor() as u32).min(dims.rows - 1);
    let row = dims.rows - 1 - row_from_top;

    SelectedCell::new(col as i32, row as i32)
}

/// Clip-space translation of the cell at `(col, row)`.
#[inline]
pub fn cell_offset(col: f32, row: f32, dims: GridDimensions) -> [f32; 2] {
    [col / dims.cols as f32 * 2.0, row / dims.rows as f32 * 2.0]
}

/// Translation uploaded for the selection outline.
pub fn outline_offset(selection: SelectedCell, dims: GridDimensions) -> [f32; 2] {
    if selection.is_none() {
        return OFF_GRID_OFFSET;
    }
    cell_offset(selection.col as f32, selection.row as f32, dims)
}

/// CPU mirror of the vertex shader placement, see the module docs.
#[inline]
pub fn clip_position(local: [f32; 2], scale: f32, offset: [f32; 2], dims: GridDimensions) -> [f32; 2] {
    [
        (local[0] * scale + 1.0) / dims.cols as f32 - 1.0 + offset[0],
        (local[1] * scale + 1.0) / dims.rows as f32 - 1.0 + offset[1],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d32() -> GridDimensions {
        GridDimensions::new(32, 32).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── GridDimensions ────────────────────────────────────────────────────

    #[test]
    fn zero_axis_rejected() {
        assert_eq!(
            GridDimensions::new(0, 4),
            Err(ConfigError::ZeroDimension { cols: 0, rows: 4 })
        );
        let err = GridDimensions::new(4, 0).unwrap_err();
        assert_eq!(err.to_string(), "grid must have at least one column and one row, got 4x0");
    }

    #[test]
    fn index_and_coords_are_inverse() {
        let dims = GridDimensions::new(5, 3).unwrap();
        assert_eq!(dims.index(4, 2), 14);
        assert_eq!(dims.coords(14), (4, 2));
        assert_eq!(dims.coords(0), (0, 0));
        assert_eq!(dims.cell_count(), 15);
    }

    // ── map_pointer ───────────────────────────────────────────────────────

    #[test]
    fn top_left_pixel_is_top_row() {
        assert_eq!(map_pointer(0.0, 0.0, 640, 640, d32()), SelectedCell::new(0, 31));
    }

    #[test]
    fn bottom_right_pixel_is_bottom_row() {
        assert_eq!(map_pointer(639.0, 639.0, 640, 640, d32()), SelectedCell::new(31, 0));
    }

    #[test]
    fn pixels_within_one_cell_agree() {
        let a = map_pointer(41.0, 41.0, 640, 640, d32());
        let b = map_pointer(59.5, 42.0, 640, 640, d32());
        assert_eq!(a, b);
        assert_eq!(a, SelectedCell::new(2, 29));
    }

    #[test]
    fn outside_canvas_is_none() {
        assert!(map_pointer(-1.0, 10.0, 640, 640, d32()).is_none());
        assert!(map_pointer(10.0, 640.0, 640, 640, d32()).is_none());
        assert!(map_pointer(640.0, 0.0, 640, 640, d32()).is_none());
        assert!(map_pointer(f32::NAN, 0.0, 640, 640, d32()).is_none());
    }

    #[test]
    fn mapping_follows_surface_size() {
        // Same 32x32 grid stretched over a 1280x1280 surface.
        assert_eq!(map_pointer(1279.0, 0.0, 1280, 1280, d32()), SelectedCell::new(31, 31));
    }

    // ── clip space ────────────────────────────────────────────────────────

    #[test]
    fn adjacent_cells_tile_exactly() {
        let dims = d32();
        let right_edge_of_0 = clip_position([1.0, 0.0], 1.0, cell_offset(0.0, 0.0, dims), dims);
        let left_edge_of_1 = clip_position([-1.0, 0.0], 1.0, cell_offset(1.0, 0.0, dims), dims);
        assert!(approx(right_edge_of_0[0], left_edge_of_1[0]));
    }

    #[test]
    fn grid_spans_full_clip_space() {
        let dims = d32();
        let first = clip_position([-1.0, -1.0], 1.0, cell_offset(0.0, 0.0, dims), dims);
        let last = clip_position([1.0, 1.0], 1.0, cell_offset(31.0, 31.0, dims), dims);
        assert!(approx(first[0], -1.0) && approx(first[1], -1.0));
        assert!(approx(last[0], 1.0) && approx(last[1], 1.0));
    }

    #[test]
    fn dead_cell_collapses_to_a_point() {
        let dims = d32();
        let off = cell_offset(3.0, 7.0, dims);
        let a = clip_position([-0.8, -0.8], 0.0, off, dims);
        let b = clip_position([0.8, 0.8], 0.0, off, dims);
        assert_eq!(a, b);
    }

    #[test]
    fn sentinel_outline_is_fully_off_grid() {
        let dims = d32();
        let off = outline_offset(SelectedCell::NONE, dims);
        for corner in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]] {
            let p = clip_position(corner, 1.0, off, dims);
            assert!(p[0] < -1.0 && p[1] < -1.0, "corner {corner:?} at {p:?} is visible");
        }
    }

    #[test]
    fn selected_outline_sits_on_its_cell() {
        let dims = d32();
        assert_eq!(outline_offset(SelectedCell::new(16, 0), dims), [1.0, 0.0]);
        let centre = clip_position([0.0, 0.0], 0.9, outline_offset(SelectedCell::new(0, 0), dims), dims);
        assert!(approx(centre[0], -1.0 + 1.0 / 32.0));
    }

    #[test]
    fn default_selection_is_sentinel() {
        assert_eq!(SelectedCell::default(), SelectedCell::new(-1, -1));
    }
}
