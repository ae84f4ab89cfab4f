use wgpu::util::DeviceExt;

use crate::automaton::PingPong;
use crate::grid::{outline_offset, GridDimensions, SelectedCell};

use super::uniforms::{GridUniform, SelectionUniform};

const CELL_BYTES: u64 = std::mem::size_of::<u32>() as u64;

/// The two cell-state buffers of a view plus the uniforms bound next to them.
///
/// Buffer 0 holds the seed and is current at step 0. Only [`swap`](Self::swap)
/// changes which buffer is current.
pub struct CellStore {
    dims: GridDimensions,
    grid_ubo: wgpu::Buffer,
    selection_ubo: wgpu::Buffer,
    cells: PingPong<wgpu::Buffer>,
    /// Indexed by parity: reads `cells[p]`, writes `cells[1 - p]`.
    bind_groups: [wgpu::BindGroup; 2],
}

impl CellStore {
    /// Creates both buffers, uploads `seed` into buffer 0 and zeroes buffer 1.
    ///
    /// Panics if `seed` does not hold one value per cell.
    pub fn initialize(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        dims: GridDimensions,
        box_ratio: f32,
        seed: &[u32],
    ) -> Self {
        assert_eq!(seed.len(), dims.cell_count(), "seed has wrong size");

        let grid_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid grid ubo"),
            contents: bytemuck::bytes_of(&GridUniform::new(dims, box_ratio)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let selection_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid selection ubo"),
            contents: bytemuck::bytes_of(&SelectionUniform::new(outline_offset(
                SelectedCell::NONE,
                dims,
            ))),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let usage = wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST;
        let cell_a = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cellgrid cells A"),
            contents: bytemuck::cast_slice(seed),
            usage,
        });
        let cell_b = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cellgrid cells B"),
            size: dims.cell_count() as u64 * CELL_BYTES,
            usage,
            mapped_at_creation: false,
        });

        let cells = PingPong::new(cell_a, cell_b);
        // At step 0 the current buffer is A, so group A reads current and writes next.
        let (current, next) = (cells.current(), cells.next());
        let bind_groups = [
            Self::bind_group(device, layout, dims, &grid_ubo, &selection_ubo, current, next, "cellgrid bind group A"),
            Self::bind_group(device, layout, dims, &grid_ubo, &selection_ubo, next, current, "cellgrid bind group B"),
        ];

        Self {
            dims,
            grid_ubo,
            selection_ubo,
            cells,
            bind_groups,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        dims: GridDimensions,
        grid_ubo: &wgpu::Buffer,
        selection_ubo: &wgpu::Buffer,
        read: &wgpu::Buffer,
        write: &wgpu::Buffer,
        label: &'static str,
    ) -> wgpu::BindGroup {
        let expected = dims.cell_count() as u64 * CELL_BYTES;
        for buf in [read, write] {
            assert_eq!(
                buf.size(),
                expected,
                "cell buffer does not match a {}x{} grid",
                dims.cols,
                dims.rows
            );
        }

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: grid_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: read.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: write.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: selection_ubo.as_entire_binding(),
                },
            ],
        })
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    /// Completed simulation steps.
    pub fn step(&self) -> u64 {
        self.cells.step()
    }

    /// Bind group reading the current buffer and writing the next one.
    pub fn current_bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_groups[self.cells.parity()]
    }

    /// Makes the buffer written by the last dispatch current.
    pub fn swap(&mut self) {
        self.cells.swap();
    }

    /// Uploads the outline position for `selection`.
    pub fn write_selection(&self, queue: &wgpu::Queue, selection: SelectedCell) {
        let uniform = SelectionUniform::new(outline_offset(selection, self.dims));
        queue.write_buffer(&self.selection_ubo, 0, bytemuck::bytes_of(&uniform));
    }
}
