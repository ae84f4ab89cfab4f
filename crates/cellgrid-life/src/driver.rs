//! Scheduling state of one grid view, independent of the GPU.
//!
//! Two producers feed the view: the step timer and pointer events. Both only
//! record what the next frame has to do and report whether a redraw is needed;
//! the frame itself consumes the recorded work.

use std::time::{Duration, Instant};

use cellgrid_engine::time::StepTimer;

use crate::config::LeavePolicy;
use crate::grid::{map_pointer, GridDimensions, SelectedCell};

#[derive(Debug, Clone)]
pub struct GridDriver {
    dims: GridDimensions,
    selection: SelectedCell,
    timer: StepTimer,
    leave_policy: LeavePolicy,

    pending_steps: u32,
    selection_dirty: bool,
}

impl GridDriver {
    /// Arms the step timer at `now`. The selection starts as the sentinel,
    /// which the store already holds, so nothing is pending.
    pub fn new(dims: GridDimensions, interval: Duration, leave_policy: LeavePolicy, now: Instant) -> Self {
        Self {
            dims,
            selection: SelectedCell::NONE,
            timer: StepTimer::new(interval, now),
            leave_policy,
            pending_steps: 0,
            selection_dirty: false,
        }
    }

    pub fn selection(&self) -> SelectedCell {
        self.selection
    }

    pub fn pending_steps(&self) -> u32 {
        self.pending_steps
    }

    /// When the timer wants to be polled next.
    pub fn deadline(&self) -> Instant {
        self.timer.deadline()
    }

    /// Queues one simulation step if the timer fired. Returns whether to redraw.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.pending_steps += 1;
        log::trace!("tick {} queued, {} pending", self.timer.fired(), self.pending_steps);
        true
    }

    /// Maps a pointer position on a `width` x `height` surface to a cell.
    ///
    /// Returns `false` while the pointer stays in the selected cell.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, width: u32, height: u32) -> bool {
        let cell = map_pointer(x, y, width, height, self.dims);
        if cell == self.selection {
            return false;
        }
        log::debug!("selection {:?} -> {:?}", self.selection, cell);
        self.selection = cell;
        self.selection_dirty = true;
        true
    }

    /// Resets the selection to the sentinel; the redraw follows the leave policy.
    pub fn on_pointer_leave(&mut self) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.selection = SelectedCell::NONE;
        self.selection_dirty = true;
        self.leave_policy == LeavePolicy::Redraw
    }

    /// Steps queued since the last frame; resets the queue.
    pub fn take_pending_steps(&mut self) -> u32 {
        std::mem::take(&mut self.pending_steps)
    }

    /// Selection to upload before drawing, if it changed since the last upload.
    pub fn take_selection_upload(&mut self) -> Option<SelectedCell> {
        std::mem::take(&mut self.selection_dirty).then_some(self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn driver(policy: LeavePolicy) -> (GridDriver, Instant) {
        let t0 = Instant::now();
        let dims = GridDimensions::new(32, 32).unwrap();
        (GridDriver::new(dims, 500 * MS, policy, t0), t0)
    }

    // ── start ─────────────────────────────────────────────────────────────

    #[test]
    fn starts_with_sentinel_and_nothing_pending() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        assert!(d.selection().is_none());
        assert_eq!(d.take_pending_steps(), 0);
        assert_eq!(d.take_selection_upload(), None);
    }

    // ── timer ─────────────────────────────────────────────────────────────

    #[test]
    fn timer_queues_one_step_per_firing() {
        let (mut d, t0) = driver(LeavePolicy::Redraw);
        assert!(!d.on_timer(t0 + 100 * MS));
        assert!(d.on_timer(t0 + 500 * MS));
        assert!(d.on_timer(t0 + 1000 * MS));
        assert_eq!(d.take_pending_steps(), 2);
        assert_eq!(d.take_pending_steps(), 0);
    }

    #[test]
    fn deadline_follows_timer() {
        let (mut d, t0) = driver(LeavePolicy::Redraw);
        assert_eq!(d.deadline(), t0 + 500 * MS);
        d.on_timer(t0 + 500 * MS);
        assert_eq!(d.deadline(), t0 + 1000 * MS);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn move_selects_cell_and_requests_redraw() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        assert!(d.on_pointer_move(0.0, 0.0, 640, 640));
        assert_eq!(d.selection(), SelectedCell::new(0, 31));
        assert_eq!(d.take_selection_upload(), Some(SelectedCell::new(0, 31)));
        assert_eq!(d.take_selection_upload(), None);
    }

    #[test]
    fn moving_within_cell_is_debounced() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        assert!(d.on_pointer_move(41.0, 41.0, 640, 640));
        d.take_selection_upload();
        assert!(!d.on_pointer_move(55.0, 50.0, 640, 640));
        assert_eq!(d.take_selection_upload(), None);
    }

    #[test]
    fn pointer_never_queues_steps() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        d.on_pointer_move(10.0, 10.0, 640, 640);
        d.on_pointer_move(300.0, 300.0, 640, 640);
        d.on_pointer_leave();
        assert_eq!(d.take_pending_steps(), 0);
    }

    #[test]
    fn leave_with_redraw_policy_redraws() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        d.on_pointer_move(100.0, 100.0, 640, 640);
        d.take_selection_upload();
        assert!(d.on_pointer_leave());
        assert_eq!(d.take_selection_upload(), Some(SelectedCell::NONE));
    }

    #[test]
    fn leave_with_wait_policy_defers_to_tick() {
        let (mut d, t0) = driver(LeavePolicy::WaitForTick);
        d.on_pointer_move(100.0, 100.0, 640, 640);
        d.take_selection_upload();
        assert!(!d.on_pointer_leave());
        assert!(d.selection().is_none());

        // The next tick's frame still uploads the sentinel.
        assert!(d.on_timer(t0 + 500 * MS));
        assert_eq!(d.take_selection_upload(), Some(SelectedCell::NONE));
    }

    #[test]
    fn leave_without_selection_is_noop() {
        let (mut d, _) = driver(LeavePolicy::Redraw);
        assert!(!d.on_pointer_leave());
        assert_eq!(d.take_selection_upload(), None);
    }
}
