//! Time subsystem.
//!
//! Provides fixed-interval timing without coupling to the runtime. Intended usage:
//! - one `StepTimer` per view
//! - the runtime sleeps until the earliest `deadline()` across views
//! - the view calls `poll(now)` when woken to learn how many ticks fired

mod step_timer;

pub use step_timer::StepTimer;
