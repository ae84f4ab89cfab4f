use std::time::Duration;

use anyhow::Result;

use cellgrid_engine::logging::{init_logging, LoggingConfig};
use cellgrid_life::{GridApplication, GridConfig, LeavePolicy};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Two independent grids side by side; each has its own device and timer.
    let left = GridConfig::default();
    let right = GridConfig::new()
        .cell_size(10.0)
        .seed(0x5eed)
        .update_interval(Duration::from_millis(250))
        .leave_policy(LeavePolicy::WaitForTick);

    log::info!("starting cellgrid studio");

    GridApplication::new()
        .view("grid-left", "cellgrid: 32x32", left)
        .view("grid-right", "cellgrid: 64x64 seeded", right)
        .run()
}
