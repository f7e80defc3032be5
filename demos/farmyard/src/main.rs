//! The default farmyard, running until interrupted.
//!
//! Layout: two nests on the south edge, two barns in the north-west corner,
//! the bakery (pantry, oven, shop) in the east, and the single-lane road
//! crossing between them.  Set `RUST_LOG=debug` to watch every stage
//! transition; the stats board is dumped every five seconds at `info`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use farm_sim::{spawn_workers, SimConfig, WorldBuilder};

fn main() -> anyhow::Result<()> {
    // 1. Logging: RUST_LOG wins, default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Configure and validate.
    let config = SimConfig::default();

    // 3. Assemble the world.
    let world = WorldBuilder::new(config)
        .build()
        .context("assembling the farm world")?;

    // 4. Spawn every worker and hand the plane over to them.
    let workers = spawn_workers(&world).context("spawning farm workers")?;
    info!(workers = workers.len(), "farmyard is running — Ctrl-C to stop");

    // 5. The workers never finish; park the main thread on them.
    for worker in workers {
        if worker.join().is_err() {
            anyhow::bail!("a farm worker panicked");
        }
    }
    Ok(())
}
