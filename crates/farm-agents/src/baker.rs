//! The oven worker: the one thread that drives the Idle → Baking → Idle
//! cycle.
//!
//! Cycle order matters: the cake-cap gate is checked first so ingredients
//! are never consumed for a bake that cannot start, and the bake delay
//! elapses with no locks held.

use std::sync::Arc;
use std::thread;

use tracing::{debug, info};

use farm_stages::{BAKE_BATCH_UNITS, BAKE_YIELD};

use crate::Farm;

pub fn run(farm: Arc<Farm>) {
    info!("oven worker started");
    loop {
        farm.stages.oven.wait_for_bake_slot();
        let levels = farm.stages.pantry.take_batch(BAKE_BATCH_UNITS);

        let stats = &farm.stages.stats;
        stats.record_eggs_used(BAKE_BATCH_UNITS as u64);
        stats.record_butter_used(BAKE_BATCH_UNITS as u64);
        stats.record_flour_used(BAKE_BATCH_UNITS as u64);
        stats.record_sugar_used(BAKE_BATCH_UNITS as u64);
        farm.slots.pantry.sync(levels, &farm.registry);

        farm.stages.oven.begin_bake();
        thread::sleep(farm.pacing.bake_duration);
        let shelf = farm.stages.oven.finish_bake();

        stats.record_cakes_produced(BAKE_YIELD as u64);
        farm.slots.cakes.sync(shelf as usize, &farm.registry);
        debug!(shelf, "bake complete");
    }
}
