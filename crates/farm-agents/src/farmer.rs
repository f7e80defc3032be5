//! Farmer behavior: patrol the nests, collect whatever is there, haul it to
//! the egg barn.
//!
//! Collection is a bounded wait — an occupied or empty nest times out and
//! the farmer simply moves on to the other one, so no single stubborn
//! chicken can stall the whole egg pipeline.

use tracing::{debug, info};

use crate::AgentCtx;

pub fn run(mut ctx: AgentCtx) {
    info!(id = %ctx.id, "farmer worker started");
    let nest_count = ctx.farm.layout.nests.len();
    let mut target = 0usize;
    loop {
        ctx.walk_to(ctx.farm.layout.nests[target]);
        if let Some(eggs) = ctx.farm.stages.nests[target].collect(ctx.farm.pacing.collect_timeout)
        {
            ctx.farm.slots.nest_eggs[target].sync(0, &ctx.farm.registry);
            ctx.walk_to(ctx.farm.layout.egg_barn);
            let stored = ctx.farm.stages.barn.deposit(eggs as u32);
            debug!(collected = eggs, stored, "farmer deposited at the barn");
            ctx.pause(ctx.farm.pacing.load_pause);
        }
        target = (target + 1) % nest_count;
    }
}
