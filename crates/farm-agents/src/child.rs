//! Child behavior: queue at the shop, buy a random 1–6 cakes with partial
//! fulfilment, wander off to eat, rejoin the line at the tail.
//!
//! A purchase larger than the current stock does not fail and does not give
//! up the counter: the child keeps taking whatever the oven produces until
//! the full order is in hand.

use tracing::{debug, info};

use crate::AgentCtx;

pub fn run(mut ctx: AgentCtx) {
    info!(id = %ctx.id, "child worker started");
    let layout = ctx.farm.layout.clone();
    loop {
        ctx.walk_to(layout.queue_tail);
        ctx.farm.stages.shop.enter(ctx.id);
        ctx.walk_to(layout.counter);

        let want: u32 = ctx.rng.gen_range(1..=6);
        debug!(child = %ctx.id, want, "at the counter");
        let mut remaining = want;
        while remaining > 0 {
            let taken = ctx.farm.stages.oven.take_cakes(remaining);
            remaining -= taken;
            ctx.farm.stages.stats.record_cakes_sold(taken as u64);
            let shelf = ctx.farm.stages.oven.cakes();
            ctx.farm.slots.cakes.sync(shelf as usize, &ctx.farm.registry);
        }
        debug!(child = %ctx.id, bought = want, "order complete");

        ctx.farm.stages.shop.leave(ctx.id);
        ctx.walk_to(layout.eating_spot);
        ctx.pause(ctx.farm.pacing.eat_pause);
    }
}
