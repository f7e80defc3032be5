//! Chicken behavior: walk to a nest, take occupancy, lay, sit, release,
//! then head for the other nest.
//!
//! A timed-out occupancy attempt is not retried in place — the chicken
//! immediately re-targets the next nest, which is what bounds starvation
//! when several chickens crowd one nest.

use tracing::info;

use crate::AgentCtx;

pub fn run(mut ctx: AgentCtx) {
    info!(id = %ctx.id, "chicken worker started");
    let nest_count = ctx.farm.layout.nests.len();
    // Spread chickens across nests by id so they do not all start in one pile.
    let mut target = ctx.id.0 as usize % nest_count;
    loop {
        ctx.walk_to(ctx.farm.layout.nests[target]);
        let nest = &ctx.farm.stages.nests[target];
        if nest.try_occupy(ctx.id, ctx.farm.pacing.occupy_timeout) {
            let outcome = nest.lay(ctx.id, &mut ctx.rng);
            ctx.farm.stages.stats.record_eggs_laid(outcome.laid as u64);
            ctx.farm.slots.nest_eggs[target].sync(outcome.eggs as usize, &ctx.farm.registry);
            ctx.pause(ctx.farm.pacing.lay_pause);
            nest.release(ctx.id);
        }
        target = (target + 1) % nest_count;
    }
}
