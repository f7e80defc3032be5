//! Truck behavior: load at a barn, drive to the bakery through the
//! single-lane intersection, deliver at the pantry gate, drive back.
//!
//! The two roles are asymmetric on purpose: the egg/butter truck blocks at
//! the barn until 3 eggs are stored, while the dry-goods truck loads
//! unconditionally and feels backpressure only at the pantry delivery gate.

use tracing::{debug, info};

use farm_stages::{Barn, Goods};

use crate::AgentCtx;

/// Which cargo this truck hauls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TruckRole {
    EggButter,
    FlourSugar,
}

impl TruckRole {
    pub fn texture(self) -> &'static str {
        match self {
            TruckRole::EggButter => "truck_eggs",
            TruckRole::FlourSugar => "truck_flour",
        }
    }
}

fn load(ctx: &AgentCtx, role: TruckRole) -> Goods {
    let stats = &ctx.farm.stages.stats;
    match role {
        TruckRole::EggButter => {
            // Blocks until the farmer has stored a full load.
            let cargo = ctx.farm.stages.barn.load_eggs_and_butter();
            stats.record_butter_produced(cargo.butter as u64);
            cargo
        }
        TruckRole::FlourSugar => {
            let cargo = Barn::load_flour_and_sugar();
            stats.record_flour_produced(cargo.flour as u64);
            stats.record_sugar_produced(cargo.sugar as u64);
            cargo
        }
    }
}

/// Cross the intersection from `from` to `to`, holding the lane only while
/// inside it.
fn cross(ctx: &mut AgentCtx, from: (f32, f32), to: (f32, f32)) {
    ctx.walk_to(from);
    ctx.farm.stages.intersection.enter(ctx.id);
    ctx.walk_to(to);
    ctx.farm.stages.intersection.leave(ctx.id);
}

pub fn run(mut ctx: AgentCtx, role: TruckRole) {
    info!(id = %ctx.id, ?role, "truck worker started");
    let layout = ctx.farm.layout.clone();
    // Each role waits at its own bay and dock so a gate-blocked truck can
    // never stand on a spot another worker must reach.
    let (bay, dock) = match role {
        TruckRole::EggButter => (layout.egg_bay, layout.egg_dock),
        TruckRole::FlourSugar => (layout.dry_bay, layout.dry_dock),
    };
    loop {
        ctx.walk_to(bay);
        let cargo = load(&ctx, role);
        debug!(truck = %ctx.id, %cargo, "loaded");
        ctx.pause(ctx.farm.pacing.load_pause);

        cross(&mut ctx, layout.road_out_start, layout.road_out_end);

        ctx.walk_to(dock);
        let levels = ctx.farm.stages.pantry.deliver(cargo);
        ctx.farm.slots.pantry.sync(levels, &ctx.farm.registry);
        debug!(truck = %ctx.id, ?levels, "delivered");
        ctx.pause(ctx.farm.pacing.load_pause);

        cross(&mut ctx, layout.road_in_start, layout.road_in_end);
    }
}
