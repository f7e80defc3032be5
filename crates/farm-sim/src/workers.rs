//! Worker spawning: one named thread per roster entry plus the baker, the
//! snapshot publisher, and the stats reporter.
//!
//! Workers run until the process ends — there is no shutdown protocol.  The
//! returned handles exist for naming/debugging; joining them blocks forever.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::info;

use farm_agents::{baker, chicken, child, cow, farmer, truck, AgentCtx};

use crate::error::SimResult;
use crate::world::{Role, World};

pub fn spawn_workers(world: &World) -> SimResult<Vec<JoinHandle<()>>> {
    let mut handles = Vec::with_capacity(world.roster.len() + 3);

    for spec in &world.roster {
        let ctx = AgentCtx::new(
            spec.id,
            spec.kind,
            spec.speed,
            world.config.seed,
            Arc::clone(&world.farm),
        );
        let role = spec.role;
        let name = format!("{}-{}", spec.kind, spec.id);
        handles.push(thread::Builder::new().name(name).spawn(move || match role {
            Role::Chicken => chicken::run(ctx),
            Role::Farmer => farmer::run(ctx),
            Role::Truck(cargo) => truck::run(ctx, cargo),
            Role::Child => child::run(ctx),
            Role::Cow => cow::run(ctx),
        })?);
    }

    let farm = Arc::clone(&world.farm);
    handles.push(
        thread::Builder::new()
            .name("baker".into())
            .spawn(move || baker::run(farm))?,
    );

    let farm = Arc::clone(&world.farm);
    let snapshot = Arc::clone(&world.snapshot);
    let interval = world.config.snapshot_interval;
    handles.push(thread::Builder::new().name("snapshot".into()).spawn(move || {
        loop {
            snapshot.publish(&farm.registry);
            thread::sleep(interval);
        }
    })?);

    let reporter = crate::report::StatsReporter::new(
        Arc::clone(&world.farm.stages.stats),
        world.config.stats_interval,
        world.config.stats_csv.as_deref(),
    )?;
    handles.push(
        thread::Builder::new()
            .name("stats".into())
            .spawn(move || reporter.run())?,
    );

    info!(workers = handles.len(), "workers spawned");
    Ok(handles)
}
