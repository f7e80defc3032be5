//! `farm-sim` — assembles a farm world and runs its workers.
//!
//! The split of responsibilities:
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`config`]| `SimConfig` and its build-time validation               |
//! | [`world`] | `WorldBuilder` → `World`: scenery, slots, stages, roster|
//! | [`workers`]| `spawn_workers`: agent threads + baker/snapshot/stats  |
//! | [`report`]| periodic stats dump and optional CSV history            |
//!
//! A typical embedding:
//!
//! ```no_run
//! use farm_sim::{SimConfig, WorldBuilder, spawn_workers};
//!
//! # fn main() -> Result<(), farm_sim::SimError> {
//! let world = WorldBuilder::new(SimConfig::default()).build()?;
//! let workers = spawn_workers(&world)?;
//! # let _ = workers;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod workers;
pub mod world;

#[cfg(test)]
mod tests;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use report::StatsReporter;
pub use workers::spawn_workers;
pub use world::{default_layout, AgentSpec, Role, World, WorldBuilder};
