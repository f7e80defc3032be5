//! Simulation configuration and its build-time validation.

use std::path::PathBuf;
use std::time::Duration;

use farm_agents::Pacing;

use crate::error::{SimError, SimResult};

/// Agent-count ceilings: the default start-position tables hold this many
/// non-overlapping spawn spots per band.
pub const MAX_CHICKENS: usize = 6;
pub const MAX_CHILDREN: usize = 6;
pub const MAX_COWS: usize = 4;

/// Snapshot cadence ceiling: the rendering contract expects a frame at
/// least every 100 ms.
pub const MAX_SNAPSHOT_INTERVAL: Duration = Duration::from_millis(100);

/// Everything tunable about one simulation run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Global seed; each agent derives its own deterministic stream from it.
    pub seed: u64,
    pub chickens: usize,
    pub children: usize,
    pub cows: usize,
    /// Plane units per movement tick.
    pub chicken_speed: f32,
    pub person_speed: f32,
    pub truck_speed: f32,
    /// Behavior-loop sleeps and per-wait timeouts.
    pub pacing: Pacing,
    /// How often the registry is frozen into a fresh snapshot.
    pub snapshot_interval: Duration,
    /// How often the stats board is dumped.
    pub stats_interval: Duration,
    /// Append one CSV row per stats sample when set.
    pub stats_csv: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:              1,
            chickens:          3,
            children:          5,
            cows:              2,
            chicken_speed:     4.0,
            person_speed:      5.0,
            truck_speed:       7.0,
            pacing:            Pacing::default(),
            snapshot_interval: Duration::from_millis(100),
            stats_interval:    Duration::from_secs(5),
            stats_csv:         None,
        }
    }
}

impl SimConfig {
    /// Reject configurations the world builder cannot honor.
    pub fn validate(&self) -> SimResult<()> {
        if self.chickens == 0 || self.chickens > MAX_CHICKENS {
            return Err(SimError::Config(format!(
                "chickens must be 1..={MAX_CHICKENS}, got {}",
                self.chickens
            )));
        }
        if self.children == 0 || self.children > MAX_CHILDREN {
            return Err(SimError::Config(format!(
                "children must be 1..={MAX_CHILDREN}, got {}",
                self.children
            )));
        }
        if self.cows > MAX_COWS {
            return Err(SimError::Config(format!(
                "cows must be 0..={MAX_COWS}, got {}",
                self.cows
            )));
        }
        if self.snapshot_interval.is_zero() || self.snapshot_interval > MAX_SNAPSHOT_INTERVAL {
            return Err(SimError::Config(format!(
                "snapshot interval must be within (0, {MAX_SNAPSHOT_INTERVAL:?}], got {:?}",
                self.snapshot_interval
            )));
        }
        if self.stats_interval.is_zero() {
            return Err(SimError::Config("stats interval must be non-zero".into()));
        }
        for (name, speed) in [
            ("chicken_speed", self.chicken_speed),
            ("person_speed", self.person_speed),
            ("truck_speed", self.truck_speed),
        ] {
            if !(speed > 0.0) {
                return Err(SimError::Config(format!("{name} must be positive, got {speed}")));
            }
        }
        Ok(())
    }
}
