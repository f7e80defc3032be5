//! Build-time validation, world assembly, and a short live smoke run.

use std::sync::Arc;
use std::time::{Duration, Instant};

use farm_agents::Pacing;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::world::WorldBuilder;

/// A configuration shrunk for fast test runs.
fn fast_config() -> SimConfig {
    SimConfig {
        chickens: 2,
        children: 1,
        cows: 0,
        chicken_speed: 8.0,
        person_speed: 8.0,
        truck_speed: 10.0,
        pacing: Pacing {
            step_interval:   Duration::from_millis(2),
            lay_pause:       Duration::from_millis(20),
            occupy_timeout:  Duration::from_millis(500),
            collect_timeout: Duration::from_millis(500),
            load_pause:      Duration::from_millis(20),
            eat_pause:       Duration::from_millis(50),
            bake_duration:   Duration::from_millis(50),
        },
        snapshot_interval: Duration::from_millis(20),
        stats_interval: Duration::from_secs(1),
        ..SimConfig::default()
    }
}

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_chickens_is_rejected() {
        let config = SimConfig { chickens: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn slow_snapshot_cadence_is_rejected() {
        // The renderer contract wants a frame at least every 100 ms.
        let config = SimConfig {
            snapshot_interval: Duration::from_millis(250),
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn too_many_children_is_rejected() {
        let config = SimConfig { children: 20, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }
}

#[cfg(test)]
mod building {
    use super::*;
    use crate::world::Role;
    use farm_agents::TruckRole;

    #[test]
    fn roster_matches_configured_counts() {
        let config = fast_config();
        let world = WorldBuilder::new(config.clone()).build().unwrap();

        // farmer + 2 trucks + chickens + children + cows
        assert_eq!(
            world.roster.len(),
            3 + config.chickens + config.children + config.cows
        );
        let trucks: Vec<_> = world
            .roster
            .iter()
            .filter_map(|s| match s.role {
                Role::Truck(cargo) => Some(cargo),
                _ => None,
            })
            .collect();
        assert_eq!(trucks, vec![TruckRole::EggButter, TruckRole::FlourSugar]);
    }

    #[test]
    fn world_starts_with_scenery_and_a_published_snapshot() {
        let world = WorldBuilder::new(fast_config()).build().unwrap();
        // At minimum: 2 nests, 2 barns, bakery, shop, crossing, plus actors.
        assert!(world.farm.registry.len() >= 7 + world.roster.len());
        let snap = world.snapshot.latest();
        assert_eq!(snap.entities.len(), world.farm.registry.len());
    }

    #[test]
    fn invalid_config_fails_the_build() {
        let config = SimConfig { chickens: 0, ..SimConfig::default() };
        assert!(WorldBuilder::new(config).build().is_err());
    }
}

#[cfg(test)]
mod smoke {
    use super::*;
    use crate::workers::spawn_workers;

    #[test]
    fn eggs_get_laid_in_a_live_world() {
        let world = WorldBuilder::new(fast_config()).build().unwrap();
        let stats = Arc::clone(&world.farm.stages.stats);
        let workers = spawn_workers(&world).unwrap();
        assert!(!workers.is_empty());

        // Chickens spawn a short walk from the nests; a lay should land well
        // inside this deadline even on a loaded machine.
        let deadline = Instant::now() + Duration::from_secs(10);
        while stats.read().eggs_laid == 0 {
            assert!(Instant::now() < deadline, "no eggs laid within deadline");
            std::thread::sleep(Duration::from_millis(50));
        }
        assert!(world.snapshot.latest().entities.len() > 0);
        // Workers run forever; they die with the test process.
    }
}

#[cfg(test)]
mod history {
    use super::*;
    use crate::report::StatsReporter;
    use farm_stages::StatsBoard;

    #[test]
    fn csv_history_appends_one_row_per_sample() {
        let path = std::env::temp_dir().join(format!(
            "farm-stats-{}-{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));
        let stats = Arc::new(StatsBoard::new());
        stats.record_eggs_laid(2);

        let mut reporter =
            StatsReporter::new(Arc::clone(&stats), Duration::from_secs(1), Some(&path)).unwrap();
        reporter.sample();
        stats.record_cakes_sold(1);
        reporter.sample();
        drop(reporter);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "header plus two samples");
        assert!(lines[0].starts_with("elapsed_ms,eggs_laid"));
        for row in &lines[1..] {
            assert_eq!(row.split(',').count(), 11);
        }
        let _ = std::fs::remove_file(&path);
    }
}
