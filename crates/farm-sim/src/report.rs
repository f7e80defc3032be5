//! Periodic stats reporting: a free-form text dump via `tracing` plus an
//! optional CSV history file (one row per sample).

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use farm_stages::{BakeryStats, StatsBoard};

use crate::error::SimResult;

const CSV_HEADER: [&str; 11] = [
    "elapsed_ms",
    "eggs_laid",
    "eggs_used",
    "butter_produced",
    "butter_used",
    "flour_produced",
    "flour_used",
    "sugar_produced",
    "sugar_used",
    "cakes_produced",
    "cakes_sold",
];

pub struct StatsReporter {
    stats:    Arc<StatsBoard>,
    interval: Duration,
    history:  Option<csv::Writer<File>>,
    started:  Instant,
}

impl StatsReporter {
    /// Open the CSV history (writing the header row) if a path is given.
    pub fn new(
        stats: Arc<StatsBoard>,
        interval: Duration,
        csv_path: Option<&Path>,
    ) -> SimResult<Self> {
        let history = match csv_path {
            Some(path) => {
                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(CSV_HEADER)?;
                writer.flush().map_err(csv::Error::from)?;
                Some(writer)
            }
            None => None,
        };
        Ok(Self { stats, interval, history, started: Instant::now() })
    }

    /// Dump and (optionally) append one history row.
    pub fn sample(&mut self) {
        let stats = self.stats.read();
        info!("{stats}");
        if let Some(writer) = self.history.as_mut() {
            let elapsed = self.started.elapsed();
            if let Err(error) = append_row(writer, elapsed, stats) {
                // History is best-effort; the simulation keeps running.
                warn!(%error, "stats history write failed");
            }
        }
    }

    pub fn run(mut self) {
        loop {
            thread::sleep(self.interval);
            self.sample();
        }
    }
}

fn append_row(
    writer: &mut csv::Writer<File>,
    elapsed: Duration,
    s: BakeryStats,
) -> Result<(), csv::Error> {
    writer.write_record([
        elapsed.as_millis().to_string(),
        s.eggs_laid.to_string(),
        s.eggs_used.to_string(),
        s.butter_produced.to_string(),
        s.butter_used.to_string(),
        s.flour_produced.to_string(),
        s.flour_used.to_string(),
        s.sugar_produced.to_string(),
        s.sugar_used.to_string(),
        s.cakes_produced.to_string(),
        s.cakes_sold.to_string(),
    ])?;
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
