//! The bakery pantry — the final ingredient buffer, capacity 6 per kind.
//!
//! Trucks block on the delivery gate until their whole cargo fits; the oven
//! blocks on the batch gate until every ingredient reaches 2.  Both commits
//! are atomic under the pantry lock, and each broadcast wakes the other
//! side (a bake frees room for deliveries; a delivery may complete a batch).

use std::sync::{Condvar, Mutex, PoisonError};

use tracing::debug;

use crate::Goods;

/// Capacity cap per ingredient kind.
pub const PANTRY_CAPACITY: u32 = 6;

/// Current pantry contents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PantryLevels {
    pub eggs: u32,
    pub butter: u32,
    pub flour: u32,
    pub sugar: u32,
}

impl PantryLevels {
    fn fits(&self, g: Goods) -> bool {
        self.eggs + g.eggs <= PANTRY_CAPACITY
            && self.butter + g.butter <= PANTRY_CAPACITY
            && self.flour + g.flour <= PANTRY_CAPACITY
            && self.sugar + g.sugar <= PANTRY_CAPACITY
    }

    fn covers(&self, per_kind: u32) -> bool {
        self.eggs >= per_kind
            && self.butter >= per_kind
            && self.flour >= per_kind
            && self.sugar >= per_kind
    }
}

/// The pantry monitor.
#[derive(Default)]
pub struct Pantry {
    levels: Mutex<PantryLevels>,
    cond: Condvar,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a full cargo.  Waits (unbounded) until every ingredient of
    /// the cargo fits under the cap, then commits atomically.  Returns the
    /// levels after delivery.
    pub fn deliver(&self, cargo: Goods) -> PantryLevels {
        let levels = self.levels.lock().unwrap_or_else(PoisonError::into_inner);
        let mut levels = self
            .cond
            .wait_while(levels, |l| !l.fits(cargo))
            .unwrap_or_else(PoisonError::into_inner);
        levels.eggs += cargo.eggs;
        levels.butter += cargo.butter;
        levels.flour += cargo.flour;
        levels.sugar += cargo.sugar;
        debug!(%cargo, ?levels, "pantry delivery");
        self.cond.notify_all();
        *levels
    }

    /// Consume one bake batch (`per_kind` of each ingredient) atomically.
    /// Waits (unbounded) until the batch is covered.
    pub fn take_batch(&self, per_kind: u32) -> PantryLevels {
        let levels = self.levels.lock().unwrap_or_else(PoisonError::into_inner);
        let mut levels = self
            .cond
            .wait_while(levels, |l| !l.covers(per_kind))
            .unwrap_or_else(PoisonError::into_inner);
        levels.eggs -= per_kind;
        levels.butter -= per_kind;
        levels.flour -= per_kind;
        levels.sugar -= per_kind;
        debug!(per_kind, ?levels, "bake batch taken");
        self.cond.notify_all();
        *levels
    }

    /// Current levels (observability only).
    pub fn levels(&self) -> PantryLevels {
        *self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
