//! The egg barn — intermediate buffer between the farmer and the trucks.
//!
//! The two truck roles are deliberately asymmetric: the egg/butter truck is
//! gated here on `eggs ≥ 3` (unbounded wait — the farmer keeps delivering),
//! while the flour/sugar load has no stored counter at all and materializes
//! on demand.  Backpressure for the dry-goods truck exists only at the
//! pantry delivery gate.

use std::sync::{Condvar, Mutex, PoisonError};

use tracing::debug;

use crate::Goods;

/// Eggs per egg/butter truck load (butter is churned 1:1 at load time).
pub const TRUCK_LOAD_UNITS: u32 = 3;

/// The egg barn monitor.
#[derive(Default)]
pub struct Barn {
    eggs: Mutex<u32>,
    cond: Condvar,
}

impl Barn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Farmer drops off collected eggs; wakes any truck waiting at the gate.
    pub fn deposit(&self, n: u32) -> u32 {
        let mut eggs = self.eggs.lock().unwrap_or_else(PoisonError::into_inner);
        *eggs += n;
        debug!(deposited = n, eggs = *eggs, "barn deposit");
        self.cond.notify_all();
        *eggs
    }

    /// Egg/butter truck load: wait (unbounded) for 3 eggs, take them, and
    /// churn 3 butter on the spot.
    pub fn load_eggs_and_butter(&self) -> Goods {
        let eggs = self.eggs.lock().unwrap_or_else(PoisonError::into_inner);
        let mut eggs = self
            .cond
            .wait_while(eggs, |e| *e < TRUCK_LOAD_UNITS)
            .unwrap_or_else(PoisonError::into_inner);
        *eggs -= TRUCK_LOAD_UNITS;
        debug!(remaining = *eggs, "egg/butter truck loaded");
        Goods::eggs_and_butter(TRUCK_LOAD_UNITS)
    }

    /// Dry-goods load: eager and unconditional — flour and sugar have no
    /// upstream buffer to run dry.
    pub fn load_flour_and_sugar() -> Goods {
        Goods::flour_and_sugar(TRUCK_LOAD_UNITS)
    }

    /// Current stored egg count (observability only).
    pub fn eggs(&self) -> u32 {
        *self.eggs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
