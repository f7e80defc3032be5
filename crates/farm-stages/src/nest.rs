//! The nest — a capacity-3 egg buffer with single-writer exclusivity.
//!
//! Chickens take occupancy before laying; the farmer collects without taking
//! occupancy but only while the nest is free.  Both waits are bounded: a
//! timed-out chicken or farmer simply walks to the other nest, which is what
//! bounds worst-case starvation (there is no occupancy queue).

use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;

use farm_core::{AgentId, AgentRng};

/// Maximum eggs a nest can hold.
pub const NEST_CAPACITY: u8 = 3;

#[derive(Debug, Default)]
struct NestState {
    eggs: u8,
    occupant: Option<AgentId>,
}

/// What a lay attempt produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayOutcome {
    /// Eggs actually laid this visit (0 when the nest was already full —
    /// that is a normal outcome, not an error).
    pub laid: u8,
    /// Total eggs in the nest afterwards.
    pub eggs: u8,
}

/// One nest monitor.
#[derive(Default)]
pub struct Nest {
    state: Mutex<NestState>,
    cond: Condvar,
}

impl Nest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load eggs at world build time (the reference farm starts one nest
    /// with a random count).
    pub fn seed_eggs(&self, n: u8) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        st.eggs = n.min(NEST_CAPACITY);
    }

    /// Wait (bounded) until the nest is free or already held by `id`, then
    /// take occupancy.  Returns `false` on timeout.
    pub fn try_occupy(&self, id: AgentId, timeout: Duration) -> bool {
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut st, result) = self
            .cond
            .wait_timeout_while(st, timeout, |s| {
                s.occupant.is_some() && s.occupant != Some(id)
            })
            .unwrap_or_else(PoisonError::into_inner);
        if result.timed_out() {
            return false;
        }
        st.occupant = Some(id);
        true
    }

    /// Lay a random 1–3 eggs, clamped to the remaining capacity.
    ///
    /// Caller must hold occupancy (checked in debug builds).  A full nest
    /// lays 0 and still succeeds.
    pub fn lay(&self, id: AgentId, rng: &mut AgentRng) -> LayOutcome {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        debug_assert_eq!(st.occupant, Some(id), "lay without occupancy");
        let wanted = rng.gen_range(1..=3u8);
        let laid = wanted.min(NEST_CAPACITY - st.eggs);
        st.eggs += laid;
        debug!(chicken = %id, laid, eggs = st.eggs, "laid eggs");
        LayOutcome { laid, eggs: st.eggs }
    }

    /// Release occupancy held by `id` and wake all waiters.
    pub fn release(&self, id: AgentId) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if st.occupant == Some(id) {
            st.occupant = None;
            self.cond.notify_all();
        }
    }

    /// Wait (bounded) until the nest is unoccupied and holds at least one
    /// egg, then take everything.  `None` on timeout — the farmer switches
    /// target nest and retries, so it never blocks forever.
    pub fn collect(&self, timeout: Duration) -> Option<u8> {
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut st, result) = self
            .cond
            .wait_timeout_while(st, timeout, |s| s.occupant.is_some() || s.eggs == 0)
            .unwrap_or_else(PoisonError::into_inner);
        if result.timed_out() {
            return None;
        }
        let collected = std::mem::take(&mut st.eggs);
        debug!(collected, "nest emptied");
        self.cond.notify_all();
        Some(collected)
    }

    /// Current egg count (observability only).
    pub fn eggs(&self) -> u8 {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).eggs
    }

    /// Current occupant (observability only).
    pub fn occupant(&self) -> Option<AgentId> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .occupant
    }
}
