//! The oven — a two-phase batch converter with a busy/idle state machine.
//!
//! The oven worker drives the cycle: wait for the cake cap, consume a pantry
//! batch, mark busy, bake with no locks held, then bank the cakes and
//! broadcast.  Children take cakes through [`Oven::take_cakes`], which is
//! the partial-fulfilment primitive — it returns whatever is in stock, and
//! the shopper loops until satisfied.

use std::sync::{Condvar, Mutex, PoisonError};

use tracing::debug;

/// Ingredient units of each kind consumed per bake.
pub const BAKE_BATCH_UNITS: u32 = 2;
/// Cakes produced per bake.
pub const BAKE_YIELD: u32 = 3;
/// A new bake starts only while `cakes <= BAKE_CAKE_GATE` — backpressure
/// that caps stock at `BAKE_CAKE_GATE + BAKE_YIELD` (6).
pub const BAKE_CAKE_GATE: u32 = 3;

#[derive(Debug, Default)]
struct OvenState {
    cakes: u32,
    busy: bool,
}

/// The oven monitor.
#[derive(Default)]
pub struct Oven {
    state: Mutex<OvenState>,
    cond: Condvar,
}

impl Oven {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait (unbounded) until a new bake is allowed: not busy and stock at
    /// or under the cake gate.  Shoppers taking cakes broadcast here.
    pub fn wait_for_bake_slot(&self) {
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let _st = self
            .cond
            .wait_while(st, |s| s.busy || s.cakes > BAKE_CAKE_GATE)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Transition Idle → Baking.  The caller must already have consumed the
    /// ingredient batch; exclusivity is the state-machine invariant.
    pub fn begin_bake(&self) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        debug_assert!(!st.busy, "two concurrent bakes");
        st.busy = true;
        debug!(cakes = st.cakes, "bake started");
    }

    /// Transition Baking → Idle: bank the yield and wake everyone (shoppers
    /// waiting on stock, plus the worker's own next cap check).
    pub fn finish_bake(&self) -> u32 {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        debug_assert!(st.busy, "finish without begin");
        st.cakes += BAKE_YIELD;
        st.busy = false;
        debug!(cakes = st.cakes, "bake finished");
        self.cond.notify_all();
        st.cakes
    }

    /// Take up to `want` cakes, waiting (unbounded) for stock to be
    /// non-empty first.  Returns the number actually taken — the shopper
    /// loops for the remainder (partial fulfilment).
    pub fn take_cakes(&self, want: u32) -> u32 {
        debug_assert!(want > 0);
        let st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut st = self
            .cond
            .wait_while(st, |s| s.cakes == 0)
            .unwrap_or_else(PoisonError::into_inner);
        let taken = st.cakes.min(want);
        st.cakes -= taken;
        debug!(taken, left = st.cakes, "cakes sold");
        // Dropping below the gate may unblock the bake worker.
        self.cond.notify_all();
        taken
    }

    /// Current stock (observability only).
    pub fn cakes(&self) -> u32 {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).cakes
    }

    /// `true` while a bake is in progress (observability only).
    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).busy
    }
}
