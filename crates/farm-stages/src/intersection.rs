//! The road intersection — single-lane mutual exclusion with strict FIFO
//! admission.  Grants follow arrival order exactly: a waiter is admitted
//! only when it is at the queue head AND the lane is free, so a later
//! arrival can never overtake an earlier one even on a lucky wakeup.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};

use tracing::debug;

use farm_core::AgentId;

#[derive(Debug, Default)]
struct IntersectionState {
    current: Option<AgentId>,
    queue: VecDeque<AgentId>,
}

/// The intersection monitor.
#[derive(Default)]
pub struct Intersection {
    state: Mutex<IntersectionState>,
    cond: Condvar,
}

impl Intersection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue and wait (unbounded) for the lane.  Returns once `id` holds
    /// exclusive occupancy.
    pub fn enter(&self, id: AgentId) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        st.queue.push_back(id);
        debug!(truck = %id, waiting = st.queue.len(), "queued at intersection");
        let mut st = self
            .cond
            .wait_while(st, |s| {
                s.current.is_some() || s.queue.front() != Some(&id)
            })
            .unwrap_or_else(PoisonError::into_inner);
        st.queue.pop_front();
        st.current = Some(id);
        debug!(truck = %id, "entered intersection");
    }

    /// Release the lane and wake the next waiter.
    pub fn leave(&self, id: AgentId) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if st.current == Some(id) {
            st.current = None;
            debug!(truck = %id, "left intersection");
            self.cond.notify_all();
        }
    }

    /// Current occupant (observability only).
    pub fn current(&self) -> Option<AgentId> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }

    /// Number of queued waiters (observability only).
    pub fn waiting(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .queue
            .len()
    }
}
