//! The shop queue — one counter, strict FIFO admission, tail requeue.
//!
//! A child enters the queue, is admitted when it is both queue head and the
//! counter is free, shops, then vacates.  Re-entry after the eating delay
//! goes to the tail — that is the behavior loop's job; the monitor only
//! guarantees exclusivity and order.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};

use tracing::debug;

use farm_core::AgentId;

#[derive(Debug, Default)]
struct ShopState {
    current: Option<AgentId>,
    queue: VecDeque<AgentId>,
}

/// The shop admission monitor.
#[derive(Default)]
pub struct ShopQueue {
    state: Mutex<ShopState>,
    cond: Condvar,
}

impl ShopQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the queue and wait (unbounded) to become the exclusive shopper.
    pub fn enter(&self, id: AgentId) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        st.queue.push_back(id);
        debug!(child = %id, in_line = st.queue.len(), "joined shop queue");
        let mut st = self
            .cond
            .wait_while(st, |s| {
                s.current.is_some() || s.queue.front() != Some(&id)
            })
            .unwrap_or_else(PoisonError::into_inner);
        st.queue.pop_front();
        st.current = Some(id);
        debug!(child = %id, "admitted to counter");
    }

    /// Vacate the counter and wake the line.
    pub fn leave(&self, id: AgentId) {
        let mut st = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if st.current == Some(id) {
            st.current = None;
            self.cond.notify_all();
        }
    }

    /// Zero-based line position of `id`, if queued.  Drives where the child
    /// stands while waiting.
    pub fn position(&self, id: AgentId) -> Option<usize> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .queue
            .iter()
            .position(|&q| q == id)
    }

    /// Current shopper (observability only).
    pub fn current(&self) -> Option<AgentId> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }

    /// Number of children in line (observability only).
    pub fn waiting(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .queue
            .len()
    }
}
