//! Simulation error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FarmError` via `From` impls, or keep them separate and wrap `FarmError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.
//!
//! Bounded-wait timeouts are deliberately NOT errors anywhere in the
//! workspace — they are normal outcomes expressed as `Option`/`bool`.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `farm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FarmError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("display slots hold {capacity} but stage can show {required} concurrently")]
    DisplaySlotsTooSmall { capacity: usize, required: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `farm-*` crates.
pub type FarmResult<T> = Result<T, FarmError>;
