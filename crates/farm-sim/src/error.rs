//! `farm-sim` error type.  Construction-time problems only — a running
//! simulation has no error paths (timeouts are `Option`/`bool` outcomes).

use thiserror::Error;

use farm_core::FarmError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Farm(#[from] FarmError),

    #[error("worker spawn failed: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("stats history: {0}")]
    Csv(#[from] csv::Error),
}

pub type SimResult<T> = Result<T, SimError>;
