//! Errors surfaced by the drill engine.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrillError {
    /// The operation selector was not one of `a`, `s`, `m`, `d`.
    #[error("invalid operation specified: {0:?}")]
    InvalidOperation(char),

    #[error("invalid drill settings")]
    InvalidConfig(#[from] serde_json::Error),
}
