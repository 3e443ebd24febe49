//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A query arrived before any catalog was loaded. Recoverable by
    /// loading a catalog; distinct from an internal failure.
    #[error("no catalog loaded: load products before querying")]
    NotReady,

    /// Score weights do not sum to 1.0, which would let hybrid scores
    /// leave the [0, 1] range.
    #[error("score weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },
}
