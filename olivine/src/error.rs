use thiserror::Error;

/// Errors surfaced by the reorder engine and the service boundary.
#[derive(Error, Debug)]
pub enum OlivineError {
    /// The scoring strategy failed to pick a candidate while live entries
    /// remained in the working set. This indicates a defective strategy
    /// implementation rather than bad input, so it is fatal and never
    /// retried.
    #[error("reorder invariant violated: {0}")]
    InvariantViolation(String),

    /// The service executor chain was exhausted without any link accepting
    /// the request.
    #[error("no service executor accepted request: {0}")]
    NoServiceExecutor(String),

    /// Failure inside a plugged-in service executor.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type OlivineResult<T> = Result<T, OlivineError>;
