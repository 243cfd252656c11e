use thiserror::Error;

/// Top-level error type for the chase-light engine.
#[derive(Debug, Error)]
pub enum ChaseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors related to curve construction and evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by path management on the spawn engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("path limit of {limit} reached")]
    PathLimitReached { limit: usize },

    #[error("path not found")]
    PathNotFound,
}

/// Convenience type alias for results using [`ChaseError`].
pub type Result<T> = std::result::Result<T, ChaseError>;
