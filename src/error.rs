use thiserror::Error;

/// Top-level error type for the overlap library.
#[derive(Debug, Error)]
pub enum ObbError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("half-extents must be non-negative, got ({x}, {y}, {z})")]
    NegativeExtents { x: f64, y: f64, z: f64 },

    #[error("invalid bounds: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to running an operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`ObbError`].
pub type Result<T> = std::result::Result<T, ObbError>;
