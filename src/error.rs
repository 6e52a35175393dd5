use thiserror::Error;

/// Errors raised when building bodies or a simulation from bad input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    #[error("body mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },
    #[error("world bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
    #[error("maximum body count must be at least 1")]
    ZeroCapacity,
    #[error("target frame rate must be at least 1")]
    InvalidFps,
}

pub type SimResult<T> = Result<T, SimError>;
