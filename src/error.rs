//! Error taxonomy for the SRS engine

use thiserror::Error;

/// Errors surfaced by the engine
///
/// Every public operation either produces a complete result or one of these.
/// No partial spectra or histories are ever returned.
#[derive(Error, Debug)]
pub enum SrsError {
    /// Caller supplied an out-of-domain or non-finite parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A custom record does not hold enough usable samples
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Timestep beyond the stability limit of the integrator
    #[error("integration unstable at {natural_frequency} Hz with dt = {dt} s (requires 2*pi*fn*dt < 2)")]
    Unstable { natural_frequency: f64, dt: f64 },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SrsError>;

/// Reject NaN and infinities with a descriptive message
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SrsError::InvalidInput(format!("{name} must be finite, got {value}")))
    }
}

/// Reject values that are not finite and strictly positive
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SrsError::InvalidInput(format!("{name} must be > 0, got {value}")))
    }
}
