//! Shared numeric helpers

pub mod constants;

use crate::error::{Result, SrsError};
use constants::{MAX_SAMPLES, RINGDOWN_FACTOR, RINGDOWN_MIN_DURATION, STEP_COUNT_TOLERANCE};

/// Total simulated time for an event lasting `event_duration` seconds
///
/// Leaves room for the oscillator ringdown after the event ends.
#[inline]
pub fn ringdown_duration(event_duration: f64) -> f64 {
    (RINGDOWN_FACTOR * event_duration).max(RINGDOWN_MIN_DURATION)
}

/// Number of whole steps of size `dt` needed to cover `duration`
///
/// Rounds up, except that a ratio within floating-point noise of an integer
/// is taken as that integer (0.01 / 25e-6 is 400 steps, not 401).
///
/// # Errors
///
/// `InvalidInput` when the ratio is not finite or the resulting series would
/// exceed [`MAX_SAMPLES`] samples.
pub fn step_count(duration: f64, dt: f64) -> Result<usize> {
    let ratio = duration / dt;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(SrsError::InvalidInput(format!(
            "cannot cover {duration} s with steps of {dt} s"
        )));
    }

    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= STEP_COUNT_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };

    // steps + 1 samples, including t = 0
    if steps >= MAX_SAMPLES as f64 {
        return Err(SrsError::InvalidInput(format!(
            "{duration} s at a step of {dt} s needs {steps:.0} samples, limit is {MAX_SAMPLES}"
        )));
    }
    Ok(steps as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SRS_TIMESTEP;

    #[test]
    fn test_ringdown_duration() {
        assert_eq!(ringdown_duration(0.011), 0.1);
        assert!((ringdown_duration(0.05) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_step_count_exact_ratio() {
        assert_eq!(step_count(0.01, SRS_TIMESTEP).unwrap(), 400);
        assert_eq!(step_count(0.1, SRS_TIMESTEP).unwrap(), 4000);
    }

    #[test]
    fn test_step_count_rounds_up() {
        assert_eq!(step_count(0.105, 0.01).unwrap(), 11);
        assert_eq!(step_count(0.0, 0.01).unwrap(), 0);
    }

    #[test]
    fn test_step_count_bounded() {
        assert!(step_count(f64::INFINITY, SRS_TIMESTEP).is_err());
        assert!(step_count(1e300, SRS_TIMESTEP).is_err());
        // 1e4 s at 25 us is 4e8 samples
        let err = step_count(1e4, SRS_TIMESTEP).unwrap_err();
        assert!(err.to_string().contains("limit"));
        assert_eq!(step_count(1000.0, SRS_TIMESTEP).unwrap(), 40_000_000);
    }
}
