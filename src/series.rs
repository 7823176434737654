//! Uniformly sampled time series

use crate::block::AlgebraicBlock;
use crate::error::{ensure_positive, Result, SrsError};
use crate::utils::step_count;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Base acceleration sampled at a constant step
///
/// Sample `i` sits at `t = i * dt`; times are computed from the index, never
/// accumulated, so the axis does not drift over long runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformTimeSeries {
    dt: f64,
    values: Vec<f64>,
}

impl UniformTimeSeries {
    /// Wrap samples taken at step `dt` [s]
    ///
    /// Sample values are not inspected; non-finite values propagate into
    /// any response computed from the series.
    pub fn new(dt: f64, values: Vec<f64>) -> Result<Self> {
        ensure_positive("time step", dt)?;
        if values.is_empty() {
            return Err(SrsError::InvalidInput(
                "time series needs at least one sample".into(),
            ));
        }
        Ok(Self { dt, values })
    }

    /// Sample a zero-input source block on `[0, duration]` inclusive
    pub fn from_source<B: AlgebraicBlock>(
        source: &mut B,
        dt: f64,
        duration: f64,
    ) -> Result<Self> {
        ensure_positive("time step", dt)?;
        ensure_positive("duration", duration)?;

        let steps = step_count(duration, dt)?;
        let values = (0..=steps)
            .map(|i| {
                source.update(i as f64 * dt);
                source.get_output(0)
            })
            .collect();

        Ok(Self { dt, values })
    }

    /// Constant time step [s]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time of sample `i` [s]
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// Time axis, one entry per sample
    pub fn times(&self) -> Vec<f64> {
        (0..self.values.len()).map(|i| self.time_at(i)).collect()
    }

    /// Time of the last sample [s]
    pub fn duration(&self) -> f64 {
        self.time_at(self.values.len() - 1)
    }

    /// Iterate `(time, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.time_at(i), v))
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Content hash of the step and every sample (bitwise)
    ///
    /// Identifies the input a response was computed from.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.dt.to_bits().hash(&mut hasher);
        self.values.len().hash(&mut hasher);
        for v in &self.values {
            v.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{PulseShape, ShockPulse};
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validates_step() {
        assert!(UniformTimeSeries::new(0.0, vec![1.0]).is_err());
        assert!(UniformTimeSeries::new(f64::NAN, vec![1.0]).is_err());
        assert!(UniformTimeSeries::new(1e-3, vec![]).is_err());
    }

    #[test]
    fn test_time_axis_does_not_drift() {
        let series = UniformTimeSeries::new(25e-6, vec![0.0; 40_001]).unwrap();
        assert_relative_eq!(series.duration(), 1.0, epsilon = 1e-12);
        assert_eq!(series.times().len(), series.len());
        assert_eq!(series.time_at(0), 0.0);
    }

    #[test]
    fn test_from_source_inclusive_end() {
        let mut pulse = ShockPulse::new(PulseShape::Rectangular, 2.0, 0.01).unwrap();
        let series = UniformTimeSeries::from_source(&mut pulse, 1e-3, 0.02).unwrap();
        assert_eq!(series.len(), 21);
        assert_eq!(series.values()[0], 2.0);
        assert_eq!(series.values()[20], 0.0);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = UniformTimeSeries::new(1e-3, vec![0.0, 1.0, 0.0]).unwrap();
        let b = UniformTimeSeries::new(1e-3, vec![0.0, 1.0, 0.0]).unwrap();
        let c = UniformTimeSeries::new(1e-3, vec![0.0, 1.5, 0.0]).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_peak() {
        let s = UniformTimeSeries::new(1e-3, vec![0.0, -3.0, 2.0]).unwrap();
        assert_eq!(s.peak(), 3.0);
    }
}
