//! Log-spaced frequency sweep and spectrum assembly

use crate::blocks::OscillatorParams;
use crate::error::{ensure_positive, Result, SrsError};
use crate::response::peak_response;
use crate::series::UniformTimeSeries;
use crate::utils::constants::{
    SRS_MAX_FREQUENCY, SRS_OVERSAMPLE, SWEEP_FREQ_END, SWEEP_FREQ_START, SWEEP_POINTS,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `count` points evenly spaced in `log10` between `start` and `end` inclusive
///
/// The endpoints are returned exactly. `count == 1` is accepted only for
/// `start == end` and yields `[start]`.
///
/// # Errors
///
/// `InvalidInput` for non-positive or non-finite bounds, `count == 0`,
/// or `start >= end` with more than one point.
pub fn log_space(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    ensure_positive("sweep start", start)?;
    ensure_positive("sweep end", end)?;

    match count {
        0 => Err(SrsError::InvalidInput("sweep needs at least one point".into())),
        1 if start == end => Ok(vec![start]),
        1 => Err(SrsError::InvalidInput(format!(
            "a single-point sweep needs start == end, got {start} and {end}"
        ))),
        _ if start >= end => Err(SrsError::InvalidInput(format!(
            "sweep start ({start}) must be below sweep end ({end})"
        ))),
        _ => {
            let log_start = start.log10();
            let log_end = end.log10();
            let step = (log_end - log_start) / (count - 1) as f64;

            let mut points: Vec<f64> = (0..count)
                .map(|i| 10f64.powf(log_start + i as f64 * step))
                .collect();
            points[0] = start;
            points[count - 1] = end;
            Ok(points)
        }
    }
}

/// Sweep bounds and integration policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Lowest natural frequency [Hz]
    pub freq_start: f64,
    /// Highest natural frequency [Hz]
    pub freq_end: f64,
    /// Number of log-spaced frequencies
    pub points: usize,
    /// Integration samples per period of the highest frequency
    pub oversample: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            freq_start: SWEEP_FREQ_START,
            freq_end: SWEEP_FREQ_END,
            points: SWEEP_POINTS,
            oversample: SRS_OVERSAMPLE,
        }
    }
}

impl SweepConfig {
    pub fn new(freq_start: f64, freq_end: f64, points: usize) -> Self {
        Self {
            freq_start,
            freq_end,
            points,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("oversample", self.oversample)?;
        log_space(self.freq_start, self.freq_end, self.points).map(|_| ())
    }

    /// Sweep frequencies [Hz]
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        log_space(self.freq_start, self.freq_end, self.points)
    }

    /// Integration step for inputs built for this sweep [s]
    ///
    /// Never coarser than the 25 us default; shrinks when the sweep reaches
    /// above 2000 Hz.
    pub fn integration_step(&self) -> f64 {
        1.0 / (self.oversample * self.freq_end.max(SRS_MAX_FREQUENCY))
    }

    /// Coarsest step that still oversamples `freq_end` as configured [s]
    pub fn max_step(&self) -> f64 {
        1.0 / (self.oversample * self.freq_end)
    }
}

/// Peak response versus natural frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    peak_response: Vec<f64>,
    damping_ratio: f64,
}

impl Spectrum {
    /// Ascending natural frequencies [Hz]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Maximax absolute acceleration at each frequency [G]
    pub fn peak_response(&self) -> &[f64] {
        &self.peak_response
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate `(frequency, peak response)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.peak_response.iter().copied())
    }

    /// Frequency and value of the largest response
    pub fn max(&self) -> Option<(f64, f64)> {
        self.iter()
            .fold(None, |best: Option<(f64, f64)>, (f, a)| match best {
                Some((_, b)) if b >= a => best,
                _ => Some((f, a)),
            })
    }
}

/// Shock response spectrum of `series` over the configured sweep
///
/// Each frequency is an independent SDOF run in peak mode. With the
/// `parallel` feature the runs execute on the rayon pool; the result is the
/// same either way.
///
/// # Errors
///
/// `InvalidInput` for a bad sweep or damping ratio, or when the series step
/// is coarser than [`SweepConfig::max_step`].
pub fn compute_spectrum_with(
    series: &UniformTimeSeries,
    damping_ratio: f64,
    config: &SweepConfig,
) -> Result<Spectrum> {
    let frequencies = config.frequencies()?;
    ensure_positive("oversample", config.oversample)?;
    // Validates the damping ratio once, up front
    OscillatorParams::new(config.freq_start, damping_ratio)?;

    let max_step = config.max_step();
    if series.dt() > max_step * (1.0 + 1e-9) {
        return Err(SrsError::InvalidInput(format!(
            "time step {} s is too coarse for a sweep up to {} Hz (max {} s)",
            series.dt(),
            config.freq_end,
            max_step
        )));
    }

    debug!(
        "SRS sweep: {} frequencies {}..{} Hz, zeta {damping_ratio}, {} samples at {} s",
        frequencies.len(),
        config.freq_start,
        config.freq_end,
        series.len(),
        series.dt()
    );

    let evaluate = |&f: &f64| -> Result<f64> {
        let params = OscillatorParams::new(f, damping_ratio)?;
        let peak = peak_response(series, &params)?;
        trace!("fn = {f:.3} Hz -> {peak:.4} G");
        Ok(peak)
    };

    #[cfg(feature = "parallel")]
    let peak_response = frequencies
        .par_iter()
        .map(evaluate)
        .collect::<Result<Vec<f64>>>()?;

    #[cfg(not(feature = "parallel"))]
    let peak_response = frequencies
        .iter()
        .map(evaluate)
        .collect::<Result<Vec<f64>>>()?;

    Ok(Spectrum {
        frequencies,
        peak_response,
        damping_ratio,
    })
}
