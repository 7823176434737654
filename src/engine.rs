//! Engine entry points
//!
//! The functions here are the whole surface a presentation layer needs:
//! build an input series, then ask for a spectrum or a single-frequency
//! history. Every call is pure; nothing is cached between calls.

use crate::blocks::{damping_ratio_from_q, OscillatorParams, PulseShape, ShockPulse};
use crate::error::Result;
use crate::record::CustomRecord;
use crate::resample::resample;
use crate::response::{full_response, peak_response, ResponseHistory};
use crate::series::UniformTimeSeries;
use crate::sweep::{compute_spectrum_with, Spectrum, SweepConfig};
use crate::utils::ringdown_duration;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sample a canonical pulse at `step` seconds
///
/// The series runs from 0 to `max(5 * duration, 0.1 s)` inclusive so the
/// oscillator ringdown after the pulse is part of the run.
pub fn synthesize_pulse(
    shape: PulseShape,
    amplitude: f64,
    duration: f64,
    step: f64,
) -> Result<UniformTimeSeries> {
    let mut pulse = ShockPulse::new(shape, amplitude, duration)?;
    let series = UniformTimeSeries::from_source(&mut pulse, step, ringdown_duration(duration))?;
    debug!(
        "synthesized {shape} pulse: {amplitude} G, {duration} s, {} samples",
        series.len()
    );
    Ok(series)
}

/// Resample a custom record onto a uniform grid at `step` seconds
pub fn resample_custom_record(record: &CustomRecord, step: f64) -> Result<UniformTimeSeries> {
    resample(record, step)
}

/// Maximax absolute acceleration at one natural frequency
pub fn compute_peak_response(
    series: &UniformTimeSeries,
    natural_frequency: f64,
    damping_ratio: f64,
) -> Result<f64> {
    let params = OscillatorParams::new(natural_frequency, damping_ratio)?;
    peak_response(series, &params)
}

/// Full state history at one natural frequency
///
/// The returned history is the caller's handle for redraws; check it with
/// [`ResponseHistory::is_current_for`] before reuse.
pub fn compute_full_response(
    series: &UniformTimeSeries,
    natural_frequency: f64,
    damping_ratio: f64,
) -> Result<ResponseHistory> {
    let params = OscillatorParams::new(natural_frequency, damping_ratio)?;
    full_response(series, &params)
}

/// Shock response spectrum over `points` log-spaced frequencies
pub fn compute_spectrum(
    series: &UniformTimeSeries,
    damping_ratio: f64,
    freq_start: f64,
    freq_end: f64,
    points: usize,
) -> Result<Spectrum> {
    compute_spectrum_with(
        series,
        damping_ratio,
        &SweepConfig::new(freq_start, freq_end, points),
    )
}

/// Base excitation of an SRS request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PulseInput {
    /// Canonical pulse: amplitude [G], duration [s]
    Pulse {
        shape: PulseShape,
        amplitude: f64,
        duration: f64,
    },
    /// User-supplied `(time, acceleration)` record
    Custom { samples: CustomRecord },
}

/// Everything needed to compute one spectrum
///
/// # Example
///
/// ```json
/// {
///   "input": { "kind": "pulse", "shape": "half-sine", "amplitude": 100.0, "duration": 0.011 },
///   "q_factor": 10.0,
///   "sweep": { "freq_start": 10.0, "freq_end": 2000.0, "points": 50 },
///   "history_frequency": 45.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrsRequest {
    pub input: PulseInput,
    pub q_factor: f64,
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Natural frequency [Hz] for an optional full-history run
    #[serde(default)]
    pub history_frequency: Option<f64>,
}

impl SrsRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn damping_ratio(&self) -> Result<f64> {
        damping_ratio_from_q(self.q_factor)
    }

    /// Uniform input series at the sweep's integration step
    pub fn input_series(&self) -> Result<UniformTimeSeries> {
        self.sweep.validate()?;
        let step = self.sweep.integration_step();
        match &self.input {
            PulseInput::Pulse {
                shape,
                amplitude,
                duration,
            } => synthesize_pulse(*shape, *amplitude, *duration, step),
            PulseInput::Custom { samples } => resample_custom_record(samples, step),
        }
    }
}

/// Result of [`compute`]
#[derive(Debug, Clone, Serialize)]
pub struct SrsReport {
    pub input: UniformTimeSeries,
    pub spectrum: Spectrum,
    #[serde(skip)]
    pub history: Option<ResponseHistory>,
}

/// Run a whole request: input series, spectrum, optional history
pub fn compute(request: &SrsRequest) -> Result<SrsReport> {
    let damping_ratio = request.damping_ratio()?;
    let input = request.input_series()?;
    let spectrum = compute_spectrum_with(&input, damping_ratio, &request.sweep)?;

    let history = request
        .history_frequency
        .map(|f| compute_full_response(&input, f, damping_ratio))
        .transpose()?;

    if let Some((f, peak)) = spectrum.max() {
        info!(
            "SRS over {} points: max {peak:.3} G at {f:.1} Hz (Q = {})",
            spectrum.len(),
            request.q_factor
        );
    }

    Ok(SrsReport {
        input,
        spectrum,
        history,
    })
}
