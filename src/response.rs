//! SDOF response to a base-acceleration history
//!
//! Two modes share one stepping loop:
//! - [`peak_response`] keeps only the maximax absolute acceleration
//! - [`full_response`] keeps the per-sample state for inspection and animation

use crate::block::Block;
use crate::blocks::{OscillatorParams, Scope, SdofOscillator};
use crate::error::Result;
use crate::series::UniformTimeSeries;
use crate::solvers::{ExplicitSolver, Solver, SymplecticEuler};
use log::debug;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

const REL_DISP: usize = 0;
const REL_VEL: usize = 1;
const ABS_ACCEL: usize = 2;
const BASE_VEL: usize = 3;
const BASE_DISP: usize = 4;
const HISTORY_CHANNELS: usize = 5;

const HISTORY_LABELS: [&str; HISTORY_CHANNELS] = [
    "relative displacement",
    "relative velocity",
    "absolute acceleration",
    "base velocity",
    "base displacement",
];

/// Keep the running maximum of `|value|`, letting NaN stick once it appears
#[inline]
fn track_peak(peak: &mut f64, value: f64) {
    let abs = value.abs();
    if abs > *peak || abs.is_nan() {
        *peak = abs;
    }
}

/// Maximax absolute acceleration of the oscillator over the whole series
///
/// # Errors
///
/// `Unstable` if the series step is outside the integrator's stability
/// region for this natural frequency.
pub fn peak_response(series: &UniformTimeSeries, params: &OscillatorParams) -> Result<f64> {
    let dt = series.dt();
    params.check_step(dt)?;

    let mut osc = SdofOscillator::new(*params);
    let mut peak = 0.0_f64;

    for (i, &base_accel) in series.values().iter().enumerate() {
        osc.set_input(0, base_accel);
        let abs_accel = osc.step(series.time_at(i), dt).output;
        track_peak(&mut peak, abs_accel);
    }

    Ok(peak)
}

/// Complete state history of the oscillator over the series
///
/// Alongside the oscillator, the base motion itself is integrated
/// (`v_b += y'' dt; x_b += v_b dt`) so the mass and base can be drawn in
/// absolute coordinates. Entry `i` holds the state at `time[i]`, recorded
/// before the step that advances past it.
pub fn full_response(
    series: &UniformTimeSeries,
    params: &OscillatorParams,
) -> Result<ResponseHistory> {
    let dt = series.dt();
    params.check_step(dt)?;

    let mut osc = SdofOscillator::new(*params);
    let mut base = SymplecticEuler::at_rest();
    let mut scope = Scope::<HISTORY_CHANNELS>::with_capacity(series.len());
    let mut peak = 0.0_f64;

    for (i, &base_accel) in series.values().iter().enumerate() {
        let t = series.time_at(i);

        scope.set_input(REL_DISP, osc.relative_displacement());
        scope.set_input(REL_VEL, osc.relative_velocity());
        scope.set_input(BASE_VEL, base.velocity());
        scope.set_input(BASE_DISP, base.position());

        osc.set_input(0, base_accel);
        let abs_accel = osc.step(t, dt).output;
        track_peak(&mut peak, abs_accel);

        scope.set_input(ABS_ACCEL, abs_accel);
        scope.step(t, dt);

        base.step(|_| base_accel, dt);
    }

    debug!(
        "full response at {} Hz: {} samples, peak {peak}",
        params.natural_frequency(),
        scope.len()
    );

    Ok(ResponseHistory {
        key: ResponseKey::new(series, params),
        params: *params,
        peak,
        scope,
    })
}

/// Identity of the inputs a response was computed from
///
/// Doubles as a cache key: `(series content, natural frequency, damping)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseKey {
    pub series_fingerprint: u64,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
}

impl ResponseKey {
    pub fn new(series: &UniformTimeSeries, params: &OscillatorParams) -> Self {
        Self {
            series_fingerprint: series.fingerprint(),
            natural_frequency: params.natural_frequency(),
            damping_ratio: params.damping_ratio(),
        }
    }
}

/// One animation frame of the base/mass system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub time: f64,
    pub base_displacement: f64,
    /// Absolute mass displacement: base + relative
    pub mass_displacement: f64,
    pub relative_displacement: f64,
    pub absolute_acceleration: f64,
}

/// Per-sample SDOF state, owned by the caller
///
/// Immutable once computed. Recompute when the oscillator or the input
/// changes; [`ResponseHistory::is_current_for`] tells whether it still
/// matches.
#[derive(Debug, Clone)]
pub struct ResponseHistory {
    key: ResponseKey,
    params: OscillatorParams,
    peak: f64,
    scope: Scope<HISTORY_CHANNELS>,
}

impl ResponseHistory {
    pub fn key(&self) -> &ResponseKey {
        &self.key
    }

    pub fn params(&self) -> &OscillatorParams {
        &self.params
    }

    /// Maximax absolute acceleration, identical to [`peak_response`]
    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn len(&self) -> usize {
        self.scope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scope.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        self.scope.time()
    }

    pub fn relative_displacement(&self) -> &[f64] {
        self.scope.channel(REL_DISP)
    }

    pub fn relative_velocity(&self) -> &[f64] {
        self.scope.channel(REL_VEL)
    }

    pub fn absolute_acceleration(&self) -> &[f64] {
        self.scope.channel(ABS_ACCEL)
    }

    pub fn base_velocity(&self) -> &[f64] {
        self.scope.channel(BASE_VEL)
    }

    pub fn base_displacement(&self) -> &[f64] {
        self.scope.channel(BASE_DISP)
    }

    /// Does this history still describe `series` through `params`?
    pub fn is_current_for(&self, series: &UniformTimeSeries, params: &OscillatorParams) -> bool {
        self.key == ResponseKey::new(series, params)
    }

    /// State at sample `i`
    pub fn frame(&self, i: usize) -> Option<Frame> {
        if i >= self.len() {
            return None;
        }
        let base = self.base_displacement()[i];
        let rel = self.relative_displacement()[i];
        Some(Frame {
            time: self.time()[i],
            base_displacement: base,
            mass_displacement: base + rel,
            relative_displacement: rel,
            absolute_acceleration: self.absolute_acceleration()[i],
        })
    }

    /// Every `stride`-th frame, for playback at a lower rate
    pub fn frames(&self, stride: usize) -> impl Iterator<Item = Frame> + '_ {
        (0..self.len())
            .step_by(stride.max(1))
            .filter_map(move |i| self.frame(i))
    }

    /// Write the history as CSV
    pub fn save_to_writer<W: Write>(&self, writer: W) -> io::Result<()> {
        self.scope.save_to_writer(writer, &HISTORY_LABELS)
    }

    /// Write the history to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.scope.save_with_labels(path, &HISTORY_LABELS)
    }
}
