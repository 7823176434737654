//! Shock pulse source blocks (zero inputs, one output)

use crate::block::{AlgebraicBlock, Block};
use crate::error::{ensure_finite, ensure_positive, Result, SrsError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Canonical shock pulse shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PulseShape {
    /// `A * sin(pi * t / T)`
    HalfSine,
    /// Terminal-peak sawtooth: linear ramp from 0 to `A` at `T`, then drops to 0
    Sawtooth,
    /// Constant `A` over the pulse
    Rectangular,
    /// Symmetric triangle peaking at `T / 2`
    TriangleSym,
    /// `A * 0.5 * (1 - cos(2 * pi * t / T))`
    Haversine,
    /// User-supplied record, served by resampling rather than synthesis
    Custom,
}

impl PulseShape {
    /// All shapes with a closed-form synthesizer
    pub const SYNTHETIC: [PulseShape; 5] = [
        PulseShape::HalfSine,
        PulseShape::Sawtooth,
        PulseShape::Rectangular,
        PulseShape::TriangleSym,
        PulseShape::Haversine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PulseShape::HalfSine => "half-sine",
            PulseShape::Sawtooth => "sawtooth",
            PulseShape::Rectangular => "rectangular",
            PulseShape::TriangleSym => "triangle-sym",
            PulseShape::Haversine => "haversine",
            PulseShape::Custom => "custom",
        }
    }

    pub fn is_synthetic(&self) -> bool {
        !matches!(self, PulseShape::Custom)
    }
}

impl fmt::Display for PulseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PulseShape {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-sine" => Ok(PulseShape::HalfSine),
            "sawtooth" => Ok(PulseShape::Sawtooth),
            "rectangular" => Ok(PulseShape::Rectangular),
            "triangle-sym" => Ok(PulseShape::TriangleSym),
            "haversine" => Ok(PulseShape::Haversine),
            "custom" => Ok(PulseShape::Custom),
            other => Err(SrsError::InvalidInput(format!(
                "unknown pulse shape '{other}'"
            ))),
        }
    }
}

/// Base acceleration of a canonical pulse at time `t`
///
/// The support is `[0, duration]` inclusive; outside it the result is 0.
/// `Custom` has no closed form and always yields 0.
#[inline]
pub fn pulse_acceleration(t: f64, shape: PulseShape, amplitude: f64, duration: f64) -> f64 {
    if t < 0.0 || t > duration {
        return 0.0;
    }

    match shape {
        PulseShape::HalfSine => amplitude * (PI * t / duration).sin(),
        PulseShape::Sawtooth => amplitude * (t / duration),
        PulseShape::Rectangular => amplitude,
        PulseShape::TriangleSym => {
            let half = duration / 2.0;
            if t <= half {
                amplitude * (t / half)
            } else {
                amplitude * ((duration - t) / half)
            }
        }
        PulseShape::Haversine => amplitude * 0.5 * (1.0 - (2.0 * PI * (t / duration)).cos()),
        PulseShape::Custom => 0.0,
    }
}

/// Shock pulse source block
///
/// # Example
///
/// ```ignore
/// let mut pulse = ShockPulse::new(PulseShape::HalfSine, 100.0, 0.011)?;
/// pulse.update(0.0055);
/// assert!((pulse.get_output(0) - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ShockPulse {
    output: f64,
    shape: PulseShape,
    amplitude: f64,
    duration: f64,
}

impl ShockPulse {
    /// Create a pulse with amplitude [G] and duration [s]
    ///
    /// Fails for `Custom`, non-finite amplitude, or a duration that is not
    /// strictly positive.
    pub fn new(shape: PulseShape, amplitude: f64, duration: f64) -> Result<Self> {
        if !shape.is_synthetic() {
            return Err(SrsError::InvalidInput(
                "custom pulses are built from a record, not synthesized".into(),
            ));
        }
        ensure_finite("amplitude", amplitude)?;
        ensure_positive("duration", duration)?;

        Ok(Self {
            output: pulse_acceleration(0.0, shape, amplitude, duration),
            shape,
            amplitude,
            duration,
        })
    }

    pub fn shape(&self) -> PulseShape {
        self.shape
    }
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl Block for ShockPulse {
    const NUM_INPUTS: usize = 0;
    const NUM_OUTPUTS: usize = 1;

    fn inputs(&self) -> &[f64] {
        &[]
    }
    fn inputs_mut(&mut self) -> &mut [f64] {
        &mut []
    }

    fn outputs(&self) -> &[f64] {
        std::slice::from_ref(&self.output)
    }

    fn update(&mut self, t: f64) {
        self.output = pulse_acceleration(t, self.shape, self.amplitude, self.duration);
    }

    fn reset(&mut self) {
        self.output = pulse_acceleration(0.0, self.shape, self.amplitude, self.duration);
    }
}

impl AlgebraicBlock for ShockPulse {}
