//! Base-excited single-degree-of-freedom oscillator

use crate::block::{Block, StepResult};
use crate::error::{ensure_finite, ensure_positive, Result, SrsError};
use crate::solvers::{ExplicitSolver, Solver, SymplecticEuler};
use crate::utils::constants::SYMPLECTIC_STABILITY_LIMIT;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Damping ratio from quality factor: `zeta = 1 / (2 Q)`
///
/// # Errors
///
/// `InvalidInput` when `q` is not finite and strictly positive.
pub fn damping_ratio_from_q(q: f64) -> Result<f64> {
    ensure_positive("Q factor", q)?;
    Ok(1.0 / (2.0 * q))
}

/// Natural frequency and damping of an SDOF oscillator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorParams {
    natural_frequency: f64,
    damping_ratio: f64,
}

impl OscillatorParams {
    /// Natural frequency [Hz] and damping ratio (0 = undamped)
    pub fn new(natural_frequency: f64, damping_ratio: f64) -> Result<Self> {
        ensure_positive("natural frequency", natural_frequency)?;
        ensure_finite("damping ratio", damping_ratio)?;
        if damping_ratio < 0.0 {
            return Err(SrsError::InvalidInput(format!(
                "damping ratio must be >= 0, got {damping_ratio}"
            )));
        }
        Ok(Self {
            natural_frequency,
            damping_ratio,
        })
    }

    /// Natural frequency [Hz] and quality factor
    pub fn from_q_factor(natural_frequency: f64, q: f64) -> Result<Self> {
        Self::new(natural_frequency, damping_ratio_from_q(q)?)
    }

    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Angular natural frequency [rad/s]
    #[inline]
    pub fn omega(&self) -> f64 {
        2.0 * PI * self.natural_frequency
    }

    /// Quality factor; infinite when undamped
    pub fn q_factor(&self) -> f64 {
        1.0 / (2.0 * self.damping_ratio)
    }

    /// Check that `dt` is inside the integrator's stability region
    pub fn check_step(&self, dt: f64) -> Result<()> {
        ensure_positive("time step", dt)?;
        if self.omega() * dt >= SYMPLECTIC_STABILITY_LIMIT {
            return Err(SrsError::Unstable {
                natural_frequency: self.natural_frequency,
                dt,
            });
        }
        Ok(())
    }
}

/// SDOF oscillator on a moving base
///
/// Integrates `z'' + 2 zeta wn z' + wn^2 z = -y''(t)` for the displacement
/// `z` of the mass relative to its base, driven by the base acceleration
/// `y''` on input port 0. Output port 0 is the absolute acceleration of the
/// mass, `z'' + y''`.
///
/// `update(t)` evaluates the output from the current state; `step(t, dt)`
/// then advances `(z, z')` with symplectic Euler.
///
/// # Example
///
/// ```ignore
/// let mut osc = SdofOscillator::new(OscillatorParams::from_q_factor(100.0, 10.0)?);
/// for (i, &a) in base.iter().enumerate() {
///     let t = i as f64 * dt;
///     osc.set_input(0, a);
///     osc.update(t);
///     peak = peak.max(osc.get_output(0).abs());
///     osc.step(t, dt);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SdofOscillator {
    input: f64,
    output: f64,
    params: OscillatorParams,
    // 2 zeta wn and wn^2
    damping: f64,
    stiffness: f64,
    solver: SymplecticEuler,
}

impl SdofOscillator {
    /// Oscillator starting at rest relative to its base
    pub fn new(params: OscillatorParams) -> Self {
        let omega = params.omega();
        Self {
            input: 0.0,
            output: 0.0,
            params,
            damping: 2.0 * params.damping_ratio() * omega,
            stiffness: omega * omega,
            solver: SymplecticEuler::at_rest(),
        }
    }

    pub fn params(&self) -> &OscillatorParams {
        &self.params
    }

    /// Relative displacement `z`
    #[inline]
    pub fn relative_displacement(&self) -> f64 {
        self.solver.position()
    }

    /// Relative velocity `z'`
    #[inline]
    pub fn relative_velocity(&self) -> f64 {
        self.solver.velocity()
    }

    #[inline]
    fn relative_acceleration(&self, base_accel: f64, z: f64, v: f64) -> f64 {
        -base_accel - self.damping * v - self.stiffness * z
    }
}

impl Block for SdofOscillator {
    const NUM_INPUTS: usize = 1;
    const NUM_OUTPUTS: usize = 1;

    #[inline]
    fn inputs(&self) -> &[f64] {
        std::slice::from_ref(&self.input)
    }

    #[inline]
    fn inputs_mut(&mut self) -> &mut [f64] {
        std::slice::from_mut(&mut self.input)
    }

    #[inline]
    fn outputs(&self) -> &[f64] {
        std::slice::from_ref(&self.output)
    }

    #[inline]
    fn update(&mut self, _t: f64) {
        let a_rel = self.relative_acceleration(
            self.input,
            self.relative_displacement(),
            self.relative_velocity(),
        );
        self.output = a_rel + self.input;
    }

    #[inline]
    fn step(&mut self, _t: f64, dt: f64) -> StepResult {
        let base_accel = self.input;
        let (damping, stiffness) = (self.damping, self.stiffness);
        let result = self
            .solver
            .step(|s| -base_accel - damping * s.y - stiffness * s.x, dt);

        StepResult {
            output: result.acceleration + base_accel,
        }
    }

    fn reset(&mut self) {
        self.input = 0.0;
        self.output = 0.0;
        self.solver.reset();
    }
}
