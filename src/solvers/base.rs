//! Base solver traits and types

use nalgebra::Vector2;

/// Phase-space state of a second-order system: `[position, velocity]`
pub type PhaseState = Vector2<f64>;

/// Result of a solver step
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverStepResult {
    /// Acceleration evaluated from the pre-step state
    pub acceleration: f64,
}

/// Core solver trait for fixed-step integration of `x'' = f(x, x')`
pub trait Solver: Send + Sync {
    /// Get current state
    fn state(&self) -> &PhaseState;

    /// Reset solver to initial state
    fn reset(&mut self);

    /// Current position
    #[inline]
    fn position(&self) -> f64 {
        self.state().x
    }

    /// Current velocity
    #[inline]
    fn velocity(&self) -> f64 {
        self.state().y
    }
}

/// Explicit solver trait
pub trait ExplicitSolver: Solver {
    /// Advance one step; `accel` maps the current state to `x''`
    fn step<F>(&mut self, accel: F, dt: f64) -> SolverStepResult
    where
        F: FnOnce(&PhaseState) -> f64;
}
