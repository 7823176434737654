//! Numerical integration solvers
//!
//! Fixed-step integrators for second-order systems `x'' = f(x, x')`.
//! The SRS engine uses symplectic Euler for both the oscillator and the
//! base-motion integration.

mod base;
mod symplectic_euler;

pub use base::*;
pub use symplectic_euler::SymplecticEuler;
