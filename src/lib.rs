//! shocksim - Shock Response Spectrum engine
//!
//! Computes the maximax absolute-acceleration SRS of a base-acceleration
//! pulse: for each natural frequency of a family of single-degree-of-freedom
//! oscillators, the peak absolute acceleration the oscillator mass sees.
//!
//! # Architecture
//!
//! The engine is a small block diagram evaluated at a fixed step:
//! - Source blocks ([`ShockPulse`], [`RecordTable`]) produce base
//!   acceleration as a function of time
//! - [`UniformTimeSeries`] samples a source onto the integration grid
//! - [`SdofOscillator`] integrates `z'' + 2 zeta wn z' + wn^2 z = -y''`
//!   with symplectic Euler
//! - [`sweep`] repeats the oscillator run over log-spaced frequencies
//!
//! All operations are pure functions of their inputs and are safe to call
//! concurrently.
//!
//! # Example
//!
//! ```rust,ignore
//! use shocksim::prelude::*;
//!
//! let series = synthesize_pulse(PulseShape::HalfSine, 100.0, 0.011, 25e-6)?;
//! let zeta = damping_ratio_from_q(10.0)?;
//! let spectrum = compute_spectrum(&series, zeta, 10.0, 2000.0, 50)?;
//! for (f, a) in spectrum.iter() {
//!     println!("{f:8.1} Hz  {a:8.2} G");
//! }
//! ```

pub mod block;
pub mod blocks;
pub mod engine;
pub mod error;
pub mod export;
pub mod record;
pub mod resample;
pub mod response;
pub mod series;
pub mod solvers;
pub mod sweep;
pub mod utils;

pub use block::{AlgebraicBlock, Block, StepResult};
pub use blocks::*;
pub use engine::{
    compute, compute_full_response, compute_peak_response, compute_spectrum,
    resample_custom_record, synthesize_pulse, PulseInput, SrsReport, SrsRequest,
};
pub use error::{Result, SrsError};
pub use record::CustomRecord;
pub use response::{Frame, ResponseHistory, ResponseKey};
pub use series::UniformTimeSeries;
pub use sweep::{log_space, Spectrum, SweepConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::block::{AlgebraicBlock, Block, StepResult};
    pub use crate::blocks::*;
    pub use crate::engine::*;
    pub use crate::error::SrsError;
    pub use crate::record::CustomRecord;
    pub use crate::response::{full_response, peak_response, Frame, ResponseHistory, ResponseKey};
    pub use crate::series::UniformTimeSeries;
    pub use crate::solvers::*;
    pub use crate::sweep::*;
}
