//! Block implementations
//!
//! Sources produce base acceleration as a function of time, the oscillator
//! integrates the SDOF response, and the scope records histories.

mod oscillator;
mod scope;
mod sources;
mod table;

pub use oscillator::{damping_ratio_from_q, OscillatorParams, SdofOscillator};
pub use scope::Scope;
pub use sources::{pulse_acceleration, PulseShape, ShockPulse};
pub use table::RecordTable;
