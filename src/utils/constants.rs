//! Analysis constants and defaults

/// Highest natural frequency of engineering interest for shock specs [Hz]
pub const SRS_MAX_FREQUENCY: f64 = 2000.0;

/// Integration samples per period of the highest natural frequency
pub const SRS_OVERSAMPLE: f64 = 20.0;

/// Default integration timestep: 1 / (20 * 2000 Hz) = 25 us
pub const SRS_TIMESTEP: f64 = 1.0 / (SRS_OVERSAMPLE * SRS_MAX_FREQUENCY);

/// Default lower bound of the frequency sweep [Hz]
pub const SWEEP_FREQ_START: f64 = 10.0;

/// Default upper bound of the frequency sweep [Hz]
pub const SWEEP_FREQ_END: f64 = 2000.0;

/// Default number of log-spaced sweep points
pub const SWEEP_POINTS: usize = 50;

/// Simulated time as a multiple of the pulse/record duration
pub const RINGDOWN_FACTOR: f64 = 5.0;

/// Minimum simulated time [s]
pub const RINGDOWN_MIN_DURATION: f64 = 0.1;

/// Relative slack when converting a duration to a whole number of steps
pub const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Stability limit of symplectic Euler for an undamped oscillator: wn * dt < 2
pub const SYMPLECTIC_STABILITY_LIMIT: f64 = 2.0;

/// Upper bound on the samples of one uniform series (400 MB of `f64`)
pub const MAX_SAMPLES: usize = 50_000_000;
