//! Core Block trait
//!
//! Pulse sources, record tables and the SDOF oscillator all share this
//! interface: inputs are set, `update(t)` evaluates outputs, and dynamic
//! blocks advance their state with `step(t, dt)`.

/// Result of a block step
#[derive(Debug, Clone, Copy, Default)]
pub struct StepResult {
    /// Output value evaluated from the pre-step state
    pub output: f64,
}

/// Core block trait - I/O sizes known at compile time
///
/// # Example
///
/// ```ignore
/// let mut osc = SdofOscillator::new(params);
/// osc.set_input(0, base_accel);
/// osc.update(t);
/// osc.step(t, dt);
/// ```
pub trait Block {
    /// Number of input ports
    const NUM_INPUTS: usize;

    /// Number of output ports
    const NUM_OUTPUTS: usize;

    /// Access inputs as slice
    fn inputs(&self) -> &[f64];

    /// Mutable access to inputs
    fn inputs_mut(&mut self) -> &mut [f64];

    /// Access outputs as slice
    fn outputs(&self) -> &[f64];

    /// Evaluate algebraic relationship: outputs = f(inputs, state, t)
    fn update(&mut self, t: f64);

    /// Advance internal state by dt; stateless blocks keep the default
    fn step(&mut self, _t: f64, _dt: f64) -> StepResult {
        StepResult::default()
    }

    /// Reset to initial conditions
    fn reset(&mut self);

    /// Set single input value
    #[inline]
    fn set_input(&mut self, port: usize, value: f64) {
        debug_assert!(port < Self::NUM_INPUTS, "input port {port} out of range");
        self.inputs_mut()[port] = value;
    }

    /// Get single output value
    #[inline]
    fn get_output(&self, port: usize) -> f64 {
        debug_assert!(port < Self::NUM_OUTPUTS, "output port {port} out of range");
        self.outputs()[port]
    }
}

/// Marker trait for algebraic blocks (no internal state)
pub trait AlgebraicBlock: Block {}
