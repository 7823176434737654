//! Data recorder (scope) block
//!
//! Records multi-channel signals sample by sample and exports them as CSV.

use crate::block::{Block, StepResult};
use std::io::{self, Write};
use std::path::Path;

/// Scope: growable multi-channel data recorder
///
/// Each `step(t, dt)` records the current inputs stamped with `t`, so
/// sample `i` holds the values seen *before* the system advanced past `t`.
///
/// # Type Parameters
///
/// - `CHANNELS`: Number of input channels (const generic)
///
/// # Example
///
/// ```ignore
/// let mut scope = Scope::<2>::with_capacity(1000);
/// scope.set_input(0, x);
/// scope.set_input(1, y);
/// scope.update(t);
/// scope.step(t, dt);
///
/// scope.save_with_labels("output.csv", &["position", "velocity"])?;
/// ```
#[derive(Debug, Clone)]
pub struct Scope<const CHANNELS: usize> {
    inputs: [f64; CHANNELS],
    outputs: [f64; CHANNELS], // Pass-through
    time: Vec<f64>,
    channels: [Vec<f64>; CHANNELS],
}

impl<const CHANNELS: usize> Scope<CHANNELS> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Scope with room for `capacity` samples per channel
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(CHANNELS > 0, "Must have at least one channel");

        Self {
            inputs: [0.0; CHANNELS],
            outputs: [0.0; CHANNELS],
            time: Vec::with_capacity(capacity),
            channels: std::array::from_fn(|_| Vec::with_capacity(capacity)),
        }
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Clear all recorded data
    pub fn clear(&mut self) {
        self.time.clear();
        for ch in &mut self.channels {
            ch.clear();
        }
    }

    /// Recorded time stamps
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Recorded samples of one channel
    pub fn channel(&self, channel: usize) -> &[f64] {
        assert!(channel < CHANNELS, "Channel index out of bounds");
        &self.channels[channel]
    }

    /// Record current inputs (called automatically in step())
    pub fn record(&mut self, time: f64) {
        self.time.push(time);
        for (ch, &value) in self.channels.iter_mut().zip(self.inputs.iter()) {
            ch.push(value);
        }
    }

    /// Save recorded data to a CSV file with custom channel labels
    ///
    /// # CSV Format
    ///
    /// ```csv
    /// time [s],position,velocity
    /// 0,1,0
    /// 0.01,0.99,0.1
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the number of
    /// labels doesn't match the number of channels.
    pub fn save_with_labels<P: AsRef<Path>>(&self, path: P, labels: &[&str]) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.save_to_writer(io::BufWriter::new(file), labels)
    }

    /// Save recorded data to any writer with custom labels
    pub fn save_to_writer<W: Write>(&self, writer: W, labels: &[&str]) -> io::Result<()> {
        if labels.len() != CHANNELS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Number of labels ({}) must match number of channels ({})",
                    labels.len(),
                    CHANNELS
                ),
            ));
        }

        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["time [s]".to_string()];
        header.extend(labels.iter().map(|&s| s.to_string()));
        wtr.write_record(&header)?;

        for (i, t) in self.time.iter().enumerate() {
            let mut record = Vec::with_capacity(CHANNELS + 1);
            record.push(t.to_string());
            record.extend(self.channels.iter().map(|ch| ch[i].to_string()));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl<const CHANNELS: usize> Default for Scope<CHANNELS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CHANNELS: usize> Block for Scope<CHANNELS> {
    const NUM_INPUTS: usize = CHANNELS;
    const NUM_OUTPUTS: usize = CHANNELS;

    #[inline]
    fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    #[inline]
    fn inputs_mut(&mut self) -> &mut [f64] {
        &mut self.inputs
    }

    #[inline]
    fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    fn update(&mut self, _t: f64) {
        self.outputs.copy_from_slice(&self.inputs);
    }

    fn step(&mut self, t: f64, _dt: f64) -> StepResult {
        self.record(t);
        StepResult::default()
    }

    fn reset(&mut self) {
        self.inputs = [0.0; CHANNELS];
        self.outputs = [0.0; CHANNELS];
        self.clear();
    }
}
