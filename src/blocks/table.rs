//! Time-indexed lookup table over a custom record

use crate::block::{AlgebraicBlock, Block};
use crate::record::CustomRecord;

/// Relative slack on the record end time when deciding "inside the record"
const END_TOLERANCE: f64 = 1e-9;

/// Piecewise-linear lookup of a custom record as a function of time
///
/// Inside `[first, last]` the output is linearly interpolated between the
/// two bracketing samples. Before the first sample and after the last one
/// the base is at rest, so the output is 0. Query times within floating-point
/// noise of the last sample time hold the last value.
///
/// # Example
///
/// ```ignore
/// let record = CustomRecord::from_samples(vec![(0.0, 0.0), (0.01, 20.0)])?;
/// let mut table = RecordTable::new(&record);
/// table.update(0.005);
/// assert_eq!(table.get_output(0), 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct RecordTable {
    output: f64,
    points: Vec<f64>,
    values: Vec<f64>,
}

impl RecordTable {
    pub fn new(record: &CustomRecord) -> Self {
        let (points, values) = record.samples().unzip();
        let mut table = Self {
            output: 0.0,
            points,
            values,
        };
        table.output = table.interpolate(0.0);
        table
    }

    /// Evaluate the record at time `t`
    pub fn interpolate(&self, t: f64) -> f64 {
        let n = self.points.len();
        let first = self.points[0];
        let last = self.points[n - 1];

        if t < first || t > last + END_TOLERANCE * last.abs().max(f64::MIN_POSITIVE) {
            return 0.0;
        }

        // First sample strictly after t
        let idx = self.points.partition_point(|&p| p <= t);
        if idx >= n {
            return self.values[n - 1];
        }

        // idx > 0 because t >= first; points[idx - 1] <= t < points[idx]
        let (i0, i1) = (idx - 1, idx);
        let t0 = self.points[i0];
        let t1 = self.points[i1];
        let a0 = self.values[i0];
        let a1 = self.values[i1];

        a0 + (a1 - a0) * (t - t0) / (t1 - t0)
    }
}

impl Block for RecordTable {
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
        self.output = self.interpolate(t);
    }

    fn reset(&mut self) {
        self.output = self.interpolate(0.0);
    }
}

impl AlgebraicBlock for RecordTable {}
