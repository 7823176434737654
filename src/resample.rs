//! Resampling of custom records onto a uniform integration grid

use crate::blocks::RecordTable;
use crate::error::{ensure_positive, Result};
use crate::record::CustomRecord;
use crate::series::UniformTimeSeries;
use crate::utils::ringdown_duration;
use log::{debug, warn};

/// Resample a custom record at a fixed step
///
/// The output covers `[0, max(5 * duration, 0.1 s)]` inclusive, where
/// `duration` is the time of the last record sample. Inside the record the
/// samples are linearly interpolated; past its end the series is zero-padded
/// so the oscillator ringdown is captured.
///
/// # Errors
///
/// Returns `InvalidInput` for a step that is not finite and positive.
pub fn resample(record: &CustomRecord, step: f64) -> Result<UniformTimeSeries> {
    ensure_positive("time step", step)?;

    let duration = ringdown_duration(record.duration());
    if let Some(native) = finest_spacing(record) {
        if step > native {
            warn!(
                "resampling at {step:e} s is coarser than the record's finest spacing \
                 {native:e} s; short features will be smoothed"
            );
        }
    }

    let mut table = RecordTable::new(record);
    let series = UniformTimeSeries::from_source(&mut table, step, duration)?;
    debug!(
        "resampled {} record samples to {} points over {duration} s",
        record.len(),
        series.len()
    );
    Ok(series)
}

/// Smallest positive gap between consecutive record samples
fn finest_spacing(record: &CustomRecord) -> Option<f64> {
    record
        .times()
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|dt| *dt > 0.0)
        .fold(None, |acc: Option<f64>, dt| Some(acc.map_or(dt, |a| a.min(dt))))
}
