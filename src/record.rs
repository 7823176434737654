//! Custom acceleration records
//!
//! A record is the user-supplied `(time, acceleration)` history behind the
//! `custom` pulse shape. It is validated once on construction and never
//! mutated afterwards; loading a new record replaces it wholesale.

use crate::error::{Result, SrsError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Validated, time-ordered `(time [s], acceleration [G])` samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct CustomRecord {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl CustomRecord {
    /// Build a record from numeric samples
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if:
    /// - fewer than two samples are given
    /// - any time or value is not finite
    /// - time decreases anywhere
    /// - the last sample is not after `t = 0`
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (times, values): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();

        if times.len() < 2 {
            return Err(SrsError::MalformedInput(format!(
                "custom record needs at least 2 samples, got {}",
                times.len()
            )));
        }

        if let Some(i) = times
            .iter()
            .zip(&values)
            .position(|(t, a)| !t.is_finite() || !a.is_finite())
        {
            return Err(SrsError::MalformedInput(format!(
                "sample {i} is not finite ({}, {})",
                times[i], values[i]
            )));
        }

        if let Some(i) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(SrsError::MalformedInput(format!(
                "time decreases at sample {}: {} -> {}",
                i + 1,
                times[i],
                times[i + 1]
            )));
        }

        let last = times[times.len() - 1];
        if last <= 0.0 {
            return Err(SrsError::MalformedInput(format!(
                "custom record must extend past t = 0, ends at {last}"
            )));
        }

        Ok(Self { times, values })
    }

    /// Build a record from text rows, keeping rows whose two fields both
    /// parse as finite numbers
    ///
    /// Header lines and other non-numeric rows are skipped.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut skipped = 0usize;
        let samples: Vec<(f64, f64)> = rows
            .into_iter()
            .filter_map(|(t, a)| {
                let parsed = parse_row(t, a);
                if parsed.is_none() {
                    skipped += 1;
                }
                parsed
            })
            .collect();

        Self::from_parsed(samples, skipped)
    }

    /// Read a headerless or headed two-column CSV record
    ///
    /// Extra columns are ignored; rows with fewer than two columns or
    /// non-numeric fields are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut samples = Vec::new();
        let mut skipped = 0usize;
        for row in rdr.records() {
            let row = row?;
            match (row.get(0), row.get(1)) {
                (Some(t), Some(a)) => match parse_row(t, a) {
                    Some(sample) => samples.push(sample),
                    None => skipped += 1,
                },
                _ => skipped += 1,
            }
        }

        Self::from_parsed(samples, skipped)
    }

    /// Read a record from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    fn from_parsed(samples: Vec<(f64, f64)>, skipped: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(SrsError::MalformedInput(
                "no valid rows found in custom record".into(),
            ));
        }
        if skipped > 0 {
            debug!("custom record: kept {} rows, skipped {skipped}", samples.len());
        }
        Self::from_samples(samples)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a validated record
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times [s]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample accelerations [G]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Record duration: time of the last sample [s]
    pub fn duration(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Iterate `(time, acceleration)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

impl TryFrom<Vec<(f64, f64)>> for CustomRecord {
    type Error = SrsError;

    fn try_from(samples: Vec<(f64, f64)>) -> Result<Self> {
        Self::from_samples(samples)
    }
}

impl From<CustomRecord> for Vec<(f64, f64)> {
    fn from(record: CustomRecord) -> Self {
        record.times.into_iter().zip(record.values).collect()
    }
}

fn parse_row(t: &str, a: &str) -> Option<(f64, f64)> {
    let t: f64 = t.trim().parse().ok()?;
    let a: f64 = a.trim().parse().ok()?;
    (t.is_finite() && a.is_finite()).then_some((t, a))
}
