//! CSV export for spectra and time series
//!
//! Full histories export through [`crate::ResponseHistory::save_to_writer`].

use crate::error::Result;
use crate::series::UniformTimeSeries;
use crate::sweep::Spectrum;
use std::io::Write;
use std::path::Path;

/// Write a spectrum as `frequency [Hz],peak acceleration [G]` rows
pub fn write_spectrum<W: Write>(writer: W, spectrum: &Spectrum) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["frequency [Hz]", "peak acceleration [G]"])?;
    for (f, a) in spectrum.iter() {
        wtr.write_record([f.to_string(), a.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a time series as `time [s],acceleration [G]` rows
pub fn write_series<W: Write>(writer: W, series: &UniformTimeSeries) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["time [s]", "acceleration [G]"])?;
    for (t, a) in series.iter() {
        wtr.write_record([t.to_string(), a.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_spectrum<P: AsRef<Path>>(path: P, spectrum: &Spectrum) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_spectrum(std::io::BufWriter::new(file), spectrum)
}

pub fn save_series<P: AsRef<Path>>(path: P, series: &UniformTimeSeries) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_series(std::io::BufWriter::new(file), series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_series() {
        let series = UniformTimeSeries::new(0.5, vec![1.0, 2.0]).unwrap();
        let mut buf = Vec::new();
        write_series(&mut buf, &series).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "time [s],acceleration [G]\n0,1\n0.5,2\n");
    }
}
