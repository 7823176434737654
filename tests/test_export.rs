//! CSV export of spectra, input series and response histories

use shocksim::export::{save_series, save_spectrum, write_spectrum};
use shocksim::prelude::*;
use std::fs;

fn short_report() -> SrsReport {
    let request = SrsRequest::from_json_str(
        r#"{
            "input": { "kind": "pulse", "shape": "half-sine", "amplitude": 100.0, "duration": 0.011 },
            "q_factor": 10.0,
            "sweep": { "freq_start": 20.0, "freq_end": 500.0, "points": 8 },
            "history_frequency": 45.0
        }"#,
    )
    .unwrap();
    compute(&request).unwrap()
}

#[test]
fn test_spectrum_csv() {
    let report = short_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("srs.csv");
    save_spectrum(&path, &report.spectrum).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "frequency [Hz],peak acceleration [G]");
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("20,"));
    assert!(lines[8].starts_with("500,"));

    let mut buf = Vec::new();
    write_spectrum(&mut buf, &report.spectrum).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), text);
}

#[test]
fn test_series_csv_reads_back_as_record() {
    let report = short_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    save_series(&path, &report.input).unwrap();

    let record = CustomRecord::from_csv_path(&path).unwrap();
    assert_eq!(record.len(), report.input.len());
    assert_eq!(record.values(), report.input.values());
}

#[test]
fn test_history_csv() {
    let report = short_report();
    let history = report.history.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    history.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "time [s],relative displacement,relative velocity,absolute acceleration,\
         base velocity,base displacement"
    );
    assert_eq!(lines.count(), history.len());
}
