//! shocksim - command-line SRS calculator
//!
//! Usage:
//!   shocksim --shape half-sine --amplitude 100 --duration-ms 11 --q 10
//!   shocksim --custom record.csv --q 10 --output srs.csv
//!   shocksim --config request.json --history-frequency 45 --history-output history.csv

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use shocksim::{
    compute, export, CustomRecord, PulseInput, PulseShape, SrsRequest, SweepConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shocksim")]
#[command(about = "Shock Response Spectrum (maximax absolute acceleration) of a base pulse")]
struct Args {
    /// JSON request file; command-line options override its sweep settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pulse shape: half-sine, sawtooth, rectangular, triangle-sym, haversine
    #[arg(long, default_value = "half-sine")]
    shape: PulseShape,

    /// Pulse amplitude [G]
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    amplitude: f64,

    /// Pulse duration [ms]
    #[arg(long, default_value_t = 11.0)]
    duration_ms: f64,

    /// Two-column (time [s], acceleration [G]) CSV record instead of a pulse
    #[arg(long, conflicts_with = "config")]
    custom: Option<PathBuf>,

    /// Oscillator quality factor Q (damping ratio = 1 / 2Q)
    #[arg(long, default_value_t = 10.0)]
    q: f64,

    /// Lowest natural frequency [Hz]
    #[arg(long)]
    freq_start: Option<f64>,

    /// Highest natural frequency [Hz]
    #[arg(long)]
    freq_end: Option<f64>,

    /// Number of log-spaced frequencies
    #[arg(long)]
    points: Option<usize>,

    /// Spectrum CSV output; printed as a table when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Input time-series CSV output
    #[arg(long)]
    input_output: Option<PathBuf>,

    /// Natural frequency [Hz] for a full response history
    #[arg(long)]
    history_frequency: Option<f64>,

    /// History CSV output (requires --history-frequency)
    #[arg(long, requires = "history_frequency")]
    history_output: Option<PathBuf>,
}

fn build_request(args: &Args) -> Result<SrsRequest> {
    let mut request = match &args.config {
        Some(path) => SrsRequest::from_json_file(path)
            .with_context(|| format!("Failed to load request {}", path.display()))?,
        None => {
            let input = match &args.custom {
                Some(path) => PulseInput::Custom {
                    samples: CustomRecord::from_csv_path(path)
                        .with_context(|| format!("Failed to read record {}", path.display()))?,
                },
                None => PulseInput::Pulse {
                    shape: args.shape,
                    amplitude: args.amplitude,
                    duration: args.duration_ms / 1000.0,
                },
            };
            SrsRequest {
                input,
                q_factor: args.q,
                sweep: SweepConfig::default(),
                history_frequency: None,
            }
        }
    };

    if let Some(f) = args.freq_start {
        request.sweep.freq_start = f;
    }
    if let Some(f) = args.freq_end {
        request.sweep.freq_end = f;
    }
    if let Some(n) = args.points {
        request.sweep.points = n;
    }
    if args.history_frequency.is_some() {
        request.history_frequency = args.history_frequency;
    }

    Ok(request)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let request = build_request(&args)?;
    if matches!(request.input, PulseInput::Pulse { shape: PulseShape::Custom, .. }) {
        bail!("--shape custom needs --custom <record.csv>");
    }

    let report = compute(&request).context("SRS computation failed")?;

    match &args.output {
        Some(path) => {
            export::save_spectrum(path, &report.spectrum)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Spectrum written to {}", path.display());
        }
        None => {
            println!("{:>12}  {:>14}", "fn [Hz]", "peak [G]");
            for (f, a) in report.spectrum.iter() {
                println!("{f:>12.2}  {a:>14.4}");
            }
        }
    }

    if let Some(path) = &args.input_output {
        export::save_series(path, &report.input)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Input series written to {}", path.display());
    }

    if let Some(history) = &report.history {
        println!(
            "history at {:.2} Hz: {} samples, peak {:.4} G",
            history.params().natural_frequency(),
            history.len(),
            history.peak()
        );
        if let Some(path) = &args.history_output {
            history
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("History written to {}", path.display());
        }
    }

    Ok(())
}
