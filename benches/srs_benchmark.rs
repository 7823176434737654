//! SRS benchmarks
//!
//! Single-frequency runs and full sweeps on the default 25 us grid.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shocksim::prelude::*;

fn half_sine() -> UniformTimeSeries {
    synthesize_pulse(PulseShape::HalfSine, 100.0, 0.011, 25e-6).unwrap()
}

/// One oscillator over the 4001-sample series
fn bench_peak_response(c: &mut Criterion) {
    let series = half_sine();
    let mut group = c.benchmark_group("Peak Response");

    for f in [10.0, 100.0, 1000.0] {
        group.bench_with_input(BenchmarkId::new("natural_frequency", f), &f, |b, &f| {
            b.iter(|| compute_peak_response(black_box(&series), f, 0.05).unwrap());
        });
    }

    group.finish();
}

fn bench_full_response(c: &mut Criterion) {
    let series = half_sine();
    c.bench_function("Full Response 45 Hz", |b| {
        b.iter(|| compute_full_response(black_box(&series), 45.0, 0.05).unwrap());
    });
}

/// Whole spectrum for growing point counts
fn bench_spectrum(c: &mut Criterion) {
    let series = half_sine();
    let mut group = c.benchmark_group("Spectrum");
    group.sample_size(20);

    for points in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("points", points), &points, |b, &n| {
            b.iter(|| compute_spectrum(black_box(&series), 0.05, 10.0, 2000.0, n).unwrap());
        });
    }

    group.finish();
}

fn bench_synthesis(c: &mut Criterion) {
    let record = CustomRecord::from_samples(
        (0..=200).map(|i| (i as f64 * 5e-5, (i as f64 * 0.1).sin())),
    )
    .unwrap();

    c.bench_function("Synthesize Half-Sine", |b| {
        b.iter(|| synthesize_pulse(PulseShape::HalfSine, black_box(100.0), 0.011, 25e-6).unwrap());
    });
    c.bench_function("Resample Record", |b| {
        b.iter(|| resample_custom_record(black_box(&record), 25e-6).unwrap());
    });
}

criterion_group!(
    benches,
    bench_peak_response,
    bench_full_response,
    bench_spectrum,
    bench_synthesis
);
criterion_main!(benches);
