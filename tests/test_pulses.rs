//! Pulse synthesis: shapes, support and sampling grid

use approx::assert_abs_diff_eq;
use shocksim::prelude::*;

const A: f64 = 100.0;
const T: f64 = 0.011;

fn sample(shape: PulseShape, t: f64) -> f64 {
    pulse_acceleration(t, shape, A, T)
}

#[test]
fn test_half_sine_shape() {
    assert_abs_diff_eq!(sample(PulseShape::HalfSine, 0.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::HalfSine, T / 2.0), A, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::HalfSine, T), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(
        sample(PulseShape::HalfSine, T / 6.0),
        A * 0.5,
        epsilon = 1e-10
    );
}

#[test]
fn test_sawtooth_terminal_peak() {
    assert_eq!(sample(PulseShape::Sawtooth, 0.0), 0.0);
    assert_abs_diff_eq!(sample(PulseShape::Sawtooth, T / 2.0), A / 2.0, epsilon = 1e-12);
    // Support is closed, so the ramp reaches full amplitude at T
    assert_abs_diff_eq!(sample(PulseShape::Sawtooth, T), A, epsilon = 1e-12);
    assert_eq!(sample(PulseShape::Sawtooth, T * 1.001), 0.0);
}

#[test]
fn test_rectangular_flat_top() {
    for t in [0.0, T / 3.0, T] {
        assert_eq!(sample(PulseShape::Rectangular, t), A);
    }
    assert_eq!(sample(PulseShape::Rectangular, -1e-9), 0.0);
}

#[test]
fn test_triangle_symmetric() {
    assert_abs_diff_eq!(sample(PulseShape::TriangleSym, T / 2.0), A, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::TriangleSym, 0.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::TriangleSym, T), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        sample(PulseShape::TriangleSym, T / 4.0),
        sample(PulseShape::TriangleSym, 3.0 * T / 4.0),
        epsilon = 1e-10
    );
}

#[test]
fn test_haversine_smooth_ends() {
    assert_abs_diff_eq!(sample(PulseShape::Haversine, 0.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::Haversine, T / 2.0), A, epsilon = 1e-12);
    assert_abs_diff_eq!(sample(PulseShape::Haversine, T), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(sample(PulseShape::Haversine, T / 4.0), A / 2.0, epsilon = 1e-10);
}

#[test]
fn test_custom_shape_has_no_closed_form() {
    assert_eq!(sample(PulseShape::Custom, T / 2.0), 0.0);
}

#[test]
fn test_negative_amplitude_mirrors() {
    for shape in PulseShape::SYNTHETIC {
        let t = 0.3 * T;
        assert_eq!(
            pulse_acceleration(t, shape, -A, T),
            -pulse_acceleration(t, shape, A, T)
        );
    }
}

#[test]
fn test_shape_names_parse() {
    assert_eq!("half-sine".parse::<PulseShape>().unwrap(), PulseShape::HalfSine);
    assert_eq!("Haversine".parse::<PulseShape>().unwrap(), PulseShape::Haversine);
    assert!(matches!(
        "square".parse::<PulseShape>(),
        Err(SrsError::InvalidInput(_))
    ));
    for shape in PulseShape::SYNTHETIC {
        assert_eq!(shape.to_string().parse::<PulseShape>().unwrap(), shape);
    }
}

#[test]
fn test_synthesized_series_matches_formula() {
    let dt = 25e-6;
    let series = synthesize_pulse(PulseShape::HalfSine, A, T, dt).unwrap();

    // 0.1 s ringdown floor
    assert_eq!(series.len(), 4001);
    assert_eq!(series.dt(), dt);
    for (i, &v) in series.values().iter().enumerate().step_by(37) {
        assert_eq!(v, pulse_acceleration(i as f64 * dt, PulseShape::HalfSine, A, T));
    }
    assert_abs_diff_eq!(series.peak(), A, epsilon = 1e-3);
    assert!(series.values()[500..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_long_pulse_window_is_five_durations() {
    let series = synthesize_pulse(PulseShape::Rectangular, 1.0, 0.04, 1e-4).unwrap();
    assert_eq!(series.len(), 2001);
    assert_abs_diff_eq!(series.duration(), 0.2, epsilon = 1e-12);
}

#[test]
fn test_synthesis_rejects_bad_parameters() {
    assert!(synthesize_pulse(PulseShape::HalfSine, A, 0.0, 25e-6).is_err());
    assert!(synthesize_pulse(PulseShape::HalfSine, A, -0.01, 25e-6).is_err());
    assert!(synthesize_pulse(PulseShape::HalfSine, f64::NAN, T, 25e-6).is_err());
    assert!(synthesize_pulse(PulseShape::HalfSine, A, T, 0.0).is_err());
    assert!(synthesize_pulse(PulseShape::Custom, A, T, 25e-6).is_err());
}

#[test]
fn test_oversized_window_is_rejected() {
    for duration in [1e300, 1e4] {
        assert!(matches!(
            synthesize_pulse(PulseShape::HalfSine, 1.0, duration, 25e-6),
            Err(SrsError::InvalidInput(_))
        ));
    }
    // 5x overflows to infinity
    assert!(synthesize_pulse(PulseShape::HalfSine, 1.0, f64::MAX, 25e-6).is_err());
}
