#![cfg(feature = "dev")]
//! Tests for the public builder and model API.
//!
//! These tests exercise the full user-facing path: builder defaults and
//! validation, fit-time input errors, result shape, optional outputs, band
//! behavior across tail settings, and a hand-verified spike-detection run.
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, duplicate detection, parameter validation
//! 2. **Fit Errors** - Data-level rejections surfaced through the model
//! 3. **Result Shape** - Alignment, optional outputs, accessors
//! 4. **Band Behavior** - Tail monotonicity, outlier classification
//! 5. **Ergonomics** - Model reuse, Display output, f32 support

use approx::assert_relative_eq;

use trendband::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that an unconfigured builder yields the documented defaults.
#[test]
fn test_builder_defaults() {
    let model = Trendband::<f64>::new().build().unwrap();

    assert_relative_eq!(model.fraction(), DEFAULT_FRACTION, epsilon = 1e-12);
    assert_eq!(model.iterations(), DEFAULT_ITERATIONS);
    assert_relative_eq!(model.tail(), DEFAULT_TAIL, epsilon = 1e-12);
    assert_eq!(model.min_points(), DEFAULT_MIN_POINTS);
}

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = Trendband::<f64>::new()
        .fraction(0.3)
        .fraction(0.5)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TrendbandError::DuplicateParameter {
            parameter: "fraction"
        }
    );

    let err = Trendband::<f64>::new()
        .iterations(2)
        .iterations(3)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        TrendbandError::DuplicateParameter {
            parameter: "iterations"
        }
    );
}

/// Test every parameter bound enforced by build().
#[test]
fn test_invalid_parameters_rejected() {
    assert_eq!(
        Trendband::<f64>::new().fraction(0.0).build().unwrap_err(),
        TrendbandError::InvalidFraction(0.0)
    );
    assert_eq!(
        Trendband::<f64>::new().tail(1.0).build().unwrap_err(),
        TrendbandError::InvalidTail(1.0)
    );
    assert_eq!(
        Trendband::<f64>::new().iterations(1001).build().unwrap_err(),
        TrendbandError::InvalidIterations(1001)
    );
    assert_eq!(
        Trendband::<f64>::new().delta(-0.5).build().unwrap_err(),
        TrendbandError::InvalidDelta(-0.5)
    );
    assert_eq!(
        Trendband::<f64>::new()
            .auto_converge(-1.0)
            .build()
            .unwrap_err(),
        TrendbandError::InvalidTolerance(-1.0)
    );
    assert_eq!(
        Trendband::<f64>::new().min_points(1).build().unwrap_err(),
        TrendbandError::InvalidMinPoints { got: 1 }
    );
}

// ============================================================================
// Fit Error Tests
// ============================================================================

/// Test data-level errors surfaced by fit().
#[test]
fn test_fit_input_errors() {
    let model = Trendband::<f64>::new().build().unwrap();

    assert_eq!(model.fit(&[], &[]).unwrap_err(), TrendbandError::EmptyInput);

    assert_eq!(
        model.fit(&[0.0, 1.0], &[1.0, 2.0, 3.0]).unwrap_err(),
        TrendbandError::MismatchedInputs { x_len: 2, y_len: 3 }
    );

    assert_eq!(
        model
            .fit(&[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0])
            .unwrap_err(),
        TrendbandError::UnsortedInput { index: 2 }
    );

    assert_eq!(
        model.fit(&[0.0], &[1.0]).unwrap_err(),
        TrendbandError::TooFewPoints { got: 1, min: 2 }
    );

    assert!(matches!(
        model
            .fit(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0])
            .unwrap_err(),
        TrendbandError::InvalidNumericValue(_)
    ));
}

/// Test that the configured minimum length is enforced per fit.
#[test]
fn test_min_points_enforced() {
    let model = Trendband::<f64>::new().min_points(5).build().unwrap();

    assert_eq!(
        model
            .fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0])
            .unwrap_err(),
        TrendbandError::TooFewPoints { got: 3, min: 5 }
    );

    let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
    let y = vec![1.0; 5];
    assert!(model.fit(&x, &y).is_ok());
}

// ============================================================================
// Result Shape Tests
// ============================================================================

/// Test that every output vector aligns with the input.
#[test]
fn test_result_alignment() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi.sin()).collect();

    let model = Trendband::new().fraction(0.5).build().unwrap();
    let result = model.fit(&x, &y).unwrap();

    assert_eq!(result.len(), 10);
    assert!(!result.is_empty());
    assert_eq!(result.x.len(), 10);
    assert_eq!(result.trend.len(), 10);
    assert_eq!(result.lower.len(), 10);
    assert_eq!(result.upper.len(), 10);
    assert!(result.residual_sd > 0.0);
    for i in 0..10 {
        assert!(result.lower[i] < result.upper[i]);
    }
}

/// Test that residuals and weights are withheld unless requested.
#[test]
fn test_optional_outputs_withheld_by_default() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();

    let result = Trendband::new().build().unwrap().fit(&x, &y).unwrap();

    assert!(result.residuals.is_none());
    assert!(result.robustness_weights.is_none());
}

/// Test requested optional outputs: presence, alignment, and definition.
#[test]
fn test_optional_outputs_returned() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y = vec![3.0, 3.5, 2.8, 3.1, 9.0, 3.2, 2.9, 3.4];

    let result = Trendband::new()
        .fraction(0.6)
        .return_residuals()
        .return_robustness_weights()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let residuals = result.residuals.as_ref().unwrap();
    let weights = result.robustness_weights.as_ref().unwrap();
    assert_eq!(residuals.len(), 8);
    assert_eq!(weights.len(), 8);

    for i in 0..8 {
        assert_relative_eq!(residuals[i], y[i] - result.trend[i], epsilon = 1e-12);
        assert!((0.0..=1.0).contains(&weights[i]));
    }
}

// ============================================================================
// Band Behavior Tests
// ============================================================================

/// Test that a smaller tail produces a strictly wider band.
#[test]
fn test_band_width_monotone_in_tail() {
    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let y = vec![
        5.0, 5.4, 4.8, 5.1, 5.3, 4.9, 5.2, 5.0, 4.7, 5.3, 5.1, 4.8,
    ];

    let width_for = |tail: f64| {
        let result = Trendband::new()
            .fraction(0.5)
            .tail(tail)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();
        result.band_width(0)
    };

    let wide_tail = width_for(0.2);
    let mid_tail = width_for(0.05);
    let narrow_tail = width_for(0.01);

    assert!(
        wide_tail < mid_tail && mid_tail < narrow_tail,
        "Band must widen as the tail shrinks: {wide_tail} {mid_tail} {narrow_tail}"
    );
}

/// Test spike detection on a hand-verified occupancy-ratio series.
///
/// Six calm values around 0.5 and one spike at 0.98: the robustness pass
/// zeroes the spike's weight, the local fit at the spike reduces to the
/// line through its two surviving neighbors (value 0.505), and the band
/// flags the spike alone.
#[test]
fn test_ratio_series_flags_single_spike() {
    let x: Vec<f64> = (0..7).map(|i| i as f64).collect();
    let y = vec![0.50, 0.52, 0.49, 0.51, 0.98, 0.50, 0.53];

    let result = Trendband::new()
        .fraction(0.5)
        .iterations(1)
        .tail(0.1)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_relative_eq!(result.trend[4], 0.505, epsilon = 1e-9);

    for i in 0..y.len() {
        assert_eq!(
            result.is_outside(i, y[i]),
            i == 4,
            "Only the spike should fall outside the band (index {i})"
        );
    }
}

// ============================================================================
// Ergonomics Tests
// ============================================================================

/// Test that one model can fit several independent series.
#[test]
fn test_model_reuse() {
    let model = Trendband::<f64>::new().fraction(0.8).build().unwrap();

    let x1: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let y1: Vec<f64> = x1.iter().map(|&xi| xi * 2.0).collect();
    let x2: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y2: Vec<f64> = x2.iter().map(|&xi| 10.0 - xi).collect();

    let r1 = model.fit(&x1, &y1).unwrap();
    let r2 = model.fit(&x2, &y2).unwrap();

    assert_eq!(r1.len(), 6);
    assert_eq!(r2.len(), 9);
}

/// Test the Display rendering.
#[test]
fn test_display_output() {
    let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
    let y = vec![1.0, 2.2, 2.9, 4.1, 5.0];

    let result = Trendband::new()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let rendered = format!("{result}");
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Trend Data:"));
    assert!(rendered.contains("Residual"));
}

/// Test the API with f32 inputs.
#[test]
fn test_f32_support() {
    let x: Vec<f32> = (0..8).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|&xi| 3.0 * xi + 1.0).collect();

    let result = Trendband::new()
        .fraction(0.5)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    for (i, &t) in result.trend.iter().enumerate() {
        assert_relative_eq!(t, y[i], epsilon = 1e-3);
    }
}
