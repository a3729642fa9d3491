#![cfg(feature = "dev")]
//! Tests for residual dispersion and confidence band assembly.
//!
//! These tests verify the statistical layer that turns a smoothed trend into
//! a band:
//! - The MAD-based residual standard deviation with its positive floor
//! - The tail-to-quantile mapping (fast paths and the Acklam approximation)
//! - Symmetric band construction and the degenerate-width guard
//!
//! ## Test Organization
//!
//! 1. **Residual SD** - Hand-computed values, single-point and floor cases
//! 2. **Normal Quantile** - Fast paths, Acklam accuracy, monotonicity
//! 3. **Band Assembly** - Bounds, degenerate guard behavior

use approx::assert_relative_eq;

use trendband::internals::evaluation::band::{compute_band, residual_sd, z_for_tail};

// ============================================================================
// Residual SD Tests
// ============================================================================

/// Test the residual SD on a symmetric residual vector.
///
/// Residuals [-1, 1, -1, 1] have MAD 1, so the SD is the consistency
/// factor itself.
#[test]
fn test_residual_sd_symmetric() {
    let residuals = vec![-1.0, 1.0, -1.0, 1.0];
    let mut scratch = vec![0.0; 4];

    assert_relative_eq!(
        residual_sd(&residuals, &mut scratch),
        1.4826,
        epsilon = 1e-12
    );
}

/// Test the residual SD of a single residual.
#[test]
fn test_residual_sd_single() {
    let residuals = vec![-2.0];
    let mut scratch = vec![0.0; 1];

    assert_relative_eq!(
        residual_sd(&residuals, &mut scratch),
        2.0 * 1.4826,
        epsilon = 1e-12
    );
}

/// Test the positive floor for a perfect fit.
///
/// A zero MAD must not produce a zero SD; the band stays ordered with a
/// vanishingly small width instead.
#[test]
fn test_residual_sd_floor() {
    let residuals = vec![0.0; 6];
    let mut scratch = vec![0.0; 6];

    let sd = residual_sd(&residuals, &mut scratch);
    assert!(sd > 0.0, "Floor must keep the SD positive");
    assert!(sd < 1e-11, "Floored SD must stay negligible");
}

/// Test the residual SD of empty input.
#[test]
fn test_residual_sd_empty() {
    let residuals: Vec<f64> = vec![];
    let mut scratch: Vec<f64> = vec![];

    assert_eq!(residual_sd(&residuals, &mut scratch), 0.0);
}

/// Test that a wild residual barely moves the robust SD.
#[test]
fn test_residual_sd_outlier_robust() {
    let calm = vec![-1.0, 0.5, -0.5, 1.0, 0.0];
    let wild = vec![-1.0, 0.5, -0.5, 1.0, 1000.0];
    let mut scratch = vec![0.0; 5];

    let sd_calm = residual_sd(&calm, &mut scratch);
    let sd_wild = residual_sd(&wild, &mut scratch);

    assert!(
        sd_wild < 4.0 * sd_calm,
        "Robust SD must not blow up with one outlier: {sd_calm} -> {sd_wild}"
    );
}

// ============================================================================
// Normal Quantile Tests
// ============================================================================

/// Test the textbook fast paths.
#[test]
fn test_z_fast_paths() {
    assert_relative_eq!(z_for_tail(0.10), 1.645, epsilon = 1e-12);
    assert_relative_eq!(z_for_tail(0.05), 1.960, epsilon = 1e-12);
    assert_relative_eq!(z_for_tail(0.01), 2.576, epsilon = 1e-12);
}

/// Test the Acklam approximation against reference quantiles.
///
/// A 0.2 tail maps to the 0.9 quantile, 1.2815515655...; a 0.002 tail maps
/// to the 0.999 quantile, 3.0902323062...
#[test]
fn test_z_acklam_reference_values() {
    assert_relative_eq!(z_for_tail(0.2), 1.2815515655, epsilon = 1e-6);
    assert_relative_eq!(z_for_tail(0.002), 3.0902323062, epsilon = 1e-6);
}

/// Test that smaller tails always produce wider quantiles.
#[test]
fn test_z_monotone_in_tail() {
    let tails = [0.5, 0.2, 0.10, 0.05, 0.01, 0.002];
    for pair in tails.windows(2) {
        assert!(
            z_for_tail(pair[0]) < z_for_tail(pair[1]),
            "z must grow as the tail shrinks: tail {} vs {}",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// Band Assembly Tests
// ============================================================================

/// Test band bounds against hand-computed values.
#[test]
fn test_compute_band_bounds() {
    let trend = vec![1.0, 2.0, 3.0];
    let (lower, upper) = compute_band(&trend, 0.5, 2.0);

    assert_eq!(lower, vec![0.0, 1.0, 2.0]);
    assert_eq!(upper, vec![2.0, 3.0, 4.0]);
}

/// Test the degenerate-width guard with a zero quantile.
///
/// A positive SD with z = 0 collapses the width; the guard must reopen it
/// by a hair so lower < upper still holds.
#[test]
fn test_compute_band_degenerate_guard() {
    let trend = vec![5.0, 6.0];
    let (lower, upper) = compute_band(&trend, 1.0, 0.0);

    for (l, u) in lower.iter().zip(upper.iter()) {
        assert!(u > l, "Guard must keep the band ordered");
        assert_relative_eq!(u - l, 1e-12, epsilon = 1e-15);
    }
}

/// Test that a zero SD skips the guard entirely.
#[test]
fn test_compute_band_zero_sd() {
    let trend = vec![5.0, 6.0];
    let (lower, upper) = compute_band(&trend, 0.0, 1.96);

    assert_eq!(lower, trend, "Zero SD collapses onto the trend");
    assert_eq!(upper, trend, "Zero SD collapses onto the trend");
}

/// Test band symmetry around the trend.
#[test]
fn test_compute_band_symmetric() {
    let trend = vec![-2.0, 0.0, 7.5];
    let sd = 0.8;
    let z = 1.645;

    let (lower, upper) = compute_band(&trend, sd, z);

    for i in 0..trend.len() {
        assert_relative_eq!(trend[i] - lower[i], upper[i] - trend[i], epsilon = 1e-12);
        assert_relative_eq!(upper[i] - lower[i], 2.0 * z * sd, epsilon = 1e-12);
    }
}
