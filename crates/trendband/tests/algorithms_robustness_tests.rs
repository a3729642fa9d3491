#![cfg(feature = "dev")]
//! Tests for the bisquare robustness reweighting.
//!
//! These tests verify the components of the outlier-downweighting pass:
//! - The bisquare weight function at hand-computed points
//! - The robust scale with its collapsed-MAD fallback
//! - The full weight update as run between smoothing passes
//!
//! ## Test Organization
//!
//! 1. **Bisquare Weights** - Exact values, clamping thresholds
//! 2. **Scale Estimation** - MAD path, mean-absolute fallback
//! 3. **Weight Updates** - End-to-end pass over residuals

use approx::assert_relative_eq;

use trendband::internals::algorithms::robustness::{
    bisquare_weight, compute_scale, update_weights,
};

// ============================================================================
// Bisquare Weight Tests
// ============================================================================

/// Test bisquare values at hand-computed points.
///
/// With scale 1 the tuning cutoff is 6: a residual of 3 gives
/// (1 - 0.25)^2 = 0.5625.
#[test]
fn test_bisquare_exact_values() {
    assert_eq!(bisquare_weight(0.0, 1.0), 1.0, "Zero residual keeps weight 1");
    assert_relative_eq!(bisquare_weight(3.0, 1.0), 0.5625, epsilon = 1e-12);
    assert_eq!(bisquare_weight(6.0, 1.0), 0.0, "Residual at the cutoff drops out");
    assert_eq!(bisquare_weight(100.0, 1.0), 0.0, "Residual past the cutoff drops out");
}

/// Test the near-zero residual snap.
///
/// Residuals below 0.1% of the cutoff keep exactly weight 1.
#[test]
fn test_bisquare_near_snap() {
    // cutoff = 6, snap threshold = 0.006
    assert_eq!(bisquare_weight(0.005, 1.0), 1.0);
    assert!(
        bisquare_weight(0.01, 1.0) < 1.0,
        "Residuals past the snap threshold must decay"
    );
}

/// Test the far clamp just below the cutoff.
#[test]
fn test_bisquare_far_clamp() {
    // 99.9% of the cutoff: at or beyond, weight is exactly 0
    assert_eq!(bisquare_weight(5.995, 1.0), 0.0);
    assert!(
        bisquare_weight(5.9, 1.0) > 0.0,
        "Residuals inside the clamp keep positive weight"
    );
}

/// Test that a non-positive scale disables downweighting.
#[test]
fn test_bisquare_zero_scale() {
    assert_eq!(bisquare_weight(123.0, 0.0), 1.0);
    assert_eq!(bisquare_weight(123.0, -1.0), 1.0);
}

/// Test that bisquare weights decrease with the residual magnitude.
#[test]
fn test_bisquare_monotone() {
    let residuals = [0.1, 1.0, 2.0, 4.0, 5.5];
    for pair in residuals.windows(2) {
        assert!(
            bisquare_weight(pair[0], 1.0) > bisquare_weight(pair[1], 1.0),
            "Weight must decrease from |r|={} to |r|={}",
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// Scale Estimation Tests
// ============================================================================

/// Test the MAD path of the robust scale.
#[test]
fn test_compute_scale_mad() {
    let residuals = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
    let mut scratch = vec![0.0; 5];

    assert_eq!(compute_scale(&residuals, &mut scratch), 1.0);
}

/// Test the collapsed-MAD fallback.
///
/// When more than half the residuals tie, the MAD is zero and the scale
/// falls back to the mean absolute residual.
#[test]
fn test_compute_scale_collapsed_mad() {
    let residuals = vec![1.0, 1.0, 1.0, 1.0];
    let mut scratch = vec![0.0; 4];

    assert_eq!(
        compute_scale(&residuals, &mut scratch),
        1.0,
        "Collapsed MAD must fall back to the mean absolute residual"
    );
}

/// Test the scale of an all-zero residual vector.
#[test]
fn test_compute_scale_all_zero() {
    let residuals = vec![0.0; 5];
    let mut scratch = vec![0.0; 5];

    assert_eq!(
        compute_scale(&residuals, &mut scratch),
        0.0,
        "A perfect fit has zero scale"
    );
}

// ============================================================================
// Weight Update Tests
// ============================================================================

/// Test a full weight update over a fit with one outlier.
///
/// Residuals [0, 0, 0, 0, 10] collapse the MAD, so the scale falls back to
/// the mean absolute residual 2; the outlier then gets
/// (1 - (10/12)^2)^2 = (11/36)^2.
#[test]
fn test_update_weights_outlier() {
    let y = vec![0.0, 0.0, 0.0, 0.0, 10.0];
    let y_smooth = vec![0.0; 5];
    let mut residuals = vec![0.0; 5];
    let mut scratch = vec![0.0; 5];
    let mut weights = vec![0.0; 5];

    update_weights(&y, &y_smooth, &mut residuals, &mut scratch, &mut weights);

    assert_eq!(residuals, vec![0.0, 0.0, 0.0, 0.0, 10.0]);
    for &w in &weights[..4] {
        assert_eq!(w, 1.0, "Zero residuals keep full weight");
    }
    assert_relative_eq!(weights[4], (11.0 / 36.0) * (11.0 / 36.0), epsilon = 1e-12);
}

/// Test that a perfect fit leaves every weight at 1.
#[test]
fn test_update_weights_perfect_fit() {
    let y = vec![1.0, 2.0, 3.0];
    let y_smooth = y.clone();
    let mut residuals = vec![9.0; 3];
    let mut scratch = vec![0.0; 3];
    let mut weights = vec![0.0; 3];

    update_weights(&y, &y_smooth, &mut residuals, &mut scratch, &mut weights);

    assert_eq!(residuals, vec![0.0; 3], "Residuals must be rewritten");
    assert_eq!(weights, vec![1.0; 3], "Zero scale disables downweighting");
}

/// Test that weight updates land in [0, 1] for arbitrary residual shapes.
#[test]
fn test_update_weights_bounded() {
    let y = vec![0.3, -1.2, 4.0, 0.9, -0.4, 2.2, -3.1, 0.1];
    let y_smooth = vec![0.0; 8];
    let mut residuals = vec![0.0; 8];
    let mut scratch = vec![0.0; 8];
    let mut weights = vec![0.0; 8];

    update_weights(&y, &y_smooth, &mut residuals, &mut scratch, &mut weights);

    for (i, &w) in weights.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&w),
            "weights[{i}] = {w} escaped [0, 1]"
        );
    }
}
