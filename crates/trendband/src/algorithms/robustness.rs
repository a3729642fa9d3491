//! Robustness reweighting for outlier-resistant fits.
//!
//! ## Purpose
//!
//! This module implements the iterative reweighting that makes the smoother
//! robust: after each fit, points with large residuals are down-weighted via
//! the bisquare function so the next pass is pulled less by outliers.
//!
//! ## Design notes
//!
//! * **Weighting**: Bisquare with tuning constant c = 6.0 (Cleveland's choice).
//! * **Scale**: Residual scale comes from the MAD, with a mean-absolute
//!   fallback when the MAD collapses (more than half the residuals identical).
//! * **Buffers**: Residual and scratch buffers are caller-owned and reused
//!   across iterations.
//!
//! ## Invariants
//!
//! * Produced weights are in [0, 1].
//! * A zero scale yields weight 1 for every point (no downweighting).
//!
//! ## Non-goals
//!
//! * This module does not run the iteration loop (the engine owns it).
//! * This module does not decide how many iterations to perform.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::{mad_inplace, mean_abs};

// ============================================================================
// Constants
// ============================================================================

/// Bisquare tuning constant (multiples of the residual scale).
const BISQUARE_C: f64 = 6.0;

/// Relative threshold below which the MAD is considered collapsed.
const SCALE_THRESHOLD: f64 = 1e-7;

/// Absolute floor for the residual scale.
const MIN_TUNED_SCALE: f64 = 1e-12;

// ============================================================================
// Scale Estimation
// ============================================================================

/// Robust residual scale via MAD, with a mean-absolute fallback.
///
/// `scratch` must have the same length as `residuals` and is overwritten.
pub fn compute_scale<T: Float>(residuals: &[T], scratch: &mut [T]) -> T {
    scratch.copy_from_slice(residuals);
    let scale = mad_inplace(scratch);

    let mean = mean_abs(residuals);
    let threshold = T::from(SCALE_THRESHOLD).unwrap_or_else(T::epsilon) * mean;
    let floor = T::from(MIN_TUNED_SCALE).unwrap_or_else(T::epsilon);

    // Collapsed MAD (ties dominate): fall back to the mean absolute residual
    if scale <= threshold.max(floor) {
        mean.max(scale)
    } else {
        scale
    }
}

// ============================================================================
// Bisquare Weighting
// ============================================================================

/// Bisquare weight for an absolute residual at the given scale.
#[inline]
pub fn bisquare_weight<T: Float>(r_abs: T, scale: T) -> T {
    if scale <= T::zero() {
        return T::one();
    }

    let c = T::from(BISQUARE_C).unwrap_or_else(T::one);
    let floor = T::from(MIN_TUNED_SCALE).unwrap_or_else(T::epsilon);
    let cmad = (scale * c).max(floor);

    let c1 = T::from(0.001).unwrap_or_else(T::zero) * cmad;
    let c9 = T::from(0.999).unwrap_or_else(T::one) * cmad;

    if r_abs <= c1 {
        T::one()
    } else if r_abs <= c9 {
        let ratio = r_abs / cmad;
        let tmp = T::one() - ratio * ratio;
        tmp * tmp
    } else {
        T::zero()
    }
}

/// Recompute robustness weights from the current fit.
///
/// Writes `y - y_smooth` into `residuals`, estimates the robust scale using
/// `scratch`, and fills `weights` with bisquare weights.
pub fn update_weights<T: Float>(
    y: &[T],
    y_smooth: &[T],
    residuals: &mut [T],
    scratch: &mut [T],
    weights: &mut [T],
) {
    let n = y.len();
    debug_assert_eq!(n, y_smooth.len());
    debug_assert_eq!(n, residuals.len());
    debug_assert_eq!(n, scratch.len());
    debug_assert_eq!(n, weights.len());

    for i in 0..n {
        residuals[i] = y[i] - y_smooth[i];
    }

    let scale = compute_scale(residuals, scratch);

    for i in 0..n {
        weights[i] = bisquare_weight(residuals[i].abs(), scale);
    }
}
