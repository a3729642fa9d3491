//! Interpolation for delta-optimized smoothing.
//!
//! ## Purpose
//!
//! When points are densely sampled, fitting every one is unnecessary: with a
//! positive `delta`, the engine fits anchor points spaced at least `delta`
//! apart and fills the gaps between them by linear interpolation. This module
//! provides the gap fill; the anchor walk lives in the engine.
//!
//! ## Invariants
//!
//! * Input x-values are sorted in ascending order.
//! * Tied x-values receive the same fitted value.
//!
//! ## Non-goals
//!
//! * This module does not perform the smoothing or fitting.
//! * This module does not sort the input data.

// External dependencies
use num_traits::Float;

/// Interpolate the gap between two fitted anchor points.
///
/// # Special cases
///
/// * **No gap**: If current <= last_fitted + 1, nothing to fill.
/// * **Tied x-values**: If x₁ = x₀, uses the simple average of y-values.
pub fn interpolate_gap<T: Float>(x: &[T], y_smooth: &mut [T], last_fitted: usize, current: usize) {
    if current <= last_fitted + 1 {
        return;
    }

    let x0 = x[last_fitted];
    let x1 = x[current];
    let y0 = y_smooth[last_fitted];
    let y1 = y_smooth[current];

    let denom = x1 - x0;

    if denom <= T::zero() {
        // Duplicate x-values: use the simple average
        let avg = (y0 + y1) / T::from(2.0).unwrap_or_else(|| T::one() + T::one());
        y_smooth[(last_fitted + 1)..current].fill(avg);
        return;
    }

    // Linear interpolation: y = y0 + (xi - x0) * slope
    let slope = (y1 - y0) / denom;
    for k in (last_fitted + 1)..current {
        y_smooth[k] = y0 + (x[k] - x0) * slope;
    }
}
