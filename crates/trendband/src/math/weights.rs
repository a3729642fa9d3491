//! Tricube kernel weighting for local regression.
//!
//! ## Purpose
//!
//! This module provides the distance-based weighting used by the local fits.
//! It maps normalized distances u = |x - x_i| / bandwidth to weights through
//! the tricube kernel, controlling the influence of neighboring points.
//!
//! ## Design notes
//!
//! * **Kernel**: Tricube K(u) = (1 - |u|^3)^3, Cleveland's original choice.
//! * **Support**: Bounded on [-1, 1]; weights are exactly zero outside.
//! * **Snapping**: Distances within 0.1% of the bandwidth get weight 1,
//!   distances beyond 99.9% get weight 0, avoiding needless kernel calls.
//!
//! ## Invariants
//!
//! * Weights are non-negative and symmetric in distance.
//! * The weight buffer region covering the window is fully written on each call.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights.
//! * This module does not select the bandwidth.

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel
// ============================================================================

/// Compute the unnormalized tricube weight K(u) for a normalized distance.
#[inline]
pub fn tricube_weight<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

// ============================================================================
// Window Weighting
// ============================================================================

/// Apply tricube weighting to a window of points.
///
/// Fills `weights[left..=right]` and returns the weight sum together with the
/// rightmost index that received a nonzero weight.
#[allow(clippy::too_many_arguments)]
pub fn compute_window_weights<T: Float>(
    x: &[T],
    left: usize,
    right: usize,
    x_current: T,
    bandwidth: T,
    h1: T,
    h9: T,
    weights: &mut [T],
) -> (T, usize) {
    let n = x.len();

    // Safety guard for empty input or invalid window
    if left >= n || right >= n || left > right {
        return (T::zero(), left);
    }

    // Degenerate bandwidth: zero all weights in window
    if bandwidth <= T::zero() {
        let mut i = left;
        while i < n {
            weights[i] = T::zero();
            i += 1;
        }
        return (T::zero(), left);
    }

    let mut sum = T::zero();
    let mut rightmost = left;

    // Skip points to the left of (x_current - h9) for efficiency
    let lower_bound = x_current - h9;
    let mut start = left;
    while start < n && x[start] < lower_bound {
        start += 1;
    }

    // Zero the skipped region [left..start)
    if start > left {
        let mut i = left;
        while i < start {
            weights[i] = T::zero();
            i += 1;
        }
    }

    let mut j = start;
    while j <= right {
        let xj = x[j];
        let distance = (xj - x_current).abs();

        if distance > h9 {
            if xj > x_current {
                // Beyond h9 on right side (x is sorted): zero remaining in window and break
                let mut k = j;
                while k <= right {
                    weights[k] = T::zero();
                    k += 1;
                }
                break;
            }
            // Beyond h9 on the left side
            weights[j] = T::zero();
            j += 1;
            continue;
        }

        // Snap very close points to full weight, otherwise evaluate the kernel
        let w_k = if distance <= h1 {
            T::one()
        } else {
            tricube_weight(distance / bandwidth)
        };

        weights[j] = w_k;
        sum = sum + w_k;
        rightmost = j;
        j += 1;
    }

    (sum, rightmost)
}
