//! Robust scale estimation via the median absolute deviation.
//!
//! This module provides the in-place quickselect median and the MAD
//! (`median(|r - median(r)|)`) used both for robustness reweighting and for
//! the residual dispersion behind the confidence band. Both operate on
//! scratch buffers and reorder them.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Compute the median in-place using quickselect.
///
/// Reorders `vals`; even-length inputs average the two middle values.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n.is_multiple_of(2) {
        // Even length: average of two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // Largest value in the lower half
        let mut lower = vals[0];
        let mut i = 1;
        while i < mid {
            if vals[i] > lower {
                lower = vals[i];
            }
            i += 1;
        }

        (lower + upper) / T::from(2.0).unwrap_or_else(|| T::one() + T::one())
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}

/// Compute the Median Absolute Deviation (MAD) in-place.
#[inline]
pub fn mad_inplace<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    // Step 1: Median of the values
    let median = median_inplace(vals);

    // Step 2: Absolute deviations from the median
    for val in vals.iter_mut() {
        *val = (*val - median).abs();
    }

    // Step 3: Median of the absolute deviations
    median_inplace(vals)
}

/// Compute the mean absolute value.
#[inline]
pub fn mean_abs<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or_else(T::one);
    let mut sum = T::zero();
    for val in vals.iter() {
        sum = sum + val.abs();
    }
    sum / n
}
