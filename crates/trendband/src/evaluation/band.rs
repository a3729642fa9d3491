//! Confidence band construction around the smoothed trend.
//!
//! ## Purpose
//!
//! This module turns the residuals of a smoothed fit into a symmetric
//! confidence band: a robust residual dispersion estimate, the standard
//! normal quantile for the requested tail probability, and the per-point
//! (lower, upper) bounds.
//!
//! ## Design notes
//!
//! * **Dispersion**: `1.4826 × MAD(residuals)`, the MAD-to-sigma factor for
//!   normal data, so a single wild residual cannot inflate its own band.
//! * **Tail semantics**: the band parameter is the tail probability allowed
//!   outside the interval, not the coverage. `z = Φ⁻¹(1 − tail/2)`, so a
//!   smaller tail yields a wider band.
//! * **Quantile**: exact constants for the common tails (0.10, 0.05, 0.01);
//!   Acklam's rational approximation of the inverse normal CDF otherwise.
//! * **Degeneracy**: a zero MAD floors the dispersion at a sub-nanoscale
//!   positive value, and any non-positive or non-finite interval widens to
//!   `lower + 1e-12`.
//!
//! ## Invariants
//!
//! * `lower[i] <= upper[i]` for every point, with strict inequality after
//!   the degenerate-width guard.
//! * Band bounds align index-for-index with the trend they wrap.
//!
//! ## Non-goals
//!
//! * This module does not compute the trend or the residuals.
//! * This module does not classify observations against the band.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::mad_inplace;

// ============================================================================
// Constants
// ============================================================================

/// Conversion factor from MAD to standard deviation for normal data.
const MAD_TO_STD_FACTOR: f64 = 1.4826;

/// Floor applied to a collapsed (zero) MAD before scaling.
const MIN_TUNED_SCALE: f64 = 1e-12;

/// Minimum interval width enforced by the degenerate-width guard.
const MIN_BAND_WIDTH: f64 = 1e-12;

// Acklam inverse-normal-CDF coefficients.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239e0,
];

const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838e0,
    -2.549_732_539_343_734e0,
    4.374_664_141_464_968e0,
    2.938_163_982_698_783e0,
];

const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996e0,
    3.754_408_661_907_416e0,
];

/// Region boundaries for the Acklam approximation.
const ACKLAM_P_LOW: f64 = 0.02425;
const ACKLAM_P_HIGH: f64 = 0.97575;

// ============================================================================
// Residual Dispersion
// ============================================================================

/// Robust residual standard deviation: `1.4826 × MAD(residuals)`.
///
/// `scratch` must have the same length as `residuals` and is overwritten.
/// A single residual uses its absolute value; a collapsed MAD floors at
/// `1e-12` before scaling, so the estimate is positive for any non-empty
/// input yet negligible for an exactly-constant fit.
pub fn residual_sd<T: Float>(residuals: &[T], scratch: &mut [T]) -> T {
    let factor = T::from(MAD_TO_STD_FACTOR).unwrap_or_else(T::one);

    if residuals.is_empty() {
        return T::zero();
    }

    if residuals.len() == 1 {
        return residuals[0].abs() * factor;
    }

    scratch.copy_from_slice(residuals);
    let mad = mad_inplace(scratch);

    if mad > T::zero() {
        mad * factor
    } else {
        T::from(MIN_TUNED_SCALE).unwrap_or_else(T::epsilon) * factor
    }
}

// ============================================================================
// Normal Quantile
// ============================================================================

/// Standard normal quantile for a two-sided tail probability.
///
/// Returns `z = Φ⁻¹(1 − tail/2)`. The common tails used in reporting get
/// their textbook constants; anything else goes through the Acklam
/// approximation (absolute error below 1.15e-9 over the open unit interval).
pub fn z_for_tail<T: Float>(tail: T) -> T {
    let tail_f = tail.to_f64().unwrap_or(f64::NAN);

    let z = if (tail_f - 0.10).abs() < 1e-6 {
        1.645
    } else if (tail_f - 0.05).abs() < 1e-6 {
        1.960
    } else if (tail_f - 0.01).abs() < 1e-6 {
        2.576
    } else {
        acklam_inverse_cdf(1.0 - tail_f / 2.0)
    };

    T::from(z).unwrap_or_else(T::zero)
}

/// Acklam's rational approximation of the inverse standard normal CDF.
fn acklam_inverse_cdf(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) || p == 0.0 || p == 1.0 {
        return f64::NAN;
    }

    if p < ACKLAM_P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((ACKLAM_C[0] * q + ACKLAM_C[1]) * q + ACKLAM_C[2]) * q + ACKLAM_C[3]) * q
            + ACKLAM_C[4])
            * q
            + ACKLAM_C[5])
            / ((((ACKLAM_D[0] * q + ACKLAM_D[1]) * q + ACKLAM_D[2]) * q + ACKLAM_D[3]) * q + 1.0)
    } else if p <= ACKLAM_P_HIGH {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((ACKLAM_A[0] * r + ACKLAM_A[1]) * r + ACKLAM_A[2]) * r + ACKLAM_A[3]) * r
            + ACKLAM_A[4])
            * r
            + ACKLAM_A[5])
            * q
            / (((((ACKLAM_B[0] * r + ACKLAM_B[1]) * r + ACKLAM_B[2]) * r + ACKLAM_B[3]) * r
                + ACKLAM_B[4])
                * r
                + 1.0)
    } else {
        // Upper tail
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((ACKLAM_C[0] * q + ACKLAM_C[1]) * q + ACKLAM_C[2]) * q + ACKLAM_C[3]) * q
            + ACKLAM_C[4])
            * q
            + ACKLAM_C[5])
            / ((((ACKLAM_D[0] * q + ACKLAM_D[1]) * q + ACKLAM_D[2]) * q + ACKLAM_D[3]) * q + 1.0)
    }
}

// ============================================================================
// Band Assembly
// ============================================================================

/// Build the symmetric band `trend ± z × residual_sd`.
///
/// Applies the degenerate-width guard: any interval whose width is
/// non-positive or non-finite is widened to `lower + 1e-12`.
pub fn compute_band<T: Float>(trend: &[T], residual_sd: T, z: T) -> (Vec<T>, Vec<T>) {
    let halfwidth = z * residual_sd;

    let mut lower = Vec::with_capacity(trend.len());
    let mut upper = Vec::with_capacity(trend.len());

    for &t in trend {
        lower.push(t - halfwidth);
        upper.push(t + halfwidth);
    }

    if residual_sd > T::zero() {
        let eps = T::from(MIN_BAND_WIDTH).unwrap_or_else(T::epsilon);
        for (l, u) in lower.iter().zip(upper.iter_mut()) {
            let width = *u - *l;
            if width <= T::zero() || !width.is_finite() {
                *u = *l + eps;
            }
        }
    }

    (lower, upper)
}
