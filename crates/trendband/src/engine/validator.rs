//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for smoothing parameters
//! and input series. It checks requirements such as input lengths, finite
//! values, ordering, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like fraction in (0, 1].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Ordering**: x-values must arrive sorted; this crate never reorders data.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TrendbandError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
///
/// Provides static methods for validating parameters and input series. All
/// methods return `Result<(), TrendbandError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for smoothing.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), TrendbandError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(TrendbandError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(TrendbandError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient points for linear regression
        if n < 2 {
            return Err(TrendbandError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite and x non-decreasing (single pass)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(TrendbandError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(TrendbandError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if i > 0 && x[i] < x[i - 1] {
                return Err(TrendbandError::UnsortedInput { index: i });
            }
        }

        Ok(())
    }

    /// Validate the minimum series length against the configured threshold.
    pub fn validate_series_length(n: usize, min_points: usize) -> Result<(), TrendbandError> {
        if n < min_points {
            return Err(TrendbandError::TooFewPoints {
                got: n,
                min: min_points,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing fraction (bandwidth) parameter.
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), TrendbandError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction > T::one() {
            return Err(TrendbandError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of robustness iterations.
    ///
    /// # Notes
    ///
    /// * 0 iterations means initial fit only (no robustness).
    /// * Maximum of 1000 iterations to prevent excessive computation.
    pub fn validate_iterations(iterations: usize) -> Result<(), TrendbandError> {
        const MAX_ITERATIONS: usize = 1000;
        if iterations > MAX_ITERATIONS {
            return Err(TrendbandError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the band tail probability.
    pub fn validate_tail<T: Float>(tail: T) -> Result<(), TrendbandError> {
        if !tail.is_finite() || tail <= T::zero() || tail >= T::one() {
            return Err(TrendbandError::InvalidTail(
                tail.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), TrendbandError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(TrendbandError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the delta optimization parameter.
    pub fn validate_delta<T: Float>(delta: T) -> Result<(), TrendbandError> {
        if !delta.is_finite() || delta < T::zero() {
            return Err(TrendbandError::InvalidDelta(
                delta.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the minimum points threshold.
    pub fn validate_min_points(min_points: usize) -> Result<(), TrendbandError> {
        if min_points < 2 {
            return Err(TrendbandError::InvalidMinPoints { got: min_points });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TrendbandError> {
        if let Some(param) = duplicate_param {
            return Err(TrendbandError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
