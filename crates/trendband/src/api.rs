//! High-level API for trend smoothing with confidence bands.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring smoothing
//! parameters, and a reusable model that fits one series at a time.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Reusable**: `fit` borrows the model, so one model can smooth many
//!   independent series (including from multiple threads).
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Trendband`] builder via `Trendband::new()`.
//! 2. Chain configuration methods (`.fraction()`, `.iterations()`, etc.).
//! 3. Call `.build()` to validate parameters and obtain a [`TrendbandModel`].
//! 4. Call `.fit(&x, &y)` to smooth a series.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::TrendExecutor;
use crate::engine::validator::Validator;
use crate::evaluation::band::{compute_band, residual_sd, z_for_tail};

// Publicly re-exported types
pub use crate::engine::output::TrendbandResult;
pub use crate::primitives::errors::TrendbandError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring trend smoothing parameters.
#[derive(Debug, Clone)]
pub struct Trendband<T> {
    /// Smoothing fraction (0..1].
    pub fraction: Option<T>,

    /// Robustness iterations.
    pub iterations: Option<usize>,

    /// Threshold for skipping fitting (delta-optimization).
    pub delta: Option<T>,

    /// Two-sided tail probability for the band width.
    pub tail: Option<T>,

    /// Convergence tolerance for early stopping.
    pub tolerance: Option<T>,

    /// Minimum points required for a valid fit.
    pub min_points: Option<usize>,

    /// Return residuals r_i in the result.
    pub return_residuals: Option<bool>,

    /// Return final robustness weights w_i in the result.
    pub return_robustness_weights: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Trendband<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Trendband<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fraction: None,
            iterations: None,
            delta: None,
            tail: None,
            tolerance: None,
            min_points: None,
            return_residuals: None,
            return_robustness_weights: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing fraction (bandwidth alpha).
    pub fn fraction(mut self, fraction: T) -> Self {
        if self.fraction.is_some() {
            self.duplicate_param = Some("fraction");
        }
        self.fraction = Some(fraction);
        self
    }

    /// Set the number of robustness iterations (typically 0-4).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the delta parameter for interpolation-based optimization.
    pub fn delta(mut self, delta: T) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Set the two-sided tail probability for the band (e.g., 0.05 for 95%).
    pub fn tail(mut self, tail: T) -> Self {
        if self.tail.is_some() {
            self.duplicate_param = Some("tail");
        }
        self.tail = Some(tail);
        self
    }

    /// Enable automatic convergence detection based on maximum change.
    pub fn auto_converge(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("auto_converge");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the minimum points required for a valid fit.
    pub fn min_points(mut self, points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(points);
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include final robustness weights in the result.
    pub fn return_robustness_weights(mut self) -> Self {
        self.return_robustness_weights = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<TrendbandModel<T>, TrendbandError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let fraction = self.fraction.unwrap_or_else(|| {
            T::from(DEFAULT_FRACTION).unwrap_or_else(T::one)
        });
        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        let delta = self.delta.unwrap_or_else(T::zero);
        let tail = self.tail.unwrap_or_else(|| {
            T::from(DEFAULT_TAIL).unwrap_or_else(T::zero)
        });
        let min_points = self.min_points.unwrap_or(DEFAULT_MIN_POINTS);

        Validator::validate_fraction(fraction)?;
        Validator::validate_iterations(iterations)?;
        Validator::validate_delta(delta)?;
        Validator::validate_tail(tail)?;
        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
        }
        Validator::validate_min_points(min_points)?;

        Ok(TrendbandModel {
            fraction,
            iterations,
            delta,
            tail,
            tolerance: self.tolerance,
            min_points,
            return_residuals: self.return_residuals.unwrap_or(false),
            return_robustness_weights: self.return_robustness_weights.unwrap_or(false),
        })
    }
}

/// Default smoothing fraction.
pub const DEFAULT_FRACTION: f64 = 0.67;

/// Default number of robustness iterations.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Default two-sided tail probability.
pub const DEFAULT_TAIL: f64 = 0.05;

/// Default minimum points required for a valid fit.
pub const DEFAULT_MIN_POINTS: usize = 2;

// ============================================================================
// Model
// ============================================================================

/// Validated, reusable trend smoothing model.
#[derive(Debug, Clone)]
pub struct TrendbandModel<T> {
    fraction: T,
    iterations: usize,
    delta: T,
    tail: T,
    tolerance: Option<T>,
    min_points: usize,
    return_residuals: bool,
    return_robustness_weights: bool,
}

impl<T: Float> TrendbandModel<T> {
    /// Smoothing fraction this model was built with.
    pub fn fraction(&self) -> T {
        self.fraction
    }

    /// Number of robustness iterations this model was built with.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Two-sided tail probability this model was built with.
    pub fn tail(&self) -> T {
        self.tail
    }

    /// Minimum points this model requires for a fit.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Smooth a series and construct its confidence band.
    ///
    /// Input x-values must be sorted in increasing order; y-values are
    /// aligned with x. Returns an error for empty, mismatched, non-finite,
    /// unsorted, or too-short inputs.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<TrendbandResult<T>, TrendbandError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_series_length(x.len(), self.min_points)?;

        let executor = TrendExecutor::new()
            .fraction(self.fraction)
            .iterations(self.iterations)
            .delta(self.delta)
            .tolerance(self.tolerance);

        let output = executor.run(x, y);

        // Residuals drive the band width, so they are always computed
        let residuals: Vec<T> = y
            .iter()
            .zip(output.trend.iter())
            .map(|(&yi, &ti)| yi - ti)
            .collect();

        let mut scratch = residuals.clone();
        let sd = residual_sd(&residuals, &mut scratch);
        let z = z_for_tail(self.tail);
        let (lower, upper) = compute_band(&output.trend, sd, z);

        Ok(TrendbandResult {
            x: x.to_vec(),
            trend: output.trend,
            lower,
            upper,
            residual_sd: sd,
            residuals: self.return_residuals.then_some(residuals),
            robustness_weights: self
                .return_robustness_weights
                .then_some(output.robustness_weights),
            iterations_used: output.iterations_performed,
            fraction_used: output.fraction_used,
            tail: self.tail,
        })
    }
}
