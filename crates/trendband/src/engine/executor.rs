//! Execution engine for trend smoothing.
//!
//! ## Purpose
//!
//! This module provides the execution engine that orchestrates a smoothing
//! run. It owns the iteration loop, robustness weight updates, convergence
//! checking, and the per-pass fitting walk with delta interpolation.
//!
//! ## Design notes
//!
//! * Working buffers are allocated once per run and reused across passes.
//! * A run is strictly sequential; callers parallelize across independent
//!   series, not within one.
//! * Delta optimization fits anchor points and interpolates between them.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input x-values are monotonically increasing (validated by the caller).
//! * All working buffers have the same length as input data.
//! * Robustness weights are always in [0, 1].
//! * Window size is at least 2 and at most n.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (caller's responsibility).
//! * This module does not build the confidence band (handled by `evaluation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::swap;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_gap;
use crate::algorithms::regression::{LinearFit, RegressionContext};
use crate::algorithms::robustness::update_weights;
use crate::primitives::window::Window;

// ============================================================================
// Output
// ============================================================================

/// Output from a smoothing run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Smoothed trend values, aligned with the input.
    pub trend: Vec<T>,

    /// Number of robustness passes actually performed.
    pub iterations_performed: usize,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,

    /// Final robustness weights from iterative refinement.
    pub robustness_weights: Vec<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Executor for robust local-regression smoothing.
#[derive(Debug, Clone)]
pub struct TrendExecutor<T: Float> {
    /// Smoothing fraction (0, 1].
    pub fraction: T,

    /// Number of robustness iterations (0 means initial fit only).
    pub iterations: usize,

    /// Delta for interpolation optimization (0 fits every point).
    pub delta: T,

    /// Convergence tolerance for early stopping of robustness iterations.
    pub tolerance: Option<T>,
}

impl<T: Float> Default for TrendExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TrendExecutor<T> {
    // ========================================================================
    // Constructor and Setters
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            fraction: T::from(0.67).unwrap_or_else(T::one),
            iterations: 3,
            delta: T::zero(),
            tolerance: None,
        }
    }

    /// Set the smoothing fraction (bandwidth).
    pub fn fraction(mut self, frac: T) -> Self {
        self.fraction = frac;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, niter: usize) -> Self {
        self.iterations = niter;
        self
    }

    /// Set the delta parameter for interpolation optimization.
    pub fn delta(mut self, delta: T) -> Self {
        self.delta = delta;
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: Option<T>) -> Self {
        self.tolerance = tolerance;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Execute the smoothing run.
    ///
    /// # Special Cases
    ///
    /// * **Global regression** (fraction >= 1.0): a single OLS line over the
    ///   whole series, no robustness passes.
    pub fn run(&self, x: &[T], y: &[T]) -> ExecutorOutput<T> {
        let n = x.len();

        // Global regression short-circuit
        if self.fraction >= T::one() {
            let model = LinearFit::fit_ols(x, y);
            let trend = x.iter().map(|&xi| model.predict(xi)).collect();
            return ExecutorOutput {
                trend,
                iterations_performed: 0,
                fraction_used: self.fraction,
                robustness_weights: vec![T::one(); n],
            };
        }

        let window_size = Window::calculate_span(n, self.fraction);
        self.iteration_loop(x, y, window_size)
    }

    /// Perform the full iteration loop with robustness updates.
    fn iteration_loop(&self, x: &[T], y: &[T], window_size: usize) -> ExecutorOutput<T> {
        let n = x.len();

        let mut y_smooth = y.to_vec();
        let mut y_prev = vec![T::zero(); n];
        let mut robustness_weights = vec![T::one(); n];
        let mut residuals = vec![T::zero(); n];
        let mut scratch = vec![T::zero(); n];
        let mut weights = vec![T::zero(); n];

        let mut iterations_performed = 0;

        for iter in 0..=self.iterations {
            iterations_performed = iter;

            // Save previous state for the convergence check
            if self.tolerance.is_some() && iter > 0 {
                swap(&mut y_smooth, &mut y_prev);
            }

            Self::smooth_pass(
                x,
                y,
                window_size,
                self.delta,
                iter > 0, // use_robustness
                &robustness_weights,
                &mut y_smooth,
                &mut weights,
            );

            // Check convergence (skip on the initial fit)
            if let Some(tol) = self.tolerance {
                if iter > 0 && Self::check_convergence(&y_smooth, &y_prev, tol) {
                    break;
                }
            }

            // Update robustness weights for the next pass (skip after the last)
            if iter < self.iterations {
                update_weights(
                    y,
                    &y_smooth,
                    &mut residuals,
                    &mut scratch,
                    &mut robustness_weights,
                );
            }
        }

        ExecutorOutput {
            trend: y_smooth,
            iterations_performed,
            fraction_used: self.fraction,
            robustness_weights,
        }
    }

    // ========================================================================
    // Smoothing Pass
    // ========================================================================

    /// Perform a single smoothing pass over all points.
    #[allow(clippy::too_many_arguments)]
    pub fn smooth_pass(
        x: &[T],
        y: &[T],
        window_size: usize,
        delta: T,
        use_robustness: bool,
        robustness_weights: &[T],
        y_smooth: &mut [T],
        weights: &mut [T],
    ) {
        // Fit the first point and seed the walking window
        let window = Self::fit_first_point(
            x,
            y,
            window_size,
            use_robustness,
            robustness_weights,
            weights,
            y_smooth,
        );

        // Fit remaining points with delta-skipping and interpolation
        Self::fit_and_interpolate_remaining(
            x,
            y,
            delta,
            use_robustness,
            robustness_weights,
            weights,
            y_smooth,
            window,
        );
    }

    /// Fit a single point, returning its value and the recentered window.
    #[allow(clippy::too_many_arguments)]
    fn fit_single_point(
        x: &[T],
        y: &[T],
        idx: usize,
        window_size: usize,
        use_robustness: bool,
        robustness_weights: &[T],
        weights: &mut [T],
    ) -> (T, Window) {
        let n = x.len();
        let mut window = Window::initialize(idx, window_size, n);
        window.recenter(x, idx, n);

        let mut ctx = RegressionContext {
            x,
            y,
            idx,
            window,
            use_robustness,
            robustness_weights,
            weights,
        };

        (ctx.fit().unwrap_or_else(|| y[idx]), window)
    }

    /// Fit the first point and initialize the smoothing window.
    #[allow(clippy::too_many_arguments)]
    fn fit_first_point(
        x: &[T],
        y: &[T],
        window_size: usize,
        use_robustness: bool,
        robustness_weights: &[T],
        weights: &mut [T],
        y_smooth: &mut [T],
    ) -> Window {
        let (val, window) = Self::fit_single_point(
            x,
            y,
            0,
            window_size,
            use_robustness,
            robustness_weights,
            weights,
        );
        y_smooth[0] = val;
        window
    }

    /// Main fitting loop: iterate through remaining points with delta-skipping
    /// and linear interpolation. `partition_point` finds the next anchor in
    /// O(log n) per step.
    #[allow(clippy::too_many_arguments)]
    fn fit_and_interpolate_remaining(
        x: &[T],
        y: &[T],
        delta: T,
        use_robustness: bool,
        robustness_weights: &[T],
        weights: &mut [T],
        y_smooth: &mut [T],
        mut window: Window,
    ) {
        let n = x.len();
        let mut last_fitted = 0usize;

        while last_fitted < n - 1 {
            let cutpoint = x[last_fitted] + delta;

            // First index where x exceeds the cutpoint
            let next_idx =
                x[last_fitted + 1..].partition_point(|&xi| xi <= cutpoint) + last_fitted + 1;

            // Tied x-values share the fitted value of their anchor
            let mut tie_end = last_fitted;
            let x_last = x[last_fitted];
            for i in (last_fitted + 1)..next_idx.min(n) {
                if x[i] == x_last {
                    y_smooth[i] = y_smooth[last_fitted];
                    tie_end = i;
                } else {
                    break; // x is sorted, so no more ties
                }
            }
            if tie_end > last_fitted {
                last_fitted = tie_end;
            }

            // Next anchor: last point within delta range, at minimum one step ahead
            let current = usize::max(next_idx.saturating_sub(1), last_fitted + 1).min(n - 1);

            if current <= last_fitted {
                break;
            }

            window.recenter(x, current, n);

            let mut ctx = RegressionContext {
                x,
                y,
                idx: current,
                window,
                use_robustness,
                robustness_weights,
                weights,
            };

            y_smooth[current] = ctx.fit().unwrap_or_else(|| y[current]);

            interpolate_gap(x, y_smooth, last_fitted, current);
            last_fitted = current;
        }

        // Fit the last point explicitly if the walk stopped short
        if last_fitted < n.saturating_sub(1) {
            let final_idx = n - 1;
            window.recenter(x, final_idx, n);

            let mut ctx = RegressionContext {
                x,
                y,
                idx: final_idx,
                window,
                use_robustness,
                robustness_weights,
                weights,
            };

            y_smooth[final_idx] = ctx.fit().unwrap_or_else(|| y[final_idx]);
            interpolate_gap(x, y_smooth, last_fitted, final_idx);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Check convergence between current and previous smoothed values.
    pub fn check_convergence(y_smooth: &[T], y_prev: &[T], tolerance: T) -> bool {
        let max_change = y_smooth
            .iter()
            .zip(y_prev.iter())
            .fold(T::zero(), |maxv, (&current, &previous)| {
                T::max(maxv, (current - previous).abs())
            });

        max_change <= tolerance
    }
}
