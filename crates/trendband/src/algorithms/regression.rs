//! Local weighted regression.
//!
//! ## Purpose
//!
//! This module provides the data types and logic for the local linear fits,
//! including:
//! - Context for managing per-point fit state.
//! - Scalar accumulation and solving for weighted least squares (WLS).
//! - The `LinearFit` result used for both local and global fits.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::weights::compute_window_weights;
use crate::primitives::window::Window;

// ============================================================================
// Weight Parameters
// ============================================================================

/// Parameters for weight computation.
pub struct WeightParams<T: Float> {
    /// Current x-value being fitted
    pub x_current: T,

    /// Window radius - defines the scale of the local fit
    pub window_radius: T,

    /// Near-threshold: points closer than this get weight 1.0.
    pub h1: T,

    /// Far-threshold: points farther than this get weight 0.0.
    pub h9: T,
}

impl<T: Float> WeightParams<T> {
    /// Construct WeightParams with validated window radius.
    pub fn new(x_current: T, window_radius: T) -> Self {
        debug_assert!(
            window_radius > T::zero(),
            "WeightParams::new: window_radius must be positive"
        );

        let radius = if window_radius > T::zero() {
            window_radius
        } else {
            T::from(1e-12).unwrap_or_else(T::epsilon)
        };

        let h1 = T::from(0.001).unwrap_or_else(T::zero) * radius;
        let h9 = T::from(0.999).unwrap_or_else(T::one) * radius;

        Self {
            x_current,
            window_radius: radius,
            h1,
            h9,
        }
    }
}

// ============================================================================
// Accumulation and Solving
// ============================================================================

/// Single-pass accumulation of the weighted sums for a 1D WLS fit.
#[inline]
pub fn accumulate_wls<T: Float>(x: &[T], y: &[T], weights: &[T]) -> (T, T, T, T, T) {
    let n = x.len();
    if n == 0 {
        return (T::zero(), T::zero(), T::zero(), T::zero(), T::zero());
    }

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for i in 0..n {
        let w = weights[i];
        let x_val = x[i];
        let y_val = y[i];

        let wx = w * x_val;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y_val;
        sum_wxx = sum_wxx + wx * x_val;
        sum_wxy = sum_wxy + wx * y_val;
    }

    (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)
}

/// Solve the accumulated 1D weighted least squares system.
///
/// Returns `(slope, intercept, x_mean, y_mean)`, degrading to a horizontal
/// line through the weighted mean when the weighted x-variance is within
/// tolerance of zero.
#[inline]
pub fn solve_wls<T: Float>(
    sum_w: T,
    sum_wx: T,
    sum_wy: T,
    sum_wxx: T,
    sum_wxy: T,
    tol: T,
) -> Option<(T, T, T, T)> {
    if sum_w <= T::zero() {
        return None;
    }

    let x_mean = sum_wx / sum_w;
    let y_mean = sum_wy / sum_w;
    let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

    if variance <= tol {
        return Some((T::zero(), y_mean, x_mean, y_mean));
    }

    let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;

    Some((slope, intercept, x_mean, y_mean))
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Weighted mean of x-values
    pub x_mean: T,

    /// Weighted mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Create a zero-initialized fit.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            x_mean: T::zero(),
            y_mean: T::zero(),
        }
    }

    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit Ordinary Least Squares (OLS) regression.
    pub fn fit_ols(x: &[T], y: &[T]) -> Self {
        let n = x.len();
        if n == 0 {
            return Self::zero();
        }

        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();

        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();

        for i in 0..n {
            let dx = x[i] - x_mean;
            let dy = y[i] - y_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * dy;
        }

        let tol = T::from(1e-12).unwrap_or_else(T::epsilon);
        if variance <= tol {
            return Self {
                slope: T::zero(),
                intercept: y_mean,
                x_mean,
                y_mean,
            };
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        }
    }

    /// Fit Weighted Least Squares (WLS) regression over a window.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], window_radius: T) -> Self {
        let n = x.len();
        if n == 0 {
            return Self::zero();
        }

        let (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy) = accumulate_wls(x, y, weights);

        // Numerical stability tolerance
        let abs_tol = T::from(1e-7).unwrap_or_else(T::epsilon);
        let rel_tol = T::epsilon() * window_radius * window_radius;
        let tol = abs_tol.max(rel_tol);

        match solve_wls(sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy, tol) {
            Some((slope, intercept, x_mean, y_mean)) => Self {
                slope,
                intercept,
                x_mean,
                y_mean,
            },
            None => Self::zero(),
        }
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit a single point.
pub struct RegressionContext<'a, T: Float> {
    /// Slice of x-values (independent variable)
    pub x: &'a [T],

    /// Slice of y-values (dependent variable)
    pub y: &'a [T],

    /// Index of the point to fit
    pub idx: usize,

    /// Window for the local fit (defines neighborhood)
    pub window: Window,

    /// Whether to use robustness weights
    pub use_robustness: bool,

    /// Slice of robustness weights (all 1.0 if not using robustness)
    pub robustness_weights: &'a [T],

    /// Mutable slice of weights to be used in fitting
    pub weights: &'a mut [T],
}

impl<'a, T: Float> RegressionContext<'a, T> {
    /// Perform the local linear fit using the context configuration.
    ///
    /// This orchestrates the kernel weight calculation, robustness
    /// application, and final weighted least squares solver. All-zero weight
    /// windows fall back to the robustness-weighted local mean.
    pub fn fit(&mut self) -> Option<T> {
        let n = self.x.len();

        if self.idx >= n || self.window.left >= n || self.window.right >= n {
            return None;
        }

        let x_current = self.x[self.idx];
        let window_radius = self.window.max_distance(self.x, x_current);

        // Zero radius: every window point shares one x, so fit the weighted mean
        if window_radius <= T::zero() {
            let mut sum_w = T::zero();
            let mut sum_wy = T::zero();
            let mut j = self.window.left;
            while j <= self.window.right {
                let w = if self.use_robustness {
                    self.robustness_weights[j]
                } else {
                    T::one()
                };
                sum_w = sum_w + w;
                sum_wy = sum_wy + w * self.y[j];
                j += 1;
            }

            if sum_w > T::zero() {
                return Some(sum_wy / sum_w);
            }
            return Some(self.local_mean());
        }

        let weight_params = WeightParams::new(x_current, window_radius);

        let (mut weight_sum, rightmost_idx) = compute_window_weights(
            self.x,
            self.window.left,
            self.window.right,
            weight_params.x_current,
            weight_params.window_radius,
            weight_params.h1,
            weight_params.h9,
            self.weights,
        );

        if self.use_robustness {
            weight_sum = T::zero();
            let mut j = self.window.left;
            while j <= rightmost_idx {
                let w_k = self.weights[j];
                if w_k > T::zero() {
                    let w_robust = self.robustness_weights[j];
                    let w_final = w_k * w_robust;
                    self.weights[j] = w_final;
                    weight_sum = weight_sum + w_final;
                }
                j += 1;
            }
        }

        if weight_sum <= T::zero() {
            return Some(self.local_mean());
        }

        let window_x = &self.x[self.window.left..=rightmost_idx];
        let window_y = &self.y[self.window.left..=rightmost_idx];
        let window_weights = &self.weights[self.window.left..=rightmost_idx];

        let model = LinearFit::fit_wls(window_x, window_y, window_weights, window_radius);
        Some(model.predict(x_current))
    }

    /// Unweighted mean of the window's y-values.
    fn local_mean(&self) -> T {
        let window_size = self.window.len();
        self.y[self.window.left..=self.window.right]
            .iter()
            .copied()
            .fold(T::zero(), |acc, v| acc + v)
            / T::from(window_size).unwrap_or_else(T::one)
    }
}
