//! Output types and result structures for trend smoothing.
//!
//! ## Purpose
//!
//! This module defines the `TrendbandResult` struct which encapsulates all
//! outputs from a smoothing run: the trend, the confidence band around it,
//! and optional per-point diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x`, `trend`, `lower`, and `upper` all have the same length.
//! * x-values are sorted in monotonically increasing order.
//! * `lower[i] <= upper[i]` for all points, with strict inequality whenever
//!   the residual scale is nonzero.
//! * Robustness weights are always in the range [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of a trend-with-band smoothing run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendbandResult<T> {
    /// Sorted x-values (independent variable).
    pub x: Vec<T>,

    /// Smoothed trend values (dependent variable).
    pub trend: Vec<T>,

    /// Lower bounds of the confidence band.
    pub lower: Vec<T>,

    /// Upper bounds of the confidence band.
    pub upper: Vec<T>,

    /// Robust residual scale (MAD-based standard deviation estimate).
    pub residual_sd: T,

    /// Residuals from the fit (y_i - trend_i).
    pub residuals: Option<Vec<T>>,

    /// Final robustness weights from the iterative refinement process.
    pub robustness_weights: Option<Vec<T>>,

    /// Number of robustness iterations actually performed.
    pub iterations_used: usize,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,

    /// Two-sided tail probability used for the band width.
    pub tail: T,
}

impl<T: Float> TrendbandResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of points in the result.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Band width (upper minus lower) at a given index.
    pub fn band_width(&self, idx: usize) -> T {
        self.upper[idx] - self.lower[idx]
    }

    /// Check whether an observation falls outside the band at a given index.
    pub fn is_outside(&self, idx: usize, observed: T) -> bool {
        observed < self.lower[idx] || observed > self.upper[idx]
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for TrendbandResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Fraction:    {}", self.fraction_used)?;
        writeln!(f, "  Iterations:  {}", self.iterations_used)?;
        writeln!(f, "  Tail:        {}", self.tail)?;
        writeln!(f, "  Residual SD: {}", self.residual_sd)?;
        writeln!(f)?;

        writeln!(f, "Trend Data:")?;

        // Determine which columns to show
        let has_resid = self.residuals.is_some();
        let has_weights = self.robustness_weights.is_some();

        // Build header
        write!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "X", "Trend", "Lower", "Upper"
        )?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        if has_weights {
            write!(f, " {:>10}", "Rob_Weight")?;
        }
        writeln!(f)?;

        // Separator line
        let line_width = 47
            + if has_resid { 13 } else { 0 }
            + if has_weights { 11 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
                self.x[idx], self.trend[idx], self.lower[idx], self.upper[idx]
            )?;

            if has_resid {
                if let Some(resid) = &self.residuals {
                    write!(f, " {:>12.6}", resid[idx])?;
                }
            }

            if has_weights {
                if let Some(weights) = &self.robustness_weights {
                    write!(f, " {:>10.4}", weights[idx])?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
