//! # Trendband — Robust local-regression trends with confidence bands
//!
//! A robust LOWESS (Locally Weighted Scatterplot Smoothing) engine that pairs
//! every smoothed trend with a confidence band derived from a robust estimate
//! of the residual scale.
//!
//! ## What does it compute?
//!
//! At each point the engine fits a weighted linear regression over a sliding
//! neighborhood, with tricube weights that decay smoothly with distance.
//! Iterative bisquare reweighting pulls the fit away from outliers. The
//! residuals of the final pass yield a MAD-based standard deviation, which is
//! scaled by a normal quantile to form a symmetric band around the trend:
//!
//! ```text
//! lower_i = trend_i - z * sd      upper_i = trend_i + z * sd
//! ```
//!
//! Observations outside the band are candidate outliers. Because the scale
//! estimate is robust, a handful of wild points widens the band far less than
//! a classical standard deviation would.
//!
//! ## Quick Start
//!
//! ```rust
//! use trendband::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 30.0, 11.8, 14.1];
//!
//! // Build the model
//! let model = Trendband::new()
//!     .fraction(0.5)      // Use 50% of data for each local fit
//!     .iterations(2)      // 2 robustness iterations
//!     .tail(0.05)         // 95% band
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! assert_eq!(result.trend.len(), x.len());
//! assert!(result
//!     .lower
//!     .iter()
//!     .zip(result.upper.iter())
//!     .all(|(lo, hi)| lo < hi));
//!
//! // The wild point at x = 4 sits far above the band
//! assert!(result.is_outside(4, y[4]));
//! # Result::<(), TrendbandError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` method returns a `Result<TrendbandResult<T>, TrendbandError>`.
//!
//! - **`Ok(TrendbandResult<T>)`**: Contains the trend, the band, and metadata.
//! - **`Err(TrendbandError)`**: Indicates a failure (e.g., mismatched input
//!   lengths, unsorted x-values, insufficient data).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use trendband::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! # let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! let model = Trendband::new().build()?;
//!
//! let result = model.fit(&x, &y)?;
//! // or to be more explicit:
//! // let result: TrendbandResult<f64> = model.fit(&x, &y)?;
//! # Result::<(), TrendbandError>::Ok(())
//! ```
//!
//! A built model borrows itself during `fit`, so one model can smooth many
//! independent series, including from multiple threads:
//!
//! ```rust
//! use trendband::prelude::*;
//!
//! let model = Trendband::new().fraction(0.5).iterations(1).build()?;
//!
//! let series = vec![
//!     (vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0]),
//!     (vec![0.0, 1.0, 2.0, 3.0], vec![4.0, 3.0, 2.0, 1.0]),
//! ];
//!
//! for (x, y) in &series {
//!     let result = model.fit(x, y)?;
//!     assert_eq!(result.len(), 4);
//! }
//! # Result::<(), TrendbandError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! trendband = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep datasets small (< 1000 points)
//! - Use fewer iterations (1-2) to reduce computation time
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Acklam, P. J. "An algorithm for computing the inverse normal cumulative distribution function"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core smoothing algorithms.
mod algorithms;

// Layer 4: Evaluation - residual scale and band construction.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: API - high-level fluent interface.
mod api;

// Standard trendband prelude.
pub mod prelude {
    pub use crate::api::{
        Trendband, TrendbandError, TrendbandModel, TrendbandResult, DEFAULT_FRACTION,
        DEFAULT_ITERATIONS, DEFAULT_MIN_POINTS, DEFAULT_TAIL,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
