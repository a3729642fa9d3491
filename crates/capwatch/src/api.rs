//! High-level API for capacity-ratio outlier detection.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! [`Detector`] builder producing a reusable [`DetectorModel`], and the free
//! [`classify`]/[`summarize`] functions for one-shot runs. A classification
//! returns flags, bands, and diagnostics together so callers never lose
//! sight of what was skipped.
//!
//! ## Design notes
//!
//! * **Validated**: smoothing parameters are checked when `.build()` is
//!   called, by constructing the numeric core's model. Configuration errors
//!   fail fast; data problems surface as diagnostics at classify time.
//! * **Reusable**: `classify` borrows the model, so one model can process
//!   many record batches, including from multiple threads.
//! * **One-shot setters**: each builder parameter may be set once; a
//!   duplicate is reported at `build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Detector`] builder via `Detector::new()`.
//! 2. Chain configuration methods (`.grouping()`, `.fraction()`, etc.).
//! 3. Call `.build()` to validate parameters and obtain a [`DetectorModel`].
//! 4. Call `.classify(&records)` to run the pipeline.

use serde::{Deserialize, Serialize};

use trendband::prelude::{Trendband, TrendbandModel};

use crate::engine::aggregator::aggregate;
use crate::engine::executor::run_series;
use crate::engine::series::build_series;
use crate::primitives::diagnostics::Diagnostics;
use crate::primitives::records::{Grouping, OutlierFlag, RawRecord, SeriesKey, SmoothedBand};

// Publicly re-exported types
pub use crate::evaluation::reporter::{summarize, OutlierSummary};
pub use crate::primitives::errors::CapwatchError;

// ============================================================================
// Defaults
// ============================================================================

/// Default smoothing fraction.
pub const DEFAULT_FRACTION: f64 = 0.5;

/// Default number of robustness iterations.
pub const DEFAULT_ITERATIONS: usize = 1;

/// Default two-sided tail probability (0.1 gives a 90% band).
pub const DEFAULT_TAIL: f64 = 0.1;

/// Default minimum series length for smoothing.
pub const DEFAULT_MIN_POINTS: usize = 3;

// ============================================================================
// Configuration
// ============================================================================

/// Smoothing configuration for one-shot classification runs.
///
/// `Default` is the operating point the capacity dashboard runs with:
/// fraction 0.5, one robustness pass, a 90% band, no delta skipping, and a
/// three-point minimum per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothConfig {
    /// Smoothing fraction in (0, 1].
    pub fraction: f64,

    /// Robustness iterations (0 means initial fit only).
    pub iterations: usize,

    /// Two-sided tail probability in (0, 1). Lower tail, wider band.
    pub tail: f64,

    /// Optional delta-skipping threshold; `None` fits every date.
    pub delta: Option<f64>,

    /// Minimum points a series needs to be smoothed.
    pub min_points: usize,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_FRACTION,
            iterations: DEFAULT_ITERATIONS,
            tail: DEFAULT_TAIL,
            delta: None,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a detection run.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    /// Aggregation granularity.
    pub grouping: Option<Grouping>,

    /// Smoothing fraction in (0, 1].
    pub fraction: Option<f64>,

    /// Robustness iterations.
    pub iterations: Option<usize>,

    /// Two-sided tail probability for the band width.
    pub tail: Option<f64>,

    /// Delta-skipping threshold.
    pub delta: Option<f64>,

    /// Minimum points a series needs to be smoothed.
    pub min_points: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Detector {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the aggregation granularity (branch or branch/area).
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        if self.grouping.is_some() {
            self.duplicate_param = Some("grouping");
        }
        self.grouping = Some(grouping);
        self
    }

    /// Set the smoothing fraction (bandwidth).
    pub fn fraction(mut self, fraction: f64) -> Self {
        if self.fraction.is_some() {
            self.duplicate_param = Some("fraction");
        }
        self.fraction = Some(fraction);
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the two-sided tail probability (e.g. 0.1 for a 90% band).
    pub fn tail(mut self, tail: f64) -> Self {
        if self.tail.is_some() {
            self.duplicate_param = Some("tail");
        }
        self.tail = Some(tail);
        self
    }

    /// Set the delta parameter for interpolation-based skipping.
    pub fn delta(mut self, delta: f64) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Set the minimum points a series needs to be smoothed.
    pub fn min_points(mut self, points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(points);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<DetectorModel, CapwatchError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(CapwatchError::DuplicateParameter { parameter });
        }

        let grouping = self.grouping.unwrap_or_default();
        let fraction = self.fraction.unwrap_or(DEFAULT_FRACTION);
        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        let tail = self.tail.unwrap_or(DEFAULT_TAIL);
        let min_points = self.min_points.unwrap_or(DEFAULT_MIN_POINTS);

        // Parameter validation happens inside the numeric core's builder
        let mut smoother = Trendband::new()
            .fraction(fraction)
            .iterations(iterations)
            .tail(tail)
            .min_points(min_points);
        if let Some(delta) = self.delta {
            smoother = smoother.delta(delta);
        }
        let model = smoother.build()?;

        Ok(DetectorModel { grouping, model })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated, reusable detection model.
#[derive(Debug, Clone)]
pub struct DetectorModel {
    grouping: Grouping,
    model: TrendbandModel<f64>,
}

impl DetectorModel {
    /// Aggregation granularity this model was built with.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Smoothing fraction this model was built with.
    pub fn fraction(&self) -> f64 {
        self.model.fraction()
    }

    /// Number of robustness iterations this model was built with.
    pub fn iterations(&self) -> usize {
        self.model.iterations()
    }

    /// Two-sided tail probability this model was built with.
    pub fn tail(&self) -> f64 {
        self.model.tail()
    }

    /// Minimum points this model requires per series.
    pub fn min_points(&self) -> usize {
        self.model.min_points()
    }

    /// Run the full pipeline over a record batch.
    ///
    /// Aggregates, builds series, smooths, and classifies. An empty batch
    /// yields an empty classification. Data problems (degenerate groups,
    /// short series) land in the result's diagnostics; only contract
    /// breaches abort.
    pub fn classify(&self, records: &[RawRecord]) -> Result<Classification, CapwatchError> {
        let (points, dropped_groups) = aggregate(records, self.grouping);
        let series = build_series(&points);
        let run = run_series(&series, &self.model)?;

        Ok(Classification {
            flags: run.flags,
            bands: run.bands,
            diagnostics: Diagnostics {
                dropped_groups,
                skipped_series: run.skipped,
            },
        })
    }
}

// ============================================================================
// Classification Output
// ============================================================================

/// Complete output of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// One flag per classified observation, in series order.
    pub flags: Vec<OutlierFlag>,

    /// One band per fitted series, in series order.
    pub bands: Vec<SmoothedBand>,

    /// Groups and series the run set aside.
    pub diagnostics: Diagnostics,
}

impl Classification {
    /// The flagged subset of observations.
    pub fn flagged(&self) -> Vec<&OutlierFlag> {
        self.flags.iter().filter(|flag| flag.is_outlier).collect()
    }

    /// The band computed for `key`, if that series was fitted.
    pub fn band_for(&self, key: &SeriesKey) -> Option<&SmoothedBand> {
        self.bands.iter().find(|band| &band.key == key)
    }

    /// Summary counts over this run's flags.
    pub fn summary(&self) -> OutlierSummary {
        summarize(&self.flags)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// One-shot classification: build a model from `config` and run it.
pub fn classify(
    records: &[RawRecord],
    grouping: Grouping,
    config: &SmoothConfig,
) -> Result<Classification, CapwatchError> {
    let mut detector = Detector::new()
        .grouping(grouping)
        .fraction(config.fraction)
        .iterations(config.iterations)
        .tail(config.tail)
        .min_points(config.min_points);
    if let Some(delta) = config.delta {
        detector = detector.delta(delta);
    }

    detector.build()?.classify(records)
}
