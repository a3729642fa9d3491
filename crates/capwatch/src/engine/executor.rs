//! Per-series smoothing and classification, parallel across series.
//!
//! ## Purpose
//!
//! This module drives the numeric core over a collection of independent
//! series: each series is smoothed, wrapped in its confidence band, and
//! classified point by point. Series with too few points are reported as
//! diagnostics instead of being fitted.
//!
//! ## Design notes
//!
//! * **Parallel across series**: with the `parallel` feature (default), a
//!   rayon indexed map processes series concurrently; collection preserves
//!   input order, so output is identical to the sequential path regardless
//!   of worker count. Disabling the feature compiles the same loop over a
//!   plain iterator.
//! * **Pure per-series work**: each series computes its own band and flags
//!   with no shared mutable state; the only merge is the ordered fold at
//!   the end.
//! * **Partial failure**: a short series becomes an `InsufficientData`
//!   entry and the remaining series proceed. Only contract breaches (e.g.
//!   non-finite ratios reaching the core) abort the run.
//!
//! ## Invariants
//!
//! * Band entries and flags align index-for-index with the series dates.
//! * A skipped series appears in diagnostics and nowhere else.
//! * Output order equals input series order.
//!
//! ## Non-goals
//!
//! * This module does not aggregate records or build series.
//! * This module does not summarize flags (handled by `reporter`).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use trendband::prelude::TrendbandModel;

use crate::evaluation::classifier::is_outlier;
use crate::primitives::diagnostics::InsufficientData;
use crate::primitives::errors::CapwatchError;
use crate::primitives::records::{BandPoint, BranchSeries, OutlierFlag, SmoothedBand};

// ============================================================================
// Output
// ============================================================================

/// Merged output of a run over many series.
#[derive(Debug, Clone)]
pub struct SeriesRun {
    /// One band per fitted series, in series order.
    pub bands: Vec<SmoothedBand>,

    /// Flags for every classified observation, grouped by series in order.
    pub flags: Vec<OutlierFlag>,

    /// Series skipped for insufficient data.
    pub skipped: Vec<InsufficientData>,
}

/// Result of processing a single series.
enum Outcome {
    Fitted {
        band: SmoothedBand,
        flags: Vec<OutlierFlag>,
    },
    Skipped(InsufficientData),
}

// ============================================================================
// Execution
// ============================================================================

/// Smooth and classify every series, merging results in series order.
pub fn run_series(
    series: &[BranchSeries],
    model: &TrendbandModel<f64>,
) -> Result<SeriesRun, CapwatchError> {
    #[cfg(feature = "parallel")]
    let outcomes = series
        .par_iter()
        .map(|s| process_series(s, model))
        .collect::<Result<Vec<Outcome>, CapwatchError>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes = series
        .iter()
        .map(|s| process_series(s, model))
        .collect::<Result<Vec<Outcome>, CapwatchError>>()?;

    let mut run = SeriesRun {
        bands: Vec::new(),
        flags: Vec::new(),
        skipped: Vec::new(),
    };

    for outcome in outcomes {
        match outcome {
            Outcome::Fitted { band, flags } => {
                run.bands.push(band);
                run.flags.extend(flags);
            }
            Outcome::Skipped(diagnostic) => run.skipped.push(diagnostic),
        }
    }

    Ok(run)
}

/// Smooth one series and classify each of its points.
fn process_series(
    series: &BranchSeries,
    model: &TrendbandModel<f64>,
) -> Result<Outcome, CapwatchError> {
    let need = model.min_points();
    if series.len() < need {
        return Ok(Outcome::Skipped(InsufficientData {
            key: series.key.clone(),
            got: series.len(),
            need,
        }));
    }

    let (x, y) = series.to_xy();
    let fit = model.fit(&x, &y)?;

    let mut band_points = Vec::with_capacity(series.len());
    let mut flags = Vec::with_capacity(series.len());

    for (i, &(date, observed)) in series.points.iter().enumerate() {
        let entry = BandPoint {
            date,
            trend: fit.trend[i],
            lower: fit.lower[i],
            upper: fit.upper[i],
        };

        flags.push(OutlierFlag {
            key: series.key.clone(),
            date,
            observed,
            is_outlier: is_outlier(observed, &entry),
        });
        band_points.push(entry);
    }

    Ok(Outcome::Fitted {
        band: SmoothedBand {
            key: series.key.clone(),
            points: band_points,
        },
        flags,
    })
}
