//! Partitioning of aggregated points into ordered series.
//!
//! ## Purpose
//!
//! This module groups aggregated points by series key and shapes each group
//! into the form the smoother requires: sorted by date ascending, with one
//! point per date. Duplicate dates (duplicate raw ingestion) collapse via
//! the arithmetic mean.
//!
//! ## Invariants
//!
//! * Output series are sorted by key; points within a series are strictly
//!   increasing by date.
//! * Building series never drops a key: length checks happen later so short
//!   series can be reported, not silently lost.
//!
//! ## Non-goals
//!
//! * This module does not enforce minimum series length (the executor
//!   reports short series as diagnostics).
//! * This module does not smooth or classify.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::primitives::records::{AggregatedPoint, BranchSeries, SeriesKey};

/// Group aggregated points into one ordered series per key.
pub fn build_series(points: &[AggregatedPoint]) -> Vec<BranchSeries> {
    let mut grouped: BTreeMap<SeriesKey, Vec<(NaiveDate, f64)>> = BTreeMap::new();

    for point in points {
        grouped
            .entry(point.key.clone())
            .or_default()
            .push((point.date, point.capacity_ratio));
    }

    grouped
        .into_iter()
        .map(|(key, mut raw)| BranchSeries {
            key,
            points: {
                raw.sort_by_key(|&(date, _)| date);
                collapse_duplicate_dates(raw)
            },
        })
        .collect()
}

/// Replace runs of equal dates with a single mean point.
///
/// Input must be sorted by date.
fn collapse_duplicate_dates(sorted: Vec<(NaiveDate, f64)>) -> Vec<(NaiveDate, f64)> {
    let mut collapsed: Vec<(NaiveDate, f64)> = Vec::with_capacity(sorted.len());
    let mut i = 0;

    while i < sorted.len() {
        let date = sorted[i].0;
        let mut sum = 0.0;
        let mut count = 0usize;

        while i < sorted.len() && sorted[i].0 == date {
            sum += sorted[i].1;
            count += 1;
            i += 1;
        }

        collapsed.push((date, sum / count as f64));
    }

    collapsed
}
