//! Core data types for the capacity-ratio pipeline.
//!
//! ## Purpose
//!
//! This module defines the record types that flow through the pipeline:
//! raw per-location inputs, aggregated per-day ratios, ordered series,
//! smoothed bands, and outlier flags. Every stage consumes the previous
//! stage's type and produces the next; nothing here carries behavior beyond
//! small accessors.
//!
//! ## Design notes
//!
//! * **Typed keys**: series identity is a [`SeriesKey`] (branch plus optional
//!   area), never a formatted string, so grouping and joins are explicit.
//! * **Ordered**: `SeriesKey` is `Ord`, which keeps grouped output in a
//!   deterministic order independent of input order or thread count.
//! * **Boundary-friendly**: all types derive `Serialize`/`Deserialize` so the
//!   external loader and display layers can move them as plain data.
//!
//! ## Invariants
//!
//! * `RawRecord::pallet_positions > 0` for records entering the aggregator
//!   (the loader filters zero/NaN capacity rows).
//! * `BranchSeries::points` is strictly increasing by date with one point per
//!   date once built.
//! * `SmoothedBand::points` aligns index-for-index with the series it was
//!   computed from.
//!
//! ## Non-goals
//!
//! * This module does not aggregate, smooth, or classify.
//! * This module does not parse CSV or any other external format.

use core::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Records
// ============================================================================

/// One raw per-location capacity observation, as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Branch identifier, e.g. `"10"`.
    pub branch_code: String,

    /// Physical location within the branch, e.g. `"10-A-03"`.
    pub warehouse_location: String,

    /// Observation date.
    pub date: NaiveDate,

    /// Storage area the location belongs to, e.g. `"DRY"`.
    pub area: String,

    /// Pallet positions occupied at this location on this date.
    pub pallets_used: f64,

    /// Pallet positions available at this location. Positive by contract.
    pub pallet_positions: f64,
}

/// Aggregation granularity requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// One series per branch: `sum(used) / sum(positions)` per day.
    #[default]
    Branch,

    /// One series per (branch, area): each area's share of the branch's
    /// total daily usage.
    BranchArea,
}

// ============================================================================
// Series Identity
// ============================================================================

/// Identity of one time series: a branch, optionally narrowed to an area.
///
/// `area` is `None` for branch-level grouping and `Some` for the per-area
/// breakdown. The `Ord` derive (branch first, then area) fixes the output
/// order of every grouped collection in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    /// Branch identifier.
    pub branch_code: String,

    /// Area within the branch, when aggregating per area.
    pub area: Option<String>,
}

impl SeriesKey {
    /// Key for a branch-level series.
    pub fn branch(branch_code: impl Into<String>) -> Self {
        Self {
            branch_code: branch_code.into(),
            area: None,
        }
    }

    /// Key for a per-area series.
    pub fn branch_area(branch_code: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            branch_code: branch_code.into(),
            area: Some(area.into()),
        }
    }
}

impl Display for SeriesKey {
    /// Renders as `"10"` for a branch key and `"10/DRY"` for an area key.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.area {
            Some(area) => write!(f, "{}/{}", self.branch_code, area),
            None => write!(f, "{}", self.branch_code),
        }
    }
}

// ============================================================================
// Aggregated Data
// ============================================================================

/// One capacity ratio for one series on one date.
///
/// Derived as a ratio of sums across all matching raw records, never a mean
/// of per-location ratios. For area keys the ratio is the area's share of
/// the branch's total usage that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    /// Series this point belongs to.
    pub key: SeriesKey,

    /// Observation date.
    pub date: NaiveDate,

    /// Capacity ratio, non-negative and practically at most 1.
    pub capacity_ratio: f64,
}

/// An ordered daily series for one key, ready for smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchSeries {
    /// Series identity.
    pub key: SeriesKey,

    /// `(date, capacity_ratio)` pairs, strictly increasing by date.
    pub points: Vec<(NaiveDate, f64)>,
}

impl BranchSeries {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Split into smoothing coordinates: x as day offsets from the first
    /// date, y as the capacity ratios.
    ///
    /// Day offsets preserve calendar gaps, so a missing week widens the
    /// distance between neighbors instead of pretending the points are
    /// adjacent.
    pub fn to_xy(&self) -> (Vec<f64>, Vec<f64>) {
        let origin = match self.points.first() {
            Some(&(date, _)) => date,
            None => return (Vec::new(), Vec::new()),
        };

        let x = self
            .points
            .iter()
            .map(|&(date, _)| (date - origin).num_days() as f64)
            .collect();
        let y = self.points.iter().map(|&(_, ratio)| ratio).collect();

        (x, y)
    }
}

// ============================================================================
// Smoothed Output
// ============================================================================

/// One band entry: the smoothed trend and its interval on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    /// Observation date.
    pub date: NaiveDate,

    /// Smoothed trend value.
    pub trend: f64,

    /// Lower band bound.
    pub lower: f64,

    /// Upper band bound.
    pub upper: f64,
}

/// The confidence band for one series, aligned with its input dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothedBand {
    /// Series identity.
    pub key: SeriesKey,

    /// Per-date band entries, in date order.
    pub points: Vec<BandPoint>,
}

impl SmoothedBand {
    /// Number of band entries.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the band holds no entries.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Classification verdict for one observation.
///
/// Derived once and never mutated; the flag is a pure function of the
/// observed value and its band entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierFlag {
    /// Series the observation belongs to.
    pub key: SeriesKey,

    /// Observation date.
    pub date: NaiveDate,

    /// Observed capacity ratio.
    pub observed: f64,

    /// Whether the observation falls outside its confidence band.
    pub is_outlier: bool,
}
