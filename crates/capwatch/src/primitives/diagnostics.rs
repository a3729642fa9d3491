//! Run diagnostics: data problems reported as values, not failures.
//!
//! ## Purpose
//!
//! A pipeline run over many branches must not abort because one branch has
//! bad or insufficient data. This module defines the diagnostic records a
//! run accumulates instead: groups dropped during aggregation and series
//! skipped before smoothing. Callers decide whether to log, display, or
//! ignore them.
//!
//! ## Design notes
//!
//! * Diagnostics are ordinary data with `Display` impls, so a caller can
//!   print them one per line without any logging framework.
//! * Partial-failure semantics: a diagnostic never stops the branches that
//!   are healthy.

use core::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::primitives::records::SeriesKey;

// ============================================================================
// Dropped Groups
// ============================================================================

/// Why an aggregation group was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegenerateReason {
    /// The group's total pallet positions sum to zero.
    ZeroPositions,

    /// The group's usage denominator sums to zero.
    ZeroUsage,
}

impl Display for DegenerateReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::ZeroPositions => write!(f, "zero total positions"),
            DegenerateReason::ZeroUsage => write!(f, "zero total usage"),
        }
    }
}

/// An aggregation group excluded to avoid a zero division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegenerateGroup {
    /// Branch the group belongs to.
    pub branch_code: String,

    /// Area, when aggregating per area.
    pub area: Option<String>,

    /// Date of the group.
    pub date: NaiveDate,

    /// Why the group was dropped.
    pub reason: DegenerateReason,
}

impl Display for DegenerateGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.area {
            Some(area) => write!(
                f,
                "dropped group {}/{} on {}: {}",
                self.branch_code, area, self.date, self.reason
            ),
            None => write!(
                f,
                "dropped group {} on {}: {}",
                self.branch_code, self.date, self.reason
            ),
        }
    }
}

// ============================================================================
// Skipped Series
// ============================================================================

/// A series too short to smooth, reported instead of silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    /// Series that was skipped.
    pub key: SeriesKey,

    /// Points the series actually has.
    pub got: usize,

    /// Points required for a usable fit.
    pub need: usize,
}

impl Display for InsufficientData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insufficient data for {}: {} points, need at least {}",
            self.key, self.got, self.need
        )
    }
}

// ============================================================================
// Run Diagnostics
// ============================================================================

/// Everything a run set aside: dropped groups and skipped series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Groups dropped during aggregation.
    pub dropped_groups: Vec<DegenerateGroup>,

    /// Series skipped for insufficient data.
    pub skipped_series: Vec<InsufficientData>,
}

impl Diagnostics {
    /// Whether the run completed without setting anything aside.
    pub fn is_clean(&self) -> bool {
        self.dropped_groups.is_empty() && self.skipped_series.is_empty()
    }

    /// Total number of diagnostic entries.
    pub fn len(&self) -> usize {
        self.dropped_groups.len() + self.skipped_series.len()
    }

    /// Whether there are no diagnostic entries.
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "no diagnostics");
        }

        let mut first = true;
        for group in &self.dropped_groups {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{group}")?;
            first = false;
        }
        for skipped in &self.skipped_series {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{skipped}")?;
            first = false;
        }
        Ok(())
    }
}
