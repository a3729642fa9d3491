//! Aggregation of raw location records into daily capacity ratios.
//!
//! ## Purpose
//!
//! This module reduces per-location pallet counts to one capacity ratio per
//! grouping key per date. Branch-level grouping divides the branch's summed
//! usage by its summed positions; area-level grouping divides each area's
//! summed usage by the branch's total usage for that date, yielding the
//! area's share of the branch.
//!
//! ## Design notes
//!
//! * **Ratio of sums**: every ratio is built from summed numerators and
//!   denominators, never by averaging per-location ratios. A location with
//!   ten positions must weigh a tenth of one with a hundred.
//! * **Share, not density**: an area's ratio is its share of the branch's
//!   total usage, explicitly NOT the area's usage over its own positions.
//! * **Ordered grouping**: `BTreeMap` keyed on the declared tuple, so output
//!   order is deterministic and independent of input order.
//! * **No zero division**: a group whose denominator sums to zero is dropped
//!   with a diagnostic instead of producing NaN.
//!
//! ## Invariants
//!
//! * Output is sorted by (branch, [area,] date).
//! * Aggregation is pure: the same records always produce the same points
//!   and diagnostics.
//! * For a fixed (branch, date) with nonzero usage, the area shares sum
//!   to 1.
//!
//! ## Non-goals
//!
//! * This module does not validate or filter records (loader contract).
//! * This module does not order points into series (handled by `series`).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::primitives::diagnostics::{DegenerateGroup, DegenerateReason};
use crate::primitives::records::{AggregatedPoint, Grouping, RawRecord, SeriesKey};

/// Reduce raw records to one capacity ratio per group.
///
/// Returns the aggregated points together with the groups dropped to avoid
/// dividing by zero. Dropping is a diagnostic, not an error: healthy groups
/// are unaffected.
pub fn aggregate(
    records: &[RawRecord],
    grouping: Grouping,
) -> (Vec<AggregatedPoint>, Vec<DegenerateGroup>) {
    match grouping {
        Grouping::Branch => aggregate_by_branch(records),
        Grouping::BranchArea => aggregate_by_area(records),
    }
}

/// Branch-level ratios: `sum(used) / sum(positions)` per (branch, date).
fn aggregate_by_branch(records: &[RawRecord]) -> (Vec<AggregatedPoint>, Vec<DegenerateGroup>) {
    let mut groups: BTreeMap<(String, NaiveDate), (f64, f64)> = BTreeMap::new();

    for record in records {
        let sums = groups
            .entry((record.branch_code.clone(), record.date))
            .or_insert((0.0, 0.0));
        sums.0 += record.pallets_used;
        sums.1 += record.pallet_positions;
    }

    let mut points = Vec::with_capacity(groups.len());
    let mut dropped = Vec::new();

    for ((branch_code, date), (used, positions)) in groups {
        if positions <= 0.0 {
            dropped.push(DegenerateGroup {
                branch_code,
                area: None,
                date,
                reason: DegenerateReason::ZeroPositions,
            });
        } else if used <= 0.0 {
            dropped.push(DegenerateGroup {
                branch_code,
                area: None,
                date,
                reason: DegenerateReason::ZeroUsage,
            });
        } else {
            points.push(AggregatedPoint {
                key: SeriesKey::branch(branch_code),
                date,
                capacity_ratio: used / positions,
            });
        }
    }

    (points, dropped)
}

/// Area-level shares: `sum(used)_area / sum(used)_branch` per
/// (branch, area, date).
///
/// The denominator is the branch's total usage for the date, so the shares
/// of all areas of a branch sum to 1. An area with zero usage keeps its
/// point (share 0); a branch with zero total usage drops every area group
/// for that date.
fn aggregate_by_area(records: &[RawRecord]) -> (Vec<AggregatedPoint>, Vec<DegenerateGroup>) {
    let mut branch_usage: BTreeMap<(String, NaiveDate), f64> = BTreeMap::new();
    let mut area_usage: BTreeMap<(String, String, NaiveDate), f64> = BTreeMap::new();

    for record in records {
        *branch_usage
            .entry((record.branch_code.clone(), record.date))
            .or_insert(0.0) += record.pallets_used;
        *area_usage
            .entry((record.branch_code.clone(), record.area.clone(), record.date))
            .or_insert(0.0) += record.pallets_used;
    }

    let mut points = Vec::with_capacity(area_usage.len());
    let mut dropped = Vec::new();

    for ((branch_code, area, date), used) in area_usage {
        let total = branch_usage
            .get(&(branch_code.clone(), date))
            .copied()
            .unwrap_or(0.0);

        if total <= 0.0 {
            dropped.push(DegenerateGroup {
                branch_code,
                area: Some(area),
                date,
                reason: DegenerateReason::ZeroUsage,
            });
        } else {
            points.push(AggregatedPoint {
                key: SeriesKey::branch_area(branch_code, area),
                date,
                capacity_ratio: used / total,
            });
        }
    }

    (points, dropped)
}
