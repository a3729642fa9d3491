#![cfg(feature = "dev")]
//! Tests for the pipeline record types: key identity and ordering, series
//! accessors, and the series-to-coordinates split.

use approx::assert_relative_eq;
use chrono::NaiveDate;

use capwatch::internals::primitives::records::{BranchSeries, Grouping, SeriesKey, SmoothedBand};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

// ============================================================================
// SeriesKey Tests
// ============================================================================

/// Test the display forms for branch and area keys.
#[test]
fn test_key_display() {
    assert_eq!(SeriesKey::branch("10").to_string(), "10");
    assert_eq!(SeriesKey::branch_area("10", "DRY").to_string(), "10/DRY");
}

/// Test that keys order by branch first, then area, with branch-level
/// keys ahead of area-level keys for the same branch.
#[test]
fn test_key_ordering() {
    let mut keys = vec![
        SeriesKey::branch_area("10", "FRZ"),
        SeriesKey::branch("11"),
        SeriesKey::branch_area("10", "DRY"),
        SeriesKey::branch("10"),
    ];
    keys.sort();

    assert_eq!(
        keys,
        vec![
            SeriesKey::branch("10"),
            SeriesKey::branch_area("10", "DRY"),
            SeriesKey::branch_area("10", "FRZ"),
            SeriesKey::branch("11"),
        ]
    );
}

/// Test that the grouping default is branch-level.
#[test]
fn test_default_grouping_is_branch() {
    assert_eq!(Grouping::default(), Grouping::Branch);
}

// ============================================================================
// BranchSeries Tests
// ============================================================================

/// Test the coordinate split on consecutive dates.
#[test]
fn test_to_xy_consecutive_dates() {
    let series = BranchSeries {
        key: SeriesKey::branch("10"),
        points: vec![(d(1), 0.50), (d(2), 0.52), (d(3), 0.49)],
    };

    let (x, y) = series.to_xy();

    assert_eq!(x, vec![0.0, 1.0, 2.0]);
    assert_eq!(y, vec![0.50, 0.52, 0.49]);
}

/// Test that calendar gaps survive as x-distance.
#[test]
fn test_to_xy_preserves_calendar_gaps() {
    let series = BranchSeries {
        key: SeriesKey::branch("10"),
        points: vec![(d(1), 0.5), (d(3), 0.6), (d(10), 0.7)],
    };

    let (x, y) = series.to_xy();

    assert_eq!(x, vec![0.0, 2.0, 9.0]);
    assert_relative_eq!(y[2], 0.7, epsilon = 1e-12);
}

/// Test the empty-series accessors and coordinate split.
#[test]
fn test_empty_series() {
    let series = BranchSeries {
        key: SeriesKey::branch("10"),
        points: Vec::new(),
    };

    assert!(series.is_empty());
    assert_eq!(series.len(), 0);

    let (x, y) = series.to_xy();
    assert!(x.is_empty());
    assert!(y.is_empty());
}

/// Test the band container accessors.
#[test]
fn test_band_accessors() {
    let band = SmoothedBand {
        key: SeriesKey::branch("10"),
        points: Vec::new(),
    };

    assert!(band.is_empty());
    assert_eq!(band.len(), 0);
}
