//! Outlier classification against a confidence band.
//!
//! ## Purpose
//!
//! This module decides whether one observation is an outlier given its band
//! entry. The decision is a pure function of the two values, with no state
//! and no ordering dependency between branches or dates, so any (key, date)
//! pair can be classified independently and in parallel.
//!
//! ## Invariants
//!
//! * A value exactly on either bound is inside the band (strict comparison).
//! * For a zero-width band, every value off the trend is an outlier and the
//!   trend value itself is not.
//!
//! ## Non-goals
//!
//! * This module does not smooth or build bands.
//! * This module does not aggregate flags (handled by `reporter`).

use crate::primitives::records::BandPoint;

/// Whether `observed` falls outside the band entry for its date.
#[inline]
pub fn is_outlier(observed: f64, band: &BandPoint) -> bool {
    observed < band.lower || observed > band.upper
}
