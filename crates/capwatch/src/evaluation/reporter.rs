//! Summarization of outlier flags.
//!
//! ## Purpose
//!
//! This module folds a flag collection into the counts the reporting layer
//! consumes: the total number of outliers and a per-branch breakdown. The
//! fold is associative and commutative (sums only), so flag order never
//! affects the summary.
//!
//! ## Design notes
//!
//! * Per-branch counts are keyed by branch code even for area-level flags;
//!   an area outlier counts against its branch.
//! * A branch appears in the breakdown only if it has at least one outlier.
//! * `BTreeMap` keeps the breakdown sorted by branch code for stable
//!   display and serialization.
//!
//! ## Non-goals
//!
//! * This module does not classify observations.
//! * This module does not render charts; `Display` is a plain-text table.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::primitives::records::OutlierFlag;

// ============================================================================
// Summary
// ============================================================================

/// Outlier counts across a classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierSummary {
    /// Total number of flagged observations.
    pub total: usize,

    /// Flagged observations per branch, sorted by branch code.
    pub per_branch: BTreeMap<String, usize>,
}

/// Fold a flag collection into its summary counts.
pub fn summarize(flags: &[OutlierFlag]) -> OutlierSummary {
    let mut summary = OutlierSummary::default();

    for flag in flags {
        if flag.is_outlier {
            summary.total += 1;
            *summary
                .per_branch
                .entry(flag.key.branch_code.clone())
                .or_insert(0) += 1;
        }
    }

    summary
}

impl Display for OutlierSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outlier Summary:")?;
        writeln!(f, "  Total outliers: {}", self.total)?;

        if self.per_branch.is_empty() {
            return write!(f, "  (no outliers)");
        }

        writeln!(f)?;
        writeln!(f, "{:>8} {:>10}", "Branch", "Outliers")?;
        writeln!(f, "{:-<19}", "")?;
        for (branch, count) in &self.per_branch {
            writeln!(f, "{branch:>8} {count:>10}")?;
        }

        Ok(())
    }
}
