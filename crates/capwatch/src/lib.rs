//! # Capwatch — Warehouse capacity-ratio outlier detection
//!
//! Turns raw per-branch warehouse snapshots into daily capacity-ratio time
//! series, smooths each series with a robust local-regression trend, and
//! flags the days whose observed ratio escapes the confidence band around
//! that trend.
//!
//! ## What does it compute?
//!
//! Each raw record is one storage-area snapshot: pallet positions in use and
//! pallet positions available, for one branch on one date. The pipeline runs
//! in four stages:
//!
//! 1. **Aggregate**: records are grouped per branch (or per branch/area) and
//!    date, and collapsed into a single capacity ratio per group via a
//!    ratio of sums.
//! 2. **Build series**: ratios are assembled into date-ordered series, one
//!    per branch (or branch/area), with duplicate dates averaged.
//! 3. **Smooth**: every series long enough is fitted with a robust LOWESS
//!    trend plus a MAD-based confidence band.
//! 4. **Classify**: each observation is compared against its band; points
//!    outside are flagged as outliers.
//!
//! Degenerate groups (zero positions, zero usage) and series too short to
//! smooth never abort a run. They are set aside as diagnostics so one bad
//! branch cannot silence the rest of the fleet.
//!
//! ## Quick Start
//!
//! ```rust
//! use capwatch::prelude::*;
//! use chrono::NaiveDate;
//!
//! // A week of snapshots for branch 10; day five spikes to 98% usage.
//! let used = [50.0, 52.0, 49.0, 51.0, 98.0, 50.0, 53.0];
//! let records: Vec<RawRecord> = used
//!     .iter()
//!     .enumerate()
//!     .map(|(day, &pallets_used)| RawRecord {
//!         branch_code: "10".to_string(),
//!         warehouse_location: "MAIN".to_string(),
//!         date: NaiveDate::from_ymd_opt(2024, 3, 1 + day as u32).unwrap(),
//!         area: "DRY".to_string(),
//!         pallets_used,
//!         pallet_positions: 100.0,
//!     })
//!     .collect();
//!
//! // Build the model
//! let model = Detector::new()
//!     .fraction(0.5)      // Use 50% of each series for each local fit
//!     .iterations(1)      // 1 robustness iteration
//!     .tail(0.1)          // 90% band
//!     .build()?;
//!
//! // Classify the batch
//! let result = model.classify(&records)?;
//!
//! // Only the spike day escapes the band
//! let flagged = result.flagged();
//! assert_eq!(flagged.len(), 1);
//! assert_eq!(flagged[0].key.branch_code, "10");
//! assert_eq!(flagged[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
//! assert!(result.diagnostics.is_clean());
//! # Result::<(), CapwatchError>::Ok(())
//! ```
//!
//! ### One-shot runs
//!
//! When no model reuse is needed, the free [`classify`](prelude::classify)
//! function runs the whole pipeline from a [`SmoothConfig`](prelude::SmoothConfig):
//!
//! ```rust
//! use capwatch::prelude::*;
//!
//! # let records: Vec<RawRecord> = Vec::new();
//! let result = classify(&records, Grouping::Branch, &SmoothConfig::default())?;
//! println!("{}", result.summary());
//! # Result::<(), CapwatchError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `classify` returns a `Result<Classification, CapwatchError>`.
//!
//! - **`Ok(Classification)`**: Contains the flags, the per-series bands, and
//!   the diagnostics for whatever was set aside.
//! - **`Err(CapwatchError)`**: Indicates a contract breach (invalid smoothing
//!   parameters, a parameter set twice, or a smoothing failure).
//!
//! A built model borrows itself during `classify`, so one model can process
//! many record batches, including from multiple threads.

// Layer 1: Primitives - records, series containers, diagnostics, errors.
mod primitives;

// Layer 2: Evaluation - band membership and summary reporting.
mod evaluation;

// Layer 3: Engine - aggregation, series assembly, and smoothing runs.
mod engine;

// Layer 4: API - high-level fluent interface.
mod api;

// Standard capwatch prelude.
pub mod prelude {
    pub use crate::api::{
        classify, summarize, CapwatchError, Classification, Detector, DetectorModel,
        OutlierSummary, SmoothConfig, DEFAULT_FRACTION, DEFAULT_ITERATIONS, DEFAULT_MIN_POINTS,
        DEFAULT_TAIL,
    };
    pub use crate::primitives::diagnostics::{
        DegenerateGroup, DegenerateReason, Diagnostics, InsufficientData,
    };
    pub use crate::primitives::records::{
        BandPoint, Grouping, OutlierFlag, RawRecord, SeriesKey, SmoothedBand,
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
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
