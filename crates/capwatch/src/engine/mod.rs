//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer moves data through the pipeline: raw records are aggregated
//! into daily ratios, partitioned into ordered series, then smoothed and
//! classified per series by the executor.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Evaluation
//!   ↓
//! Layer 1: Primitives
//! ```

/// Raw record aggregation.
pub mod aggregator;

/// Series partitioning and ordering.
pub mod series;

/// Per-series smoothing and classification.
pub mod executor;
