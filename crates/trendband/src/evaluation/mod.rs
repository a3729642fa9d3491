//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives statistical output from the smoothing results: the
//! residual dispersion estimate and the confidence band around the trend.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Confidence band computation.
pub mod band;
