//! Layer 2: Evaluation
//!
//! # Purpose
//!
//! This layer judges smoothed output: the per-point outlier decision and the
//! fold that turns a flag collection into summary counts. Both are pure over
//! primitive types.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Evaluation ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-point outlier decision.
pub mod classifier;

/// Flag summarization.
pub mod reporter;
