//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (windows, errors) and algorithms (regression, robustness,
//! interpolation). It provides the main iteration loop, convergence
//! detection, input validation, and the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for trend smoothing.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing runs.
pub mod output;
