//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the record types, diagnostics, and errors used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Evaluation
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Pipeline record types.
pub mod records;

/// Run diagnostics reported as data.
pub mod diagnostics;

/// Shared error types.
pub mod errors;
