//! Error types for the detection pipeline.
//!
//! ## Purpose
//!
//! This module defines the fatal error conditions of a pipeline run. Only
//! configuration problems are fatal here: invalid smoothing parameters
//! (surfaced by the numeric core) and builder misuse. Data problems are
//! never errors; they become diagnostics (see `primitives::diagnostics`).
//!
//! ## Design notes
//!
//! * Smoothing-parameter validation lives in the numeric core; this crate
//!   wraps its error type instead of duplicating the checks.
//! * `From<TrendbandError>` keeps `?` ergonomic at every call into the core.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use trendband::prelude::TrendbandError;

// ============================================================================
// Error Type
// ============================================================================

/// Fatal error for a detection run.
#[derive(Debug, Clone, PartialEq)]
pub enum CapwatchError {
    /// The smoothing configuration or a series handed to the numeric core
    /// was rejected.
    Smoothing(TrendbandError),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl Display for CapwatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CapwatchError::Smoothing(err) => write!(f, "smoothing: {err}"),
            CapwatchError::DuplicateParameter { parameter } => {
                write!(f, "parameter '{parameter}' was set more than once")
            }
        }
    }
}

impl Error for CapwatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CapwatchError::Smoothing(err) => Some(err),
            CapwatchError::DuplicateParameter { .. } => None,
        }
    }
}

impl From<TrendbandError> for CapwatchError {
    fn from(err: TrendbandError) -> Self {
        CapwatchError::Smoothing(err)
    }
}
