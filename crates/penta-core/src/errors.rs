// ABOUTME: Unified error handling for the anthropometry engine
// ABOUTME: AppError with standard error codes for input, completeness, and reference failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Unified Error Handling System
//!
//! This module provides the centralized error type for the Penta engine.
//! The engine is deterministic and pure, so none of these errors are
//! retryable: the only valid recovery is to correct the input and recompute.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Structural precondition violation (non-positive stature/weight, bad header)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    /// One or more required raw fields are missing or non-positive
    #[serde(rename = "INCOMPLETE_MEASUREMENT")]
    IncompleteMeasurement = 3001,

    /// A field has no population-norm entry in the reference table
    #[serde(rename = "MISSING_REFERENCE")]
    MissingReference = 6001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The measurement set violates a structural precondition",
            Self::IncompleteMeasurement => {
                "One or more required measurements are missing or non-positive"
            }
            Self::MissingReference => {
                "A measured field has no entry in the population-norm reference table"
            }
        }
    }
}

/// Application error with a standard code and a human-readable message.
///
/// `IncompleteMeasurement` errors collect every offending field name before
/// failing, so the caller can present one consolidated message instead of
/// forcing the operator through repeated round-trips.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Offending field names (populated for `IncompleteMeasurement`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Structural precondition violation (fatal to the whole computation)
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required raw fields missing or non-positive, with the full offending list
    #[must_use]
    pub fn incomplete_measurement(fields: Vec<String>) -> Self {
        let message = format!(
            "Missing or non-positive measurement fields: {}",
            fields.join(", ")
        );
        Self {
            code: ErrorCode::IncompleteMeasurement,
            message,
            fields,
        }
    }

    /// No population-norm entry for the named field (reference-table mismatch)
    #[must_use]
    pub fn missing_reference(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: ErrorCode::MissingReference,
            message: format!("No reference entry for field '{field}'"),
            fields: vec![field],
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
