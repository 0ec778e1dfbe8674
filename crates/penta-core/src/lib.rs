// ABOUTME: Core types and constants for the Penta anthropometry platform
// ABOUTME: Foundation crate with error handling, domain models, and the ISAK reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

#![deny(unsafe_code)]

//! # Penta Core
//!
//! Foundation crate providing shared types and reference data for the Penta
//! anthropometry platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Phantom reference and regression constants with citations
//! - **reference**: The immutable population-norm table keyed by [`Field`](reference::Field)
//! - **models**: Domain models (`RawMeasurementSet`, `ComponentMass`, `AnthropometricResult`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Phantom reference constants and regression coefficients, organized by domain
pub mod constants;

/// The immutable ISAK population-norm table and field taxonomy
pub mod reference;

/// Core data models (raw measurement sets, component masses, results)
pub mod models;
