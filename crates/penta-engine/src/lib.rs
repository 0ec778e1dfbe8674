// ABOUTME: ISAK anthropometric calculation engine: raw measurements to five-component masses
// ABOUTME: Pure, synchronous, deterministic; all I/O and persistence live outside this crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

#![deny(unsafe_code)]

//! # Penta Engine
//!
//! Deterministic calculation engine for the ISAK protocol: transforms one
//! session's raw measurements (skinfolds, girths, diameters, lengths) into
//! the Kerr (1988) five-component body-mass fractionation, reconciled
//! against the measured body weight, plus per-field Phantom z-scores and
//! derived indices.
//!
//! The engine is a pure function of its inputs and the static reference
//! table: no shared mutable state, no I/O, no blocking. Identical inputs
//! always yield identical outputs, so it is safe to call concurrently and
//! the persistence layer may cache or re-derive results freely.
//!
//! ```no_run
//! use penta_core::models::RawMeasurementSet;
//! use penta_engine::compute_anthropometry;
//!
//! # fn example(raw: &RawMeasurementSet) -> penta_core::errors::AppResult<()> {
//! let result = compute_anthropometry(raw)?;
//! println!("muscle: {:.3} kg", result.final_masses.muscle_kg);
//! # Ok(())
//! # }
//! ```

/// Allometric scaling, z-scores, and the five component-mass calculators
pub mod algorithms;

/// Session validation, follow-up resolution, and result assembly
pub mod analyzer;

/// Derived indices of the reconciled masses
pub mod indices;

/// Mass-balance reconciliation (proportional correction + bone anchoring)
pub mod reconciliation;

pub use analyzer::{
    compute_anthropometry, compute_with, resolve_session, validate, PriorSessionSource,
};
