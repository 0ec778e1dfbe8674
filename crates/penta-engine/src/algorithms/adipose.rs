// ABOUTME: Adipose-mass calculator: z on the scaled sum of six skinfolds
// ABOUTME: Kerr (1988) allometric regression, replicated from the source spreadsheet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Adipose Mass
//!
//! Formula (Kerr, 1988):
//!
//! `z = (sum6 * (170.18/stature) - 116.41) / 34.79`
//! `mass_kg = (z * 5.85 + 25.6) / (170.18/stature)^3`
//!
//! where `sum6` is triceps + subscapular + supraspinale + abdominal +
//! front thigh + medial calf (mm).

use penta_core::constants::{adipose, phantom};
use penta_core::errors::AppResult;
use penta_core::models::RawMeasurementSet;
use penta_core::reference::Field;

use super::require_positive;

/// Skinfolds entering the sum of 6, in formula order
pub const SUM6_FIELDS: [Field; 6] = [
    Field::TricepsSkinfold,
    Field::SubscapularSkinfold,
    Field::SupraspinaleSkinfold,
    Field::AbdominalSkinfold,
    Field::FrontThighSkinfold,
    Field::MedialCalfSkinfold,
];

/// Adipose mass (kg) and its z-score, unrounded
///
/// # Errors
///
/// `IncompleteMeasurement` naming every missing/non-positive skinfold or
/// stature field.
pub fn adipose_mass(raw: &RawMeasurementSet) -> AppResult<(f64, f64)> {
    let mut required = SUM6_FIELDS.to_vec();
    required.push(Field::Stature);
    let values = require_positive(raw, &required)?;

    let sum6: f64 = values[..6].iter().sum();
    let stature_cm = values[6];

    let factor = phantom::REFERENCE_STATURE_CM / stature_cm;
    let z = (sum6 * factor - adipose::SUM6_MEAN_MM) / adipose::SUM6_SD_MM;
    let mass_kg = (z * adipose::SLOPE_KG + adipose::INTERCEPT_KG) / factor.powi(3);

    Ok((mass_kg, z))
}
