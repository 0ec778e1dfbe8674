// ABOUTME: Muscle-mass calculator: z on the sum of skinfold-corrected girths
// ABOUTME: Kerr (1988) regression; girths corrected by pi * skinfold / 10
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Muscle Mass
//!
//! Corrected-girth sum:
//!
//! `(relaxed arm - pi*triceps/10) + forearm + (thigh - pi*front_thigh/10)
//!  + (calf - pi*medial_calf/10) + (chest - pi*subscapular/10)`
//!
//! then `z = (sum * (170.18/stature) - 207.21) / 13.74` and
//! `mass_kg = (z * 5.4 + 24.5) / (170.18/stature)^3`.
//!
//! Muscle mass is computed directly from this regression, never by
//! difference from the other components.

use penta_core::constants::{muscle, phantom};
use penta_core::errors::AppResult;
use penta_core::models::RawMeasurementSet;
use penta_core::reference::Field;

use super::require_positive;

/// Muscle mass (kg) and its z-score, unrounded
///
/// # Errors
///
/// `IncompleteMeasurement` naming every missing/non-positive girth,
/// skinfold, or stature field.
pub fn muscle_mass(raw: &RawMeasurementSet) -> AppResult<(f64, f64)> {
    let values = require_positive(
        raw,
        &[
            Field::RelaxedArmGirth,
            Field::ForearmGirth,
            Field::ThighGirth,
            Field::CalfGirth,
            Field::ChestGirth,
            Field::TricepsSkinfold,
            Field::FrontThighSkinfold,
            Field::MedialCalfSkinfold,
            Field::SubscapularSkinfold,
            Field::Stature,
        ],
    )?;
    let [arm, forearm, thigh, calf, chest, sk_triceps, sk_thigh, sk_calf, sk_subscap, stature_cm] =
        [
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
            values[7], values[8], values[9],
        ];

    let pi = muscle::SKINFOLD_PI;
    let arm_corr = arm - (sk_triceps * pi) / 10.0;
    let thigh_corr = thigh - (sk_thigh * pi) / 10.0;
    let calf_corr = calf - (sk_calf * pi) / 10.0;
    let chest_corr = chest - (sk_subscap * pi) / 10.0;

    let girth_sum = arm_corr + forearm + thigh_corr + calf_corr + chest_corr;

    let factor = phantom::REFERENCE_STATURE_CM / stature_cm;
    let z = (girth_sum * factor - muscle::GIRTH_SUM_MEAN_CM) / muscle::GIRTH_SUM_SD_CM;
    let mass_kg = (z * muscle::SLOPE_KG + muscle::INTERCEPT_KG) / factor.powi(3);

    Ok((mass_kg, z))
}
