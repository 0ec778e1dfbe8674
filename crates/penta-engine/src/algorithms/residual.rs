// ABOUTME: Residual-mass calculator: trunk dimensions scaled by sitting height
// ABOUTME: Waist girth corrected by the abdominal skinfold before summation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Residual Mass
//!
//! The only formula scaled by sitting height instead of standing stature:
//!
//! `corrected_waist = waist - abdominal_skinfold * 0.3141`
//! `sum = transverse_chest + ap_chest + corrected_waist`
//! `z = (sum * (89.92/sitting_height) - 109.35) / 7.08`
//! `mass_kg = (z * 1.24 + 6.1) / (89.92/sitting_height)^3`

use penta_core::constants::{phantom, residual};
use penta_core::errors::AppResult;
use penta_core::models::RawMeasurementSet;
use penta_core::reference::Field;

use super::require_positive;

/// Residual mass (kg) and its z-score, unrounded
///
/// # Errors
///
/// `IncompleteMeasurement` naming every missing/non-positive trunk or
/// sitting-height field.
pub fn residual_mass(raw: &RawMeasurementSet) -> AppResult<(f64, f64)> {
    let values = require_positive(
        raw,
        &[
            Field::WaistGirth,
            Field::AbdominalSkinfold,
            Field::TransverseChest,
            Field::AnteroPosteriorChest,
            Field::SittingHeight,
        ],
    )?;
    let [waist, sk_abdominal, transverse, antero_posterior, sitting_cm] = [
        values[0], values[1], values[2], values[3], values[4],
    ];

    let corrected_waist = waist - sk_abdominal * residual::WAIST_SKINFOLD_COEFF;
    let trunk_sum = transverse + antero_posterior + corrected_waist;

    let factor = phantom::REFERENCE_SITTING_HEIGHT_CM / sitting_cm;
    let z = (trunk_sum * factor - residual::TRUNK_SUM_MEAN_CM) / residual::TRUNK_SUM_SD_CM;
    let mass_kg = (z * residual::SLOPE_KG + residual::INTERCEPT_KG) / factor.powi(3);

    Ok((mass_kg, z))
}
