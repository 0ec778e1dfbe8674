// ABOUTME: Bone-mass calculator: Rocha method, independent head and body sub-formulas summed
// ABOUTME: Head term from head girth; body term from the weighted diameter sum, stature-scaled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Bone Mass (Rocha method)
//!
//! Two independent sub-formulas, summed:
//!
//! - head: `z = (head_girth - 56.0) / 1.44`, `mass = z * 0.18 + 1.2`
//!   (the head term is not stature-scaled)
//! - body: `sum = biacromial + biiliocristal + 2*humerus + 2*femur`,
//!   `z = (sum * (170.18/stature) - 98.88) / 5.33`,
//!   `mass = (z * 1.34 + 6.7) / (170.18/stature)^3`
//!
//! The reported z-score is the body term's. Bone is the least reliable of
//! the five formulas (smallest anatomical signal, most error-prone
//! diameters), which is why reconciliation offers an anchoring pass against
//! a reference bone mass.
//!
//! # Scientific References
//!
//! - Rocha, M.S.L. (1975). "Peso ósseo do brasileiro de ambos os sexos de 17
//!   a 25 anos." *Arquivos de Anatomia e Antropologia*, 1, 445-451.
//! - Kerr, D.A. (1988). M.Sc. thesis, Simon Fraser University.

use penta_core::constants::{bone, phantom};
use penta_core::errors::AppResult;
use penta_core::models::RawMeasurementSet;
use penta_core::reference::Field;

use super::require_positive;

/// Total bone mass (kg) and the body-term z-score, unrounded
///
/// # Errors
///
/// `IncompleteMeasurement` naming every missing/non-positive girth,
/// diameter, or stature field.
pub fn bone_mass(raw: &RawMeasurementSet) -> AppResult<(f64, f64)> {
    let values = require_positive(
        raw,
        &[
            Field::HeadGirth,
            Field::BiacromialBreadth,
            Field::BiiliocristalBreadth,
            Field::HumerusBreadth,
            Field::FemurBreadth,
            Field::Stature,
        ],
    )?;
    let [head_girth, biacromial, biiliocristal, humerus, femur, stature_cm] = [
        values[0], values[1], values[2], values[3], values[4], values[5],
    ];

    // Head term
    let z_head = (head_girth - bone::HEAD_GIRTH_MEAN_CM) / bone::HEAD_GIRTH_SD_CM;
    let head_mass_kg = z_head * bone::HEAD_SLOPE_KG + bone::HEAD_INTERCEPT_KG;

    // Body term: humeral and femoral breadths enter twice
    let diameter_sum = biacromial + biiliocristal + humerus * 2.0 + femur * 2.0;
    let factor = phantom::REFERENCE_STATURE_CM / stature_cm;
    let z_body = (diameter_sum * factor - bone::DIAMETER_SUM_MEAN_CM) / bone::DIAMETER_SUM_SD_CM;
    let body_mass_kg = (z_body * bone::BODY_SLOPE_KG + bone::BODY_INTERCEPT_KG) / factor.powi(3);

    Ok((head_mass_kg + body_mass_kg, z_body))
}
