// ABOUTME: Derived indices of the reconciled masses: stature-normalized and ratio indices
// ABOUTME: Every divisor is null-guarded independently; ratios return None, never infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Derived Indices
//!
//! All pure functions of the final anchored masses and stature. Each index
//! guards its own divisor: a zero bone mass yields `None` for the
//! muscle/bone index without touching any of the others.

use penta_core::constants::{precision, round_to};
use penta_core::models::{DerivedIndices, FinalMasses, RawMeasurementSet};

/// Stature-normalized mass index: `mass_kg / stature_m^2`, rounded to 4 decimals
#[must_use]
pub fn mass_index(mass_kg: f64, stature_cm: f64) -> Option<f64> {
    if stature_cm <= 0.0 {
        return None;
    }
    let stature_m = stature_cm / 100.0;
    Some(round_to(
        mass_kg / (stature_m * stature_m),
        precision::INDEX_DECIMALS,
    ))
}

/// Muscle / bone ratio; `None` when bone mass <= 0
#[must_use]
pub fn muscle_bone_index(muscle_kg: f64, bone_kg: f64) -> Option<f64> {
    if bone_kg <= 0.0 {
        return None;
    }
    Some(round_to(muscle_kg / bone_kg, precision::INDEX_DECIMALS))
}

/// Muscle / (adipose + residual) ratio; `None` when the ballast sum <= 0
#[must_use]
pub fn muscle_ballast_index(muscle_kg: f64, adipose_kg: f64, residual_kg: f64) -> Option<f64> {
    let ballast = adipose_kg + residual_kg;
    if ballast <= 0.0 {
        return None;
    }
    Some(round_to(muscle_kg / ballast, precision::INDEX_DECIMALS))
}

/// Ballast index: `((five_way_sum - muscle) * 1000) / stature_cm^2`
#[must_use]
pub fn ballast_index(muscle_kg: f64, five_way_sum_kg: f64, stature_cm: f64) -> Option<f64> {
    if stature_cm <= 0.0 {
        return None;
    }
    let ballast = five_way_sum_kg - muscle_kg;
    Some(round_to(
        (ballast * 1000.0) / (stature_cm * stature_cm),
        precision::INDEX_DECIMALS,
    ))
}

/// Body mass index: `weight_kg / stature_m^2`
#[must_use]
pub fn body_mass_index(weight_kg: f64, stature_cm: f64) -> Option<f64> {
    if stature_cm <= 0.0 {
        return None;
    }
    let stature_m = stature_cm / 100.0;
    Some(round_to(
        weight_kg / (stature_m * stature_m),
        precision::RATIO_DECIMALS,
    ))
}

/// Waist / hip girth ratio; `None` when hip girth <= 0
#[must_use]
pub fn waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> Option<f64> {
    if hip_cm <= 0.0 {
        return None;
    }
    Some(round_to(waist_cm / hip_cm, precision::RATIO_DECIMALS))
}

/// Waist girth / stature ratio; `None` when stature <= 0
#[must_use]
pub fn waist_stature_ratio(waist_cm: f64, stature_cm: f64) -> Option<f64> {
    if stature_cm <= 0.0 {
        return None;
    }
    Some(round_to(waist_cm / stature_cm, precision::RATIO_DECIMALS))
}

/// All indices of one session's final masses
#[must_use]
pub fn derive_indices(
    final_masses: &FinalMasses,
    raw: &RawMeasurementSet,
    stature_cm: f64,
    measured_weight_kg: f64,
) -> DerivedIndices {
    DerivedIndices {
        adipose_index: mass_index(final_masses.adipose_kg, stature_cm),
        muscle_index: mass_index(final_masses.muscle_kg, stature_cm),
        bone_index: mass_index(final_masses.bone_kg, stature_cm),
        residual_index: mass_index(final_masses.residual_kg, stature_cm),
        skin_index: mass_index(final_masses.skin_kg, stature_cm),
        muscle_bone_index: muscle_bone_index(final_masses.muscle_kg, final_masses.bone_kg),
        muscle_ballast_index: muscle_ballast_index(
            final_masses.muscle_kg,
            final_masses.adipose_kg,
            final_masses.residual_kg,
        ),
        ballast_index: ballast_index(
            final_masses.muscle_kg,
            final_masses.five_way_sum_kg,
            stature_cm,
        ),
        bmi: body_mass_index(measured_weight_kg, stature_cm),
        waist_hip_ratio: raw
            .waist_girth_cm
            .zip(raw.hip_girth_cm)
            .and_then(|(waist, hip)| waist_hip_ratio(waist, hip)),
        waist_stature_ratio: raw
            .waist_girth_cm
            .and_then(|waist| waist_stature_ratio(waist, stature_cm)),
    }
}
