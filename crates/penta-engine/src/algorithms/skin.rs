// ABOUTME: Skin-mass calculator from body surface area (Du Bois-type formula)
// ABOUTME: Sex/age constant selection; no z-score defined for this component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Skin Mass
//!
//! `area_m2 = (k1 * weight^0.425 * stature^0.725) / 10000`
//! `mass_kg = area_m2 * skin_thickness * 1.05`
//!
//! Constant selection: female adult k1 = 73.074 / thickness 1.96; male adult
//! 68.308 / 2.07; under 12 years k1 = 70.691 regardless of sex.
//!
//! The deployed roster is all-female; the male and child branches replicate
//! the published constants but are untested against real subjects.

use penta_core::constants::skin;
use penta_core::errors::AppResult;
use penta_core::models::{RawMeasurementSet, Sex};
use penta_core::reference::Field;

use super::require_positive;

/// Skin mass (kg), unrounded. No z-score is defined for this component.
///
/// # Errors
///
/// `IncompleteMeasurement` naming the missing/non-positive weight or
/// stature field.
pub fn skin_mass(raw: &RawMeasurementSet) -> AppResult<f64> {
    let values = require_positive(raw, &[Field::BodyMass, Field::Stature])?;
    let [weight_kg, stature_cm] = [values[0], values[1]];

    let (mut surface_const, thickness) = match raw.sex {
        Sex::M => (skin::SURFACE_CONST_MALE, skin::THICKNESS_MALE_MM),
        Sex::F => (skin::SURFACE_CONST_FEMALE, skin::THICKNESS_FEMALE_MM),
    };
    if raw
        .age_years
        .is_some_and(|age| age < skin::CHILD_AGE_LIMIT_YEARS)
    {
        surface_const = skin::SURFACE_CONST_CHILD;
    }

    let surface_area = (surface_const
        * weight_kg.powf(skin::WEIGHT_EXPONENT)
        * stature_cm.powf(skin::STATURE_EXPONENT))
        / 10_000.0;

    Ok(surface_area * thickness * skin::DENSITY_FACTOR)
}
