// ABOUTME: Calculation algorithms: allometric scaling and the five component-mass formulas
// ABOUTME: One module per formula; shared required-field collection helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! Component-mass and scaling algorithms
//!
//! Each calculator reads only the raw fields its formula needs and fails
//! with an `IncompleteMeasurement` error naming every missing or
//! non-positive field. Nothing is ever silently substituted with zero.

pub mod adipose;
pub mod bone;
pub mod muscle;
pub mod residual;
pub mod scaling;
pub mod skin;

pub use adipose::adipose_mass;
pub use bone::bone_mass;
pub use muscle::muscle_mass;
pub use residual::residual_mass;
pub use scaling::{scale, z_score, z_score_map, ScalingKind};
pub use skin::skin_mass;

use penta_core::errors::{AppError, AppResult};
use penta_core::models::RawMeasurementSet;
use penta_core::reference::Field;

/// Read every listed field, collecting missing/non-positive names into one
/// consolidated `IncompleteMeasurement` error (never fail-fast).
pub(crate) fn require_positive(
    raw: &RawMeasurementSet,
    fields: &[Field],
) -> AppResult<Vec<f64>> {
    let mut values = Vec::with_capacity(fields.len());
    let mut offending: Vec<String> = Vec::new();

    for &field in fields {
        match raw.value_of(field) {
            Some(v) if v > 0.0 => values.push(v),
            _ => offending.push(field.name().to_owned()),
        }
    }

    if offending.is_empty() {
        Ok(values)
    } else {
        Err(AppError::incomplete_measurement(offending))
    }
}
