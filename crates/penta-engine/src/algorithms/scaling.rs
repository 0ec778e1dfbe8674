// ABOUTME: Phantom allometric scaling and z-score computation against population norms
// ABOUTME: Cubic scaling for whole-body mass, linear for every other measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Allometric Scaling & Z-Scores
//!
//! Normalizes raw measurements to the fixed Phantom reference stature
//! (170.18 cm) before comparing them to population norms, following the
//! Ross/Wilson proportional-scaling convention:
//!
//! `scaled = raw * (170.18 / stature_cm) ^ p`
//!
//! with `p = 3` for the single whole-body mass term and `p = 1` for every
//! length, girth, and diameter.
//!
//! # Scientific References
//!
//! - Ross, W.D. & Wilson, N.C. (1974). "A stratagem for proportional growth
//!   assessment." *Acta Paediatrica Belgica*, 28, 169-182.
//! - Ross, W.D. & Marfell-Jones, M.J. (1991). "Kinanthropometry." In
//!   *Physiological Testing of the High-Performance Athlete* (2nd ed.).

use std::collections::BTreeMap;

use penta_core::constants::{phantom, precision, round_to};
use penta_core::errors::{AppError, AppResult};
use penta_core::models::RawMeasurementSet;
use penta_core::reference::{Field, ReferenceTable};

/// Exponent selection for the Phantom scaling factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingKind {
    /// `(170.18 / stature)^3` - the whole-body mass term only
    Cubic,
    /// `(170.18 / stature)^1` - every length/girth/diameter term
    Linear,
}

/// Scale a raw measurement to the Phantom reference stature
///
/// # Errors
///
/// Returns `InvalidInput` if `stature_cm <= 0` (division guard).
pub fn scale(raw_value: f64, stature_cm: f64, kind: ScalingKind) -> AppResult<f64> {
    if stature_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Stature must be > 0 cm for allometric scaling, got {stature_cm}"
        )));
    }

    let factor = phantom::REFERENCE_STATURE_CM / stature_cm;
    let scaled = match kind {
        ScalingKind::Cubic => raw_value * factor.powi(3),
        ScalingKind::Linear => raw_value * factor,
    };
    Ok(scaled)
}

/// Z-score of a raw measurement against its Phantom norm, rounded to 2 decimals
///
/// The whole-body mass field scales cubically; everything else linearly.
///
/// # Errors
///
/// - `MissingReference` if the field has no table entry
/// - `InvalidInput` if `stature_cm <= 0`, or if the entry's `sd <= 0`
///   (cannot occur with a table that passed load-time validation)
pub fn z_score(
    table: &ReferenceTable,
    field: Field,
    raw_value: f64,
    stature_cm: f64,
) -> AppResult<f64> {
    let entry = table.entry(field)?;
    if entry.sd <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Reference SD for '{}' must be > 0, got {}",
            field.name(),
            entry.sd
        )));
    }

    let kind = if field == Field::BodyMass {
        ScalingKind::Cubic
    } else {
        ScalingKind::Linear
    };
    let scaled = scale(raw_value, stature_cm, kind)?;

    Ok(round_to(
        (scaled - entry.mean) / entry.sd,
        precision::Z_SCORE_DECIMALS,
    ))
}

/// Per-field z-scores for every measurement present on the raw set
///
/// Fields without a recorded value are skipped; the validator has already
/// enforced the mode-appropriate required set before this runs.
///
/// # Errors
///
/// Propagates `MissingReference`/`InvalidInput` from [`z_score`].
pub fn z_score_map(
    table: &ReferenceTable,
    raw: &RawMeasurementSet,
    stature_cm: f64,
) -> AppResult<BTreeMap<Field, f64>> {
    let mut scores = BTreeMap::new();

    for field in Field::ALL {
        let Some(value) = raw.value_of(field) else {
            tracing::debug!(field = field.name(), "skipping z-score for absent field");
            continue;
        };
        scores.insert(field, z_score(table, field, value, stature_cm)?);
    }

    Ok(scores)
}
