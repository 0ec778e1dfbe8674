// ABOUTME: Session validation, follow-up resolution, and anthropometric result assembly
// ABOUTME: compute_anthropometry is the single entry point consumed by the surrounding app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Record Assembly & Validation
//!
//! Orchestrates the full pipeline for one raw measurement set:
//! validation -> component masses -> reconciliation -> derived indices ->
//! [`AnthropometricResult`]. Validation collects every offending field
//! before failing so the operator sees one consolidated message.
//!
//! Two session modes exist: FULL requires every field; FOLLOW_UP re-measures
//! only girths and skinfolds, inheriting skeletal fields from the subject's
//! most recent full session via [`PriorSessionSource`].

use penta_core::constants::{precision, round_to};
use penta_core::errors::{AppError, AppResult};
use penta_core::models::{
    AnthropometricResult, ComponentMass, RawMeasurementSet, SessionKind,
};
use penta_core::reference::{Field, FieldCategory, ReferenceTable};
use uuid::Uuid;

use crate::algorithms::{
    adipose_mass, bone_mass, muscle_mass, residual_mass, skin_mass, z_score, z_score_map,
};
use crate::indices::derive_indices;
use crate::reconciliation::{
    anchor_to_bone_reference, proportional_adjustment, RawComponentMasses,
};

/// Method tag carried on every result
const METHOD: &str = "ISAK";
/// Bone-mass method tag
const BONE_METHOD: &str = "ROCHA";

/// Read-only access to a subject's most recent FULL session
///
/// Implemented by the persistence layer; the engine only ever reads from it
/// while resolving FOLLOW_UP sessions.
pub trait PriorSessionSource {
    /// The most recent FULL session's raw set for the subject, if any
    fn latest_full_session(&self, subject_id: Uuid) -> Option<RawMeasurementSet>;
}

/// Resolve a session into a computable measurement set
///
/// FULL sessions pass through unchanged. FOLLOW_UP sessions inherit their
/// structural (length/diameter/basic-skeletal) fields from the subject's
/// most recent FULL session.
///
/// # Errors
///
/// Returns `InvalidInput` if a FOLLOW_UP session has no prior FULL session
/// to inherit from.
pub fn resolve_session(
    raw: &RawMeasurementSet,
    source: &dyn PriorSessionSource,
) -> AppResult<RawMeasurementSet> {
    match raw.session {
        SessionKind::Full => Ok(raw.clone()),
        SessionKind::FollowUp => {
            let prior = source.latest_full_session(raw.subject_id).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "No prior full session found for subject {} to resolve follow-up",
                    raw.subject_id
                ))
            })?;
            Ok(raw.inherit_structural_from(&prior))
        }
    }
}

/// Fields that must be present and positive for the session mode
///
/// FULL requires everything except body mass and stature (validated
/// separately as computation-critical); FOLLOW_UP requires only the
/// re-measured girths and skinfolds.
fn required_fields(session: SessionKind) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|&field| match field.category() {
            FieldCategory::Girth | FieldCategory::Skinfold => true,
            FieldCategory::Length | FieldCategory::Diameter => session == SessionKind::Full,
            FieldCategory::Basic => {
                session == SessionKind::Full
                    && matches!(field, Field::SittingHeight | Field::ArmSpan)
            }
        })
        .collect()
}

/// Validate one measurement set at the mathematical/structural level
///
/// Order: (a) header fields; (b) mode-appropriate completeness, every
/// missing/non-positive field collected into one error; (c) stature > 0;
/// (d) weight > 0; (e) the six adipose-model skinfolds present and
/// positive. Not a physiological plausibility check.
///
/// # Errors
///
/// `InvalidInput` for header/stature/weight violations,
/// `IncompleteMeasurement` (with the full offending list) for field gaps.
pub fn validate(raw: &RawMeasurementSet) -> AppResult<()> {
    if raw.operator.trim().is_empty() {
        return Err(AppError::invalid_input(
            "Session header is missing the operator identifier".to_owned(),
        ));
    }

    let offending: Vec<String> = required_fields(raw.session)
        .into_iter()
        .filter(|&field| !raw.value_of(field).is_some_and(|v| v > 0.0))
        .map(|field| field.name().to_owned())
        .collect();
    if !offending.is_empty() {
        tracing::warn!(
            subject_id = %raw.subject_id,
            missing = offending.len(),
            "measurement set failed completeness validation"
        );
        return Err(AppError::incomplete_measurement(offending));
    }

    if !raw.stature_cm.is_some_and(|v| v > 0.0) {
        return Err(AppError::invalid_input(
            "Stature must be > 0 for the calculations".to_owned(),
        ));
    }
    if !raw.body_mass_kg.is_some_and(|v| v > 0.0) {
        return Err(AppError::invalid_input(
            "Weight must be > 0 for the calculations".to_owned(),
        ));
    }

    let missing_skinfolds: Vec<String> = crate::algorithms::adipose::SUM6_FIELDS
        .into_iter()
        .filter(|&field| !raw.value_of(field).is_some_and(|v| v > 0.0))
        .map(|field| field.name().to_owned())
        .collect();
    if !missing_skinfolds.is_empty() {
        return Err(AppError::incomplete_measurement(missing_skinfolds));
    }

    Ok(())
}

fn presented(mass: ComponentMass) -> ComponentMass {
    // Masses stay unrounded so the balance invariant holds exactly;
    // only the z-score is a pure display value.
    ComponentMass {
        z_score: mass
            .z_score
            .map(|z| round_to(z, precision::Z_SCORE_DECIMALS)),
        ..mass
    }
}

/// Compute a full anthropometric result with the built-in reference table
///
/// Convenience over [`compute_with`]; the bone-anchoring pass uses the
/// session's own step-2 bone estimate (a no-op).
///
/// # Errors
///
/// `IncompleteMeasurement`, `InvalidInput`, or `MissingReference` as
/// documented on [`compute_with`].
pub fn compute_anthropometry(raw: &RawMeasurementSet) -> AppResult<AnthropometricResult> {
    compute_with(ReferenceTable::builtin(), raw, None)
}

/// Compute a full anthropometric result
///
/// `bone_reference_kg` optionally anchors the final masses to an external
/// (trusted) bone-mass value; `None` uses the engine's own step-2 estimate.
///
/// # Errors
///
/// - `IncompleteMeasurement` listing every missing/non-positive required field
/// - `InvalidInput` for non-positive stature/weight or a bad header
/// - `MissingReference` if a measured field has no population-norm entry
pub fn compute_with(
    table: &ReferenceTable,
    raw: &RawMeasurementSet,
    bone_reference_kg: Option<f64>,
) -> AppResult<AnthropometricResult> {
    validate(raw)?;

    // Guaranteed positive by validate()
    let stature_cm = raw.stature_cm.unwrap_or_default();
    let weight_kg = raw.body_mass_kg.unwrap_or_default();

    let masses = RawComponentMasses {
        adipose: adipose_mass(raw)?,
        muscle: muscle_mass(raw)?,
        bone: bone_mass(raw)?,
        residual: residual_mass(raw)?,
        skin: skin_mass(raw)?,
    };

    let step2 = proportional_adjustment(&masses, weight_kg)?;
    let final_masses = anchor_to_bone_reference(&step2, bone_reference_kg);
    let indices = derive_indices(&final_masses, raw, stature_cm, weight_kg);

    let z_scores = z_score_map(table, raw, stature_cm)?;
    let whole_body_z = z_score(table, Field::BodyMass, weight_kg, stature_cm)?;

    let sum_six = raw.sum_six_skinfolds_mm().unwrap_or_default();

    tracing::debug!(
        subject_id = %raw.subject_id,
        structured_weight_kg = step2.structured_weight_kg,
        difference_kg = step2.difference_kg,
        "anthropometric computation complete"
    );

    Ok(AnthropometricResult {
        method: METHOD.to_owned(),
        bone_method: BONE_METHOD.to_owned(),
        subject_id: raw.subject_id,
        measured_on: raw.measured_on,
        measured_weight_kg: weight_kg,
        sum_six_skinfolds_mm: round_to(sum_six, precision::SKINFOLD_SUM_DECIMALS),
        sum_three_trunk_skinfolds_mm: raw
            .sum_three_trunk_skinfolds_mm()
            .map(|s| round_to(s, precision::SKINFOLD_SUM_DECIMALS)),
        adipose: presented(step2.adipose),
        muscle: presented(step2.muscle),
        bone: presented(step2.bone),
        residual: presented(step2.residual),
        skin: presented(step2.skin),
        structured_weight_kg: round_to(step2.structured_weight_kg, precision::MASS_DECIMALS),
        weight_difference_kg: round_to(step2.difference_kg, precision::MASS_DECIMALS),
        weight_difference_pct: round_to(step2.difference_pct, precision::PERCENT_DECIMALS),
        whole_body_z,
        final_masses,
        indices,
        z_scores,
    })
}
