// ABOUTME: Mass-balance reconciliation: proportional correction then bone-reference anchoring
// ABOUTME: Pure function chain; each stage returns new immutable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Reconciliation Engine
//!
//! The five component formulas are independent regressions, so their sum
//! (the *structured weight*) generally differs from the measured body
//! weight. Reconciliation restores the balance in two passes:
//!
//! 1. **Proportional correction** — the difference is redistributed across
//!    all five components weighted by each one's share of the structured
//!    weight. Invariant: the adjusted masses sum to the measured weight.
//! 2. **Bone anchoring** — bone is the least reliable formula, so a
//!    clinician may anchor it to a trusted reference value (MOR). The bone
//!    delta is redistributed proportionally across the other four masses,
//!    each floored at zero. With no external reference the pass anchors to
//!    the step-1 adjusted bone mass and is a deliberate no-op.
//!
//! Both passes are pure functions over immutable inputs, which makes the
//! mass-balance invariant trivially testable after each stage.

use penta_core::constants::{precision, round_to};
use penta_core::errors::{AppError, AppResult};
use penta_core::models::{ComponentMass, FinalMasses};

/// Unreconciled calculator outputs for one session
#[derive(Debug, Clone, Copy)]
pub struct RawComponentMasses {
    /// Adipose mass (kg) and z-score
    pub adipose: (f64, f64),
    /// Muscle mass (kg) and z-score
    pub muscle: (f64, f64),
    /// Bone mass (kg) and body-term z-score
    pub bone: (f64, f64),
    /// Residual mass (kg) and z-score
    pub residual: (f64, f64),
    /// Skin mass (kg); no z-score defined
    pub skin: f64,
}

impl RawComponentMasses {
    /// Structured weight: sum of the five raw masses (kg)
    #[must_use]
    pub fn structured_weight_kg(&self) -> f64 {
        self.adipose.0 + self.muscle.0 + self.bone.0 + self.residual.0 + self.skin
    }
}

/// Output of the proportional-correction pass
#[derive(Debug, Clone, Copy)]
pub struct ProportionalAdjustment {
    /// Adjusted adipose component
    pub adipose: ComponentMass,
    /// Adjusted muscle component
    pub muscle: ComponentMass,
    /// Adjusted bone component
    pub bone: ComponentMass,
    /// Adjusted residual component
    pub residual: ComponentMass,
    /// Adjusted skin component
    pub skin: ComponentMass,
    /// Sum of the five raw masses (kg)
    pub structured_weight_kg: f64,
    /// Structured weight minus measured weight (kg)
    pub difference_kg: f64,
    /// Difference as a percentage of measured weight
    pub difference_pct: f64,
}

/// Summed row of the proportional-correction output
///
/// When the structured weight is positive the totals check out against the
/// inputs: shares sum to 100 percent (up to display rounding), corrections
/// sum to the structured-vs-measured difference, adjusted masses sum to the
/// measured weight.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentTotals {
    /// Summed component shares, percent (`None` when structured weight <= 0)
    pub percent: Option<f64>,
    /// Summed corrections (kg)
    pub adjustment_kg: f64,
    /// Summed adjusted masses (kg)
    pub adjusted_mass_kg: f64,
}

impl ProportionalAdjustment {
    /// Sum the five component rows into one verification row
    #[must_use]
    pub fn totals(&self) -> AdjustmentTotals {
        let components = [
            &self.adipose,
            &self.muscle,
            &self.bone,
            &self.residual,
            &self.skin,
        ];
        AdjustmentTotals {
            percent: components
                .iter()
                .map(|c| c.percent_of_structured)
                .sum::<Option<f64>>(),
            adjustment_kg: components.iter().map(|c| c.adjustment_kg).sum(),
            adjusted_mass_kg: components.iter().map(|c| c.adjusted_mass_kg).sum(),
        }
    }
}

fn adjust_one(
    raw_mass_kg: f64,
    z_score: Option<f64>,
    structured_weight_kg: f64,
    difference_kg: f64,
) -> ComponentMass {
    if structured_weight_kg <= 0.0 {
        // Degenerate: nothing to redistribute against
        return ComponentMass {
            raw_mass_kg,
            z_score,
            percent_of_structured: None,
            adjustment_kg: 0.0,
            adjusted_mass_kg: raw_mass_kg,
        };
    }

    let share = raw_mass_kg / structured_weight_kg;
    let adjustment_kg = difference_kg * share;
    ComponentMass {
        raw_mass_kg,
        z_score,
        percent_of_structured: Some(round_to(share * 100.0, precision::PERCENT_DECIMALS)),
        adjustment_kg,
        adjusted_mass_kg: raw_mass_kg - adjustment_kg,
    }
}

/// Step 2: redistribute the structured-vs-measured difference proportionally
///
/// Post-condition: the five `adjusted_mass_kg` values sum to
/// `measured_weight_kg` (within floating-point tolerance) whenever the
/// structured weight is positive. Masses are kept unrounded so the invariant
/// holds exactly; display rounding happens at result assembly.
///
/// # Errors
///
/// Returns `InvalidInput` if `measured_weight_kg <= 0`.
pub fn proportional_adjustment(
    raw: &RawComponentMasses,
    measured_weight_kg: f64,
) -> AppResult<ProportionalAdjustment> {
    if measured_weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Measured weight must be > 0 kg for reconciliation, got {measured_weight_kg}"
        )));
    }

    let structured = raw.structured_weight_kg();
    let difference_kg = structured - measured_weight_kg;
    let difference_pct = (difference_kg / measured_weight_kg) * 100.0;

    tracing::debug!(
        structured_weight_kg = structured,
        measured_weight_kg,
        difference_kg,
        "proportional mass correction"
    );

    Ok(ProportionalAdjustment {
        adipose: adjust_one(raw.adipose.0, Some(raw.adipose.1), structured, difference_kg),
        muscle: adjust_one(raw.muscle.0, Some(raw.muscle.1), structured, difference_kg),
        bone: adjust_one(raw.bone.0, Some(raw.bone.1), structured, difference_kg),
        residual: adjust_one(
            raw.residual.0,
            Some(raw.residual.1),
            structured,
            difference_kg,
        ),
        skin: adjust_one(raw.skin, None, structured, difference_kg),
        structured_weight_kg: structured,
        difference_kg,
        difference_pct,
    })
}

/// Step 3: anchor bone mass to a reference value (MOR)
///
/// `bone_reference_kg = None` anchors to the step-2 adjusted bone mass,
/// leaving every mass unchanged. A supplied reference is floored at zero;
/// its delta against the adjusted bone mass is redistributed across the
/// other four masses weighted by their four-way shares, each floored at
/// zero. If the four-way sum is not positive there is nothing to
/// redistribute against: the four masses report zero and the five-way sum
/// equals the reference bone mass.
#[must_use]
pub fn anchor_to_bone_reference(
    step2: &ProportionalAdjustment,
    bone_reference_kg: Option<f64>,
) -> FinalMasses {
    let adjusted_bone = step2.bone.adjusted_mass_kg;
    let mor = bone_reference_kg.unwrap_or(adjusted_bone).max(0.0);
    let bone_delta_kg = mor - adjusted_bone;

    let adipose = step2.adipose.adjusted_mass_kg;
    let muscle = step2.muscle.adjusted_mass_kg;
    let residual = step2.residual.adjusted_mass_kg;
    let skin = step2.skin.adjusted_mass_kg;

    let four_way = adipose + muscle + residual + skin;
    if four_way <= 0.0 {
        return FinalMasses {
            adipose_kg: 0.0,
            muscle_kg: 0.0,
            bone_kg: mor,
            residual_kg: 0.0,
            skin_kg: 0.0,
            four_way_sum_kg: 0.0,
            five_way_sum_kg: mor,
            bone_delta_kg,
        };
    }

    let corrected = |mass: f64| -> f64 { (mass - bone_delta_kg * (mass / four_way)).max(0.0) };

    let adipose_kg = corrected(adipose);
    let muscle_kg = corrected(muscle);
    let residual_kg = corrected(residual);
    let skin_kg = corrected(skin);
    let four_way_sum_kg = adipose_kg + muscle_kg + residual_kg + skin_kg;

    FinalMasses {
        adipose_kg,
        muscle_kg,
        bone_kg: mor,
        residual_kg,
        skin_kg,
        four_way_sum_kg,
        five_way_sum_kg: four_way_sum_kg + mor,
        bone_delta_kg,
    }
}
