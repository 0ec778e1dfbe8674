// ABOUTME: Computed body-composition models: component masses, final anchored masses, indices
// ABOUTME: AnthropometricResult aggregates one session's full calculation output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::Field;

/// The five body-mass components of the Kerr fractionation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Adipose (fat) mass
    Adipose,
    /// Skeletal muscle mass
    Muscle,
    /// Bone mass (Rocha head + body method)
    Bone,
    /// Residual (organ/visceral) mass
    Residual,
    /// Skin mass
    Skin,
}

impl Component {
    /// All five components, in the model's canonical order
    pub const ALL: [Self; 5] = [
        Self::Adipose,
        Self::Muscle,
        Self::Bone,
        Self::Residual,
        Self::Skin,
    ];

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adipose => "adipose",
            Self::Muscle => "muscle",
            Self::Bone => "bone",
            Self::Residual => "residual",
            Self::Skin => "skin",
        }
    }
}

/// Result of one component-mass calculation plus its proportional adjustment
///
/// Immutable once produced: the reconciliation stage builds new values
/// rather than mutating in place, so the mass-balance invariant can be
/// checked after each stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentMass {
    /// Mass from the component formula, before any reconciliation (kg)
    pub raw_mass_kg: f64,
    /// Z-score of the component's summary statistic (absent for skin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    /// Share of structured weight, percent (absent when structured weight <= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_structured: Option<f64>,
    /// Mass removed (+) or added (-) by the proportional correction (kg)
    pub adjustment_kg: f64,
    /// Mass after the proportional correction (kg)
    pub adjusted_mass_kg: f64,
}

/// Masses after the bone-reference anchoring pass (reconciliation step 3)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FinalMasses {
    /// Final adipose mass (kg)
    pub adipose_kg: f64,
    /// Final muscle mass (kg)
    pub muscle_kg: f64,
    /// Final bone mass, equal to the reference value used (kg)
    pub bone_kg: f64,
    /// Final residual mass (kg)
    pub residual_kg: f64,
    /// Final skin mass (kg)
    pub skin_kg: f64,
    /// Sum of the four non-bone masses (kg)
    pub four_way_sum_kg: f64,
    /// Five-component total (kg)
    pub five_way_sum_kg: f64,
    /// Reference bone mass minus the step-2 adjusted bone mass (kg)
    pub bone_delta_kg: f64,
}

/// Ratios and stature-normalized indices of the final masses
///
/// Every ratio null-guards its own divisor independently: a zero bone mass
/// must yield `None` for the muscle/bone index, never a division error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedIndices {
    /// Adipose mass / stature^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adipose_index: Option<f64>,
    /// Muscle mass / stature^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_index: Option<f64>,
    /// Bone mass / stature^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_index: Option<f64>,
    /// Residual mass / stature^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual_index: Option<f64>,
    /// Skin mass / stature^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_index: Option<f64>,
    /// Muscle / bone mass ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_bone_index: Option<f64>,
    /// Muscle / (adipose + residual) ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_ballast_index: Option<f64>,
    /// ((five-way sum - muscle) * 1000) / stature_cm^2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballast_index: Option<f64>,
    /// Body mass index, weight / stature_m^2 (kg/m^2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Waist girth / hip girth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_hip_ratio: Option<f64>,
    /// Waist girth / stature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_stature_ratio: Option<f64>,
}

/// Aggregate output of one anthropometric computation
///
/// A pure computation artifact: owned by the caller, never partially
/// constructed, and fully deterministic for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropometricResult {
    /// Calculation method tag
    pub method: String,
    /// Bone-mass method tag
    pub bone_method: String,
    /// Subject the result belongs to
    pub subject_id: Uuid,
    /// Session date
    pub measured_on: NaiveDate,

    /// Measured gross body weight (kg)
    pub measured_weight_kg: f64,
    /// Sum of the six adipose-model skinfolds (mm)
    pub sum_six_skinfolds_mm: f64,
    /// Sum of the three trunk skinfolds (mm), when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_three_trunk_skinfolds_mm: Option<f64>,

    /// Adipose component
    pub adipose: ComponentMass,
    /// Muscle component
    pub muscle: ComponentMass,
    /// Bone component
    pub bone: ComponentMass,
    /// Residual component
    pub residual: ComponentMass,
    /// Skin component
    pub skin: ComponentMass,

    /// Sum of the five raw component masses (kg)
    pub structured_weight_kg: f64,
    /// Structured weight minus measured weight (kg)
    pub weight_difference_kg: f64,
    /// Difference as a percentage of measured weight
    pub weight_difference_pct: f64,
    /// Z-score of the measured weight against the whole-body reference
    pub whole_body_z: f64,

    /// Masses after the bone-reference anchoring pass
    pub final_masses: FinalMasses,
    /// Derived indices of the final masses
    pub indices: DerivedIndices,
    /// Per-field z-scores of every present raw measurement
    pub z_scores: BTreeMap<Field, f64>,
}

impl AnthropometricResult {
    /// Component mass by identifier
    #[must_use]
    pub const fn component(&self, component: Component) -> &ComponentMass {
        match component {
            Component::Adipose => &self.adipose,
            Component::Muscle => &self.muscle,
            Component::Bone => &self.bone,
            Component::Residual => &self.residual,
            Component::Skin => &self.skin,
        }
    }
}
