// ABOUTME: ISAK field taxonomy and the immutable Phantom population-norm table
// ABOUTME: Field enum with canonical wire names, per-field mean/SD/precision, load-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! # Reference Table
//!
//! Static population norms (Phantom model, Ross & Wilson 1974) for every
//! measurable ISAK field: mean, standard deviation, decimal precision, and
//! field category. Built once at process start, never mutated.
//!
//! Field identifiers keep the canonical wire names of the deployed record
//! store (Spanish snake_case, e.g. `pliegue_triceps`); error messages, the
//! per-field z-score map, and serialized results all use these names so the
//! surrounding application can match them against its own schema.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Measurement category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Whole-body basics (mass, statures, span)
    Basic,
    /// Skeletal segment lengths (cm)
    Length,
    /// Bone diameters / breadths (cm)
    Diameter,
    /// Body-segment girths (cm)
    Girth,
    /// Skinfold thicknesses (mm)
    Skinfold,
}

/// Whether a field is re-measured every session or structurally stable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeatability {
    /// Skeletal dimension, stable in adults; a follow-up session inherits it
    /// from the subject's most recent full session
    Structural,
    /// Soft-tissue measurement, re-taken at every session
    Repeatable,
}

/// Every measurable ISAK field
///
/// 4 basics, 9 lengths, 9 diameters, 14 girths, 9 skinfolds. Serialized and
/// reported under the canonical wire names of the record store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    // --- Basics ---
    /// Gross body mass (kg)
    #[serde(rename = "peso_bruto_kg")]
    BodyMass,
    /// Standing stature (cm)
    #[serde(rename = "talla_corporal_cm")]
    Stature,
    /// Sitting height (cm)
    #[serde(rename = "talla_sentado_cm")]
    SittingHeight,
    /// Arm span (cm)
    #[serde(rename = "envergadura_cm")]
    ArmSpan,

    // --- Lengths (cm) ---
    /// Acromiale-radiale (upper arm) length
    #[serde(rename = "acromial_radial")]
    AcromialeRadiale,
    /// Radiale-stylion (forearm) length
    #[serde(rename = "radial_estiloidea")]
    RadialeStylion,
    /// Midstylion-dactylion (hand) length
    #[serde(rename = "medial_estiloidea_dactilar")]
    MidstylionDactylion,
    /// Iliospinale height
    #[serde(rename = "ilioespinal")]
    IliospinaleHeight,
    /// Trochanterion height
    #[serde(rename = "trocanterea")]
    TrochanterionHeight,
    /// Trochanterion-tibiale laterale (thigh) length
    #[serde(rename = "troc_tibial_lateral")]
    TrochanterionTibialeLaterale,
    /// Tibiale laterale height
    #[serde(rename = "tibial_lateral")]
    TibialeLaterale,
    /// Tibiale mediale-sphyrion tibiale (leg) length
    #[serde(rename = "tibial_medial_maleolar_medial")]
    TibialeMedialeSphyrion,
    /// Foot length
    #[serde(rename = "pie")]
    FootLength,

    // --- Diameters (cm) ---
    /// Biacromial breadth
    #[serde(rename = "biacromial")]
    BiacromialBreadth,
    /// Transverse chest breadth
    #[serde(rename = "torax_transverso")]
    TransverseChest,
    /// Antero-posterior chest depth
    #[serde(rename = "torax_antero_posterior")]
    AnteroPosteriorChest,
    /// Biiliocristal breadth
    #[serde(rename = "bi_iliocrestideo")]
    BiiliocristalBreadth,
    /// Humerus bicondylar breadth
    #[serde(rename = "humeral_biepicondilar")]
    HumerusBreadth,
    /// Femur bicondylar breadth
    #[serde(rename = "femoral_biepicondilar")]
    FemurBreadth,
    /// Wrist bistyloid breadth
    #[serde(rename = "muneca_biestiloideo")]
    WristBreadth,
    /// Ankle bimalleolar breadth
    #[serde(rename = "tobillo_bimaleolar")]
    AnkleBreadth,
    /// Hand breadth
    #[serde(rename = "mano")]
    HandBreadth,

    // --- Girths (cm) ---
    /// Head girth
    #[serde(rename = "perimetro_cabeza")]
    HeadGirth,
    /// Neck girth
    #[serde(rename = "perimetro_cuello")]
    NeckGirth,
    /// Relaxed arm girth
    #[serde(rename = "perimetro_brazo_relajado")]
    RelaxedArmGirth,
    /// Flexed and tensed arm girth
    #[serde(rename = "perimetro_brazo_flexionado_en_tension")]
    FlexedArmGirth,
    /// Maximum forearm girth
    #[serde(rename = "perimetro_antebrazo_maximo")]
    ForearmGirth,
    /// Wrist girth
    #[serde(rename = "perimetro_muneca")]
    WristGirth,
    /// Mesosternale chest girth
    #[serde(rename = "perimetro_torax_mesoesternal")]
    ChestGirth,
    /// Minimum waist girth
    #[serde(rename = "perimetro_cintura_minima")]
    WaistGirth,
    /// Maximum abdominal girth
    #[serde(rename = "perimetro_abdominal_maxima")]
    AbdominalGirth,
    /// Maximum hip (gluteal) girth
    #[serde(rename = "perimetro_cadera_maximo")]
    HipGirth,
    /// Maximum thigh girth
    #[serde(rename = "perimetro_muslo_maximo")]
    ThighGirth,
    /// Mid-thigh girth
    #[serde(rename = "perimetro_muslo_medial")]
    MidThighGirth,
    /// Maximum calf girth
    #[serde(rename = "perimetro_pantorrilla_maxima")]
    CalfGirth,
    /// Minimum ankle girth
    #[serde(rename = "perimetro_tobillo_minima")]
    AnkleGirth,

    // --- Skinfolds (mm) ---
    /// Triceps skinfold
    #[serde(rename = "pliegue_triceps")]
    TricepsSkinfold,
    /// Subscapular skinfold
    #[serde(rename = "pliegue_subescapular")]
    SubscapularSkinfold,
    /// Biceps skinfold
    #[serde(rename = "pliegue_biceps")]
    BicepsSkinfold,
    /// Iliac crest skinfold
    #[serde(rename = "pliegue_cresta_iliaca")]
    IliacCrestSkinfold,
    /// Supraspinale skinfold
    #[serde(rename = "pliegue_supraespinal")]
    SupraspinaleSkinfold,
    /// Abdominal skinfold
    #[serde(rename = "pliegue_abdominal")]
    AbdominalSkinfold,
    /// Front thigh skinfold
    #[serde(rename = "pliegue_muslo_frontal")]
    FrontThighSkinfold,
    /// Medial calf skinfold
    #[serde(rename = "pliegue_pantorrilla_maxima")]
    MedialCalfSkinfold,
    /// Forearm skinfold
    #[serde(rename = "pliegue_antebrazo")]
    ForearmSkinfold,
}

impl Field {
    /// Every field, in presentation order
    pub const ALL: [Self; 45] = [
        Self::BodyMass,
        Self::Stature,
        Self::SittingHeight,
        Self::ArmSpan,
        Self::AcromialeRadiale,
        Self::RadialeStylion,
        Self::MidstylionDactylion,
        Self::IliospinaleHeight,
        Self::TrochanterionHeight,
        Self::TrochanterionTibialeLaterale,
        Self::TibialeLaterale,
        Self::TibialeMedialeSphyrion,
        Self::FootLength,
        Self::BiacromialBreadth,
        Self::TransverseChest,
        Self::AnteroPosteriorChest,
        Self::BiiliocristalBreadth,
        Self::HumerusBreadth,
        Self::FemurBreadth,
        Self::WristBreadth,
        Self::AnkleBreadth,
        Self::HandBreadth,
        Self::HeadGirth,
        Self::NeckGirth,
        Self::RelaxedArmGirth,
        Self::FlexedArmGirth,
        Self::ForearmGirth,
        Self::WristGirth,
        Self::ChestGirth,
        Self::WaistGirth,
        Self::AbdominalGirth,
        Self::HipGirth,
        Self::ThighGirth,
        Self::MidThighGirth,
        Self::CalfGirth,
        Self::AnkleGirth,
        Self::TricepsSkinfold,
        Self::SubscapularSkinfold,
        Self::BicepsSkinfold,
        Self::IliacCrestSkinfold,
        Self::SupraspinaleSkinfold,
        Self::AbdominalSkinfold,
        Self::FrontThighSkinfold,
        Self::MedialCalfSkinfold,
        Self::ForearmSkinfold,
    ];

    /// Canonical wire name (record-store column / error reporting name)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BodyMass => "peso_bruto_kg",
            Self::Stature => "talla_corporal_cm",
            Self::SittingHeight => "talla_sentado_cm",
            Self::ArmSpan => "envergadura_cm",
            Self::AcromialeRadiale => "acromial_radial",
            Self::RadialeStylion => "radial_estiloidea",
            Self::MidstylionDactylion => "medial_estiloidea_dactilar",
            Self::IliospinaleHeight => "ilioespinal",
            Self::TrochanterionHeight => "trocanterea",
            Self::TrochanterionTibialeLaterale => "troc_tibial_lateral",
            Self::TibialeLaterale => "tibial_lateral",
            Self::TibialeMedialeSphyrion => "tibial_medial_maleolar_medial",
            Self::FootLength => "pie",
            Self::BiacromialBreadth => "biacromial",
            Self::TransverseChest => "torax_transverso",
            Self::AnteroPosteriorChest => "torax_antero_posterior",
            Self::BiiliocristalBreadth => "bi_iliocrestideo",
            Self::HumerusBreadth => "humeral_biepicondilar",
            Self::FemurBreadth => "femoral_biepicondilar",
            Self::WristBreadth => "muneca_biestiloideo",
            Self::AnkleBreadth => "tobillo_bimaleolar",
            Self::HandBreadth => "mano",
            Self::HeadGirth => "perimetro_cabeza",
            Self::NeckGirth => "perimetro_cuello",
            Self::RelaxedArmGirth => "perimetro_brazo_relajado",
            Self::FlexedArmGirth => "perimetro_brazo_flexionado_en_tension",
            Self::ForearmGirth => "perimetro_antebrazo_maximo",
            Self::WristGirth => "perimetro_muneca",
            Self::ChestGirth => "perimetro_torax_mesoesternal",
            Self::WaistGirth => "perimetro_cintura_minima",
            Self::AbdominalGirth => "perimetro_abdominal_maxima",
            Self::HipGirth => "perimetro_cadera_maximo",
            Self::ThighGirth => "perimetro_muslo_maximo",
            Self::MidThighGirth => "perimetro_muslo_medial",
            Self::CalfGirth => "perimetro_pantorrilla_maxima",
            Self::AnkleGirth => "perimetro_tobillo_minima",
            Self::TricepsSkinfold => "pliegue_triceps",
            Self::SubscapularSkinfold => "pliegue_subescapular",
            Self::BicepsSkinfold => "pliegue_biceps",
            Self::IliacCrestSkinfold => "pliegue_cresta_iliaca",
            Self::SupraspinaleSkinfold => "pliegue_supraespinal",
            Self::AbdominalSkinfold => "pliegue_abdominal",
            Self::FrontThighSkinfold => "pliegue_muslo_frontal",
            Self::MedialCalfSkinfold => "pliegue_pantorrilla_maxima",
            Self::ForearmSkinfold => "pliegue_antebrazo",
        }
    }

    /// Measurement category
    #[must_use]
    pub const fn category(&self) -> FieldCategory {
        match self {
            Self::BodyMass | Self::Stature | Self::SittingHeight | Self::ArmSpan => {
                FieldCategory::Basic
            }
            Self::AcromialeRadiale
            | Self::RadialeStylion
            | Self::MidstylionDactylion
            | Self::IliospinaleHeight
            | Self::TrochanterionHeight
            | Self::TrochanterionTibialeLaterale
            | Self::TibialeLaterale
            | Self::TibialeMedialeSphyrion
            | Self::FootLength => FieldCategory::Length,
            Self::BiacromialBreadth
            | Self::TransverseChest
            | Self::AnteroPosteriorChest
            | Self::BiiliocristalBreadth
            | Self::HumerusBreadth
            | Self::FemurBreadth
            | Self::WristBreadth
            | Self::AnkleBreadth
            | Self::HandBreadth => FieldCategory::Diameter,
            Self::HeadGirth
            | Self::NeckGirth
            | Self::RelaxedArmGirth
            | Self::FlexedArmGirth
            | Self::ForearmGirth
            | Self::WristGirth
            | Self::ChestGirth
            | Self::WaistGirth
            | Self::AbdominalGirth
            | Self::HipGirth
            | Self::ThighGirth
            | Self::MidThighGirth
            | Self::CalfGirth
            | Self::AnkleGirth => FieldCategory::Girth,
            Self::TricepsSkinfold
            | Self::SubscapularSkinfold
            | Self::BicepsSkinfold
            | Self::IliacCrestSkinfold
            | Self::SupraspinaleSkinfold
            | Self::AbdominalSkinfold
            | Self::FrontThighSkinfold
            | Self::MedialCalfSkinfold
            | Self::ForearmSkinfold => FieldCategory::Skinfold,
        }
    }

    /// Repeatability class used by follow-up session validation
    ///
    /// Body mass and stature are re-measured every session; skeletal lengths
    /// and diameters (plus sitting height and arm span) are structural.
    #[must_use]
    pub const fn repeatability(&self) -> Repeatability {
        match self.category() {
            FieldCategory::Girth | FieldCategory::Skinfold => Repeatability::Repeatable,
            FieldCategory::Length | FieldCategory::Diameter => Repeatability::Structural,
            FieldCategory::Basic => match self {
                Self::BodyMass | Self::Stature => Repeatability::Repeatable,
                _ => Repeatability::Structural,
            },
        }
    }
}

/// Immutable population-norm record for one field
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Phantom population mean, in the field's native unit
    pub mean: f64,
    /// Phantom population standard deviation (> 0, validated at load time)
    pub sd: f64,
    /// Measurement category
    pub category: FieldCategory,
    /// Decimal places for formatting and near-zero comparison
    pub decimals: u32,
    /// Structural vs repeatable classification
    pub repeatability: Repeatability,
}

/// Phantom norms: (field, mean, sd, decimals)
///
/// Values from the Ross & Wilson (1974) Phantom tables as carried by the
/// source spreadsheet. Basics keep 2 decimals; lengths, diameters, girths
/// and skinfolds are recorded to 1 decimal per ISAK practice.
const PHANTOM_NORMS: [(Field, f64, f64, u32); 45] = [
    (Field::BodyMass, 64.58, 8.60, 2),
    (Field::Stature, 170.18, 6.29, 2),
    (Field::SittingHeight, 89.92, 4.50, 2),
    (Field::ArmSpan, 172.35, 7.41, 2),
    (Field::AcromialeRadiale, 32.53, 1.77, 1),
    (Field::RadialeStylion, 24.57, 1.37, 1),
    (Field::MidstylionDactylion, 18.85, 0.85, 1),
    (Field::IliospinaleHeight, 94.11, 4.71, 1),
    (Field::TrochanterionHeight, 86.40, 4.67, 1),
    (Field::TrochanterionTibialeLaterale, 41.37, 2.48, 1),
    (Field::TibialeLaterale, 44.82, 2.56, 1),
    (Field::TibialeMedialeSphyrion, 36.81, 2.10, 1),
    (Field::FootLength, 25.50, 1.16, 1),
    (Field::BiacromialBreadth, 38.04, 1.92, 1),
    (Field::TransverseChest, 27.92, 1.74, 1),
    (Field::AnteroPosteriorChest, 17.50, 1.38, 1),
    (Field::BiiliocristalBreadth, 28.84, 1.75, 1),
    (Field::HumerusBreadth, 6.48, 0.35, 1),
    (Field::FemurBreadth, 9.52, 0.48, 1),
    (Field::WristBreadth, 5.21, 0.28, 1),
    (Field::AnkleBreadth, 6.68, 0.36, 1),
    (Field::HandBreadth, 8.28, 0.50, 1),
    (Field::HeadGirth, 56.00, 1.44, 1),
    (Field::NeckGirth, 34.91, 1.73, 1),
    (Field::RelaxedArmGirth, 26.89, 2.33, 1),
    (Field::FlexedArmGirth, 29.41, 2.37, 1),
    (Field::ForearmGirth, 25.13, 1.41, 1),
    (Field::WristGirth, 16.35, 0.72, 1),
    (Field::ChestGirth, 87.86, 5.18, 1),
    (Field::WaistGirth, 71.91, 4.45, 1),
    (Field::AbdominalGirth, 79.06, 6.95, 1),
    (Field::HipGirth, 94.67, 5.58, 1),
    (Field::ThighGirth, 55.82, 4.23, 1),
    (Field::MidThighGirth, 52.32, 4.00, 1),
    (Field::CalfGirth, 35.25, 2.30, 1),
    (Field::AnkleGirth, 21.71, 1.33, 1),
    (Field::TricepsSkinfold, 15.40, 4.47, 1),
    (Field::SubscapularSkinfold, 17.20, 5.07, 1),
    (Field::BicepsSkinfold, 8.00, 2.00, 1),
    (Field::IliacCrestSkinfold, 22.40, 6.80, 1),
    (Field::SupraspinaleSkinfold, 15.40, 4.47, 1),
    (Field::AbdominalSkinfold, 25.40, 7.78, 1),
    (Field::FrontThighSkinfold, 27.00, 8.33, 1),
    (Field::MedialCalfSkinfold, 16.00, 4.67, 1),
    (Field::ForearmSkinfold, 9.75, 3.59, 1),
];

static BUILTIN_TABLE: LazyLock<ReferenceTable> = LazyLock::new(ReferenceTable::from_phantom_norms);

/// Read-only mapping of field -> population norm, built once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    entries: BTreeMap<Field, ReferenceEntry>,
}

impl ReferenceTable {
    /// The built-in Phantom table shared by the whole process
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    fn from_phantom_norms() -> Self {
        let entries = PHANTOM_NORMS
            .iter()
            .map(|&(field, mean, sd, decimals)| {
                (
                    field,
                    ReferenceEntry {
                        mean,
                        sd,
                        category: field.category(),
                        decimals,
                        repeatability: field.repeatability(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Build a table from externally supplied entries, validating at load time
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any entry carries a non-positive standard
    /// deviation. A table that fails here must never be used for z-scores.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Field, ReferenceEntry)>,
    ) -> AppResult<Self> {
        let table = Self {
            entries: entries.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Verify every entry has a usable standard deviation
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first field whose `sd <= 0`.
    pub fn validate(&self) -> AppResult<()> {
        for (field, entry) in &self.entries {
            if entry.sd <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Reference entry for '{}' has non-positive standard deviation {}",
                    field.name(),
                    entry.sd
                )));
            }
        }
        Ok(())
    }

    /// Look up the norm for a field
    ///
    /// # Errors
    ///
    /// Returns `MissingReference` if the field has no entry. With the
    /// built-in table this indicates a programming error, never expected in
    /// production.
    pub fn entry(&self, field: Field) -> AppResult<&ReferenceEntry> {
        self.entries
            .get(&field)
            .ok_or_else(|| AppError::missing_reference(field.name()))
    }

    /// Number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in field order
    pub fn entries(&self) -> impl Iterator<Item = (Field, &ReferenceEntry)> {
        self.entries.iter().map(|(f, e)| (*f, e))
    }
}
