// ABOUTME: RawMeasurementSet: one ISAK session's inputs with named optional fields
// ABOUTME: Session header, generic field access, and follow-up structural inheritance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::{Field, Repeatability};

/// Completeness mode of a measurement session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionKind {
    /// Full ISAK profile: every field required
    Full,
    /// Follow-up: only girths and skinfolds re-measured; skeletal fields are
    /// inherited from the subject's most recent full session
    FollowUp,
}

/// Biological sex indicator for the skin-mass surface-area constants
///
/// The deployed roster is all-female; the male branch is kept for
/// completeness of the published formula set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    /// Female constants (surface 73.074, thickness 1.96)
    F,
    /// Male constants (surface 68.308, thickness 2.07)
    M,
}

/// One ISAK session's raw inputs
///
/// All measurement fields are optional at the type level; completeness is
/// enforced by the validator against the session kind. Field values are in
/// centimetres except body mass (kg) and skinfolds (mm).
///
/// Serialized field names follow the record store's canonical (Spanish
/// snake_case) column names so stored sessions round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMeasurementSet {
    /// Subject (athlete) identifier
    pub subject_id: Uuid,
    /// Date the measurements were taken
    pub measured_on: NaiveDate,
    /// Operator (ISAK technician) identifier
    pub operator: String,
    /// Full vs follow-up session
    pub session: SessionKind,
    /// Sex indicator for the skin-mass branch
    pub sex: Sex,
    /// Age in years, if known (selects the child surface-area constant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<f64>,

    // --- Basics ---
    /// Gross body mass (kg)
    #[serde(rename = "peso_bruto_kg")]
    pub body_mass_kg: Option<f64>,
    /// Standing stature (cm)
    #[serde(rename = "talla_corporal_cm")]
    pub stature_cm: Option<f64>,
    /// Sitting height (cm)
    #[serde(rename = "talla_sentado_cm")]
    pub sitting_height_cm: Option<f64>,
    /// Arm span (cm)
    #[serde(rename = "envergadura_cm")]
    pub arm_span_cm: Option<f64>,

    // --- Lengths (cm) ---
    /// Acromiale-radiale length
    #[serde(rename = "acromial_radial")]
    pub acromiale_radiale_cm: Option<f64>,
    /// Radiale-stylion length
    #[serde(rename = "radial_estiloidea")]
    pub radiale_stylion_cm: Option<f64>,
    /// Midstylion-dactylion length
    #[serde(rename = "medial_estiloidea_dactilar")]
    pub midstylion_dactylion_cm: Option<f64>,
    /// Iliospinale height
    #[serde(rename = "ilioespinal")]
    pub iliospinale_height_cm: Option<f64>,
    /// Trochanterion height
    #[serde(rename = "trocanterea")]
    pub trochanterion_height_cm: Option<f64>,
    /// Trochanterion-tibiale laterale length
    #[serde(rename = "troc_tibial_lateral")]
    pub trochanterion_tibiale_cm: Option<f64>,
    /// Tibiale laterale height
    #[serde(rename = "tibial_lateral")]
    pub tibiale_laterale_cm: Option<f64>,
    /// Tibiale mediale-sphyrion tibiale length
    #[serde(rename = "tibial_medial_maleolar_medial")]
    pub tibiale_mediale_sphyrion_cm: Option<f64>,
    /// Foot length
    #[serde(rename = "pie")]
    pub foot_length_cm: Option<f64>,

    // --- Diameters (cm) ---
    /// Biacromial breadth
    #[serde(rename = "biacromial")]
    pub biacromial_cm: Option<f64>,
    /// Transverse chest breadth
    #[serde(rename = "torax_transverso")]
    pub transverse_chest_cm: Option<f64>,
    /// Antero-posterior chest depth
    #[serde(rename = "torax_antero_posterior")]
    pub ap_chest_cm: Option<f64>,
    /// Biiliocristal breadth
    #[serde(rename = "bi_iliocrestideo")]
    pub biiliocristal_cm: Option<f64>,
    /// Humerus bicondylar breadth
    #[serde(rename = "humeral_biepicondilar")]
    pub humerus_cm: Option<f64>,
    /// Femur bicondylar breadth
    #[serde(rename = "femoral_biepicondilar")]
    pub femur_cm: Option<f64>,
    /// Wrist bistyloid breadth
    #[serde(rename = "muneca_biestiloideo")]
    pub wrist_breadth_cm: Option<f64>,
    /// Ankle bimalleolar breadth
    #[serde(rename = "tobillo_bimaleolar")]
    pub ankle_breadth_cm: Option<f64>,
    /// Hand breadth
    #[serde(rename = "mano")]
    pub hand_breadth_cm: Option<f64>,

    // --- Girths (cm) ---
    /// Head girth
    #[serde(rename = "perimetro_cabeza")]
    pub head_girth_cm: Option<f64>,
    /// Neck girth
    #[serde(rename = "perimetro_cuello")]
    pub neck_girth_cm: Option<f64>,
    /// Relaxed arm girth
    #[serde(rename = "perimetro_brazo_relajado")]
    pub relaxed_arm_girth_cm: Option<f64>,
    /// Flexed and tensed arm girth
    #[serde(rename = "perimetro_brazo_flexionado_en_tension")]
    pub flexed_arm_girth_cm: Option<f64>,
    /// Maximum forearm girth
    #[serde(rename = "perimetro_antebrazo_maximo")]
    pub forearm_girth_cm: Option<f64>,
    /// Wrist girth
    #[serde(rename = "perimetro_muneca")]
    pub wrist_girth_cm: Option<f64>,
    /// Mesosternale chest girth
    #[serde(rename = "perimetro_torax_mesoesternal")]
    pub chest_girth_cm: Option<f64>,
    /// Minimum waist girth
    #[serde(rename = "perimetro_cintura_minima")]
    pub waist_girth_cm: Option<f64>,
    /// Maximum abdominal girth
    #[serde(rename = "perimetro_abdominal_maxima")]
    pub abdominal_girth_cm: Option<f64>,
    /// Maximum hip girth
    #[serde(rename = "perimetro_cadera_maximo")]
    pub hip_girth_cm: Option<f64>,
    /// Maximum thigh girth
    #[serde(rename = "perimetro_muslo_maximo")]
    pub thigh_girth_cm: Option<f64>,
    /// Mid-thigh girth
    #[serde(rename = "perimetro_muslo_medial")]
    pub mid_thigh_girth_cm: Option<f64>,
    /// Maximum calf girth
    #[serde(rename = "perimetro_pantorrilla_maxima")]
    pub calf_girth_cm: Option<f64>,
    /// Minimum ankle girth
    #[serde(rename = "perimetro_tobillo_minima")]
    pub ankle_girth_cm: Option<f64>,

    // --- Skinfolds (mm) ---
    /// Triceps skinfold
    #[serde(rename = "pliegue_triceps")]
    pub triceps_mm: Option<f64>,
    /// Subscapular skinfold
    #[serde(rename = "pliegue_subescapular")]
    pub subscapular_mm: Option<f64>,
    /// Biceps skinfold
    #[serde(rename = "pliegue_biceps")]
    pub biceps_mm: Option<f64>,
    /// Iliac crest skinfold
    #[serde(rename = "pliegue_cresta_iliaca")]
    pub iliac_crest_mm: Option<f64>,
    /// Supraspinale skinfold
    #[serde(rename = "pliegue_supraespinal")]
    pub supraspinale_mm: Option<f64>,
    /// Abdominal skinfold
    #[serde(rename = "pliegue_abdominal")]
    pub abdominal_mm: Option<f64>,
    /// Front thigh skinfold
    #[serde(rename = "pliegue_muslo_frontal")]
    pub front_thigh_mm: Option<f64>,
    /// Medial calf skinfold
    #[serde(rename = "pliegue_pantorrilla_maxima")]
    pub medial_calf_mm: Option<f64>,
    /// Forearm skinfold
    #[serde(rename = "pliegue_antebrazo")]
    pub forearm_mm: Option<f64>,
}

impl RawMeasurementSet {
    /// Generic read access by field identifier
    #[must_use]
    pub const fn value_of(&self, field: Field) -> Option<f64> {
        match field {
            Field::BodyMass => self.body_mass_kg,
            Field::Stature => self.stature_cm,
            Field::SittingHeight => self.sitting_height_cm,
            Field::ArmSpan => self.arm_span_cm,
            Field::AcromialeRadiale => self.acromiale_radiale_cm,
            Field::RadialeStylion => self.radiale_stylion_cm,
            Field::MidstylionDactylion => self.midstylion_dactylion_cm,
            Field::IliospinaleHeight => self.iliospinale_height_cm,
            Field::TrochanterionHeight => self.trochanterion_height_cm,
            Field::TrochanterionTibialeLaterale => self.trochanterion_tibiale_cm,
            Field::TibialeLaterale => self.tibiale_laterale_cm,
            Field::TibialeMedialeSphyrion => self.tibiale_mediale_sphyrion_cm,
            Field::FootLength => self.foot_length_cm,
            Field::BiacromialBreadth => self.biacromial_cm,
            Field::TransverseChest => self.transverse_chest_cm,
            Field::AnteroPosteriorChest => self.ap_chest_cm,
            Field::BiiliocristalBreadth => self.biiliocristal_cm,
            Field::HumerusBreadth => self.humerus_cm,
            Field::FemurBreadth => self.femur_cm,
            Field::WristBreadth => self.wrist_breadth_cm,
            Field::AnkleBreadth => self.ankle_breadth_cm,
            Field::HandBreadth => self.hand_breadth_cm,
            Field::HeadGirth => self.head_girth_cm,
            Field::NeckGirth => self.neck_girth_cm,
            Field::RelaxedArmGirth => self.relaxed_arm_girth_cm,
            Field::FlexedArmGirth => self.flexed_arm_girth_cm,
            Field::ForearmGirth => self.forearm_girth_cm,
            Field::WristGirth => self.wrist_girth_cm,
            Field::ChestGirth => self.chest_girth_cm,
            Field::WaistGirth => self.waist_girth_cm,
            Field::AbdominalGirth => self.abdominal_girth_cm,
            Field::HipGirth => self.hip_girth_cm,
            Field::ThighGirth => self.thigh_girth_cm,
            Field::MidThighGirth => self.mid_thigh_girth_cm,
            Field::CalfGirth => self.calf_girth_cm,
            Field::AnkleGirth => self.ankle_girth_cm,
            Field::TricepsSkinfold => self.triceps_mm,
            Field::SubscapularSkinfold => self.subscapular_mm,
            Field::BicepsSkinfold => self.biceps_mm,
            Field::IliacCrestSkinfold => self.iliac_crest_mm,
            Field::SupraspinaleSkinfold => self.supraspinale_mm,
            Field::AbdominalSkinfold => self.abdominal_mm,
            Field::FrontThighSkinfold => self.front_thigh_mm,
            Field::MedialCalfSkinfold => self.medial_calf_mm,
            Field::ForearmSkinfold => self.forearm_mm,
        }
    }

    fn set_value(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::BodyMass => self.body_mass_kg = value,
            Field::Stature => self.stature_cm = value,
            Field::SittingHeight => self.sitting_height_cm = value,
            Field::ArmSpan => self.arm_span_cm = value,
            Field::AcromialeRadiale => self.acromiale_radiale_cm = value,
            Field::RadialeStylion => self.radiale_stylion_cm = value,
            Field::MidstylionDactylion => self.midstylion_dactylion_cm = value,
            Field::IliospinaleHeight => self.iliospinale_height_cm = value,
            Field::TrochanterionHeight => self.trochanterion_height_cm = value,
            Field::TrochanterionTibialeLaterale => self.trochanterion_tibiale_cm = value,
            Field::TibialeLaterale => self.tibiale_laterale_cm = value,
            Field::TibialeMedialeSphyrion => self.tibiale_mediale_sphyrion_cm = value,
            Field::FootLength => self.foot_length_cm = value,
            Field::BiacromialBreadth => self.biacromial_cm = value,
            Field::TransverseChest => self.transverse_chest_cm = value,
            Field::AnteroPosteriorChest => self.ap_chest_cm = value,
            Field::BiiliocristalBreadth => self.biiliocristal_cm = value,
            Field::HumerusBreadth => self.humerus_cm = value,
            Field::FemurBreadth => self.femur_cm = value,
            Field::WristBreadth => self.wrist_breadth_cm = value,
            Field::AnkleBreadth => self.ankle_breadth_cm = value,
            Field::HandBreadth => self.hand_breadth_cm = value,
            Field::HeadGirth => self.head_girth_cm = value,
            Field::NeckGirth => self.neck_girth_cm = value,
            Field::RelaxedArmGirth => self.relaxed_arm_girth_cm = value,
            Field::FlexedArmGirth => self.flexed_arm_girth_cm = value,
            Field::ForearmGirth => self.forearm_girth_cm = value,
            Field::WristGirth => self.wrist_girth_cm = value,
            Field::ChestGirth => self.chest_girth_cm = value,
            Field::WaistGirth => self.waist_girth_cm = value,
            Field::AbdominalGirth => self.abdominal_girth_cm = value,
            Field::HipGirth => self.hip_girth_cm = value,
            Field::ThighGirth => self.thigh_girth_cm = value,
            Field::MidThighGirth => self.mid_thigh_girth_cm = value,
            Field::CalfGirth => self.calf_girth_cm = value,
            Field::AnkleGirth => self.ankle_girth_cm = value,
            Field::TricepsSkinfold => self.triceps_mm = value,
            Field::SubscapularSkinfold => self.subscapular_mm = value,
            Field::BicepsSkinfold => self.biceps_mm = value,
            Field::IliacCrestSkinfold => self.iliac_crest_mm = value,
            Field::SupraspinaleSkinfold => self.supraspinale_mm = value,
            Field::AbdominalSkinfold => self.abdominal_mm = value,
            Field::FrontThighSkinfold => self.front_thigh_mm = value,
            Field::MedialCalfSkinfold => self.medial_calf_mm = value,
            Field::ForearmSkinfold => self.forearm_mm = value,
        }
    }

    /// Fill absent structural fields from a prior full session
    ///
    /// Used to resolve follow-up sessions: skeletal lengths, diameters,
    /// sitting height and arm span are treated as stable and inherited;
    /// girths, skinfolds, body mass and stature are never overwritten.
    /// Returns a new set; `self` is not mutated.
    #[must_use]
    pub fn inherit_structural_from(&self, prior: &Self) -> Self {
        let mut merged = self.clone();
        for field in Field::ALL {
            if field.repeatability() == Repeatability::Structural
                && merged.value_of(field).is_none()
            {
                merged.set_value(field, prior.value_of(field));
            }
        }
        merged
    }

    /// Sum of the six skinfolds used by the adipose model, if all present
    #[must_use]
    pub fn sum_six_skinfolds_mm(&self) -> Option<f64> {
        Some(
            self.triceps_mm?
                + self.subscapular_mm?
                + self.supraspinale_mm?
                + self.abdominal_mm?
                + self.front_thigh_mm?
                + self.medial_calf_mm?,
        )
    }

    /// Sum of the three trunk skinfolds (subscapular + supraspinale + abdominal)
    #[must_use]
    pub fn sum_three_trunk_skinfolds_mm(&self) -> Option<f64> {
        Some(self.subscapular_mm? + self.supraspinale_mm? + self.abdominal_mm?)
    }
}
