// ABOUTME: End-to-end tests for compute_anthropometry: validation, assembly, invariants
// ABOUTME: Drives the full pipeline on a worked reference subject and a follow-up session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use penta_core::errors::ErrorCode;
use penta_core::models::{Component, RawMeasurementSet, SessionKind, Sex};
use penta_core::reference::{Field, Repeatability};
use penta_engine::{
    compute_anthropometry, compute_with, resolve_session, validate, PriorSessionSource,
};
use uuid::Uuid;

/// Worked reference subject: 165 cm / 60 kg female, sum of 6 skinfolds 88 mm
fn reference_subject() -> RawMeasurementSet {
    RawMeasurementSet {
        subject_id: Uuid::new_v4(),
        measured_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        operator: "isak-l2-04".to_owned(),
        session: SessionKind::Full,
        sex: Sex::F,
        age_years: Some(24.0),
        body_mass_kg: Some(60.0),
        stature_cm: Some(165.0),
        sitting_height_cm: Some(88.0),
        arm_span_cm: Some(167.0),
        acromiale_radiale_cm: Some(31.0),
        radiale_stylion_cm: Some(24.5),
        midstylion_dactylion_cm: Some(18.5),
        iliospinale_height_cm: Some(93.0),
        trochanterion_height_cm: Some(86.0),
        trochanterion_tibiale_cm: Some(41.0),
        tibiale_laterale_cm: Some(44.0),
        tibiale_mediale_sphyrion_cm: Some(36.5),
        foot_length_cm: Some(24.5),
        biacromial_cm: Some(36.5),
        transverse_chest_cm: Some(26.0),
        ap_chest_cm: Some(17.5),
        biiliocristal_cm: Some(27.5),
        humerus_cm: Some(6.2),
        femur_cm: Some(8.9),
        wrist_breadth_cm: Some(5.0),
        ankle_breadth_cm: Some(6.4),
        hand_breadth_cm: Some(7.6),
        head_girth_cm: Some(55.0),
        neck_girth_cm: Some(31.5),
        relaxed_arm_girth_cm: Some(27.0),
        flexed_arm_girth_cm: Some(28.5),
        forearm_girth_cm: Some(24.0),
        wrist_girth_cm: Some(15.0),
        chest_girth_cm: Some(88.0),
        waist_girth_cm: Some(70.0),
        abdominal_girth_cm: Some(78.0),
        hip_girth_cm: Some(95.0),
        thigh_girth_cm: Some(56.0),
        mid_thigh_girth_cm: Some(52.0),
        calf_girth_cm: Some(35.5),
        ankle_girth_cm: Some(21.0),
        triceps_mm: Some(16.0),
        subscapular_mm: Some(12.0),
        biceps_mm: Some(8.0),
        iliac_crest_mm: Some(15.0),
        supraspinale_mm: Some(10.0),
        abdominal_mm: Some(18.0),
        front_thigh_mm: Some(22.0),
        medial_calf_mm: Some(10.0),
        forearm_mm: Some(9.0),
    }
}

/// Strip the structural fields a follow-up session would not re-measure
fn as_follow_up(mut raw: RawMeasurementSet) -> RawMeasurementSet {
    raw.session = SessionKind::FollowUp;
    raw.sitting_height_cm = None;
    raw.arm_span_cm = None;
    raw.acromiale_radiale_cm = None;
    raw.radiale_stylion_cm = None;
    raw.midstylion_dactylion_cm = None;
    raw.iliospinale_height_cm = None;
    raw.trochanterion_height_cm = None;
    raw.trochanterion_tibiale_cm = None;
    raw.tibiale_laterale_cm = None;
    raw.tibiale_mediale_sphyrion_cm = None;
    raw.foot_length_cm = None;
    raw.biacromial_cm = None;
    raw.transverse_chest_cm = None;
    raw.ap_chest_cm = None;
    raw.biiliocristal_cm = None;
    raw.humerus_cm = None;
    raw.femur_cm = None;
    raw.wrist_breadth_cm = None;
    raw.ankle_breadth_cm = None;
    raw.hand_breadth_cm = None;
    raw
}

struct FixedPrior(RawMeasurementSet);

impl PriorSessionSource for FixedPrior {
    fn latest_full_session(&self, subject_id: Uuid) -> Option<RawMeasurementSet> {
        (self.0.subject_id == subject_id).then(|| self.0.clone())
    }
}

struct NoHistory;

impl PriorSessionSource for NoHistory {
    fn latest_full_session(&self, _subject_id: Uuid) -> Option<RawMeasurementSet> {
        None
    }
}

// === Full pipeline ===

#[test]
fn full_session_computes_the_worked_reference_result() {
    let result = compute_anthropometry(&reference_subject()).unwrap();

    assert_eq!(result.method, "ISAK");
    assert_eq!(result.bone_method, "ROCHA");
    assert_eq!(result.sum_six_skinfolds_mm, 88.0);
    assert_eq!(result.sum_three_trunk_skinfolds_mm, Some(40.0));

    // component z-scores, rounded for presentation
    assert_eq!(result.adipose.z_score, Some(-0.74));
    assert_eq!(result.muscle.z_score, Some(0.81));
    assert_eq!(result.bone.z_score, Some(-0.32));
    assert_eq!(result.residual.z_score, Some(0.12));
    assert_eq!(result.skin.z_score, None);

    // structured weight and its distance from the scale reading
    assert!((result.structured_weight_kg - 61.820).abs() < 0.01);
    assert!((result.weight_difference_kg - 1.820).abs() < 0.01);
    assert!((result.weight_difference_pct - 3.03).abs() < 0.02);

    // whole-body z: 60 kg scaled cubically to the phantom stature
    assert_eq!(result.whole_body_z, 0.15);
}

#[test]
fn adjusted_components_sum_to_the_measured_weight() {
    let result = compute_anthropometry(&reference_subject()).unwrap();

    let sum: f64 = Component::ALL
        .into_iter()
        .map(|c| result.component(c).adjusted_mass_kg)
        .sum();
    assert!((sum - 60.0).abs() < 1e-6, "sum = {sum}");
    assert!((result.final_masses.five_way_sum_kg - 60.0).abs() < 1e-6);
    assert!((result.final_masses.bone_delta_kg - 0.0).abs() < 1e-12);
}

#[test]
fn a_bone_reference_moves_bone_without_changing_the_total() {
    let raw = reference_subject();
    let baseline = compute_anthropometry(&raw).unwrap();
    let anchored = compute_with(
        penta_core::reference::ReferenceTable::builtin(),
        &raw,
        Some(baseline.bone.adjusted_mass_kg + 0.5),
    )
    .unwrap();

    assert!(
        (anchored.final_masses.bone_kg - (baseline.bone.adjusted_mass_kg + 0.5)).abs() < 1e-9
    );
    assert!((anchored.final_masses.five_way_sum_kg - 60.0).abs() < 1e-6);
    assert!(anchored.final_masses.muscle_kg < baseline.final_masses.muscle_kg);
}

#[test]
fn z_scores_cover_every_recorded_field() {
    let result = compute_anthropometry(&reference_subject()).unwrap();

    assert_eq!(result.z_scores.len(), 45);
    // linear scaling for a girth, spot-checked against the norm table:
    // (55.0 * (170.18/165) - 56.0) / 1.44 = 0.5046 -> 0.50
    let z_head = result.z_scores[&Field::HeadGirth];
    assert!((z_head - 0.50).abs() < 1e-9, "z_head = {z_head}");
}

#[test]
fn derived_indices_are_populated_on_a_normal_subject() {
    let result = compute_anthropometry(&reference_subject()).unwrap();
    let indices = &result.indices;

    assert_eq!(indices.bmi, Some(22.039));
    assert_eq!(indices.waist_hip_ratio, Some(0.737));
    assert_eq!(indices.waist_stature_ratio, Some(0.424));
    assert!(indices.muscle_index.is_some());
    assert!(indices.muscle_bone_index.is_some());
    assert!(indices.ballast_index.is_some());
}

#[test]
fn identical_inputs_yield_identical_results() {
    let raw = reference_subject();
    let a = compute_anthropometry(&raw).unwrap();
    let b = compute_anthropometry(&raw).unwrap();

    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn results_serialize_under_the_wire_names() {
    let result = compute_anthropometry(&reference_subject()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    let z_scores = value["z_scores"].as_object().unwrap();
    assert!(z_scores.contains_key("pliegue_triceps"));
    assert!(z_scores.contains_key("peso_bruto_kg"));
    assert_eq!(value["method"], "ISAK");

    // and the stored document round-trips losslessly
    let back: penta_core::models::AnthropometricResult =
        serde_json::from_value(value.clone()).unwrap();
    assert_eq!(serde_json::to_value(&back).unwrap(), value);
}

// === Validation ===

#[test]
fn a_blank_operator_is_rejected_first() {
    let mut raw = reference_subject();
    raw.operator = "  ".to_owned();
    raw.triceps_mm = None; // would also fail completeness

    let err = validate(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn a_full_session_reports_every_gap_at_once() {
    let mut raw = reference_subject();
    raw.foot_length_cm = None;
    raw.neck_girth_cm = None;
    raw.medial_calf_mm = Some(0.0);

    let err = validate(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompleteMeasurement);
    assert!(err.fields.contains(&"pie".to_owned()));
    assert!(err.fields.contains(&"perimetro_cuello".to_owned()));
    assert!(err.fields.contains(&"pliegue_pantorrilla_maxima".to_owned()));
    assert_eq!(err.fields.len(), 3);
}

#[test]
fn a_missing_skinfold_names_exactly_that_field() {
    let mut raw = reference_subject();
    raw.triceps_mm = None;

    let err = compute_anthropometry(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompleteMeasurement);
    assert_eq!(err.fields, vec!["pliegue_triceps".to_owned()]);
}

#[test]
fn stature_and_weight_are_computation_critical() {
    let mut raw = reference_subject();
    raw.stature_cm = None;
    let err = validate(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("Stature"));

    let mut raw = reference_subject();
    raw.body_mass_kg = Some(0.0);
    let err = validate(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("Weight"));
}

#[test]
fn a_follow_up_session_does_not_require_structural_fields() {
    let raw = as_follow_up(reference_subject());
    assert!(validate(&raw).is_ok());

    // a full session with the same gaps is incomplete
    let mut full = as_follow_up(reference_subject());
    full.session = SessionKind::Full;
    let err = validate(&full).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompleteMeasurement);
    // 9 lengths + 9 diameters + sitting height + arm span
    assert_eq!(err.fields.len(), 20);
    assert!(err
        .fields
        .iter()
        .all(|name| Field::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .is_some_and(|f| f.repeatability() == Repeatability::Structural)));
}

// === Follow-up resolution ===

#[test]
fn a_resolved_follow_up_matches_the_full_session() {
    let full = reference_subject();
    let follow_up = as_follow_up(full.clone());
    let source = FixedPrior(full.clone());

    let merged = resolve_session(&follow_up, &source).unwrap();
    let from_full = compute_anthropometry(&full).unwrap();
    let from_merged = compute_anthropometry(&merged).unwrap();

    assert!(
        (from_full.final_masses.muscle_kg - from_merged.final_masses.muscle_kg).abs() < 1e-9
    );
    assert!(
        (from_full.structured_weight_kg - from_merged.structured_weight_kg).abs() < 1e-9
    );
}

#[test]
fn a_follow_up_without_history_cannot_be_resolved() {
    let follow_up = as_follow_up(reference_subject());

    let err = resolve_session(&follow_up, &NoHistory).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("prior full session"));
}

#[test]
fn a_full_session_resolves_to_itself() {
    let full = reference_subject();
    let resolved = resolve_session(&full, &NoHistory).unwrap();
    assert_eq!(resolved.value_of(Field::FemurBreadth), Some(8.9));
    assert_eq!(resolved.session, SessionKind::Full);
}
