// ABOUTME: Tests for the two reconciliation passes: proportional correction and bone anchoring
// ABOUTME: Checks the mass-balance invariant, share arithmetic, and degenerate inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use penta_core::errors::ErrorCode;
use penta_core::models::ComponentMass;
use penta_engine::reconciliation::{
    anchor_to_bone_reference, proportional_adjustment, ProportionalAdjustment,
    RawComponentMasses,
};

fn masses_summing_to_sixty() -> RawComponentMasses {
    RawComponentMasses {
        adipose: (15.0, -0.5),
        muscle: (25.0, 0.5),
        bone: (6.0, 0.1),
        residual: (6.0, 0.2),
        skin: 8.0,
    }
}

fn adjusted_sum(step2: &ProportionalAdjustment) -> f64 {
    step2.adipose.adjusted_mass_kg
        + step2.muscle.adjusted_mass_kg
        + step2.bone.adjusted_mass_kg
        + step2.residual.adjusted_mass_kg
        + step2.skin.adjusted_mass_kg
}

#[test]
fn balanced_masses_need_no_correction() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 60.0).unwrap();

    assert!((step2.difference_kg - 0.0).abs() < 1e-12);
    assert!((step2.adipose.adjustment_kg - 0.0).abs() < 1e-12);
    assert!((step2.adipose.adjusted_mass_kg - 15.0).abs() < 1e-12);
    assert_eq!(step2.adipose.percent_of_structured, Some(25.0));
    assert_eq!(step2.muscle.percent_of_structured, Some(41.67));
    assert_eq!(step2.bone.percent_of_structured, Some(10.0));
    assert_eq!(step2.skin.percent_of_structured, Some(13.33));
}

#[test]
fn adjusted_masses_always_sum_to_the_measured_weight() {
    let raw = masses_summing_to_sixty();

    for measured in [54.3, 58.0, 60.0, 63.7] {
        let step2 = proportional_adjustment(&raw, measured).unwrap();
        assert!(
            (adjusted_sum(&step2) - measured).abs() < 1e-9,
            "balance broken at measured = {measured}"
        );
    }
}

#[test]
fn the_correction_is_weighted_by_component_share() {
    // structured 60, measured 58: 2 kg removed, muscle carries 25/60 of it
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 58.0).unwrap();

    assert!((step2.difference_kg - 2.0).abs() < 1e-12);
    assert!((step2.muscle.adjustment_kg - 2.0 * (25.0 / 60.0)).abs() < 1e-12);
    assert!((step2.muscle.adjusted_mass_kg - (25.0 - 2.0 * (25.0 / 60.0))).abs() < 1e-12);
    // z-scores pass through the correction untouched
    assert_eq!(step2.muscle.z_score, Some(0.5));
    assert_eq!(step2.skin.z_score, None);
}

#[test]
fn the_totals_row_checks_out_against_the_inputs() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 58.0).unwrap();
    let totals = step2.totals();

    // shares sum to 100 percent up to the 2-decimal display rounding
    assert!((totals.percent.unwrap() - 100.0).abs() < 0.02);
    assert!((totals.adjustment_kg - step2.difference_kg).abs() < 1e-9);
    assert!((totals.adjusted_mass_kg - 58.0).abs() < 1e-9);
}

#[test]
fn the_totals_row_has_no_percent_without_a_structured_weight() {
    let zero_masses = RawComponentMasses {
        adipose: (0.0, 0.0),
        muscle: (0.0, 0.0),
        bone: (0.0, 0.0),
        residual: (0.0, 0.0),
        skin: 0.0,
    };
    let step2 = proportional_adjustment(&zero_masses, 60.0).unwrap();
    let totals = step2.totals();

    assert_eq!(totals.percent, None);
    assert!((totals.adjusted_mass_kg - 0.0).abs() < 1e-12);
}

#[test]
fn non_positive_measured_weight_is_rejected() {
    let err = proportional_adjustment(&masses_summing_to_sixty(), 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn anchoring_without_a_reference_changes_nothing() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 58.0).unwrap();
    let final_masses = anchor_to_bone_reference(&step2, None);

    assert!((final_masses.bone_delta_kg - 0.0).abs() < 1e-12);
    assert!((final_masses.bone_kg - step2.bone.adjusted_mass_kg).abs() < 1e-12);
    assert!((final_masses.muscle_kg - step2.muscle.adjusted_mass_kg).abs() < 1e-12);
    assert!((final_masses.five_way_sum_kg - 58.0).abs() < 1e-9);
}

#[test]
fn anchoring_preserves_the_five_way_total() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 60.0).unwrap();
    // trust an external bone value 1 kg above our own estimate
    let final_masses = anchor_to_bone_reference(&step2, Some(7.0));

    assert!((final_masses.bone_kg - 7.0).abs() < 1e-12);
    assert!((final_masses.bone_delta_kg - 1.0).abs() < 1e-12);
    // the extra bone kilogram came out of the other four, by share
    let four_way_before = 60.0 - 6.0;
    assert!(
        (final_masses.adipose_kg - (15.0 - 1.0 * (15.0 / four_way_before))).abs() < 1e-9
    );
    assert!((final_masses.five_way_sum_kg - 60.0).abs() < 1e-9);
}

#[test]
fn a_negative_reference_clamps_to_zero_bone() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 60.0).unwrap();
    let final_masses = anchor_to_bone_reference(&step2, Some(-2.0));

    assert!((final_masses.bone_kg - 0.0).abs() < 1e-12);
    // the freed bone mass flows back into the other four
    assert!((final_masses.five_way_sum_kg - 60.0).abs() < 1e-9);
}

#[test]
fn an_oversized_reference_floors_the_other_masses_at_zero() {
    let step2 = proportional_adjustment(&masses_summing_to_sixty(), 60.0).unwrap();
    let final_masses = anchor_to_bone_reference(&step2, Some(100.0));

    assert!((final_masses.bone_kg - 100.0).abs() < 1e-12);
    assert!(final_masses.adipose_kg >= 0.0);
    assert!(final_masses.muscle_kg >= 0.0);
    assert!(final_masses.residual_kg >= 0.0);
    assert!(final_masses.skin_kg >= 0.0);
}

#[test]
fn anchoring_with_nothing_to_redistribute_reports_the_reference_alone() {
    let zero = ComponentMass {
        raw_mass_kg: 0.0,
        z_score: None,
        percent_of_structured: None,
        adjustment_kg: 0.0,
        adjusted_mass_kg: 0.0,
    };
    let step2 = ProportionalAdjustment {
        adipose: zero,
        muscle: zero,
        bone: zero,
        residual: zero,
        skin: zero,
        structured_weight_kg: 0.0,
        difference_kg: 0.0,
        difference_pct: 0.0,
    };

    let final_masses = anchor_to_bone_reference(&step2, Some(3.0));
    assert!((final_masses.bone_kg - 3.0).abs() < 1e-12);
    assert!((final_masses.four_way_sum_kg - 0.0).abs() < 1e-12);
    assert!((final_masses.five_way_sum_kg - 3.0).abs() < 1e-12);
}
