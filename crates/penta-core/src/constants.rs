// ABOUTME: Phantom reference and regression constants for the five-component model
// ABOUTME: Fixed published coefficients; changing any value changes every derived result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! Anthropometric constants based on kinanthropometry research
//!
//! This module contains the fixed published constants used throughout the
//! calculation engine. The engine's contract is to replicate a specific
//! spreadsheet-derived formula set exactly, so these values are data, not
//! tunables.
//!
//! References:
//! - Ross, W.D. & Wilson, N.C. (1974). "A stratagem for proportional growth
//!   assessment." *Acta Paediatrica Belgica*, 28, 169-182. (Phantom model)
//! - Kerr, D.A. (1988). "An anthropometric method for fractionation of skin,
//!   adipose, bone, muscle and residual masses." M.Sc. thesis, Simon Fraser
//!   University. (Five-component fractionation)
//! - Rocha, M.S.L. (1975). "Peso ósseo do brasileiro de ambos os sexos de 17
//!   a 25 anos." *Arquivos de Anatomia e Antropologia*, 1, 445-451.

/// Phantom proportional-scaling reference values (Ross & Wilson, 1974)
pub mod phantom {
    /// Reference stature (cm) every measurement is scaled to before z-scoring
    pub const REFERENCE_STATURE_CM: f64 = 170.18;

    /// Reference sitting height (cm), used only by the residual-mass formula
    pub const REFERENCE_SITTING_HEIGHT_CM: f64 = 89.92;

    /// Phantom whole-body mass mean (kg)
    pub const BODY_MASS_MEAN_KG: f64 = 64.58;

    /// Phantom whole-body mass standard deviation (kg)
    pub const BODY_MASS_SD_KG: f64 = 8.6;
}

/// Adipose-mass regression (Kerr, 1988): z on the scaled sum of 6 skinfolds
pub mod adipose {
    /// Phantom mean of the sum of 6 skinfolds (mm)
    pub const SUM6_MEAN_MM: f64 = 116.41;
    /// Phantom SD of the sum of 6 skinfolds (mm)
    pub const SUM6_SD_MM: f64 = 34.79;
    /// Regression slope (kg per z unit)
    pub const SLOPE_KG: f64 = 5.85;
    /// Regression intercept (kg at z = 0)
    pub const INTERCEPT_KG: f64 = 25.6;
}

/// Muscle-mass regression (Kerr, 1988): z on skinfold-corrected girths
pub mod muscle {
    /// Phantom mean of the corrected-girth sum (cm)
    pub const GIRTH_SUM_MEAN_CM: f64 = 207.21;
    /// Phantom SD of the corrected-girth sum (cm)
    pub const GIRTH_SUM_SD_CM: f64 = 13.74;
    /// Regression slope (kg per z unit)
    pub const SLOPE_KG: f64 = 5.4;
    /// Regression intercept (kg at z = 0)
    pub const INTERCEPT_KG: f64 = 24.5;

    /// Circumference correction: girth - SKINFOLD_PI * skinfold_mm / 10
    ///
    /// The source spreadsheet uses the truncated 3.141, not `std::f64::consts::PI`.
    /// Replicated exactly; do not "fix".
    pub const SKINFOLD_PI: f64 = 3.141;
}

/// Bone-mass model (Rocha method, head + body sub-formulas summed)
pub mod bone {
    /// Head girth mean (cm)
    pub const HEAD_GIRTH_MEAN_CM: f64 = 56.0;
    /// Head girth SD (cm)
    pub const HEAD_GIRTH_SD_CM: f64 = 1.44;
    /// Head-term regression slope (kg per z unit)
    pub const HEAD_SLOPE_KG: f64 = 0.18;
    /// Head-term regression intercept (kg at z = 0)
    pub const HEAD_INTERCEPT_KG: f64 = 1.2;

    /// Phantom mean of the weighted diameter sum (cm)
    pub const DIAMETER_SUM_MEAN_CM: f64 = 98.88;
    /// Phantom SD of the weighted diameter sum (cm)
    pub const DIAMETER_SUM_SD_CM: f64 = 5.33;
    /// Body-term regression slope (kg per z unit)
    pub const BODY_SLOPE_KG: f64 = 1.34;
    /// Body-term regression intercept (kg at z = 0)
    pub const BODY_INTERCEPT_KG: f64 = 6.7;
}

/// Residual-mass regression: trunk dimensions scaled by sitting height
pub mod residual {
    /// Phantom mean of the corrected trunk sum (cm)
    pub const TRUNK_SUM_MEAN_CM: f64 = 109.35;
    /// Phantom SD of the corrected trunk sum (cm)
    pub const TRUNK_SUM_SD_CM: f64 = 7.08;
    /// Regression slope (kg per z unit)
    pub const SLOPE_KG: f64 = 1.24;
    /// Regression intercept (kg at z = 0)
    pub const INTERCEPT_KG: f64 = 6.1;

    /// Waist correction coefficient: waist - abdominal_skinfold * this
    pub const WAIST_SKINFOLD_COEFF: f64 = 0.3141;
}

/// Skin-mass surface-area model (Du Bois-type constants per sex/age)
pub mod skin {
    /// Surface-area constant for adult females
    pub const SURFACE_CONST_FEMALE: f64 = 73.074;
    /// Skin thickness (mm) for adult females
    pub const THICKNESS_FEMALE_MM: f64 = 1.96;

    /// Surface-area constant for adult males
    pub const SURFACE_CONST_MALE: f64 = 68.308;
    /// Skin thickness (mm) for adult males
    pub const THICKNESS_MALE_MM: f64 = 2.07;

    /// Surface-area constant for subjects under 12 years, either sex
    pub const SURFACE_CONST_CHILD: f64 = 70.691;

    /// Skin density factor (kg per dm^3-equivalent)
    pub const DENSITY_FACTOR: f64 = 1.05;

    /// Weight exponent of the surface-area formula
    pub const WEIGHT_EXPONENT: f64 = 0.425;
    /// Stature exponent of the surface-area formula
    pub const STATURE_EXPONENT: f64 = 0.725;

    /// Age (years) below which the child surface constant applies
    pub const CHILD_AGE_LIMIT_YEARS: f64 = 12.0;
}

/// Output rounding precisions (decimal places)
///
/// Raw-field precisions live on each [`ReferenceEntry`](crate::reference::ReferenceEntry);
/// these cover the derived quantities the UI and validation also format with.
pub mod precision {
    /// Component and aggregate masses (kg)
    pub const MASS_DECIMALS: u32 = 3;
    /// Derived indices (mass / stature^2 and ratios)
    pub const INDEX_DECIMALS: u32 = 4;
    /// Supplementary ratios (BMI, waist/hip, waist/stature)
    pub const RATIO_DECIMALS: u32 = 3;
    /// Percentages
    pub const PERCENT_DECIMALS: u32 = 2;
    /// Z-scores
    pub const Z_SCORE_DECIMALS: u32 = 2;
    /// Skinfold sums (mm)
    pub const SKINFOLD_SUM_DECIMALS: u32 = 2;
}

/// Round `value` to `decimals` decimal places (half away from zero)
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
