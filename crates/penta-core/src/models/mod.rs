// ABOUTME: Domain model module: raw measurement sets and computed composition results
// ABOUTME: Re-exports the measurement and composition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Penta Sport Science

//! Core data models for the anthropometry platform

mod composition;
mod measurement;

pub use composition::{
    AnthropometricResult, Component, ComponentMass, DerivedIndices, FinalMasses,
};
pub use measurement::{RawMeasurementSet, SessionKind, Sex};
