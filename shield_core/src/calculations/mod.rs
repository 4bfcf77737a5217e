//! # Shielding Calculations
//!
//! Every calculation here is a pure function: inputs in, a serializable
//! result (or a [`ShieldError`](crate::errors::ShieldError)) out. Nothing is
//! cached and no state is kept between calls, so any of them may be called
//! concurrently from any thread.
//!
//! ## Available Calculations
//!
//! - [`attenuation`] - Beer-Lambert transmission, HVL/TVL/mean free path, curve sampling
//! - [`thickness`] - Required thickness for a target reduction
//! - [`dose`] - Inverse-square dose rate and slab mass/cost
//! - [`comparison`] - Several materials across an energy grid
//! - [`shielding`] - Complete assessment of one shield design

pub mod attenuation;
pub mod comparison;
pub mod dose;
pub mod shielding;
pub mod thickness;

// Re-export commonly used types
pub use attenuation::{
    evaluate, mass_attenuation_coefficient, sample_curve, shielding_reduction_pct,
    transmission_fraction, AttenuationCurve, AttenuationResult, CurvePoint,
};
pub use comparison::{compare_materials, MaterialComparison, COMPARISON_ENERGIES_KEV};
pub use dose::{dose_rate, mass_and_cost, DoseEstimate, MassAndCost};
pub use shielding::{assess_shield, SafetyLevel, ShieldAssessment, ShieldSpec};
pub use thickness::{required_thickness, thickness_for_fraction};
