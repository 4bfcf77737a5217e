//! # shield_core - Radiation Attenuation & Shielding Engine
//!
//! `shield_core` computes how X-ray and gamma-ray intensity falls off through
//! matter and sizes slab shields. All inputs and outputs are
//! JSON-serializable so a front-end (CLI, web view, chart) can drive it with
//! plain data.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Explicit infinity**: Infinite derived lengths are [`Quantity::Infinite`],
//!   never a float artifact
//! - **Rich Errors**: Structured error types, not just strings
//! - **Read-only data**: Materials and sources are loaded once and never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use shield_core::{evaluate, required_thickness, ReferenceData};
//!
//! let data = ReferenceData::builtin().unwrap();
//! let mu = data.material("lead").unwrap().attenuation_at(662.0).unwrap();
//!
//! let result = evaluate(mu, 2.0, 100.0).unwrap();
//! println!("Transmitted: {:.2}", result.final_intensity);
//! println!("HVL: {:.2} cm", result.half_value_layer_cm);
//!
//! let x = required_thickness(mu, 99.0).unwrap();
//! println!("99% reduction needs {:.2} cm", x);
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Materials, sources, coefficient tables and interpolation
//! - [`calculations`] - Attenuation, thickness, dose/cost, comparison, assessment
//! - [`quantity`] - Finite-or-infinite derived quantities
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod quantity;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    assess_shield, compare_materials, dose_rate, evaluate, mass_and_cost, required_thickness,
    sample_curve, AttenuationResult, DoseEstimate, MassAndCost, SafetyLevel, ShieldAssessment,
    ShieldSpec,
};
pub use errors::{ShieldError, ShieldResult};
pub use materials::{
    interpolate, load_reference_data, CoefficientTable, Material, RadiationSource, ReferenceData,
};
pub use quantity::Quantity;
