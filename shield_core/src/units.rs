//! # Unit Types
//!
//! Type-safe wrappers for the units on the slab mass/cost path. These are
//! plain `f64` newtypes: JSON serialization stays a bare number, and the
//! mass calculation can't silently mix grams with kilograms.
//!
//! ## Conventions
//!
//! - Length: centimeters (cm)
//! - Area: square centimeters (cm²)
//! - Volume: cubic centimeters (cm³)
//! - Mass: grams (g), kilograms (kg)
//! - Density: g/cm³ (bare `f64`, matches tabulated material data)
//!
//! ## Example
//!
//! ```rust
//! use shield_core::units::{Centimeters, Kilograms, SquareCentimeters, SQUARE_METER_CM2};
//!
//! let volume = Centimeters(1.0) * SquareCentimeters(SQUARE_METER_CM2);
//! let mass: Kilograms = volume.mass_at(11.34).into();
//! assert!((mass.value() - 113.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Square centimeters in one square meter
pub const SQUARE_METER_CM2: f64 = 10_000.0;

/// Grams in one kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

// ============================================================================
// Length / Area / Volume
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// Volume in cubic centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

impl Mul<SquareCentimeters> for Centimeters {
    type Output = CubicCentimeters;
    fn mul(self, rhs: SquareCentimeters) -> Self::Output {
        CubicCentimeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Mass
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / GRAMS_PER_KG)
    }
}

impl CubicCentimeters {
    /// Mass of this volume at a density in g/cm³
    pub fn mass_at(self, density_g_cm3: f64) -> Grams {
        Grams(self.0 * density_g_cm3)
    }
}

// ============================================================================
// Raw value access (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Centimeters);
impl_value!(SquareCentimeters);
impl_value!(CubicCentimeters);
impl_value!(Grams);
impl_value!(Kilograms);
