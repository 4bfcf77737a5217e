//! # Dose Rate and Shield Mass/Cost
//!
//! Point-source dose estimate with inverse-square falloff, shield
//! transmission and occupancy:
//!
//! ```text
//! unshielded = S / d²
//! shielded   = unshielded · f · T
//! ```
//!
//! Shield mass and cost for a slab of given face area:
//!
//! ```text
//! volume (cm³) = thickness (cm) · area (cm²)
//! mass (kg)    = volume · ρ (g/cm³) / 1000
//! cost         = mass (kg) · unit cost (per kg)
//! ```
//!
//! The face area is always explicit. Use [`SQUARE_METER_CM2`] for a 1 m² face.
//!
//! [`SQUARE_METER_CM2`]: crate::units::SQUARE_METER_CM2

use serde::{Deserialize, Serialize};

use crate::errors::{
    require_finite, require_non_negative, require_unit_interval, ShieldError, ShieldResult,
};
use crate::units::{Centimeters, Kilograms, SquareCentimeters};

/// Dose rate at the point of interest, in the source's intensity units per cm².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseEstimate {
    /// S / d², no shield, full occupancy
    pub unshielded: f64,
    /// After shield transmission and occupancy
    pub shielded: f64,
}

impl DoseEstimate {
    /// unshielded / shielded (None when the shielded rate is 0)
    pub fn reduction_factor(&self) -> Option<f64> {
        if self.shielded > 0.0 {
            Some(self.unshielded / self.shielded)
        } else {
            None
        }
    }
}

/// Estimate the dose rate behind a shield.
///
/// # Arguments
///
/// * `source_intensity` - Source intensity, >= 0
/// * `distance_cm` - Source-to-point distance (cm), must be > 0
/// * `attenuation_fraction` - Shield transmission, in [0, 1]
/// * `occupancy_factor` - Fraction of time occupied, in [0, 1]
///
/// # Example
///
/// ```rust
/// use shield_core::calculations::dose::dose_rate;
///
/// let dose = dose_rate(1000.0, 100.0, 0.01, 1.0).unwrap();
/// assert!((dose.unshielded - 0.1).abs() < 1e-12);
/// assert!((dose.shielded - 0.001).abs() < 1e-12);
/// ```
pub fn dose_rate(
    source_intensity: f64,
    distance_cm: f64,
    attenuation_fraction: f64,
    occupancy_factor: f64,
) -> ShieldResult<DoseEstimate> {
    require_non_negative("source_intensity", source_intensity)?;
    require_finite("distance_cm", distance_cm)?;
    if distance_cm <= 0.0 {
        return Err(ShieldError::invalid_input(
            "distance_cm",
            distance_cm.to_string(),
            "Distance must be positive; the dose at the source is undefined",
        ));
    }
    require_unit_interval("attenuation_fraction", attenuation_fraction)?;
    require_unit_interval("occupancy_factor", occupancy_factor)?;

    let unshielded = source_intensity / (distance_cm * distance_cm);
    if !unshielded.is_finite() {
        return Err(ShieldError::invalid_input(
            "distance_cm",
            distance_cm.to_string(),
            "Dose rate overflows at this distance",
        ));
    }
    let shielded = unshielded * attenuation_fraction * occupancy_factor;

    Ok(DoseEstimate {
        unshielded,
        shielded,
    })
}

/// Mass and cost of a slab shield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassAndCost {
    /// Slab volume (cm³)
    pub volume_cm3: f64,
    /// Slab mass (kg)
    pub mass_kg: f64,
    /// mass_kg × unit cost
    pub cost: f64,
}

/// Compute shield mass and cost.
///
/// # Arguments
///
/// * `thickness_cm` - Slab thickness (cm)
/// * `area_cm2` - Shield face area (cm²)
/// * `density_g_cm3` - Material density (g/cm³)
/// * `unit_cost_per_kg` - Price per kilogram
///
/// All inputs must be finite and >= 0.
///
/// # Example
///
/// ```rust
/// use shield_core::calculations::dose::mass_and_cost;
/// use shield_core::units::SQUARE_METER_CM2;
///
/// // 1 cm of lead over 1 m²
/// let result = mass_and_cost(1.0, SQUARE_METER_CM2, 11.34, 2.5).unwrap();
/// assert!((result.mass_kg - 113.4).abs() < 1e-9);
/// assert!((result.cost - 283.5).abs() < 1e-9);
/// ```
pub fn mass_and_cost(
    thickness_cm: f64,
    area_cm2: f64,
    density_g_cm3: f64,
    unit_cost_per_kg: f64,
) -> ShieldResult<MassAndCost> {
    require_non_negative("thickness_cm", thickness_cm)?;
    require_non_negative("area_cm2", area_cm2)?;
    require_non_negative("density_g_cm3", density_g_cm3)?;
    require_non_negative("unit_cost_per_kg", unit_cost_per_kg)?;

    let volume = Centimeters(thickness_cm) * SquareCentimeters(area_cm2);
    let mass: Kilograms = volume.mass_at(density_g_cm3).into();

    Ok(MassAndCost {
        volume_cm3: volume.value(),
        mass_kg: mass.value(),
        cost: mass.value() * unit_cost_per_kg,
    })
}
