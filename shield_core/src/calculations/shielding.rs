//! # Shield Assessment
//!
//! Evaluates one complete shield design: a source behind a slab of some
//! material, seen from a point at some distance. Pulls together the
//! interpolated coefficient, Beer-Lambert transmission, dose estimate,
//! the thickness needed for a target reduction, and slab mass/cost.
//!
//! ## Example
//!
//! ```rust
//! use shield_core::calculations::shielding::{assess_shield, SafetyLevel, ShieldSpec};
//! use shield_core::materials::ReferenceData;
//!
//! let data = ReferenceData::builtin().unwrap();
//! let spec = ShieldSpec::new("diagnostic_xray", "lead", 2.0);
//! let report = assess_shield(data, &spec).unwrap();
//!
//! // μ = 1.8 cm⁻¹ at 100 keV: 2 cm of lead removes 97.3% of the beam
//! assert_eq!(report.safety, SafetyLevel::Adequate);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_percentage, ShieldResult};
use crate::materials::ReferenceData;
use crate::quantity::Quantity;
use crate::units::SQUARE_METER_CM2;

use super::attenuation::{evaluate, AttenuationResult};
use super::dose::{dose_rate, mass_and_cost, DoseEstimate};
use super::thickness::required_thickness;

fn default_target_reduction_pct() -> f64 {
    99.0
}

fn default_distance_cm() -> f64 {
    100.0
}

fn default_occupancy_factor() -> f64 {
    1.0
}

fn default_area_cm2() -> f64 {
    SQUARE_METER_CM2
}

/// Caller-held shield design parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "source": "cs137",
///   "material": "lead",
///   "thickness_cm": 2.0,
///   "target_reduction_pct": 99.0,
///   "distance_cm": 100.0,
///   "occupancy_factor": 1.0,
///   "area_cm2": 10000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldSpec {
    /// Radiation source key
    pub source: String,

    /// Shield material key
    pub material: String,

    /// Slab thickness (cm)
    pub thickness_cm: f64,

    /// Desired reduction (percent, 0-100)
    #[serde(default = "default_target_reduction_pct")]
    pub target_reduction_pct: f64,

    /// Source-to-point distance (cm)
    #[serde(default = "default_distance_cm")]
    pub distance_cm: f64,

    /// Occupancy factor T (0-1)
    #[serde(default = "default_occupancy_factor")]
    pub occupancy_factor: f64,

    /// Shield face area (cm²), 1 m² unless given
    #[serde(default = "default_area_cm2")]
    pub area_cm2: f64,
}

impl ShieldSpec {
    /// Spec with default target (99%), distance (100 cm), occupancy (1.0) and area (1 m²)
    pub fn new(source: impl Into<String>, material: impl Into<String>, thickness_cm: f64) -> Self {
        ShieldSpec {
            source: source.into(),
            material: material.into(),
            thickness_cm,
            target_reduction_pct: default_target_reduction_pct(),
            distance_cm: default_distance_cm(),
            occupancy_factor: default_occupancy_factor(),
            area_cm2: default_area_cm2(),
        }
    }

    pub fn with_target_reduction(mut self, pct: f64) -> Self {
        self.target_reduction_pct = pct;
        self
    }

    pub fn with_distance(mut self, distance_cm: f64) -> Self {
        self.distance_cm = distance_cm;
        self
    }

    pub fn with_occupancy(mut self, occupancy_factor: f64) -> Self {
        self.occupancy_factor = occupancy_factor;
        self
    }

    pub fn with_area(mut self, area_cm2: f64) -> Self {
        self.area_cm2 = area_cm2;
        self
    }
}

/// Qualitative rating of a shield by its reduction percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    /// Below 95%
    Insufficient,
    /// 95% up to 99%
    Adequate,
    /// 99% up to 99.9%
    Good,
    /// 99.9% and above
    Excellent,
}

impl SafetyLevel {
    /// Rate a shielding reduction percentage
    pub fn from_reduction_pct(reduction_pct: f64) -> Self {
        if reduction_pct >= 99.9 {
            SafetyLevel::Excellent
        } else if reduction_pct >= 99.0 {
            SafetyLevel::Good
        } else if reduction_pct >= 95.0 {
            SafetyLevel::Adequate
        } else {
            SafetyLevel::Insufficient
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyLevel::Insufficient => "Insufficient",
            SafetyLevel::Adequate => "Adequate",
            SafetyLevel::Good => "Good",
            SafetyLevel::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Full evaluation of a [`ShieldSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldAssessment {
    /// Material key
    pub material: String,
    /// Source key
    pub source: String,
    /// Source photon energy (keV)
    pub energy_kev: f64,
    /// Beer-Lambert figures with I₀ = source intensity
    pub attenuation: AttenuationResult,
    /// (1 − transmission) · 100
    pub reduction_pct: f64,
    /// Dose rate at the point of interest
    pub dose: DoseEstimate,
    /// Thickness for the target reduction
    pub required_thickness_cm: Quantity,
    /// Thickness to add on top of the current slab (0 if already thick enough)
    pub additional_thickness_cm: Quantity,
    /// Slab mass (kg)
    pub mass_kg: f64,
    /// Slab cost; None when the material has no unit cost
    pub cost: Option<f64>,
    /// Rating of the current slab
    pub safety: SafetyLevel,
}

impl ShieldAssessment {
    /// True when the current slab meets the target reduction
    pub fn meets_target(&self) -> bool {
        self.additional_thickness_cm == Quantity::Finite(0.0)
    }
}

/// Evaluate a shield design against the reference data.
///
/// # Errors
///
/// * `MaterialNotFound` / `SourceNotFound` for unknown keys
/// * `InvalidInput` for out-of-range parameters
///
/// A material that is transparent at the source energy (μ = 0) still gets a
/// full report; its required thickness is [`Quantity::Infinite`] for any
/// non-zero target.
pub fn assess_shield(data: &ReferenceData, spec: &ShieldSpec) -> ShieldResult<ShieldAssessment> {
    let source = data.source(&spec.source)?;
    let material = data.material(&spec.material)?;

    let mu = material.attenuation_at(source.energy_kev)?;
    let attenuation = evaluate(mu, spec.thickness_cm, source.intensity)?;
    let fraction = attenuation.transmission_fraction;
    let reduction_pct = attenuation.reduction_pct();

    let dose = dose_rate(
        source.intensity,
        spec.distance_cm,
        fraction,
        spec.occupancy_factor,
    )?;

    let required_thickness_cm = if mu > 0.0 {
        required_thickness(mu, spec.target_reduction_pct)?
    } else {
        // Transparent at this energy: only a 0% target is reachable
        require_percentage("target_reduction_pct", spec.target_reduction_pct)?;
        if spec.target_reduction_pct == 0.0 {
            Quantity::Finite(0.0)
        } else {
            Quantity::Infinite
        }
    };
    let additional_thickness_cm = match required_thickness_cm {
        Quantity::Finite(x) => Quantity::Finite((x - spec.thickness_cm).max(0.0)),
        Quantity::Infinite => Quantity::Infinite,
    };

    let slab = mass_and_cost(
        spec.thickness_cm,
        spec.area_cm2,
        material.density_g_cm3,
        material.unit_cost.unwrap_or(0.0),
    )?;

    log::debug!(
        "Assessed {} behind {:.2} cm {}: mu={:.4}, reduction={:.3}%",
        source.key,
        spec.thickness_cm,
        material.key,
        mu,
        reduction_pct
    );

    Ok(ShieldAssessment {
        material: material.key.clone(),
        source: source.key.clone(),
        energy_kev: source.energy_kev,
        attenuation,
        reduction_pct,
        dose,
        required_thickness_cm,
        additional_thickness_cm,
        mass_kg: slab.mass_kg,
        cost: material.unit_cost.map(|_| slab.cost),
        safety: SafetyLevel::from_reduction_pct(reduction_pct),
    })
}
