//! # Materials Database
//!
//! Shielding materials and radiation sources used by the calculations.
//! Both are immutable reference records; the loaded set lives in a
//! [`ReferenceData`] catalog keyed by string identifiers.
//!
//! ## Example
//!
//! ```rust
//! use shield_core::materials::ReferenceData;
//!
//! let data = ReferenceData::builtin().unwrap();
//! let lead = data.material("lead").unwrap();
//!
//! // μ for Cs-137 photons, interpolated between the 500 and 1000 keV samples
//! let mu = lead.attenuation_at(662.0).unwrap();
//! println!("{}: μ = {:.3} cm⁻¹", lead.name, mu);
//! ```

pub mod catalog;
pub mod coefficients;

pub use catalog::{load_reference_data, ReferenceData};
pub use coefficients::{interpolate, CoefficientSample, CoefficientTable};

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, ShieldError, ShieldResult};

/// A shielding material with its sampled attenuation curve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "key": "lead",
///   "name": "Lead (Pb)",
///   "density": 11.34,
///   "unit_cost": 2.5,
///   "z_eff": 82.0,
///   "coefficients": { "100": 1.8, "500": 0.18, "1000": 0.08 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog key (e.g., "lead"); filled from the map key on load
    #[serde(default)]
    pub key: String,

    /// Display name (e.g., "Lead (Pb)")
    pub name: String,

    /// Density ρ (g/cm³)
    #[serde(rename = "density")]
    pub density_g_cm3: f64,

    /// Unit cost (currency per kg), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Effective atomic number, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_eff: Option<f64>,

    /// Energy (keV) -> μ (cm⁻¹)
    pub coefficients: CoefficientTable,
}

impl Material {
    /// Validate the record.
    pub fn validate(&self) -> ShieldResult<()> {
        let field = |name: &str| format!("materials.{}.{}", self.key, name);

        require_finite(&field("density"), self.density_g_cm3)?;
        if self.density_g_cm3 <= 0.0 {
            return Err(ShieldError::invalid_input(
                field("density"),
                self.density_g_cm3.to_string(),
                "Density must be positive",
            ));
        }
        if let Some(cost) = self.unit_cost {
            require_finite(&field("unit_cost"), cost)?;
            if cost < 0.0 {
                return Err(ShieldError::invalid_input(
                    field("unit_cost"),
                    cost.to_string(),
                    "Unit cost cannot be negative",
                ));
            }
        }
        if self.coefficients.is_empty() {
            return Err(ShieldError::invalid_input(
                field("coefficients"),
                "{}",
                "Material needs at least one coefficient sample",
            ));
        }
        Ok(())
    }

    /// Linear attenuation coefficient μ (cm⁻¹) at `energy_kev`
    pub fn attenuation_at(&self, energy_kev: f64) -> ShieldResult<f64> {
        self.coefficients.interpolate(energy_kev)
    }

    /// Mass attenuation coefficient μ/ρ (cm²/g) at `energy_kev`
    pub fn mass_attenuation_at(&self, energy_kev: f64) -> ShieldResult<f64> {
        let mu = self.attenuation_at(energy_kev)?;
        crate::calculations::attenuation::mass_attenuation_coefficient(mu, self.density_g_cm3)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ρ = {} g/cm³)", self.name, self.density_g_cm3)
    }
}

/// A photon source with a single nominal energy.
///
/// ## JSON Example
///
/// ```json
/// { "key": "cs137", "name": "Cs-137 (γ)", "energy_kev": 662.0, "intensity": 3000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiationSource {
    /// Catalog key (e.g., "cs137"); filled from the map key on load
    #[serde(default)]
    pub key: String,

    /// Display name
    pub name: String,

    /// Nominal photon energy (keV)
    pub energy_kev: f64,

    /// Nominal intensity / activity (arbitrary positive unit)
    pub intensity: f64,
}

impl RadiationSource {
    /// Validate the record.
    pub fn validate(&self) -> ShieldResult<()> {
        let field = |name: &str| format!("sources.{}.{}", self.key, name);

        require_finite(&field("energy_kev"), self.energy_kev)?;
        if self.energy_kev <= 0.0 {
            return Err(ShieldError::invalid_input(
                field("energy_kev"),
                self.energy_kev.to_string(),
                "Source energy must be positive",
            ));
        }
        require_finite(&field("intensity"), self.intensity)?;
        if self.intensity <= 0.0 {
            return Err(ShieldError::invalid_input(
                field("intensity"),
                self.intensity.to_string(),
                "Source intensity must be positive",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for RadiationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} keV)", self.name, self.energy_kev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Material {
        Material {
            key: "steel".to_string(),
            name: "Steel".to_string(),
            density_g_cm3: 7.87,
            unit_cost: Some(0.8),
            z_eff: Some(26.0),
            coefficients: CoefficientTable::from_pairs(&[(100.0, 0.85), (500.0, 0.12)]).unwrap(),
        }
    }

    #[test]
    fn test_attenuation_at() {
        let mat = steel();
        assert_eq!(mat.attenuation_at(100.0).unwrap(), 0.85);
        assert_eq!(mat.attenuation_at(5000.0).unwrap(), 0.12);
    }

    #[test]
    fn test_mass_attenuation() {
        let mat = steel();
        let mu_rho = mat.mass_attenuation_at(100.0).unwrap();
        assert!((mu_rho - 0.85 / 7.87).abs() < 1e-12);
    }

    #[test]
    fn test_material_validation() {
        assert!(steel().validate().is_ok());

        let mut mat = steel();
        mat.density_g_cm3 = 0.0;
        assert!(mat.validate().is_err());

        let mut mat = steel();
        mat.unit_cost = Some(-1.0);
        assert!(mat.validate().is_err());

        let mut mat = steel();
        mat.coefficients = CoefficientTable::default();
        let err = mat.validate().unwrap_err();
        assert!(err.to_string().contains("materials.steel.coefficients"));
    }

    #[test]
    fn test_source_validation() {
        let mut src = RadiationSource {
            key: "cs137".to_string(),
            name: "Cs-137 (γ)".to_string(),
            energy_kev: 662.0,
            intensity: 3000.0,
        };
        assert!(src.validate().is_ok());
        src.energy_kev = -1.0;
        assert!(src.validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(steel().to_string(), "Steel (ρ = 7.87 g/cm³)");
    }

    #[test]
    fn test_material_serialization() {
        let mat = steel();
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"density\":7.87"));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, parsed);
    }

    #[test]
    fn test_optional_cost_omitted() {
        let json = r#"{"name": "Water", "density": 1.0, "coefficients": {"100": 0.15}}"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        assert_eq!(mat.unit_cost, None);
        assert_eq!(mat.key, "");
    }
}
