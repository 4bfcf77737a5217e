//! # Material Comparison
//!
//! Side-by-side transmission and half-value layer for several materials
//! across a grid of photon energies, at one fixed slab thickness.

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, ShieldResult};
use crate::materials::ReferenceData;
use crate::quantity::Quantity;

use super::attenuation::transmission_fraction;

/// Default energy grid for comparisons (keV)
pub const COMPARISON_ENERGIES_KEV: [f64; 6] = [50.0, 100.0, 200.0, 500.0, 1000.0, 1500.0];

/// One material's figures at one energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPoint {
    /// Material key
    pub material: String,
    /// Interpolated μ (cm⁻¹)
    pub mu_per_cm: f64,
    /// Transmission through the slab, in percent
    pub transmission_pct: f64,
    /// Half-value layer (cm)
    pub half_value_layer_cm: Quantity,
}

/// All selected materials at one energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Photon energy (keV)
    pub energy_kev: f64,
    /// One entry per selected material, in selection order
    pub points: Vec<MaterialPoint>,
}

impl ComparisonRow {
    /// Selected material with the lowest transmission at this energy
    pub fn best_shield(&self) -> Option<&MaterialPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.transmission_pct.total_cmp(&b.transmission_pct))
    }
}

/// Comparison table for one slab thickness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialComparison {
    /// Slab thickness (cm)
    pub thickness_cm: f64,
    /// One row per energy, in the order requested
    pub rows: Vec<ComparisonRow>,
}

/// Compare materials across energies.
///
/// # Errors
///
/// * `MaterialNotFound` for an unknown key
/// * `InvalidInput` for a negative thickness or a NaN energy
///
/// # Example
///
/// ```rust
/// use shield_core::calculations::comparison::{compare_materials, COMPARISON_ENERGIES_KEV};
/// use shield_core::materials::ReferenceData;
///
/// let data = ReferenceData::builtin().unwrap();
/// let keys = ["lead", "aluminum"];
/// let table = compare_materials(data, &keys, 2.0, &COMPARISON_ENERGIES_KEV).unwrap();
/// assert_eq!(table.rows.len(), 6);
/// assert_eq!(table.rows[0].best_shield().unwrap().material, "lead");
/// ```
pub fn compare_materials<S: AsRef<str>>(
    data: &ReferenceData,
    material_keys: &[S],
    thickness_cm: f64,
    energies_kev: &[f64],
) -> ShieldResult<MaterialComparison> {
    require_non_negative("thickness_cm", thickness_cm)?;

    let materials = material_keys
        .iter()
        .map(|key| data.material(key.as_ref()))
        .collect::<ShieldResult<Vec<_>>>()?;

    let mut rows = Vec::with_capacity(energies_kev.len());
    for &energy_kev in energies_kev {
        let mut points = Vec::with_capacity(materials.len());
        for material in &materials {
            let mu = material.attenuation_at(energy_kev)?;
            points.push(MaterialPoint {
                material: material.key.clone(),
                mu_per_cm: mu,
                transmission_pct: transmission_fraction(mu, thickness_cm)? * 100.0,
                half_value_layer_cm: Quantity::per_coefficient(std::f64::consts::LN_2, mu),
            });
        }
        rows.push(ComparisonRow { energy_kev, points });
    }

    Ok(MaterialComparison { thickness_cm, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> &'static ReferenceData {
        ReferenceData::builtin().unwrap()
    }

    #[test]
    fn test_comparison_shape() {
        let table =
            compare_materials(data(), &["lead", "aluminum", "water"], 2.0, &COMPARISON_ENERGIES_KEV)
                .unwrap();
        assert_eq!(table.rows.len(), 6);
        for row in &table.rows {
            assert_eq!(row.points.len(), 3);
            assert_eq!(row.points[0].material, "lead");
        }
    }

    #[test]
    fn test_lead_at_500_kev() {
        let table = compare_materials(data(), &["lead"], 2.0, &[500.0]).unwrap();
        let point = &table.rows[0].points[0];
        assert_eq!(point.mu_per_cm, 0.18);
        assert!((point.transmission_pct - 69.77).abs() < 0.01);
        assert!((point.half_value_layer_cm.finite().unwrap() - 3.85).abs() < 0.01);
    }

    #[test]
    fn test_lead_beats_water() {
        let table =
            compare_materials(data(), &["water", "lead"], 1.0, &COMPARISON_ENERGIES_KEV).unwrap();
        for row in &table.rows {
            assert_eq!(row.best_shield().unwrap().material, "lead");
        }
    }

    #[test]
    fn test_empty_selection() {
        let keys: [&str; 0] = [];
        let table = compare_materials(data(), &keys, 1.0, &COMPARISON_ENERGIES_KEV).unwrap();
        assert!(table.rows.iter().all(|row| row.points.is_empty()));
        assert!(table.rows[0].best_shield().is_none());
    }

    #[test]
    fn test_unknown_material() {
        let err = compare_materials(data(), &["lead", "kryptonite"], 1.0, &[100.0]).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_negative_thickness() {
        assert!(compare_materials(data(), &["lead"], -1.0, &[100.0]).is_err());
    }

    #[test]
    fn test_owned_keys() {
        let keys = vec!["steel".to_string(), "concrete".to_string()];
        let table = compare_materials(data(), &keys, 5.0, &[1000.0]).unwrap();
        assert_eq!(table.rows[0].points[1].material, "concrete");
    }
}
