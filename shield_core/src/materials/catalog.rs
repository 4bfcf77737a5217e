//! Reference Data Catalog
//!
//! The loaded set of materials and radiation sources. A default data set is
//! embedded in the crate and parsed on first use; callers with their own
//! data pass TOML or JSON of the same shape:
//!
//! ```toml
//! [materials.lead]
//! name = "Lead (Pb)"
//! density = 11.34
//! unit_cost = 2.5
//! coefficients = { "100" = 1.8, "500" = 0.18 }
//!
//! [sources.cs137]
//! name = "Cs-137 (γ)"
//! energy_kev = 662.0
//! intensity = 3000.0
//! ```
//!
//! Loaded data is never mutated, so a `&ReferenceData` can be shared freely
//! across threads.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Material, RadiationSource};
use crate::errors::{ShieldError, ShieldResult};

const BUILTIN_TOML: &str = include_str!("../../data/reference_data.toml");

static BUILTIN: Lazy<ShieldResult<ReferenceData>> =
    Lazy::new(|| ReferenceData::from_toml_str(BUILTIN_TOML));

/// Materials and sources keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    materials: BTreeMap<String, Material>,
    #[serde(default)]
    sources: BTreeMap<String, RadiationSource>,
}

impl ReferenceData {
    /// The embedded default data set.
    pub fn builtin() -> ShieldResult<&'static ReferenceData> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Build a catalog from records, keyed by each record's `key`.
    pub fn new(
        materials: impl IntoIterator<Item = Material>,
        sources: impl IntoIterator<Item = RadiationSource>,
    ) -> ShieldResult<Self> {
        let data = ReferenceData {
            materials: materials.into_iter().map(|m| (m.key.clone(), m)).collect(),
            sources: sources.into_iter().map(|s| (s.key.clone(), s)).collect(),
        };
        data.finish()
    }

    /// Parse and validate TOML reference data.
    pub fn from_toml_str(text: &str) -> ShieldResult<Self> {
        let data: ReferenceData =
            toml::from_str(text).map_err(|e| ShieldError::serialization(e.to_string()))?;
        data.finish()
    }

    /// Parse and validate JSON reference data.
    pub fn from_json_str(text: &str) -> ShieldResult<Self> {
        let data: ReferenceData =
            serde_json::from_str(text).map_err(|e| ShieldError::serialization(e.to_string()))?;
        data.finish()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ShieldResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ShieldError::serialization(e.to_string()))
    }

    /// Copy map keys into records, then validate every record.
    fn finish(mut self) -> ShieldResult<Self> {
        for (key, material) in self.materials.iter_mut() {
            material.key = key.clone();
            material.validate()?;
        }
        for (key, source) in self.sources.iter_mut() {
            source.key = key.clone();
            source.validate()?;
        }
        log::debug!(
            "Loaded reference data: {} materials, {} sources",
            self.materials.len(),
            self.sources.len()
        );
        Ok(self)
    }

    /// Look up a material by key
    pub fn material(&self, key: &str) -> ShieldResult<&Material> {
        self.materials
            .get(key)
            .ok_or_else(|| ShieldError::material_not_found(key))
    }

    /// Look up a radiation source by key
    pub fn source(&self, key: &str) -> ShieldResult<&RadiationSource> {
        self.sources
            .get(key)
            .ok_or_else(|| ShieldError::source_not_found(key))
    }

    /// All materials in key order
    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    /// All sources in key order
    pub fn sources(&self) -> impl Iterator<Item = &RadiationSource> {
        self.sources.values()
    }

    /// Number of materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

/// Load reference data from a file.
///
/// `.json` files are parsed as JSON; anything else as TOML.
pub fn load_reference_data(path: &Path) -> ShieldResult<ReferenceData> {
    let text = fs::read_to_string(path)
        .map_err(|e| ShieldError::file_error("read", path.display().to_string(), e.to_string()))?;

    log::debug!("Reading reference data from {}", path.display());

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        ReferenceData::from_json_str(&text)
    } else {
        ReferenceData::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let data = ReferenceData::builtin().unwrap();
        assert_eq!(data.material_count(), 6);
        assert_eq!(data.source_count(), 5);
        for mat in data.materials() {
            assert!(!mat.coefficients.is_empty(), "{} has no samples", mat.key);
            assert!(mat.validate().is_ok());
        }
    }

    #[test]
    fn test_builtin_keys_filled() {
        let data = ReferenceData::builtin().unwrap();
        let lead = data.material("lead").unwrap();
        assert_eq!(lead.key, "lead");
        assert_eq!(lead.name, "Lead (Pb)");
        assert_eq!(lead.density_g_cm3, 11.34);
        assert_eq!(lead.unit_cost, Some(2.5));

        let cs = data.source("cs137").unwrap();
        assert_eq!(cs.key, "cs137");
        assert_eq!(cs.energy_kev, 662.0);
    }

    #[test]
    fn test_water_has_no_cost() {
        let data = ReferenceData::builtin().unwrap();
        assert_eq!(data.material("water").unwrap().unit_cost, None);
    }

    #[test]
    fn test_unknown_keys() {
        let data = ReferenceData::builtin().unwrap();
        assert_eq!(
            data.material("unobtainium").unwrap_err().error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(data.source("am241").unwrap_err().error_code(), "SOURCE_NOT_FOUND");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "materials": {
                "lead": { "name": "Lead", "density": 11.34, "coefficients": { "100": 1.8 } }
            }
        }"#;
        let data = ReferenceData::from_json_str(json).unwrap();
        assert_eq!(data.material_count(), 1);
        assert_eq!(data.source_count(), 0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let toml = r#"
            [materials.void]
            name = "Void"
            density = 1.0
            coefficients = {}
        "#;
        let err = ReferenceData::from_toml_str(toml).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_toml() {
        let err = ReferenceData::from_toml_str("[materials.lead\nname = ").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_json_roundtrip() {
        let data = ReferenceData::builtin().unwrap();
        let json = data.to_json().unwrap();
        let parsed = ReferenceData::from_json_str(&json).unwrap();
        assert_eq!(&parsed, data);
    }

    #[test]
    fn test_new_from_records() {
        let data = ReferenceData::builtin().unwrap();
        let subset = ReferenceData::new(
            data.materials().filter(|m| m.key == "lead").cloned(),
            data.sources().cloned(),
        )
        .unwrap();
        assert_eq!(subset.material_count(), 1);
        assert_eq!(subset.source_count(), 5);
    }

    #[test]
    fn test_missing_file() {
        let err = load_reference_data(Path::new("/nonexistent/reference.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
