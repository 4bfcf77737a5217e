//! Linear Attenuation Coefficient Tables
//!
//! A sampled μ(E) curve for one material, plus piecewise-linear
//! interpolation with flat extrapolation outside the sampled range.
//!
//! Tables serialize as a map of energy (keV, as a string key) to μ (cm⁻¹),
//! which is the shape used by the reference data files:
//!
//! ```json
//! { "100": 1.8, "500": 0.18, "1000": 0.08 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, ShieldError, ShieldResult};

/// One (energy, μ) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSample {
    /// Photon energy (keV)
    pub energy_kev: f64,
    /// Linear attenuation coefficient μ (cm⁻¹)
    pub mu_per_cm: f64,
}

/// Sampled attenuation curve, always held sorted by ascending energy.
///
/// μ normally decreases with energy, but nothing here relies on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct CoefficientTable {
    samples: Vec<CoefficientSample>,
}

impl CoefficientTable {
    /// Build a table from samples in any order.
    ///
    /// Energies must be finite and > 0; coefficients finite and >= 0.
    /// Duplicate energies are accepted.
    pub fn new(mut samples: Vec<CoefficientSample>) -> ShieldResult<Self> {
        for sample in &samples {
            require_finite("energy_kev", sample.energy_kev)?;
            if sample.energy_kev <= 0.0 {
                return Err(ShieldError::invalid_input(
                    "energy_kev",
                    sample.energy_kev.to_string(),
                    "Sample energy must be positive",
                ));
            }
            require_finite("mu_per_cm", sample.mu_per_cm)?;
            if sample.mu_per_cm < 0.0 {
                return Err(ShieldError::invalid_input(
                    "mu_per_cm",
                    sample.mu_per_cm.to_string(),
                    "Attenuation coefficient cannot be negative",
                ));
            }
        }
        // Stable: duplicate energies keep their relative order
        samples.sort_by(|a, b| a.energy_kev.total_cmp(&b.energy_kev));
        Ok(CoefficientTable { samples })
    }

    /// Build a table from `(energy_kev, mu_per_cm)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> ShieldResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(energy_kev, mu_per_cm)| CoefficientSample {
                    energy_kev,
                    mu_per_cm,
                })
                .collect(),
        )
    }

    /// Samples in ascending energy order
    pub fn samples(&self) -> &[CoefficientSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the table has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Lowest sampled energy (keV)
    pub fn min_energy_kev(&self) -> Option<f64> {
        self.samples.first().map(|s| s.energy_kev)
    }

    /// Highest sampled energy (keV)
    pub fn max_energy_kev(&self) -> Option<f64> {
        self.samples.last().map(|s| s.energy_kev)
    }

    /// Interpolated μ at `energy_kev`. See [`interpolate`].
    pub fn interpolate(&self, energy_kev: f64) -> ShieldResult<f64> {
        interpolate(self, energy_kev)
    }
}

impl TryFrom<BTreeMap<String, f64>> for CoefficientTable {
    type Error = ShieldError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut samples = Vec::with_capacity(map.len());
        for (key, mu_per_cm) in map {
            let energy_kev: f64 = key.trim().parse().map_err(|_| {
                ShieldError::invalid_input("energy_kev", key.clone(), "Energy key is not a number")
            })?;
            samples.push(CoefficientSample {
                energy_kev,
                mu_per_cm,
            });
        }
        CoefficientTable::new(samples)
    }
}

impl From<CoefficientTable> for BTreeMap<String, f64> {
    fn from(table: CoefficientTable) -> Self {
        table
            .samples
            .into_iter()
            .map(|s| (s.energy_kev.to_string(), s.mu_per_cm))
            .collect()
    }
}

/// Interpolate the linear attenuation coefficient at `energy_kev`.
///
/// - At or below the lowest sample: μ of the lowest sample.
/// - At or above the highest sample: μ of the highest sample.
/// - Otherwise linear between the bracketing samples `(e1, mu1)`, `(e2, mu2)`:
///   `mu1 + (mu2 - mu1) * (E - e1) / (e2 - e1)`.
///
/// # Errors
///
/// `InvalidInput` if the table is empty or `energy_kev` is NaN.
///
/// # Example
///
/// ```rust
/// use shield_core::materials::{interpolate, CoefficientTable};
///
/// let table = CoefficientTable::from_pairs(&[(100.0, 1.8), (500.0, 0.18)]).unwrap();
/// let mu = interpolate(&table, 300.0).unwrap();
/// assert!((mu - 0.99).abs() < 1e-12);
/// ```
pub fn interpolate(table: &CoefficientTable, energy_kev: f64) -> ShieldResult<f64> {
    if energy_kev.is_nan() {
        return Err(ShieldError::invalid_input(
            "energy_kev",
            energy_kev.to_string(),
            "Energy must be a number",
        ));
    }

    let samples = table.samples();
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ShieldError::invalid_input(
                "coefficients",
                "{}",
                "Coefficient table is empty",
            ))
        }
    };

    if energy_kev <= first.energy_kev {
        return Ok(first.mu_per_cm);
    }
    if energy_kev >= last.energy_kev {
        return Ok(last.mu_per_cm);
    }

    // first.energy < E < last.energy, so 1 <= idx <= len - 1 and
    // lo.energy <= E < hi.energy: the bracket never has zero width
    let idx = samples.partition_point(|s| s.energy_kev <= energy_kev);
    let lo = samples[idx - 1];
    let hi = samples[idx];

    let t = (energy_kev - lo.energy_kev) / (hi.energy_kev - lo.energy_kev);
    Ok(lo.mu_per_cm + (hi.mu_per_cm - lo.mu_per_cm) * t)
}
