//! # Attenuation (Beer-Lambert)
//!
//! Narrow-beam attenuation of a photon beam through a slab:
//!
//! ```text
//! I = I₀ · e^(−μx)
//! HVL = ln(2) / μ      TVL = ln(10) / μ      MFP = 1 / μ
//! ```
//!
//! No buildup correction is applied.
//!
//! ## Example
//!
//! ```rust
//! use shield_core::calculations::attenuation::evaluate;
//!
//! let result = evaluate(0.18, 2.0, 100.0).unwrap();
//! assert!((result.final_intensity - 69.77).abs() < 0.01);
//! println!("HVL = {:.2} cm", result.half_value_layer_cm);
//! ```

use std::f64::consts::{LN_10, LN_2};

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, require_non_negative, ShieldError, ShieldResult};
use crate::quantity::Quantity;

/// Results of a Beer-Lambert evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mu_per_cm": 0.18,
///   "thickness_cm": 2.0,
///   "initial_intensity": 100.0,
///   "final_intensity": 69.77,
///   "transmission_fraction": 0.6977,
///   "half_value_layer_cm": { "kind": "finite", "value": 3.85 },
///   "tenth_value_layer_cm": { "kind": "finite", "value": 12.79 },
///   "mean_free_path_cm": { "kind": "finite", "value": 5.56 },
///   "degenerate": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttenuationResult {
    /// Linear attenuation coefficient used (cm⁻¹)
    pub mu_per_cm: f64,

    /// Slab thickness (cm)
    pub thickness_cm: f64,

    /// Incident intensity I₀
    pub initial_intensity: f64,

    /// Transmitted intensity I
    pub final_intensity: f64,

    /// I / I₀ (0 by convention when I₀ = 0)
    pub transmission_fraction: f64,

    /// ln(2)/μ, infinite when μ = 0
    pub half_value_layer_cm: Quantity,

    /// ln(10)/μ, infinite when μ = 0
    pub tenth_value_layer_cm: Quantity,

    /// 1/μ, infinite when μ = 0
    pub mean_free_path_cm: Quantity,

    /// Set when I₀ = 0 and the transmission fraction is a convention, not a ratio
    pub degenerate: bool,
}

impl AttenuationResult {
    /// Percentage of the beam removed by the slab
    pub fn reduction_pct(&self) -> f64 {
        shielding_reduction_pct(self.transmission_fraction)
    }

    /// Thickness expressed in half-value layers (0 when μ = 0)
    pub fn half_value_layers(&self) -> f64 {
        match self.half_value_layer_cm {
            Quantity::Finite(hvl) => self.thickness_cm / hvl,
            Quantity::Infinite => 0.0,
        }
    }
}

fn validate_mu(mu: f64) -> ShieldResult<()> {
    require_finite("mu_per_cm", mu)?;
    if mu < 0.0 {
        return Err(ShieldError::invalid_input(
            "mu_per_cm",
            mu.to_string(),
            "Attenuation coefficient cannot be negative",
        ));
    }
    Ok(())
}

/// Apply the Beer-Lambert law and derive HVL, TVL and mean free path.
///
/// # Arguments
///
/// * `mu` - Linear attenuation coefficient (cm⁻¹), >= 0
/// * `thickness_cm` - Slab thickness (cm), >= 0
/// * `initial_intensity` - Incident intensity, >= 0
///
/// # Errors
///
/// `InvalidInput` for negative or non-finite inputs.
pub fn evaluate(
    mu: f64,
    thickness_cm: f64,
    initial_intensity: f64,
) -> ShieldResult<AttenuationResult> {
    validate_mu(mu)?;
    require_non_negative("thickness_cm", thickness_cm)?;
    require_non_negative("initial_intensity", initial_intensity)?;

    let final_intensity = initial_intensity * (-mu * thickness_cm).exp();

    let degenerate = initial_intensity == 0.0;
    let transmission_fraction = if degenerate {
        0.0
    } else {
        final_intensity / initial_intensity
    };

    Ok(AttenuationResult {
        mu_per_cm: mu,
        thickness_cm,
        initial_intensity,
        final_intensity,
        transmission_fraction,
        half_value_layer_cm: Quantity::per_coefficient(LN_2, mu),
        tenth_value_layer_cm: Quantity::per_coefficient(LN_10, mu),
        mean_free_path_cm: Quantity::per_coefficient(1.0, mu),
        degenerate,
    })
}

/// Fraction of the beam transmitted through `thickness_cm`: e^(−μx).
pub fn transmission_fraction(mu: f64, thickness_cm: f64) -> ShieldResult<f64> {
    validate_mu(mu)?;
    require_non_negative("thickness_cm", thickness_cm)?;
    Ok((-mu * thickness_cm).exp())
}

/// Shielding reduction as a percentage: (1 − fraction) · 100
pub fn shielding_reduction_pct(transmission_fraction: f64) -> f64 {
    (1.0 - transmission_fraction) * 100.0
}

/// Mass attenuation coefficient μ/ρ (cm²/g).
///
/// # Errors
///
/// `InvalidInput` if `mu` is negative or `density_g_cm3` is not positive.
pub fn mass_attenuation_coefficient(mu: f64, density_g_cm3: f64) -> ShieldResult<f64> {
    validate_mu(mu)?;
    require_finite("density_g_cm3", density_g_cm3)?;
    if density_g_cm3 <= 0.0 {
        return Err(ShieldError::invalid_input(
            "density_g_cm3",
            density_g_cm3.to_string(),
            "Density must be positive",
        ));
    }
    Ok(mu / density_g_cm3)
}

/// One point on an attenuation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Depth into the slab (cm)
    pub thickness_cm: f64,
    /// Intensity at that depth
    pub intensity: f64,
    /// Intensity as a percentage of I₀ (0 when I₀ = 0)
    pub percentage: f64,
}

/// Evenly spaced samples of I(x) from 0 to a maximum thickness, inclusive.
///
/// A plain iterator: clone it to walk the same curve twice.
#[derive(Debug, Clone)]
pub struct AttenuationCurve {
    mu: f64,
    initial_intensity: f64,
    max_thickness_cm: f64,
    n_points: usize,
    next: usize,
}

impl AttenuationCurve {
    fn point(&self, index: usize) -> CurvePoint {
        // Last point lands exactly on max_thickness_cm
        let thickness_cm = if index == self.n_points {
            self.max_thickness_cm
        } else {
            self.max_thickness_cm * index as f64 / self.n_points as f64
        };
        let intensity = self.initial_intensity * (-self.mu * thickness_cm).exp();
        let percentage = if self.initial_intensity > 0.0 {
            intensity / self.initial_intensity * 100.0
        } else {
            0.0
        };
        CurvePoint {
            thickness_cm,
            intensity,
            percentage,
        }
    }
}

impl Iterator for AttenuationCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.n_points {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n_points + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AttenuationCurve {}

/// Sample I(x) at `n_points + 1` evenly spaced thicknesses in `[0, max_thickness_cm]`.
///
/// With `n_points == 0` the curve holds the single point at x = 0.
///
/// # Errors
///
/// `InvalidInput` for negative or non-finite `mu`, intensity or maximum thickness.
pub fn sample_curve(
    mu: f64,
    initial_intensity: f64,
    max_thickness_cm: f64,
    n_points: usize,
) -> ShieldResult<AttenuationCurve> {
    validate_mu(mu)?;
    require_non_negative("initial_intensity", initial_intensity)?;
    require_non_negative("max_thickness_cm", max_thickness_cm)?;

    Ok(AttenuationCurve {
        mu,
        initial_intensity,
        // n_points == 0 would divide by zero below; only x = 0 is sampled then
        max_thickness_cm: if n_points == 0 { 0.0 } else { max_thickness_cm },
        n_points,
        next: 0,
    })
}
