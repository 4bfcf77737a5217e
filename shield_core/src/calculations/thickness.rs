//! # Required Shield Thickness
//!
//! Inverts the Beer-Lambert law: the slab thickness that removes a target
//! percentage of the beam.
//!
//! ```text
//! f = (100 − reduction%) / 100
//! x = −ln(f) / μ
//! ```
//!
//! A 100% reduction needs zero transmission, which no finite slab gives;
//! that case returns [`Quantity::Infinite`].

use crate::errors::{
    require_finite, require_percentage, require_unit_interval, ShieldError, ShieldResult,
};
use crate::quantity::Quantity;

fn validate_positive_mu(mu: f64) -> ShieldResult<()> {
    require_finite("mu_per_cm", mu)?;
    if mu <= 0.0 {
        return Err(ShieldError::invalid_input(
            "mu_per_cm",
            mu.to_string(),
            "A non-attenuating material cannot reach any reduction",
        ));
    }
    Ok(())
}

/// Thickness (cm) that achieves `target_reduction_pct` percent reduction.
///
/// # Arguments
///
/// * `mu` - Linear attenuation coefficient (cm⁻¹), must be > 0
/// * `target_reduction_pct` - Percentage of the beam to remove, in [0, 100]
///
/// # Returns
///
/// * `Ok(Quantity::Finite(x))` - x >= 0; exactly 0 for a 0% target
/// * `Ok(Quantity::Infinite)` - for a 100% target
/// * `Err(InvalidInput)` - `mu <= 0` or target out of range
///
/// # Example
///
/// ```rust
/// use shield_core::calculations::thickness::required_thickness;
///
/// // 99% reduction in lead at 100 keV (μ = 1.8 cm⁻¹)
/// let x = required_thickness(1.8, 99.0).unwrap().finite().unwrap();
/// assert!((x - 2.558).abs() < 0.001);
/// ```
pub fn required_thickness(mu: f64, target_reduction_pct: f64) -> ShieldResult<Quantity> {
    validate_positive_mu(mu)?;
    require_percentage("target_reduction_pct", target_reduction_pct)?;

    if target_reduction_pct == 100.0 {
        return Ok(Quantity::Infinite);
    }
    if target_reduction_pct == 0.0 {
        return Ok(Quantity::Finite(0.0));
    }

    let target_fraction = (100.0 - target_reduction_pct) / 100.0;
    Ok(Quantity::from_value(-target_fraction.ln() / mu))
}

/// Thickness (cm) that transmits `transmission_fraction` of the beam.
///
/// The fraction-space form of [`required_thickness`]: a fraction of 0 gives
/// [`Quantity::Infinite`], a fraction of 1 gives 0.
pub fn thickness_for_fraction(mu: f64, transmission_fraction: f64) -> ShieldResult<Quantity> {
    validate_positive_mu(mu)?;
    require_unit_interval("transmission_fraction", transmission_fraction)?;

    if transmission_fraction == 0.0 {
        return Ok(Quantity::Infinite);
    }
    if transmission_fraction == 1.0 {
        return Ok(Quantity::Finite(0.0));
    }
    Ok(Quantity::from_value(-transmission_fraction.ln() / mu))
}
