//! # Derived Quantities
//!
//! Several derived lengths are mathematically infinite for valid inputs:
//! the half-value layer of a material with μ = 0, or the thickness needed
//! to stop 100% of the beam. Rather than leaking `f64::INFINITY` into
//! downstream arithmetic, these are returned as [`Quantity::Infinite`] and
//! callers match on it explicitly.
//!
//! ## JSON
//!
//! ```json
//! { "kind": "finite", "value": 3.85 }
//! { "kind": "infinite" }
//! ```

use serde::{Deserialize, Serialize};

/// A derived quantity that is either a finite number or explicitly infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Quantity {
    /// A finite, non-NaN value
    Finite(f64),
    /// Mathematically infinite (no finite value satisfies the request)
    Infinite,
}

impl Quantity {
    /// `Finite(value)` for a finite value, `Infinite` for an overflowed one.
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Quantity::Finite(value)
        } else {
            Quantity::Infinite
        }
    }

    /// `numerator / mu`, or `Infinite` when `mu == 0` or the quotient overflows.
    ///
    /// Callers are responsible for rejecting negative `mu` first.
    pub fn per_coefficient(numerator: f64, mu: f64) -> Self {
        if mu == 0.0 {
            Quantity::Infinite
        } else {
            Quantity::from_value(numerator / mu)
        }
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<f64> {
        match self {
            Quantity::Finite(v) => Some(v),
            Quantity::Infinite => None,
        }
    }

    /// True when this quantity is infinite
    pub fn is_infinite(self) -> bool {
        matches!(self, Quantity::Infinite)
    }

    /// Format with a fixed number of decimals, rendering infinity as "∞"
    pub fn format(self, decimals: usize) -> String {
        match self {
            Quantity::Finite(v) => format!("{:.*}", decimals, v),
            Quantity::Infinite => "∞".to_string(),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Finite(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Quantity::Infinite => write!(f, "∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_coefficient() {
        assert_eq!(Quantity::per_coefficient(1.0, 0.0), Quantity::Infinite);
        assert_eq!(Quantity::per_coefficient(1.0, 0.5), Quantity::Finite(2.0));
        // ln(2) / 1e-310 exceeds f64::MAX
        assert_eq!(Quantity::per_coefficient(std::f64::consts::LN_2, 1e-310), Quantity::Infinite);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Quantity::from_value(4.0), Quantity::Finite(4.0));
        assert_eq!(Quantity::from_value(f64::INFINITY), Quantity::Infinite);
        assert_eq!(Quantity::from_value(f64::NAN), Quantity::Infinite);
    }

    #[test]
    fn test_finite_accessor() {
        assert_eq!(Quantity::Finite(1.5).finite(), Some(1.5));
        assert_eq!(Quantity::Infinite.finite(), None);
        assert!(Quantity::Infinite.is_infinite());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.2}", Quantity::Finite(3.8508)), "3.85");
        assert_eq!(format!("{}", Quantity::Infinite), "∞");
        assert_eq!(Quantity::Finite(12.7921).format(1), "12.8");
        assert_eq!(Quantity::Infinite.format(3), "∞");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Quantity::Infinite).unwrap();
        assert_eq!(json, r#"{"kind":"infinite"}"#);

        let json = serde_json::to_string(&Quantity::Finite(2.5)).unwrap();
        assert_eq!(json, r#"{"kind":"finite","value":2.5}"#);
        let roundtrip: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Quantity::Finite(2.5));
    }
}
