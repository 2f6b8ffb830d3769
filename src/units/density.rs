//! Air density type for atmosphere calculations.

use std::fmt;
use std::ops::{Div, Mul};

/// Density in slug/ft\u{b3} - the canonical unit for air density in British
/// engineering units (1 slug = 1 lbf\u{b7}s\u{b2}/ft).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// Create a density in slug/ft\u{b3}.
    pub const fn slug_per_ft3(value: f64) -> Self {
        Density(value)
    }

    /// Get the density in slug/ft\u{b3}.
    pub fn as_slug_per_ft3(&self) -> f64 {
        self.0
    }
}

// Density * scalar = Density (e.g. rho0 * sigma)
impl Mul<f64> for Density {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Density(self.0 * rhs)
    }
}

// Density / Density = dimensionless ratio (sigma)
impl Div for Density {
    type Output = f64;
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} slug/ft\u{b3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_construction() {
        let d = Density::slug_per_ft3(0.00237);
        assert_eq!(d.as_slug_per_ft3(), 0.00237);
    }

    #[test]
    fn density_scaling() {
        let rho0 = Density::slug_per_ft3(0.00237);
        let rho = rho0 * 0.7860;
        assert!((rho.as_slug_per_ft3() - 0.0018628).abs() < 1e-6);
    }

    #[test]
    fn density_ratio() {
        let rho0 = Density::slug_per_ft3(0.00237);
        let rho = rho0 * 0.5;
        assert!((rho / rho0 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn density_display() {
        let d = Density::slug_per_ft3(0.002377);
        assert_eq!(format!("{}", d), "0.002377 slug/ft\u{b3}");
    }
}
