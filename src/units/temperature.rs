//! Temperature type for outside air temperature (OAT).
//!
//! Only conversion to an absolute scale is exposed; the bootstrap formulas
//! never add or subtract two temperatures directly, only ratios of absolute
//! temperatures (e.g. `T_std(h) / T`), so no affine arithmetic is implemented.

use std::fmt;

/// Rankine per Fahrenheit-scale degree offset used throughout Lowry's worked
/// examples (459.7 rather than the more precise 459.67).
const RANKINE_OFFSET: f64 = 459.7;

/// Temperature in degrees Fahrenheit - the canonical unit for OAT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a temperature in degrees Fahrenheit.
    pub const fn fahrenheit(value: f64) -> Self {
        Temperature(value)
    }

    /// Create a temperature from an absolute Rankine value.
    pub fn rankine(value: f64) -> Self {
        Temperature(value - RANKINE_OFFSET)
    }

    /// Get the temperature in degrees Fahrenheit.
    pub fn as_fahrenheit(&self) -> f64 {
        self.0
    }

    /// Get the temperature on the absolute Rankine scale (\u{b0}F + 459.7).
    pub fn as_rankine(&self) -> f64 {
        self.0 + RANKINE_OFFSET
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\u{b0}F", self.0)
    }
}
