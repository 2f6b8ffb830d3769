//! Angle type for flight-path angle (gamma) and glide-angle intermediates.

use std::fmt;

/// Angle in radians - the canonical unit; degrees is the display unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// Create an angle in radians.
    pub const fn radians(value: f64) -> Self {
        Angle(value)
    }

    /// Create an angle in degrees.
    pub fn degrees(value: f64) -> Self {
        Angle(value.to_radians())
    }

    /// Get the angle in radians.
    pub fn as_radians(&self) -> f64 {
        self.0
    }

    /// Get the angle in degrees.
    pub fn as_degrees(&self) -> f64 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\u{b0}", self.as_degrees())
    }
}
