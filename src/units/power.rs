//! Power type for available/required power.

use std::fmt;
use std::ops::{Add, Sub};

/// 1 horsepower = 550 ft\u{b7}lbf/s.
const FT_LBF_PER_S_PER_HP: f64 = 550.0;

/// Power in ft\u{b7}lbf/s - the canonical unit; horsepower is the display unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Power(f64);

impl Power {
    /// Create a power value in ft\u{b7}lbf/s.
    pub const fn ft_lbf_per_s(value: f64) -> Self {
        Power(value)
    }

    /// Create a power value in horsepower.
    pub fn horsepower(value: f64) -> Self {
        Power(value * FT_LBF_PER_S_PER_HP)
    }

    /// Get the power in ft\u{b7}lbf/s.
    pub fn as_ft_lbf_per_s(&self) -> f64 {
        self.0
    }

    /// Get the power in horsepower.
    pub fn as_horsepower(&self) -> f64 {
        self.0 / FT_LBF_PER_S_PER_HP
    }
}

impl Add for Power {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Power(self.0 + rhs.0)
    }
}

impl Sub for Power {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Power(self.0 - rhs.0)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} HP", self.as_horsepower())
    }
}
