use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Time duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Time(f64);

impl Time {
    pub const fn seconds(value: f64) -> Self {
        Time(value)
    }

    pub fn minutes(value: f64) -> Self {
        Time(value * 60.0)
    }

    pub fn as_seconds(&self) -> f64 {
        self.0
    }

    pub fn as_minutes(&self) -> f64 {
        self.0 / 60.0
    }
}

impl Add for Time {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Time(self.0 * rhs)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 60.0 {
            let mins = (self.0 / 60.0).floor();
            let secs = self.0 % 60.0;
            if secs > 0.0 {
                write!(f, "{}m {:.0}s", mins, secs)
            } else {
                write!(f, "{}m", mins)
            }
        } else {
            write!(f, "{:.1}s", self.0)
        }
    }
}
