//! Type-safe unit types for physical quantities.
//!
//! Every externally visible numeric value in this crate carries a physical
//! dimension. Each dimension is its own newtype wrapping a canonical
//! British-engineering-unit `f64`, with named constructors/accessors for the
//! other units the domain actually uses (knots, horsepower, rpm, ...).
//! Arithmetic is only implemented between same-dimension values, or between a
//! dimensional value and a bare scalar, so dimensionally incoherent
//! expressions fail to compile rather than silently producing wrong numbers.

mod angle;
mod angular_speed;
mod area;
mod density;
mod fmt;
mod force;
mod length;
mod power;
mod ratio;
mod temperature;
mod time;
mod torque;
mod velocity;

pub use angle::Angle;
pub use angular_speed::AngularSpeed;
pub use area::Area;
pub use density::Density;
pub use force::Force;
pub use length::Length;
pub use power::Power;
pub use ratio::Ratio;
pub use temperature::Temperature;
pub use time::Time;
pub use torque::Torque;
pub use velocity::Speed;
