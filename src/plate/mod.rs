//! The bootstrap data plate: derivation from flight tests and its fields.
//!
//! [`DataPlate::build`] is the sole constructor. Everything downstream
//! ([`crate::composites`], [`crate::vspeeds`], [`crate::performance`])
//! references an already-built plate and never re-derives coefficients.

mod builder;
mod types;

pub use types::{
    AirframeInputs, DataPlate, DragTest, OperatingPoint, PlateOverrides, PowerSource, ThrustTest,
    WingReference, DEFAULT_C,
};
