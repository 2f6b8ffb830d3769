//! Ambient, presentation-boundary configuration.
//!
//! `AircraftOptions` is carried alongside a [`crate::plate::DataPlate`] by
//! callers that need a display unit or a pass-through stall/never-exceed
//! speed. None of its fields are read by [`crate::composites`],
//! [`crate::vspeeds`], or [`crate::performance`] - keeping those modules'
//! purity and `Send + Sync` properties obvious without inspection.

use crate::units::{Length, Speed};

/// Unit in which derived V-speeds and performance speeds are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityUnit {
    #[default]
    Knots,
    Mph,
    FeetPerSecond,
}

impl VelocityUnit {
    /// Render `speed` in this unit's canonical numeric form.
    pub fn magnitude(self, speed: Speed) -> f64 {
        match self {
            VelocityUnit::Knots => speed.as_knots(),
            VelocityUnit::Mph => speed.as_mph(),
            VelocityUnit::FeetPerSecond => speed.as_fps(),
        }
    }
}

/// Per-aircraft presentation configuration. Math-inert: the engine's core
/// types never borrow this.
#[derive(Debug, Clone, Copy, Default)]
pub struct AircraftOptions {
    pub velocity_unit: VelocityUnit,
    /// Upper altitude bound for sweeps; not consulted by the core evaluator.
    pub ceiling: Option<Length>,
    /// Stall speed, clean configuration - passed through for consumers.
    pub vs0: Option<Speed>,
    /// Never-exceed speed - passed through for consumers.
    pub vne: Option<Speed>,
    /// Optional monotone CAS\u{2192}IAS calibration, applied only at the
    /// presentation boundary; the engine works in CAS throughout.
    pub cas_to_ias: Option<fn(Speed) -> Speed>,
}

impl AircraftOptions {
    /// Apply the calibration closure if one is configured; otherwise return
    /// `cas` unchanged.
    pub fn indicated_from_calibrated(&self, cas: Speed) -> Speed {
        match self.cas_to_ias {
            Some(f) => f(cas),
            None => cas,
        }
    }
}
