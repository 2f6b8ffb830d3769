//! Typed error hierarchy for the bootstrap performance engine.

use std::fmt;

/// Errors that can occur while building a [`crate::plate::DataPlate`] or
/// evaluating the pure atmosphere functions.
///
/// Numerical non-solutions (a V-speed with no real root at/above the
/// absolute ceiling) are *not* represented here: they are reported in-band
/// as `None` on [`crate::vspeeds::VSpeeds`], since "at or above the
/// ceiling" is an expected outcome, not a fault.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// A required field was absent and could not be derived from the other
    /// supplied inputs (e.g. neither `B` nor `A`; neither a `DragTest` nor an
    /// override for `C_D0`/`e`).
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// A caller supplied a raw magnitude tagged with the wrong physical
    /// dimension. Reserved for a future string/unit-parsing boundary; the
    /// newtype unit API in [`crate::units`] prevents this at compile time
    /// for every call site internal to this crate.
    #[error("dimensional mismatch: expected {expected} for {field}")]
    DimensionalMismatch {
        expected: &'static str,
        field: &'static str,
    },

    /// A numeric precondition was violated: a non-positive density, weight,
    /// or reference dimension, a flight-path angle outside (0, pi/2), or a
    /// non-positive elapsed time.
    #[error("domain error: {0}")]
    Domain(String),
}

impl EngineError {
    pub(crate) fn domain(msg: impl fmt::Display) -> Self {
        EngineError::Domain(msg.to_string())
    }
}
