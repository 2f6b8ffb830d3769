//! A computational core for light-aircraft performance, implementing John
//! T. Lowry's "Bootstrap Approach" (Lowry 1995; *Performance of Light
//! Aircraft*, 1999).
//!
//! Given a small set of airframe/propeller constants plus two flight-test
//! observations - a steady glide and a steady best-angle climb - this crate
//! derives a compact "data plate" of bootstrap coefficients
//! ([`plate::DataPlate`]) and, from it, the performance envelope at any
//! combination of weight, density altitude, and airspeed: thrust, drag,
//! power, rate of climb, flight-path angle, and the characteristic V-speeds
//! (Vx, Vy, VM, Vbg, Vmd).
//!
//! This crate has no notion of a CLI, a plotting layer, or dataset I/O -
//! those are external collaborators. It exposes pure, deterministic
//! functions and `Copy` value types; nothing here allocates or blocks, and
//! every type is `Send + Sync`.
//!
//! # Layout
//!
//! - [`units`]: one newtype per physical dimension.
//! - [`atmosphere`]: the 1962 US Standard Atmosphere.
//! - [`plate`]: the data-plate builder ([`plate::DataPlate::build`]).
//! - [`composites`]: the eight bootstrap composite scalars.
//! - [`vspeeds`]: the closed-form V-speed solver.
//! - [`performance`]: thrust/drag/power/ROC/gamma at an operating point.
//! - [`config`]: ambient, math-inert per-aircraft presentation options.
//! - [`error`]: the typed error hierarchy.

pub mod atmosphere;
pub mod composites;
pub mod config;
pub mod error;
pub mod performance;
pub mod plate;
pub mod units;
pub mod vspeeds;

pub use composites::Composites;
pub use config::{AircraftOptions, VelocityUnit};
pub use error::EngineError;
pub use performance::Performance;
pub use plate::{AirframeInputs, DataPlate, DragTest, OperatingPoint, PlateOverrides, PowerSource, ThrustTest, WingReference};
pub use vspeeds::VSpeeds;
