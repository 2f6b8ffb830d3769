//! Input and output types for the data-plate builder.

use crate::units::{Area, Force, Length, Power, AngularSpeed, Ratio, Speed, Temperature, Time, Torque};

/// Either a wing span or a precomputed aspect ratio - exactly one is
/// supplied by the caller (§3, AirframeInputs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WingReference {
    /// Wing span B; aspect ratio is derived as A = B\u{b2}/S.
    Span(Length),
    /// Aspect ratio supplied directly.
    AspectRatio(f64),
}

/// Either a rated propeller-shaft torque or a rated power + propeller-shaft
/// speed pair - exactly one is supplied by the caller. For geared engines,
/// `n0` must be the *propeller*-shaft speed and, if `RatedTorque` is used
/// directly, `M0` must already be the propeller-shaft torque (engine torque
/// times gear ratio) - see the design notes on gear reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerSource {
    /// Rated propeller-shaft torque M0 directly.
    RatedTorque(Torque),
    /// Rated power and propeller-shaft speed: M0 = P0 / (2*pi*n0).
    RatedPower { p0: Power, n0: AngularSpeed },
}

/// Coefficients a caller may supply directly instead of deriving them from a
/// flight test. An override always takes precedence over a derived value
/// (§7, "last write wins"); the plate builder does not treat supplying both
/// an override and the flight test that would derive it as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlateOverrides {
    pub cd0: Option<f64>,
    pub e: Option<f64>,
    pub b: Option<f64>,
    pub m: Option<f64>,
}

/// A steady best-glide flight-test observation, used to derive C_D0 and e
/// (§4.3, PoLA Appendix F method).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTest {
    pub weight: Force,
    pub altitude: Length,
    pub oat: Temperature,
    /// Indicated altitude loss during the glide.
    pub indicated_altitude_loss: Length,
    pub elapsed_time: Time,
    /// Calibrated best-glide airspeed flown during the test.
    pub v_cbg: Speed,
}

/// A steady best-angle-climb, full-throttle flight-test observation, used
/// to derive b and m (§4.3). Requires C_D0 and e to already be known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustTest {
    pub weight: Force,
    pub altitude: Length,
    pub oat: Temperature,
    /// Calibrated best-angle-of-climb airspeed flown during the test.
    pub v_cx: Speed,
    /// Calibrated max-level airspeed at the test altitude/weight.
    pub v_cm: Speed,
}

/// Constants and flight-test observations describing one airframe/engine
/// combination. Consumed by [`crate::plate::DataPlate::build`].
#[derive(Debug, Clone, Copy)]
pub struct AirframeInputs {
    pub s: Area,
    pub wing_reference: WingReference,
    pub d: Length,
    pub power_source: PowerSource,
    /// Altitude-dropoff parameter C; defaults to 0.12 if `None`.
    pub c: Option<f64>,
    pub drag_test: Option<DragTest>,
    pub thrust_test: Option<ThrustTest>,
    pub overrides: PlateOverrides,
}

/// Default altitude-dropoff parameter C (§3).
pub const DEFAULT_C: f64 = 0.12;

/// The derived bootstrap "data plate" for one airframe (§3). Immutable once
/// built; every downstream query (composites, V-speeds, performance)
/// references it and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPlate {
    pub(crate) s: Area,
    pub(crate) a: f64,
    pub(crate) m0: Torque,
    pub(crate) c: f64,
    pub(crate) d: Length,
    pub(crate) cd0: f64,
    pub(crate) e: f64,
    pub(crate) b: f64,
    pub(crate) m: f64,
}

impl DataPlate {
    pub fn s(&self) -> Area {
        self.s
    }

    /// Wing aspect ratio, B\u{b2}/S.
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn m0(&self) -> Torque {
        self.m0
    }

    /// Altitude-dropoff parameter C, (sigma - C)/(1 - C).
    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> Length {
        self.d
    }

    /// Zero-lift (parasite) drag coefficient.
    pub fn cd0(&self) -> f64 {
        self.cd0
    }

    /// Oswald span efficiency factor.
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Dimensionless propeller drag-like bootstrap coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Dimensionless propeller thrust-like bootstrap coefficient.
    pub fn m(&self) -> f64 {
        self.m
    }
}

/// Bundles a weight/altitude/OAT operating point (§4.4) passed to the
/// composite evaluator and, indirectly, the V-speed solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub weight: Force,
    pub altitude: Length,
    pub oat: Option<Temperature>,
}

impl OperatingPoint {
    pub fn new(weight: Force, altitude: Length, oat: Option<Temperature>) -> Self {
        Self {
            weight,
            altitude,
            oat,
        }
    }

    pub(crate) fn sigma(&self) -> Ratio {
        crate::atmosphere::relative_density(self.altitude, self.oat)
    }
}
