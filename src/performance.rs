//! Per-(V, W, h, T) performance evaluation: thrust, drag, power, ROC, gamma.
//!
//! `v` is the *true* airspeed: the composites passed in already carry the
//! atmosphere correction for the operating point's (h, T), so the bootstrap
//! polynomial below is stated entirely in true airspeed. A caller starting
//! from a calibrated airspeed converts with [`crate::atmosphere::tas_from_cas`]
//! before calling [`Performance::evaluate`].

use crate::composites::Composites;
use crate::plate::DataPlate;
use crate::units::{Angle, Force, Power, Speed};

/// The full performance envelope at one (V, W, h, T) operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Available thrust.
    pub thrust: Force,
    /// Available power.
    pub power_available: Power,
    pub parasite_drag: Force,
    pub induced_drag: Force,
    pub drag: Force,
    pub power_required: Power,
    pub excess_power: Power,
    pub excess_thrust: Force,
    /// Rate of climb, reported in ft/min via [`Speed::as_fpm`].
    pub rate_of_climb: Speed,
    /// Flight-path angle above horizontal.
    pub flight_path_angle: Angle,
}

impl Performance {
    /// Evaluate the bootstrap performance polynomial. Infallible: the
    /// arcsin argument for `flight_path_angle` is clamped to \[-1, 1\] for
    /// (V, W) combinations outside the model's validity range rather than
    /// returning an error.
    pub fn evaluate(
        _plate: &DataPlate,
        composites: &Composites,
        v: Speed,
        weight: Force,
    ) -> Performance {
        let v2 = v.squared_fps2();

        let thrust = composites.e + composites.f * v2;
        let power_available = thrust * v.as_fps();
        let parasite_drag = composites.g * v2;
        let induced_drag = composites.h / v2;
        let drag = parasite_drag + induced_drag;
        let power_required = drag * v.as_fps();
        let power_excess = power_available - power_required;
        let thrust_excess = thrust - drag;

        let roc_fps = power_excess / weight.as_lbf();
        let gamma_arg = (thrust_excess / weight.as_lbf()).clamp(-1.0, 1.0);

        Performance {
            thrust: Force::lbf(thrust),
            power_available: Power::ft_lbf_per_s(power_available),
            parasite_drag: Force::lbf(parasite_drag),
            induced_drag: Force::lbf(induced_drag),
            drag: Force::lbf(drag),
            power_required: Power::ft_lbf_per_s(power_required),
            excess_power: Power::ft_lbf_per_s(power_excess),
            excess_thrust: Force::lbf(thrust_excess),
            rate_of_climb: Speed::fps(roc_fps),
            flight_path_angle: Angle::radians(gamma_arg.asin()),
        }
    }
}
