//! The 1962 US Standard Atmosphere, as used by the bootstrap model.
//!
//! Every function here is a pure, total function over its numeric domain
//! (save [`flight_path_angle_from_climb`], whose denominator can genuinely
//! be degenerate for nonsensical flight-test inputs). There is no shared
//! state and nothing to initialize: these are ordinary `f64`-in,
//! dimensional-newtype-out functions, safe to call from any number of
//! threads concurrently.
//!
//! # Altitude semantics
//!
//! Every query in this crate is parameterized on (pressure altitude `h`,
//! outside air temperature `T`), never on a single "altitude" value: OAT and
//! pressure altitude together determine the relative density sigma, and
//! sigma is what density altitude actually means. When `T` is omitted the
//! standard atmosphere supplies it via [`standard_temperature`].

use crate::error::EngineError;
use crate::units::{Angle, Density, Length, Ratio, Speed, Temperature, Time};

/// Standard sea-level temperature, 59 \u{b0}F (288.15 K).
pub const T0: Temperature = Temperature::fahrenheit(59.0);

/// Standard sea-level density, slug/ft\u{b3}, rounded as Lowry's worked
/// examples use it.
pub const RHO0: Density = Density::slug_per_ft3(0.00237);

/// Standard sea-level density, full precision.
pub const RHO0_PRECISE: Density = Density::slug_per_ft3(0.002377);

/// Standard lapse rate, 0.001981 K/ft expressed in \u{b0}F/ft (the K and
/// \u{b0}F interval differ by the 1.8 scale factor; there is no additive
/// offset for a *lapse rate*, only for an absolute temperature).
pub const ALPHA_F_PER_FT: f64 = 0.0035658;

/// Standard temperature at pressure altitude `h`: T_std(h) = T0 - alpha*h.
pub fn standard_temperature(h: Length) -> Temperature {
    Temperature::fahrenheit(T0.as_fahrenheit() - ALPHA_F_PER_FT * h.as_ft())
}

/// Relative density sigma(h, T) = rho/rho0.
///
/// If `temperature` is supplied, uses the OAT-corrected form:
/// sigma = (518.7 / (T\[\u{b0}F\] + 459.7)) * (1 - 6.8752e-6 * h\[ft\]).
/// If `temperature` is `None`, falls back to the pure pressure-altitude
/// model: sigma = (1 - h/145457)^4.25635.
pub fn relative_density(h: Length, temperature: Option<Temperature>) -> Ratio {
    match temperature {
        Some(t) => {
            let factor = 518.7 / t.as_rankine();
            Ratio::new(factor * (1.0 - 6.8752e-6 * h.as_ft()))
        }
        None => Ratio::new((1.0 - h.as_ft() / 145_457.0).powf(4.256_35)),
    }
}

/// Absolute density rho(h, T) = rho0 * sigma(h, T).
pub fn density(h: Length, temperature: Option<Temperature>) -> Density {
    RHO0 * relative_density(h, temperature).as_f64()
}

/// Convert a calibrated airspeed to true airspeed at (h, T).
pub fn tas_from_cas(v_cas: Speed, h: Length, temperature: Option<Temperature>) -> Speed {
    let sigma = relative_density(h, temperature).as_f64();
    Speed::calibrated_to_true(v_cas, sigma)
}

/// Convert a true airspeed to calibrated airspeed at (h, T).
pub fn cas_from_tas(v_tas: Speed, h: Length, temperature: Option<Temperature>) -> Speed {
    let sigma = relative_density(h, temperature).as_f64();
    Speed::true_to_calibrated(v_tas, sigma)
}

/// Tapeline (geometric) altitude change, corrected from an indicated
/// altitude change for non-standard temperature:
/// dh_tape = dh_indicated * T / T_std(h), both on the absolute (Rankine)
/// scale.
pub fn tapeline_altitude(dh_indicated: Length, h: Length, temperature: Temperature) -> Length {
    let t_std = standard_temperature(h);
    Length::ft(dh_indicated.as_ft() * temperature.as_rankine() / t_std.as_rankine())
}

/// Flight-path angle from a tapeline altitude change, true airspeed, and
/// elapsed time: gamma = arcsin(dh_tape / (V * dt)).
///
/// Returns a domain error if `dt` or `v_true` is non-positive (a degenerate
/// denominator) or if the resulting gamma falls outside the open interval
/// (0, pi/2) - equivalently, if the arcsin argument falls outside (0, 1).
/// A zero or negative argument is not a climb (or glide) at all, and an
/// argument >= 1 has no real angle.
pub fn flight_path_angle_from_climb(
    dh_tape: Length,
    v_true: Speed,
    dt: Time,
) -> Result<Angle, EngineError> {
    if dt.as_seconds() <= 0.0 {
        return Err(EngineError::domain(format!(
            "elapsed time must be positive, got {}",
            dt.as_seconds()
        )));
    }
    if v_true.as_fps() <= 0.0 {
        return Err(EngineError::domain(format!(
            "true airspeed must be positive, got {} ft/s",
            v_true.as_fps()
        )));
    }
    let arg = dh_tape.as_ft() / (v_true.as_fps() * dt.as_seconds());
    if arg <= 0.0 || arg >= 1.0 {
        return Err(EngineError::domain(format!(
            "flight-path angle argument {arg} out of domain (0, 1)"
        )));
    }
    Ok(Angle::radians(arg.asin()))
}
