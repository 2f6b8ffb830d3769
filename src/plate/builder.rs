//! Derivation of a [`DataPlate`] from airframe constants and flight tests.

use std::f64::consts::PI;

use crate::atmosphere;
use crate::error::EngineError;
use crate::units::{Area, Length, Torque};

use super::types::{
    AirframeInputs, DataPlate, DragTest, PowerSource, ThrustTest, WingReference, DEFAULT_C,
};

impl DataPlate {
    /// Derive a data plate from airframe constants and flight-test
    /// observations.
    ///
    /// At least one of `drag_test`/`thrust_test` must be present unless the
    /// corresponding coefficients are supplied via `overrides`; a
    /// `ThrustTest` additionally requires C_D0 and e to be available (either
    /// derived from a `DragTest` or overridden directly).
    pub fn build(inputs: AirframeInputs) -> Result<DataPlate, EngineError> {
        let s = inputs.s;
        if s.as_sq_ft() <= 0.0 {
            return Err(EngineError::domain(format!(
                "wing area must be positive, got {}",
                s.as_sq_ft()
            )));
        }

        let d = inputs.d;
        if d.as_ft() <= 0.0 {
            return Err(EngineError::domain(format!(
                "propeller diameter must be positive, got {}",
                d.as_ft()
            )));
        }

        let a = aspect_ratio(inputs.wing_reference, s)?;
        let m0 = rated_torque(inputs.power_source)?;
        let c = inputs.c.unwrap_or(DEFAULT_C);
        if !(0.0..1.0).contains(&c) {
            return Err(EngineError::domain(format!(
                "altitude-dropoff parameter C must be in [0, 1), got {c}"
            )));
        }

        let derived_drag = inputs
            .drag_test
            .map(|test| derive_drag_coefficients(s, a, test))
            .transpose()?;

        let cd0 = match (inputs.overrides.cd0, derived_drag) {
            (Some(over), Some((derived, _))) => {
                tracing::warn!(
                    field = "C_D0",
                    override_value = over,
                    derived_value = derived,
                    "override shadows flight-test-derived coefficient"
                );
                over
            }
            (Some(over), None) => over,
            (None, Some((derived, _))) => derived,
            (None, None) => {
                return Err(EngineError::MissingInput(
                    "C_D0 (supply a DragTest or override.cd0)",
                ))
            }
        };

        let e = match (inputs.overrides.e, derived_drag) {
            (Some(over), Some((_, derived))) => {
                tracing::warn!(
                    field = "e",
                    override_value = over,
                    derived_value = derived,
                    "override shadows flight-test-derived coefficient"
                );
                over
            }
            (Some(over), None) => over,
            (None, Some((_, derived))) => derived,
            (None, None) => {
                return Err(EngineError::MissingInput(
                    "e (supply a DragTest or override.e)",
                ))
            }
        };

        let derived_thrust = inputs
            .thrust_test
            .map(|test| derive_thrust_coefficients(s, a, d, m0, c, cd0, e, test))
            .transpose()?;

        let b = match (inputs.overrides.b, derived_thrust) {
            (Some(over), Some((derived, _))) => {
                tracing::warn!(
                    field = "b",
                    override_value = over,
                    derived_value = derived,
                    "override shadows flight-test-derived coefficient"
                );
                over
            }
            (Some(over), None) => over,
            (None, Some((derived, _))) => derived,
            (None, None) => {
                return Err(EngineError::MissingInput(
                    "b (supply a ThrustTest or override.b)",
                ))
            }
        };

        let m = match (inputs.overrides.m, derived_thrust) {
            (Some(over), Some((_, derived))) => {
                tracing::warn!(
                    field = "m",
                    override_value = over,
                    derived_value = derived,
                    "override shadows flight-test-derived coefficient"
                );
                over
            }
            (Some(over), None) => over,
            (None, Some((_, derived))) => derived,
            (None, None) => {
                return Err(EngineError::MissingInput(
                    "m (supply a ThrustTest or override.m)",
                ))
            }
        };

        tracing::debug!(a, m0 = m0.as_ft_lbf(), cd0, e, b, m, "data plate built");

        Ok(DataPlate {
            s,
            a,
            m0,
            c,
            d,
            cd0,
            e,
            b,
            m,
        })
    }
}

fn aspect_ratio(reference: WingReference, s: Area) -> Result<f64, EngineError> {
    let a = match reference {
        WingReference::Span(b) => {
            if b.as_ft() <= 0.0 {
                return Err(EngineError::domain(format!(
                    "wing span must be positive, got {}",
                    b.as_ft()
                )));
            }
            (b.as_ft() * b.as_ft()) / s.as_sq_ft()
        }
        WingReference::AspectRatio(a) => a,
    };
    if a <= 0.0 {
        return Err(EngineError::domain(format!(
            "aspect ratio must be positive, got {a}"
        )));
    }
    Ok(a)
}

fn rated_torque(source: PowerSource) -> Result<Torque, EngineError> {
    let m0 = match source {
        PowerSource::RatedTorque(m0) => m0,
        PowerSource::RatedPower { p0, n0 } => {
            if n0.as_rad_per_s() <= 0.0 {
                return Err(EngineError::domain(format!(
                    "rated propeller-shaft speed must be positive, got {} rad/s",
                    n0.as_rad_per_s()
                )));
            }
            Torque::ft_lbf(p0.as_ft_lbf_per_s() / (2.0 * PI * n0.as_rad_per_s()))
        }
    };
    if m0.as_ft_lbf() <= 0.0 {
        return Err(EngineError::domain(format!(
            "rated torque must be positive, got {} ft\u{b7}lbf",
            m0.as_ft_lbf()
        )));
    }
    Ok(m0)
}

/// Derive (C_D0, e) from a steady best-glide flight test (PoLA Appendix F).
fn derive_drag_coefficients(
    s: Area,
    a: f64,
    test: DragTest,
) -> Result<(f64, f64), EngineError> {
    let sigma = atmosphere::relative_density(test.altitude, Some(test.oat)).as_f64();
    let rho = atmosphere::RHO0 * sigma;
    let dh_tape = atmosphere::tapeline_altitude(test.indicated_altitude_loss, test.altitude, test.oat);
    let v_bg = atmosphere::tas_from_cas(test.v_cbg, test.altitude, Some(test.oat));
    let gamma_bg = atmosphere::flight_path_angle_from_climb(dh_tape, v_bg, test.elapsed_time)?;

    let cd0 = test.weight.as_lbf() * gamma_bg.as_radians().sin()
        / (rho.as_slug_per_ft3() * s.as_sq_ft() * v_bg.squared_fps2());
    if cd0 <= 0.0 {
        return Err(EngineError::domain(format!(
            "derived C_D0 must be positive, got {cd0} (check DragTest sign conventions)"
        )));
    }

    let tan_gamma = gamma_bg.as_radians().tan();
    let e = 4.0 * cd0 / (PI * a * tan_gamma * tan_gamma);
    if e <= 0.0 {
        return Err(EngineError::domain(format!(
            "derived e must be positive, got {e}"
        )));
    }

    Ok((cd0, e))
}

/// Derive (b, m) from a steady best-angle-climb flight test. Requires C_D0
/// and e to already be known.
fn derive_thrust_coefficients(
    s: Area,
    a: f64,
    d: Length,
    m0: Torque,
    c: f64,
    cd0: f64,
    e: f64,
    test: ThrustTest,
) -> Result<(f64, f64), EngineError> {
    let sigma = atmosphere::relative_density(test.altitude, Some(test.oat)).as_f64();
    let rho = atmosphere::density(test.altitude, Some(test.oat));
    let phi = (sigma - c) / (1.0 - c);
    if phi <= 0.0 {
        return Err(EngineError::domain(format!(
            "derived power-altitude factor phi must be positive, got {phi}"
        )));
    }

    let v_x = atmosphere::tas_from_cas(test.v_cx, test.altitude, Some(test.oat));
    let v_m = atmosphere::tas_from_cas(test.v_cm, test.altitude, Some(test.oat));
    if v_x.as_fps() <= 0.0 || v_m.as_fps() <= 0.0 {
        return Err(EngineError::domain(
            "derived true airspeeds must be positive".to_string(),
        ));
    }

    let w2 = test.weight.as_lbf() * test.weight.as_lbf();
    let rho2 = rho.as_slug_per_ft3() * rho.as_slug_per_ft3();
    let d2 = d.as_ft() * d.as_ft();
    let vx4 = v_x.squared_fps2() * v_x.squared_fps2();
    let vm2 = v_m.squared_fps2();

    let b = (s.as_sq_ft() * cd0) / (2.0 * d2)
        - 2.0 * w2 / (rho2 * d2 * s.as_sq_ft() * PI * e * a * vx4);

    let m = (d.as_ft() * w2) / (PI * m0.as_ft_lbf() * phi * rho.as_slug_per_ft3() * s.as_sq_ft() * PI * e * a)
        * (1.0 / vm2 + vm2 / vx4);
    if m <= 0.0 {
        return Err(EngineError::domain(format!(
            "derived m must be positive, got {m}"
        )));
    }

    Ok((b, m))
}
