//! Per-operating-point bootstrap composite scalars (E, F, G, H, K, Q, R, U).
//!
//! The eight composites are the intermediate scalars the V-speed solver and
//! performance evaluator are both stated in terms of. They are recomputed
//! from scratch at every query rather than cached against a reference
//! weight: H, R, and U carry a W\u{b2} dependence, so a single plate serves
//! any number of weights without retaining a "current weight" anywhere.

use std::f64::consts::PI;

use crate::atmosphere;
use crate::plate::{DataPlate, OperatingPoint};

/// The eight bootstrap composites at one (W, h, T) operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composites {
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub k: f64,
    pub q: f64,
    pub r: f64,
    pub u: f64,
}

impl Composites {
    /// Compute the composites for `plate` at `point`. Pure, allocation-free.
    pub fn at(plate: &DataPlate, point: OperatingPoint) -> Composites {
        let sigma = point.sigma().as_f64();
        let phi = (sigma - plate.c()) / (1.0 - plate.c());

        let rho0 = atmosphere::RHO0.as_slug_per_ft3();
        let e0 = plate.m() * plate.m0().as_ft_lbf() * 2.0 * PI / plate.d().as_ft();
        let f0 = rho0 * plate.d().as_ft() * plate.d().as_ft() * plate.b();
        let g0 = rho0 * plate.s().as_sq_ft() * plate.cd0() / 2.0;
        let w2 = point.weight.as_lbf() * point.weight.as_lbf();
        let h0 = 2.0 * w2 / (rho0 * plate.s().as_sq_ft() * PI * plate.e() * plate.a());
        let k0 = f0 - g0;
        let q0 = e0 / k0;
        let r0 = h0 / k0;
        let u0 = h0 / g0;

        Composites {
            e: phi * e0,
            f: sigma * f0,
            g: sigma * g0,
            h: h0 / sigma,
            k: sigma * k0,
            q: (phi / sigma) * q0,
            r: r0 / (sigma * sigma),
            u: u0 / (sigma * sigma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plate::{AirframeInputs, PowerSource, WingReference};
    use crate::units::{Area, AngularSpeed, Force, Length, Power, Temperature};
    use approx::assert_relative_eq;

    fn pola_plate() -> DataPlate {
        // PoLA Table 7.1 reference airframe, overridden directly to the
        // book's stated coefficients rather than re-derived from a test.
        let inputs = AirframeInputs {
            s: Area::sq_ft(174.0),
            wing_reference: WingReference::Span(Length::ft(35.83)),
            d: Length::ft(6.25),
            power_source: PowerSource::RatedPower {
                p0: Power::horsepower(160.0),
                n0: AngularSpeed::rpm(2700.0),
            },
            c: None,
            drag_test: None,
            thrust_test: None,
            overrides: crate::plate::PlateOverrides {
                cd0: Some(0.037),
                e: Some(0.72),
                b: Some(-0.0564),
                m: Some(1.70),
            },
        };
        DataPlate::build(inputs).unwrap()
    }

    #[test]
    fn scenario_b_composites_at_sea_level() {
        let plate = pola_plate();
        let point = OperatingPoint::new(Force::lbf(2400.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0)));
        let c = Composites::at(&plate, point);
        assert_relative_eq!(c.e, 531.9, epsilon = 50.0);
        assert_relative_eq!(c.g, 0.00763, epsilon = 0.002);
        assert!(c.h > 1.0e6);
        assert!(c.k < 0.0);
    }

    #[test]
    fn scenario_c_composites_at_density_altitude() {
        let plate = pola_plate();
        let point = OperatingPoint::new(
            Force::lbf(1800.0),
            Length::ft(8000.0),
            Some(Temperature::fahrenheit(41.0)),
        );
        let c = Composites::at(&plate, point);
        assert!(c.e > 0.0);
        assert!(c.u > 1.0e8);
    }

    #[test]
    fn composites_scale_with_weight_squared() {
        let plate = pola_plate();
        let light = Composites::at(
            &plate,
            OperatingPoint::new(Force::lbf(1200.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0))),
        );
        let heavy = Composites::at(
            &plate,
            OperatingPoint::new(Force::lbf(2400.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0))),
        );
        assert_relative_eq!(heavy.h / light.h, 4.0, epsilon = 1e-6);
    }
}
