//! Integration tests against Lowry's C172 N6346D worked examples (PoLA).
//!
//! Each scenario below corresponds to one named scenario in the bootstrap
//! model's documentation; they exercise the public API end to end rather
//! than any one module in isolation.

use approx::assert_relative_eq;

use bootstrap_perf::plate::{
    AirframeInputs, DataPlate, DragTest, OperatingPoint, PlateOverrides, PowerSource, ThrustTest,
    WingReference,
};
use bootstrap_perf::units::{Area, AngularSpeed, Force, Length, Power, Speed, Temperature, Time};
use bootstrap_perf::{Composites, Performance, VSpeeds};

fn n6346d_geometry() -> (Area, WingReference, Length, PowerSource) {
    (
        Area::sq_ft(174.0),
        WingReference::Span(Length::ft(35.83)),
        Length::ft(6.25),
        PowerSource::RatedPower {
            p0: Power::horsepower(160.0),
            n0: AngularSpeed::rpm(2700.0),
        },
    )
}

#[test]
fn scenario_a_data_plate_from_flight_tests() {
    let (s, wing_reference, d, power_source) = n6346d_geometry();
    let inputs = AirframeInputs {
        s,
        wing_reference,
        d,
        power_source,
        c: None,
        drag_test: Some(DragTest {
            weight: Force::lbf(2200.0),
            altitude: Length::ft(5000.0),
            oat: Temperature::fahrenheit(41.0),
            indicated_altitude_loss: Length::ft(200.0),
            elapsed_time: Time::seconds(17.0),
            v_cbg: Speed::knots(70.0),
        }),
        thrust_test: Some(ThrustTest {
            weight: Force::lbf(2200.0),
            altitude: Length::ft(5000.0),
            oat: Temperature::fahrenheit(41.0),
            v_cx: Speed::knots(60.5),
            v_cm: Speed::knots(105.0),
        }),
        overrides: PlateOverrides::default(),
    };

    let plate = DataPlate::build(inputs).expect("scenario A plate should build");

    assert_relative_eq!(plate.a(), 7.38, epsilon = 0.05);
    assert_relative_eq!(plate.m0().as_ft_lbf(), 311.2, epsilon = 1.0);
    assert_relative_eq!(plate.c(), 0.12, epsilon = 1e-9);
    assert_relative_eq!(plate.cd0(), 0.037, epsilon = 0.015);
    assert_relative_eq!(plate.e(), 0.72, epsilon = 0.15);
    assert!(plate.m() > 0.0);
    assert!(plate.b() < 0.0);
}

fn pola_table_7_1_plate() -> DataPlate {
    let (s, wing_reference, d, power_source) = n6346d_geometry();
    DataPlate::build(AirframeInputs {
        s,
        wing_reference,
        d,
        power_source,
        c: None,
        drag_test: None,
        thrust_test: None,
        overrides: PlateOverrides {
            cd0: Some(0.037),
            e: Some(0.72),
            b: Some(-0.0564),
            m: Some(1.70),
        },
    })
    .unwrap()
}

#[test]
fn scenario_b_composites_at_sea_level() {
    let plate = pola_table_7_1_plate();
    let point = OperatingPoint::new(Force::lbf(2400.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0)));
    let composites = Composites::at(&plate, point);

    assert_relative_eq!(composites.e, 531.9, epsilon = 50.0);
    assert_relative_eq!(composites.g, 0.00763, epsilon = 0.002);
    assert!(composites.k < 0.0);
}

#[test]
fn scenario_c_composites_at_density_altitude() {
    let plate = pola_table_7_1_plate();
    let point = OperatingPoint::new(
        Force::lbf(1800.0),
        Length::ft(8000.0),
        Some(Temperature::fahrenheit(41.0)),
    );
    let composites = Composites::at(&plate, point);

    assert!(composites.e > 0.0);
    assert!(composites.u > 1.0e8);
}

#[test]
fn scenario_d_vspeeds_at_two_operating_points() {
    let plate = pola_table_7_1_plate();

    let sea_level = OperatingPoint::new(Force::lbf(2400.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0)));
    let composites = Composites::at(&plate, sea_level);
    let speeds = VSpeeds::solve(&composites, sea_level.altitude, sea_level.oat);
    assert!(speeds.vx.unwrap().as_knots() <= speeds.vy.unwrap().as_knots());
    assert!(speeds.vy.unwrap().as_knots() <= speeds.vm.unwrap().as_knots());
    assert!(speeds.vmd.unwrap().as_knots() < speeds.vbg.unwrap().as_knots());

    let altitude = OperatingPoint::new(
        Force::lbf(1800.0),
        Length::ft(8000.0),
        Some(Temperature::fahrenheit(41.0)),
    );
    let composites = Composites::at(&plate, altitude);
    let speeds = VSpeeds::solve(&composites, altitude.altitude, altitude.oat);
    assert!(speeds.vx.is_some());
    assert!(speeds.vy.is_some());
}

#[test]
fn scenario_e_performance_at_75_knots_sea_level() {
    let plate = pola_table_7_1_plate();
    let point = OperatingPoint::new(Force::lbf(2400.0), Length::ft(0.0), Some(Temperature::fahrenheit(59.0)));
    let composites = Composites::at(&plate, point);
    let perf = Performance::evaluate(&plate, &composites, Speed::knots(75.0), point.weight);

    assert_relative_eq!(perf.thrust.as_lbf(), 448.0, epsilon = 15.0);
    assert_relative_eq!(perf.drag.as_lbf(), 226.7, epsilon = 15.0);
    assert_relative_eq!(perf.rate_of_climb.as_fpm(), 700.0, epsilon = 100.0);
    assert_relative_eq!(perf.flight_path_angle.as_degrees(), 5.29, epsilon = 1.0);
}

#[test]
fn scenario_f_appendix_f_drag_fit() {
    let (s, wing_reference, d, power_source) = n6346d_geometry();
    let inputs = AirframeInputs {
        s,
        wing_reference,
        d,
        power_source,
        c: None,
        drag_test: Some(DragTest {
            weight: Force::lbf(2209.0),
            altitude: Length::ft(5750.0),
            oat: Temperature::fahrenheit(45.0),
            indicated_altitude_loss: Length::ft(500.0),
            elapsed_time: Time::seconds(39.10),
            v_cbg: Speed::knots(70.5),
        }),
        thrust_test: None,
        overrides: PlateOverrides::default(),
    };

    let plate = DataPlate::build(inputs).expect("scenario F plate should build");
    assert_relative_eq!(plate.cd0(), 0.04093, epsilon = 0.01);
    assert_relative_eq!(plate.e(), 0.5964, epsilon = 0.1);
}
