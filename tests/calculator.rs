use std::f64::consts::TAU;

use hohmann_calculator::common::constants::{AU_M, EARTH_MASS_KG, EARTH_RADIUS_M, SECONDS_PER_DAY};
use hohmann_calculator::config::BodyCatalog;
use hohmann_calculator::orbits::OrbitError;
use hohmann_calculator::transfer::{
    DepartureConfig, DepartureError, MissionError, TransferDirection,
};
use hohmann_calculator::{CalculatorOptions, OrbitTarget, TransferRequest, plan_transfer};

fn request(from: &str, to: &str) -> TransferRequest {
    TransferRequest::new(OrbitTarget::body(from), OrbitTarget::body(to))
}

#[test]
fn earth_to_mars_full_report() {
    let report = plan_transfer(&request("Earth", "Mars"), BodyCatalog::builtin())
        .expect("earth -> mars");

    assert_eq!(report.departure.name, "Earth");
    assert_eq!(report.arrival.name, "Mars");
    assert_eq!(report.direction(), TransferDirection::Outward);
    assert!((report.cruise.transfer.semi_major_axis_m / AU_M - 1.262).abs() < 1e-9);

    // Defaults: departure at 0°, target 60° ahead.
    assert_eq!(report.departure.longitude_rad, Some(0.0));
    let theta2 = report.arrival.longitude_rad.unwrap();
    assert!((theta2.to_degrees() - 60.0).abs() < 1e-9);

    let wait_days = report.wait_time_s().unwrap() / SECONDS_PER_DAY;
    assert!((wait_days - 33.87).abs() < 0.1);

    let escape = report.escape.expect("escape add-on enabled by default");
    assert!((escape.delta_v_m_s() - 3_201.8).abs() < 1.0);
    let expected = report.cruise.transfer.dv_total_m_s + escape.delta_v_m_s();
    assert!((report.mission_delta_v_m_s - expected).abs() < 1e-9);
}

#[test]
fn venus_is_reported_inward() {
    let report = plan_transfer(&request("earth", "VENUS"), BodyCatalog::builtin()).unwrap();
    assert_eq!(report.direction(), TransferDirection::Inward);
    assert!(report.cruise.transfer.dv_total_m_s > 0.0);
    let wait = report.wait_time_s().unwrap();
    let synodic = report.phasing.unwrap().synodic_period_s.unwrap();
    assert!(wait >= 0.0 && wait < synodic);
}

#[test]
fn feature_flags_trim_the_report() {
    let options = CalculatorOptions {
        include_phase_timing: false,
        include_escape_addon: false,
        custom_radius_allowed: true,
    };
    let report = plan_transfer(
        &request("Earth", "Jupiter").with_options(options),
        BodyCatalog::builtin(),
    )
    .unwrap();
    assert!(report.phasing.is_none());
    assert!(report.escape.is_none());
    assert_eq!(report.departure.longitude_rad, None);
    assert_eq!(report.mission_delta_v_m_s, report.cruise.transfer.dv_total_m_s);
}

#[test]
fn same_orbit_has_zero_dv_and_undefined_wait() {
    let req = TransferRequest::new(OrbitTarget::body("Mars"), OrbitTarget::radius_au(1.524));
    let report = plan_transfer(&req, BodyCatalog::builtin()).unwrap();
    assert_eq!(report.direction(), TransferDirection::NoTransfer);
    assert_eq!(report.cruise.transfer.dv_total_m_s, 0.0);
    assert_eq!(report.wait_time_s(), None);
    let half_period = report.cruise.departure.period_s / 2.0;
    assert!((report.cruise.transfer.transfer_time_s - half_period).abs() < 1e-6 * half_period);
}

#[test]
fn custom_radius_respects_flag() {
    let allowed = TransferRequest::new(OrbitTarget::body("Earth"), OrbitTarget::radius_au(2.7));
    let report = plan_transfer(&allowed, BodyCatalog::builtin()).unwrap();
    assert_eq!(report.arrival.name, "Custom(2.700 AU)");

    let denied = allowed.with_options(CalculatorOptions {
        custom_radius_allowed: false,
        ..CalculatorOptions::default()
    });
    assert!(matches!(
        plan_transfer(&denied, BodyCatalog::builtin()),
        Err(MissionError::CustomRadiusNotAllowed)
    ));

    let negative = TransferRequest::new(OrbitTarget::body("Earth"), OrbitTarget::Radius(-1.0));
    assert!(matches!(
        plan_transfer(&negative, BodyCatalog::builtin()),
        Err(MissionError::Orbit(_))
    ));
}

#[test]
fn unknown_body_lists_catalog() {
    let err = plan_transfer(&request("Earth", "Vulcan"), BodyCatalog::builtin()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Vulcan"));
    assert!(message.contains("Mercury"));
}

#[test]
fn longitudes_are_normalized_and_escape_overrides_apply() {
    let mut req = request("Mars", "Earth").with_longitudes(-1.0, 4.0 * TAU + 0.5);
    req.escape = DepartureConfig {
        body_mass_kg: None,
        body_radius_m: None,
        parking_altitude_m: Some(500e3),
    };
    let report = plan_transfer(&req, BodyCatalog::builtin()).unwrap();
    let theta1 = report.departure.longitude_rad.unwrap();
    assert!((theta1 - (TAU - 1.0)).abs() < 1e-12);
    assert!((report.arrival.longitude_rad.unwrap() - 0.5).abs() < 1e-9);

    let escape = report.escape.unwrap();
    assert_eq!(escape.parking_altitude_m, 500e3);
    assert_eq!(escape.escape.body_mass_kg, 6.417e23);
    assert!(escape.delta_v_m_s() < 2_000.0, "mars escape = {}", escape.delta_v_m_s());
}

#[test]
fn non_finite_longitudes_are_rejected() {
    let cases = [
        (f64::NAN, 1.0),
        (f64::INFINITY, 1.0),
        (0.5, f64::NAN),
        (0.5, f64::NEG_INFINITY),
    ];
    for (theta1, theta2) in cases {
        let req = request("Earth", "Mars").with_longitudes(theta1, theta2);
        let result = plan_transfer(&req, BodyCatalog::builtin());
        assert!(
            matches!(result, Err(MissionError::Orbit(OrbitError::InvalidAngle(_)))),
            "({theta1}, {theta2}) -> {result:?}"
        );
    }

    // A non-finite departure longitude must not leak through the default target lead.
    let mut req = request("Earth", "Mars");
    req.departure_longitude_rad = Some(f64::NAN);
    assert!(plan_transfer(&req, BodyCatalog::builtin()).is_err());

    // Longitudes are ignored when phasing is switched off.
    let skipped = request("Earth", "Mars")
        .with_longitudes(f64::NAN, f64::NAN)
        .with_options(CalculatorOptions {
            include_phase_timing: false,
            ..CalculatorOptions::default()
        });
    assert!(plan_transfer(&skipped, BodyCatalog::builtin()).is_ok());
}

#[test]
fn escape_mass_override_uses_a_matching_radius() {
    // An Earth mass from Mars escapes from Earth's radius, not Mars's.
    let mut req = request("Mars", "Earth");
    req.escape = DepartureConfig {
        body_mass_kg: Some(EARTH_MASS_KG),
        ..DepartureConfig::default()
    };
    let escape = plan_transfer(&req, BodyCatalog::builtin()).unwrap().escape.unwrap();
    assert_eq!(escape.body_radius_m, EARTH_RADIUS_M);
    assert!((escape.delta_v_m_s() - 3_201.8).abs() < 1.0, "dv = {}", escape.delta_v_m_s());

    // An explicit radius wins over both the catalog and the Earth fallback.
    req.escape.body_radius_m = Some(3_389.5e3);
    let escape = plan_transfer(&req, BodyCatalog::builtin()).unwrap().escape.unwrap();
    assert_eq!(escape.body_radius_m, 3_389.5e3);
    assert_eq!(escape.escape.orbit_radius_m, 3_389.5e3 + 300e3);

    req.escape.body_radius_m = Some(-1.0);
    assert!(matches!(
        plan_transfer(&req, BodyCatalog::builtin()),
        Err(MissionError::Departure(DepartureError::InvalidBodyRadius(_)))
    ));
}

#[test]
fn mu_override_changes_timescale() {
    let mut req = request("Earth", "Mars");
    let baseline = plan_transfer(&req, BodyCatalog::builtin()).unwrap();
    req.central_mu_m3_s2 = Some(baseline.central_mu_m3_s2 * 4.0);
    let heavier = plan_transfer(&req, BodyCatalog::builtin()).unwrap();
    let ratio = baseline.cruise.transfer.transfer_time_s / heavier.cruise.transfer.transfer_time_s;
    assert!((ratio - 2.0).abs() < 1e-9);

    req.central_mu_m3_s2 = Some(0.0);
    assert!(plan_transfer(&req, BodyCatalog::builtin()).is_err());
}
