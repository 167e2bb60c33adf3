use std::f64::consts::{PI, TAU};

use hohmann_calculator::common::angle::normalize;
use hohmann_calculator::common::constants::{AU_M, SECONDS_PER_DAY};
use hohmann_calculator::impulsive::hohmann;
use hohmann_calculator::orbits::CentralBody;
use hohmann_calculator::transfer::mission::phasing;

fn setup(r1_au: f64, r2_au: f64) -> (f64, f64, f64) {
    let sun = CentralBody::sun();
    let (r1, r2) = (r1_au * AU_M, r2_au * AU_M);
    let transfer = hohmann(r1, r2, &sun).unwrap();
    (
        sun.mean_motion(r1).unwrap(),
        sun.mean_motion(r2).unwrap(),
        transfer.transfer_time_s,
    )
}

fn angular_gap(a: f64, b: f64) -> f64 {
    let d = normalize(a - b);
    d.min(TAU - d)
}

#[test]
fn earth_mars_default_lead_waits_about_34_days() {
    let (n1, n2, tof) = setup(1.0, 1.524);
    let solution = phasing::solve(n1, n2, tof, 0.0, 60f64.to_radians());

    assert!((solution.required_phase_rad.to_degrees() - 44.36).abs() < 0.05);
    assert!((solution.current_phase_rad.to_degrees() - 60.0).abs() < 1e-9);
    assert!(solution.relative_mean_motion_rad_s < 0.0);

    let wait_days = solution.wait_time_s.unwrap() / SECONDS_PER_DAY;
    assert!((wait_days - 33.87).abs() < 0.1, "wait = {wait_days} days");
    let synodic_days = solution.synodic_period_s.unwrap() / SECONDS_PER_DAY;
    assert!((synodic_days - 779.6).abs() < 1.0, "synodic = {synodic_days} days");

    assert_eq!(solution.departure_time_s, solution.wait_time_s.unwrap());
    assert!((solution.arrival_time_s - (solution.departure_time_s + tof)).abs() < 1e-6);
}

#[test]
fn target_ends_opposite_departure_point() {
    // With the phase rule the target arrives half a turn past the departure longitude.
    for (r1, r2, theta1, theta2) in [
        (1.0, 1.524, 0.3, 2.0),
        (1.0, 0.723, 5.0, 1.0),
        (5.203, 1.0, 1.0, -2.0),
    ] {
        let (n1, n2, tof) = setup(r1, r2);
        let s = phasing::solve(n1, n2, tof, normalize(theta1), normalize(theta2));
        let gap = angular_gap(s.arrival_longitude_rad, s.departure_longitude_rad + PI);
        assert!(gap < 1e-6, "{r1}->{r2}: gap {gap}");
    }
}

#[test]
fn wait_time_stays_within_one_synodic_period() {
    let pairs = [(1.0, 1.524), (1.524, 1.0), (1.0, 0.723), (0.387, 30.068), (9.537, 5.203)];
    for (r1, r2) in pairs {
        let (n1, n2, tof) = setup(r1, r2);
        for step in 0..24 {
            let theta2 = step as f64 * TAU / 24.0 - PI;
            let s = phasing::solve(n1, n2, tof, 0.0, normalize(theta2));
            let wait = s.wait_time_s.expect("distinct orbits have a defined wait");
            let synodic = TAU / (n2 - n1).abs();
            assert!(wait >= 0.0 && wait < synodic, "{r1}->{r2} step {step}: {wait} vs {synodic}");
            assert!((0.0..TAU).contains(&s.required_phase_rad));
            assert!((0.0..TAU).contains(&s.current_phase_rad));
            assert!((0.0..TAU).contains(&s.departure_longitude_rad));
            assert!((0.0..TAU).contains(&s.arrival_longitude_rad));
        }
    }
}

#[test]
fn equal_mean_motion_reports_undefined_wait() {
    let (n1, n2, tof) = setup(1.0, 1.0);
    assert_eq!(n1, n2);
    let s = phasing::solve(n1, n2, tof, 0.0, 1.0);
    assert_eq!(s.wait_time_s, None);
    assert_eq!(s.synodic_period_s, None);
    assert_eq!(s.relative_mean_motion_rad_s, 0.0);
    assert_eq!(s.departure_time_s, 0.0);
    assert!(s.arrival_time_s.is_finite());
    assert!(s.required_phase_rad.is_finite());
}

#[test]
fn nearly_equal_rates_below_threshold_are_degenerate() {
    let n = 1.99e-7;
    let s = phasing::solve(n, n + phasing::DEGENERATE_RATE_THRESHOLD / 2.0, 1.0e7, 0.0, 0.5);
    assert!(s.is_degenerate());
}
