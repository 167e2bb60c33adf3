//! Launch phasing: how long to wait until the target leads the departure body by the
//! angle a Hohmann transfer needs.
//!
//! The required lead `φ = π − n2·t_transfer` is the usual first-order rule for
//! circular, coplanar orbits. It is approximate and is kept as-is.

use std::f64::consts::{PI, TAU};

use hohmann_core::angle::normalize;
use serde::Serialize;

/// Below this relative mean motion (rad/s) the two bodies are treated as co-rotating.
pub const DEGENERATE_RATE_THRESHOLD: f64 = 1e-12;

/// Phase geometry and departure timing for one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseSolution {
    /// Angle by which the target must lead the departure body at launch.
    pub required_phase_rad: f64,
    /// Angle by which the target currently leads the departure body.
    pub current_phase_rad: f64,
    /// `n2 − n1`, signed.
    pub relative_mean_motion_rad_s: f64,
    /// `normalize(required − current)`.
    pub wait_angle_rad: f64,
    /// `None` when the phase gap never closes.
    pub wait_time_s: Option<f64>,
    pub synodic_period_s: Option<f64>,
    /// Equals the wait time, or zero when the wait is undefined.
    pub departure_time_s: f64,
    pub arrival_time_s: f64,
    /// Departure body longitude at the departure burn.
    pub departure_longitude_rad: f64,
    /// Target body longitude at arrival.
    pub arrival_longitude_rad: f64,
}

impl PhaseSolution {
    pub fn is_degenerate(&self) -> bool {
        self.wait_time_s.is_none()
    }
}

/// Solve for the wait time before departure.
///
/// `n1`/`n2` are the mean motions of the departure and target orbits, `theta1`/`theta2`
/// their current longitudes in radians.
pub fn solve(
    n1_rad_s: f64,
    n2_rad_s: f64,
    transfer_time_s: f64,
    theta1_rad: f64,
    theta2_rad: f64,
) -> PhaseSolution {
    let required = normalize(PI - n2_rad_s * transfer_time_s);
    let current = normalize(theta2_rad - theta1_rad);
    let rel_n = n2_rad_s - n1_rad_s;
    let wait_angle = normalize(required - current);

    let (wait_time, synodic_period) = if rel_n.abs() < DEGENERATE_RATE_THRESHOLD {
        tracing::warn!(
            relative_mean_motion = rel_n,
            "orbits co-rotate; phasing wait time is undefined"
        );
        (None, None)
    } else {
        let synodic = TAU / rel_n.abs();
        let mut wait = wait_angle / rel_n;
        if wait < 0.0 {
            wait += synodic;
        }
        // -0.0 and a wait that rounds up to a full synodic period both mean "depart now".
        if wait >= synodic || wait == 0.0 {
            wait = 0.0;
        }
        (Some(wait), Some(synodic))
    };

    let departure_time = wait_time.unwrap_or(0.0);
    let arrival_time = departure_time + transfer_time_s;

    tracing::debug!(
        required_phase_deg = required.to_degrees(),
        current_phase_deg = current.to_degrees(),
        wait_time_s = ?wait_time,
        "solved launch phasing"
    );

    PhaseSolution {
        required_phase_rad: required,
        current_phase_rad: current,
        relative_mean_motion_rad_s: rel_n,
        wait_angle_rad: wait_angle,
        wait_time_s: wait_time,
        synodic_period_s: synodic_period,
        departure_time_s: departure_time,
        arrival_time_s: arrival_time,
        departure_longitude_rad: normalize(theta1_rad + n1_rad_s * departure_time),
        arrival_longitude_rad: normalize(theta2_rad + n2_rad_s * arrival_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_aligned_departs_immediately() {
        // Target leads by exactly the required angle.
        let (n1, n2, tof) = (2.0e-7, 1.0e-7, 1.0e7);
        let required = normalize(PI - n2 * tof);
        let solution = solve(n1, n2, tof, 0.0, required);
        let wait = solution.wait_time_s.unwrap();
        let synodic = solution.synodic_period_s.unwrap();
        assert!(wait < 1e-3 || (synodic - wait) < 1e-3, "wait = {wait}");
        assert!(wait.is_sign_positive());
    }

    #[test]
    fn equal_rates_leave_wait_undefined() {
        let solution = solve(1.0e-7, 1.0e-7, 3.0e7, 0.0, 1.0);
        assert!(solution.is_degenerate());
        assert_eq!(solution.synodic_period_s, None);
        assert_eq!(solution.departure_time_s, 0.0);
        assert_eq!(solution.arrival_time_s, 3.0e7);
    }
}
