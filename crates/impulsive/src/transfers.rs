//! Analytic Hohmann transfer in the coplanar, circular limit.
//!
//! Returns the delta-v components and time of flight for two-body Keplerian motion
//! around a [`CentralBody`].

use std::f64::consts::PI;

use hohmann_orbits::{CentralBody, OrbitError, sqrt_checked};
use serde::Serialize;

/// Whether the transfer raises or lowers the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    /// Arrival orbit lies outside the departure orbit (r2 > r1).
    Outward,
    /// Arrival orbit lies inside the departure orbit (r2 < r1).
    Inward,
    /// Both orbits coincide; no burn is needed.
    #[serde(rename = "none")]
    NoTransfer,
}

impl TransferDirection {
    pub fn classify(r1_m: f64, r2_m: f64) -> Self {
        if r2_m > r1_m {
            Self::Outward
        } else if r2_m < r1_m {
            Self::Inward
        } else {
            Self::NoTransfer
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Outward => "outward",
            Self::Inward => "inward",
            Self::NoTransfer => "none",
        }
    }
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HohmannTransfer {
    pub r1_m: f64,
    pub r2_m: f64,
    pub semi_major_axis_m: f64,
    pub transfer_time_s: f64,
    pub circular_speed_departure_m_s: f64,
    pub circular_speed_arrival_m_s: f64,
    /// Transfer-ellipse speed at r1.
    pub transfer_speed_departure_m_s: f64,
    /// Transfer-ellipse speed at r2.
    pub transfer_speed_arrival_m_s: f64,
    pub dv1_signed_m_s: f64, // negative for inward (retro) burn
    pub dv2_signed_m_s: f64, // negative for retro capture when arriving inward
    pub dv_depart_m_s: f64,
    pub dv_arrive_m_s: f64,
    pub dv_total_m_s: f64,
    pub direction: TransferDirection,
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_m`: departure circular orbit radius (m)
/// - `r2_m`: arrival circular orbit radius (m)
/// - `central`: gravitational parameters of the attracting body
///
/// Equal radii are valid: `a = r1`, so [`CentralBody::vis_viva`] returns the circular
/// speed unchanged, both burns are exactly zero and the time of flight is half the
/// circular period.
pub fn hohmann(r1_m: f64, r2_m: f64, central: &CentralBody) -> Result<HohmannTransfer, OrbitError> {
    let v1 = central.circular_velocity(r1_m)?;
    let v2 = central.circular_velocity(r2_m)?;
    let mu = central.mu();

    let a_t = 0.5 * (r1_m + r2_m);
    let tof = PI * sqrt_checked("transfer time", a_t.powi(3) / mu)?;

    let v_t1 = central.vis_viva(r1_m, a_t)?;
    let v_t2 = central.vis_viva(r2_m, a_t)?;

    let dv1 = v_t1 - v1; // positive for outward, negative for inward
    let dv2 = v2 - v_t2; // positive for outward (prograde capture), negative for inward (retro capture)

    Ok(HohmannTransfer {
        r1_m,
        r2_m,
        semi_major_axis_m: a_t,
        transfer_time_s: tof,
        circular_speed_departure_m_s: v1,
        circular_speed_arrival_m_s: v2,
        transfer_speed_departure_m_s: v_t1,
        transfer_speed_arrival_m_s: v_t2,
        dv1_signed_m_s: dv1,
        dv2_signed_m_s: dv2,
        dv_depart_m_s: dv1.abs(),
        dv_arrive_m_s: dv2.abs(),
        dv_total_m_s: dv1.abs() + dv2.abs(),
        direction: TransferDirection::classify(r1_m, r2_m),
    })
}
