//! Heliocentric leg: circular-orbit kinematics for both bodies and the Hohmann transfer between them.

use hohmann_impulsive::{HohmannTransfer, TransferDirection, hohmann};
use hohmann_orbits::{CentralBody, OrbitError};
use serde::Serialize;

/// Kinematics of one circular orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircularOrbitState {
    pub radius_m: f64,
    pub mean_motion_rad_s: f64,
    pub period_s: f64,
    pub circular_speed_m_s: f64,
}

impl CircularOrbitState {
    pub fn new(central: &CentralBody, radius_m: f64) -> Result<Self, OrbitError> {
        Ok(Self {
            radius_m,
            mean_motion_rad_s: central.mean_motion(radius_m)?,
            period_s: central.period(radius_m)?,
            circular_speed_m_s: central.circular_velocity(radius_m)?,
        })
    }
}

/// Result of the heliocentric planning phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterplanetaryPlan {
    pub departure: CircularOrbitState,
    pub arrival: CircularOrbitState,
    pub transfer: HohmannTransfer,
}

impl InterplanetaryPlan {
    pub fn direction(&self) -> TransferDirection {
        self.transfer.direction
    }
}

/// Compute both circular orbits and the Hohmann ellipse joining them.
pub fn plan_interplanetary(
    central: &CentralBody,
    r1_m: f64,
    r2_m: f64,
) -> Result<InterplanetaryPlan, OrbitError> {
    let departure = CircularOrbitState::new(central, r1_m)?;
    let arrival = CircularOrbitState::new(central, r2_m)?;
    let transfer = hohmann(r1_m, r2_m, central)?;

    tracing::debug!(
        r1_m,
        r2_m,
        semi_major_axis_m = transfer.semi_major_axis_m,
        transfer_time_s = transfer.transfer_time_s,
        dv_total_m_s = transfer.dv_total_m_s,
        direction = transfer.direction.label(),
        "planned Hohmann transfer"
    );

    Ok(InterplanetaryPlan {
        departure,
        arrival,
        transfer,
    })
}
