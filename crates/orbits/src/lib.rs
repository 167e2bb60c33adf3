//! Orbit utility helpers: central-body parameters, circular-orbit kinematics, and
//! the escape add-on from a low parking orbit.
//!
//! Everything here is expressed in SI units (metres, seconds, kilograms).

use std::f64::consts::TAU;

use hohmann_core::angle;
use hohmann_core::constants::{G, SUN_MASS_KG};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the kinematics layer.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OrbitError {
    #[error("orbit radius must be positive and finite (got {0} m)")]
    InvalidRadius(f64),
    #[error("gravitational parameter must be positive and finite (got {0} m^3/s^2)")]
    InvalidGravitationalParameter(f64),
    #[error("body mass must be positive and finite (got {0} kg)")]
    InvalidMass(f64),
    #[error("longitude must be finite (got {0} rad)")]
    InvalidAngle(f64),
    #[error("negative radicand while computing {quantity}: {value}")]
    Domain { quantity: &'static str, value: f64 },
}

/// Square root that refuses negative or non-finite radicands instead of returning NaN.
///
/// The closed-form transfer identities keep every radicand non-negative for valid
/// radii, so an error here means an invariant was broken upstream.
pub fn sqrt_checked(quantity: &'static str, radicand: f64) -> Result<f64, OrbitError> {
    if radicand.is_finite() && radicand >= 0.0 {
        Ok(radicand.sqrt())
    } else {
        Err(OrbitError::Domain {
            quantity,
            value: radicand,
        })
    }
}

fn validate_radius(radius_m: f64) -> Result<f64, OrbitError> {
    if radius_m.is_finite() && radius_m > 0.0 {
        Ok(radius_m)
    } else {
        Err(OrbitError::InvalidRadius(radius_m))
    }
}

/// Gravitational parameters of the attracting body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentralBody {
    mu_m3_s2: f64,
}

impl CentralBody {
    /// Build from a precomputed standard gravitational parameter μ = G·M.
    pub fn new(mu_m3_s2: f64) -> Result<Self, OrbitError> {
        if mu_m3_s2.is_finite() && mu_m3_s2 > 0.0 {
            Ok(Self { mu_m3_s2 })
        } else {
            Err(OrbitError::InvalidGravitationalParameter(mu_m3_s2))
        }
    }

    /// Build from a gravitational constant and a mass.
    pub fn from_mass(gravitational_constant: f64, mass_kg: f64) -> Result<Self, OrbitError> {
        if !(mass_kg.is_finite() && mass_kg > 0.0) {
            return Err(OrbitError::InvalidMass(mass_kg));
        }
        Self::new(gravitational_constant * mass_kg)
    }

    /// The Sun with the reference mass and gravitational constant.
    pub fn sun() -> Self {
        Self {
            mu_m3_s2: G * SUN_MASS_KG,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu_m3_s2
    }

    /// Angular rate of a circular orbit, `sqrt(μ / r³)` (rad/s).
    pub fn mean_motion(&self, radius_m: f64) -> Result<f64, OrbitError> {
        let r = validate_radius(radius_m)?;
        sqrt_checked("mean motion", self.mu_m3_s2 / r.powi(3))
    }

    /// Orbital period of a circular orbit, `2π / n` (s).
    pub fn period(&self, radius_m: f64) -> Result<f64, OrbitError> {
        Ok(TAU / self.mean_motion(radius_m)?)
    }

    /// Speed on a circular orbit, `sqrt(μ / r)` (m/s).
    pub fn circular_velocity(&self, radius_m: f64) -> Result<f64, OrbitError> {
        let r = validate_radius(radius_m)?;
        sqrt_checked("circular velocity", self.mu_m3_s2 / r)
    }

    /// Vis-viva speed at radius `r` on an orbit of semi-major axis `a`, `sqrt(μ (2/r − 1/a))`.
    ///
    /// Evaluated as `(μ/r)·(2 − r/a)` so that `r == a` reproduces [`Self::circular_velocity`]
    /// bit for bit.
    pub fn vis_viva(&self, radius_m: f64, semi_major_axis_m: f64) -> Result<f64, OrbitError> {
        let r = validate_radius(radius_m)?;
        let a = validate_radius(semi_major_axis_m)?;
        sqrt_checked("vis-viva speed", self.mu_m3_s2 / r * (2.0 - r / a))
    }
}

/// A circular orbit around the central body with an optional current longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSpec {
    pub radius_m: f64,
    pub longitude_rad: Option<f64>,
}

impl OrbitSpec {
    pub fn new(radius_m: f64) -> Result<Self, OrbitError> {
        Ok(Self {
            radius_m: validate_radius(radius_m)?,
            longitude_rad: None,
        })
    }

    /// Attach a current heliocentric longitude, wrapped into `[0, 2π)`.
    pub fn with_longitude(mut self, longitude_rad: f64) -> Result<Self, OrbitError> {
        if !longitude_rad.is_finite() {
            return Err(OrbitError::InvalidAngle(longitude_rad));
        }
        self.longitude_rad = Some(angle::normalize(longitude_rad));
        Ok(self)
    }

    /// Current longitude, treating an unspecified one as zero.
    pub fn longitude_or_zero(&self) -> f64 {
        self.longitude_rad.unwrap_or(0.0)
    }
}

/// Escape burn from a circular parking orbit around a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EscapeAddOn {
    pub body_mass_kg: f64,
    pub orbit_radius_m: f64,
    pub circular_speed_m_s: f64,
    pub escape_speed_m_s: f64,
    pub delta_v_m_s: f64,
}

/// Escape delta-v from a circular orbit of radius `orbit_radius_m` around a body of `body_mass_kg`.
///
/// `dv = max(0, sqrt(2GM/R) − sqrt(GM/R))`.
pub fn escape_from_circular_orbit(
    gravitational_constant: f64,
    body_mass_kg: f64,
    orbit_radius_m: f64,
) -> Result<EscapeAddOn, OrbitError> {
    let body = CentralBody::from_mass(gravitational_constant, body_mass_kg)?;
    let circular_speed = body.circular_velocity(orbit_radius_m)?;
    let escape_speed = sqrt_checked("escape speed", 2.0 * body.mu() / orbit_radius_m)?;

    Ok(EscapeAddOn {
        body_mass_kg,
        orbit_radius_m,
        circular_speed_m_s: circular_speed,
        escape_speed_m_s: escape_speed,
        delta_v_m_s: (escape_speed - circular_speed).max(0.0),
    })
}
