//! Departure add-on: escape from a low parking orbit around the departure body.

use hohmann_config::BodyConfig;
use hohmann_core::constants::{EARTH_MASS_KG, EARTH_RADIUS_M, G, LEO_ALTITUDE_M};
use hohmann_core::units::km_to_m;
use hohmann_orbits::{EscapeAddOn, OrbitError, escape_from_circular_orbit};
use serde::Serialize;

/// Overrides for the escape add-on. Unset fields fall back to the departure body's
/// catalog data, then to Earth with a 300 km parking orbit.
///
/// Mass and radius describe one body: when `body_mass_kg` is set without
/// `body_radius_m`, the radius is Earth's rather than the departure body's catalog
/// radius. The parking altitude always falls back independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DepartureConfig {
    pub body_mass_kg: Option<f64>,
    pub body_radius_m: Option<f64>,
    pub parking_altitude_m: Option<f64>,
}

/// Result of the departure planning phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeparturePlan {
    pub body_radius_m: f64,
    pub parking_altitude_m: f64,
    pub escape: EscapeAddOn,
}

impl DeparturePlan {
    pub fn delta_v_m_s(&self) -> f64 {
        self.escape.delta_v_m_s
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DepartureError {
    #[error("parking altitude must be non-negative and finite (got {0} m)")]
    InvalidAltitude(f64),
    #[error("body radius must be positive and finite (got {0} m)")]
    InvalidBodyRadius(f64),
    #[error("escape estimate failed: {0}")]
    Orbit(#[from] OrbitError),
}

/// Compute the escape burn from the parking orbit of `body` (or the Earth defaults).
pub fn plan_departure(
    config: &DepartureConfig,
    body: Option<&BodyConfig>,
) -> Result<DeparturePlan, DepartureError> {
    let catalog_mass = body.and_then(|b| b.mass_kg);
    let catalog_radius = body.and_then(|b| b.radius_km).map(km_to_m);
    let catalog_altitude = body.and_then(|b| b.parking_altitude_km).map(km_to_m);

    let mass = config.body_mass_kg.or(catalog_mass).unwrap_or(EARTH_MASS_KG);
    let body_radius = match (config.body_radius_m, config.body_mass_kg) {
        (Some(radius), _) => radius,
        (None, Some(_)) => EARTH_RADIUS_M,
        (None, None) => catalog_radius.unwrap_or(EARTH_RADIUS_M),
    };
    if !(body_radius.is_finite() && body_radius > 0.0) {
        return Err(DepartureError::InvalidBodyRadius(body_radius));
    }
    let altitude = config
        .parking_altitude_m
        .or(catalog_altitude)
        .unwrap_or(LEO_ALTITUDE_M);
    if !(altitude.is_finite() && altitude >= 0.0) {
        return Err(DepartureError::InvalidAltitude(altitude));
    }

    let escape = escape_from_circular_orbit(G, mass, body_radius + altitude)?;
    tracing::debug!(
        body_mass_kg = mass,
        orbit_radius_m = escape.orbit_radius_m,
        delta_v_m_s = escape.delta_v_m_s,
        "planned parking-orbit escape"
    );

    Ok(DeparturePlan {
        body_radius_m: body_radius,
        parking_altitude_m: altitude,
        escape,
    })
}
