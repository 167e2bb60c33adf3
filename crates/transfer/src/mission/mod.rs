//! Transfer planner that sequences the heliocentric leg, launch phasing, and the optional
//! escape add-on into one immutable report.

pub mod departure;
pub mod interplanetary;
pub mod phasing;

use hohmann_config::{BodyCatalog, BodyConfig};
use hohmann_core::angle;
use hohmann_core::constants::DEFAULT_TARGET_LEAD_DEG;
use hohmann_core::units::{au_to_m, m_to_au};
use hohmann_impulsive::TransferDirection;
use hohmann_orbits::{CentralBody, OrbitError, OrbitSpec};
use serde::Serialize;

use self::departure::{DepartureConfig, DeparturePlan};
use self::interplanetary::InterplanetaryPlan;
use self::phasing::PhaseSolution;

/// Feature switches shared by every front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorOptions {
    pub include_phase_timing: bool,
    pub include_escape_addon: bool,
    /// Allow targets given as a bare radius instead of a catalog body.
    pub custom_radius_allowed: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            include_phase_timing: true,
            include_escape_addon: true,
            custom_radius_allowed: true,
        }
    }
}

/// Where one end of the transfer sits.
#[derive(Debug, Clone, PartialEq)]
pub enum OrbitTarget {
    /// Catalog body, looked up case-insensitively.
    Body(String),
    /// Custom circular orbit radius in metres.
    Radius(f64),
}

impl OrbitTarget {
    pub fn body(name: impl Into<String>) -> Self {
        Self::Body(name.into())
    }

    pub fn radius_au(radius_au: f64) -> Self {
        Self::Radius(au_to_m(radius_au))
    }
}

/// Inputs for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub departure: OrbitTarget,
    pub arrival: OrbitTarget,
    /// Overrides the catalog's central-body μ (m³/s²).
    pub central_mu_m3_s2: Option<f64>,
    /// Current longitude of the departure body; defaults to zero.
    pub departure_longitude_rad: Option<f64>,
    /// Current longitude of the target; defaults to 60° ahead of the departure body.
    pub arrival_longitude_rad: Option<f64>,
    pub escape: DepartureConfig,
    pub options: CalculatorOptions,
}

impl TransferRequest {
    pub fn new(departure: OrbitTarget, arrival: OrbitTarget) -> Self {
        Self {
            departure,
            arrival,
            central_mu_m3_s2: None,
            departure_longitude_rad: None,
            arrival_longitude_rad: None,
            escape: DepartureConfig::default(),
            options: CalculatorOptions::default(),
        }
    }

    pub fn with_longitudes(mut self, departure_rad: f64, arrival_rad: f64) -> Self {
        self.departure_longitude_rad = Some(departure_rad);
        self.arrival_longitude_rad = Some(arrival_rad);
        self
    }

    pub fn with_options(mut self, options: CalculatorOptions) -> Self {
        self.options = options;
        self
    }
}

/// One resolved end of the transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub name: String,
    pub radius_m: f64,
    /// Current longitude in `[0, 2π)` when phasing was requested.
    pub longitude_rad: Option<f64>,
}

/// Aggregated result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReport {
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub central_mu_m3_s2: f64,
    pub cruise: InterplanetaryPlan,
    pub phasing: Option<PhaseSolution>,
    pub escape: Option<DeparturePlan>,
    /// Heliocentric total plus the escape burn when included.
    pub mission_delta_v_m_s: f64,
}

impl TransferReport {
    pub fn direction(&self) -> TransferDirection {
        self.cruise.direction()
    }

    /// `None` when phasing was skipped or the wait is undefined.
    pub fn wait_time_s(&self) -> Option<f64> {
        self.phasing.and_then(|p| p.wait_time_s)
    }
}

/// Top-level calculation error.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("unknown body '{name}' (known: {known})")]
    UnknownBody { name: String, known: String },
    #[error("custom orbit radii are disabled; pick a catalog body")]
    CustomRadiusNotAllowed,
    #[error("orbit computation failed: {0}")]
    Orbit(#[from] OrbitError),
    #[error("departure planning failed: {0}")]
    Departure(#[from] departure::DepartureError),
}

struct ResolvedTarget<'a> {
    name: String,
    orbit: OrbitSpec,
    body: Option<&'a BodyConfig>,
}

fn resolve<'a>(
    catalog: &'a BodyCatalog,
    target: &OrbitTarget,
    options: &CalculatorOptions,
) -> Result<ResolvedTarget<'a>, MissionError> {
    match target {
        OrbitTarget::Body(name) => {
            let body = catalog
                .find(name)
                .ok_or_else(|| MissionError::UnknownBody {
                    name: name.clone(),
                    known: catalog.names().join(", "),
                })?;
            Ok(ResolvedTarget {
                name: body.name.clone(),
                orbit: OrbitSpec::new(au_to_m(body.orbit_radius_au))?,
                body: Some(body),
            })
        }
        OrbitTarget::Radius(radius_m) => {
            if !options.custom_radius_allowed {
                return Err(MissionError::CustomRadiusNotAllowed);
            }
            let orbit = OrbitSpec::new(*radius_m)?;
            Ok(ResolvedTarget {
                name: format!("Custom({:.3} AU)", m_to_au(orbit.radius_m)),
                orbit,
                body: None,
            })
        }
    }
}

/// Run the calculator against an injected catalog.
///
/// Either every requested section of the report is filled in or an error is returned.
pub fn plan_transfer(
    request: &TransferRequest,
    catalog: &BodyCatalog,
) -> Result<TransferReport, MissionError> {
    let options = &request.options;
    let central = CentralBody::new(
        request
            .central_mu_m3_s2
            .unwrap_or_else(|| catalog.central().mu_m3_s2()),
    )?;

    let mut origin = resolve(catalog, &request.departure, options)?;
    let mut destination = resolve(catalog, &request.arrival, options)?;

    let cruise = interplanetary::plan_interplanetary(
        &central,
        origin.orbit.radius_m,
        destination.orbit.radius_m,
    )?;

    let phasing = if options.include_phase_timing {
        let theta1 = request.departure_longitude_rad.unwrap_or(0.0);
        let theta2 = request
            .arrival_longitude_rad
            .unwrap_or(angle::normalize(theta1) + angle::deg_to_rad(DEFAULT_TARGET_LEAD_DEG));
        origin.orbit = origin.orbit.with_longitude(theta1)?;
        destination.orbit = destination.orbit.with_longitude(theta2)?;
        Some(phasing::solve(
            cruise.departure.mean_motion_rad_s,
            cruise.arrival.mean_motion_rad_s,
            cruise.transfer.transfer_time_s,
            origin.orbit.longitude_or_zero(),
            destination.orbit.longitude_or_zero(),
        ))
    } else {
        None
    };

    let escape = if options.include_escape_addon {
        Some(departure::plan_departure(&request.escape, origin.body)?)
    } else {
        None
    };

    let mission_delta_v =
        cruise.transfer.dv_total_m_s + escape.map(|e| e.delta_v_m_s()).unwrap_or(0.0);

    tracing::info!(
        from = %origin.name,
        to = %destination.name,
        mission_delta_v_m_s = mission_delta_v,
        "transfer calculated"
    );

    Ok(TransferReport {
        departure: Endpoint {
            name: origin.name,
            radius_m: origin.orbit.radius_m,
            longitude_rad: origin.orbit.longitude_rad,
        },
        arrival: Endpoint {
            name: destination.name,
            radius_m: destination.orbit.radius_m,
            longitude_rad: destination.orbit.longitude_rad,
        },
        central_mu_m3_s2: central.mu(),
        cruise,
        phasing,
        escape,
        mission_delta_v_m_s: mission_delta_v,
    })
}
