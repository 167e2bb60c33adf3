//! Configuration models and loaders for the Hohmann phase calculator.
//!
//! The reference data is a [`BodyCatalog`]: the central body plus a table of
//! planet names and mean orbital radii. A built-in catalog is constructed once
//! per process; alternative catalogs can be read from YAML or TOML files.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use hohmann_core::constants::{EARTH_MASS_KG, G, LEO_ALTITUDE_M, SUN_MASS_KG};
use hohmann_core::units::m_to_km;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A body orbiting the central body on a (nominally) circular orbit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub orbit_radius_au: f64,
    /// Alternate spellings accepted by lookups, e.g. localised names.
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub mass_kg: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub parking_altitude_km: Option<f64>,
}

impl BodyConfig {
    /// Whether `name` refers to this body, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.name.to_lowercase() == wanted
            || self.aliases.iter().any(|alias| alias.to_lowercase() == wanted)
    }
}

/// The attracting body at the centre of the system.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CentralBodyConfig {
    pub name: String,
    pub mass_kg: f64,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    /// Explicit μ; when present it wins over `gravitational_constant * mass_kg`.
    #[serde(default)]
    pub mu_m3_s2: Option<f64>,
}

fn default_gravitational_constant() -> f64 {
    G
}

impl CentralBodyConfig {
    pub fn mu_m3_s2(&self) -> f64 {
        self.mu_m3_s2
            .unwrap_or(self.gravitational_constant * self.mass_kg)
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{name}' is invalid: {reason}")]
    InvalidBody { name: String, reason: &'static str },
    #[error("central body '{name}' is invalid: {reason}")]
    InvalidCentralBody { name: String, reason: &'static str },
    #[error("name '{0}' is used by more than one body")]
    DuplicateName(String),
    #[error("catalog contains no bodies")]
    EmptyCatalog,
}

/// Immutable lookup table of bodies around one central body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCatalog {
    central: CentralBodyConfig,
    bodies: Vec<BodyConfig>,
}

impl BodyCatalog {
    /// Validate and assemble a catalog.
    pub fn new(central: CentralBodyConfig, bodies: Vec<BodyConfig>) -> Result<Self, ConfigError> {
        validate_central(&central)?;
        if bodies.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for body in &bodies {
            validate_body(body)?;
            for name in std::iter::once(&body.name).chain(body.aliases.iter()) {
                if !seen.insert(name.to_lowercase()) {
                    return Err(ConfigError::DuplicateName(name.clone()));
                }
            }
        }

        Ok(Self { central, bodies })
    }

    /// The reference Sun-centred catalog, built on first use.
    pub fn builtin() -> &'static BodyCatalog {
        static CATALOG: OnceLock<BodyCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| BodyCatalog {
            central: sun(),
            bodies: builtin_planets(),
        })
    }

    pub fn central(&self) -> &CentralBodyConfig {
        &self.central
    }

    pub fn bodies(&self) -> &[BodyConfig] {
        &self.bodies
    }

    /// Case-insensitive lookup by name or alias.
    pub fn find(&self, name: &str) -> Option<&BodyConfig> {
        self.bodies.iter().find(|body| body.matches(name))
    }

    /// Primary names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|body| body.name.as_str()).collect()
    }
}

fn validate_central(central: &CentralBodyConfig) -> Result<(), ConfigError> {
    let mu = central.mu_m3_s2();
    if !(mu.is_finite() && mu > 0.0) {
        return Err(ConfigError::InvalidCentralBody {
            name: central.name.clone(),
            reason: "gravitational parameter must be positive",
        });
    }
    Ok(())
}

fn validate_body(body: &BodyConfig) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidBody {
        name: body.name.clone(),
        reason,
    };
    if body.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !(body.orbit_radius_au.is_finite() && body.orbit_radius_au > 0.0) {
        return Err(invalid("orbit radius must be positive"));
    }
    if body.mass_kg.is_some_and(|m| !(m.is_finite() && m > 0.0)) {
        return Err(invalid("mass must be positive"));
    }
    if body.radius_km.is_some_and(|r| !(r.is_finite() && r > 0.0)) {
        return Err(invalid("radius must be positive"));
    }
    if body
        .parking_altitude_km
        .is_some_and(|h| !(h.is_finite() && h >= 0.0))
    {
        return Err(invalid("parking altitude must not be negative"));
    }
    Ok(())
}

fn sun() -> CentralBodyConfig {
    CentralBodyConfig {
        name: "Sun".to_string(),
        mass_kg: SUN_MASS_KG,
        gravitational_constant: G,
        mu_m3_s2: None,
    }
}

fn builtin_planets() -> Vec<BodyConfig> {
    // name, mean orbital radius (AU), alias, mass (kg), mean radius (km)
    const PLANETS: [(&str, f64, Option<&str>, f64, f64); 8] = [
        ("Mercury", 0.387, Some("Merkür"), 3.301e23, 2_439.7),
        ("Venus", 0.723, Some("Venüs"), 4.867e24, 6_051.8),
        ("Earth", 1.000, Some("Dünya"), EARTH_MASS_KG, 6_371.0),
        ("Mars", 1.524, None, 6.417e23, 3_389.5),
        ("Jupiter", 5.203, Some("Jüpiter"), 1.898e27, 69_911.0),
        ("Saturn", 9.537, Some("Satürn"), 5.683e26, 58_232.0),
        ("Uranus", 19.191, Some("Uranüs"), 8.681e25, 25_362.0),
        ("Neptune", 30.068, Some("Neptün"), 1.024e26, 24_622.0),
    ];

    PLANETS
        .iter()
        .map(|&(name, radius_au, alias, mass_kg, radius_km)| BodyConfig {
            name: name.to_string(),
            orbit_radius_au: radius_au,
            aliases: alias.map(str::to_string).into_iter().collect(),
            mass_kg: Some(mass_kg),
            radius_km: Some(radius_km),
            parking_altitude_km: Some(m_to_km(LEO_ALTITUDE_M)),
        })
        .collect()
}

/// Load body records from a YAML file, a single TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), count = bodies.len(), "loaded body records");
    Ok(bodies)
}

/// Load a central-body record from a YAML or TOML file.
pub fn load_central_body<P: AsRef<Path>>(path: P) -> Result<CentralBodyConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    if is_toml(path) {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Build a catalog from body records on disk, around an optional central-body file.
///
/// Without a central-body file the reference Sun is used.
pub fn load_catalog<P: AsRef<Path>>(
    bodies_path: P,
    central_path: Option<&Path>,
) -> Result<BodyCatalog, ConfigError> {
    let central = match central_path {
        Some(path) => load_central_body(path)?,
        None => sun(),
    };
    BodyCatalog::new(central, load_bodies(bodies_path)?)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
