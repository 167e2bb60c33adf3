//! Core units, constants, and shared primitives for the Hohmann phase calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Solar mass (kg).
    pub const SUN_MASS_KG: f64 = 1.989e30;
    /// Metres per astronomical unit, rounded to the value used by the reference tables.
    pub const AU_M: f64 = 1.496e11;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Seconds per Julian year (365.25 days).
    pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;
    /// Earth mass (kg).
    pub const EARTH_MASS_KG: f64 = 5.972e24;
    /// Earth mean radius (m).
    pub const EARTH_RADIUS_M: f64 = 6_371e3;
    /// Altitude of the reference low Earth parking orbit (m).
    pub const LEO_ALTITUDE_M: f64 = 300e3;
    /// Default lead of the target body when no current longitude is supplied (degrees).
    pub const DEFAULT_TARGET_LEAD_DEG: f64 = 60.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_M;

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AU_M
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / SECONDS_PER_YEAR
    }
}

/// Planar angle helpers. Angles are radians unless the name says otherwise.
pub mod angle {
    use std::f64::consts::TAU;

    /// Wrap an angle into `[0, 2π)`.
    ///
    /// Uses the Euclidean remainder so negative inputs land on the positive side
    /// (`-1.0` becomes `2π - 1`). A remainder that rounds up to `2π` folds to zero.
    pub fn normalize(theta: f64) -> f64 {
        let wrapped = theta.rem_euclid(TAU);
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Degrees to radians.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }

    /// Radians to degrees.
    #[inline]
    pub fn rad_to_deg(rad: f64) -> f64 {
        rad.to_degrees()
    }

}
