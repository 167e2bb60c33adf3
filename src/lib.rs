//! Hohmann transfer and launch-phasing calculator for circular, coplanar orbits.
//!
//! The physics lives in the member crates; this crate re-exports them so
//! front-ends (CLI, tests, other tools) depend on a single name.

pub use hohmann_config as config;
pub use hohmann_core as common;
pub use hohmann_export as export;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;
pub use hohmann_transfer as transfer;

pub use hohmann_transfer::{
    CalculatorOptions, MissionError, OrbitTarget, TransferReport, TransferRequest, plan_transfer,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
