//! Transfer façade crate consolidating transfer planning and exposing supporting crates.

pub mod mission;

pub use facade::*;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;

mod facade;
