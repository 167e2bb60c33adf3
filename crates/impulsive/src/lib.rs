//! Impulsive transfer utilities for circular, coplanar orbits.

pub mod transfers;

pub use transfers::{HohmannTransfer, TransferDirection, hohmann};
