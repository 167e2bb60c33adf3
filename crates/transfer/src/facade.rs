//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::departure::{DepartureConfig, DepartureError, DeparturePlan};
pub use crate::mission::interplanetary::{CircularOrbitState, InterplanetaryPlan};
pub use crate::mission::phasing::{DEGENERATE_RATE_THRESHOLD, PhaseSolution};
pub use crate::mission::{
    CalculatorOptions, Endpoint, MissionError, OrbitTarget, TransferReport, TransferRequest,
    plan_transfer,
};
pub use hohmann_impulsive::TransferDirection;

pub mod catalog {
    use std::borrow::Cow;
    use std::path::Path;

    use hohmann_config::{BodyCatalog, ConfigError, load_catalog};

    /// Pick the catalog a front-end should inject: the records under `bodies` when given,
    /// otherwise the built-in table. A central-body file without a bodies path is applied
    /// on top of the built-in bodies.
    pub fn select(
        bodies: Option<&Path>,
        central: Option<&Path>,
    ) -> Result<Cow<'static, BodyCatalog>, ConfigError> {
        match (bodies, central) {
            (Some(path), central) => Ok(Cow::Owned(load_catalog(path, central)?)),
            (None, Some(central)) => {
                let builtin = BodyCatalog::builtin();
                let central = hohmann_config::load_central_body(central)?;
                Ok(Cow::Owned(BodyCatalog::new(
                    central,
                    builtin.bodies().to_vec(),
                )?))
            }
            (None, None) => Ok(Cow::Borrowed(BodyCatalog::builtin())),
        }
    }
}
