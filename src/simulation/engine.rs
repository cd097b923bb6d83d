//! High-level runtime engine settings.
//!
//! Selects the integrator used when stepping a `Scenario`.

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler (default) or verlet
}
