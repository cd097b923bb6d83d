//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! `Scenario` is also the external surface of the core: a driver (renderer,
//! batch runner, test harness) calls [`Scenario::step`] at whatever cadence
//! it chooses and reads back state with [`Scenario::snapshot`].

use log::debug;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimResult;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::{euler_semi_implicit, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyState, NVec2, System};

/// A fully-initialized simulation: engine settings, parameters, current
/// system state, and the set of active force laws.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    /// Construct the runtime scenario from its configuration.
    ///
    /// Fails with [`crate::SimError::InvalidMass`] if any configured body
    /// has `m <= 0`; no partially built scenario escapes.
    pub fn build(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> registry entries, validating mass
        let mut system = System::new();
        for bc in &cfg.bodies {
            system.add_body(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.m,
            )?;
        }

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            G: p_cfg.G,
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        // Forces: register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity { G: parameters.G });

        debug!(
            "scenario built: {} bodies, h0 = {}, G = {}",
            system.len(),
            parameters.h0,
            parameters.G
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Advance the simulation by exactly one step of `h0`.
    ///
    /// All-or-nothing: on error the stored state is exactly what the
    /// previous successful step left behind.
    pub fn step(&mut self) -> SimResult<()> {
        match self.engine.integrator {
            IntegratorConfig::Euler => {
                euler_semi_implicit(&mut self.system, &self.forces, &self.parameters)
            }
            IntegratorConfig::Verlet => {
                verlet_integrator(&mut self.system, &self.forces, &self.parameters)
            }
        }
    }

    /// Ordered snapshot of every body, for renderers / loggers / tests.
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.system.snapshot()
    }

    /// True once the system time has reached the configured end time.
    pub fn finished(&self) -> bool {
        self.system.t >= self.parameters.t_end
    }
}
