//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integrator choice)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!
//! parameters:
//!   t_end: 31536000.0       # total simulation time, seconds
//!   h0: 86400.0             # fixed step size, seconds
//!   G: 6.674e-11            # gravitational constant
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]       # metres
//!     v: [ 0.0, 0.0 ]       # metres/second
//!     m: 1.989e30           # kilograms
//!   - x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.972e24
//! ```
//!
//! `Scenario::build` maps this configuration into the runtime
//! representation, validating body masses along the way.

use serde::Deserialize;

/// Which integrator method is used by the engine,
/// `integrator: "euler"` or `integrator: "verlet"`.
#[derive(Deserialize, Debug, Clone, Default)]
pub enum IntegratorConfig {
    // Semi-implicit (symplectic) Euler, one force evaluation per step.
    // Matches the velocity-then-position update order of the force law.
    #[serde(rename = "euler")]
    #[default]
    Euler,

    // Velocity-Verlet, two force evaluations per step, better long-run
    // energy behavior for the same step size.
    #[serde(rename = "verlet")]
    Verlet,
}

/// High-level engine configuration.
#[derive(Deserialize, Debug, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // time integrator used for advancing the system
}

/// Global numerical and physical parameters for a scenario.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end, seconds
    pub h0: f64,    // time step size, seconds
    pub G: f64,     // gravitational constant
}

/// Configuration for a single body's initial state.
///
/// Fixed-size arrays so a YAML vector of the wrong arity is rejected at
/// deserialization time.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position, metres
    pub v: [f64; 2], // initial velocity, metres/second
    pub m: f64,      // mass, kilograms
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // engine-level configuration (integrator)
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // bodies defining the initial state
}
