pub mod benchmark;
pub mod configuration;
pub mod simulation;

pub use simulation::error::{SimError, SimResult};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::{euler_semi_implicit, verlet_integrator};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, BodyId, BodyState, NVec2, System};

pub use configuration::config::{BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
