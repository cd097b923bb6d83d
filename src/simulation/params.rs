//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds the runtime constants of a scenario:
//! - fixed integration step size `h0` and end time `t_end`,
//! - gravitational constant `G`.
//!
//! All values are fixed at scenario build time; the step size is a logical
//! simulation-time increment, decoupled from wall-clock time.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end, used by the headless runner
    pub h0: f64,    // step size, seconds of simulation time
    pub G: f64,     // gravitational constant
}
