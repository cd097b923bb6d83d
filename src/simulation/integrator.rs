//! Fixed-step time integrators for the n-body system.
//!
//! Provides the default semi-implicit (symplectic) Euler step and a
//! velocity-Verlet alternative, both driven by a [`ForceSet`] and
//! [`Parameters`].
//!
//! Every integrator is all-or-nothing per step: if force evaluation fails
//! (coincident bodies), the system is left exactly as it was before the
//! call — no partially updated velocities or positions, `t` unchanged.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, System};
use crate::simulation::error::SimResult;

/// Advance the system by one step using semi-implicit Euler.
///
/// All forces for the step are evaluated from a single consistent snapshot
/// of positions taken at the start of the step, then applied:
///
/// - `v_n+1 = v_n + (F_n / m) * dt`
/// - `x_n+1 = x_n + v_n+1 * dt`  (the *updated* velocity advances position)
///
/// One force evaluation per step. A single body feels no force and is left
/// untouched; an empty system is a no-op (time still advances).
pub fn euler_semi_implicit(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
) -> SimResult<()> {
    let dt = params.h0;
    let n = sys.bodies.len();
    if n == 0 {
        sys.t += dt;
        return Ok(());
    }

    // Total force per body at t_n. Any singularity aborts here, before any
    // body has been mutated.
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f)?;

    // Kick then drift, per body. Forces are already fixed, so mutating
    // positions inside this loop cannot contaminate other bodies' updates.
    for (b, f) in sys.bodies.iter_mut().zip(f.iter()) {
        b.v += (*f / b.m) * dt;
        b.x += dt * b.v;
    }

    sys.t += dt;
    Ok(())
}

/// Advance the system by one step using velocity-Verlet.
///
/// Two force evaluations per step:
///
/// - `v_n+1/2 = v_n + (dt/2) * F_n / m`
/// - `x_n+1   = x_n + dt * v_n+1/2`
/// - `v_n+1   = v_n+1/2 + (dt/2) * F_n+1 / m`
///
/// The second evaluation happens after positions have moved, so the update
/// runs on a scratch copy of the system and is committed only on success.
pub fn verlet_integrator(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
) -> SimResult<()> {
    let dt = params.h0;
    let n = sys.bodies.len();
    if n == 0 {
        sys.t += dt;
        return Ok(());
    }
    let half_dt = 0.5 * dt;

    let mut work = sys.clone();

    // F_n from x_n
    let mut f_old = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&work, &mut f_old)?;

    // Kick: v_n+1/2 = v_n + (dt/2) * F_n / m
    for (b, f) in work.bodies.iter_mut().zip(f_old.iter()) {
        b.v += half_dt * (*f / b.m);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in work.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    work.t += dt;

    // F_n+1 from x_n+1; this can still hit a singularity, in which case the
    // scratch copy is dropped and `sys` stays untouched.
    let mut f_new = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&work, &mut f_new)?;

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * F_n+1 / m
    for (b, f) in work.bodies.iter_mut().zip(f_new.iter()) {
        b.v += half_dt * (*f / b.m);
    }

    *sys = work;
    Ok(())
}
