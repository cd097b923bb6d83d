//! Core state types for the n-body simulation.
//!
//! Defines the body registry:
//! - [`Body`] — one point mass (position, velocity, mass) using `NVec2`
//! - [`BodyId`] — stable identity handed out at creation
//! - [`System`] — owns the list of bodies and the current simulation time `t`
//!
//! The registry is the sole owner of body state. Consumers read through
//! [`System::get`] / [`System::snapshot`]; only the integrator mutates.

use nalgebra::Vector2;

use super::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

/// Stable identity of a body within one simulation.
///
/// Ids are handed out in creation order and stay valid for the lifetime of
/// the [`System`] that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub x: NVec2, // position, metres
    pub v: NVec2, // velocity, metres/second
    pub m: f64,   // mass, kilograms, positive
}

/// Read-only view of one body, as returned by [`System::snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub id: BodyId,
    pub x: NVec2,
    pub v: NVec2,
    pub m: f64,
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, creation order
    pub t: f64,            // simulation time
}

impl System {
    /// Empty system at `t = 0`.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
        }
    }

    /// Register a new body and return its identity.
    ///
    /// Rejects `m <= 0` with [`SimError::InvalidMass`]; nothing is added in
    /// that case. NaN mass fails the `> 0` comparison and is rejected too.
    pub fn add_body(&mut self, x: NVec2, v: NVec2, m: f64) -> SimResult<BodyId> {
        if !(m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        let id = BodyId(self.bodies.len());
        self.bodies.push(Body { x, v, m });
        Ok(id)
    }

    /// Copy of the body's current state.
    pub fn get(&self, id: BodyId) -> SimResult<Body> {
        self.bodies
            .get(id.0)
            .copied()
            .ok_or(SimError::UnknownBody(id))
    }

    /// Iterate over all bodies in creation order, reflecting current state.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Integrator-facing mutator; not part of the consumer contract.
    pub fn set_position(&mut self, id: BodyId, x: NVec2) -> SimResult<()> {
        let b = self.bodies.get_mut(id.0).ok_or(SimError::UnknownBody(id))?;
        b.x = x;
        Ok(())
    }

    /// Integrator-facing mutator; not part of the consumer contract.
    pub fn set_velocity(&mut self, id: BodyId, v: NVec2) -> SimResult<()> {
        let b = self.bodies.get_mut(id.0).ok_or(SimError::UnknownBody(id))?;
        b.v = v;
        Ok(())
    }

    /// Ordered snapshot of every body's state, ids included.
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.iter()
            .map(|(id, b)| BodyState {
                id,
                x: b.x,
                v: b.v,
                m: b.m,
            })
            .collect()
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
