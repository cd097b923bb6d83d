//! Force contributors for the n-body engine.
//!
//! Defines the [`Force`] trait and direct pairwise Newtonian gravity.
//! Contributions are accumulated in newtons, one total force vector per
//! body; the integrator divides by mass afterwards. Accumulating forces
//! (rather than accelerations) keeps Newton's third law checkable on the
//! raw buffer.

use crate::simulation::error::{SimError, SimResult};
use crate::simulation::states::{BodyId, NVec2, System};

/// Collection of force terms (gravity today, drag etc. later).
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body.
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all bodies in `sys`.
    ///
    /// `out[i]` is set to the sum of contributions from all terms, in
    /// newtons. `out` must have one slot per body. Fails without having any
    /// observable side effect on `sys` if any term reports a singularity.
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Sum over all force contributors
        for term in &self.terms {
            term.accumulate(sys, out)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on a [`System`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Force {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()>;
}

/// Direct pairwise Newtonian gravity, O(n^2), no softening.
///
/// Coincident bodies are a hard error ([`SimError::Singularity`]) rather
/// than a smoothed-over near-miss: the force direction is undefined there.
/// Very small but nonzero separations are left alone and may produce huge
/// or non-finite forces, which propagate to the consumer as-is.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) -> SimResult<()> {
        let n = sys.bodies.len();
        if n == 0 {
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r is the displacement vector from i to j.
                // i feels a pull along +r, j feels a pull along -r.
                let r = bj.x - xi;

                // Squared separation distance |r|^2
                let r2 = r.norm_squared();

                // Coincident bodies: direction of the force is undefined.
                // Must be a reported failure, never a silent divide-by-zero.
                if r2 == 0.0 {
                    return Err(SimError::Singularity(BodyId(i), BodyId(j)));
                }

                // 1 / |r| and 1 / |r|^3
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // F = G m_i m_j / |r|^2 * (r / |r|)
                //   = G m_i m_j * r / |r|^3
                let coef = self.G * mi * bj.m * inv_r3;

                // Equal and opposite (Newton's third law):
                out[i] += coef * r;
                out[j] -= coef * r;
            }
        }
        Ok(())
    }
}
