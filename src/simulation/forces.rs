//! Acceleration contributors for the central-field simulation
//!
//! Defines the acceleration trait seam and the single force law this
//! simulator uses: inverse-square Newtonian attraction toward a fixed
//! central mass at the origin. Bodies do not attract each other.

use crate::simulation::states::{NVec3, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` is overwritten with the sum of contributions from all
    ///   terms for `i < sys.len()`; slots at and beyond `sys.len()` are
    ///   left untouched
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.len();
        // Zero the active slots only
        for a in out[..n].iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, &mut out[..n]);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Inverse-square gravity from a fixed point mass at the origin
///
/// For each body: `a_i = -gm * x_i / |x_i|^3`, directed toward the origin.
/// Precondition: no body position may equal the origin exactly; the
/// magnitude is zero there and the division produces non-finite output.
/// This is not checked per step -- scenario validation rejects such
/// initial states before the loop starts.
pub struct CentralGravity {
    pub gm: f64, // standard gravitational parameter G*M of the central mass
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            let xi = b.x;

            // |x_i|, distance from the central mass
            let mag = xi.norm();

            // 1 / |x_i|^3, the inverse-square law with the extra factor
            // that normalizes the direction vector:
            //   a = -gm * x / |x|^3
            let inv_r3 = (mag * mag * mag).recip();

            *a += -self.gm * inv_r3 * xi;
        }
    }
}
