//! Fixed-step leapfrog integrator for the central-field system
//!
//! Implements the synchronized (velocity-Verlet) form of the leapfrog
//! map from t to t + dt, driven by an [`AccelSet`]. WARNING: this
//! integrator is only a symplectic, energy-conserving map when the
//! timestep `dt` is fixed from one call to another; varying it between
//! calls drops the scheme to first order and loses the long-term
//! conservation behavior.

use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec3, System};

/// Advance the system by one step using velocity-Verlet leapfrog.
///
/// Half-kick, full drift, half-kick, with exactly two force evaluations
/// per step. Positions and velocities of all active bodies are updated
/// in place; `sys.t` is left alone (the driver owns the clock). `accel`
/// is a caller-owned scratch buffer of length >= `sys.len()`, so the
/// step itself performs no allocation.
pub fn leapfrog_step(sys: &mut System, forces: &AccelSet, dt: f64, accel: &mut [NVec3]) {
    if sys.is_empty() { // no bodies, return
        return;
    }

    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from x_n at time t_n
    forces.accumulate_accels(sys.t, &*sys, accel);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // a_n+1 from x_n+1 at time t_n+1
    forces.accumulate_accels(sys.t + dt, &*sys, accel);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += half_dt * *a;
    }
}
