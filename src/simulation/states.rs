//! Core state types for the central-field simulation.
//!
//! A `System` holds the list of bodies and the current simulation time `t`.
//! Bodies are identified by their index into the system; there is no
//! separate name/id field.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Maximum number of bodies a system may hold.
pub const MAX_BODIES: usize = 100;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position, m, relative to the central mass at the origin
    pub v: NVec3, // velocity, m/s
}

/// Full simulation state: all bodies plus the clock.
///
/// The body count is fixed for the whole run; the vector is allocated once
/// at setup and never resized while stepping. `t` starts at zero and only
/// advances, by exactly one timestep per integration step.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, index = identity
    pub t: f64, // time, s
}

impl System {
    /// Number of active bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
