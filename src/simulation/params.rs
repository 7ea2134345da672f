//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step count, report cadence and fixed step size,
//! - the gravitational constant `G` and central mass `M`
//!
//! Built once at setup and immutable for the whole run; no component
//! recomputes or mutates the constants afterwards.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub total_steps: u64, // number of integration steps to take
    pub report_interval: u64, // steps between state reports
    pub dt: f64, // fixed time step, s
    pub g: f64, // gravitational constant
    pub m: f64, // central mass, kg
}

impl Parameters {
    /// Standard gravitational parameter `G*M` of the central mass.
    pub fn gm(&self) -> f64 {
        self.g * self.m
    }
}
