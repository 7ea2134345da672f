//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario plus the validation errors raised while turning it into a
//! runtime [`Scenario`](crate::simulation::scenario::Scenario):
//!
//! - [`ParametersConfig`] – run controls and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//! - [`SetupError`]       – validation faults detected before the run starts
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   total_steps: 2560000    # integration steps to take
//!   report_interval: 20000  # steps between outputs
//!   dt: 3200.0              # fixed timestep, s
//!   g: 6.674e-11            # gravitational constant
//!   m: 1.9891e30            # central mass, kg
//!
//! bodies:
//!   - x: [4.6e10, 0.0, 0.0]
//!     periapsis: 4.6e10     # tangential speed derived from vis-viva
//!     apoapsis: 6.98e10
//!   - x: [1.075e11, 0.0, 0.0]
//!     v: [0.0, 3.5e4, 0.0]  # or give the velocity outright
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::states::MAX_BODIES;

/// Run controls and physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub total_steps: u64,     // number of integration steps
    pub report_interval: u64, // steps between state reports
    pub dt: f64,              // fixed time step, s
    pub g: f64,               // gravitational constant
    pub m: f64,               // central mass, kg
}

/// Configuration for a single body's initial state
///
/// The initial velocity is either given outright via `v`, or derived as a
/// tangential vis-viva speed from the orbit extrema `periapsis`/`apoapsis`.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position, m
    #[serde(default)]
    pub v: Option<[f64; 3]>, // explicit initial velocity, m/s
    #[serde(default)]
    pub periapsis: Option<f64>, // closest approach to the central mass, m
    #[serde(default)]
    pub apoapsis: Option<f64>, // farthest distance from the central mass, m
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // run controls and physical constants
    pub bodies: Vec<BodyConfig>, // list of bodies defining the initial state
}

/// Validation faults raised while building a runtime scenario.
///
/// The reference behavior of the integration core is to let bad numbers
/// propagate as NaN/Inf; these checks upgrade that to an explicit fault at
/// the configuration boundary, before the step loop begins. Nothing is
/// re-checked per step.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("scenario has {0} bodies, capacity is {MAX_BODIES}")]
    TooManyBodies(usize),
    #[error("timestep dt must be positive, got {0}")]
    NonPositiveDt(f64),
    #[error("report_interval must be nonzero")]
    ZeroReportInterval,
    #[error("G*M must be positive, got {0}")]
    NonPositiveGm(f64),
    #[error("body {0} sits at the origin; central-field acceleration is undefined there")]
    BodyAtOrigin(usize),
    #[error("body {0} needs either `v` or both `periapsis` and `apoapsis`")]
    MissingVelocity(usize),
    #[error("body {0}: orbit extrema must be positive, got periapsis {1}, apoapsis {2}")]
    NonPositiveExtrema(usize, f64, f64),
    #[error("body {0}: distance {1} lies outside the orbit's energy range (periapsis {2}, apoapsis {3})")]
    OutsideOrbit(usize, f64, f64, f64),
}
