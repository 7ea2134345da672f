pub mod simulation;
pub mod configuration;
pub mod output;

pub use simulation::states::{Body, System, NVec3, MAX_BODIES};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::leapfrog_step;
pub use simulation::orbit::vis_viva_speed;
pub use simulation::scenario::Scenario;
pub use simulation::engine::run;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, SetupError};

pub use output::polar::{StateReporter, PolarReporter, to_polar};
