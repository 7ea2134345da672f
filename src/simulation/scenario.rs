//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters and constants (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet` with central gravity registered)
//!
//! Bodies whose config gives orbit extrema instead of a velocity are
//! seeded with a tangential (+y) vis-viva speed at their initial distance,
//! so a body placed on the x-axis starts on the configured orbit.
//! All validation happens here, once, before the run.

use crate::configuration::config::{BodyConfig, ScenarioConfig, SetupError};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::orbit::vis_viva_speed;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System, MAX_BODIES};

/// A fully-initialized runtime scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// parameters, current system state, and the set of active force laws.
/// It is exclusively owned by the run loop for the duration of a run.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SetupError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            total_steps: p_cfg.total_steps,
            report_interval: p_cfg.report_interval,
            dt: p_cfg.dt,
            g: p_cfg.g,
            m: p_cfg.m,
        };

        if cfg.bodies.len() > MAX_BODIES {
            return Err(SetupError::TooManyBodies(cfg.bodies.len()));
        }
        if !(parameters.dt > 0.0) {
            return Err(SetupError::NonPositiveDt(parameters.dt));
        }
        if parameters.report_interval == 0 {
            return Err(SetupError::ZeroReportInterval);
        }
        if !(parameters.gm() > 0.0) {
            return Err(SetupError::NonPositiveGm(parameters.gm()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors,
        // deriving missing velocities from the orbit extrema
        let gm = parameters.gm();
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc, gm))
            .collect::<Result<Vec<Body>, SetupError>>()?;

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Forces: construct an AccelSet and register central gravity
        let forces = AccelSet::new().with(CentralGravity { gm });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

fn build_body(i: usize, bc: &BodyConfig, gm: f64) -> Result<Body, SetupError> {
    let x = NVec3::new(bc.x[0], bc.x[1], bc.x[2]);
    let d = x.norm();
    if d == 0.0 {
        return Err(SetupError::BodyAtOrigin(i));
    }

    let v = match (bc.v, bc.periapsis, bc.apoapsis) {
        // Explicit velocity wins over the extrema
        (Some(v), _, _) => NVec3::new(v[0], v[1], v[2]),
        (None, Some(peri), Some(apo)) => {
            if !(peri > 0.0 && apo > 0.0) {
                return Err(SetupError::NonPositiveExtrema(i, peri, apo));
            }
            // vis-viva precondition: the starting point must lie within
            // the orbit's energy range, 2/d >= 2/(peri + apo)
            if d > peri + apo {
                return Err(SetupError::OutsideOrbit(i, d, peri, apo));
            }
            NVec3::new(0.0, vis_viva_speed(gm, d, peri, apo), 0.0)
        }
        _ => return Err(SetupError::MissingVelocity(i)),
    };

    Ok(Body { x, v })
}
