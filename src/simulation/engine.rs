//! Run loop for a scenario
//!
//! Owns the step/report cadence: report the state before advancing
//! whenever the step index hits the report interval, take one leapfrog
//! step, advance the clock by the fixed `dt`. After the loop a final
//! report is emitted when the total step count lands on an interval
//! boundary, so a run whose last step coincides with the cadence reports
//! that state too (one report at t = 0 is always produced).
//!
//! There is no error recovery inside the loop: a degenerate position
//! propagates as NaN/Inf through subsequent state rather than halting.
//! The only fallible operation is the reporter's sink.

use std::io;

use crate::output::polar::StateReporter;
use crate::simulation::integrator::leapfrog_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Run a scenario to completion, reporting through `reporter`.
///
/// The acceleration scratch buffer is allocated once here; nothing in the
/// hot loop allocates or resizes.
pub fn run(scenario: &mut Scenario, reporter: &mut dyn StateReporter) -> io::Result<()> {
    let total_steps = scenario.parameters.total_steps;
    let report_interval = scenario.parameters.report_interval;
    let dt = scenario.parameters.dt;

    let mut accel = vec![NVec3::zeros(); scenario.system.len()];

    for step in 0..total_steps {
        if step % report_interval == 0 { // time to output state
            reporter.report(&scenario.system)?;
        }
        leapfrog_step(&mut scenario.system, &scenario.forces, dt, &mut accel);
        scenario.system.t += dt;
    }
    if total_steps % report_interval == 0 { // last output wanted
        reporter.report(&scenario.system)?;
    }

    Ok(())
}
