//! State reporting in polar form
//!
//! The run loop hands the reporter a fully consistent snapshot (positions,
//! velocities and time all belong to the same step). Conversion to polar
//! coordinates and the line format live here, outside the integration
//! core.

use std::f64::consts::PI;
use std::io::{self, Write};

use crate::simulation::states::System;

/// Sink for periodic state reports, driven by the run loop.
pub trait StateReporter {
    fn report(&mut self, sys: &System) -> io::Result<()>;
}

/// Writes one line per body per report: time, body index, radial distance
/// from the origin, and polar angle in radians.
pub struct PolarReporter<W: Write> {
    out: W,
}

impl<W: Write> PolarReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> StateReporter for PolarReporter<W> {
    fn report(&mut self, sys: &System) -> io::Result<()> {
        for (i, b) in sys.bodies.iter().enumerate() {
            let (r, theta) = to_polar(b.x[0], b.x[1], b.x[2]);
            writeln!(self.out, "{:8.4} {:4} {:12.6} {:12.6}", sys.t, i, r, theta)?;
        }
        Ok(())
    }
}

/// Cartesian to polar: `r = |x|`, `theta = atan(y/x)` shifted by `+pi`
/// when `x < 0` to restore the correct quadrant for the planar case.
pub fn to_polar(x: f64, y: f64, z: f64) -> (f64, f64) {
    let r = (x * x + y * y + z * z).sqrt();
    let theta = (y / x).atan() + if x < 0.0 { PI } else { 0.0 };
    (r, theta)
}
