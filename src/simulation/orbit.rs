//! Orbit setup helpers.

/// Instantaneous orbital speed at distance `d` on the orbit defined by
/// the periapsis/apoapsis pair, from the vis-viva equation:
///
/// `v = sqrt(gm * (2/d - 2/(peri + apo)))`
///
/// Pure, setup-time only. Precondition: `2/d >= 2/(peri + apo)`, i.e. the
/// point lies within the orbit's valid energy range; outside it the square
/// root of a negative number yields NaN. The caller is responsible for
/// validating this (scenario building rejects such configurations before
/// the run starts).
pub fn vis_viva_speed(gm: f64, d: f64, peri: f64, apo: f64) -> f64 {
    (gm * (2.0 / d - 2.0 / (peri + apo))).sqrt()
}
