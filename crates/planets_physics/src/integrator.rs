//! Semi-implicit Euler integration of the planets system.
//!
//! One step is two passes:
//! 1. acceleration pass: every body's net acceleration from every other body,
//!    read against the unmodified positions of this step
//! 2. advance pass: all velocities first, then all positions using the new
//!    velocities
//!
//! The step is staged in scratch buffers and only written back once every
//! value is finite, so a failed step leaves the bodies exactly as they were.

use planets_core::{Body, DVec2, Quantity, Result, SimError};

use crate::forces::{pairwise_acceleration, GravityModel};

/// What a call to [`Integrator::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// `dt == 0`, nothing touched
    Skipped,
}

pub struct Integrator {
    model: GravityModel,
    /// `m²G` (or `mG`) per body, same order as the bodies
    source_constants: Vec<f64>,
    /// Contribution of each body k to the body currently being summed
    pair_contributions: Vec<DVec2>,
    accelerations: Vec<DVec2>,
    staged_velocities: Vec<DVec2>,
    staged_positions: Vec<DVec2>,
}

impl Integrator {
    pub fn new(model: GravityModel, bodies: &[Body]) -> Self {
        let mut integrator = Self {
            model,
            source_constants: Vec::new(),
            pair_contributions: Vec::new(),
            accelerations: Vec::new(),
            staged_velocities: Vec::new(),
            staged_positions: Vec::new(),
        };
        integrator.rebind(bodies);
        integrator
    }

    /// Recompute the per-body constants. Call whenever the body set changes.
    pub fn rebind(&mut self, bodies: &[Body]) {
        self.source_constants = self.model.source_constants(bodies);
    }

    pub fn model(&self) -> GravityModel {
        self.model
    }

    pub fn source_constants(&self) -> &[f64] {
        &self.source_constants
    }

    /// Advance `bodies` by `dt` seconds.
    pub fn step(&mut self, bodies: &mut [Body], dt: f64) -> Result<StepOutcome> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if self.source_constants.len() != bodies.len() {
            return Err(SimError::StaleConstants {
                expected: bodies.len(),
                found: self.source_constants.len(),
            });
        }
        if dt == 0.0 {
            return Ok(StepOutcome::Skipped);
        }

        accumulate_accelerations(
            bodies,
            &self.source_constants,
            &mut self.pair_contributions,
            &mut self.accelerations,
        );
        check_finite(&self.accelerations, Quantity::Acceleration)?;

        self.staged_velocities.clear();
        self.staged_velocities.extend(
            bodies
                .iter()
                .zip(&self.accelerations)
                .map(|(b, a)| b.velocity + *a * dt),
        );
        check_finite(&self.staged_velocities, Quantity::Velocity)?;

        self.staged_positions.clear();
        self.staged_positions.extend(
            bodies
                .iter()
                .zip(&self.staged_velocities)
                .map(|(b, v)| b.position + *v * dt),
        );
        check_finite(&self.staged_positions, Quantity::Position)?;

        for ((b, v), x) in bodies
            .iter_mut()
            .zip(&self.staged_velocities)
            .zip(&self.staged_positions)
        {
            b.velocity = *v;
            b.position = *x;
        }

        Ok(StepOutcome::Advanced)
    }

    /// Net accelerations computed by the last advancing step
    pub fn last_accelerations(&self) -> &[DVec2] {
        &self.accelerations
    }
}

/// Net acceleration on every body, written to `out` (resized to match).
///
/// For each body i the contribution of every other body k lands in
/// `scratch[k]`, then `scratch` is summed left to right from zero. The
/// summation order is fixed, so results are bit-reproducible for a given body
/// order.
pub fn accumulate_accelerations(
    bodies: &[Body],
    source_constants: &[f64],
    scratch: &mut Vec<DVec2>,
    out: &mut Vec<DVec2>,
) {
    let n = bodies.len();
    out.clear();
    out.resize(n, DVec2::ZERO);
    scratch.resize(n, DVec2::ZERO);

    for (i, target) in bodies.iter().enumerate() {
        for (k, source) in bodies.iter().enumerate() {
            scratch[k] = if i == k {
                DVec2::ZERO
            } else {
                pairwise_acceleration(target, source, source_constants[k])
            };
        }
        out[i] = scratch.iter().fold(DVec2::ZERO, |sum, a| sum + *a);
    }
}

fn check_finite(values: &[DVec2], quantity: Quantity) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SimError::NonFinite { index, quantity }),
        None => Ok(()),
    }
}
