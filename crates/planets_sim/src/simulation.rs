use bevy::prelude::*;
use planets_core::{Body, Result, SimConfig, SimError};
use planets_physics::{GravityModel, Integrator, StepOutcome};

/// Whether a tick is currently running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickPhase {
    #[default]
    Idle,
    Ticking,
}

/// The running planets system, tracked as a Bevy Resource.
///
/// Owns the bodies exclusively; the renderer only ever reads them through
/// [`SimulationState::bodies`].
#[derive(Resource)]
pub struct SimulationState {
    bodies: Vec<Body>,
    integrator: Integrator,
    phase: TickPhase,
    /// Simulated seconds since the scenario started
    pub elapsed: f64,
    /// Number of ticks that advanced the bodies
    pub tick_count: u64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Multiplier applied to every frame time before integrating
    pub time_scale: f64,
    /// Config the current bodies were generated from
    pub config: SimConfig,
    /// Set when a tick was rejected; the simulation stays paused until reset
    pub fault: Option<SimError>,
    /// Incremented when the body set is replaced (render uses this)
    pub bodies_generation: u32,
}

impl SimulationState {
    /// Placeholder with no bodies (used before scenario generation completes)
    pub fn empty(config: SimConfig) -> Self {
        Self::new(config, Vec::new())
    }

    pub fn new(config: SimConfig, bodies: Vec<Body>) -> Self {
        let integrator = Integrator::new(GravityModel::from_config(&config), &bodies);
        Self {
            bodies,
            integrator,
            phase: TickPhase::Idle,
            elapsed: 0.0,
            tick_count: 0,
            paused: false,
            time_scale: 1.0,
            config,
            fault: None,
            bodies_generation: 0,
        }
    }

    /// Advance the system by one frame of `dt` seconds.
    ///
    /// A rejected tick leaves the bodies as they were, logs the reason and, for
    /// numeric faults, pauses the simulation.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        match self.try_tick(dt) {
            Ok(_) => {}
            Err(SimError::InvalidTimeStep(dt)) => {
                warn!("Ignoring frame with invalid time step {dt}");
            }
            Err(e) => {
                error!(
                    "Simulation halted at t = {:.3}s after {} ticks: {e}",
                    self.elapsed, self.tick_count
                );
                self.paused = true;
                self.fault = Some(e);
            }
        }
    }

    /// [`SimulationState::tick`] without pause handling or logging
    pub fn try_tick(&mut self, dt: f64) -> Result<StepOutcome> {
        debug_assert_eq!(self.phase, TickPhase::Idle, "ticks must not overlap");
        self.phase = TickPhase::Ticking;

        let effective_dt = dt * self.time_scale;
        let outcome = self.integrator.step(&mut self.bodies, effective_dt);
        if outcome == Ok(StepOutcome::Advanced) {
            self.elapsed += effective_dt;
            self.tick_count += 1;
        }

        self.phase = TickPhase::Idle;
        outcome
    }

    /// Replace the body set with a freshly generated scenario
    pub fn replace_bodies(&mut self, config: SimConfig, bodies: Vec<Body>) {
        let generation = self.bodies_generation.wrapping_add(1);
        let time_scale = self.time_scale;
        *self = Self::new(config, bodies);
        self.bodies_generation = generation;
        self.time_scale = time_scale;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// Flip the pause flag. Returns `false` when the simulation is halted by a
    /// fault and the flag was left alone.
    pub fn toggle_pause(&mut self) -> bool {
        // A faulted system stays stopped until a new scenario replaces it
        if self.fault.is_some() {
            return false;
        }
        self.paused = !self.paused;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planets_core::{DVec2, ForceLaw, Quantity};

    fn config() -> SimConfig {
        SimConfig {
            force_law: ForceLaw::MassSquared,
            ..SimConfig::default()
        }
    }

    fn pair() -> Vec<Body> {
        vec![
            Body::with_mass(DVec2::new(0.0, 0.0), DVec2::ZERO, 5.0, 1e6).unwrap(),
            Body::with_mass(DVec2::new(100.0, 0.0), DVec2::ZERO, 5.0, 1e6).unwrap(),
        ]
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut sim = SimulationState::new(config(), pair());
        sim.tick(0.5);
        sim.tick(0.25);
        assert_eq!(sim.tick_count, 2);
        assert_relative_eq!(sim.elapsed, 0.75);
        assert_eq!(sim.phase(), TickPhase::Idle);
        assert!(sim.bodies()[0].position.x > 0.0);
    }

    #[test]
    fn test_zero_dt_does_not_count() {
        let mut sim = SimulationState::new(config(), pair());
        let before = sim.bodies().to_vec();
        assert_eq!(sim.try_tick(0.0), Ok(StepOutcome::Skipped));
        assert_eq!(sim.tick_count, 0);
        assert_eq!(sim.elapsed, 0.0);
        assert_eq!(sim.bodies(), before.as_slice());
    }

    #[test]
    fn test_time_scale() {
        let mut fast = SimulationState::new(config(), pair());
        fast.time_scale = 4.0;
        fast.tick(0.25);

        let mut plain = SimulationState::new(config(), pair());
        plain.tick(1.0);

        assert_eq!(fast.bodies(), plain.bodies());
        assert_eq!(fast.elapsed, plain.elapsed);
    }

    #[test]
    fn test_toggle_pause() {
        let mut sim = SimulationState::new(config(), pair());
        assert!(sim.toggle_pause());
        assert!(sim.paused);
        assert!(sim.toggle_pause());
        assert!(!sim.paused);
    }

    #[test]
    fn test_paused_ignores_ticks() {
        let mut sim = SimulationState::new(config(), pair());
        sim.toggle_pause();
        sim.tick(1.0);
        assert_eq!(sim.tick_count, 0);
        assert_eq!(sim.bodies(), pair().as_slice());
    }

    #[test]
    fn test_invalid_dt_is_skipped_not_fatal() {
        let mut sim = SimulationState::new(config(), pair());
        sim.tick(-1.0);
        assert!(!sim.paused);
        assert!(sim.fault.is_none());
        sim.tick(1.0);
        assert_eq!(sim.tick_count, 1);
    }

    #[test]
    fn test_numeric_fault_halts() {
        let runaway = Body::with_mass(
            DVec2::new(f64::MAX, 0.0),
            DVec2::new(f64::MAX, 0.0),
            1.0,
            1.0,
        )
        .unwrap();
        let mut sim = SimulationState::new(config(), vec![runaway]);
        sim.tick(1.0);

        assert!(sim.paused);
        assert_eq!(
            sim.fault,
            Some(SimError::NonFinite {
                index: 0,
                quantity: Quantity::Position
            })
        );
        assert_eq!(sim.bodies()[0], runaway);

        // Stays halted
        assert!(!sim.toggle_pause());
        assert!(sim.paused);
    }

    #[test]
    fn test_replace_bodies_resets_clock() {
        let mut sim = SimulationState::new(config(), pair());
        sim.time_scale = 2.0;
        sim.tick(1.0);
        sim.replace_bodies(config(), pair()[..1].to_vec());

        assert_eq!(sim.bodies().len(), 1);
        assert_eq!(sim.tick_count, 0);
        assert_eq!(sim.elapsed, 0.0);
        assert_eq!(sim.bodies_generation, 1);
        assert_eq!(sim.time_scale, 2.0);
        sim.tick(1.0);
        assert_eq!(sim.tick_count, 1);
    }
}
