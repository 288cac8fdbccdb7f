use bevy::prelude::*;

use super::simulation::SimulationState;
use super::state::AppState;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick.run_if(in_state(AppState::Running)));
    }
}

/// Main simulation tick: advances the planets by the last frame's duration
fn simulation_tick(mut simulation: ResMut<SimulationState>, time: Res<Time>) {
    let dt = time.delta_secs_f64();
    simulation.tick(dt);
}
