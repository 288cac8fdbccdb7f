use bevy::prelude::*;
use planets_core::SimConfig;
use planets_render::menu::{AppState, MenuPlugin};
use planets_render::plugin::PlanetsRenderPlugin;
use planets_sim::pipeline::SimulationPlugin;
use planets_sim::simulation::SimulationState;

fn main() {
    let config = SimConfig::default();
    let [width, height] = config.window.size();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planets".into(),
                resolution: (width as f32, height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(SimulationState::empty(config))
        .init_state::<AppState>()
        .add_plugins(SimulationPlugin)
        .add_plugins(PlanetsRenderPlugin)
        .add_plugins(MenuPlugin)
        .run();
}
