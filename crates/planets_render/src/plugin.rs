use bevy::prelude::*;
use planets_sim::state::AppState;

use super::bodies;
use super::camera;
use super::ui;

/// Main render plugin: circles, HUD and in-simulation controls
pub struct PlanetsRenderPlugin;

impl Plugin for PlanetsRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<bodies::BodyVisuals>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(OnEnter(AppState::Running), ui::spawn_hud)
            .add_systems(OnExit(AppState::Running), ui::despawn_hud)
            .add_systems(OnEnter(AppState::Menu), bodies::despawn_body_visuals)
            .add_systems(
                Update,
                (
                    bodies::sync_body_visuals,
                    bodies::update_body_visuals.after(bodies::sync_body_visuals),
                    ui::update_hud,
                    ui::time_control_system,
                    camera::log_cursor_clicks,
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
