use bevy::prelude::*;
use planets_physics::diagnostics;
use planets_sim::simulation::SimulationState;
use planets_sim::state::AppState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Planets"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(0.6, 0.9, 1.0, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

pub fn despawn_hud(mut commands: Commands, query: Query<Entity, With<HudText>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame (momentum and energy walk every body)
pub fn update_hud(
    simulation: Res<SimulationState>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let bodies = simulation.bodies();
    let momentum = diagnostics::total_momentum(bodies);
    let energy = diagnostics::kinetic_energy(bodies);
    let paused = if simulation.paused { " [PAUSED]" } else { "" };
    let fault = match &simulation.fault {
        Some(e) => format!("\nHALTED: {e}"),
        None => String::new(),
    };

    **text = format!(
        "PLANETS | {} | {}\n\
         Bodies: {} | Time: {:.2}s | Ticks: {}\n\
         Speed: {}x{}\n\
         Momentum: ({:.3e}, {:.3e}) | Kinetic: {:.3e}{}\n\
         \n\
         [Space] Pause  [1-5] Time scale  [Esc] Setup  [LMB] Log position",
        simulation.config.window.name(),
        simulation.config.force_law.name(),
        bodies.len(),
        simulation.elapsed,
        simulation.tick_count,
        simulation.time_scale,
        paused,
        momentum.x,
        momentum.y,
        energy,
        fault,
    );
}

/// Handle keyboard input for time controls
pub fn time_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<SimulationState>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        if simulation.toggle_pause() {
            info!("Paused: {}", simulation.paused);
        } else {
            info!("Simulation halted, start a new scenario with [Esc]");
        }
    }

    let scales = [
        (KeyCode::Digit1, 1.0),
        (KeyCode::Digit2, 2.0),
        (KeyCode::Digit3, 5.0),
        (KeyCode::Digit4, 10.0),
        (KeyCode::Digit5, 100.0),
    ];
    for (key, scale) in scales {
        if keyboard.just_pressed(key) {
            simulation.time_scale = scale;
            info!("Time scale: {scale}x");
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::Menu);
    }
}
