use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use planets_core::DVec2;

/// Spawn the 2D camera. The window is sized to the scenario, so one world
/// unit is one pixel and no projection scaling is needed.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Map window coordinates (origin top-left, y down) to world coordinates
/// (origin at the window center, y up)
pub fn window_to_world(position: DVec2, window_size: [f64; 2]) -> Vec2 {
    let [width, height] = window_size;
    Vec2::new(
        (position.x - width / 2.0) as f32,
        (height / 2.0 - position.y) as f32,
    )
}

/// Log the cursor position, in window coordinates, on left click
pub fn log_cursor_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        info!("Click at {} {}", cursor.x.round(), cursor.y.round());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_to_world() {
        let size = [1280.0, 720.0];
        assert_eq!(window_to_world(DVec2::new(640.0, 360.0), size), Vec2::ZERO);
        assert_eq!(window_to_world(DVec2::ZERO, size), Vec2::new(-640.0, 360.0));
        assert_eq!(
            window_to_world(DVec2::new(1280.0, 720.0), size),
            Vec2::new(640.0, -360.0)
        );
    }
}
