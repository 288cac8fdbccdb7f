use bevy::prelude::*;
use planets_sim::simulation::SimulationState;

use super::camera::window_to_world;

/// Marker for planet circle entities in the render world
#[derive(Component)]
pub struct BodyCircle {
    pub index: usize,
}

/// Which body set the spawned circles belong to
#[derive(Resource, Default)]
pub struct BodyVisuals {
    pub generation: Option<u32>,
}

/// Maximum rendered bodies (subset of simulation for performance)
const MAX_RENDER_BODIES: usize = 20_000;

/// Respawn the circles whenever the simulation gets a new body set
pub fn sync_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut visuals: ResMut<BodyVisuals>,
    simulation: Res<SimulationState>,
    existing: Query<Entity, With<BodyCircle>>,
) {
    if visuals.generation == Some(simulation.bodies_generation) {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    // One unit circle, scaled per body
    let mesh = meshes.add(Circle::new(1.0));
    let material = materials.add(Color::WHITE);

    let bodies = simulation.bodies();
    let window_size = simulation.config.window_size();

    let mut count = 0;
    for index in render_indices(bodies.len()) {
        let body = &bodies[index];
        // Circle is centered on the body position
        let translation = window_to_world(body.position, window_size).extend(0.0);
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(translation).with_scale(Vec3::splat(body.radius() as f32)),
            BodyCircle { index },
        ));
        count += 1;
    }

    visuals.generation = Some(simulation.bodies_generation);
    info!("Spawned {} circles for {} bodies", count, bodies.len());
}

/// Indices of the bodies to draw: every body, or an even stride across the
/// whole set when there are more than `MAX_RENDER_BODIES`
pub fn render_indices(len: usize) -> impl Iterator<Item = usize> {
    let stride = len.div_ceil(MAX_RENDER_BODIES).max(1);
    (0..len).step_by(stride)
}

/// Move circles to the current body positions
pub fn update_body_visuals(
    simulation: Res<SimulationState>,
    mut query: Query<(&mut Transform, &BodyCircle)>,
) {
    let bodies = simulation.bodies();
    let window_size = simulation.config.window_size();

    for (mut transform, circle) in query.iter_mut() {
        let Some(body) = bodies.get(circle.index) else {
            continue;
        };
        let world = window_to_world(body.position, window_size);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

/// Clear the circles when leaving the running simulation
pub fn despawn_body_visuals(
    mut commands: Commands,
    mut visuals: ResMut<BodyVisuals>,
    query: Query<Entity, With<BodyCircle>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    visuals.generation = None;
}
