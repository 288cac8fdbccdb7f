use planets_core::{Body, DVec2};

/// Sum of m·v over all bodies
pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies
        .iter()
        .fold(DVec2::ZERO, |sum, b| sum + b.velocity * b.mass())
}

/// Sum of ½·m·v² over all bodies
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.length_squared())
        .sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass(bodies: &[Body]) -> Option<DVec2> {
    if bodies.is_empty() {
        return None;
    }

    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    let weighted = bodies
        .iter()
        .fold(DVec2::ZERO, |sum, b| sum + b.position * b.mass());

    Some(weighted / total_mass)
}

/// Smallest center-to-center distance, `None` with fewer than two bodies
pub fn min_separation(bodies: &[Body]) -> Option<f64> {
    let mut best: Option<f64> = None;

    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let d = a.position.distance(b.position);
            best = Some(best.map_or(d, |m| m.min(d)));
        }
    }

    best
}
