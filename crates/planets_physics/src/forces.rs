use planets_core::{Body, DVec2, ForceLaw, SimConfig};

/// Gravity parameters shared by every pair in the system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityModel {
    pub g: f64,
    pub law: ForceLaw,
}

impl GravityModel {
    pub fn new(g: f64, law: ForceLaw) -> Self {
        Self { g, law }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.gravitational_constant, config.force_law)
    }

    /// Per-body factor reused for every pair the body attracts:
    /// `m² * G` under the mass-squared law, `m * G` under Newtonian gravity.
    /// Only valid while the body's mass stays the same.
    pub fn source_constant(&self, mass: f64) -> f64 {
        match self.law {
            ForceLaw::MassSquared => mass.powi(2) * self.g,
            ForceLaw::Newtonian => mass * self.g,
        }
    }

    pub fn source_constants(&self, bodies: &[Body]) -> Vec<f64> {
        bodies.iter().map(|b| self.source_constant(b.mass())).collect()
    }
}

/// Acceleration of `target` toward `source`.
///
/// Separation is clamped to the sum of radii, so touching or overlapping
/// planets feel a bounded pull instead of a singular one.
pub fn pairwise_acceleration(target: &Body, source: &Body, source_constant: f64) -> DVec2 {
    attraction(
        target.position,
        target.radius(),
        source.position,
        source.radius(),
        source_constant,
    )
}

/// [`pairwise_acceleration`] on raw components
pub fn attraction(
    pos_i: DVec2,
    radius_i: f64,
    pos_k: DVec2,
    radius_k: f64,
    constant_k: f64,
) -> DVec2 {
    let distance = (pos_i - pos_k).abs();

    let floor = radius_i + radius_k;
    let mut r = distance.length();
    if r < floor {
        r = floor;
    }

    let a = constant_k / r.powi(2);

    let mut ax = a * distance.x / r;
    let mut ay = a * distance.y / r;
    // Magnitudes above are unsigned; point them from i toward k
    if pos_i.x > pos_k.x {
        ax = -ax;
    }
    if pos_i.y > pos_k.y {
        ay = -ay;
    }

    DVec2::new(ax, ay)
}
