use planets_core::{Body, DVec2, Result, SimConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rng for a scenario: seeded from the config, or from OS entropy if unset
pub fn rng_for(config: &SimConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Scatter `config.body_count` planets at rest across the configured window
pub fn generate_bodies(config: &SimConfig, rng: &mut impl Rng) -> Result<Vec<Body>> {
    config.validate()?;

    let [width, height] = config.window.size();
    (0..config.body_count)
        .map(|_| create_planet(width, height, config, rng))
        .collect()
}

fn create_planet(width: u32, height: u32, config: &SimConfig, rng: &mut impl Rng) -> Result<Body> {
    // Whole-pixel positions and radii
    let position = DVec2::new(rng.gen_range(0..width) as f64, rng.gen_range(0..height) as f64);
    let radius = rng.gen_range(1..=config.max_radius) as f64;

    Body::new(position, radius, config.mass_per_unit)
}
