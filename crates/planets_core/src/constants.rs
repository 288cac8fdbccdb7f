// Physical constants and presets (screen-scaled units)
// - Distance: 1 unit = 1 pixel of the window the bodies are generated for
// - Mass: derived from circle area, so 1 unit = 1 px² of "planet"
// - Time: seconds of wall-clock frame time
// G keeps its SI magnitude; the mass-squared force law makes the motion
// visible at these scales.

/// Gravitational constant
pub const G: f64 = 6.67e-11;

/// Mass per unit of circle area (density of every planet)
pub const MASS_PER_UNIT: f64 = 1_000_000.0;

/// HD window size in pixels
pub const HD_SIZE: [u32; 2] = [1280, 720];

/// Full HD window size in pixels
pub const FULL_HD_SIZE: [u32; 2] = [1920, 1080];

/// Default upper bound for a generated planet radius
pub const DEFAULT_MAX_RADIUS: u32 = 10;

/// Default number of planets
pub const DEFAULT_BODY_COUNT: u32 = 20;

/// Largest value accepted for any integer setup input
pub const MAX_INPUT_VALUE: u32 = 10_000_000;
