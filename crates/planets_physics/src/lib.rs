pub mod diagnostics;
pub mod forces;
pub mod integrator;
pub mod scenario;

pub use forces::{attraction, pairwise_acceleration, GravityModel};
pub use integrator::{accumulate_accelerations, Integrator, StepOutcome};
pub use scenario::{generate_bodies, rng_for};
