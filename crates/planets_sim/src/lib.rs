pub mod pipeline;
pub mod simulation;
pub mod state;

pub use pipeline::SimulationPlugin;
pub use simulation::{SimulationState, TickPhase};
pub use state::AppState;
