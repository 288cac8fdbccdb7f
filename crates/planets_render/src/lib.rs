pub mod bodies;
pub mod camera;
pub mod menu;
pub mod plugin;
pub mod ui;

pub use menu::MenuPlugin;
pub use plugin::PlanetsRenderPlugin;
