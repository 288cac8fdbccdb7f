use bevy::prelude::*;

/// Top-level app flow: setup menu, scenario generation, running simulation
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Menu,
    Loading,
    Running,
}
