//! Core domain: app states, camera, and pause flow.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostStartup, finish_boot)
            .add_systems(Update, toggle_pause);
    }
}
