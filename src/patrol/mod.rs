//! Patrol domain: waypoint patrol plugin wiring and public exports.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CycleMode, PathFollower};

use bevy::prelude::*;

use crate::core::GameState;
use crate::patrol::spawn::spawn_patrol_sentries;
use crate::patrol::systems::follow_paths;

pub struct PatrolPlugin;

impl Plugin for PatrolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_patrol_sentries)
            .add_systems(Update, follow_paths.run_if(in_state(GameState::Playing)));
    }
}
