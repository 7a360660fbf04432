//! Core domain: camera setup and run flow systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Boot is over once startup loading has run.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

/// Escape toggles pause; the physics clock is suspended alongside gameplay
/// systems so bodies freeze in place.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            physics_time.pause();
            next_state.set(GameState::Paused);
            info!("Paused");
        }
        GameState::Paused => {
            physics_time.unpause();
            next_state.set(GameState::Playing);
            info!("Resumed");
        }
        GameState::Boot => {}
    }
}
