//! Movement domain: host layer driving the character controller through
//! bevy + avian physics, plus plugin wiring and public exports.

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{
    Climbable, ClimbSensor, GameLayer, Ground, MotionFlags, Player, PlayerMotor,
};
pub use events::{ClimbEndedEvent, ClimbStartedEvent};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    detect_climbable, drive_motors, read_input, track_climb_occupancy,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<ClimbStartedEvent>()
            .add_message::<ClimbEndedEvent>()
            .add_systems(OnEnter(GameState::Playing), (spawn_test_room, spawn_player).chain())
            .add_systems(
                Update,
                (read_input, detect_climbable, drive_motors, track_climb_occupancy)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
