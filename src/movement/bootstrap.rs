//! Movement domain: player bootstrap from the active tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::{
    ClimbSensor, GameLayer, MotionFlags, MovementTuning, Player, PlayerMotor,
};

/// Spawns the player with a controller built from the tuning resource.
/// Malformed tuning is rejected once here and replaced by defaults.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = tuning.controller_config();
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!("Rejected movement tuning ({err}), using default controller config");
            MovementTuning::default().controller_config()
        }
    };

    let motor = match CharacterController::new(config) {
        Ok(controller) => PlayerMotor(controller),
        Err(err) => {
            error!("Default controller config failed validation: {err}");
            return;
        }
    };

    info!(
        "Spawning player: normal_speed={}, jump_impulse={}, coyote={}s, buffer={}s",
        tuning.normal_speed,
        tuning.jump_impulse,
        tuning.grounded_tolerance,
        tuning.jump_pressed_tolerance
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            motor,
            ClimbSensor::default(),
            MotionFlags::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(-260.0, 40.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Climbable]),
        ),
    ));
}
