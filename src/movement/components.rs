//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::CharacterController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Climbable sensor volumes (vines, ladders)
    Climbable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// A climbable surface volume. Spawned with a `Sensor` collider on
/// `GameLayer::Climbable` so the player can overlap it.
#[derive(Component, Debug, Default)]
pub struct Climbable {
    pub occupied: bool,
}

/// Climbable entity the player currently overlaps, refreshed every frame by
/// the detection sweep.
#[derive(Component, Debug, Default)]
pub struct ClimbSensor {
    pub nearby: Option<Entity>,
    /// Climbable the player is currently attached to, if any.
    pub occupied: Option<Entity>,
}

/// The per-entity movement state machine.
#[derive(Component, Debug)]
pub struct PlayerMotor(pub CharacterController);

/// Animation-facing flags mirrored from the controller output each frame.
#[derive(Component, Debug, Default)]
pub struct MotionFlags {
    pub climbing: bool,
    pub jumping: bool,
    pub grounded: bool,
    pub moving: bool,
    pub vertical_velocity: f32,
}
