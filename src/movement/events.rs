//! Movement domain: events for climb occupancy changes.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

#[derive(Debug)]
pub struct ClimbStartedEvent {
    pub player: Entity,
    pub climbable: Entity,
}

impl Message for ClimbStartedEvent {}

#[derive(Debug)]
pub struct ClimbEndedEvent {
    pub player: Entity,
    pub climbable: Entity,
}

impl Message for ClimbEndedEvent {}
