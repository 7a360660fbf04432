//! Movement domain: climbable proximity detection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::events::{ClimbEndedEvent, ClimbStartedEvent};
use crate::movement::{Climbable, ClimbSensor, GameLayer, Player};

/// Sweeps the player's collider against climbable sensor volumes and records
/// the first overlap, if any. The drive system consumes the result as the
/// climb collaborator's proximity signal.
pub(crate) fn detect_climbable(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut ClimbSensor), With<Player>>,
    climbable_query: Query<(), With<Climbable>>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Climbable);

    for (transform, collider, mut sensor) in &mut query {
        let intersections = spatial_query.shape_intersections(
            collider,
            transform.translation.truncate(),
            0.0,
            &filter,
        );

        sensor.nearby = intersections
            .iter()
            .copied()
            .find(|entity| climbable_query.get(*entity).is_ok());
    }
}

/// Mirrors climb start/end notifications onto the climbable volumes.
pub(crate) fn track_climb_occupancy(
    mut started: MessageReader<ClimbStartedEvent>,
    mut ended: MessageReader<ClimbEndedEvent>,
    mut climbables: Query<&mut Climbable>,
) {
    for event in started.read() {
        if let Ok(mut climbable) = climbables.get_mut(event.climbable) {
            climbable.occupied = true;
            debug!("Climb started: {:?} on {:?}", event.player, event.climbable);
        }
    }
    for event in ended.read() {
        if let Ok(mut climbable) = climbables.get_mut(event.climbable) {
            climbable.occupied = false;
            debug!("Climb ended: {:?} off {:?}", event.player, event.climbable);
        }
    }
}
