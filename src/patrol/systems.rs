//! Patrol domain: waypoint-following movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::patrol::PathFollower;

/// How close a follower must get before a waypoint counts as reached.
const ARRIVAL_RADIUS: f32 = 4.0;

pub(crate) fn follow_paths(
    time: Res<Time>,
    mut query: Query<(&Transform, &mut PathFollower, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();

    for (transform, mut follower, mut velocity) in &mut query {
        if follower.done {
            velocity.0 = Vec2::ZERO;
            continue;
        }
        let Some(target) = follower.current_waypoint() else {
            velocity.0 = Vec2::ZERO;
            continue;
        };

        let position = transform.translation.truncate();
        let to_target = target - position;

        if to_target.length() <= ARRIVAL_RADIUS {
            velocity.0 = Vec2::ZERO;

            // Dwell counts from arrival; advancing resets it.
            if follower.is_stop_point() && follower.dwell_elapsed < follower.dwell_time {
                follower.dwell_elapsed += dt;
                continue;
            }
            follower.advance();
            continue;
        }

        velocity.0 = to_target.normalize_or_zero() * follower.speed;
    }
}
