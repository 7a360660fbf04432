//! Patrol domain: sentry spawning from loaded patrol routes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::movement::GameLayer;
use crate::patrol::PathFollower;

pub(crate) fn spawn_patrol_sentries(mut commands: Commands, registry: Res<ContentRegistry>) {
    let sentry_color = Color::srgb(0.75, 0.35, 0.35);

    for (id, def) in &registry.patrols {
        let waypoints: Vec<Vec2> = def.waypoints.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        let Some(start) = waypoints.first().copied() else {
            warn!("Patrol '{}' has no waypoints, skipping", id);
            continue;
        };

        let mut follower = PathFollower::new(waypoints, def.speed, def.cycle_mode);
        if def.reverse {
            follower = follower.with_reverse();
        }
        if !def.stop_at.is_empty() {
            follower = follower.with_dwell(def.dwell_time, def.stop_at.clone());
        }

        info!("Spawning patrol sentry '{}' with {} waypoints", id, def.waypoints.len());

        commands.spawn((
            follower,
            Sprite {
                color: sentry_color,
                custom_size: Some(Vec2::new(28.0, 28.0)),
                ..default()
            },
            Transform::from_xyz(start.x, start.y, 0.0),
            RigidBody::Kinematic,
            Collider::rectangle(28.0, 28.0),
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ));
    }
}
