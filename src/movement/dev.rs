//! Movement domain: test room with slopes and a climbable vine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Climbable, GameLayer, Ground};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let slope_color = Color::srgb(0.5, 0.45, 0.3);
    let vine_color = Color::srgba(0.3, 0.7, 0.35, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        ground_layers,
    ));

    // Walkable 20 degree slope on the right
    commands.spawn((
        Ground,
        Sprite {
            color: slope_color,
            custom_size: Some(Vec2::new(300.0, 30.0)),
            ..default()
        },
        Transform {
            translation: Vec3::new(330.0, -130.0, 0.0),
            rotation: Quat::from_rotation_z(20_f32.to_radians()),
            ..default()
        },
        RigidBody::Static,
        Collider::rectangle(300.0, 30.0),
        ground_layers,
    ));

    // Steep 70 degree face past the slope: inside the slope band but not
    // walkable, so the player slides off it.
    commands.spawn((
        Ground,
        Sprite {
            color: slope_color,
            custom_size: Some(Vec2::new(200.0, 30.0)),
            ..default()
        },
        Transform {
            translation: Vec3::new(520.0, 20.0, 0.0),
            rotation: Quat::from_rotation_z(70_f32.to_radians()),
            ..default()
        },
        RigidBody::Static,
        Collider::rectangle(200.0, 30.0),
        ground_layers,
    ));

    // Raised platform reachable from the slope
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-80.0, 0.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        ground_layers,
    ));

    // Climbable vine up to the platform: a sensor volume, so it never blocks
    // movement.
    commands.spawn((
        Climbable::default(),
        Sprite {
            color: vine_color,
            custom_size: Some(Vec2::new(24.0, 220.0)),
            ..default()
        },
        Transform::from_xyz(-160.0, -80.0, -1.0),
        RigidBody::Static,
        Collider::rectangle(24.0, 220.0),
        Sensor,
        CollisionLayers::new(GameLayer::Climbable, [GameLayer::Player]),
    ));
}
