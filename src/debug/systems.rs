//! Debug domain: overlay updates and probe-ray gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{ClimbSensor, MotionFlags, MovementTuning, Player, PlayerMotor};

/// Toggle the debug overlay with F1 or backtick
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!("[DEBUG] Info overlay {}", if debug_state.show_info { "ON" } else { "OFF" });

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    player_query: Query<(&PlayerMotor, &MotionFlags, &LinearVelocity, &ClimbSensor), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Some((motor, flags, velocity, sensor)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let mode = if flags.climbing {
            "Climbing"
        } else if flags.grounded {
            "Grounded"
        } else {
            "Airborne"
        };
        let jump = motor.0.jump();
        **text = format!(
            "Mode: {}\nVel: ({:.0}, {:.0})\nFacing: {:+.0}\nJump input age: {:.2}\nGrounded age: {:.2}\nGrace open: {}\nClimbable nearby: {}",
            mode,
            velocity.x,
            velocity.y,
            motor.0.facing(),
            jump.time_since_jump_input,
            jump.time_since_grounded,
            jump.start_jumping,
            sensor.nearby.is_some()
        );
    }
}

/// Draw the slope probes, ground probe, and velocity as gizmo rays.
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &Collider, &PlayerMotor, &LinearVelocity), With<Player>>,
) {
    for (transform, collider, motor, velocity) in &query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(cuboid) => cuboid.half_extents.y,
            None => 24.0,
        };
        let center = transform.translation.truncate();
        let feet = center - Vec2::new(0.0, half_height);
        let config = motor.0.config();
        let facing = motor.0.facing();

        // Side slope probes
        let side = Vec2::new(facing, 0.0) * config.slope_check_horizontal;
        gizmos.line_2d(feet, feet + side, Color::srgb(0.2, 0.9, 0.2));
        gizmos.line_2d(feet, feet - side, Color::srgb(0.2, 0.9, 0.2));

        // Below slope probe
        let below_origin = feet + Vec2::new(0.75 * config.slope_check_horizontal * facing, 0.0);
        gizmos.line_2d(
            below_origin,
            below_origin + Vec2::NEG_Y * config.slope_check_vertical,
            Color::srgb(0.9, 0.2, 0.2),
        );

        // Ground contact probe
        gizmos.line_2d(
            feet,
            feet + Vec2::NEG_Y * tuning.ground_probe_distance,
            Color::srgb(0.9, 0.8, 0.2),
        );

        // Current velocity direction
        gizmos.line_2d(
            center,
            center + velocity.0.normalize_or_zero() * 30.0,
            Color::srgb(0.2, 0.4, 0.9),
        );
    }
}
