//! Controller domain: slope classification from probe normals.

use bevy::math::Vec2;

use crate::controller::config::ControllerConfig;
use crate::controller::probe::{PhysicsProbe, probe_slope_below, probe_slope_sides};

/// A classified slope under the character.
///
/// `direction` is the hit normal's perpendicular and points into the facing
/// convention the movement branch expects; `walkable` applies the stricter
/// `max_slope_angle` threshold that governs speed and friction downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeInfo {
    pub direction: Vec2,
    pub angle: f32,
    pub walkable: bool,
}

/// Resolves the slope under the character, if any.
///
/// Side probes win over the below probe. A hit only counts as a slope when
/// its angle falls inside `[min_slope_angle, 90 - min_slope_angle)`; outside
/// that band the ground is treated as flat (shallow) or as a wall (steep).
pub fn resolve<P: PhysicsProbe>(
    physics: &P,
    facing: f32,
    config: &ControllerConfig,
) -> Option<SlopeInfo> {
    let hit = probe_slope_sides(physics, facing, config)
        .or_else(|| probe_slope_below(physics, facing, config))?;

    let direction = hit.normal.perp();
    let angle = slope_angle(direction);

    if config.min_slope_angle <= angle && angle < 90.0 - config.min_slope_angle {
        Some(SlopeInfo { direction, angle, walkable: angle < config.max_slope_angle })
    } else {
        None
    }
}

/// Inclination in degrees of a slope direction, ignoring the sign of the
/// vertical component so up- and down-facing normals classify the same.
pub fn slope_angle(direction: Vec2) -> f32 {
    let corrected = Vec2::new(direction.x, direction.y.abs());
    90.0 - Vec2::Y.angle_to(corrected).abs().to_degrees()
}
