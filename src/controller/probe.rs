//! Controller domain: collaborator seams and directional surface probes.

use bevy::math::Vec2;

use crate::controller::config::ControllerConfig;

/// A single directional cast result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}

/// Physics collaborator the controller probes through.
///
/// Cast origins are relative to the character's slope-check anchor (at the
/// feet); the host translates them into world space. A missed cast is a
/// normal `None`, never an error, and each call issues exactly one cast.
pub trait PhysicsProbe {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<SurfaceHit>;

    /// Raw feet-vs-ground contact, without the start-jump override.
    fn feet_in_contact(&self) -> bool;

    /// Current body velocity, read for the unwalkable-slope passthrough and
    /// the airborne vertical component.
    fn velocity(&self) -> Vec2;
}

/// Climbable collaborator: proximity plus occupancy notifications.
pub trait ClimbSurface {
    fn climbable_nearby(&self) -> bool;
    fn on_enter(&mut self);
    fn on_exit(&mut self);
}

/// Fraction of the horizontal check distance the below-probe origin is
/// shifted toward the facing direction.
const BELOW_PROBE_OFFSET: f32 = 0.75;

/// Casts toward the facing direction, then away from it. The first hit wins,
/// so a slope in front shadows one behind.
pub fn probe_slope_sides<P: PhysicsProbe>(
    physics: &P,
    facing: f32,
    config: &ControllerConfig,
) -> Option<SurfaceHit> {
    let front = Vec2::new(facing, 0.0);
    physics
        .cast(Vec2::ZERO, front, config.slope_check_horizontal, config.ground_mask)
        .or_else(|| {
            physics.cast(Vec2::ZERO, -front, config.slope_check_horizontal, config.ground_mask)
        })
}

/// Casts straight down from a point shifted toward the facing direction.
///
/// A hit whose normal sits within [`FLAT_BELOW_ANGLE`] of vertical is flat
/// floor, not a slope; returning `None` keeps float jitter on level ground
/// out of the slope branch.
pub fn probe_slope_below<P: PhysicsProbe>(
    physics: &P,
    facing: f32,
    config: &ControllerConfig,
) -> Option<SurfaceHit> {
    let origin = Vec2::new(BELOW_PROBE_OFFSET * config.slope_check_horizontal * facing, 0.0);
    let hit = physics.cast(origin, Vec2::NEG_Y, config.slope_check_vertical, config.ground_mask)?;

    let tilt = Vec2::Y.angle_to(hit.normal).abs().to_degrees();
    if tilt < FLAT_BELOW_ANGLE { None } else { Some(hit) }
}

/// Below-hit normals closer to vertical than this count as flat ground.
pub const FLAT_BELOW_ANGLE: f32 = 5.0;
