//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::ControllerConfig;
use crate::movement::GameLayer;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub normal_speed: f32,
    pub air_speed: f32,
    pub climb_speed: f32,
    pub slope_speed: f32,
    pub jump_impulse: f32,
    pub gravity_scale: f32,
    pub jump_pressed_tolerance: f32,
    pub grounded_tolerance: f32,
    pub start_jump_timeout: f32,
    pub min_slope_angle: f32,
    pub max_slope_angle: f32,
    pub slope_check_horizontal: f32,
    pub slope_check_vertical: f32,
    /// Friction coefficient applied while the controller pins the character
    /// on a slope; zero otherwise.
    pub full_friction: f32,
    /// Reach of the short downward ray that decides ground contact.
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            normal_speed: 320.0,
            air_speed: 260.0,
            climb_speed: 160.0,
            slope_speed: 300.0,
            jump_impulse: 680.0,
            gravity_scale: 1.0,
            jump_pressed_tolerance: 0.12,
            grounded_tolerance: 0.12,
            start_jump_timeout: 0.2,
            min_slope_angle: 10.0,
            max_slope_angle: 60.0,
            slope_check_horizontal: 20.0,
            slope_check_vertical: 28.0,
            full_friction: 1.0,
            ground_probe_distance: 4.0,
        }
    }
}

impl MovementTuning {
    /// Controller configuration for a freshly spawned player. Probes are
    /// restricted to the Ground layer.
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            normal_speed: self.normal_speed,
            air_speed: self.air_speed,
            climb_speed: self.climb_speed,
            slope_speed: self.slope_speed,
            jump_impulse: self.jump_impulse,
            gravity_scale: self.gravity_scale,
            jump_pressed_tolerance: self.jump_pressed_tolerance,
            grounded_tolerance: self.grounded_tolerance,
            start_jump_timeout: self.start_jump_timeout,
            min_slope_angle: self.min_slope_angle,
            max_slope_angle: self.max_slope_angle,
            slope_check_horizontal: self.slope_check_horizontal,
            slope_check_vertical: self.slope_check_vertical,
            ground_mask: GameLayer::Ground.to_bits(),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}
