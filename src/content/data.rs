//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::patrol::CycleMode;

/// Common wrapper for RON files with schema_version and items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Movement tuning as authored in movement.ron.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
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
    pub full_friction: f32,
    pub ground_probe_distance: f32,
}

impl MovementTuningDef {
    pub fn to_tuning(&self) -> MovementTuning {
        MovementTuning {
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
            full_friction: self.full_friction,
            ground_probe_distance: self.ground_probe_distance,
        }
    }
}

/// A patrol route as authored in patrols.ron.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatrolDef {
    pub id: String,
    pub speed: f32,
    pub cycle_mode: CycleMode,
    pub reverse: bool,
    pub dwell_time: f32,
    pub waypoints: Vec<(f32, f32)>,
    pub stop_at: Vec<bool>,
}
