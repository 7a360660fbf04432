//! Controller domain: constructor-time tuning, validated once.

use std::fmt;

/// Immutable tuning for one character controller.
///
/// Validated by [`ControllerConfig::validate`] at construction; tick code
/// never re-checks these values.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub normal_speed: f32,
    pub air_speed: f32,
    pub climb_speed: f32,
    pub slope_speed: f32,
    /// Upward velocity applied the tick a jump fires.
    pub jump_impulse: f32,
    /// Gravity scale restored when not climbing.
    pub gravity_scale: f32,
    /// Window in which a buffered jump press stays eligible.
    pub jump_pressed_tolerance: f32,
    /// Window after leaving the ground in which a jump still fires.
    pub grounded_tolerance: f32,
    /// Time limit for ground separation after a jump impulse before the
    /// grounded-probe override is released.
    pub start_jump_timeout: f32,
    /// Minimum terrain inclination (degrees) to count as a slope.
    pub min_slope_angle: f32,
    /// Maximum slope inclination (degrees) that is still walkable.
    pub max_slope_angle: f32,
    pub slope_check_horizontal: f32,
    pub slope_check_vertical: f32,
    /// Layer bits the ground/slope probes are restricted to.
    pub ground_mask: u32,
}

impl Default for ControllerConfig {
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
            ground_mask: 1,
        }
    }
}

/// A configuration value rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid controller config: {} {}", self.field, self.reason)
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 7] = [
            ("normal_speed", self.normal_speed),
            ("air_speed", self.air_speed),
            ("climb_speed", self.climb_speed),
            ("slope_speed", self.slope_speed),
            ("jump_impulse", self.jump_impulse),
            ("slope_check_horizontal", self.slope_check_horizontal),
            ("slope_check_vertical", self.slope_check_vertical),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError { field, reason: "must be positive" });
            }
        }

        let non_negative: [(&'static str, f32); 4] = [
            ("jump_pressed_tolerance", self.jump_pressed_tolerance),
            ("grounded_tolerance", self.grounded_tolerance),
            ("start_jump_timeout", self.start_jump_timeout),
            ("gravity_scale", self.gravity_scale),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError { field, reason: "must not be negative" });
            }
        }

        if !(0.0..45.0).contains(&self.min_slope_angle) {
            return Err(ConfigError {
                field: "min_slope_angle",
                reason: "must lie in [0, 45)",
            });
        }
        if self.max_slope_angle < self.min_slope_angle || self.max_slope_angle >= 90.0 {
            return Err(ConfigError {
                field: "max_slope_angle",
                reason: "must lie in [min_slope_angle, 90)",
            });
        }
        if self.ground_mask == 0 {
            return Err(ConfigError {
                field: "ground_mask",
                reason: "must name at least one layer",
            });
        }

        Ok(())
    }
}
