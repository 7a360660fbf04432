//! Controller domain: per-tick orchestration of probes, climb, slope, and
//! jump state into one output velocity.

use bevy::math::Vec2;

use crate::controller::climb::{ClimbTransition, check_climb};
use crate::controller::config::{ConfigError, ControllerConfig};
use crate::controller::jump::JumpProtocol;
use crate::controller::probe::{ClimbSurface, PhysicsProbe};
use crate::controller::slope;

/// One tick's worth of input, immutable for the tick.
///
/// Axes are expected in `[-1, 1]`; the host clamps before sampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_pressed: bool,
}

/// The authoritative result of one tick, overwritten every tick.
#[derive(Debug, Clone, Copy)]
pub struct TickOutput {
    pub velocity: Vec2,
    pub friction_enabled: bool,
    pub gravity_scale: f32,
    pub climbing: bool,
    pub jumping: bool,
    pub grounded: bool,
    pub moving: bool,
    /// Facing-direction scalar, ±1. Persists while horizontal input is zero.
    pub facing: f32,
}

/// The character movement state machine.
///
/// Exactly one of grounded / airborne / climbing holds at any tick boundary,
/// selected in that priority order with climbing checked first. All
/// collaborators are injected; the controller holds no engine handles and no
/// ambient globals.
#[derive(Debug, Clone)]
pub struct CharacterController {
    config: ControllerConfig,
    jump: JumpProtocol,
    is_climbing: bool,
    facing: f32,
    friction_enabled: bool,
}

impl CharacterController {
    /// Rejects malformed tuning once, at construction.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            jump: JumpProtocol::default(),
            is_climbing: false,
            facing: 1.0,
            friction_enabled: false,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn is_climbing(&self) -> bool {
        self.is_climbing
    }

    pub fn jump(&self) -> &JumpProtocol {
        &self.jump
    }

    /// Grounded query with the start-jump override: while the grace window
    /// is open the character reports airborne regardless of contact.
    pub fn is_grounded<P: PhysicsProbe>(&self, physics: &P) -> bool {
        !self.jump.start_jumping && physics.feet_in_contact()
    }

    /// Runs one full state update. Synchronous, no suspension points; `dt`
    /// is elapsed simulation time since the previous tick.
    pub fn tick<P: PhysicsProbe, C: ClimbSurface>(
        &mut self,
        input: InputSample,
        dt: f32,
        physics: &P,
        climb: &mut C,
    ) -> TickOutput {
        if input.horizontal != 0.0 {
            self.facing = input.horizontal.signum();
        }

        self.jump.advance(dt, input.jump_pressed);
        self.jump.update_grace(dt, physics.feet_in_contact(), &self.config);

        let grounded = self.is_grounded(physics);
        let (climbing, transition) =
            check_climb(self.is_climbing, grounded, input.horizontal, input.vertical, climb);
        self.is_climbing = climbing;

        // Exiting a climb discards residual body velocity so no fall speed
        // leaks into the branch below.
        let body_velocity = if transition == ClimbTransition::Exited {
            Vec2::ZERO
        } else {
            physics.velocity()
        };

        let mut velocity;
        if climbing {
            // Free movement on both axes while on the surface.
            velocity = Vec2::new(input.horizontal, input.vertical) * self.config.climb_speed;
        } else if grounded {
            self.jump.note_grounded();

            match slope::resolve(physics, self.facing, &self.config) {
                Some(info) if info.walkable => {
                    // Friction pins the character when idle on the incline;
                    // the inverted input sign follows the slope-direction
                    // convention of the perpendicular.
                    self.friction_enabled = input.horizontal == 0.0;
                    velocity = info.direction * -input.horizontal * self.config.slope_speed;
                }
                Some(_) => {
                    // Too steep to walk: the body slides under gravity, the
                    // controller only passes the physics velocity through.
                    self.friction_enabled = false;
                    velocity = body_velocity;
                }
                None => {
                    self.friction_enabled = false;
                    velocity = Vec2::new(input.horizontal * self.config.normal_speed, 0.0);
                }
            }
        } else {
            // Horizontal control is retained in the air; gravity owns the
            // vertical component.
            velocity = Vec2::new(input.horizontal * self.config.air_speed, body_velocity.y);
        }

        if self.jump.should_fire(&self.config) {
            self.jump.fire();
            self.friction_enabled = false;
            velocity = Vec2::new(input.horizontal * self.config.air_speed, self.config.jump_impulse);
        }

        TickOutput {
            velocity,
            friction_enabled: self.friction_enabled,
            gravity_scale: if self.is_climbing { 0.0 } else { self.config.gravity_scale },
            climbing: self.is_climbing,
            jumping: self.jump.jumping,
            grounded: self.is_grounded(physics),
            moving: velocity.x.abs() > 0.1,
            facing: self.facing,
        }
    }
}
