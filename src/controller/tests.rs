//! Controller domain: unit tests for the movement state machine, run
//! against fake collaborators with no physics engine behind them.

use approx::assert_relative_eq;
use bevy::math::Vec2;

use super::probe::{ClimbSurface, PhysicsProbe, SurfaceHit};
use super::{CharacterController, ControllerConfig, InputSample, TickOutput, resolve, slope_angle};

const DT: f32 = 0.02;

/// Scripted physics collaborator: casts answer from stored normals keyed by
/// cast direction (right / left / below).
#[derive(Default)]
struct FakePhysics {
    contact: bool,
    velocity: Vec2,
    right: Option<Vec2>,
    left: Option<Vec2>,
    below: Option<Vec2>,
}

impl PhysicsProbe for FakePhysics {
    fn cast(
        &self,
        _origin: Vec2,
        direction: Vec2,
        _max_distance: f32,
        _mask: u32,
    ) -> Option<SurfaceHit> {
        let normal = if direction.y < -0.5 {
            self.below
        } else if direction.x > 0.5 {
            self.right
        } else {
            self.left
        }?;
        Some(SurfaceHit { point: Vec2::ZERO, normal, distance: 1.0 })
    }

    fn feet_in_contact(&self) -> bool {
        self.contact
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[derive(Default)]
struct FakeClimb {
    nearby: bool,
    enters: u32,
    exits: u32,
}

impl ClimbSurface for FakeClimb {
    fn climbable_nearby(&self) -> bool {
        self.nearby
    }

    fn on_enter(&mut self) {
        self.enters += 1;
    }

    fn on_exit(&mut self) {
        self.exits += 1;
    }
}

/// Surface normal for a slope of `angle` degrees, tilted toward +x.
fn normal_for(angle: f32) -> Vec2 {
    Vec2::new(angle.to_radians().sin(), angle.to_radians().cos())
}

fn config() -> ControllerConfig {
    ControllerConfig {
        normal_speed: 5.0,
        air_speed: 3.0,
        climb_speed: 2.0,
        slope_speed: 4.0,
        jump_impulse: 10.0,
        gravity_scale: 1.0,
        jump_pressed_tolerance: 0.12,
        grounded_tolerance: 0.12,
        start_jump_timeout: 0.2,
        min_slope_angle: 10.0,
        max_slope_angle: 60.0,
        slope_check_horizontal: 1.0,
        slope_check_vertical: 1.0,
        ground_mask: 1,
    }
}

fn controller() -> CharacterController {
    CharacterController::new(config()).expect("test config is valid")
}

fn walk(input: f32) -> InputSample {
    InputSample { horizontal: input, ..Default::default() }
}

fn tick(
    controller: &mut CharacterController,
    input: InputSample,
    physics: &FakePhysics,
    climb: &mut FakeClimb,
) -> TickOutput {
    controller.tick(input, DT, physics, climb)
}

#[test]
fn test_flat_ground_walk() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);

    assert_eq!(out.velocity, Vec2::new(5.0, 0.0));
    assert!(!out.friction_enabled);
    assert!(out.grounded);
    assert!(out.moving);
    assert!(!out.climbing);
}

#[test]
fn test_idle_on_walkable_slope_pins_with_friction() {
    let mut controller = controller();
    let physics =
        FakePhysics { contact: true, right: Some(normal_for(20.0)), ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(0.0), &physics, &mut climb);

    assert!(out.friction_enabled);
    assert_eq!(out.velocity, Vec2::ZERO);
    assert!(!out.moving);
}

#[test]
fn test_slope_velocity_uses_inverted_input_sign() {
    // `direction` is the hit normal's perpendicular, so travel along the
    // slope takes the inverted input sign. Intentional; see DESIGN.md.
    let mut controller = controller();
    let normal = normal_for(20.0);
    let physics = FakePhysics { contact: true, right: Some(normal), ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);

    let expected = normal.perp() * -1.0 * 4.0;
    assert_relative_eq!(out.velocity.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(out.velocity.y, expected.y, epsilon = 1e-5);
    assert!(!out.friction_enabled);
}

#[test]
fn test_unwalkable_slope_passes_physics_velocity_through() {
    let mut controller = controller();
    // 70 degrees sits inside the slope band but past max_slope_angle.
    let physics = FakePhysics {
        contact: true,
        velocity: Vec2::new(1.5, -3.0),
        right: Some(normal_for(70.0)),
        ..Default::default()
    };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);

    assert_eq!(out.velocity, Vec2::new(1.5, -3.0));
    assert!(!out.friction_enabled);
}

#[test]
fn test_near_vertical_hit_is_not_a_slope() {
    let mut controller = controller();
    // 85 degrees falls outside [min, 90 - min): treated as a wall, so the
    // character walks normally.
    let physics =
        FakePhysics { contact: true, right: Some(normal_for(85.0)), ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);

    assert_eq!(out.velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn test_below_hit_under_five_degrees_is_flat() {
    let physics = FakePhysics { contact: true, below: Some(normal_for(4.0)), ..Default::default() };
    assert!(resolve(&physics, 1.0, &config()).is_none());

    let mut controller = controller();
    let mut climb = FakeClimb::default();
    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);
    assert_eq!(out.velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn test_side_hit_wins_over_below_hit() {
    let physics = FakePhysics {
        contact: true,
        right: Some(normal_for(20.0)),
        below: Some(normal_for(30.0)),
        ..Default::default()
    };

    let info = resolve(&physics, 1.0, &config()).expect("side slope resolves");
    assert_relative_eq!(info.angle, 20.0, epsilon = 1e-4);
}

#[test]
fn test_slope_classification_is_idempotent() {
    let physics =
        FakePhysics { contact: true, right: Some(normal_for(35.0)), ..Default::default() };
    let cfg = config();

    let first = resolve(&physics, 1.0, &cfg).expect("slope resolves");
    let second = resolve(&physics, 1.0, &cfg).expect("slope resolves");

    assert_eq!(first, second);
    assert!(first.walkable);
}

#[test]
fn test_slope_angle_ignores_vertical_sign() {
    let up_facing = normal_for(25.0).perp();
    let down_facing = Vec2::new(up_facing.x, -up_facing.y);

    assert_relative_eq!(slope_angle(up_facing), 25.0, epsilon = 1e-4);
    assert_relative_eq!(slope_angle(down_facing), 25.0, epsilon = 1e-4);
}

#[test]
fn test_airborne_retains_horizontal_control() {
    let mut controller = controller();
    let physics = FakePhysics { velocity: Vec2::new(0.0, -9.8), ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(-1.0), &physics, &mut climb);

    assert_eq!(out.velocity, Vec2::new(-3.0, -9.8));
    assert!(!out.grounded);
}

#[test]
fn test_jump_fires_when_both_windows_hold() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    let out = tick(&mut controller, input, &physics, &mut climb);

    assert!(out.jumping);
    assert_eq!(out.velocity, Vec2::new(0.0, 10.0));
    assert!(!out.friction_enabled);
    // The grace window overrides the raw contact immediately.
    assert!(!out.grounded);
}

#[test]
fn test_coyote_jump_within_tolerance() {
    let mut controller = controller();
    let mut physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    tick(&mut controller, walk(0.0), &physics, &mut climb);
    physics.contact = false;

    // Three airborne ticks: 0.06s since grounded, inside the 0.12 window.
    tick(&mut controller, walk(0.0), &physics, &mut climb);
    tick(&mut controller, walk(0.0), &physics, &mut climb);
    let input = InputSample { jump_pressed: true, ..Default::default() };
    let out = tick(&mut controller, input, &physics, &mut climb);

    assert!(out.jumping);
    assert_relative_eq!(out.velocity.y, 10.0);
}

#[test]
fn test_coyote_window_expired_does_not_fire() {
    let mut controller = controller();
    let mut physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    tick(&mut controller, walk(0.0), &physics, &mut climb);
    physics.contact = false;

    // Eight airborne ticks: 0.16s since grounded, past the 0.12 window.
    for _ in 0..7 {
        tick(&mut controller, walk(0.0), &physics, &mut climb);
    }
    let input = InputSample { jump_pressed: true, ..Default::default() };
    let out = tick(&mut controller, input, &physics, &mut climb);

    assert!(!out.jumping);
    assert_eq!(out.velocity.y, 0.0);
}

#[test]
fn test_buffered_press_fires_on_landing() {
    let mut controller = controller();
    let mut physics = FakePhysics::default();
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    let out = tick(&mut controller, input, &physics, &mut climb);
    assert!(!out.jumping, "never grounded, press alone must not fire");

    tick(&mut controller, walk(0.0), &physics, &mut climb);
    tick(&mut controller, walk(0.0), &physics, &mut climb);

    // Landing 0.06s after the press, still inside the buffer window.
    physics.contact = true;
    let out = tick(&mut controller, walk(0.0), &physics, &mut climb);

    assert!(out.jumping);
    assert_relative_eq!(out.velocity.y, 10.0);
}

#[test]
fn test_buffered_press_expires_before_landing() {
    let mut controller = controller();
    let mut physics = FakePhysics::default();
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);

    for _ in 0..7 {
        tick(&mut controller, walk(0.0), &physics, &mut climb);
    }

    // Landing 0.16s after the press: stale, both windows must hold.
    physics.contact = true;
    let out = tick(&mut controller, walk(0.0), &physics, &mut climb);

    assert!(!out.jumping);
    assert_eq!(out.velocity, Vec2::ZERO);
}

#[test]
fn test_no_refire_while_jumping() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    let first = tick(&mut controller, input, &physics, &mut climb);
    assert!(first.jumping);

    // Fresh press one tick later: grounded recency still holds, but the
    // in-flight jump blocks a second impulse.
    let second = tick(&mut controller, input, &physics, &mut climb);
    assert!(second.jumping);
    assert_ne!(second.velocity.y, 10.0);
}

#[test]
fn test_grace_clears_on_ground_separation() {
    let mut controller = controller();
    let mut physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);
    assert!(controller.jump().start_jumping);

    // Separation on the next tick ends the override well before the 0.2s
    // timeout.
    physics.contact = false;
    tick(&mut controller, walk(0.0), &physics, &mut climb);
    assert!(!controller.jump().start_jumping);
}

#[test]
fn test_grace_window_is_bounded_by_timeout() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    let input = InputSample { jump_pressed: true, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);

    // Contact never separates; the override must still clear once elapsed
    // time passes start_jump_timeout.
    let ticks = (config().start_jump_timeout / DT).ceil() as usize + 1;
    for _ in 0..ticks {
        tick(&mut controller, walk(0.0), &physics, &mut climb);
    }

    assert!(!controller.jump().start_jumping);
    assert!(controller.is_grounded(&physics));
}

#[test]
fn test_climb_enters_on_vertical_input() {
    let mut controller = controller();
    let physics = FakePhysics::default();
    let mut climb = FakeClimb { nearby: true, ..Default::default() };

    let input = InputSample { vertical: 1.0, ..Default::default() };
    let out = tick(&mut controller, input, &physics, &mut climb);

    assert!(out.climbing);
    assert_eq!(out.velocity, Vec2::new(0.0, 2.0));
    assert_eq!(out.gravity_scale, 0.0);
    assert_eq!(climb.enters, 1);
}

#[test]
fn test_climb_force_exits_within_one_tick() {
    let mut controller = controller();
    let physics = FakePhysics::default();
    let mut climb = FakeClimb { nearby: true, ..Default::default() };

    let input = InputSample { vertical: 1.0, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);
    assert!(controller.is_climbing());

    climb.nearby = false;
    let out = tick(&mut controller, input, &physics, &mut climb);

    assert!(!out.climbing);
    assert_eq!(out.gravity_scale, 1.0);
    assert_eq!(climb.exits, 1);
}

#[test]
fn test_climb_exits_by_walking_off_onto_ground() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb { nearby: true, ..Default::default() };

    let input = InputSample { vertical: 1.0, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);

    let out = tick(&mut controller, walk(1.0), &physics, &mut climb);

    assert!(!out.climbing);
    assert_eq!(climb.exits, 1);
    assert_eq!(out.velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn test_climb_exit_discards_residual_fall_velocity() {
    let mut controller = controller();
    let mut physics = FakePhysics::default();
    let mut climb = FakeClimb { nearby: true, ..Default::default() };

    let input = InputSample { vertical: 1.0, ..Default::default() };
    tick(&mut controller, input, &physics, &mut climb);

    // Stale downward body velocity must not leak into the airborne branch
    // on the exit tick.
    physics.velocity = Vec2::new(0.0, -50.0);
    climb.nearby = false;
    let out = tick(&mut controller, walk(0.0), &physics, &mut climb);

    assert!(!out.climbing);
    assert_eq!(out.velocity, Vec2::ZERO);
}

#[test]
fn test_facing_persists_while_idle() {
    let mut controller = controller();
    let physics = FakePhysics { contact: true, ..Default::default() };
    let mut climb = FakeClimb::default();

    assert_eq!(tick(&mut controller, walk(1.0), &physics, &mut climb).facing, 1.0);
    assert_eq!(tick(&mut controller, walk(0.0), &physics, &mut climb).facing, 1.0);
    assert_eq!(tick(&mut controller, walk(-1.0), &physics, &mut climb).facing, -1.0);
    assert_eq!(tick(&mut controller, walk(0.0), &physics, &mut climb).facing, -1.0);
}

#[test]
fn test_back_probe_found_after_facing_flip() {
    let mut controller = controller();
    // Slope geometry only on the left; facing right, the back probe finds it.
    let physics = FakePhysics { contact: true, left: Some(normal_for(20.0)), ..Default::default() };
    let mut climb = FakeClimb::default();

    let out = tick(&mut controller, walk(0.0), &physics, &mut climb);
    assert!(out.friction_enabled, "idle on a slope found behind the character");
}

#[test]
fn test_construction_rejects_bad_config() {
    let mut bad = config();
    bad.grounded_tolerance = -0.1;
    let err = CharacterController::new(bad).unwrap_err();
    assert_eq!(err.field, "grounded_tolerance");

    let mut bad = config();
    bad.normal_speed = 0.0;
    let err = CharacterController::new(bad).unwrap_err();
    assert_eq!(err.field, "normal_speed");

    let mut bad = config();
    bad.max_slope_angle = 5.0;
    let err = CharacterController::new(bad).unwrap_err();
    assert_eq!(err.field, "max_slope_angle");

    let mut bad = config();
    bad.ground_mask = 0;
    let err = CharacterController::new(bad).unwrap_err();
    assert_eq!(err.field, "ground_mask");
}
