//! Movement domain: collaborator adapters over the physics engine and the
//! per-frame controller tick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::controller::{ClimbSurface, InputSample, PhysicsProbe, SurfaceHit};
use crate::movement::events::{ClimbEndedEvent, ClimbStartedEvent};
use crate::movement::{
    ClimbSensor, MotionFlags, MovementInput, MovementTuning, Player, PlayerMotor,
};

/// One-frame physics collaborator backed by avian's spatial query. The
/// anchor is the slope-check point at the character's feet; contact and
/// velocity are sampled before the tick so the controller sees a consistent
/// snapshot.
struct AvianProbe<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    anchor: Vec2,
    contact: bool,
    velocity: Vec2,
}

impl PhysicsProbe for AvianProbe<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: u32,
    ) -> Option<SurfaceHit> {
        let direction = Dir2::new(direction).ok()?;
        let filter = SpatialQueryFilter::from_mask(mask);
        let start = self.anchor + origin;

        self.spatial.cast_ray(start, direction, max_distance, true, &filter).map(|hit| {
            SurfaceHit {
                point: start + *direction * hit.distance,
                normal: hit.normal,
                distance: hit.distance,
            }
        })
    }

    fn feet_in_contact(&self) -> bool {
        self.contact
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// One-frame climb collaborator: exposes the sensor sweep's proximity and
/// records enter/exit notifications for the message pass after the tick.
#[derive(Default)]
struct ClimbProxy {
    nearby: Option<Entity>,
    occupied: Option<Entity>,
    entered: Option<Entity>,
    exited: Option<Entity>,
}

impl ClimbSurface for ClimbProxy {
    fn climbable_nearby(&self) -> bool {
        self.nearby.is_some()
    }

    fn on_enter(&mut self) {
        self.entered = self.nearby;
    }

    fn on_exit(&mut self) {
        self.exited = self.occupied.or(self.nearby);
    }
}

/// Ticks every player controller once per frame and writes the output back
/// into the physics body: velocity, gravity scale, friction, sprite facing,
/// and the animation flags.
pub(crate) fn drive_motors(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    mut started: MessageWriter<ClimbStartedEvent>,
    mut ended: MessageWriter<ClimbEndedEvent>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut PlayerMotor,
            &mut ClimbSensor,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Friction,
            &mut MotionFlags,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (
        entity,
        transform,
        collider,
        mut motor,
        mut sensor,
        mut velocity,
        mut gravity,
        mut friction,
        mut flags,
        mut sprite,
    ) in &mut query
    {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(cuboid) => cuboid.half_extents.y,
            None => 24.0,
        };
        let feet = transform.translation.truncate() - Vec2::new(0.0, half_height);

        let probe = AvianProbe {
            spatial: &spatial_query,
            anchor: feet,
            contact: ground_contact(&spatial_query, feet, &tuning, motor.0.config().ground_mask),
            velocity: velocity.0,
        };
        let mut climb = ClimbProxy {
            nearby: sensor.nearby,
            occupied: sensor.occupied,
            ..Default::default()
        };

        let sample = InputSample {
            horizontal: input.axis.x.clamp(-1.0, 1.0),
            vertical: input.axis.y.clamp(-1.0, 1.0),
            jump_pressed: input.jump_just_pressed,
        };

        let out = motor.0.tick(sample, dt, &probe, &mut climb);

        velocity.0 = out.velocity;
        gravity.0 = out.gravity_scale;
        *friction = Friction::new(if out.friction_enabled { tuning.full_friction } else { 0.0 });
        sprite.flip_x = out.facing < 0.0;

        flags.climbing = out.climbing;
        flags.jumping = out.jumping;
        flags.grounded = out.grounded;
        flags.moving = out.moving;
        flags.vertical_velocity = out.velocity.y;

        if let Some(climbable) = climb.entered {
            sensor.occupied = Some(climbable);
            started.write(ClimbStartedEvent { player: entity, climbable });
        }
        if let Some(climbable) = climb.exited {
            sensor.occupied = None;
            ended.write(ClimbEndedEvent { player: entity, climbable });
        }
    }
}

/// Short downward ray from the feet, restricted to the ground layers.
fn ground_contact(
    spatial_query: &SpatialQuery,
    feet: Vec2,
    tuning: &MovementTuning,
    mask: u32,
) -> bool {
    let filter = SpatialQueryFilter::from_mask(mask);
    spatial_query
        .cast_ray(feet, Dir2::NEG_Y, tuning.ground_probe_distance, true, &filter)
        .is_some()
}
