//! Controller domain: the engine-free character movement state machine.
//!
//! Converts a per-tick [`InputSample`] plus environment probes into a single
//! output velocity and motion-mode flags, with a buffered/tolerant jump
//! protocol (coyote time, input buffering, start-jump grace timeout) and
//! slope/climb handling. All collaborators arrive through the traits in
//! [`probe`]; the bevy/avian host layer in `crate::movement` is one
//! implementation of that contract, and the tests here run without it.

mod character;
mod climb;
mod config;
mod jump;
mod probe;
mod slope;

#[cfg(test)]
mod tests;

pub use character::{CharacterController, InputSample, TickOutput};
pub use climb::ClimbTransition;
pub use config::{ConfigError, ControllerConfig};
pub use jump::JumpProtocol;
pub use probe::{ClimbSurface, FLAT_BELOW_ANGLE, PhysicsProbe, SurfaceHit};
pub use slope::{SlopeInfo, resolve, slope_angle};
