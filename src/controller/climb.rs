//! Controller domain: climb entry and exit decisions.

use crate::controller::probe::ClimbSurface;

/// Outcome of one climb decision, used by the tick to adjust gravity and
/// discard residual velocity on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbTransition {
    Entered,
    Exited,
    Unchanged,
}

/// One-tick climb decision.
///
/// Rules, in order: no climbable nearby forces an exit; a climbing character
/// that is grounded and pushing horizontally walks off the surface; a
/// non-climbing character pushing vertically grabs on; anything else leaves
/// the state alone. The collaborator is notified of occupancy changes.
pub fn check_climb<C: ClimbSurface>(
    is_climbing: bool,
    grounded: bool,
    horizontal: f32,
    vertical: f32,
    climb: &mut C,
) -> (bool, ClimbTransition) {
    if climb.climbable_nearby() {
        if is_climbing && grounded && horizontal != 0.0 {
            climb.on_exit();
            (false, ClimbTransition::Exited)
        } else if !is_climbing && vertical != 0.0 {
            climb.on_enter();
            (true, ClimbTransition::Entered)
        } else {
            (is_climbing, ClimbTransition::Unchanged)
        }
    } else if is_climbing {
        climb.on_exit();
        (false, ClimbTransition::Exited)
    } else {
        (false, ClimbTransition::Unchanged)
    }
}
