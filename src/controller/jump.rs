//! Controller domain: buffered jump protocol with coyote time and the
//! start-jump grace window.

use crate::controller::config::ControllerConfig;

/// Timer bank plus jump window state.
///
/// Both timers advance once per tick and start at infinity, meaning "no
/// press yet" and "never grounded". A jump fires only while BOTH windows
/// hold: the press must be recent and the grounded instant must be recent.
/// Either window lapsing silently disables the jump; there is no error path.
#[derive(Debug, Clone)]
pub struct JumpProtocol {
    pub time_since_jump_input: f32,
    pub time_since_grounded: f32,
    pub jumping: bool,
    /// While set, the grounded query reports false regardless of contact so
    /// stale collider settling cannot cancel the impulse just applied.
    pub start_jumping: bool,
    grace_elapsed: f32,
}

impl Default for JumpProtocol {
    fn default() -> Self {
        Self {
            time_since_jump_input: f32::INFINITY,
            time_since_grounded: f32::INFINITY,
            jumping: false,
            start_jumping: false,
            grace_elapsed: 0.0,
        }
    }
}

impl JumpProtocol {
    /// Advances both timers; a press this tick re-arms the input window.
    pub fn advance(&mut self, dt: f32, jump_pressed: bool) {
        self.time_since_jump_input += dt;
        self.time_since_grounded += dt;
        if jump_pressed {
            self.time_since_jump_input = 0.0;
        }
    }

    /// The accumulator runs at tick start and the override clears on timeout
    /// or ground separation, whichever comes first. Bounded, so grounding can
    /// never stay suppressed past `start_jump_timeout`.
    pub fn update_grace(&mut self, dt: f32, feet_in_contact: bool, config: &ControllerConfig) {
        if !self.start_jumping {
            return;
        }
        self.grace_elapsed += dt;
        if config.start_jump_timeout < self.grace_elapsed || !feet_in_contact {
            self.start_jumping = false;
        }
    }

    /// Called every grounded tick.
    pub fn note_grounded(&mut self) {
        self.time_since_grounded = 0.0;
        self.jumping = false;
    }

    /// Both tolerance windows must hold simultaneously: a stale press from
    /// one cliff edge cannot pair with a fresh grounding far later, and vice
    /// versa.
    pub fn should_fire(&self, config: &ControllerConfig) -> bool {
        self.time_since_grounded < config.grounded_tolerance
            && self.time_since_jump_input < config.jump_pressed_tolerance
            && !self.jumping
    }

    pub fn fire(&mut self) {
        self.jumping = true;
        self.start_jumping = true;
        self.grace_elapsed = 0.0;
    }
}
