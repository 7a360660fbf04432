//! Patrol domain: waypoint paths and follower state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What happens when a follower reaches the end of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CycleMode {
    /// Stop at the final waypoint.
    #[default]
    None,
    /// Wrap around to the first waypoint.
    Loop,
    /// Reverse direction at either end.
    PingPong,
}

/// Walks an entity through a fixed waypoint list at a configured speed,
/// optionally dwelling at marked waypoints.
#[derive(Component, Debug, Clone)]
pub struct PathFollower {
    pub waypoints: Vec<Vec2>,
    pub speed: f32,
    pub cycle_mode: CycleMode,
    pub reverse: bool,
    pub dwell_time: f32,
    /// Per-waypoint dwell flags; empty means never dwell.
    pub stop_at: Vec<bool>,
    pub current: usize,
    pub dwell_elapsed: f32,
    pub done: bool,
}

impl PathFollower {
    pub fn new(waypoints: Vec<Vec2>, speed: f32, cycle_mode: CycleMode) -> Self {
        let done = waypoints.is_empty();
        Self {
            waypoints,
            speed,
            cycle_mode,
            reverse: false,
            dwell_time: 0.0,
            stop_at: Vec::new(),
            current: 0,
            dwell_elapsed: 0.0,
            done,
        }
    }

    pub fn with_dwell(mut self, dwell_time: f32, stop_at: Vec<bool>) -> Self {
        self.dwell_time = dwell_time;
        self.stop_at = stop_at;
        self
    }

    pub fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self.current = self.waypoints.len().saturating_sub(1);
        self
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    pub fn is_stop_point(&self) -> bool {
        self.stop_at.get(self.current).copied().unwrap_or(false)
    }

    /// Steps to the next waypoint according to the cycle mode. `None` paths
    /// finish at their final waypoint; `PingPong` flips direction at the
    /// ends; `Loop` wraps.
    pub fn advance(&mut self) {
        self.dwell_elapsed = 0.0;
        if self.waypoints.is_empty() {
            self.done = true;
            return;
        }
        let last = self.waypoints.len() - 1;

        match self.cycle_mode {
            CycleMode::None => {
                if self.reverse {
                    if self.current == 0 {
                        self.done = true;
                    } else {
                        self.current -= 1;
                    }
                } else if self.current == last {
                    self.done = true;
                } else {
                    self.current += 1;
                }
            }
            CycleMode::Loop => {
                self.current = if self.reverse {
                    if self.current == 0 { last } else { self.current - 1 }
                } else if self.current == last {
                    0
                } else {
                    self.current + 1
                };
            }
            CycleMode::PingPong => {
                if self.reverse {
                    if self.current == 0 {
                        self.reverse = false;
                        self.current = 1.min(last);
                    } else {
                        self.current -= 1;
                    }
                } else if self.current == last {
                    self.reverse = true;
                    self.current = last.saturating_sub(1);
                } else {
                    self.current += 1;
                }
            }
        }
    }
}
