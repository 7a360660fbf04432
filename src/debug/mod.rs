//! Debug domain: dev-tools overlay for controller state inspection.
//!
//! Features:
//! - F1 / backtick overlay with mode, velocity, and jump timer readouts
//! - Gizmo rays for the slope, ground, and velocity probes

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{draw_probe_gizmos, toggle_debug_overlay, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_overlay)
            .add_systems(
                Update,
                (update_debug_info_overlay, draw_probe_gizmos)
                    .run_if(|state: Res<DebugState>| state.show_info)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
