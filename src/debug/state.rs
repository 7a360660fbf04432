//! Debug domain: debug mode state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the info overlay and probe gizmos
    pub show_info: bool,
}
