//! ContentRegistry resource providing lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::PatrolDef;

/// Central registry for loaded game content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub patrols: HashMap<String, PatrolDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!("ContentRegistry loaded: {} patrol routes", self.patrols.len())
    }
}
