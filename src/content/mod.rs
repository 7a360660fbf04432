//! Content domain: RON content loading, validation, and registry.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{DataFile, MovementTuningDef, PatrolDef};
pub use loader::{ContentBundle, ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .add_systems(Startup, load_content);
    }
}

/// Loads assets/data at startup and applies it to the live resources.
/// Any failure is logged and leaves the built-in defaults in place.
fn load_content(mut tuning: ResMut<MovementTuning>, mut registry: ResMut<ContentRegistry>) {
    let base_path = Path::new("assets/data");

    let bundle = match load_all_content(base_path) {
        Ok(bundle) => bundle,
        Err(errors) => {
            for error in &errors {
                warn!("{error}");
            }
            warn!("Content loading failed, keeping default tuning");
            return;
        }
    };

    let issues = validate_content(&bundle.movement, &bundle.patrols);
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{issue}");
        }
        warn!("Content validation failed, keeping default tuning");
        return;
    }

    *tuning = bundle.movement.to_tuning();
    registry.patrols =
        bundle.patrols.into_iter().map(|patrol| (patrol.id.clone(), patrol)).collect();

    info!("{}", registry.summary());
}
