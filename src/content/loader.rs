//! Content domain: RON file loading at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, MovementTuningDef, PatrolDef};

/// A content file that failed to load, with the reason attached.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub reason: String,
}

impl ContentLoadError {
    fn new(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self { file: path.display().to_string(), reason: reason.to_string() }
    }
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not load {}: {}", self.file, self.reason)
    }
}

/// Everything assets/data holds for this game.
pub struct ContentBundle {
    pub movement: MovementTuningDef,
    pub patrols: Vec<PatrolDef>,
}

/// Parses one RON file. IMPLICIT_SOME keeps optional fields terse in the
/// authored files.
fn parse_ron<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let text = fs::read_to_string(path).map_err(|err| ContentLoadError::new(path, err))?;
    Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(&text)
        .map_err(|err| ContentLoadError::new(path, err))
}

/// Loads assets/data/*.ron. movement.ron is required; a broken patrol file
/// only costs the sentries.
pub fn load_all_content(base_path: &Path) -> Result<ContentBundle, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let patrols = match parse_ron::<DataFile<PatrolDef>>(&base_path.join("patrols.ron")) {
        Ok(file) => file.items,
        Err(err) => {
            errors.push(err);
            Vec::new()
        }
    };

    let movement = match parse_ron::<MovementTuningDef>(&base_path.join("movement.ron")) {
        Ok(def) => def,
        Err(err) => {
            errors.push(err);
            return Err(errors);
        }
    };

    if errors.is_empty() { Ok(ContentBundle { movement, patrols }) } else { Err(errors) }
}
