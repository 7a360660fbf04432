//! Validation for loaded content values.

use super::data::{MovementTuningDef, PatrolDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': field '{}' {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Validate all loaded content.
/// Returns a list of validation errors, empty if everything checks out.
pub fn validate_content(movement: &MovementTuningDef, patrols: &[PatrolDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // The controller re-validates at construction; checking here keeps the
    // error next to the file it came from.
    if let Err(err) = movement.to_tuning().controller_config().validate() {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            source_id: "movement.ron".to_string(),
            field: err.field,
            message: err.reason,
        });
    }
    if !(movement.full_friction >= 0.0) {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            source_id: "movement.ron".to_string(),
            field: "full_friction",
            message: "must not be negative",
        });
    }
    if !(movement.ground_probe_distance > 0.0) {
        errors.push(ValidationError {
            source_type: "MovementTuning",
            source_id: "movement.ron".to_string(),
            field: "ground_probe_distance",
            message: "must be positive",
        });
    }

    for patrol in patrols {
        let mut check = |field: &'static str, ok: bool, message: &'static str| {
            if !ok {
                errors.push(ValidationError {
                    source_type: "Patrol",
                    source_id: patrol.id.clone(),
                    field,
                    message,
                });
            }
        };

        check("id", !patrol.id.is_empty(), "must not be empty");
        check("speed", patrol.speed > 0.0, "must be positive");
        check("dwell_time", patrol.dwell_time >= 0.0, "must not be negative");
        check("waypoints", patrol.waypoints.len() >= 2, "needs at least two waypoints");
        check(
            "stop_at",
            patrol.stop_at.is_empty() || patrol.stop_at.len() == patrol.waypoints.len(),
            "must be empty or match the waypoint count",
        );
    }

    errors
}
