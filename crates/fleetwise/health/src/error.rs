//! Error types for health inference.

use fleetwise_profiles::ProfileError;
use thiserror::Error;

/// Errors surfaced by the health inference engine.
///
/// Missing or unavailable history is not an error: the engine falls back
/// to the profile-only estimate and lowers confidence instead.
#[derive(Debug, Error)]
pub enum HealthError {
    /// Unknown component-type tag or missing profile.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The request listed no components.
    #[error("inference request for asset {0} has no components")]
    EmptyRequest(String),

    /// A reading was outside its physical range.
    #[error("invalid reading for component {component_id}: {reason}")]
    InvalidReading { component_id: String, reason: String },
}

/// Result type for health operations.
pub type HealthResult<T> = Result<T, HealthError>;
