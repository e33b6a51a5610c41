//! Error types for the reference profile store.

use thiserror::Error;

/// Errors raised while looking up or registering component profiles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    /// The component-type tag is not one the store knows about.
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    /// A profile failed validation on registration.
    #[error("invalid profile for {component_type}: {reason}")]
    InvalidProfile {
        component_type: String,
        reason: String,
    },
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
