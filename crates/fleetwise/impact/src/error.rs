//! Error types for impact propagation.

use thiserror::Error;

/// Errors from the impact propagation engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImpactError {
    /// The change-type tag is not one of the supported types.
    #[error("unknown change type: {0}")]
    UnknownChangeType(String),

    /// An impact depends on an id that is not in the impact list.
    #[error("impact {impact_id} depends on missing impact {missing}")]
    DanglingDependency { impact_id: String, missing: String },

    /// The dependency relation loops back on itself.
    #[error("dependency cycle through impact {0}")]
    DependencyCycle(String),

    /// Two impacts share an id.
    #[error("duplicate impact id: {0}")]
    DuplicateImpactId(String),
}

/// Result type for impact operations.
pub type ImpactResult<T> = Result<T, ImpactError>;
