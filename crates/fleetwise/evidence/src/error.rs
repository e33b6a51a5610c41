use fleetwise_profiles::ComponentType;

/// Errors from evidence sources.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum EvidenceError {
    #[error("no issue catalog entry for component type {0}")]
    MissingCatalogEntry(ComponentType),
    #[error("evidence source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Result type for evidence operations.
pub type EvidenceResult<T> = Result<T, EvidenceError>;
