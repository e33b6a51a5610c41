//! # fleetwise-health
//!
//! Health Inference Engine: merges live readings, OEM wear curves,
//! curated known issues and historical evidence into a prioritized,
//! explainable prediction per component.
//!
//! ## Pipeline
//!
//! Each component runs `Collect → Classify → Explain → Emit`:
//!
//! 1. **Collect** readings, the matching [`KnownIssueOverride`], the most
//!    likely failure mode and history from an [`EvidenceSource`]
//! 2. **Classify** priority (an override's priority always wins) and
//!    remaining life
//! 3. **Explain** with an ordered chain of [`ReasoningStep`]s
//! 4. **Emit** a [`Prediction`] with cost bands and a degradation curve
//!
//! ## Key Types
//!
//! - [`HealthInferenceEngine`] — the engine; immutable after construction
//! - [`HealthInferenceRequest`] / [`HealthInferenceResponse`] — wire types
//! - [`KnownIssueCatalog`] — per-asset overrides supplied by the caller
//! - [`HealthEngineConfig`] — thresholds, multipliers and curve shape
//!
//! Missing history is never an error: the component gets a profile-only
//! estimate with lower confidence.
//!
//! [`EvidenceSource`]: fleetwise_evidence::EvidenceSource

#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod known_issues;
pub mod matching;
pub mod types;

pub use config::{
    ConfidenceConfig, CostMultipliers, CurveConfig, ExplainConfig, HealthEngineConfig,
    PriorityThresholds,
};
pub use engine::{HealthInferenceEngine, InferenceStage};
pub use error::{HealthError, HealthResult};
pub use explain::{Assessment, HealthBasis};
pub use known_issues::{IssueStatus, KnownIssueCatalog, KnownIssueOverride};
pub use types::{
    ComponentReading, CostRange, DegradationPoint, EnvironmentData, FailureModeSummary,
    HealthInferenceRequest, HealthInferenceResponse, LifeUnit, Prediction, Priority,
    ReasoningStep, RemainingLife, ScheduledTask, SourceTag,
};
