//! Health inference configuration.
//!
//! Defaults carry the fixed classification rules; callers override them
//! only for what-if analysis or fixtures.

use serde::{Deserialize, Serialize};

use crate::types::Priority;

/// Configuration for the health inference engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthEngineConfig {
    /// Priority classification thresholds.
    pub thresholds: PriorityThresholds,

    /// Cost-of-inaction multipliers per priority.
    pub cost_multipliers: CostMultipliers,

    /// Degradation curve shape.
    pub curve: CurveConfig,

    /// When reasoning steps are flagged as key evidence.
    pub explain: ExplainConfig,

    /// Prediction confidence model.
    pub confidence: ConfidenceConfig,
}

/// Thresholds for rule-based priority classification.
///
/// Evaluated critical → high → medium; the first matching tier wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    /// Health below this is critical.
    pub critical_health: f64,
    /// Remaining-life percentage below this is critical.
    pub critical_remaining_percent: f64,
    /// Failure-mode probability above this is critical.
    pub critical_failure_probability: f64,
    pub high_health: f64,
    pub high_remaining_percent: f64,
    pub medium_health: f64,
    pub medium_remaining_percent: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            critical_health: 30.0,
            critical_remaining_percent: 10.0,
            critical_failure_probability: 0.5,
            high_health: 50.0,
            high_remaining_percent: 25.0,
            medium_health: 70.0,
            medium_remaining_percent: 50.0,
        }
    }
}

/// Cost-of-inaction multipliers applied to the base maintenance cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostMultipliers {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for CostMultipliers {
    fn default() -> Self {
        Self {
            critical: 5.0,
            high: 3.0,
            medium: 1.5,
            low: 1.0,
        }
    }
}

impl CostMultipliers {
    pub fn for_priority(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Shape of the degradation curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Historical points from install to now (inclusive).
    pub historical_points: usize,
    /// Projected points after now.
    pub projected_points: usize,
    /// Years between projected points.
    pub projection_step_years: f64,
    /// Projected decline runs this much faster than the historical slope.
    pub acceleration: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            historical_points: 8,
            projected_points: 5,
            projection_step_years: 2.0,
            acceleration: 1.3,
        }
    }
}

/// Key-evidence flags for the reasoning chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// Temperature/limit ratio above which the step is key.
    pub temperature_key_ratio: f64,
    /// Moisture/limit ratio above which the step is key.
    pub moisture_key_ratio: f64,
    /// Look-back window for corrective work orders.
    pub corrective_lookback_months: u32,
    /// Corrective work orders in the window that make the step key.
    pub corrective_key_count: usize,
    /// Consumed design-life percentage above which the step is key.
    pub life_consumed_key_percent: f64,
    /// A fleet pattern is relevant once age reaches this share of its average failure age.
    pub pattern_relevance_ratio: f64,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            temperature_key_ratio: 0.85,
            moisture_key_ratio: 0.8,
            corrective_lookback_months: 24,
            corrective_key_count: 3,
            life_consumed_key_percent: 80.0,
            pattern_relevance_ratio: 0.8,
        }
    }
}

/// Additive confidence model for predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Confidence of a profile-only estimate.
    pub profile_only: f64,
    /// Added when the component reports its own health.
    pub measured_health_bonus: f64,
    /// Added when temperature, moisture or load is reported.
    pub live_readings_bonus: f64,
    /// Added when historical evidence is available.
    pub history_bonus: f64,
    /// Added when a known-issue override applies.
    pub override_bonus: f64,
    /// Upper bound.
    pub max: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            profile_only: 55.0,
            measured_health_bonus: 15.0,
            live_readings_bonus: 5.0,
            history_bonus: 15.0,
            override_bonus: 10.0,
            max: 97.0,
        }
    }
}
