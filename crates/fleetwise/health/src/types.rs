//! Request, response and prediction types for health inference.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Request ─────────────────────────────────────────────────────────────

/// Live readings and identity for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReading {
    pub id: String,
    pub name: String,
    /// Component-type tag, validated against the profile store.
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub current_health: Option<f64>,
    #[serde(default)]
    pub age_years: Option<f64>,
    /// Hot-spot temperature, °C.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Moisture in oil, ppm.
    #[serde(default)]
    pub moisture: Option<f64>,
    #[serde(default)]
    pub load_percent: Option<f64>,
}

impl ComponentReading {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type: component_type.into(),
            current_health: None,
            age_years: None,
            temperature: None,
            moisture: None,
            load_percent: None,
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn with_age(mut self, age_years: f64) -> Self {
        self.age_years = Some(age_years);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_moisture(mut self, moisture: f64) -> Self {
        self.moisture = Some(moisture);
        self
    }

    pub fn with_load(mut self, load_percent: f64) -> Self {
        self.load_percent = Some(load_percent);
        self
    }

    /// Whether any live sensor reading is present.
    pub fn has_live_readings(&self) -> bool {
        self.temperature.is_some() || self.moisture.is_some() || self.load_percent.is_some()
    }
}

/// Site conditions around the asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentData {
    #[serde(default)]
    pub ambient_temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity_percent: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
}

/// A request to infer health for the components of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInferenceRequest {
    pub asset_id: String,
    pub asset_type: String,
    pub asset_name: String,
    pub components: Vec<ComponentReading>,
    #[serde(default)]
    pub environment_data: Option<EnvironmentData>,
    /// Customers supplied through this asset.
    #[serde(default)]
    pub customers_served: Option<u32>,
    /// Reference time for history and curve timestamps.
    pub as_of: DateTime<Utc>,
}

impl HealthInferenceRequest {
    pub fn new(
        asset_id: impl Into<String>,
        asset_type: impl Into<String>,
        asset_name: impl Into<String>,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            asset_type: asset_type.into(),
            asset_name: asset_name.into(),
            components: Vec::new(),
            environment_data: None,
            customers_served: None,
            as_of,
        }
    }

    pub fn with_component(mut self, component: ComponentReading) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentData) -> Self {
        self.environment_data = Some(environment);
        self
    }

    pub fn with_customers_served(mut self, customers: u32) -> Self {
        self.customers_served = Some(customers);
        self
    }
}

// ── Prediction ──────────────────────────────────────────────────────────

/// Maintenance priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeUnit {
    Days,
    Months,
}

/// Estimated remaining useful life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingLife {
    pub value: f64,
    pub unit: LifeUnit,
    pub percent_remaining: f64,
}

/// A low/high cost band in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

/// Origin of a piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    KnownIssue,
    LiveTelemetry,
    OemProfile,
    WorkOrders,
    Inspections,
    OilAnalysis,
    FleetPatterns,
    FailureModeCatalog,
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceTag::KnownIssue => "known_issue",
            SourceTag::LiveTelemetry => "live_telemetry",
            SourceTag::OemProfile => "oem_profile",
            SourceTag::WorkOrders => "work_orders",
            SourceTag::Inspections => "inspections",
            SourceTag::OilAnalysis => "oil_analysis",
            SourceTag::FleetPatterns => "fleet_patterns",
            SourceTag::FailureModeCatalog => "failure_mode_catalog",
        };
        f.write_str(s)
    }
}

/// One explainability record supporting a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningStep {
    pub component_id: String,
    pub explanation: String,
    pub source: SourceTag,
    /// 0-100.
    pub confidence: f64,
    pub is_key: bool,
}

/// Next scheduled maintenance for a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task: String,
    pub due_in_months: f64,
    pub duration_hours: f64,
}

/// Failure mode behind a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureModeSummary {
    pub mode: String,
    pub probability: f64,
}

/// Health prediction for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub component_id: String,
    pub component_name: String,
    pub component_type: String,
    pub priority: Priority,
    pub health_score: f64,
    pub remaining_life: RemainingLife,
    /// 0-100.
    pub confidence: f64,
    pub predicted_issue: String,
    pub recommended_action: String,
    pub failure_mode: Option<FailureModeSummary>,
    pub next_maintenance: Option<ScheduledTask>,
    pub cost_of_inaction: CostRange,
    pub estimated_repair_cost: CostRange,
    pub customers_at_risk: u32,
    pub override_applied: bool,
}

/// A point on the health-over-time curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradationPoint {
    pub timestamp: DateTime<Utc>,
    pub health_score: f64,
    pub is_projected: bool,
}

// ── Response ────────────────────────────────────────────────────────────

/// The full inference report for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInferenceResponse {
    pub asset_id: String,
    pub asset_name: String,
    /// Sorted critical → low; ties keep request order.
    pub predictions: Vec<Prediction>,
    /// Per-component steps, concatenated in prediction order.
    pub reasoning_chain: Vec<ReasoningStep>,
    /// Curve of the first (most urgent) prediction.
    pub degradation_curve: Vec<DegradationPoint>,
    pub overall_health_score: f64,
    pub sources_queried: Vec<SourceTag>,
    /// Confidence-weighted share of the reasoning chain, in percent.
    pub source_contributions: BTreeMap<SourceTag, f64>,
    pub generated_at: DateTime<Utc>,
}

impl HealthInferenceResponse {
    /// The most urgent prediction.
    pub fn primary(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn prediction_for(&self, component_id: &str) -> Option<&Prediction> {
        self.predictions.iter().find(|p| p.component_id == component_id)
    }

    /// Reasoning steps for one component.
    pub fn steps_for<'a>(&'a self, component_id: &'a str) -> impl Iterator<Item = &'a ReasoningStep> + 'a {
        self.reasoning_chain
            .iter()
            .filter(move |s| s.component_id == component_id)
    }
}
