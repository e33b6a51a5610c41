//! Evidence record types.

use chrono::{DateTime, Duration, Utc};
use fleetwise_profiles::ComponentType;
use serde::{Deserialize, Serialize};

// ── Query ───────────────────────────────────────────────────────────────

/// Identifies the asset+component whose history is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceQuery {
    pub asset_id: String,
    pub component_id: String,
    pub component_type: ComponentType,
    /// Reference time; generated dates fall before it.
    pub as_of: DateTime<Utc>,
}

impl EvidenceQuery {
    pub fn new(
        asset_id: impl Into<String>,
        component_id: impl Into<String>,
        component_type: ComponentType,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            component_id: component_id.into(),
            component_type,
            as_of,
        }
    }
}

// ── Shared Enums ────────────────────────────────────────────────────────

/// Kind of evidence record; part of the generator seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    WorkOrder,
    Inspection,
    OilAnalysis,
    FleetPattern,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::WorkOrder => "work_order",
            RecordKind::Inspection => "inspection",
            RecordKind::OilAnalysis => "oil_analysis",
            RecordKind::FleetPattern => "fleet_pattern",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed condition, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Fair,
    Poor,
    Critical,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
        Condition::Critical,
    ];

    /// Whether the condition warrants attention.
    pub fn is_concerning(&self) -> bool {
        matches!(self, Condition::Poor | Condition::Critical)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Good => write!(f, "good"),
            Condition::Fair => write!(f, "fair"),
            Condition::Poor => write!(f, "poor"),
            Condition::Critical => write!(f, "critical"),
        }
    }
}

// ── Work Orders ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderType {
    Preventive,
    Corrective,
}

/// A completed maintenance work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    pub work_order_type: WorkOrderType,
    pub issue: String,
    pub opened_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub labor_hours: f64,
    pub cost: f64,
    pub downtime_hours: f64,
}

impl WorkOrder {
    pub fn is_corrective(&self) -> bool {
        self.work_order_type == WorkOrderType::Corrective
    }
}

// ── Inspections ─────────────────────────────────────────────────────────

/// A field inspection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    pub id: String,
    pub inspected_at: DateTime<Utc>,
    pub condition: Condition,
    pub findings: Vec<String>,
    pub inspector: String,
}

// ── Oil Analysis ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    Normal,
    Caution,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

/// One measured oil parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilParameter {
    pub name: String,
    pub unit: String,
    pub value: f64,
    pub status: ParameterStatus,
    pub trend: Trend,
}

/// A laboratory oil sample result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilAnalysisRecord {
    pub id: String,
    pub sampled_at: DateTime<Utc>,
    pub parameters: Vec<OilParameter>,
    pub overall_condition: Condition,
}

impl OilAnalysisRecord {
    /// Overall condition implied by the worst parameter statuses.
    pub fn condition_from(parameters: &[OilParameter]) -> Condition {
        let warnings = parameters
            .iter()
            .filter(|p| p.status == ParameterStatus::Warning)
            .count();
        let worst = parameters.iter().map(|p| p.status).max();
        match (worst, warnings) {
            (_, n) if n >= 2 => Condition::Critical,
            (Some(ParameterStatus::Warning), _) => Condition::Poor,
            (Some(ParameterStatus::Caution), _) => Condition::Fair,
            _ => Condition::Good,
        }
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&OilParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

// ── Fleet Patterns ──────────────────────────────────────────────────────

/// A failure pattern recurring across the fleet for a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetPattern {
    pub id: String,
    pub component_type: ComponentType,
    pub pattern: String,
    pub description: String,
    /// Mean age at which the pattern has led to failure.
    pub average_failure_age_years: f64,
    pub occurrences: u32,
    pub affected_assets: Vec<String>,
    pub recommended_action: String,
}

// ── Records & Bundles ───────────────────────────────────────────────────

/// Any single piece of historical evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceRecord {
    WorkOrder(WorkOrder),
    Inspection(InspectionRecord),
    OilAnalysis(OilAnalysisRecord),
    FleetPattern(FleetPattern),
}

impl EvidenceRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            EvidenceRecord::WorkOrder(_) => RecordKind::WorkOrder,
            EvidenceRecord::Inspection(_) => RecordKind::Inspection,
            EvidenceRecord::OilAnalysis(_) => RecordKind::OilAnalysis,
            EvidenceRecord::FleetPattern(_) => RecordKind::FleetPattern,
        }
    }
}

/// All historical evidence gathered for one asset+component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceBundle {
    /// Newest first.
    pub work_orders: Vec<WorkOrder>,
    /// Newest first.
    pub inspections: Vec<InspectionRecord>,
    /// Newest first.
    pub oil_analyses: Vec<OilAnalysisRecord>,
    pub fleet_patterns: Vec<FleetPattern>,
}

impl EvidenceBundle {
    pub fn is_empty(&self) -> bool {
        self.work_orders.is_empty()
            && self.inspections.is_empty()
            && self.oil_analyses.is_empty()
            && self.fleet_patterns.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.work_orders.len()
            + self.inspections.len()
            + self.oil_analyses.len()
            + self.fleet_patterns.len()
    }

    /// Corrective work orders opened within `months` before `as_of`.
    pub fn recent_corrective_count(&self, as_of: DateTime<Utc>, months: u32) -> usize {
        let cutoff = as_of - Duration::days(i64::from(months) * 30);
        self.work_orders
            .iter()
            .filter(|wo| wo.is_corrective() && wo.opened_at >= cutoff)
            .count()
    }

    pub fn latest_inspection(&self) -> Option<&InspectionRecord> {
        self.inspections.iter().max_by_key(|i| i.inspected_at)
    }

    pub fn latest_oil_analysis(&self) -> Option<&OilAnalysisRecord> {
        self.oil_analyses.iter().max_by_key(|o| o.sampled_at)
    }

    /// Flatten into individual records.
    pub fn records(&self) -> Vec<EvidenceRecord> {
        self.work_orders
            .iter()
            .cloned()
            .map(EvidenceRecord::WorkOrder)
            .chain(self.inspections.iter().cloned().map(EvidenceRecord::Inspection))
            .chain(self.oil_analyses.iter().cloned().map(EvidenceRecord::OilAnalysis))
            .chain(self.fleet_patterns.iter().cloned().map(EvidenceRecord::FleetPattern))
            .collect()
    }
}
