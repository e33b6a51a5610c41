//! Impact records produced by the generators.

use serde::{Deserialize, Serialize};

/// Which way an impact propagates relative to the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Preconditions and causes the change depends on.
    Upstream,
    /// Consequences of the change.
    Downstream,
    /// Side effects on vessels the change does not name.
    Lateral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Positive,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
            Severity::Positive => write!(f, "positive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    SupplyChain,
    Crew,
    Maintenance,
    Port,
    Compliance,
    Schedule,
    Financial,
    Environmental,
    Safety,
    Commercial,
    Resource,
}

/// A before/after measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantDelta {
    pub metric: String,
    pub current_value: f64,
    pub projected_value: f64,
    pub unit: String,
    /// `None` when the current value is zero.
    pub percent_change: Option<f64>,
}

impl QuantDelta {
    pub fn new(metric: impl Into<String>, current: f64, projected: f64, unit: impl Into<String>) -> Self {
        let percent_change = if current != 0.0 {
            Some((projected - current) / current.abs() * 100.0)
        } else {
            None
        };
        Self {
            metric: metric.into(),
            current_value: current,
            projected_value: projected,
            unit: unit.into(),
            percent_change,
        }
    }

    pub fn change(&self) -> f64 {
        self.projected_value - self.current_value
    }
}

/// Entities touched by an impact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedEntities {
    #[serde(default)]
    pub vessels: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub crew: Vec<String>,
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default)]
    pub clients: Vec<String>,
}

impl AffectedEntities {
    pub fn vessels<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vessels: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
            && self.projects.is_empty()
            && self.crew.is_empty()
            && self.ports.is_empty()
            && self.clients.is_empty()
    }
}

/// One computed consequence of a proposed change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactItem {
    pub id: String,
    pub category: ImpactCategory,
    pub direction: Direction,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub delta: Option<QuantDelta>,
    pub timeframe: Timeframe,
    /// 0-100.
    pub confidence: f64,
    #[serde(default)]
    pub mitigations: Vec<String>,
    /// Impacts that causally precede this one.
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub affected: AffectedEntities,
}

impl ImpactItem {
    pub fn new(
        id: impl Into<String>,
        category: ImpactCategory,
        direction: Direction,
        severity: Severity,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            direction,
            severity,
            title: title.into(),
            description: String::new(),
            delta: None,
            timeframe: Timeframe::ShortTerm,
            confidence: 70.0,
            mitigations: Vec::new(),
            depends_on: Vec::new(),
            affected: AffectedEntities::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_delta(mut self, delta: QuantDelta) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_mitigations<I, S>(mut self, mitigations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mitigations = mitigations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_depends_on(mut self, ids: Vec<String>) -> Self {
        self.depends_on = ids;
        self
    }

    pub fn with_affected(mut self, affected: AffectedEntities) -> Self {
        self.affected = affected;
        self
    }

    /// The part of the id before any `:` qualifier.
    pub fn kind(&self) -> &str {
        self.id.split(':').next().unwrap_or(&self.id)
    }

    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}
