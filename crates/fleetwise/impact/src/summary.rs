//! Aggregation of an impact list into headline numbers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::fleet::FleetState;
use crate::impact::{AffectedEntities, Direction, ImpactItem, Severity};

/// Headline risk for the whole change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Positive,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Critical => write!(f, "critical"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Positive => write!(f, "positive"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub positive: usize,
}

impl SeverityCounts {
    fn count(impacts: &[ImpactItem]) -> Self {
        let mut counts = Self::default();
        for impact in impacts {
            match impact.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Positive => counts.positive += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionCounts {
    pub upstream: usize,
    pub downstream: usize,
    pub lateral: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub total_impacts: usize,
    pub by_direction: DirectionCounts,
    pub by_severity: SeverityCounts,
}

impl ImpactSummary {
    pub fn from_impacts(impacts: &[ImpactItem]) -> Self {
        let mut by_direction = DirectionCounts::default();
        for impact in impacts {
            match impact.direction {
                Direction::Upstream => by_direction.upstream += 1,
                Direction::Downstream => by_direction.downstream += 1,
                Direction::Lateral => by_direction.lateral += 1,
            }
        }
        Self {
            total_impacts: impacts.len(),
            by_direction,
            by_severity: SeverityCounts::count(impacts),
        }
    }
}

/// Money effects, annualised where the underlying impact is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Change in operating cost; negative is a saving.
    pub operating_cost_change: f64,
    pub penalties: f64,
    pub insurance_change: f64,
    /// Sum of the three cost lines.
    pub total_cost_change: f64,
    /// Revenue change; losses are negative.
    pub revenue_change: f64,
    /// `revenue_change - total_cost_change`.
    pub net_impact: f64,
    pub currency: String,
}

fn delta_change(impact: &ImpactItem) -> f64 {
    impact.delta.as_ref().map(|d| d.change()).unwrap_or(0.0)
}

fn sum_of_kind(impacts: &[ImpactItem], kind: &str) -> f64 {
    impacts
        .iter()
        .filter(|i| i.kind() == kind)
        .map(delta_change)
        .sum()
}

impl FinancialSummary {
    pub fn from_impacts(impacts: &[ImpactItem], fleet: &FleetState) -> Self {
        let operating_cost_change = sum_of_kind(impacts, "operating-cost-change");
        let penalties = sum_of_kind(impacts, "contract-penalty");
        let insurance_change = sum_of_kind(impacts, "insurance-premium-change");
        let revenue_change = sum_of_kind(impacts, "revenue-loss");
        let total_cost_change = operating_cost_change + penalties + insurance_change;
        Self {
            operating_cost_change,
            penalties,
            insurance_change,
            total_cost_change,
            revenue_change,
            net_impact: revenue_change - total_cost_change,
            currency: fleet.financials.currency.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgSummary {
    /// Annual CO2 change in tonnes.
    pub emissions_change_tonnes: f64,
    #[serde(default)]
    pub emissions_change_percent: Option<f64>,
    pub carbon_cost_change: f64,
    pub esg_score_current: f64,
    pub esg_score_projected: f64,
}

impl EsgSummary {
    pub fn from_impacts(impacts: &[ImpactItem], fleet: &FleetState) -> Self {
        let compliance = &fleet.compliance;
        let emissions = impacts
            .iter()
            .find(|i| i.id == "emissions-change")
            .and_then(|i| i.delta.as_ref());
        let esg = impacts
            .iter()
            .find(|i| i.id == "esg-score-change")
            .and_then(|i| i.delta.as_ref());

        let emissions_change_tonnes = emissions.map(|d| d.change()).unwrap_or(0.0);
        Self {
            emissions_change_tonnes,
            emissions_change_percent: emissions.and_then(|d| d.percent_change),
            carbon_cost_change: emissions_change_tonnes * compliance.carbon_price_per_tonne,
            esg_score_current: compliance.esg_score,
            esg_score_projected: esg.map(|d| d.projected_value).unwrap_or(compliance.esg_score),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalSummary {
    /// Sum of the projected delay over all timeline-delay impacts.
    pub total_delay_days: f64,
    pub affected_vessels: usize,
    pub affected_projects: usize,
    pub affected_crew: usize,
    pub affected_ports: usize,
    pub affected_clients: usize,
}

impl OperationalSummary {
    pub fn from_impacts(impacts: &[ImpactItem]) -> Self {
        let total_delay_days: f64 = impacts
            .iter()
            .filter(|i| i.kind() == "timeline-delay")
            .filter_map(|i| i.delta.as_ref())
            .map(|d| d.projected_value)
            .sum();

        Self {
            total_delay_days,
            affected_vessels: unique_count(impacts, |a| &a.vessels),
            affected_projects: unique_count(impacts, |a| &a.projects),
            affected_crew: unique_count(impacts, |a| &a.crew),
            affected_ports: unique_count(impacts, |a| &a.ports),
            affected_clients: unique_count(impacts, |a| &a.clients),
        }
    }
}

fn unique_count<'a, F>(impacts: &'a [ImpactItem], field: F) -> usize
where
    F: Fn(&'a AffectedEntities) -> &'a Vec<String>,
{
    impacts
        .iter()
        .flat_map(|i| field(&i.affected))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Headline risk from severity counts; first matching rule wins.
pub fn overall_risk(impacts: &[ImpactItem]) -> RiskLevel {
    let c = SeverityCounts::count(impacts);
    if c.critical > 0 {
        RiskLevel::Critical
    } else if c.high > 2 {
        RiskLevel::High
    } else if c.high > 0 || c.medium > 3 {
        RiskLevel::Medium
    } else if c.positive > c.low {
        RiskLevel::Positive
    } else {
        RiskLevel::Low
    }
}

/// Mean impact confidence, zero for an empty list.
pub fn overall_confidence(impacts: &[ImpactItem]) -> f64 {
    if impacts.is_empty() {
        return 0.0;
    }
    impacts.iter().map(|i| i.confidence).sum::<f64>() / impacts.len() as f64
}
