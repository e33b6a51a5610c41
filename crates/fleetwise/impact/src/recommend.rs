//! Recommendations and alternative scenarios.

use serde::{Deserialize, Serialize};

use crate::impact::{ImpactItem, Severity};
use crate::summary::RiskLevel;

/// Mitigations taken from a single high-severity impact.
const MAX_PER_HIGH_IMPACT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Immediate,
    High,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub action: String,
    /// The impact the action mitigates, if any.
    #[serde(default)]
    pub impact_id: Option<String>,
}

/// A canned alternative way of carrying out the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeScenario {
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
    /// Cost relative to the proposed change, in percent.
    pub cost_delta_percent: f64,
    /// Schedule shift relative to the proposed change, in days.
    pub timeline_delta_days: f64,
}

/// One action per critical impact, up to three per high impact, then the
/// standing review step.
pub fn recommendations(impacts: &[ImpactItem]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for impact in impacts.iter().filter(|i| i.severity == Severity::Critical) {
        if let Some(first) = impact.mitigations.first() {
            out.push(Recommendation {
                priority: RecommendationPriority::Immediate,
                action: first.clone(),
                impact_id: Some(impact.id.clone()),
            });
        }
    }

    for impact in impacts.iter().filter(|i| i.severity == Severity::High) {
        for mitigation in impact.mitigations.iter().take(MAX_PER_HIGH_IMPACT) {
            out.push(Recommendation {
                priority: RecommendationPriority::High,
                action: mitigation.clone(),
                impact_id: Some(impact.id.clone()),
            });
        }
    }

    out.push(Recommendation {
        priority: RecommendationPriority::Standard,
        action: "Review this analysis with operations, commercial and HSE leads before approving the change"
            .to_string(),
        impact_id: None,
    });
    out
}

/// Phased, accelerated and deferred variants. Static; not derived from the change.
pub fn alternatives() -> Vec<AlternativeScenario> {
    vec![
        AlternativeScenario {
            name: "Phased rollout".into(),
            description: "Apply the change to one vessel first and extend after a review period".into(),
            risk_level: RiskLevel::Low,
            cost_delta_percent: 5.0,
            timeline_delta_days: 30.0,
        },
        AlternativeScenario {
            name: "Accelerated execution".into(),
            description: "Commit extra resources to complete the change in the shortest window".into(),
            risk_level: RiskLevel::High,
            cost_delta_percent: 15.0,
            timeline_delta_days: -14.0,
        },
        AlternativeScenario {
            name: "Deferred decision".into(),
            description: "Hold the change until the next planning cycle and monitor conditions".into(),
            risk_level: RiskLevel::Medium,
            cost_delta_percent: 0.0,
            timeline_delta_days: 90.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::{Direction, ImpactCategory};

    fn item(id: &str, severity: Severity, mitigations: &[&str]) -> ImpactItem {
        ImpactItem::new(id, ImpactCategory::Safety, Direction::Downstream, severity, id)
            .with_mitigations(mitigations.iter().copied())
    }

    #[test]
    fn critical_contributes_first_mitigation_only() {
        let recs = recommendations(&[item("safety-risk", Severity::Critical, &["stop", "assess"])]);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].action, "stop");
        assert_eq!(recs[0].priority, RecommendationPriority::Immediate);
        assert_eq!(recs[1].impact_id, None);
    }

    #[test]
    fn high_capped_at_three() {
        let recs = recommendations(&[item("x", Severity::High, &["a", "b", "c", "d"])]);
        let high: Vec<&str> = recs
            .iter()
            .filter(|r| r.priority == RecommendationPriority::High)
            .map(|r| r.action.as_str())
            .collect();
        assert_eq!(high, vec!["a", "b", "c"]);
    }

    #[test]
    fn no_impacts_still_recommends_review() {
        let recs = recommendations(&[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, RecommendationPriority::Standard);
    }

    #[test]
    fn three_fixed_alternatives() {
        let alts = alternatives();
        assert_eq!(alts.len(), 3);
        assert_eq!(alts, alternatives());
    }
}
