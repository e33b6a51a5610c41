//! Curated known-issue overrides.
//!
//! An override is the strongest evidence the engine accepts: when one
//! matches a component, its priority and issue text replace the computed
//! ones, while the rest of the reasoning chain is still produced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching;
use crate::types::Priority;

/// Lifecycle status of a known issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Monitoring,
    Active,
    Escalated,
    WorkScheduled,
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Monitoring => write!(f, "monitoring"),
            IssueStatus::Active => write!(f, "active"),
            IssueStatus::Escalated => write!(f, "escalated"),
            IssueStatus::WorkScheduled => write!(f, "work scheduled"),
        }
    }
}

/// A manually curated issue for one component of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownIssueOverride {
    /// Component name as written by the engineer who logged the issue.
    pub component_name: String,
    pub issue: String,
    pub status: IssueStatus,
    pub health_score: f64,
    pub priority: Priority,
    #[serde(default)]
    pub warning_signals: Vec<String>,
    pub recommended_action: String,
    #[serde(default)]
    pub customers_at_risk: u32,
}

impl KnownIssueOverride {
    pub fn new(
        component_name: impl Into<String>,
        issue: impl Into<String>,
        priority: Priority,
        health_score: f64,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            issue: issue.into(),
            status: IssueStatus::Active,
            health_score,
            priority,
            warning_signals: Vec::new(),
            recommended_action: String::new(),
            customers_at_risk: 0,
        }
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_warning_signal(mut self, signal: impl Into<String>) -> Self {
        self.warning_signals.push(signal.into());
        self
    }

    pub fn with_recommended_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_action = action.into();
        self
    }

    pub fn with_customers_at_risk(mut self, customers: u32) -> Self {
        self.customers_at_risk = customers;
        self
    }
}

/// Known issues grouped by asset id, in the order they were logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownIssueCatalog {
    issues: BTreeMap<String, Vec<KnownIssueOverride>>,
}

impl KnownIssueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset_id: impl Into<String>, issue: KnownIssueOverride) {
        self.issues.entry(asset_id.into()).or_default().push(issue);
    }

    pub fn with_issue(mut self, asset_id: impl Into<String>, issue: KnownIssueOverride) -> Self {
        self.insert(asset_id, issue);
        self
    }

    pub fn for_asset(&self, asset_id: &str) -> &[KnownIssueOverride] {
        self.issues.get(asset_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The override matching `component_name` on `asset_id`, if any.
    pub fn find(&self, asset_id: &str, component_name: &str) -> Option<&KnownIssueOverride> {
        matching::best_match(component_name, self.for_asset(asset_id), |i| {
            i.component_name.as_str()
        })
    }

    pub fn len(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> KnownIssueCatalog {
        KnownIssueCatalog::new()
            .with_issue(
                "TX-1",
                KnownIssueOverride::new("Main tank", "Gasket seep", Priority::Medium, 72.0),
            )
            .with_issue(
                "TX-1",
                KnownIssueOverride::new("Main winding", "Elevated acetylene", Priority::Critical, 34.0)
                    .with_customers_at_risk(4200),
            )
    }

    #[test]
    fn find_prefers_exact_name() {
        let c = catalog();
        let found = c.find("TX-1", "Main Winding").unwrap();
        assert_eq!(found.issue, "Elevated acetylene");
        assert_eq!(found.customers_at_risk, 4200);
    }

    #[test]
    fn find_loose_match_uses_log_order() {
        let c = catalog();
        let found = c.find("TX-1", "Main bushing").unwrap();
        assert_eq!(found.issue, "Gasket seep");
    }

    #[test]
    fn find_scoped_to_asset() {
        let c = catalog();
        assert!(c.find("TX-2", "Main winding").is_none());
        assert!(c.for_asset("TX-2").is_empty());
    }

    #[test]
    fn counts() {
        let c = catalog();
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert!(KnownIssueCatalog::new().is_empty());
    }

    #[test]
    fn override_wire_format() {
        let json = r#"{
            "componentName": "HV bushing",
            "issue": "Power factor rising",
            "status": "escalated",
            "healthScore": 41,
            "priority": "high",
            "recommendedAction": "Schedule bushing replacement"
        }"#;
        let o: KnownIssueOverride = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, IssueStatus::Escalated);
        assert_eq!(o.priority, Priority::High);
        assert!(o.warning_signals.is_empty());
        assert_eq!(o.customers_at_risk, 0);
    }
}
