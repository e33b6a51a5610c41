//! End-to-end test: a main engine failure on a contracted vessel.
//!
//! Verifies the full propagation: parts shortage and port congestion
//! upstream, delay feeding penalties and client strain downstream, sister
//! vessels laterally, and consistent roll-ups.

use fleetwise_impact::{
    ChangeType, Direction, ImpactAnalysisResult, ImpactEngine, ProposedChange, RiskLevel, Severity,
};

use crate::common::fleet;

fn analyze() -> ImpactAnalysisResult {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let change = ProposedChange::new("CHG-EF-07", ChangeType::EquipmentFailure)
        .with_description("Main engine crankshaft bearing failure")
        .with_vessel("PSV-1")
        .with_parameter("downtimeDays", 35.0)
        .with_parameter("safetyCritical", true);
    ImpactEngine::new().analyze(&change, &fleet()).unwrap()
}

#[test]
fn upstream_causes_are_roots() {
    let result = analyze();
    for id in ["spare-parts-shortage", "maintenance-window-conflict", "port-capacity-constraint"] {
        let impact = result.impact(id).unwrap_or_else(|| panic!("missing {id}"));
        assert_eq!(impact.direction, Direction::Upstream);
        assert!(result.impact_chain.iter().any(|n| n.impact.id == id));
    }
    // Stock-out of a part on the failed vessel.
    assert_eq!(result.impact("spare-parts-shortage").unwrap().severity, Severity::High);
}

#[test]
fn delay_drives_penalty_and_client_strain() {
    let result = analyze();

    let delay = result.impact("timeline-delay:EQ-SUPPLY").unwrap();
    assert_eq!(delay.severity, Severity::Critical);
    assert_eq!(delay.delta.as_ref().unwrap().projected_value, 35.0);

    let penalty = result.impact("contract-penalty:EQ-SUPPLY").unwrap();
    assert_eq!(penalty.depends_on, vec!["timeline-delay:EQ-SUPPLY".to_string()]);
    assert_eq!(penalty.delta.as_ref().unwrap().projected_value, 35.0 * 20_000.0);

    let client = result.impact("client-relationship:Equinor").unwrap();
    assert_eq!(client.severity, Severity::Medium);

    // Only the project that uses the failed vessel slips.
    assert!(result.impact("timeline-delay:EQ-STANDBY").is_none());
}

#[test]
fn lateral_reaches_sister_vessels_of_the_same_client() {
    let result = analyze();
    let lateral: Vec<&str> = result
        .impacts
        .iter()
        .filter(|i| i.direction == Direction::Lateral)
        .map(|i| i.id.as_str())
        .collect();

    assert!(lateral.contains(&"resource-reallocation:PSV-2"));
    assert!(lateral.contains(&"resource-reallocation:PSV-3"));
    assert!(lateral.contains(&"maintenance-slot-competition:PSV-2"));
    // Different client.
    assert!(!lateral.iter().any(|id| id.ends_with("CSV-1")));
}

#[test]
fn rollups_are_consistent() {
    let result = analyze();

    assert_eq!(result.overall_risk, RiskLevel::Critical);
    assert_eq!(result.summary.total_impacts, result.impacts.len());
    assert_eq!(
        result.summary.by_direction.upstream
            + result.summary.by_direction.downstream
            + result.summary.by_direction.lateral,
        result.impacts.len()
    );
    assert_eq!(result.operational.total_delay_days, 35.0);
    assert_eq!(result.financial.revenue_change, -35.0 * 28_000.0);
    assert!(result.financial.net_impact < 0.0);

    // One recommendation per critical impact plus the review step, at least.
    let critical = result.summary.by_severity.critical;
    assert!(result.recommendations.len() > critical);
    assert_eq!(result.alternatives.len(), 3);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let result = analyze();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("impactChain").is_some());
    assert!(json.get("overallRisk").is_some());
    assert_eq!(json["overallRisk"], "critical");
    assert_eq!(json["changeType"], "equipment_failure");

    let back: ImpactAnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
