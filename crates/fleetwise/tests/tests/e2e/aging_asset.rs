//! End-to-end test: health inference for an aging transformer.
//!
//! A winding at the end of its 50-year design life with poor measured
//! health must come out critical with essentially no life left, and
//! predictions must be ordered critical first.

use fleetwise_health::{
    ComponentReading, HealthInferenceEngine, HealthInferenceRequest, KnownIssueCatalog,
    KnownIssueOverride, Priority, SourceTag,
};

use crate::common::as_of;

fn request() -> HealthInferenceRequest {
    HealthInferenceRequest::new("TX-4471", "power_transformer", "Riverside T2", as_of())
        .with_customers_served(18_000)
        .with_component(
            ComponentReading::new("cool-1", "Cooling fans", "cooling_system")
                .with_age(8.0)
                .with_health(92.0),
        )
        .with_component(
            ComponentReading::new("wdg-1", "Main winding", "winding")
                .with_age(50.0)
                .with_health(38.0),
        )
}

#[test]
fn end_of_life_winding_is_critical() {
    let response = HealthInferenceEngine::builtin().infer(&request()).unwrap();

    let winding = response.prediction_for("wdg-1").unwrap();
    assert_eq!(winding.priority, Priority::Critical);
    assert!(winding.remaining_life.percent_remaining < 1.0);
    assert!(winding.cost_of_inaction.low > winding.estimated_repair_cost.high);

    // Critical first, request order otherwise.
    assert_eq!(response.primary().unwrap().component_id, "wdg-1");
    assert_eq!(response.predictions[1].component_id, "cool-1");
    assert!(response.predictions[1].priority < Priority::Critical);
}

#[test]
fn reasoning_chain_covers_both_components() {
    let response = HealthInferenceEngine::builtin().infer(&request()).unwrap();

    assert!(response.steps_for("wdg-1").count() > 0);
    assert!(response.steps_for("cool-1").count() > 0);
    assert!(response
        .steps_for("wdg-1")
        .any(|s| s.source == SourceTag::OemProfile));
    assert!(!response.degradation_curve.is_empty());
    assert!(response.overall_health_score > 0.0 && response.overall_health_score < 100.0);
}

#[test]
fn known_issue_overrides_healthy_reading() {
    let catalog = KnownIssueCatalog::new().with_issue(
        "TX-4471",
        KnownIssueOverride::new("Cooling fan bank", "Fan motor bearing noise", Priority::High, 71.0)
            .with_recommended_action("Replace fan motors at next outage"),
    );
    let engine = HealthInferenceEngine::builtin().with_known_issues(catalog);
    let response = engine.infer(&request()).unwrap();

    let cooling = response.prediction_for("cool-1").unwrap();
    assert_eq!(cooling.priority, Priority::High);
    assert!(cooling.override_applied);
    assert_eq!(cooling.recommended_action, "Replace fan motors at next outage");
}

#[test]
fn response_round_trips_as_json() {
    let response = HealthInferenceEngine::builtin().infer(&request()).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("predictions").is_some());
    assert!(json.get("reasoningChain").is_some());
    assert_eq!(json["predictions"][0]["priority"], "critical");
}
