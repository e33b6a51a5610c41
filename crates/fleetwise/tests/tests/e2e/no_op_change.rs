//! End-to-end test: changes that trigger nothing.

use std::str::FromStr;

use fleetwise_impact::{ChangeType, ImpactEngine, ImpactError, ImpactRequest, ProposedChange, RiskLevel};

use crate::common::fleet;

#[test]
fn custom_change_has_no_impacts() {
    let change = ProposedChange::new("CHG-NOOP", ChangeType::Custom).with_vessel("PSV-1");
    let result = ImpactEngine::new().analyze(&change, &fleet()).unwrap();

    assert_eq!(result.summary.total_impacts, 0);
    assert_eq!(result.overall_risk, RiskLevel::Low);
    assert_eq!(result.overall_confidence, 0.0);
    assert_eq!(result.financial.net_impact, 0.0);
    assert_eq!(result.operational.total_delay_days, 0.0);
    assert_eq!(result.esg.esg_score_projected, result.esg.esg_score_current);
}

#[test]
fn custom_change_from_wire_format() {
    let request: ImpactRequest = serde_json::from_value(serde_json::json!({
        "change": { "id": "CHG-WIRE", "type": "custom", "description": "Paint the funnel" },
        "fleetState": fleet(),
    }))
    .unwrap();

    let result = ImpactEngine::new().analyze_request(&request).unwrap();
    assert!(result.impacts.is_empty());
    assert_eq!(result.overall_risk, RiskLevel::Low);
}

#[test]
fn malformed_change_type_is_rejected() {
    assert_eq!(
        ChangeType::from_str("hull_repaint"),
        Err(ImpactError::UnknownChangeType("hull_repaint".into()))
    );

    let parsed: Result<ImpactRequest, _> = serde_json::from_value(serde_json::json!({
        "change": { "id": "CHG-BAD", "type": "hull_repaint" },
        "fleetState": fleet(),
    }));
    assert!(parsed.is_err());
}
