//! End-to-end test: a change that names the same vessel and project more
//! than once, plus an id the fleet does not know.
//!
//! Repeats collapse onto the first mention, unknown ids are ignored, and
//! the report is produced in full.

use std::collections::HashSet;

use fleetwise_impact::{ChangeType, ImpactEngine, ImpactRequest};

use crate::common::fleet;

fn request(change_type: &str) -> ImpactRequest {
    serde_json::from_value(serde_json::json!({
        "change": {
            "id": "CHG-MESSY",
            "type": change_type,
            "affectedVesselIds": ["PSV-1", "PSV-1", "PSV-404"],
            "affectedProjectIds": ["EQ-SUPPLY", "EQ-SUPPLY"],
            "parameters": { "downtimeDays": 12.0 }
        },
        "fleetState": fleet(),
    }))
    .unwrap()
}

#[test]
fn equipment_failure_with_repeats_is_fully_reported() {
    let result = ImpactEngine::new()
        .analyze_request(&request("equipment_failure"))
        .unwrap();

    assert_eq!(result.change_type, ChangeType::EquipmentFailure);
    let ids: HashSet<&str> = result.impacts.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), result.impacts.len());

    assert_eq!(result.impacts_of_kind("revenue-loss").count(), 1);
    assert_eq!(result.impacts_of_kind("timeline-delay").count(), 1);
    assert_eq!(result.impacts_of_kind("contract-penalty").count(), 1);
    assert_eq!(result.operational.total_delay_days, 12.0);
    assert_eq!(result.financial.penalties, 12.0 * 20_000.0);
    assert!(!result.impact_chain.is_empty());
    assert_eq!(result.alternatives.len(), 3);
}

#[test]
fn every_change_type_tolerates_repeats() {
    for change_type in ChangeType::ALL {
        let tag = change_type.as_str();
        let result = ImpactEngine::new()
            .analyze_request(&request(tag))
            .unwrap_or_else(|e| panic!("{tag}: {e}"));
        let ids: HashSet<&str> = result.impacts.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), result.impacts.len(), "{tag}");
        assert_eq!(result.summary.total_impacts, result.impacts.len(), "{tag}");
    }
}
