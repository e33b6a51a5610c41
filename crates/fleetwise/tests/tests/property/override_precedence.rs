//! Property tests: a known-issue override's priority always wins.

use chrono::{TimeZone, Utc};
use fleetwise_health::{
    ComponentReading, HealthInferenceEngine, HealthInferenceRequest, KnownIssueCatalog,
    KnownIssueOverride, Priority,
};
use proptest::prelude::*;

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

fn arb_component() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("Main winding", "winding"),
        ("HV bushing", "bushing"),
        ("Tap changer", "tap_changer"),
        ("Insulation oil", "insulation_oil"),
        ("Cooling fans", "cooling_system"),
        ("Core", "core"),
    ])
}

proptest! {
    #[test]
    fn override_priority_is_emitted(
        priority in arb_priority(),
        (name, tag) in arb_component(),
        override_health in 0.0f64..=100.0,
        reading_health in prop::option::of(0.0f64..=100.0),
        age in prop::option::of(0.0f64..80.0),
    ) {
        let catalog = KnownIssueCatalog::new().with_issue(
            "TX-1",
            KnownIssueOverride::new(name, "Curated finding", priority, override_health),
        );
        let engine = HealthInferenceEngine::builtin().with_known_issues(catalog);

        let mut reading = ComponentReading::new("c-1", name, tag);
        if let Some(h) = reading_health {
            reading = reading.with_health(h);
        }
        if let Some(a) = age {
            reading = reading.with_age(a);
        }
        let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let request = HealthInferenceRequest::new("TX-1", "transformer", "North TX", as_of)
            .with_component(reading);

        let response = engine.infer(&request).unwrap();
        let prediction = response.prediction_for("c-1").unwrap();
        prop_assert_eq!(prediction.priority, priority);
        prop_assert!(prediction.override_applied);
    }
}
