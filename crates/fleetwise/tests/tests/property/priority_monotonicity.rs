//! Property tests: worse health never yields a milder priority.

use chrono::{TimeZone, Utc};
use fleetwise_health::classify::classify_priority;
use fleetwise_health::{
    ComponentReading, HealthInferenceEngine, HealthInferenceRequest, PriorityThresholds,
};
use proptest::prelude::*;

fn arb_probability() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0f64..1.0).prop_map(Some)]
}

proptest! {
    /// The classifier is monotone in health for fixed remaining life and
    /// failure probability.
    #[test]
    fn classifier_monotone_in_health(
        h1 in 0.0f64..=100.0,
        h2 in 0.0f64..=100.0,
        remaining in 0.0f64..=100.0,
        probability in arb_probability(),
    ) {
        let thresholds = PriorityThresholds::default();
        let (worse, better) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };

        let p_worse = classify_priority(worse, remaining, probability, &thresholds);
        let p_better = classify_priority(better, remaining, probability, &thresholds);
        prop_assert!(p_worse >= p_better, "{worse} -> {p_worse}, {better} -> {p_better}");
    }

    /// Through the whole engine, lowering a reading's health on an
    /// otherwise identical component never lowers its priority.
    #[test]
    fn engine_monotone_in_health(
        h1 in 0.0f64..=100.0,
        h2 in 0.0f64..=100.0,
        age in 0.0f64..60.0,
    ) {
        let engine = HealthInferenceEngine::builtin();
        let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let (worse, better) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };

        let request = HealthInferenceRequest::new("TX-9", "transformer", "Test TX", as_of)
            .with_component(ComponentReading::new("a", "Bushing A", "bushing").with_age(age).with_health(worse))
            .with_component(ComponentReading::new("b", "Bushing B", "bushing").with_age(age).with_health(better));
        let response = engine.infer(&request).unwrap();

        let p_worse = response.prediction_for("a").unwrap().priority;
        let p_better = response.prediction_for("b").unwrap().priority;
        prop_assert!(p_worse >= p_better);
    }
}
