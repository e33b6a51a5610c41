//! Property tests: wear curves clamp outside their control points.

use fleetwise_profiles::{ComponentType, ProfileRegistry};
use proptest::prelude::*;

fn arb_component_type() -> impl Strategy<Value = ComponentType> {
    prop::sample::select(ComponentType::ALL.to_vec())
}

proptest! {
    /// Ages at or before the first point return the first point's health.
    #[test]
    fn clamps_before_first_point(ty in arb_component_type(), before in 0.0f64..100.0) {
        let registry = ProfileRegistry::builtin();
        let profile = registry.get_profile(ty).unwrap();
        let first = profile.wear_curve.first().unwrap();

        let age = first.age_years - before;
        prop_assert_eq!(registry.wear_percentage(ty, age).unwrap(), first.health_percent);
        prop_assert_eq!(profile.wear_percentage(first.age_years), first.health_percent);
    }

    /// Ages at or after the last point return the last point's health.
    #[test]
    fn clamps_after_last_point(ty in arb_component_type(), beyond in 0.0f64..200.0) {
        let registry = ProfileRegistry::builtin();
        let profile = registry.get_profile(ty).unwrap();
        let last = profile.wear_curve.last().unwrap();

        let age = last.age_years + beyond;
        prop_assert_eq!(registry.wear_percentage(ty, age).unwrap(), last.health_percent);
    }

    /// Inside the curve, health stays between the boundary values and
    /// never rises with age.
    #[test]
    fn interior_is_bounded_and_non_increasing(
        ty in arb_component_type(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let registry = ProfileRegistry::builtin();
        let profile = registry.get_profile(ty).unwrap();
        let first = profile.wear_curve.first().unwrap();
        let last = profile.wear_curve.last().unwrap();
        let span = last.age_years - first.age_years;

        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        let h_young = profile.wear_percentage(first.age_years + young * span);
        let h_old = profile.wear_percentage(first.age_years + old * span);

        prop_assert!(h_young <= first.health_percent + 1e-9);
        prop_assert!(h_old >= last.health_percent - 1e-9);
        prop_assert!(h_old <= h_young + 1e-9);
    }
}
