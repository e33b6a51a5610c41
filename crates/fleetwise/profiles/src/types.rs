//! Component profile types and the pure lookups over them.
//!
//! A [`ComponentProfile`] is immutable reference data: the wear curve an
//! OEM publishes for a component type, the failure modes it is known for,
//! and the maintenance tasks it is scheduled against. Every function here
//! is a pure computation over that data.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Moisture/temperature readings above this share of the profile limit
/// start to amplify matching failure modes.
pub const STRESS_RATIO: f64 = 0.8;

/// Multiplier applied to moisture-sensitive failure modes under moisture stress.
pub const MOISTURE_AMPLIFIER: f64 = 1.5;

/// Multiplier applied to thermally sensitive failure modes under thermal stress.
pub const TEMPERATURE_AMPLIFIER: f64 = 1.4;

/// Upper bound on any adjusted failure probability.
pub const MAX_FAILURE_PROBABILITY: f64 = 0.95;

const MOISTURE_KEYWORDS: &[&str] = &["moisture", "dielectric"];
const TEMPERATURE_KEYWORDS: &[&str] = &["temperature", "thermal", "overheat"];

// ── Component Type ──────────────────────────────────────────────────────

/// Closed set of component types the store carries profiles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Winding,
    Bushing,
    TapChanger,
    InsulationOil,
    CoolingSystem,
    Core,
}

impl ComponentType {
    /// All component types, in catalog order.
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Winding,
        ComponentType::Bushing,
        ComponentType::TapChanger,
        ComponentType::InsulationOil,
        ComponentType::CoolingSystem,
        ComponentType::Core,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Winding => "winding",
            ComponentType::Bushing => "bushing",
            ComponentType::TapChanger => "tap_changer",
            ComponentType::InsulationOil => "insulation_oil",
            ComponentType::CoolingSystem => "cooling_system",
            ComponentType::Core => "core",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| ProfileError::UnknownComponentType(s.to_string()))
    }
}

// ── Profile Parts ───────────────────────────────────────────────────────

/// One control point on a wear curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearPoint {
    pub age_years: f64,
    pub health_percent: f64,
}

impl WearPoint {
    pub const fn new(age_years: f64, health_percent: f64) -> Self {
        Self {
            age_years,
            health_percent,
        }
    }
}

/// A known way for the component to fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureMode {
    pub mode: String,
    /// Unconditioned probability (0.0-1.0).
    pub base_probability: f64,
    pub warning_signals: Vec<String>,
    pub mean_time_between_failures_years: f64,
}

impl FailureMode {
    fn signals_mention(&self, keywords: &[&str]) -> bool {
        self.warning_signals.iter().any(|signal| {
            let signal = signal.to_lowercase();
            keywords.iter().any(|k| signal.contains(k))
        })
    }
}

/// A scheduled maintenance task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    pub task: String,
    pub interval_months: u32,
    pub duration_hours: f64,
    pub parts: Vec<String>,
    /// Typical cost of performing the task once, in USD.
    pub estimated_cost: f64,
}

/// A failure mode with its reading-adjusted probability.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureModeEstimate<'a> {
    pub mode: &'a FailureMode,
    pub probability: f64,
}

/// The next maintenance task due and how far away it is.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceDue<'a> {
    pub task: &'a MaintenanceTask,
    pub due_in_months: f64,
}

// ── Component Profile ───────────────────────────────────────────────────

/// Static OEM reference data for one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProfile {
    pub component_type: ComponentType,
    pub display_name: String,
    pub expected_life_years: f64,
    /// Moisture limit in ppm (water in oil).
    pub moisture_limit_ppm: f64,
    /// Hot-spot temperature limit in °C.
    pub temperature_limit_c: f64,
    pub replacement_cost: f64,
    /// Ordered by age; health never increases with age.
    pub wear_curve: Vec<WearPoint>,
    pub failure_modes: Vec<FailureMode>,
    pub maintenance_tasks: Vec<MaintenanceTask>,
}

impl ComponentProfile {
    /// Check the structural invariants of the profile.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let invalid = |reason: &str| ProfileError::InvalidProfile {
            component_type: self.component_type.to_string(),
            reason: reason.to_string(),
        };

        if self.wear_curve.is_empty() {
            return Err(invalid("empty wear curve"));
        }
        for pair in self.wear_curve.windows(2) {
            if pair[1].age_years < pair[0].age_years {
                return Err(invalid("wear curve ages must be ascending"));
            }
            if pair[1].health_percent > pair[0].health_percent {
                return Err(invalid("wear curve health must not increase with age"));
            }
        }
        if self.expected_life_years <= 0.0 {
            return Err(invalid("expected life must be positive"));
        }
        Ok(())
    }

    /// Health percentage expected at `age_years`, by piecewise-linear
    /// interpolation. Ages outside the curve clamp to the boundary points.
    pub fn wear_percentage(&self, age_years: f64) -> f64 {
        let curve = &self.wear_curve;
        let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
            return 100.0;
        };

        if age_years <= first.age_years {
            return first.health_percent;
        }
        if age_years >= last.age_years {
            return last.health_percent;
        }

        for pair in curve.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if age_years == a.age_years {
                return a.health_percent;
            }
            if age_years == b.age_years {
                return b.health_percent;
            }
            if age_years > a.age_years && age_years < b.age_years {
                let span = b.age_years - a.age_years;
                let t = (age_years - a.age_years) / span;
                return a.health_percent + (b.health_percent - a.health_percent) * t;
            }
        }

        last.health_percent
    }

    /// Age at which the wear curve reaches `health_percent`. Health above
    /// the first point maps to the first age, below the last to the last age.
    pub fn age_for_health(&self, health_percent: f64) -> f64 {
        let curve = &self.wear_curve;
        let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
            return 0.0;
        };

        if health_percent >= first.health_percent {
            return first.age_years;
        }
        if health_percent <= last.health_percent {
            return last.age_years;
        }

        for pair in curve.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if health_percent <= a.health_percent && health_percent >= b.health_percent {
                let drop = a.health_percent - b.health_percent;
                if drop <= f64::EPSILON {
                    return a.age_years;
                }
                let t = (a.health_percent - health_percent) / drop;
                return a.age_years + (b.age_years - a.age_years) * t;
            }
        }

        last.age_years
    }

    /// The maintenance task that comes due soonest at `age_months`.
    ///
    /// Ties go to the task listed first in the catalog.
    pub fn next_maintenance_task(&self, age_months: f64) -> Option<MaintenanceDue<'_>> {
        let mut best: Option<MaintenanceDue<'_>> = None;

        for task in &self.maintenance_tasks {
            if task.interval_months == 0 {
                continue;
            }
            let interval = f64::from(task.interval_months);
            let due_in_months = ((age_months / interval).floor() + 1.0) * interval - age_months;
            if due_in_months <= 0.0 {
                continue;
            }
            let better = match &best {
                Some(current) => due_in_months < current.due_in_months,
                None => true,
            };
            if better {
                best = Some(MaintenanceDue {
                    task,
                    due_in_months,
                });
            }
        }

        best
    }

    /// The failure mode with the highest probability once live readings
    /// are taken into account.
    pub fn most_likely_failure_mode(
        &self,
        moisture_ppm: Option<f64>,
        temperature_c: Option<f64>,
    ) -> Option<FailureModeEstimate<'_>> {
        let moisture_stress =
            moisture_ppm.is_some_and(|m| m > self.moisture_limit_ppm * STRESS_RATIO);
        let thermal_stress =
            temperature_c.is_some_and(|t| t > self.temperature_limit_c * STRESS_RATIO);

        let mut best: Option<FailureModeEstimate<'_>> = None;
        for mode in &self.failure_modes {
            let mut probability = mode.base_probability;
            if moisture_stress && mode.signals_mention(MOISTURE_KEYWORDS) {
                probability *= MOISTURE_AMPLIFIER;
            }
            if thermal_stress && mode.signals_mention(TEMPERATURE_KEYWORDS) {
                probability *= TEMPERATURE_AMPLIFIER;
            }
            let probability = probability.min(MAX_FAILURE_PROBABILITY);

            let better = match &best {
                Some(current) => probability > current.probability,
                None => true,
            };
            if better {
                best = Some(FailureModeEstimate { mode, probability });
            }
        }

        best
    }

    /// The costliest maintenance task, used as the base for cost estimates.
    pub fn most_expensive_task(&self) -> Option<&MaintenanceTask> {
        self.maintenance_tasks.iter().fold(None, |best, task| match best {
            Some(b) if b.estimated_cost >= task.estimated_cost => Some(b),
            _ => Some(task),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ComponentProfile {
        ComponentProfile {
            component_type: ComponentType::Winding,
            display_name: "Fixture winding".into(),
            expected_life_years: 40.0,
            moisture_limit_ppm: 30.0,
            temperature_limit_c: 100.0,
            replacement_cost: 100_000.0,
            wear_curve: vec![
                WearPoint::new(0.0, 100.0),
                WearPoint::new(10.0, 90.0),
                WearPoint::new(20.0, 60.0),
                WearPoint::new(40.0, 20.0),
            ],
            failure_modes: vec![
                FailureMode {
                    mode: "Insulation breakdown".into(),
                    base_probability: 0.3,
                    warning_signals: vec!["Low dielectric strength".into()],
                    mean_time_between_failures_years: 30.0,
                },
                FailureMode {
                    mode: "Hot spot".into(),
                    base_probability: 0.32,
                    warning_signals: vec!["Thermal overheating gases".into()],
                    mean_time_between_failures_years: 25.0,
                },
            ],
            maintenance_tasks: vec![
                MaintenanceTask {
                    task: "Annual test".into(),
                    interval_months: 12,
                    duration_hours: 4.0,
                    parts: vec![],
                    estimated_cost: 1_000.0,
                },
                MaintenanceTask {
                    task: "Semi-annual check".into(),
                    interval_months: 6,
                    duration_hours: 1.0,
                    parts: vec![],
                    estimated_cost: 300.0,
                },
            ],
        }
    }

    #[test]
    fn component_type_parses_tags() {
        assert_eq!("winding".parse::<ComponentType>().unwrap(), ComponentType::Winding);
        assert_eq!("Tap-Changer".parse::<ComponentType>().unwrap(), ComponentType::TapChanger);
        assert_eq!(
            "insulation oil".parse::<ComponentType>().unwrap(),
            ComponentType::InsulationOil
        );
        assert!(matches!(
            "rotor".parse::<ComponentType>(),
            Err(ProfileError::UnknownComponentType(tag)) if tag == "rotor"
        ));
    }

    #[test]
    fn component_type_serde_tag() {
        let json = serde_json::to_string(&ComponentType::CoolingSystem).unwrap();
        assert_eq!(json, "\"cooling_system\"");
    }

    #[test]
    fn wear_interpolates_between_points() {
        let p = fixture();
        assert!((p.wear_percentage(5.0) - 95.0).abs() < 1e-9);
        assert!((p.wear_percentage(15.0) - 75.0).abs() < 1e-9);
        assert!((p.wear_percentage(30.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn wear_exact_points_and_clamping() {
        let p = fixture();
        assert_eq!(p.wear_percentage(10.0), 90.0);
        assert_eq!(p.wear_percentage(20.0), 60.0);
        assert_eq!(p.wear_percentage(-3.0), 100.0);
        assert_eq!(p.wear_percentage(0.0), 100.0);
        assert_eq!(p.wear_percentage(40.0), 20.0);
        assert_eq!(p.wear_percentage(99.0), 20.0);
    }

    #[test]
    fn age_for_health_inverts_curve() {
        let p = fixture();
        assert!((p.age_for_health(75.0) - 15.0).abs() < 1e-9);
        assert_eq!(p.age_for_health(100.0), 0.0);
        assert_eq!(p.age_for_health(5.0), 40.0);
    }

    #[test]
    fn next_task_smallest_due() {
        let p = fixture();
        // At 13 months: annual due in 11, semi-annual due in 5.
        let due = p.next_maintenance_task(13.0).unwrap();
        assert_eq!(due.task.task, "Semi-annual check");
        assert!((due.due_in_months - 5.0).abs() < 1e-9);
    }

    #[test]
    fn next_task_on_boundary_rolls_forward() {
        let p = fixture();
        // At exactly 12 months both tasks were just performed; semi-annual is next.
        let due = p.next_maintenance_task(12.0).unwrap();
        assert_eq!(due.task.task, "Semi-annual check");
        assert!((due.due_in_months - 6.0).abs() < 1e-9);
    }

    #[test]
    fn next_task_tie_prefers_catalog_order() {
        let mut p = fixture();
        p.maintenance_tasks[1].interval_months = 12;
        let due = p.next_maintenance_task(3.0).unwrap();
        assert_eq!(due.task.task, "Annual test");
    }

    #[test]
    fn next_task_none_without_tasks() {
        let mut p = fixture();
        p.maintenance_tasks.clear();
        assert!(p.next_maintenance_task(10.0).is_none());
    }

    #[test]
    fn failure_mode_base_probabilities() {
        let p = fixture();
        let est = p.most_likely_failure_mode(None, None).unwrap();
        assert_eq!(est.mode.mode, "Hot spot");
        assert!((est.probability - 0.32).abs() < 1e-9);
    }

    #[test]
    fn failure_mode_moisture_amplifies() {
        let p = fixture();
        // 25 ppm > 0.8 * 30 ppm
        let est = p.most_likely_failure_mode(Some(25.0), None).unwrap();
        assert_eq!(est.mode.mode, "Insulation breakdown");
        assert!((est.probability - 0.45).abs() < 1e-9);
    }

    #[test]
    fn failure_mode_below_threshold_not_amplified() {
        let p = fixture();
        let est = p.most_likely_failure_mode(Some(24.0), Some(80.0)).unwrap();
        assert_eq!(est.mode.mode, "Hot spot");
        assert!((est.probability - 0.32).abs() < 1e-9);
    }

    #[test]
    fn failure_mode_probability_capped() {
        let mut p = fixture();
        p.failure_modes[1].base_probability = 0.9;
        let est = p.most_likely_failure_mode(None, Some(95.0)).unwrap();
        assert_eq!(est.probability, MAX_FAILURE_PROBABILITY);
    }

    #[test]
    fn validate_rejects_rising_curve() {
        let mut p = fixture();
        p.wear_curve.push(WearPoint::new(50.0, 30.0));
        assert!(matches!(p.validate(), Err(ProfileError::InvalidProfile { .. })));
        assert!(fixture().validate().is_ok());
    }

    #[test]
    fn most_expensive_task_selected() {
        let p = fixture();
        assert_eq!(p.most_expensive_task().unwrap().task, "Annual test");
    }
}
