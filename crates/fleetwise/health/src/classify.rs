//! Rule-based classification: priority, remaining life, degradation curve
//! and cost bands.

use chrono::{DateTime, Duration, Utc};
use fleetwise_profiles::ComponentProfile;

use crate::config::{CostMultipliers, CurveConfig, PriorityThresholds};
use crate::types::{CostRange, DegradationPoint, LifeUnit, Priority, RemainingLife};

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
/// Remaining life at or below this many months is reported in days.
const MONTHS_DISPLAY_FLOOR: f64 = 6.0;
/// Base cost fallback when a profile lists no maintenance tasks.
const REPLACEMENT_COST_SHARE: f64 = 0.05;
const REPAIR_LOW: f64 = 0.8;
const REPAIR_HIGH: f64 = 1.2;
const INACTION_SPREAD: f64 = 1.5;

/// Classify priority from health, remaining-life percentage and the
/// failure-mode probability.
///
/// Tiers are checked critical → high → medium; the first that matches wins.
pub fn classify_priority(
    health: f64,
    remaining_percent: f64,
    failure_probability: Option<f64>,
    thresholds: &PriorityThresholds,
) -> Priority {
    let probable_failure =
        failure_probability.is_some_and(|p| p > thresholds.critical_failure_probability);

    if health < thresholds.critical_health
        || remaining_percent < thresholds.critical_remaining_percent
        || probable_failure
    {
        Priority::Critical
    } else if health < thresholds.high_health || remaining_percent < thresholds.high_remaining_percent
    {
        Priority::High
    } else if health < thresholds.medium_health
        || remaining_percent < thresholds.medium_remaining_percent
    {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Remaining useful life scaled by current health.
pub fn remaining_life(expected_life_years: f64, age_years: f64, health: f64) -> RemainingLife {
    let remaining_years = (expected_life_years - age_years).max(0.0) * (health / 100.0);
    let percent_remaining = if expected_life_years > 0.0 {
        remaining_years / expected_life_years * 100.0
    } else {
        0.0
    };

    let months = remaining_years * MONTHS_PER_YEAR;
    if months > MONTHS_DISPLAY_FLOOR {
        RemainingLife {
            value: months.round(),
            unit: LifeUnit::Months,
            percent_remaining,
        }
    } else {
        RemainingLife {
            value: (remaining_years * DAYS_PER_YEAR).round().max(1.0),
            unit: LifeUnit::Days,
            percent_remaining,
        }
    }
}

/// `t` shifted by `y` years, saturating at chrono's representable range.
fn shift_years(t: DateTime<Utc>, y: f64) -> DateTime<Utc> {
    let secs = (y * DAYS_PER_YEAR * 86_400.0).round();
    let limit = if secs < 0.0 { DateTime::<Utc>::MIN_UTC } else { DateTime::<Utc>::MAX_UTC };
    if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
        return limit;
    }
    Duration::try_seconds(secs as i64)
        .and_then(|d| t.checked_add_signed(d))
        .unwrap_or(limit)
}

/// Historical decline from install to `as_of`, then an accelerated
/// projection, floored at zero.
pub fn degradation_curve(
    age_years: f64,
    current_health: f64,
    as_of: DateTime<Utc>,
    curve: &CurveConfig,
) -> Vec<DegradationPoint> {
    let age = age_years.max(0.0);
    let slope = if age > 0.0 {
        (100.0 - current_health) / age
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(curve.historical_points + curve.projected_points);

    let segments = curve.historical_points.saturating_sub(1).max(1) as f64;
    for i in 0..curve.historical_points {
        let t = i as f64 / segments;
        points.push(DegradationPoint {
            timestamp: shift_years(as_of, -age * (1.0 - t)),
            health_score: 100.0 + (current_health - 100.0) * t,
            is_projected: false,
        });
    }

    for i in 1..=curve.projected_points {
        let delta = i as f64 * curve.projection_step_years;
        let health = current_health - slope * delta * curve.acceleration;
        points.push(DegradationPoint {
            timestamp: shift_years(as_of, delta),
            health_score: health.max(0.0),
            is_projected: true,
        });
    }

    points
}

/// Base cost for cost bands: the profile's most expensive maintenance task.
pub fn base_cost(profile: &ComponentProfile) -> f64 {
    profile
        .most_expensive_task()
        .map(|t| t.estimated_cost)
        .unwrap_or(profile.replacement_cost * REPLACEMENT_COST_SHARE)
}

pub fn repair_cost(base: f64) -> CostRange {
    CostRange {
        low: base * REPAIR_LOW,
        high: base * REPAIR_HIGH,
    }
}

/// Cost of doing nothing, scaled by priority.
pub fn cost_of_inaction(base: f64, priority: Priority, multipliers: &CostMultipliers) -> CostRange {
    let m = multipliers.for_priority(priority);
    CostRange {
        low: base * m,
        high: base * m * INACTION_SPREAD,
    }
}
