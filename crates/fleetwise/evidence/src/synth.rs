//! Deterministic evidence synthesis.
//!
//! Every record set is a pure function of `(asset_id, component_id, kind)`
//! plus the query's `as_of`: the identifiers seed the generator and
//! `as_of` anchors the generated dates.

use std::marker::PhantomData;

use chrono::Duration;
use tracing::debug;

use crate::catalog::{oil_sampled, IssueCatalog, PatternCatalog};
use crate::error::EvidenceResult;
use crate::rng::{seed_for, DeterministicRng, Lcg};
use crate::source::EvidenceSource;
use crate::types::{
    Condition, EvidenceQuery, FleetPattern, InspectionRecord, OilAnalysisRecord, OilParameter,
    ParameterStatus, RecordKind, Trend, WorkOrder, WorkOrderType,
};

/// Share of generated work orders that are preventive.
pub const PREVENTIVE_WEIGHT: f64 = 0.65;

/// Work-order count is drawn from `MIN_WORK_ORDERS..=MAX_WORK_ORDERS`.
pub const MIN_WORK_ORDERS: u64 = 4;
pub const MAX_WORK_ORDERS: u64 = 11;

const LABOR_RATE: f64 = 95.0;
const HISTORY_DAYS: u64 = 5 * 365;
const CONDITION_WEIGHTS: [f64; 4] = [40.0, 35.0, 18.0, 7.0];
const TREND_WEIGHTS: [f64; 3] = [0.2, 0.5, 0.3];
const OIL_SAMPLES: usize = 3;
const INSPECTION_TEAMS: &[&str] = &["Field team A", "Field team B", "Field team C", "OEM service"];

struct ParameterSpec {
    name: &'static str,
    unit: &'static str,
    /// Value for a pristine sample.
    best: f64,
    /// Value for a badly degraded sample.
    worst: f64,
    caution: f64,
    warning: f64,
}

impl ParameterSpec {
    fn status(&self, value: f64) -> ParameterStatus {
        let higher_is_worse = self.worst > self.best;
        let past = |limit: f64| {
            if higher_is_worse {
                value > limit
            } else {
                value < limit
            }
        };
        if past(self.warning) {
            ParameterStatus::Warning
        } else if past(self.caution) {
            ParameterStatus::Caution
        } else {
            ParameterStatus::Normal
        }
    }
}

const OIL_PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec { name: "moisture", unit: "ppm", best: 5.0, worst: 40.0, caution: 20.0, warning: 30.0 },
    ParameterSpec { name: "acidity", unit: "mgKOH/g", best: 0.02, worst: 0.3, caution: 0.1, warning: 0.2 },
    ParameterSpec { name: "dielectric_breakdown", unit: "kV", best: 75.0, worst: 30.0, caution: 50.0, warning: 40.0 },
    ParameterSpec { name: "hydrogen", unit: "ppm", best: 10.0, worst: 250.0, caution: 100.0, warning: 150.0 },
    ParameterSpec { name: "acetylene", unit: "ppm", best: 0.0, worst: 5.0, caution: 1.0, warning: 2.0 },
];

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Evidence source that synthesizes reproducible history from catalogs.
#[derive(Debug, Clone)]
pub struct SyntheticEvidenceSource<R: DeterministicRng = Lcg> {
    issues: IssueCatalog,
    patterns: PatternCatalog,
    _rng: PhantomData<fn() -> R>,
}

impl SyntheticEvidenceSource<Lcg> {
    /// Source backed by the shipped catalogs and the default generator.
    pub fn builtin() -> Self {
        Self::new(IssueCatalog::builtin(), PatternCatalog::builtin())
    }
}

impl<R: DeterministicRng> SyntheticEvidenceSource<R> {
    pub fn new(issues: IssueCatalog, patterns: PatternCatalog) -> Self {
        Self {
            issues,
            patterns,
            _rng: PhantomData,
        }
    }

    fn rng(&self, query: &EvidenceQuery, kind: RecordKind) -> R {
        R::from_seed(seed_for(&query.asset_id, &query.component_id, kind))
    }
}

impl<R: DeterministicRng> EvidenceSource for SyntheticEvidenceSource<R> {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn work_orders(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<WorkOrder>> {
        let phrasings = self.issues.issues_for(query.component_type)?;
        let mut rng = self.rng(query, RecordKind::WorkOrder);

        let count = MIN_WORK_ORDERS + rng.below(MAX_WORK_ORDERS - MIN_WORK_ORDERS + 1);
        let mut orders = Vec::with_capacity(count as usize);

        for i in 0..count {
            let work_order_type = if rng.next_f64() < PREVENTIVE_WEIGHT {
                WorkOrderType::Preventive
            } else {
                WorkOrderType::Corrective
            };
            let pool = match work_order_type {
                WorkOrderType::Preventive => &phrasings.preventive,
                WorkOrderType::Corrective => &phrasings.corrective,
            };
            let issue = rng
                .pick(pool)
                .cloned()
                .unwrap_or_else(|| "Unspecified maintenance".to_string());

            let days_ago = 1 + rng.below(HISTORY_DAYS) as i64;
            let opened_at = query.as_of - Duration::days(days_ago);

            let (labor_hours, parts_cost, downtime_factor) = match work_order_type {
                WorkOrderType::Preventive => (
                    rng.range_f64(2.0, 8.0),
                    rng.range_f64(200.0, 2_000.0),
                    0.5,
                ),
                WorkOrderType::Corrective => (
                    rng.range_f64(6.0, 24.0),
                    rng.range_f64(1_500.0, 15_000.0),
                    rng.range_f64(1.0, 3.0),
                ),
            };

            orders.push(WorkOrder {
                id: format!("WO-{}-{}-{:02}", query.asset_id, query.component_id, i + 1),
                work_order_type,
                issue,
                opened_at,
                completed_at: opened_at + Duration::minutes((labor_hours * 60.0) as i64),
                labor_hours: round2(labor_hours),
                cost: round2(labor_hours * LABOR_RATE + parts_cost),
                downtime_hours: round2(labor_hours * downtime_factor),
            });
        }

        orders.sort_by(|a, b| b.opened_at.cmp(&a.opened_at));
        debug!(
            asset = %query.asset_id,
            component = %query.component_id,
            count = orders.len(),
            "Synthesized work orders"
        );
        Ok(orders)
    }

    fn inspections(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<InspectionRecord>> {
        let mut rng = self.rng(query, RecordKind::Inspection);
        let count = 2 + rng.below(4);
        let mut records = Vec::with_capacity(count as usize);

        for i in 0..count {
            let condition = Condition::ALL[rng.weighted_index(&CONDITION_WEIGHTS)];
            let pool = self.issues.findings_for(condition);
            let wanted = (1 + rng.below(2) as usize).min(pool.len());
            let start = rng.below(pool.len() as u64) as usize;
            let findings = (0..wanted)
                .map(|k| pool[(start + k) % pool.len()].clone())
                .collect();
            let days_ago = 1 + rng.below(3 * 365) as i64;

            records.push(InspectionRecord {
                id: format!("INS-{}-{}-{:02}", query.asset_id, query.component_id, i + 1),
                inspected_at: query.as_of - Duration::days(days_ago),
                condition,
                findings,
                inspector: rng
                    .pick(INSPECTION_TEAMS)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            });
        }

        records.sort_by(|a, b| b.inspected_at.cmp(&a.inspected_at));
        Ok(records)
    }

    fn oil_analyses(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<OilAnalysisRecord>> {
        if !oil_sampled(query.component_type) {
            return Ok(Vec::new());
        }

        let mut rng = self.rng(query, RecordKind::OilAnalysis);
        // One degradation level per component keeps the samples coherent.
        let degradation = rng.next_f64();
        let mut records = Vec::with_capacity(OIL_SAMPLES);

        for i in 0..OIL_SAMPLES {
            let parameters: Vec<OilParameter> = OIL_PARAMETERS
                .iter()
                .map(|spec| {
                    let level = (degradation + rng.range_f64(-0.15, 0.15)).clamp(0.0, 1.0);
                    let value = round2(spec.best + (spec.worst - spec.best) * level);
                    let trend = match rng.weighted_index(&TREND_WEIGHTS) {
                        0 => Trend::Improving,
                        1 => Trend::Stable,
                        _ => Trend::Worsening,
                    };
                    OilParameter {
                        name: spec.name.to_string(),
                        unit: spec.unit.to_string(),
                        value,
                        status: spec.status(value),
                        trend,
                    }
                })
                .collect();

            let days_ago = (i as i64) * 180 + 1 + rng.below(30) as i64;
            records.push(OilAnalysisRecord {
                id: format!("OIL-{}-{}-{:02}", query.asset_id, query.component_id, i + 1),
                sampled_at: query.as_of - Duration::days(days_ago),
                overall_condition: OilAnalysisRecord::condition_from(&parameters),
                parameters,
            });
        }

        Ok(records)
    }

    fn fleet_patterns(&self, query: &EvidenceQuery) -> EvidenceResult<Vec<FleetPattern>> {
        let templates = self.patterns.templates_for(query.component_type);
        if templates.is_empty() {
            return Ok(Vec::new());
        }

        let mut rng = self.rng(query, RecordKind::FleetPattern);
        let count = (rng.below(3) as usize).min(templates.len());
        let start = rng.below(templates.len() as u64) as usize;
        let mut patterns = Vec::with_capacity(count);

        for k in 0..count {
            let template = &templates[(start + k) % templates.len()];
            let asset_count = 3 + rng.below(6);
            let mut affected_assets: Vec<String> = (0..asset_count)
                .map(|_| format!("TX-{:04}", 1_000 + rng.below(9_000)))
                .collect();
            affected_assets.sort();
            affected_assets.dedup();

            patterns.push(FleetPattern {
                id: format!("FP-{}-{}", query.component_type, k + 1),
                component_type: query.component_type,
                pattern: template.pattern.clone(),
                description: template.description.clone(),
                average_failure_age_years: (template.typical_failure_age_years
                    * rng.range_f64(0.9, 1.1)
                    * 10.0)
                    .round()
                    / 10.0,
                occurrences: affected_assets.len() as u32 + rng.below(4) as u32,
                affected_assets,
                recommended_action: template.recommended_action.clone(),
            });
        }

        Ok(patterns)
    }
}
