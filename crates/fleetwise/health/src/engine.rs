//! The health inference engine.
//!
//! Each component runs through `Collect → Classify → Explain → Emit`
//! independently; the engine then sorts the predictions and rolls them up
//! into one response. The engine holds no per-call state.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use fleetwise_evidence::{EvidenceBundle, EvidenceQuery, EvidenceSource, SyntheticEvidenceSource};
use fleetwise_profiles::{
    ComponentProfile, ComponentType, FailureModeEstimate, MaintenanceDue, ProfileRegistry,
};
use tracing::{debug, info, warn};

use crate::classify;
use crate::config::HealthEngineConfig;
use crate::error::{HealthError, HealthResult};
use crate::explain::{self, Assessment, HealthBasis};
use crate::known_issues::{KnownIssueCatalog, KnownIssueOverride};
use crate::types::{
    ComponentReading, DegradationPoint, FailureModeSummary, HealthInferenceRequest,
    HealthInferenceResponse, Prediction, Priority, ReasoningStep, ScheduledTask, SourceTag,
};

/// Stage of the per-component pipeline, reported in debug traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceStage {
    Collect,
    Classify,
    Explain,
    Emit,
}

impl std::fmt::Display for InferenceStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceStage::Collect => write!(f, "collect"),
            InferenceStage::Classify => write!(f, "classify"),
            InferenceStage::Explain => write!(f, "explain"),
            InferenceStage::Emit => write!(f, "emit"),
        }
    }
}

/// Output of the pipeline for a single component.
struct ComponentOutcome {
    prediction: Prediction,
    steps: Vec<ReasoningStep>,
    curve: Vec<DegradationPoint>,
    history: Option<EvidenceBundle>,
}

/// Merges readings, OEM profiles, known issues and history into
/// prioritized, explainable predictions.
pub struct HealthInferenceEngine {
    profiles: ProfileRegistry,
    known_issues: KnownIssueCatalog,
    evidence: Box<dyn EvidenceSource>,
    config: HealthEngineConfig,
}

impl HealthInferenceEngine {
    pub fn new(profiles: ProfileRegistry, evidence: impl EvidenceSource + 'static) -> Self {
        Self {
            profiles,
            known_issues: KnownIssueCatalog::default(),
            evidence: Box::new(evidence),
            config: HealthEngineConfig::default(),
        }
    }

    /// Built-in profiles with synthetic history.
    pub fn builtin() -> Self {
        Self::new(ProfileRegistry::builtin(), SyntheticEvidenceSource::builtin())
    }

    pub fn with_known_issues(mut self, known_issues: KnownIssueCatalog) -> Self {
        self.known_issues = known_issues;
        self
    }

    pub fn with_config(mut self, config: HealthEngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HealthEngineConfig {
        &self.config
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    /// Infer health for every component in the request.
    ///
    /// Fails on an empty request, an out-of-range reading or an unknown
    /// component type. Missing history never fails; the affected
    /// component gets a profile-only estimate with lower confidence.
    pub fn infer(&self, request: &HealthInferenceRequest) -> HealthResult<HealthInferenceResponse> {
        if request.components.is_empty() {
            return Err(HealthError::EmptyRequest(request.asset_id.clone()));
        }

        let mut outcomes = request
            .components
            .iter()
            .map(|reading| self.infer_component(request, reading))
            .collect::<HealthResult<Vec<_>>>()?;

        // Stable: equal priorities keep request order.
        outcomes.sort_by(|a, b| b.prediction.priority.cmp(&a.prediction.priority));

        let mut sources: BTreeSet<SourceTag> = [
            SourceTag::KnownIssue,
            SourceTag::OemProfile,
            SourceTag::FailureModeCatalog,
        ]
        .into_iter()
        .collect();
        if request
            .components
            .iter()
            .any(|r| r.current_health.is_some() || r.has_live_readings())
        {
            sources.insert(SourceTag::LiveTelemetry);
        }
        for bundle in outcomes.iter().filter_map(|o| o.history.as_ref()) {
            if !bundle.work_orders.is_empty() {
                sources.insert(SourceTag::WorkOrders);
            }
            if !bundle.inspections.is_empty() {
                sources.insert(SourceTag::Inspections);
            }
            if !bundle.oil_analyses.is_empty() {
                sources.insert(SourceTag::OilAnalysis);
            }
            if !bundle.fleet_patterns.is_empty() {
                sources.insert(SourceTag::FleetPatterns);
            }
        }

        let degradation_curve = outcomes
            .first()
            .map(|o| o.curve.clone())
            .unwrap_or_default();
        let mut predictions = Vec::with_capacity(outcomes.len());
        let mut reasoning_chain = Vec::new();
        for outcome in outcomes {
            predictions.push(outcome.prediction);
            reasoning_chain.extend(outcome.steps);
        }

        let overall_health_score =
            predictions.iter().map(|p| p.health_score).sum::<f64>() / predictions.len() as f64;
        let source_contributions = source_contributions(&reasoning_chain);

        info!(
            asset_id = %request.asset_id,
            components = predictions.len(),
            overall_health = overall_health_score,
            top_priority = %predictions[0].priority,
            steps = reasoning_chain.len(),
            "Health inference complete"
        );

        Ok(HealthInferenceResponse {
            asset_id: request.asset_id.clone(),
            asset_name: request.asset_name.clone(),
            predictions,
            reasoning_chain,
            degradation_curve,
            overall_health_score,
            sources_queried: sources.into_iter().collect(),
            source_contributions,
            generated_at: request.as_of,
        })
    }

    fn infer_component(
        &self,
        request: &HealthInferenceRequest,
        reading: &ComponentReading,
    ) -> HealthResult<ComponentOutcome> {
        let stage = InferenceStage::Collect;
        debug!(%stage, asset_id = %request.asset_id, component_id = %reading.id, "Collecting evidence");

        validate_reading(reading)?;
        let component_type = ComponentType::from_str(&reading.component_type)?;
        let profile = self.profiles.get_profile(component_type)?;
        let known_issue = self.known_issues.find(&request.asset_id, &reading.name);

        let (health, basis) = match (reading.current_health, known_issue) {
            (Some(h), _) => (h, HealthBasis::Measured),
            (None, Some(issue)) => (issue.health_score, HealthBasis::KnownIssue),
            (None, None) => {
                let age = reading.age_years.unwrap_or(0.0);
                (profile.wear_percentage(age), HealthBasis::WearCurve)
            }
        };
        let age_years = reading.age_years.unwrap_or_else(|| match basis {
            HealthBasis::WearCurve => 0.0,
            _ => profile.age_for_health(health),
        });

        let failure_mode = profile.most_likely_failure_mode(reading.moisture, reading.temperature);
        let history = self.collect_history(request, reading, component_type);

        let stage = InferenceStage::Classify;
        let remaining = classify::remaining_life(profile.expected_life_years, age_years, health);
        let priority = match known_issue {
            Some(issue) => issue.priority,
            None => classify::classify_priority(
                health,
                remaining.percent_remaining,
                failure_mode.as_ref().map(|f| f.probability),
                &self.config.thresholds,
            ),
        };
        debug!(
            %stage,
            component_id = %reading.id,
            health,
            age_years,
            remaining_percent = remaining.percent_remaining,
            %priority,
            override_applied = known_issue.is_some(),
            "Classified component"
        );

        let stage = InferenceStage::Explain;
        let assessment = Assessment {
            reading,
            profile,
            age_years,
            health,
            basis,
            known_issue,
            failure_mode,
            evidence: history.as_ref(),
            as_of: request.as_of,
        };
        let steps = explain::explain(&assessment, &self.config.explain);
        debug!(%stage, component_id = %reading.id, steps = steps.len(), "Built reasoning chain");

        let stage = InferenceStage::Emit;
        let next_task = profile.next_maintenance_task(age_years * 12.0);
        let base = classify::base_cost(profile);
        let customers_at_risk = match known_issue {
            Some(issue) => issue.customers_at_risk,
            None if priority >= Priority::High => request.customers_served.unwrap_or(0),
            None => 0,
        };

        let prediction = Prediction {
            component_id: reading.id.clone(),
            component_name: reading.name.clone(),
            component_type: component_type.to_string(),
            priority,
            health_score: health,
            remaining_life: remaining,
            confidence: self.confidence(&assessment),
            predicted_issue: predicted_issue(known_issue, assessment.failure_mode.as_ref()),
            recommended_action: recommended_action(
                known_issue,
                priority,
                profile,
                next_task.as_ref(),
            ),
            failure_mode: assessment.failure_mode.as_ref().map(|f| FailureModeSummary {
                mode: f.mode.mode.clone(),
                probability: f.probability,
            }),
            next_maintenance: next_task.as_ref().map(|due| ScheduledTask {
                task: due.task.task.clone(),
                due_in_months: due.due_in_months,
                duration_hours: due.task.duration_hours,
            }),
            cost_of_inaction: classify::cost_of_inaction(
                base,
                priority,
                &self.config.cost_multipliers,
            ),
            estimated_repair_cost: classify::repair_cost(base),
            customers_at_risk,
            override_applied: known_issue.is_some(),
        };
        let curve = classify::degradation_curve(age_years, health, request.as_of, &self.config.curve);
        debug!(%stage, component_id = %reading.id, confidence = prediction.confidence, "Emitted prediction");

        Ok(ComponentOutcome {
            prediction,
            steps,
            curve,
            history,
        })
    }

    /// History for one component; gaps and source failures yield `None`.
    fn collect_history(
        &self,
        request: &HealthInferenceRequest,
        reading: &ComponentReading,
        component_type: ComponentType,
    ) -> Option<EvidenceBundle> {
        let query = EvidenceQuery::new(
            request.asset_id.clone(),
            reading.id.clone(),
            component_type,
            request.as_of,
        );
        match self.evidence.collect(&query) {
            Ok(bundle) if bundle.is_empty() => {
                warn!(
                    source = self.evidence.name(),
                    asset_id = %request.asset_id,
                    component_id = %reading.id,
                    "No history available; using profile-only estimate"
                );
                None
            }
            Ok(bundle) => {
                debug!(
                    source = self.evidence.name(),
                    component_id = %reading.id,
                    records = bundle.record_count(),
                    "Collected history"
                );
                Some(bundle)
            }
            Err(e) => {
                warn!(
                    source = self.evidence.name(),
                    asset_id = %request.asset_id,
                    component_id = %reading.id,
                    error = %e,
                    "History unavailable; using profile-only estimate"
                );
                None
            }
        }
    }

    fn confidence(&self, a: &Assessment<'_>) -> f64 {
        let c = &self.config.confidence;
        let mut confidence = c.profile_only;
        if a.basis == HealthBasis::Measured {
            confidence += c.measured_health_bonus;
        }
        if a.reading.has_live_readings() {
            confidence += c.live_readings_bonus;
        }
        if a.evidence.is_some() {
            confidence += c.history_bonus;
        }
        if a.known_issue.is_some() {
            confidence += c.override_bonus;
        }
        confidence.min(c.max)
    }
}

fn validate_reading(reading: &ComponentReading) -> HealthResult<()> {
    let invalid = |reason: String| HealthError::InvalidReading {
        component_id: reading.id.clone(),
        reason,
    };
    if let Some(h) = reading.current_health {
        if !(0.0..=100.0).contains(&h) {
            return Err(invalid(format!("health {h} outside 0-100")));
        }
    }
    if let Some(age) = reading.age_years {
        if !age.is_finite() || age < 0.0 {
            return Err(invalid(format!("age {age} must be non-negative")));
        }
    }
    if let Some(m) = reading.moisture {
        if m < 0.0 {
            return Err(invalid(format!("moisture {m} must be non-negative")));
        }
    }
    if let Some(load) = reading.load_percent {
        if load < 0.0 {
            return Err(invalid(format!("load {load} must be non-negative")));
        }
    }
    Ok(())
}

fn predicted_issue(
    known_issue: Option<&KnownIssueOverride>,
    failure_mode: Option<&FailureModeEstimate<'_>>,
) -> String {
    match (known_issue, failure_mode) {
        (Some(issue), _) => issue.issue.clone(),
        (None, Some(f)) => f.mode.mode.clone(),
        (None, None) => "Age-related wear".to_string(),
    }
}

fn recommended_action(
    known_issue: Option<&KnownIssueOverride>,
    priority: Priority,
    profile: &ComponentProfile,
    next_task: Option<&MaintenanceDue<'_>>,
) -> String {
    if let Some(issue) = known_issue.filter(|i| !i.recommended_action.is_empty()) {
        return issue.recommended_action.clone();
    }

    let next = next_task.map(|d| d.task.task.as_str());
    match priority {
        Priority::Critical => {
            let major = profile
                .most_expensive_task()
                .map(|t| t.task.as_str())
                .unwrap_or("a condition assessment");
            format!(
                "Immediate intervention: schedule {} and prepare a replacement plan for the {}",
                major.to_lowercase(),
                profile.display_name.to_lowercase()
            )
        }
        Priority::High => match next {
            Some(task) => format!("Bring forward {} to within 30 days and increase monitoring", task.to_lowercase()),
            None => "Increase monitoring and plan an outage within 30 days".to_string(),
        },
        Priority::Medium => match next {
            Some(task) => format!("Perform {} at the next planned outage", task.to_lowercase()),
            None => "Review at the next planned outage".to_string(),
        },
        Priority::Low => match next_task {
            Some(due) => format!(
                "Continue routine maintenance; {} due in {:.0} months",
                due.task.task.to_lowercase(),
                due.due_in_months
            ),
            None => "Continue routine maintenance".to_string(),
        },
    }
}

/// Confidence-weighted share of the reasoning chain per source, in percent.
fn source_contributions(steps: &[ReasoningStep]) -> BTreeMap<SourceTag, f64> {
    let total: f64 = steps.iter().map(|s| s.confidence).sum();
    let mut shares = BTreeMap::new();
    if total <= 0.0 {
        return shares;
    }
    for step in steps {
        *shares.entry(step.source).or_insert(0.0) += step.confidence / total * 100.0;
    }
    shares
}
