//! Reasoning-chain construction.
//!
//! Steps are emitted in a fixed narrative order, strongest evidence first:
//! known issue, age/health, OEM life consumption, temperature, moisture,
//! corrective history, inspection, oil analysis, fleet pattern, failure mode.
//! Steps whose inputs are absent are skipped.

use chrono::{DateTime, Utc};
use fleetwise_evidence::{EvidenceBundle, ParameterStatus};
use fleetwise_profiles::{ComponentProfile, FailureModeEstimate};

use crate::config::ExplainConfig;
use crate::known_issues::KnownIssueOverride;
use crate::types::{ComponentReading, ReasoningStep, SourceTag};

const OVERRIDE_CONFIDENCE: f64 = 95.0;
const MEASURED_HEALTH_CONFIDENCE: f64 = 90.0;
const OVERRIDE_HEALTH_CONFIDENCE: f64 = 85.0;
const PROFILE_HEALTH_CONFIDENCE: f64 = 70.0;
const LIFE_CONSUMED_CONFIDENCE: f64 = 85.0;
const TEMPERATURE_CONFIDENCE: f64 = 88.0;
const MOISTURE_CONFIDENCE: f64 = 85.0;
const WORK_ORDER_CONFIDENCE: f64 = 80.0;
const INSPECTION_CONFIDENCE: f64 = 75.0;
const OIL_CONFIDENCE: f64 = 82.0;
const PATTERN_CONFIDENCE: f64 = 75.0;
const FAILURE_MODE_CONFIDENCE: f64 = 70.0;
/// Health below this makes the age/health step key evidence.
const KEY_HEALTH: f64 = 50.0;
/// Failure-mode probability above this makes the step key evidence.
const KEY_FAILURE_PROBABILITY: f64 = 0.5;

/// Where the health score used for a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBasis {
    /// Reported with the request.
    Measured,
    /// Taken from a known-issue override.
    KnownIssue,
    /// Read off the OEM wear curve at the component's age.
    WearCurve,
}

/// Everything gathered for one component during the collect stage.
#[derive(Debug, Clone)]
pub struct Assessment<'a> {
    pub reading: &'a ComponentReading,
    pub profile: &'a ComponentProfile,
    pub age_years: f64,
    pub health: f64,
    pub basis: HealthBasis,
    pub known_issue: Option<&'a KnownIssueOverride>,
    pub failure_mode: Option<FailureModeEstimate<'a>>,
    /// `None` when no history was available.
    pub evidence: Option<&'a EvidenceBundle>,
    pub as_of: DateTime<Utc>,
}

struct Chain<'a> {
    component_id: &'a str,
    steps: Vec<ReasoningStep>,
}

impl Chain<'_> {
    fn push(&mut self, explanation: String, source: SourceTag, confidence: f64, is_key: bool) {
        self.steps.push(ReasoningStep {
            component_id: self.component_id.to_string(),
            explanation,
            source,
            confidence,
            is_key,
        });
    }
}

/// Build the reasoning steps for one assessed component.
pub fn explain(assessment: &Assessment<'_>, config: &ExplainConfig) -> Vec<ReasoningStep> {
    let a = assessment;
    let name = &a.reading.name;
    let mut chain = Chain {
        component_id: &a.reading.id,
        steps: Vec::new(),
    };

    if let Some(issue) = a.known_issue {
        let mut text = format!(
            "Known issue logged for {name}: {} (status: {}, assessed health {:.0}%)",
            issue.issue, issue.status, issue.health_score
        );
        if !issue.warning_signals.is_empty() {
            text.push_str(&format!("; warning signs: {}", issue.warning_signals.join(", ")));
        }
        chain.push(text, SourceTag::KnownIssue, OVERRIDE_CONFIDENCE, true);
    }

    let (basis_text, source, confidence) = match a.basis {
        HealthBasis::Measured => ("measured", SourceTag::LiveTelemetry, MEASURED_HEALTH_CONFIDENCE),
        HealthBasis::KnownIssue => ("from the known-issue record", SourceTag::KnownIssue, OVERRIDE_HEALTH_CONFIDENCE),
        HealthBasis::WearCurve => ("estimated from the OEM wear curve", SourceTag::OemProfile, PROFILE_HEALTH_CONFIDENCE),
    };
    chain.push(
        format!(
            "{name} is {:.1} years old with health at {:.0}% ({basis_text})",
            a.age_years, a.health
        ),
        source,
        confidence,
        a.health < KEY_HEALTH,
    );

    let expected = a.profile.expected_life_years;
    if expected > 0.0 {
        let consumed = a.age_years / expected * 100.0;
        chain.push(
            format!(
                "{consumed:.0}% of the {expected:.0}-year OEM design life has been consumed"
            ),
            SourceTag::OemProfile,
            LIFE_CONSUMED_CONFIDENCE,
            consumed > config.life_consumed_key_percent,
        );
    }

    if let Some(temperature) = a.reading.temperature {
        let limit = a.profile.temperature_limit_c;
        let ratio = temperature / limit;
        chain.push(
            format!(
                "Hot-spot temperature {temperature:.1}°C is {:.0}% of the {limit:.0}°C limit",
                ratio * 100.0
            ),
            SourceTag::LiveTelemetry,
            TEMPERATURE_CONFIDENCE,
            ratio > config.temperature_key_ratio,
        );
    }

    if let Some(moisture) = a.reading.moisture {
        let limit = a.profile.moisture_limit_ppm;
        let ratio = moisture / limit;
        chain.push(
            format!(
                "Moisture {moisture:.1} ppm is {:.0}% of the {limit:.0} ppm limit",
                ratio * 100.0
            ),
            SourceTag::LiveTelemetry,
            MOISTURE_CONFIDENCE,
            ratio > config.moisture_key_ratio,
        );
    }

    if let Some(bundle) = a.evidence {
        explain_history(&mut chain, a, bundle, config);
    }

    if let Some(estimate) = &a.failure_mode {
        chain.push(
            format!(
                "Most likely failure mode: {} ({:.0}% probability, MTBF {:.0} years)",
                estimate.mode.mode,
                estimate.probability * 100.0,
                estimate.mode.mean_time_between_failures_years
            ),
            SourceTag::FailureModeCatalog,
            FAILURE_MODE_CONFIDENCE,
            estimate.probability > KEY_FAILURE_PROBABILITY,
        );
    }

    chain.steps
}

fn explain_history(
    chain: &mut Chain<'_>,
    a: &Assessment<'_>,
    bundle: &EvidenceBundle,
    config: &ExplainConfig,
) {
    if !bundle.work_orders.is_empty() {
        let months = config.corrective_lookback_months;
        let corrective = bundle.recent_corrective_count(a.as_of, months);
        chain.push(
            format!(
                "{corrective} corrective work orders in the last {months} months ({} on record)",
                bundle.work_orders.len()
            ),
            SourceTag::WorkOrders,
            WORK_ORDER_CONFIDENCE,
            corrective >= config.corrective_key_count,
        );
    }

    if let Some(inspection) = bundle.latest_inspection() {
        let mut text = format!(
            "Latest inspection ({}) rated condition {}",
            inspection.inspected_at.format("%Y-%m-%d"),
            inspection.condition
        );
        if let Some(finding) = inspection.findings.first() {
            text.push_str(&format!(": {finding}"));
        }
        chain.push(
            text,
            SourceTag::Inspections,
            INSPECTION_CONFIDENCE,
            inspection.condition.is_concerning(),
        );
    }

    if let Some(sample) = bundle.latest_oil_analysis() {
        let flagged: Vec<&str> = sample
            .parameters
            .iter()
            .filter(|p| p.status == ParameterStatus::Warning)
            .map(|p| p.name.as_str())
            .collect();
        let mut text = format!(
            "Latest oil sample ({}) rated {}",
            sample.sampled_at.format("%Y-%m-%d"),
            sample.overall_condition
        );
        if !flagged.is_empty() {
            text.push_str(&format!("; warning on {}", flagged.join(", ")));
        }
        chain.push(
            text,
            SourceTag::OilAnalysis,
            OIL_CONFIDENCE,
            sample.overall_condition.is_concerning(),
        );
    }

    let relevant = bundle
        .fleet_patterns
        .iter()
        .find(|p| a.age_years >= p.average_failure_age_years * config.pattern_relevance_ratio);
    if let Some(pattern) = relevant {
        chain.push(
            format!(
                "Fleet pattern \"{}\": failures at {:.0} years on average across {} assets",
                pattern.pattern,
                pattern.average_failure_age_years,
                pattern.affected_assets.len()
            ),
            SourceTag::FleetPatterns,
            PATTERN_CONFIDENCE,
            a.age_years >= pattern.average_failure_age_years,
        );
    }
}
