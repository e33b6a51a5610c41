//! The impact propagation engine.
//!
//! `analyze` runs the dispatch plan for the change type (upstream, then
//! downstream with the unconditional generators, then lateral), links the
//! emitted impacts into a dependency forest and rolls them up. The engine
//! reads the fleet snapshot and never mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::chain::{build_chain, ImpactChainNode};
use crate::change::{ChangeType, ImpactRequest, ProposedChange};
use crate::config::ImpactConfig;
use crate::dispatch::dispatch_table;
use crate::error::ImpactResult;
use crate::fleet::FleetState;
use crate::generators::{GeneratorContext, ImpactCollector};
use crate::impact::ImpactItem;
use crate::recommend::{alternatives, recommendations, AlternativeScenario, Recommendation};
use crate::summary::{
    overall_confidence, overall_risk, EsgSummary, FinancialSummary, ImpactSummary,
    OperationalSummary, RiskLevel,
};

/// Full report for one proposed change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAnalysisResult {
    /// Derived from the change id; identical inputs give identical ids.
    pub analysis_id: Uuid,
    pub change_id: String,
    pub change_type: ChangeType,
    /// The snapshot time of the fleet state analysed.
    pub analyzed_at: DateTime<Utc>,
    /// Flat list in emission order.
    pub impacts: Vec<ImpactItem>,
    pub impact_chain: Vec<ImpactChainNode>,
    pub summary: ImpactSummary,
    pub financial: FinancialSummary,
    pub esg: EsgSummary,
    pub operational: OperationalSummary,
    pub overall_risk: RiskLevel,
    pub overall_confidence: f64,
    pub recommendations: Vec<Recommendation>,
    pub alternatives: Vec<AlternativeScenario>,
}

impl ImpactAnalysisResult {
    pub fn impact(&self, id: &str) -> Option<&ImpactItem> {
        self.impacts.iter().find(|i| i.id == id)
    }

    /// Impacts whose id starts with `kind`, qualifier ignored.
    pub fn impacts_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a ImpactItem> + 'a {
        self.impacts.iter().filter(move |i| i.kind() == kind)
    }
}

/// Propagates proposed changes across a fleet snapshot.
#[derive(Debug, Clone, Default)]
pub struct ImpactEngine {
    config: ImpactConfig,
}

impl ImpactEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ImpactConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ImpactConfig {
        &self.config
    }

    pub fn analyze_request(&self, request: &ImpactRequest) -> ImpactResult<ImpactAnalysisResult> {
        self.analyze(&request.change, &request.fleet_state)
    }

    /// Analyse `change` against `fleet`.
    ///
    /// Only fails if the emitted impacts do not form a valid dependency
    /// forest, which the built-in generators never produce.
    pub fn analyze(&self, change: &ProposedChange, fleet: &FleetState) -> ImpactResult<ImpactAnalysisResult> {
        let ctx = GeneratorContext::new(change, fleet, &self.config);
        let plan = dispatch_table(change.change_type);
        debug!(
            change_id = %change.id,
            change_type = %change.change_type,
            vessels = ctx.vessels.len(),
            projects = ctx.projects.len(),
            "Analyzing proposed change"
        );

        let mut out = ImpactCollector::new();
        for generator in plan.ordered() {
            generator.run(&ctx, &mut out);
        }
        let impacts = out.into_impacts();

        let impact_chain = build_chain(&impacts)?;
        let summary = ImpactSummary::from_impacts(&impacts);
        let financial = FinancialSummary::from_impacts(&impacts, fleet);
        let esg = EsgSummary::from_impacts(&impacts, fleet);
        let operational = OperationalSummary::from_impacts(&impacts);
        let risk = overall_risk(&impacts);
        let confidence = overall_confidence(&impacts);

        info!(
            change_id = %change.id,
            impacts = summary.total_impacts,
            upstream = summary.by_direction.upstream,
            downstream = summary.by_direction.downstream,
            lateral = summary.by_direction.lateral,
            overall_risk = %risk,
            net_impact = financial.net_impact,
            "Impact analysis complete"
        );

        Ok(ImpactAnalysisResult {
            analysis_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, change.id.as_bytes()),
            change_id: change.id.clone(),
            change_type: change.change_type,
            analyzed_at: fleet.as_of,
            recommendations: recommendations(&impacts),
            alternatives: alternatives(),
            impact_chain,
            summary,
            financial,
            esg,
            operational,
            overall_risk: risk,
            overall_confidence: confidence,
            impacts,
        })
    }
}
