//! Impact generators.
//!
//! Every generator inspects the slices of [`FleetState`] relevant to its
//! concern and pushes an [`ImpactItem`] only when its trigger holds. No
//! trigger means no record, never a placeholder.
//!
//! Generators run in dispatch order and may depend only on impacts that
//! already exist; [`ImpactCollector::existing`] filters candidate
//! dependencies down to ids that have been emitted.

mod downstream;
mod lateral;
mod upstream;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::change::ProposedChange;
use crate::config::ImpactConfig;
use crate::fleet::{FleetState, Project, Vessel};
use crate::impact::{Direction, ImpactItem};

/// Inputs shared by every generator for one analysis.
#[derive(Debug, Clone)]
pub struct GeneratorContext<'a> {
    pub change: &'a ProposedChange,
    pub fleet: &'a FleetState,
    pub config: &'a ImpactConfig,
    /// Named vessels, or the vessels of named projects when none are named.
    /// Each vessel appears once, in first-named order.
    pub vessels: Vec<&'a Vessel>,
    /// Named projects plus open projects using a named vessel.
    pub projects: Vec<&'a Project>,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(change: &'a ProposedChange, fleet: &'a FleetState, config: &'a ImpactConfig) -> Self {
        let mut vessels: Vec<&Vessel> = Vec::new();
        for id in &change.affected_vessel_ids {
            match fleet.vessel(id) {
                Some(v) if vessels.iter().any(|x| x.id == v.id) => {}
                Some(v) => vessels.push(v),
                None => debug!(vessel_id = %id, change_id = %change.id, "Change names unknown vessel"),
            }
        }

        let mut projects: Vec<&Project> = Vec::new();
        for id in &change.affected_project_ids {
            if let Some(p) = fleet.project(id) {
                if !projects.iter().any(|x| x.id == p.id) {
                    projects.push(p);
                }
            }
        }
        for project in &fleet.projects {
            let uses_named = change.affected_vessel_ids.iter().any(|v| project.uses_vessel(v));
            if uses_named && project.is_open() && !projects.iter().any(|p| p.id == project.id) {
                projects.push(project);
            }
        }

        if vessels.is_empty() {
            for project in &projects {
                for id in &project.vessel_ids {
                    if let Some(v) = fleet.vessel(id) {
                        if !vessels.iter().any(|x| x.id == v.id) {
                            vessels.push(v);
                        }
                    }
                }
            }
        }

        Self {
            change,
            fleet,
            config,
            vessels,
            projects,
        }
    }

    pub fn vessel_ids(&self) -> Vec<String> {
        self.vessels.iter().map(|v| v.id.clone()).collect()
    }

    /// Distinct clients of the affected projects, in project order.
    pub fn clients(&self) -> Vec<&'a str> {
        let mut clients: Vec<&str> = Vec::new();
        for p in self.projects.iter().copied() {
            if !clients.contains(&p.client.as_str()) {
                clients.push(p.client.as_str());
            }
        }
        clients
    }

    /// Vessels not named in the change that work for a client of an
    /// affected project, in fleet order, capped at the lateral fan-out.
    pub fn lateral_vessels(&self) -> Vec<&'a Vessel> {
        let clients = self.clients();
        let fleet = self.fleet;
        fleet
            .vessels
            .iter()
            .filter(|v| !self.change.names_vessel(&v.id))
            .filter(|v| !self.vessels.iter().any(|a| a.id == v.id))
            .filter(|v| {
                fleet
                    .projects
                    .iter()
                    .any(|p| p.uses_vessel(&v.id) && clients.contains(&p.client.as_str()))
            })
            .take(self.config.lateral_fan_out)
            .collect()
    }
}

/// Accumulates impacts in emission order.
#[derive(Debug, Default)]
pub struct ImpactCollector {
    impacts: Vec<ImpactItem>,
    ids: HashSet<String>,
}

impl ImpactCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, impact: ImpactItem) {
        debug!(
            impact_id = %impact.id,
            direction = ?impact.direction,
            severity = %impact.severity,
            "Impact emitted"
        );
        self.ids.insert(impact.id.clone());
        self.impacts.push(impact);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&ImpactItem> {
        self.impacts.iter().find(|i| i.id == id)
    }

    /// The candidates that have already been emitted, in the given order.
    pub fn existing<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(Into::into)
            .filter(|id| self.contains(id))
            .collect()
    }

    /// Emitted impacts whose kind is `kind`.
    pub fn of_kind<'s>(&'s self, kind: &'s str) -> impl Iterator<Item = &'s ImpactItem> + 's {
        self.impacts.iter().filter(move |i| i.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.impacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.impacts.is_empty()
    }

    pub fn into_impacts(self) -> Vec<ImpactItem> {
        self.impacts
    }
}

/// Every impact generator, named by the id prefix it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    // upstream
    SparePartsShortage,
    CrewAvailability,
    MaintenanceWindowConflict,
    PortCapacityConstraint,
    FuelContractNeeded,
    CertificationExpiry,
    CrewCertificationRequired,
    // downstream
    TimelineDelay,
    ContractPenalty,
    RevenueLoss,
    OperatingCostChange,
    EmissionsChange,
    SafetyRisk,
    InsurancePremiumChange,
    DeferredMaintenanceRisk,
    ClientRelationship,
    EsgScoreChange,
    // lateral
    ResourceReallocation,
    MaintenanceSlotCompetition,
    CrewRedeployment,
}

impl Generator {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Generator::SparePartsShortage => "spare-parts-shortage",
            Generator::CrewAvailability => "crew-availability",
            Generator::MaintenanceWindowConflict => "maintenance-window-conflict",
            Generator::PortCapacityConstraint => "port-capacity-constraint",
            Generator::FuelContractNeeded => "fuel-contract-needed",
            Generator::CertificationExpiry => "certification-expiry",
            Generator::CrewCertificationRequired => "crew-certification-required",
            Generator::TimelineDelay => "timeline-delay",
            Generator::ContractPenalty => "contract-penalty",
            Generator::RevenueLoss => "revenue-loss",
            Generator::OperatingCostChange => "operating-cost-change",
            Generator::EmissionsChange => "emissions-change",
            Generator::SafetyRisk => "safety-risk",
            Generator::InsurancePremiumChange => "insurance-premium-change",
            Generator::DeferredMaintenanceRisk => "deferred-maintenance-risk",
            Generator::ClientRelationship => "client-relationship",
            Generator::EsgScoreChange => "esg-score-change",
            Generator::ResourceReallocation => "resource-reallocation",
            Generator::MaintenanceSlotCompetition => "maintenance-slot-competition",
            Generator::CrewRedeployment => "crew-redeployment",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Generator::SparePartsShortage
            | Generator::CrewAvailability
            | Generator::MaintenanceWindowConflict
            | Generator::PortCapacityConstraint
            | Generator::FuelContractNeeded
            | Generator::CertificationExpiry
            | Generator::CrewCertificationRequired => Direction::Upstream,
            Generator::ResourceReallocation
            | Generator::MaintenanceSlotCompetition
            | Generator::CrewRedeployment => Direction::Lateral,
            _ => Direction::Downstream,
        }
    }

    /// Run the generator, pushing any impacts it triggers.
    pub fn run(&self, ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
        let before = out.len();
        match self {
            Generator::SparePartsShortage => upstream::spare_parts_shortage(ctx, out),
            Generator::CrewAvailability => upstream::crew_availability(ctx, out),
            Generator::MaintenanceWindowConflict => upstream::maintenance_window_conflict(ctx, out),
            Generator::PortCapacityConstraint => upstream::port_capacity_constraint(ctx, out),
            Generator::FuelContractNeeded => upstream::fuel_contract_needed(ctx, out),
            Generator::CertificationExpiry => upstream::certification_expiry(ctx, out),
            Generator::CrewCertificationRequired => upstream::crew_certification_required(ctx, out),
            Generator::TimelineDelay => downstream::timeline_delay(ctx, out),
            Generator::ContractPenalty => downstream::contract_penalty(ctx, out),
            Generator::RevenueLoss => downstream::revenue_loss(ctx, out),
            Generator::OperatingCostChange => downstream::operating_cost_change(ctx, out),
            Generator::EmissionsChange => downstream::emissions_change(ctx, out),
            Generator::SafetyRisk => downstream::safety_risk(ctx, out),
            Generator::InsurancePremiumChange => downstream::insurance_premium_change(ctx, out),
            Generator::DeferredMaintenanceRisk => downstream::deferred_maintenance_risk(ctx, out),
            Generator::ClientRelationship => downstream::client_relationship(ctx, out),
            Generator::EsgScoreChange => downstream::esg_score_change(ctx, out),
            Generator::ResourceReallocation => lateral::resource_reallocation(ctx, out),
            Generator::MaintenanceSlotCompetition => lateral::maintenance_slot_competition(ctx, out),
            Generator::CrewRedeployment => lateral::crew_redeployment(ctx, out),
        }
        debug!(
            generator = self.id_prefix(),
            emitted = out.len() - before,
            "Generator finished"
        );
    }
}
