//! Fixed mapping from change type to the generators it triggers.

use crate::change::ChangeType;
use crate::generators::Generator;
use crate::impact::Direction;

use Generator::*;

/// Ordered generator lists for one change type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPlan {
    pub upstream: &'static [Generator],
    pub downstream: &'static [Generator],
    pub lateral: &'static [Generator],
}

/// Generators that run for every change, after the table's downstream list.
pub const ALWAYS_DOWNSTREAM: &[Generator] = &[EsgScoreChange];

const NONE: &[Generator] = &[];

impl DispatchPlan {
    pub fn for_direction(&self, direction: Direction) -> &'static [Generator] {
        match direction {
            Direction::Upstream => self.upstream,
            Direction::Downstream => self.downstream,
            Direction::Lateral => self.lateral,
        }
    }

    /// Generators in execution order: upstream, downstream plus the
    /// unconditional ones, then lateral.
    pub fn ordered(&self) -> impl Iterator<Item = Generator> + '_ {
        self.upstream
            .iter()
            .chain(self.downstream)
            .chain(ALWAYS_DOWNSTREAM)
            .chain(self.lateral)
            .copied()
    }
}

fn plan(
    upstream: &'static [Generator],
    downstream: &'static [Generator],
    lateral: &'static [Generator],
) -> DispatchPlan {
    DispatchPlan {
        upstream,
        downstream,
        lateral,
    }
}

pub fn dispatch_table(change_type: ChangeType) -> DispatchPlan {
    match change_type {
        ChangeType::VesselAssignment => plan(
            &[CrewAvailability, MaintenanceWindowConflict, CertificationExpiry, PortCapacityConstraint],
            &[TimelineDelay, ContractPenalty, OperatingCostChange, ClientRelationship],
            &[ResourceReallocation, CrewRedeployment],
        ),
        ChangeType::VesselSwap => plan(
            &[CrewAvailability, MaintenanceWindowConflict, CertificationExpiry],
            &[TimelineDelay, ContractPenalty, OperatingCostChange, EmissionsChange, ClientRelationship],
            &[ResourceReallocation, CrewRedeployment],
        ),
        ChangeType::FuelSwitch => plan(
            &[FuelContractNeeded, CrewCertificationRequired, SparePartsShortage],
            &[OperatingCostChange, EmissionsChange, SafetyRisk, InsurancePremiumChange],
            NONE,
        ),
        ChangeType::EquipmentFailure => plan(
            &[SparePartsShortage, MaintenanceWindowConflict, PortCapacityConstraint],
            &[TimelineDelay, ContractPenalty, RevenueLoss, SafetyRisk, InsurancePremiumChange, ClientRelationship],
            &[ResourceReallocation, MaintenanceSlotCompetition],
        ),
        ChangeType::MaintenanceDeferral => plan(
            &[SparePartsShortage, CertificationExpiry],
            &[DeferredMaintenanceRisk, SafetyRisk, InsurancePremiumChange],
            &[MaintenanceSlotCompetition],
        ),
        ChangeType::ScheduleChange => plan(
            &[CrewAvailability, MaintenanceWindowConflict, PortCapacityConstraint],
            &[TimelineDelay, ContractPenalty, ClientRelationship],
            &[ResourceReallocation],
        ),
        ChangeType::CrewChange => plan(
            &[CrewAvailability],
            &[TimelineDelay, OperatingCostChange, SafetyRisk],
            &[CrewRedeployment],
        ),
        ChangeType::RouteChange => plan(
            &[PortCapacityConstraint],
            &[TimelineDelay, OperatingCostChange, EmissionsChange, InsurancePremiumChange],
            NONE,
        ),
        ChangeType::SpeedChange => plan(
            NONE,
            &[TimelineDelay, OperatingCostChange, EmissionsChange, ClientRelationship],
            NONE,
        ),
        ChangeType::PortChange => plan(
            &[PortCapacityConstraint],
            &[TimelineDelay, OperatingCostChange],
            NONE,
        ),
        ChangeType::ProjectCancellation => plan(
            NONE,
            &[RevenueLoss, ContractPenalty, ClientRelationship],
            &[ResourceReallocation],
        ),
        ChangeType::Custom => plan(NONE, NONE, NONE),
    }
}
