//! Lateral generators: side effects on sister vessels serving the same clients.

use super::{GeneratorContext, ImpactCollector};
use crate::change::ChangeType;
use crate::fleet::{CrewStatus, VesselStatus};
use crate::impact::{AffectedEntities, Direction, ImpactCategory, ImpactItem, Severity, Timeframe};

fn lateral(id: String, category: ImpactCategory, severity: Severity, title: &str) -> ImpactItem {
    ImpactItem::new(id, category, Direction::Lateral, severity, title)
}

pub(super) fn resource_reallocation(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let severity = match ctx.change.change_type {
        ChangeType::ProjectCancellation => Severity::Positive,
        ChangeType::EquipmentFailure => Severity::Medium,
        _ => Severity::Low,
    };
    let causes: Vec<String> = ["timeline-delay", "revenue-loss"]
        .into_iter()
        .flat_map(|kind| out.of_kind(kind))
        .map(|i| i.id.clone())
        .collect();

    for vessel in ctx.lateral_vessels() {
        if vessel.status == VesselStatus::InMaintenance {
            continue;
        }
        let description = if severity == Severity::Positive {
            format!("{} can absorb work released by the cancellation", vessel.name)
        } else {
            format!("{} may be pulled in to cover affected work", vessel.name)
        };
        out.push(
            lateral(
                format!("resource-reallocation:{}", vessel.id),
                ImpactCategory::Resource,
                severity,
                "Sister vessel reallocation",
            )
            .with_description(description)
            .with_timeframe(Timeframe::ShortTerm)
            .with_confidence(55.0)
            .with_mitigations([format!("Confirm {} schedule headroom before committing", vessel.name)])
            .with_depends_on(causes.clone())
            .with_affected(AffectedEntities::vessels([vessel.id.clone()])),
        );
    }
}

pub(super) fn maintenance_slot_competition(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let window = ctx.config.maintenance_window_days;
    let causes = out.existing(["maintenance-window-conflict", "deferred-maintenance-risk"]);

    for vessel in ctx.lateral_vessels() {
        let due: Vec<_> = ctx.fleet.maintenance_due_within(&vessel.id, window).collect();
        if due.is_empty() {
            continue;
        }
        let critical = due.iter().any(|m| m.critical);
        out.push(
            lateral(
                format!("maintenance-slot-competition:{}", vessel.id),
                ImpactCategory::Maintenance,
                if critical { Severity::Medium } else { Severity::Low },
                "Competing for yard and maintenance slots",
            )
            .with_description(format!(
                "{} has {} job(s) due within {} days",
                vessel.name,
                due.len(),
                window
            ))
            .with_timeframe(Timeframe::ShortTerm)
            .with_confidence(60.0)
            .with_mitigations(["Book yard slots for both vessels in a single planning round"])
            .with_depends_on(causes.clone())
            .with_affected(AffectedEntities::vessels([vessel.id.clone()])),
        );
    }
}

pub(super) fn crew_redeployment(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let causes = out.existing(["crew-availability"]);

    for vessel in ctx.lateral_vessels() {
        let available: Vec<String> = ctx
            .fleet
            .crew_on(&vessel.id)
            .filter(|c| c.status == CrewStatus::Available)
            .map(|c| c.id.clone())
            .collect();
        if available.is_empty() {
            continue;
        }
        out.push(
            lateral(
                format!("crew-redeployment:{}", vessel.id),
                ImpactCategory::Crew,
                Severity::Low,
                "Crew redeployment from sister vessel",
            )
            .with_description(format!(
                "{} available crew on {} could be redeployed",
                available.len(),
                vessel.name
            ))
            .with_timeframe(Timeframe::Immediate)
            .with_confidence(65.0)
            .with_mitigations(["Check rest-hour limits before transferring crew"])
            .with_depends_on(causes.clone())
            .with_affected(AffectedEntities {
                vessels: vec![vessel.id.clone()],
                crew: available,
                ..AffectedEntities::default()
            }),
        );
    }
}
