//! Upstream generators: preconditions the change runs into.

use chrono::Duration;

use super::{GeneratorContext, ImpactCollector};
use crate::fleet::{fuel_properties, SparePart};
use crate::impact::{AffectedEntities, Direction, ImpactCategory, ImpactItem, QuantDelta, Severity, Timeframe};

/// Berth availability below this is treated as severe.
const SEVERE_BERTH_PERCENT: f64 = 10.0;
/// Certificates expiring within this many days are urgent.
const URGENT_CERTIFICATE_DAYS: i64 = 30;

fn upstream(id: &str, category: ImpactCategory, severity: Severity, title: &str) -> ImpactItem {
    ImpactItem::new(id, category, Direction::Upstream, severity, title)
}

pub(super) fn spare_parts_shortage(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let short: Vec<&SparePart> = ctx
        .fleet
        .supply_chain
        .spare_parts
        .iter()
        .filter(|p| p.below_reorder_point())
        .filter(|p| ctx.vessels.iter().any(|v| p.applies_to(&v.id)))
        .collect();
    if short.is_empty() {
        return;
    }

    let stockout = short.iter().any(|p| p.quantity_on_hand == 0);
    let lead_time = short.iter().map(|p| p.lead_time_days).max().unwrap_or(0);
    let parts: Vec<&str> = short.iter().map(|p| p.part_number.as_str()).collect();

    out.push(
        upstream(
            "spare-parts-shortage",
            ImpactCategory::SupplyChain,
            if stockout { Severity::High } else { Severity::Medium },
            "Spare parts below reorder point",
        )
        .with_description(format!(
            "{} part(s) below reorder point ({}); longest lead time {} days",
            short.len(),
            parts.join(", "),
            lead_time
        ))
        .with_delta(QuantDelta::new("lead_time_days", 0.0, f64::from(lead_time), "days"))
        .with_timeframe(if lead_time > 30 {
            Timeframe::MediumTerm
        } else {
            Timeframe::ShortTerm
        })
        .with_confidence(85.0)
        .with_mitigations([
            "Expedite purchase orders for parts below reorder point",
            "Transfer stock from sister vessels",
            "Qualify an alternative supplier",
        ])
        .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn crew_availability(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let mut total = 0usize;
    let mut unavailable: Vec<String> = Vec::new();
    for vessel in &ctx.vessels {
        for member in ctx.fleet.crew_on(&vessel.id) {
            total += 1;
            if member.is_unavailable() {
                unavailable.push(member.id.clone());
            }
        }
    }
    if unavailable.is_empty() {
        return;
    }

    let available = (total - unavailable.len()) as f64;
    let severity = if unavailable.len() * 2 > total {
        Severity::High
    } else {
        Severity::Medium
    };

    out.push(
        upstream("crew-availability", ImpactCategory::Crew, severity, "Crew unavailable")
            .with_description(format!(
                "{} of {} assigned crew are on leave or in training",
                unavailable.len(),
                total
            ))
            .with_delta(QuantDelta::new("available_crew", total as f64, available, "people"))
            .with_timeframe(Timeframe::Immediate)
            .with_confidence(80.0)
            .with_mitigations([
                "Recall crew from leave or reschedule training",
                "Source relief crew through the manning agency",
            ])
            .with_affected(AffectedEntities {
                vessels: ctx.vessel_ids(),
                crew: unavailable,
                ..AffectedEntities::default()
            }),
    );
}

pub(super) fn maintenance_window_conflict(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let window = ctx.config.maintenance_window_days;
    let due: Vec<_> = ctx
        .vessels
        .iter()
        .flat_map(|v| ctx.fleet.maintenance_due_within(&v.id, window))
        .collect();
    if due.is_empty() {
        return;
    }

    let critical = due.iter().any(|m| m.critical);
    let mut vessels: Vec<String> = Vec::new();
    for m in &due {
        if !vessels.contains(&m.vessel_id) {
            vessels.push(m.vessel_id.clone());
        }
    }

    out.push(
        upstream(
            "maintenance-window-conflict",
            ImpactCategory::Maintenance,
            if critical { Severity::High } else { Severity::Medium },
            "Maintenance due during the change window",
        )
        .with_description(format!(
            "{} maintenance job(s) due within {} days: {}",
            due.len(),
            window,
            due.iter()
                .map(|m| m.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        ))
        .with_delta(QuantDelta::new("jobs_due", 0.0, due.len() as f64, "jobs"))
        .with_timeframe(Timeframe::Immediate)
        .with_confidence(85.0)
        .with_mitigations([
            "Complete due maintenance before the change takes effect",
            "Agree a short extension with class for non-critical items",
        ])
        .with_affected(AffectedEntities::vessels(vessels)),
    );
}

pub(super) fn port_capacity_constraint(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let mut port_ids: Vec<&str> = Vec::new();
    match ctx.change.param_str("targetPort") {
        Some(target) => port_ids.push(target),
        None => {
            for v in &ctx.vessels {
                if let Some(port) = v.home_port.as_deref() {
                    if !port_ids.contains(&port) {
                        port_ids.push(port);
                    }
                }
            }
        }
    }

    let threshold = ctx.config.berth_availability_threshold;
    let constrained: Vec<_> = port_ids
        .iter()
        .filter_map(|id| ctx.fleet.supply_chain.port(id))
        .filter(|p| p.berth_availability_percent < threshold)
        .collect();
    let Some(tightest) = constrained
        .iter()
        .min_by(|a, b| a.berth_availability_percent.total_cmp(&b.berth_availability_percent))
    else {
        return;
    };

    let severity = if tightest.berth_availability_percent < SEVERE_BERTH_PERCENT {
        Severity::High
    } else {
        Severity::Medium
    };

    out.push(
        upstream(
            "port-capacity-constraint",
            ImpactCategory::Port,
            severity,
            "Limited berth availability",
        )
        .with_description(format!(
            "{} at {:.0}% berth availability (threshold {:.0}%)",
            constrained
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            tightest.berth_availability_percent,
            threshold
        ))
        .with_delta(QuantDelta::new(
            "berth_availability_percent",
            threshold,
            tightest.berth_availability_percent,
            "%",
        ))
        .with_confidence(75.0)
        .with_mitigations([
            "Book berth slots as early as possible",
            "Identify an alternative port with spare capacity",
        ])
        .with_affected(AffectedEntities {
            vessels: ctx.vessel_ids(),
            ports: constrained.iter().map(|p| p.id.clone()).collect(),
            ..AffectedEntities::default()
        }),
    );
}

pub(super) fn fuel_contract_needed(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let Some(fuel) = ctx.change.param_str("targetFuel") else {
        return;
    };
    if ctx.fleet.supply_chain.contract_for(fuel).is_some() {
        return;
    }

    out.push(
        upstream(
            "fuel-contract-needed",
            ImpactCategory::SupplyChain,
            Severity::High,
            "No supply contract for target fuel",
        )
        .with_description(format!(
            "No {fuel} supply contract is in place for {} vessel(s)",
            ctx.vessels.len()
        ))
        .with_timeframe(Timeframe::MediumTerm)
        .with_confidence(90.0)
        .with_mitigations([
            format!("Tender for a {fuel} supply contract"),
            format!("Arrange spot {fuel} bunkering for the transition period"),
        ])
        .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn certification_expiry(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let as_of = ctx.fleet.as_of;
    let horizon = as_of + Duration::days(ctx.config.certificate_window_days);
    let expiring: Vec<_> = ctx
        .vessels
        .iter()
        .flat_map(|v| ctx.fleet.certificates_for(&v.id))
        .filter(|c| c.expires_at <= horizon)
        .collect();
    let Some(soonest) = expiring.iter().map(|c| c.expires_at).min() else {
        return;
    };

    let days_left = (soonest - as_of).num_days();
    let (severity, timeframe) = if days_left <= 0 {
        (Severity::Critical, Timeframe::Immediate)
    } else if days_left <= URGENT_CERTIFICATE_DAYS {
        (Severity::High, Timeframe::Immediate)
    } else {
        (Severity::Medium, Timeframe::ShortTerm)
    };
    let mut vessels: Vec<String> = Vec::new();
    for c in &expiring {
        if !vessels.contains(&c.vessel_id) {
            vessels.push(c.vessel_id.clone());
        }
    }

    out.push(
        upstream(
            "certification-expiry",
            ImpactCategory::Compliance,
            severity,
            "Vessel certificates expiring",
        )
        .with_description(format!(
            "{} certificate(s) expire within {} days; soonest in {} days",
            expiring.len(),
            ctx.config.certificate_window_days,
            days_left
        ))
        .with_delta(QuantDelta::new("days_to_expiry", days_left as f64, 0.0, "days"))
        .with_timeframe(timeframe)
        .with_confidence(95.0)
        .with_mitigations([
            "Schedule the renewal survey before the change",
            "Request a short-term extension from the flag state",
        ])
        .with_affected(AffectedEntities::vessels(vessels)),
    );
}

pub(super) fn crew_certification_required(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let Some(fuel) = ctx.change.param_str("targetFuel") else {
        return;
    };
    if !fuel_properties(fuel).is_some_and(|p| p.needs_certification) {
        return;
    }

    let uncertified: Vec<String> = ctx
        .vessels
        .iter()
        .filter(|v| !ctx.fleet.crew_on(&v.id).any(|c| c.certified_for(fuel)))
        .map(|v| v.id.clone())
        .collect();
    if uncertified.is_empty() {
        return;
    }

    out.push(
        upstream(
            "crew-certification-required",
            ImpactCategory::Crew,
            Severity::High,
            "Crew certification required",
        )
        .with_description(format!(
            "{} vessel(s) have no crew certified for {fuel} operations",
            uncertified.len()
        ))
        .with_timeframe(Timeframe::MediumTerm)
        .with_confidence(85.0)
        .with_mitigations([
            format!("Enrol engineers and deck officers in {fuel} handling courses"),
            format!("Hire or transfer {fuel}-certified officers"),
        ])
        .with_affected(AffectedEntities::vessels(uncertified)),
    );
}
