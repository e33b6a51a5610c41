//! Downstream generators: consequences of the change.

use super::{GeneratorContext, ImpactCollector};
use crate::change::ChangeType;
use crate::fleet::{fuel_properties, Vessel};
use crate::impact::{AffectedEntities, Direction, ImpactCategory, ImpactItem, QuantDelta, Severity, Timeframe};

const MOBILIZATION_DAYS: f64 = 5.0;
const SWAP_HANDOVER_DAYS: f64 = 3.0;
const DEFAULT_DOWNTIME_DAYS: f64 = 14.0;
const DEFAULT_SCHEDULE_SHIFT_DAYS: f64 = 7.0;
const CREW_HANDOVER_DAYS: f64 = 2.0;
const DEFAULT_REROUTE_DAYS: f64 = 2.0;
const DEFAULT_TRANSIT_DAYS: f64 = 10.0;
const PORT_CHANGE_DAYS: f64 = 2.0;
const DEFAULT_DEFERRAL_DAYS: f64 = 90.0;
/// ESG points lost per percent of baseline emissions added.
const ESG_POINTS_PER_EMISSIONS_PERCENT: f64 = 0.5;

fn downstream(id: impl Into<String>, category: ImpactCategory, severity: Severity, title: &str) -> ImpactItem {
    ImpactItem::new(id, category, Direction::Downstream, severity, title)
}

/// Schedule slip caused by the change, in days.
fn delay_days(ctx: &GeneratorContext<'_>) -> f64 {
    let change = ctx.change;
    if let Some(days) = change.param_f64("delayDays") {
        return days.max(0.0);
    }
    let days = match change.change_type {
        ChangeType::VesselAssignment => MOBILIZATION_DAYS,
        ChangeType::VesselSwap => SWAP_HANDOVER_DAYS,
        ChangeType::EquipmentFailure => downtime_days(ctx),
        ChangeType::ScheduleChange => change
            .param_f64("shiftDays")
            .unwrap_or(DEFAULT_SCHEDULE_SHIFT_DAYS),
        ChangeType::CrewChange => CREW_HANDOVER_DAYS,
        ChangeType::RouteChange => change
            .param_f64("additionalDays")
            .unwrap_or(DEFAULT_REROUTE_DAYS),
        ChangeType::SpeedChange => {
            let pct = speed_change_percent(ctx);
            let transit = change.param_f64("transitDays").unwrap_or(DEFAULT_TRANSIT_DAYS);
            if pct < 0.0 {
                transit * (100.0 / (100.0 + pct) - 1.0)
            } else {
                0.0
            }
        }
        ChangeType::PortChange => PORT_CHANGE_DAYS,
        _ => 0.0,
    };
    days.max(0.0)
}

fn downtime_days(ctx: &GeneratorContext<'_>) -> f64 {
    ctx.change
        .param_f64("downtimeDays")
        .unwrap_or(DEFAULT_DOWNTIME_DAYS)
        .max(0.0)
}

/// Speed change in percent, bounded above -90%.
fn speed_change_percent(ctx: &GeneratorContext<'_>) -> f64 {
    ctx.change
        .param_f64("speedChangePercent")
        .unwrap_or(0.0)
        .max(-90.0)
}

/// Annual fuel cost and CO2 before and after the change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct EnergyBalance {
    cost_current: f64,
    cost_projected: f64,
    co2_current: f64,
    co2_projected: f64,
}

impl EnergyBalance {
    fn add(&mut self, other: EnergyBalance) {
        self.cost_current += other.cost_current;
        self.cost_projected += other.cost_projected;
        self.co2_current += other.co2_current;
        self.co2_projected += other.co2_projected;
    }
}

fn fuel_price(ctx: &GeneratorContext<'_>, fuel: &str) -> Option<f64> {
    ctx.fleet
        .supply_chain
        .contract_for(fuel)
        .map(|c| c.price_per_tonne)
        .or_else(|| fuel_properties(fuel).map(|p| p.reference_price))
}

/// Annual energy balance for a vessel burning `tonnes_factor` times its
/// usual fuel mass of `fuel`.
fn vessel_energy(ctx: &GeneratorContext<'_>, vessel: &Vessel, fuel: &str, tonnes_factor: f64) -> Option<(f64, f64)> {
    let props = fuel_properties(fuel)?;
    let price = fuel_price(ctx, fuel)?;
    let tonnes = vessel.daily_fuel_consumption_tonnes * ctx.config.operating_days_per_year * tonnes_factor;
    Some((tonnes * price, tonnes * props.co2_per_tonne))
}

fn energy_balance(ctx: &GeneratorContext<'_>) -> Option<EnergyBalance> {
    let change = ctx.change;
    let mut total = EnergyBalance::default();
    let mut any = false;

    match change.change_type {
        ChangeType::FuelSwitch => {
            let target = change.param_str("targetFuel")?;
            let new_props = fuel_properties(target)?;
            for v in &ctx.vessels {
                let Some(old_props) = fuel_properties(&v.fuel_type) else {
                    continue;
                };
                let factor = old_props.lcv_mj_per_kg / new_props.lcv_mj_per_kg;
                if let (Some(before), Some(after)) = (
                    vessel_energy(ctx, v, &v.fuel_type, 1.0),
                    vessel_energy(ctx, v, target, factor),
                ) {
                    total.add(EnergyBalance {
                        cost_current: before.0,
                        cost_projected: after.0,
                        co2_current: before.1,
                        co2_projected: after.1,
                    });
                    any = true;
                }
            }
        }
        ChangeType::SpeedChange | ChangeType::RouteChange => {
            let factor = if change.change_type == ChangeType::SpeedChange {
                (1.0 + speed_change_percent(ctx) / 100.0).powi(3)
            } else {
                (1.0 + change.param_f64("distanceChangePercent").unwrap_or(0.0) / 100.0).max(0.0)
            };
            for v in &ctx.vessels {
                if let (Some(before), Some(after)) = (
                    vessel_energy(ctx, v, &v.fuel_type, 1.0),
                    vessel_energy(ctx, v, &v.fuel_type, factor),
                ) {
                    total.add(EnergyBalance {
                        cost_current: before.0,
                        cost_projected: after.0,
                        co2_current: before.1,
                        co2_projected: after.1,
                    });
                    any = true;
                }
            }
        }
        ChangeType::VesselSwap => {
            // Outgoing vessel first, incoming second.
            let (outgoing, incoming) = (ctx.vessels.first()?, ctx.vessels.get(1)?);
            let before = vessel_energy(ctx, outgoing, &outgoing.fuel_type, 1.0)?;
            let after = vessel_energy(ctx, incoming, &incoming.fuel_type, 1.0)?;
            total = EnergyBalance {
                cost_current: before.0,
                cost_projected: after.0,
                co2_current: before.1,
                co2_projected: after.1,
            };
            any = true;
        }
        _ => {}
    }

    any.then_some(total)
}

pub(super) fn timeline_delay(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let days = delay_days(ctx);
    if days <= 0.0 {
        return;
    }
    let causes = out.existing([
        "spare-parts-shortage",
        "crew-availability",
        "maintenance-window-conflict",
        "port-capacity-constraint",
    ]);
    let severity = if days > 30.0 {
        Severity::Critical
    } else if days > 14.0 {
        Severity::High
    } else if days > 7.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    for project in ctx.projects.iter().filter(|p| p.is_open()) {
        out.push(
            downstream(
                format!("timeline-delay:{}", project.id),
                ImpactCategory::Schedule,
                severity,
                "Project timeline delay",
            )
            .with_description(format!("{} slips by {:.1} days", project.name, days))
            .with_delta(QuantDelta::new("delay_days", 0.0, days, "days"))
            .with_timeframe(Timeframe::ShortTerm)
            .with_confidence(75.0)
            .with_mitigations([
                "Re-sequence project activities to absorb the delay".to_string(),
                format!("Agree a revised schedule with {}", project.client),
            ])
            .with_depends_on(causes.clone())
            .with_affected(AffectedEntities {
                vessels: project.vessel_ids.clone(),
                projects: vec![project.id.clone()],
                clients: vec![project.client.clone()],
                ..AffectedEntities::default()
            }),
        );
    }
}

fn penalty_severity(penalty: f64, contract_value: f64) -> Severity {
    let share = if contract_value > 0.0 {
        penalty / contract_value
    } else {
        1.0
    };
    if share > 0.10 {
        Severity::High
    } else if share > 0.02 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

pub(super) fn contract_penalty(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    if ctx.change.change_type == ChangeType::ProjectCancellation {
        let fee = ctx.change.param_f64("cancellationFee").unwrap_or(0.0);
        if fee <= 0.0 {
            return;
        }
        for project in ctx
            .projects
            .iter()
            .filter(|p| ctx.change.affected_project_ids.contains(&p.id))
        {
            out.push(
                downstream(
                    format!("contract-penalty:{}", project.id),
                    ImpactCategory::Financial,
                    penalty_severity(fee, project.contract_value),
                    "Cancellation fee",
                )
                .with_description(format!("Cancelling {} triggers a termination fee", project.name))
                .with_delta(QuantDelta::new("penalty_usd", 0.0, fee, "USD"))
                .with_timeframe(Timeframe::ShortTerm)
                .with_confidence(85.0)
                .with_mitigations(["Negotiate a reduced termination fee against future work"])
                .with_affected(AffectedEntities {
                    projects: vec![project.id.clone()],
                    clients: vec![project.client.clone()],
                    ..AffectedEntities::default()
                }),
            );
        }
        return;
    }

    let mut penalties = Vec::new();
    for project in &ctx.projects {
        if project.daily_penalty <= 0.0 {
            continue;
        }
        let delay_id = format!("timeline-delay:{}", project.id);
        let Some(days) = out
            .get(&delay_id)
            .and_then(|d| d.delta.as_ref())
            .map(|d| d.projected_value)
        else {
            continue;
        };
        let penalty = days * project.daily_penalty;
        penalties.push(
            downstream(
                format!("contract-penalty:{}", project.id),
                ImpactCategory::Financial,
                penalty_severity(penalty, project.contract_value),
                "Liquidated damages",
            )
            .with_description(format!(
                "{:.1} days late at {:.0} per day on {}",
                days, project.daily_penalty, project.name
            ))
            .with_delta(QuantDelta::new("penalty_usd", 0.0, penalty, "USD"))
            .with_timeframe(Timeframe::MediumTerm)
            .with_confidence(70.0)
            .with_mitigations([
                "Claim excusable delay where the contract allows",
                "Offer the client a schedule recovery plan",
            ])
            .with_depends_on(vec![delay_id])
            .with_affected(AffectedEntities {
                projects: vec![project.id.clone()],
                clients: vec![project.client.clone()],
                ..AffectedEntities::default()
            }),
        );
    }
    for p in penalties {
        out.push(p);
    }
}

pub(super) fn revenue_loss(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let change = ctx.change;
    let as_of = ctx.fleet.as_of;
    let (causes, timeframe) = match change.change_type {
        ChangeType::EquipmentFailure => (out.existing(["spare-parts-shortage"]), Timeframe::ShortTerm),
        ChangeType::ProjectCancellation => (Vec::new(), Timeframe::MediumTerm),
        _ => return,
    };

    let mut items = Vec::new();
    for vessel in &ctx.vessels {
        let days = match change.change_type {
            ChangeType::EquipmentFailure => downtime_days(ctx),
            _ => change.param_f64("idleDays").unwrap_or_else(|| {
                ctx.projects
                    .iter()
                    .filter(|p| change.affected_project_ids.contains(&p.id) && p.uses_vessel(&vessel.id))
                    .map(|p| (p.end_date - as_of).num_days().max(0) as f64)
                    .fold(0.0, f64::max)
            }),
        };
        let lost = vessel.day_rate * days;
        if lost <= 0.0 {
            continue;
        }
        let severity = if lost > 1_000_000.0 {
            Severity::High
        } else if lost > 250_000.0 {
            Severity::Medium
        } else {
            Severity::Low
        };
        items.push(
            downstream(
                format!("revenue-loss:{}", vessel.id),
                ImpactCategory::Financial,
                severity,
                "Lost charter revenue",
            )
            .with_description(format!(
                "{} off hire for {:.0} days at {:.0} per day",
                vessel.name, days, vessel.day_rate
            ))
            .with_delta(QuantDelta::new("revenue_usd", lost, 0.0, "USD"))
            .with_timeframe(timeframe)
            .with_confidence(80.0)
            .with_mitigations([
                "Seek short-term spot charters for the idle period",
                "Check off-hire and loss-of-hire insurance cover",
            ])
            .with_depends_on(causes.clone())
            .with_affected(AffectedEntities::vessels([vessel.id.clone()])),
        );
    }
    for item in items {
        out.push(item);
    }
}

pub(super) fn operating_cost_change(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let operating_days = ctx.config.operating_days_per_year;
    let (current, projected) = match ctx.change.change_type {
        ChangeType::CrewChange => {
            let per_day = ctx.change.param_f64("crewCostChangePerDay").unwrap_or(0.0);
            let base = ctx.fleet.financials.annual_operating_cost;
            (base, base + per_day * operating_days * ctx.vessels.len() as f64)
        }
        _ => match energy_balance(ctx) {
            Some(e) => (e.cost_current, e.cost_projected),
            None => return,
        },
    };
    let delta = QuantDelta::new("annual_operating_cost_usd", current, projected, "USD");
    let change = delta.change();
    if change.abs() < 1.0 {
        return;
    }
    let pct = delta.percent_change.unwrap_or(100.0);
    let severity = if change < 0.0 {
        Severity::Positive
    } else if pct > 20.0 {
        Severity::High
    } else if pct > 5.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    out.push(
        downstream(
            "operating-cost-change",
            ImpactCategory::Financial,
            severity,
            "Operating cost change",
        )
        .with_description(format!("Annual operating cost changes by {change:.0} ({pct:+.1}%)"))
        .with_delta(delta)
        .with_timeframe(Timeframe::LongTerm)
        .with_confidence(70.0)
        .with_mitigations([
            "Hedge fuel purchases for the first operating year",
            "Review charter rates to pass through cost changes",
        ])
        .with_depends_on(out.existing(["fuel-contract-needed"]))
        .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn emissions_change(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let Some(balance) = energy_balance(ctx) else {
        return;
    };
    let delta = QuantDelta::new(
        "annual_co2_tonnes",
        balance.co2_current,
        balance.co2_projected,
        "tCO2",
    );
    let change = delta.change();
    if change.abs() < 0.5 {
        return;
    }
    let pct = delta.percent_change.unwrap_or(100.0);
    let severity = if change < 0.0 {
        Severity::Positive
    } else if pct > 10.0 {
        Severity::High
    } else {
        Severity::Medium
    };
    let carbon_cost = change * ctx.fleet.compliance.carbon_price_per_tonne;

    out.push(
        downstream("emissions-change", ImpactCategory::Environmental, severity, "Emissions change")
            .with_description(format!(
                "Annual CO2 changes by {change:.0} t ({pct:+.1}%); carbon cost {carbon_cost:+.0}"
            ))
            .with_delta(delta)
            .with_timeframe(Timeframe::LongTerm)
            .with_confidence(75.0)
            .with_mitigations([
                "Update the fleet decarbonisation plan and disclosures",
                "Review EU ETS allowance purchases",
            ])
            .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn deferred_maintenance_risk(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    if ctx.change.change_type != ChangeType::MaintenanceDeferral {
        return;
    }
    let deferral = ctx
        .change
        .param_f64("deferralDays")
        .unwrap_or(DEFAULT_DEFERRAL_DAYS)
        .max(0.0);
    let deferred: Vec<_> = ctx
        .vessels
        .iter()
        .flat_map(|v| ctx.fleet.maintenance_due_within(&v.id, deferral.ceil() as i64))
        .collect();
    if deferred.is_empty() {
        return;
    }
    let critical = deferred.iter().any(|m| m.critical);

    out.push(
        downstream(
            "deferred-maintenance-risk",
            ImpactCategory::Maintenance,
            if critical { Severity::High } else { Severity::Medium },
            "Deferred maintenance raises failure risk",
        )
        .with_description(format!(
            "{} job(s) deferred by {:.0} days{}",
            deferred.len(),
            deferral,
            if critical { ", including class-critical work" } else { "" }
        ))
        .with_delta(QuantDelta::new("deferral_days", 0.0, deferral, "days"))
        .with_timeframe(Timeframe::MediumTerm)
        .with_confidence(75.0)
        .with_mitigations([
            "Increase condition monitoring on deferred equipment",
            "Keep critical spares on board until the work is done",
            "Limit the deferral to non-critical jobs",
        ])
        .with_depends_on(out.existing(["maintenance-window-conflict", "spare-parts-shortage"]))
        .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn safety_risk(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let change = ctx.change;
    let severity = match change.change_type {
        ChangeType::EquipmentFailure if change.param_bool("safetyCritical") => Severity::Critical,
        ChangeType::EquipmentFailure => Severity::High,
        ChangeType::MaintenanceDeferral => match out.get("deferred-maintenance-risk") {
            Some(d) if d.severity == Severity::High => Severity::Critical,
            _ => return,
        },
        ChangeType::FuelSwitch if out.contains("crew-certification-required") => Severity::High,
        ChangeType::CrewChange if change.param_bool("reducedManning") => Severity::Medium,
        _ => return,
    };

    out.push(
        downstream("safety-risk", ImpactCategory::Safety, severity, "Elevated safety risk")
            .with_description(format!("{} raises operational safety exposure", change.change_type))
            .with_timeframe(Timeframe::Immediate)
            .with_confidence(80.0)
            .with_mitigations([
                "Complete a formal risk assessment before proceeding",
                "Brief crews on revised emergency procedures",
            ])
            .with_depends_on(out.existing([
                "crew-certification-required",
                "deferred-maintenance-risk",
                "spare-parts-shortage",
            ]))
            .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn insurance_premium_change(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let change = ctx.change;
    let loading_percent = match change.change_type {
        ChangeType::EquipmentFailure => 5.0,
        ChangeType::MaintenanceDeferral => 8.0,
        ChangeType::FuelSwitch => {
            let alt_fuel = change
                .param_str("targetFuel")
                .and_then(fuel_properties)
                .is_some_and(|p| p.needs_certification);
            if alt_fuel {
                3.0
            } else {
                0.0
            }
        }
        ChangeType::RouteChange if change.param_bool("highRiskArea") => 10.0,
        _ => 0.0,
    };
    let total_vessels = ctx.fleet.vessels.len();
    if loading_percent <= 0.0 || total_vessels == 0 || ctx.vessels.is_empty() {
        return;
    }

    let share = ctx.vessels.len() as f64 / total_vessels as f64;
    let premium = ctx.fleet.financials.annual_insurance_premium;
    let projected = premium * (1.0 + loading_percent / 100.0 * share);
    let safety_critical = out
        .get("safety-risk")
        .is_some_and(|s| s.severity == Severity::Critical);
    let severity = if safety_critical {
        Severity::High
    } else if loading_percent >= 8.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    out.push(
        downstream(
            "insurance-premium-change",
            ImpactCategory::Financial,
            severity,
            "Insurance premium increase",
        )
        .with_description(format!(
            "Underwriters likely to load affected hulls by about {loading_percent:.0}%"
        ))
        .with_delta(QuantDelta::new("annual_insurance_premium_usd", premium, projected, "USD"))
        .with_timeframe(Timeframe::LongTerm)
        .with_confidence(65.0)
        .with_mitigations(["Share the mitigation plan with underwriters before renewal"])
        .with_depends_on(out.existing(["safety-risk"]))
        .with_affected(AffectedEntities::vessels(ctx.vessel_ids())),
    );
}

pub(super) fn client_relationship(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let cancelling = ctx.change.change_type == ChangeType::ProjectCancellation;
    let mut items = Vec::new();

    for client in ctx.clients() {
        let projects: Vec<_> = ctx.projects.iter().filter(|p| p.client == client).collect();
        let mut links = Vec::new();
        let mut worst_delay: f64 = 0.0;
        for p in &projects {
            let delay_id = format!("timeline-delay:{}", p.id);
            if let Some(days) = out
                .get(&delay_id)
                .and_then(|d| d.delta.as_ref())
                .map(|d| d.projected_value)
            {
                worst_delay = worst_delay.max(days);
            }
            links.extend(out.existing([delay_id, format!("contract-penalty:{}", p.id)]));
        }
        let cancelled = cancelling
            && projects
                .iter()
                .any(|p| ctx.change.affected_project_ids.contains(&p.id));

        let severity = if cancelled {
            Severity::High
        } else if worst_delay > 14.0 {
            Severity::Medium
        } else if worst_delay > 0.0 {
            Severity::Low
        } else {
            continue;
        };

        items.push(
            downstream(
                format!("client-relationship:{client}"),
                ImpactCategory::Commercial,
                severity,
                "Client relationship strain",
            )
            .with_description(if cancelled {
                format!("Cancelling work for {client} puts future tenders at risk")
            } else {
                format!("{client} faces up to {worst_delay:.1} days of delay")
            })
            .with_timeframe(Timeframe::MediumTerm)
            .with_confidence(60.0)
            .with_mitigations([
                format!("Brief {client} early with a recovery plan"),
                "Assign an account lead to manage the change".to_string(),
            ])
            .with_depends_on(links)
            .with_affected(AffectedEntities {
                projects: projects.iter().map(|p| p.id.clone()).collect(),
                clients: vec![client.to_string()],
                ..AffectedEntities::default()
            }),
        );
    }
    for item in items {
        out.push(item);
    }
}

/// Runs for every change type; emits only when the score moves.
pub(super) fn esg_score_change(ctx: &GeneratorContext<'_>, out: &mut ImpactCollector) {
    let compliance = &ctx.fleet.compliance;
    let mut points: f64 = 0.0;

    if let Some(delta) = out.get("emissions-change").and_then(|e| e.delta.as_ref()) {
        if compliance.emissions_baseline_tonnes > 0.0 {
            let pct_of_baseline = delta.change() / compliance.emissions_baseline_tonnes * 100.0;
            points -= pct_of_baseline * ESG_POINTS_PER_EMISSIONS_PERCENT;
        }
    }
    if let Some(safety) = out.get("safety-risk") {
        points -= match safety.severity {
            Severity::Critical => 3.0,
            Severity::High => 1.5,
            _ => 0.5,
        };
    }
    if points.abs() < 0.05 {
        return;
    }

    let current = compliance.esg_score;
    let projected = (current + points).clamp(0.0, 100.0);
    let severity = if points > 0.0 {
        Severity::Positive
    } else if points < -2.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    out.push(
        downstream("esg-score-change", ImpactCategory::Environmental, severity, "ESG score change")
            .with_description(format!("ESG score moves from {current:.1} to {projected:.1}"))
            .with_delta(QuantDelta::new("esg_score", current, projected, "points"))
            .with_timeframe(Timeframe::LongTerm)
            .with_confidence(60.0)
            .with_mitigations(["Report the change and its mitigation in the next ESG disclosure"])
            .with_depends_on(out.existing(["emissions-change", "safety-risk"])),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ProposedChange;
    use crate::config::ImpactConfig;
    use crate::generators::{fixtures, Generator};

    fn run(change: &ProposedChange, generators: &[Generator]) -> ImpactCollector {
        let fleet = fixtures::fleet();
        let config = ImpactConfig::default();
        let ctx = GeneratorContext::new(change, &fleet, &config);
        let mut out = ImpactCollector::new();
        for g in generators {
            g.run(&ctx, &mut out);
        }
        out
    }

    #[test]
    fn delay_then_penalty_chain() {
        let change = ProposedChange::new("C", ChangeType::EquipmentFailure)
            .with_vessel("V1")
            .with_parameter("downtimeDays", 10.0);
        let out = run(
            &change,
            &[Generator::SparePartsShortage, Generator::TimelineDelay, Generator::ContractPenalty],
        );
        let delay = out.get("timeline-delay:P1").unwrap();
        assert_eq!(delay.severity, Severity::Medium);
        assert_eq!(delay.depends_on, vec!["spare-parts-shortage".to_string()]);

        let penalty = out.get("contract-penalty:P1").unwrap();
        assert_eq!(penalty.delta.as_ref().unwrap().projected_value, 150_000.0);
        assert_eq!(penalty.depends_on, vec!["timeline-delay:P1".to_string()]);
        assert_eq!(penalty.severity, Severity::Medium);
    }

    #[test]
    fn revenue_loss_per_vessel() {
        let change = ProposedChange::new("C", ChangeType::EquipmentFailure)
            .with_vessel("V1")
            .with_parameter("downtimeDays", 20.0);
        let out = run(&change, &[Generator::RevenueLoss]);
        let loss = out.get("revenue-loss:V1").unwrap();
        let delta = loss.delta.as_ref().unwrap();
        assert_eq!(delta.change(), -560_000.0);
        assert_eq!(loss.severity, Severity::Medium);
    }

    #[test]
    fn slow_steaming_saves_fuel_and_emissions() {
        let change = ProposedChange::new("C", ChangeType::SpeedChange)
            .with_vessel("V1")
            .with_parameter("speedChangePercent", -10.0);
        let out = run(
            &change,
            &[
                Generator::TimelineDelay,
                Generator::OperatingCostChange,
                Generator::EmissionsChange,
                Generator::EsgScoreChange,
            ],
        );
        assert_eq!(out.get("operating-cost-change").unwrap().severity, Severity::Positive);
        assert_eq!(out.get("emissions-change").unwrap().severity, Severity::Positive);
        assert_eq!(out.get("esg-score-change").unwrap().severity, Severity::Positive);
        // Slower transit delays the project.
        assert!(out.contains("timeline-delay:P1"));
    }

    #[test]
    fn lng_switch_cuts_co2() {
        let change = ProposedChange::new("C", ChangeType::FuelSwitch)
            .with_vessel("V1")
            .with_parameter("targetFuel", "LNG");
        let out = run(&change, &[Generator::EmissionsChange]);
        let e = out.get("emissions-change").unwrap();
        assert!(e.delta.as_ref().unwrap().change() < 0.0);
    }

    #[test]
    fn esg_silent_without_drivers() {
        let change = ProposedChange::new("C", ChangeType::Custom);
        let out = run(&change, &[Generator::EsgScoreChange]);
        assert!(out.is_empty());
    }

    #[test]
    fn deferral_of_critical_work_is_a_safety_issue() {
        let change = ProposedChange::new("C", ChangeType::MaintenanceDeferral)
            .with_vessel("V1")
            .with_parameter("deferralDays", 60.0);
        let out = run(
            &change,
            &[
                Generator::DeferredMaintenanceRisk,
                Generator::SafetyRisk,
                Generator::InsurancePremiumChange,
            ],
        );
        assert_eq!(out.get("deferred-maintenance-risk").unwrap().severity, Severity::High);
        let safety = out.get("safety-risk").unwrap();
        assert_eq!(safety.severity, Severity::Critical);
        assert_eq!(safety.depends_on, vec!["deferred-maintenance-risk".to_string()]);
        let insurance = out.get("insurance-premium-change").unwrap();
        assert_eq!(insurance.severity, Severity::High);
        assert_eq!(insurance.depends_on, vec!["safety-risk".to_string()]);
    }

    #[test]
    fn cancellation_strains_client() {
        let change = ProposedChange::new("C", ChangeType::ProjectCancellation)
            .with_project("P2")
            .with_parameter("cancellationFee", 250_000.0);
        let out = run(
            &change,
            &[Generator::RevenueLoss, Generator::ContractPenalty, Generator::ClientRelationship],
        );
        assert!(out.contains("revenue-loss:V2"));
        assert!(out.contains("revenue-loss:V3"));
        assert!(out.contains("contract-penalty:P2"));
        let client = out.get("client-relationship:Equinor").unwrap();
        assert_eq!(client.severity, Severity::High);
        assert_eq!(client.depends_on, vec!["contract-penalty:P2".to_string()]);
    }
}
