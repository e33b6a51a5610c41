//! End-to-end test: switching a vessel to LNG.
//!
//! With no LNG supply contract on the books the analysis must raise exactly
//! one contract impact, high severity, medium term. With a contract in
//! place it must raise none.

use chrono::Duration;
use fleetwise_impact::{
    ChangeType, Direction, FuelContract, ImpactEngine, ProposedChange, Severity, Timeframe,
};

use crate::common::{as_of, fleet};

fn lng_switch() -> ProposedChange {
    ProposedChange::new("CHG-LNG-01", ChangeType::FuelSwitch)
        .with_description("Convert Nordic Star to dual-fuel LNG")
        .with_vessel("PSV-1")
        .with_parameter("targetFuel", "LNG")
}

#[test]
fn missing_contract_raises_exactly_one_impact() {
    let result = ImpactEngine::new().analyze(&lng_switch(), &fleet()).unwrap();

    let contracts: Vec<_> = result.impacts_of_kind("fuel-contract-needed").collect();
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].severity, Severity::High);
    assert_eq!(contracts[0].timeframe, Timeframe::MediumTerm);
    assert_eq!(contracts[0].direction, Direction::Upstream);
    assert!(contracts[0].is_root());
}

#[test]
fn existing_contract_suppresses_impact() {
    let mut fleet = fleet();
    fleet.supply_chain.fuel_contracts.push(FuelContract {
        id: "FC-LNG".into(),
        supplier: "Gasum".into(),
        fuel_type: "lng".into(),
        price_per_tonne: 700.0,
        expires_at: as_of() + Duration::days(720),
    });

    let result = ImpactEngine::new().analyze(&lng_switch(), &fleet).unwrap();
    assert_eq!(result.impacts_of_kind("fuel-contract-needed").count(), 0);
}

#[test]
fn lng_cuts_emissions_and_needs_certified_crew() {
    let result = ImpactEngine::new().analyze(&lng_switch(), &fleet()).unwrap();

    let emissions = result.impact("emissions-change").unwrap();
    assert_eq!(emissions.severity, Severity::Positive);
    assert!(result.esg.emissions_change_tonnes < 0.0);
    assert!(result.esg.carbon_cost_change < 0.0);

    let crew = result.impact("crew-certification-required").unwrap();
    assert_eq!(crew.affected.vessels, vec!["PSV-1".to_string()]);

    let safety = result.impact("safety-risk").unwrap();
    assert!(safety.depends_on.contains(&"crew-certification-required".to_string()));

    // Fuel switches never reach sister vessels.
    assert_eq!(result.summary.by_direction.lateral, 0);
}

#[test]
fn insurance_follows_safety_in_the_chain() {
    let result = ImpactEngine::new().analyze(&lng_switch(), &fleet()).unwrap();

    let crew_root = result
        .impact_chain
        .iter()
        .find(|n| n.impact.id == "crew-certification-required")
        .unwrap();
    let safety = crew_root
        .children
        .iter()
        .find(|n| n.impact.id == "safety-risk")
        .unwrap();
    assert!(safety
        .children
        .iter()
        .any(|n| n.impact.id == "insurance-premium-change" && n.depth == 2));
}
