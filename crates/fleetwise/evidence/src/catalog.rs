//! Phrasing and pattern tables the synthesizer draws from.
//!
//! Both catalogs are plain values constructed by the caller; `builtin()`
//! returns the shipped tables and tests can build their own.

use std::collections::BTreeMap;

use fleetwise_profiles::ComponentType;
use serde::{Deserialize, Serialize};

use crate::error::{EvidenceError, EvidenceResult};
use crate::types::Condition;

/// Work-order issue phrasings for one component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePhrasings {
    pub preventive: Vec<String>,
    pub corrective: Vec<String>,
}

/// Issue text and inspection findings per component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCatalog {
    issues: BTreeMap<ComponentType, IssuePhrasings>,
    findings: BTreeMap<Condition, Vec<String>>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl IssueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(
        mut self,
        component_type: ComponentType,
        preventive: &[&str],
        corrective: &[&str],
    ) -> Self {
        self.issues.insert(
            component_type,
            IssuePhrasings {
                preventive: strings(preventive),
                corrective: strings(corrective),
            },
        );
        self
    }

    pub fn with_findings(mut self, condition: Condition, findings: &[&str]) -> Self {
        self.findings.insert(condition, strings(findings));
        self
    }

    pub fn issues_for(&self, component_type: ComponentType) -> EvidenceResult<&IssuePhrasings> {
        self.issues
            .get(&component_type)
            .ok_or(EvidenceError::MissingCatalogEntry(component_type))
    }

    pub fn findings_for(&self, condition: Condition) -> &[String] {
        self.findings
            .get(&condition)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The shipped transformer-maintenance phrasings.
    pub fn builtin() -> Self {
        Self::new()
            .with_issues(
                ComponentType::Winding,
                &[
                    "Scheduled winding resistance measurement",
                    "Insulation power factor test",
                    "Frequency response baseline capture",
                    "Tightening of winding clamping structure",
                ],
                &[
                    "Partial discharge activity above baseline",
                    "Winding hot-spot alarm investigation",
                    "Turn-to-turn insulation repair",
                    "Through-fault inspection after feeder trip",
                ],
            )
            .with_issues(
                ComponentType::Bushing,
                &[
                    "Infrared scan of bushing terminals",
                    "Capacitance and power factor measurement",
                    "Porcelain cleaning and visual check",
                ],
                &[
                    "Oil leak at bushing flange",
                    "Terminal connector overheating",
                    "Cracked porcelain shed replacement",
                    "Bushing oil level low alarm",
                ],
            )
            .with_issues(
                ComponentType::TapChanger,
                &[
                    "Diverter oil sampling",
                    "Drive mechanism lubrication",
                    "Tap position counter check",
                ],
                &[
                    "Tap changer failed to complete operation",
                    "Diverter contact replacement",
                    "Motor drive protection trip",
                    "Excessive transition resistance",
                ],
            )
            .with_issues(
                ComponentType::InsulationOil,
                &[
                    "Routine dissolved gas analysis sample",
                    "Oil dielectric strength test",
                    "Breather silica gel replacement",
                ],
                &[
                    "Acetylene detected in DGA",
                    "Oil filtration after moisture ingress",
                    "Oil top-up after leak repair",
                    "Sludge removal from conservator",
                ],
            )
            .with_issues(
                ComponentType::CoolingSystem,
                &[
                    "Fan and pump functional test",
                    "Radiator fin cleaning",
                    "Cooling control panel check",
                ],
                &[
                    "Fan motor bearing failure",
                    "Oil pump seal replacement",
                    "Cooling stage failed to start",
                    "Radiator valve leak repair",
                ],
            )
            .with_issues(
                ComponentType::Core,
                &[
                    "Core ground insulation resistance test",
                    "Excitation current measurement",
                ],
                &[
                    "Multiple core grounding investigation",
                    "Core clamping bolt re-torque after noise complaint",
                    "Lamination hot-spot investigation",
                ],
            )
            .with_findings(
                Condition::Good,
                &[
                    "No visible defects",
                    "Readings within OEM tolerance",
                    "Seals and gaskets intact",
                ],
            )
            .with_findings(
                Condition::Fair,
                &[
                    "Minor surface corrosion",
                    "Slight oil weeping at gasket",
                    "Readings drifting toward tolerance limit",
                ],
            )
            .with_findings(
                Condition::Poor,
                &[
                    "Active oil leak",
                    "Elevated operating temperature",
                    "Readings outside OEM tolerance",
                ],
            )
            .with_findings(
                Condition::Critical,
                &[
                    "Severe overheating observed",
                    "Insulation damage visible",
                    "Immediate de-energisation recommended",
                ],
            )
    }
}

/// Template for a recurring fleet-wide failure pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTemplate {
    pub pattern: String,
    pub description: String,
    pub typical_failure_age_years: f64,
    pub recommended_action: String,
}

/// Fleet-wide pattern templates per component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCatalog {
    templates: BTreeMap<ComponentType, Vec<PatternTemplate>>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(
        mut self,
        component_type: ComponentType,
        pattern: &str,
        description: &str,
        typical_failure_age_years: f64,
        recommended_action: &str,
    ) -> Self {
        self.templates
            .entry(component_type)
            .or_default()
            .push(PatternTemplate {
                pattern: pattern.to_string(),
                description: description.to_string(),
                typical_failure_age_years,
                recommended_action: recommended_action.to_string(),
            });
        self
    }

    /// Templates for a component type; empty when none are known.
    pub fn templates_for(&self, component_type: ComponentType) -> &[PatternTemplate] {
        self.templates
            .get(&component_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn builtin() -> Self {
        Self::new()
            .with_template(
                ComponentType::Winding,
                "Paper insulation embrittlement",
                "Units from the same production batch show accelerated DP loss after three decades",
                38.0,
                "Schedule furan analysis and plan a dry-out before the next peak season",
            )
            .with_template(
                ComponentType::Winding,
                "Through-fault winding displacement",
                "Units on heavily faulted feeders show axial displacement in SFRA",
                32.0,
                "Run SFRA after every through-fault above 70% of rated current",
            )
            .with_template(
                ComponentType::Bushing,
                "Top-cap seal degradation",
                "Moisture ingress through ageing top-cap seals on OIP bushings",
                22.0,
                "Replace top-cap gaskets during the next outage",
            )
            .with_template(
                ComponentType::TapChanger,
                "Diverter contact coking",
                "High-operation OLTCs develop coked contacts well before the OEM overhaul interval",
                14.0,
                "Shorten diverter overhaul interval for units above 20,000 operations",
            )
            .with_template(
                ComponentType::TapChanger,
                "Drive motor capacitor failure",
                "Motor-drive start capacitors failing on units in hot climates",
                11.0,
                "Replace start capacitors as a fleet campaign",
            )
            .with_template(
                ComponentType::InsulationOil,
                "Accelerated oxidation in free-breathing units",
                "Free-breathing conservators show rising acidity after 15 years",
                18.0,
                "Retrofit membrane conservators or schedule oil regeneration",
            )
            .with_template(
                ComponentType::CoolingSystem,
                "Fan bearing wear-out",
                "Fan bearings failing across units installed in the same year",
                9.0,
                "Stock spare fan motors and replace bearings proactively",
            )
            .with_template(
                ComponentType::Core,
                "Core ground insulation breakdown",
                "Units of the same core design showing circulating currents",
                45.0,
                "Measure core ground current at each annual outage",
            )
    }
}

/// Component types whose condition is tracked through oil samples.
pub fn oil_sampled(component_type: ComponentType) -> bool {
    matches!(
        component_type,
        ComponentType::Winding
            | ComponentType::InsulationOil
            | ComponentType::TapChanger
            | ComponentType::Core
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_type() {
        let catalog = IssueCatalog::builtin();
        for ty in ComponentType::ALL {
            let phrasings = catalog.issues_for(ty).unwrap();
            assert!(!phrasings.preventive.is_empty());
            assert!(!phrasings.corrective.is_empty());
        }
        for condition in Condition::ALL {
            assert!(!catalog.findings_for(condition).is_empty());
        }
    }

    #[test]
    fn missing_entry_errors() {
        let catalog = IssueCatalog::new();
        assert_eq!(
            catalog.issues_for(ComponentType::Core).unwrap_err(),
            EvidenceError::MissingCatalogEntry(ComponentType::Core)
        );
        assert!(catalog.findings_for(Condition::Good).is_empty());
    }

    #[test]
    fn pattern_templates_lookup() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.templates_for(ComponentType::Winding).len(), 2);
        assert!(PatternCatalog::new().templates_for(ComponentType::Core).is_empty());
    }

    #[test]
    fn oil_sampling_scope() {
        assert!(oil_sampled(ComponentType::InsulationOil));
        assert!(!oil_sampled(ComponentType::Bushing));
        assert!(!oil_sampled(ComponentType::CoolingSystem));
    }
}
