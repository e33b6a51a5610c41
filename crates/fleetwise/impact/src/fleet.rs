//! Fleet snapshot consumed by the impact engine. Read-only.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ── Vessels & Projects ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselStatus {
    Active,
    Idle,
    InMaintenance,
    Transit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: String,
    pub name: String,
    pub vessel_type: String,
    pub status: VesselStatus,
    /// Fuel currently burned, e.g. `MGO` or `LNG`.
    pub fuel_type: String,
    pub day_rate: f64,
    pub daily_fuel_consumption_tonnes: f64,
    #[serde(default)]
    pub home_port: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub vessel_ids: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub contract_value: f64,
    /// Liquidated damages per day of delay.
    #[serde(default)]
    pub daily_penalty: f64,
}

impl Project {
    pub fn is_open(&self) -> bool {
        matches!(self.status, ProjectStatus::Planned | ProjectStatus::Active)
    }

    pub fn uses_vessel(&self, vessel_id: &str) -> bool {
        self.vessel_ids.iter().any(|v| v == vessel_id)
    }
}

// ── Crew & Maintenance ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewStatus {
    OnDuty,
    Available,
    OnLeave,
    Training,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub vessel_id: Option<String>,
    pub status: CrewStatus,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl CrewMember {
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, CrewStatus::OnLeave | CrewStatus::Training)
    }

    /// Whether any certification mentions `keyword`, case-insensitively.
    pub fn certified_for(&self, keyword: &str) -> bool {
        let keyword = keyword.to_ascii_lowercase();
        self.certifications
            .iter()
            .any(|c| c.to_ascii_lowercase().contains(&keyword))
    }
}

/// A scheduled maintenance job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItem {
    pub id: String,
    pub vessel_id: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub estimated_cost: f64,
    /// Safety- or class-critical work.
    #[serde(default)]
    pub critical: bool,
}

// ── Supply Chain ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub part_number: String,
    pub description: String,
    /// Vessels the part is stocked for; empty means fleet-wide.
    #[serde(default)]
    pub vessel_ids: Vec<String>,
    pub quantity_on_hand: u32,
    pub reorder_point: u32,
    pub lead_time_days: u32,
    pub unit_cost: f64,
}

impl SparePart {
    pub fn below_reorder_point(&self) -> bool {
        self.quantity_on_hand < self.reorder_point
    }

    pub fn applies_to(&self, vessel_id: &str) -> bool {
        self.vessel_ids.is_empty() || self.vessel_ids.iter().any(|v| v == vessel_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelContract {
    pub id: String,
    pub supplier: String,
    pub fuel_type: String,
    pub price_per_tonne: f64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: String,
    pub name: String,
    /// Share of berths free over the planning horizon, percent.
    pub berth_availability_percent: f64,
    #[serde(default)]
    pub daily_port_fee: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChain {
    #[serde(default)]
    pub spare_parts: Vec<SparePart>,
    #[serde(default)]
    pub fuel_contracts: Vec<FuelContract>,
    #[serde(default)]
    pub ports: Vec<Port>,
}

impl SupplyChain {
    pub fn contract_for(&self, fuel: &str) -> Option<&FuelContract> {
        self.fuel_contracts
            .iter()
            .find(|c| c.fuel_type.eq_ignore_ascii_case(fuel))
    }

    pub fn port(&self, id: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == id)
    }
}

// ── Compliance & Financials ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub vessel_id: String,
    pub name: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompliancePosture {
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Current ESG rating, 0-100.
    pub esg_score: f64,
    /// Annual fleet CO2 emissions, tonnes.
    pub emissions_baseline_tonnes: f64,
    #[serde(default)]
    pub carbon_price_per_tonne: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub annual_revenue: f64,
    pub annual_operating_cost: f64,
    pub annual_insurance_premium: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Financials {
    fn default() -> Self {
        Self {
            annual_revenue: 0.0,
            annual_operating_cost: 0.0,
            annual_insurance_premium: 0.0,
            currency: default_currency(),
        }
    }
}

// ── Snapshot ────────────────────────────────────────────────────────────

/// Point-in-time view of the fleet and its commitments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetState {
    pub as_of: DateTime<Utc>,
    #[serde(default)]
    pub vessels: Vec<Vessel>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub maintenance: Vec<MaintenanceItem>,
    #[serde(default)]
    pub supply_chain: SupplyChain,
    #[serde(default)]
    pub compliance: CompliancePosture,
    #[serde(default)]
    pub financials: Financials,
}

impl FleetState {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            vessels: Vec::new(),
            projects: Vec::new(),
            crew: Vec::new(),
            maintenance: Vec::new(),
            supply_chain: SupplyChain::default(),
            compliance: CompliancePosture::default(),
            financials: Financials::default(),
        }
    }

    pub fn vessel(&self, id: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn crew_on<'a>(&'a self, vessel_id: &'a str) -> impl Iterator<Item = &'a CrewMember> + 'a {
        self.crew
            .iter()
            .filter(move |c| c.vessel_id.as_deref() == Some(vessel_id))
    }

    /// Maintenance for `vessel_id` due within `days` of `as_of`, overdue included.
    pub fn maintenance_due_within<'a>(
        &'a self,
        vessel_id: &'a str,
        days: i64,
    ) -> impl Iterator<Item = &'a MaintenanceItem> + 'a {
        let horizon = self.as_of + Duration::days(days);
        self.maintenance
            .iter()
            .filter(move |m| m.vessel_id == vessel_id && m.due_date <= horizon)
    }

    pub fn certificates_for<'a>(
        &'a self,
        vessel_id: &'a str,
    ) -> impl Iterator<Item = &'a Certificate> + 'a {
        self.compliance
            .certificates
            .iter()
            .filter(move |c| c.vessel_id == vessel_id)
    }
}

// ── Fuels ───────────────────────────────────────────────────────────────

/// Physical and commercial reference values for a marine fuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProperties {
    /// Lower calorific value, MJ/kg.
    pub lcv_mj_per_kg: f64,
    /// Tank-to-wake CO2 per tonne of fuel burned.
    pub co2_per_tonne: f64,
    /// Price used when no contract exists, USD/tonne.
    pub reference_price: f64,
    /// Crew need a dedicated certification to bunker and operate on it.
    pub needs_certification: bool,
}

/// Reference properties for a fuel tag, case-insensitive.
pub fn fuel_properties(fuel: &str) -> Option<FuelProperties> {
    let p = |lcv, co2, price, cert| FuelProperties {
        lcv_mj_per_kg: lcv,
        co2_per_tonne: co2,
        reference_price: price,
        needs_certification: cert,
    };
    match fuel.to_ascii_uppercase().as_str() {
        "MGO" | "MDO" => Some(p(42.7, 3.206, 750.0, false)),
        "HFO" => Some(p(40.2, 3.114, 520.0, false)),
        "VLSFO" => Some(p(41.0, 3.151, 610.0, false)),
        "LNG" => Some(p(48.0, 2.750, 680.0, true)),
        "METHANOL" => Some(p(19.9, 1.375, 480.0, true)),
        "AMMONIA" => Some(p(18.6, 0.0, 640.0, true)),
        "HVO" | "BIODIESEL" => Some(p(44.0, 0.35, 1_450.0, false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn maintenance_window_includes_overdue() {
        let as_of = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let mut fleet = FleetState::new(as_of);
        for (id, days) in [("M1", -5), ("M2", 20), ("M3", 45)] {
            fleet.maintenance.push(MaintenanceItem {
                id: id.into(),
                vessel_id: "V1".into(),
                description: "Thruster overhaul".into(),
                due_date: as_of + Duration::days(days),
                estimated_cost: 10_000.0,
                critical: false,
            });
        }
        let due: Vec<&str> = fleet
            .maintenance_due_within("V1", 30)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(due, vec!["M1", "M2"]);
        assert_eq!(fleet.maintenance_due_within("V2", 30).count(), 0);
    }

    #[test]
    fn contract_lookup_ignores_case() {
        let as_of = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
        let supply = SupplyChain {
            fuel_contracts: vec![FuelContract {
                id: "FC-1".into(),
                supplier: "North Sea Bunkers".into(),
                fuel_type: "mgo".into(),
                price_per_tonne: 760.0,
                expires_at: as_of + Duration::days(365),
            }],
            ..SupplyChain::default()
        };
        assert!(supply.contract_for("MGO").is_some());
        assert!(supply.contract_for("LNG").is_none());
    }

    #[test]
    fn fuel_reference_values() {
        let lng = fuel_properties("lng").unwrap();
        assert!(lng.needs_certification);
        assert!(lng.co2_per_tonne < fuel_properties("MGO").unwrap().co2_per_tonne);
        assert!(fuel_properties("coal").is_none());
    }

    #[test]
    fn crew_certification_match() {
        let c = CrewMember {
            id: "C1".into(),
            name: "A. Lind".into(),
            role: "Chief Engineer".into(),
            vessel_id: Some("V1".into()),
            status: CrewStatus::OnDuty,
            certifications: vec!["IGF Code advanced (LNG)".into()],
        };
        assert!(c.certified_for("lng"));
        assert!(!c.certified_for("methanol"));
        assert!(!c.is_unavailable());
    }
}
