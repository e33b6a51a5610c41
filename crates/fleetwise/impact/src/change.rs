//! Proposed operational changes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ImpactError;
use crate::fleet::FleetState;

/// Kind of operational change being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChangeType {
    VesselAssignment,
    VesselSwap,
    FuelSwitch,
    EquipmentFailure,
    MaintenanceDeferral,
    ScheduleChange,
    CrewChange,
    RouteChange,
    SpeedChange,
    PortChange,
    ProjectCancellation,
    Custom,
}

impl ChangeType {
    pub const ALL: [ChangeType; 12] = [
        ChangeType::VesselAssignment,
        ChangeType::VesselSwap,
        ChangeType::FuelSwitch,
        ChangeType::EquipmentFailure,
        ChangeType::MaintenanceDeferral,
        ChangeType::ScheduleChange,
        ChangeType::CrewChange,
        ChangeType::RouteChange,
        ChangeType::SpeedChange,
        ChangeType::PortChange,
        ChangeType::ProjectCancellation,
        ChangeType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::VesselAssignment => "vessel_assignment",
            ChangeType::VesselSwap => "vessel_swap",
            ChangeType::FuelSwitch => "fuel_switch",
            ChangeType::EquipmentFailure => "equipment_failure",
            ChangeType::MaintenanceDeferral => "maintenance_deferral",
            ChangeType::ScheduleChange => "schedule_change",
            ChangeType::CrewChange => "crew_change",
            ChangeType::RouteChange => "route_change",
            ChangeType::SpeedChange => "speed_change",
            ChangeType::PortChange => "port_change",
            ChangeType::ProjectCancellation => "project_cancellation",
            ChangeType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ImpactError::UnknownChangeType(s.to_string()))
    }
}

impl TryFrom<String> for ChangeType {
    type Error = ImpactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChangeType> for String {
    fn from(value: ChangeType) -> Self {
        value.as_str().to_string()
    }
}

/// A proposed change to fleet operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedChange {
    pub id: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub affected_vessel_ids: Vec<String>,
    #[serde(default)]
    pub affected_project_ids: Vec<String>,
    /// Free-form, change-type specific parameters (camelCase keys).
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl ProposedChange {
    pub fn new(id: impl Into<String>, change_type: ChangeType) -> Self {
        Self {
            id: id.into(),
            change_type,
            description: String::new(),
            affected_vessel_ids: Vec::new(),
            affected_project_ids: Vec::new(),
            parameters: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_vessel(mut self, vessel_id: impl Into<String>) -> Self {
        self.affected_vessel_ids.push(vessel_id.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.affected_project_ids.push(project_id.into());
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(Value::as_str)
    }

    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).and_then(Value::as_f64)
    }

    pub fn param_bool(&self, key: &str) -> bool {
        self.parameters
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn names_vessel(&self, vessel_id: &str) -> bool {
        self.affected_vessel_ids.iter().any(|v| v == vessel_id)
    }
}

/// A change together with the fleet snapshot to evaluate it against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRequest {
    pub change: ProposedChange,
    pub fleet_state: FleetState,
}
