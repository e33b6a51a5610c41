//! Impact engine configuration.

use serde::{Deserialize, Serialize};

/// Trigger windows and bounds for the impact generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Most vessels that receive lateral impacts.
    pub lateral_fan_out: usize,

    /// Maintenance due within this many days conflicts with the change.
    pub maintenance_window_days: i64,

    /// Ports with berth availability below this percentage are constrained.
    pub berth_availability_threshold: f64,

    /// Certificates expiring within this many days are flagged.
    pub certificate_window_days: i64,

    /// Days per year a vessel is assumed to be running.
    pub operating_days_per_year: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            lateral_fan_out: 3,
            maintenance_window_days: 30,
            berth_availability_threshold: 30.0,
            certificate_window_days: 90,
            operating_days_per_year: 300.0,
        }
    }
}
