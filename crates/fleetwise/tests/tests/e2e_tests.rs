#[path = "e2e/common.rs"]
mod common;

#[path = "e2e/aging_asset.rs"]
mod aging_asset;

#[path = "e2e/fuel_switch.rs"]
mod fuel_switch;

#[path = "e2e/no_op_change.rs"]
mod no_op_change;

#[path = "e2e/equipment_failure.rs"]
mod equipment_failure;

#[path = "e2e/repeated_ids.rs"]
mod repeated_ids;
