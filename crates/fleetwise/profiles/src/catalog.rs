//! Built-in OEM reference data for power-transformer components.

use crate::types::{ComponentProfile, ComponentType, FailureMode, MaintenanceTask, WearPoint};

fn mode(name: &str, base_probability: f64, signals: &[&str], mtbf_years: f64) -> FailureMode {
    FailureMode {
        mode: name.to_string(),
        base_probability,
        warning_signals: signals.iter().map(|s| s.to_string()).collect(),
        mean_time_between_failures_years: mtbf_years,
    }
}

fn task(name: &str, interval_months: u32, duration_hours: f64, parts: &[&str], cost: f64) -> MaintenanceTask {
    MaintenanceTask {
        task: name.to_string(),
        interval_months,
        duration_hours,
        parts: parts.iter().map(|s| s.to_string()).collect(),
        estimated_cost: cost,
    }
}

fn curve(points: &[(f64, f64)]) -> Vec<WearPoint> {
    points.iter().map(|&(a, h)| WearPoint::new(a, h)).collect()
}

/// Profiles shipped with the store, one per [`ComponentType`].
pub fn builtin_profiles() -> Vec<ComponentProfile> {
    vec![
        ComponentProfile {
            component_type: ComponentType::Winding,
            display_name: "Main winding assembly".into(),
            expected_life_years: 50.0,
            moisture_limit_ppm: 35.0,
            temperature_limit_c: 110.0,
            replacement_cost: 1_250_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (10.0, 96.0),
                (20.0, 88.0),
                (30.0, 75.0),
                (40.0, 55.0),
                (50.0, 30.0),
                (60.0, 10.0),
            ]),
            failure_modes: vec![
                mode(
                    "Insulation breakdown",
                    0.25,
                    &["High moisture content", "Low dielectric strength", "Rising partial discharge"],
                    35.0,
                ),
                mode(
                    "Thermal degradation of paper insulation",
                    0.2,
                    &["Elevated hot-spot temperature", "Furan compounds in oil", "Thermal fault gases"],
                    30.0,
                ),
                mode(
                    "Winding deformation",
                    0.1,
                    &["Through-fault history", "Frequency response deviation"],
                    40.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Winding resistance test", 12, 4.0, &[], 2_500.0),
                task("Insulation power factor test", 36, 6.0, &[], 4_500.0),
                task("Sweep frequency response analysis", 60, 8.0, &[], 9_000.0),
                task(
                    "Paper insulation dry-out",
                    120,
                    72.0,
                    &["Vacuum dry-out consumables", "Replacement gaskets"],
                    45_000.0,
                ),
            ],
        },
        ComponentProfile {
            component_type: ComponentType::Bushing,
            display_name: "High-voltage bushing".into(),
            expected_life_years: 30.0,
            moisture_limit_ppm: 25.0,
            temperature_limit_c: 105.0,
            replacement_cost: 85_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (8.0, 92.0),
                (15.0, 80.0),
                (22.0, 60.0),
                (30.0, 35.0),
                (38.0, 10.0),
            ]),
            failure_modes: vec![
                mode(
                    "Capacitance layer breakdown",
                    0.22,
                    &["Rising power factor", "Capacitance change above 5%", "Dielectric loss increase"],
                    25.0,
                ),
                mode(
                    "Seal failure and moisture ingress",
                    0.18,
                    &["Oil level drop", "Moisture ingress at top cap"],
                    20.0,
                ),
                mode(
                    "Terminal overheating",
                    0.12,
                    &["Thermal image hot spot", "Discoloured connector"],
                    28.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Infrared thermography scan", 6, 1.0, &[], 600.0),
                task("Power factor and capacitance test", 24, 3.0, &[], 3_200.0),
                task("Gasket and seal replacement", 96, 16.0, &["Bushing gasket kit"], 12_500.0),
            ],
        },
        ComponentProfile {
            component_type: ComponentType::TapChanger,
            display_name: "On-load tap changer".into(),
            expected_life_years: 25.0,
            moisture_limit_ppm: 30.0,
            temperature_limit_c: 95.0,
            replacement_cost: 220_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (5.0, 93.0),
                (10.0, 82.0),
                (15.0, 68.0),
                (20.0, 48.0),
                (25.0, 28.0),
                (30.0, 10.0),
            ]),
            failure_modes: vec![
                mode(
                    "Contact wear and coking",
                    0.3,
                    &["Increased transition resistance", "Carbon deposits in diverter oil", "Thermal gases in diverter compartment"],
                    12.0,
                ),
                mode(
                    "Drive mechanism failure",
                    0.15,
                    &["Motor current anomaly", "Missed tap positions"],
                    18.0,
                ),
                mode(
                    "Diverter oil contamination",
                    0.12,
                    &["Low dielectric strength of diverter oil", "Moisture in diverter compartment"],
                    10.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Diverter oil sampling", 6, 2.0, &["Sample bottles"], 450.0),
                task("Dynamic resistance measurement", 12, 5.0, &[], 2_800.0),
                task(
                    "Diverter switch overhaul",
                    60,
                    40.0,
                    &["Arcing contacts", "Transition resistors", "Diverter oil"],
                    38_000.0,
                ),
            ],
        },
        ComponentProfile {
            component_type: ComponentType::InsulationOil,
            display_name: "Insulating oil system".into(),
            expected_life_years: 30.0,
            moisture_limit_ppm: 30.0,
            temperature_limit_c: 100.0,
            replacement_cost: 60_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (5.0, 94.0),
                (10.0, 85.0),
                (20.0, 62.0),
                (30.0, 38.0),
                (40.0, 15.0),
            ]),
            failure_modes: vec![
                mode(
                    "Oxidation and sludge formation",
                    0.28,
                    &["Rising acidity", "Falling interfacial tension", "Darkening colour"],
                    15.0,
                ),
                mode(
                    "Moisture contamination",
                    0.24,
                    &["High moisture content", "Low dielectric breakdown voltage"],
                    12.0,
                ),
                mode(
                    "Thermal decomposition",
                    0.14,
                    &["Ethylene and methane generation", "Elevated top-oil temperature"],
                    20.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Dissolved gas analysis", 6, 1.0, &["Sample syringes"], 350.0),
                task("Oil quality screening", 12, 1.5, &[], 700.0),
                task("Oil regeneration", 84, 48.0, &["Fuller's earth cartridges"], 26_000.0),
            ],
        },
        ComponentProfile {
            component_type: ComponentType::CoolingSystem,
            display_name: "Cooling fans, pumps and radiators".into(),
            expected_life_years: 20.0,
            moisture_limit_ppm: 40.0,
            temperature_limit_c: 90.0,
            replacement_cost: 45_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (5.0, 90.0),
                (10.0, 75.0),
                (15.0, 55.0),
                (20.0, 35.0),
                (25.0, 15.0),
            ]),
            failure_modes: vec![
                mode(
                    "Fan motor failure",
                    0.3,
                    &["Bearing noise", "Vibration increase", "Elevated top-oil temperature"],
                    8.0,
                ),
                mode(
                    "Radiator blockage",
                    0.2,
                    &["Uneven radiator temperature", "Thermal gradient across fins"],
                    10.0,
                ),
                mode(
                    "Oil pump seal leak",
                    0.15,
                    &["Oil weeping at pump flange", "Flow indicator alarm"],
                    12.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Fan and pump inspection", 3, 2.0, &[], 400.0),
                task("Radiator cleaning", 12, 6.0, &["Degreaser"], 1_800.0),
                task("Fan motor replacement", 60, 10.0, &["Fan motor", "Bearings"], 7_500.0),
            ],
        },
        ComponentProfile {
            component_type: ComponentType::Core,
            display_name: "Magnetic core".into(),
            expected_life_years: 60.0,
            moisture_limit_ppm: 35.0,
            temperature_limit_c: 120.0,
            replacement_cost: 900_000.0,
            wear_curve: curve(&[
                (0.0, 100.0),
                (15.0, 95.0),
                (30.0, 85.0),
                (45.0, 65.0),
                (60.0, 40.0),
                (70.0, 20.0),
            ]),
            failure_modes: vec![
                mode(
                    "Core ground fault",
                    0.15,
                    &["Core insulation resistance drop", "Hydrogen and methane generation"],
                    45.0,
                ),
                mode(
                    "Lamination overheating",
                    0.12,
                    &["Thermal fault gases", "Increased no-load losses"],
                    40.0,
                ),
                mode(
                    "Clamping loosening",
                    0.08,
                    &["Audible hum increase", "Vibration increase"],
                    50.0,
                ),
            ],
            maintenance_tasks: vec![
                task("Core ground insulation test", 36, 4.0, &[], 2_200.0),
                task("Excitation current test", 48, 3.0, &[], 2_600.0),
                task("Core clamping re-torque", 144, 60.0, &["Clamping bolts", "Insulating washers"], 52_000.0),
            ],
        },
    ]
}
