//! Shared fixtures for the end-to-end scenarios.

use chrono::{DateTime, TimeZone, Utc};
use fleetwise_impact::FleetState;

pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap()
}

/// A small North Sea fleet: three PSVs for Equinor, one CSV for Orsted,
/// one MGO contract and a congested home port.
pub fn fleet() -> FleetState {
    serde_json::from_value(serde_json::json!({
        "asOf": "2026-05-01T00:00:00Z",
        "vessels": [
            { "id": "PSV-1", "name": "Nordic Star", "vesselType": "PSV", "status": "active",
              "fuelType": "MGO", "dayRate": 28000.0, "dailyFuelConsumptionTonnes": 14.0, "homePort": "BGO" },
            { "id": "PSV-2", "name": "Nordic Wind", "vesselType": "PSV", "status": "active",
              "fuelType": "MGO", "dayRate": 26000.0, "dailyFuelConsumptionTonnes": 13.0, "homePort": "BGO" },
            { "id": "PSV-3", "name": "Nordic Tide", "vesselType": "PSV", "status": "idle",
              "fuelType": "MGO", "dayRate": 25000.0, "dailyFuelConsumptionTonnes": 12.0, "homePort": "STV" },
            { "id": "CSV-1", "name": "Sea Builder", "vesselType": "CSV", "status": "active",
              "fuelType": "MGO", "dayRate": 65000.0, "dailyFuelConsumptionTonnes": 22.0, "homePort": "ESB" }
        ],
        "projects": [
            { "id": "EQ-SUPPLY", "name": "Johan Sverdrup supply", "client": "Equinor", "status": "active",
              "vesselIds": ["PSV-1", "PSV-2"], "startDate": "2026-01-01T00:00:00Z",
              "endDate": "2026-12-31T00:00:00Z", "contractValue": 9000000.0, "dailyPenalty": 20000.0 },
            { "id": "EQ-STANDBY", "name": "Troll standby", "client": "Equinor", "status": "active",
              "vesselIds": ["PSV-3"], "startDate": "2026-03-01T00:00:00Z",
              "endDate": "2026-09-30T00:00:00Z", "contractValue": 3500000.0, "dailyPenalty": 5000.0 },
            { "id": "OR-CABLE", "name": "Hornsea cable lay", "client": "Orsted", "status": "planned",
              "vesselIds": ["CSV-1"], "startDate": "2026-07-01T00:00:00Z",
              "endDate": "2026-10-31T00:00:00Z", "contractValue": 12000000.0 }
        ],
        "crew": [
            { "id": "CR-1", "name": "A. Hansen", "role": "Chief Engineer", "vesselId": "PSV-1",
              "status": "on_duty", "certifications": ["STCW Basic", "Engine Room Resource Management"] },
            { "id": "CR-2", "name": "B. Larsen", "role": "Master", "vesselId": "PSV-1",
              "status": "on_leave", "certifications": ["STCW Basic"] },
            { "id": "CR-3", "name": "C. Berg", "role": "Second Engineer", "vesselId": "PSV-3",
              "status": "available", "certifications": ["STCW Basic"] }
        ],
        "maintenance": [
            { "id": "MX-1", "vesselId": "PSV-1", "description": "Main engine overhaul",
              "dueDate": "2026-05-18T00:00:00Z", "estimatedCost": 90000.0, "critical": true },
            { "id": "MX-2", "vesselId": "PSV-2", "description": "Bow thruster service",
              "dueDate": "2026-05-25T00:00:00Z", "estimatedCost": 25000.0 }
        ],
        "supplyChain": {
            "spareParts": [
                { "partNumber": "ME-INJ-204", "description": "Fuel injector", "vesselIds": ["PSV-1"],
                  "quantityOnHand": 0, "reorderPoint": 4, "leadTimeDays": 35, "unitCost": 6500.0 }
            ],
            "fuelContracts": [
                { "id": "FC-MGO", "supplier": "Nordic Bunkers", "fuelType": "MGO",
                  "pricePerTonne": 760.0, "expiresAt": "2027-03-31T00:00:00Z" }
            ],
            "ports": [
                { "id": "BGO", "name": "Bergen", "berthAvailabilityPercent": 18.0, "dailyPortFee": 3000.0 },
                { "id": "STV", "name": "Stavanger", "berthAvailabilityPercent": 55.0 }
            ]
        },
        "compliance": {
            "certificates": [
                { "id": "SMC-1", "vesselId": "PSV-1", "name": "Safety Management Certificate",
                  "expiresAt": "2026-06-20T00:00:00Z" }
            ],
            "esgScore": 64.0,
            "emissionsBaselineTonnes": 75000.0,
            "carbonPricePerTonne": 85.0
        },
        "financials": {
            "annualRevenue": 52000000.0,
            "annualOperatingCost": 34000000.0,
            "annualInsurancePremium": 1800000.0
        }
    }))
    .unwrap()
}
