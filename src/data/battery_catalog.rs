use serde::{Deserialize, Serialize};
use crate::models::battery::BatterySpec;

/// Read-only battery equipment table.
///
/// Constructed explicitly and passed by reference so tests can substitute
/// fixture catalogs; never a module-level singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryCatalog {
    entries: Vec<BatterySpec>,
}

impl BatteryCatalog {
    /// The standard commercial lineup, wall units through container racks.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                BatterySpec {
                    model: "LFP-W5".to_string(),
                    capacity_kwh: 5.0,
                    max_power_kw: 2.5,
                    cost: 2_900.0,
                    round_trip_loss_pct: 8.0,
                    cycle_life: 6000,
                    depth_of_discharge_pct: 90.0,
                },
                BatterySpec {
                    model: "LFP-W10".to_string(),
                    capacity_kwh: 10.0,
                    max_power_kw: 5.0,
                    cost: 5_400.0,
                    round_trip_loss_pct: 8.0,
                    cycle_life: 6000,
                    depth_of_discharge_pct: 90.0,
                },
                BatterySpec {
                    model: "LFP-R25".to_string(),
                    capacity_kwh: 25.0,
                    max_power_kw: 12.5,
                    cost: 12_500.0,
                    round_trip_loss_pct: 7.0,
                    cycle_life: 7000,
                    depth_of_discharge_pct: 92.0,
                },
                BatterySpec {
                    model: "LFP-R50".to_string(),
                    capacity_kwh: 50.0,
                    max_power_kw: 25.0,
                    cost: 23_000.0,
                    round_trip_loss_pct: 6.5,
                    cycle_life: 7000,
                    depth_of_discharge_pct: 92.0,
                },
                BatterySpec {
                    model: "LFP-C100".to_string(),
                    capacity_kwh: 100.0,
                    max_power_kw: 50.0,
                    cost: 42_000.0,
                    round_trip_loss_pct: 6.0,
                    cycle_life: 8000,
                    depth_of_discharge_pct: 95.0,
                },
                BatterySpec {
                    model: "LFP-C215".to_string(),
                    capacity_kwh: 215.0,
                    max_power_kw: 100.0,
                    cost: 83_000.0,
                    round_trip_loss_pct: 5.5,
                    cycle_life: 8000,
                    depth_of_discharge_pct: 95.0,
                },
            ],
        }
    }

    /// Builds a catalog from explicit entries; used by test fixtures.
    pub fn from_entries(entries: Vec<BatterySpec>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BatterySpec] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
