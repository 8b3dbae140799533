use serde::{Deserialize, Serialize};

/// Immutable catalog entry for one battery model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySpec {
    pub model: String,
    pub capacity_kwh: f64,             // Nameplate capacity per unit
    pub max_power_kw: f64,             // Continuous charge/discharge power per unit
    pub cost: f64,                     // Installed cost per unit, euros
    pub round_trip_loss_pct: f64,      // Energy lost per cycle, in percent
    pub cycle_life: u32,               // Rated full cycles
    pub depth_of_discharge_pct: f64,   // Warranty DOD limit, in percent
}

impl BatterySpec {
    pub fn round_trip_efficiency(&self) -> f64 {
        1.0 - self.round_trip_loss_pct / 100.0
    }
}

/// A sized battery bank: a catalog spec scaled to the required quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfiguration {
    pub battery_spec: BatterySpec,
    pub quantity: usize,
    pub total_capacity_kwh: f64,
    pub total_power_kw: f64,
    pub system_cost: f64,
    pub backup_time_hours: f64,
    pub cost_penalized: bool,          // True when the undersizing penalty was applied
}

impl StorageConfiguration {
    /// Usable energy after depth-of-discharge and round-trip losses.
    pub fn usable_capacity_kwh(&self) -> f64 {
        self.total_capacity_kwh
            * (self.battery_spec.depth_of_discharge_pct / 100.0)
            * self.battery_spec.round_trip_efficiency()
    }

    /// Estimated lifetime energy throughput, used for the ROI selector.
    pub fn lifetime_throughput_kwh(&self) -> f64 {
        self.total_capacity_kwh
            * (self.battery_spec.depth_of_discharge_pct / 100.0)
            * self.battery_spec.cycle_life as f64
    }
}
