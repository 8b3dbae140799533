use serde::{Deserialize, Serialize};

/// Immutable catalog entry for one diesel generator model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieselSpec {
    pub model: String,
    pub rated_power_kw: f64,
    pub cost: f64,                       // Installed cost, euros
    pub fuel_consumption_l_per_h: f64,   // At rated output
    pub maintenance_cost_per_year: f64,  // Scheduled service, euros
}

/// A diesel unit selected for a candidate, with its sizing context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieselConfiguration {
    pub diesel_spec: DieselSpec,
    pub required_power_kw: f64,
    pub sizing_factor: f64,              // Fraction of peak power it was sized for
}
