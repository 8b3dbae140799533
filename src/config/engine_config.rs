use serde::{Deserialize, Serialize};
use crate::config::constants::*;

/// Battery bank sizing parameters. Percentage fields stay in percent form
/// and are converted to fractions at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingParameters {
    pub autonomy_hours: f64,
    pub depth_of_discharge_pct: f64,   // Usable fraction of capacity, in percent
    pub system_efficiency_pct: f64,    // Round-trip efficiency, in percent
    pub redundancy_factor: f64,
    pub peak_power_factor: f64,
    pub future_expansion_pct: f64,
}

impl Default for SizingParameters {
    fn default() -> Self {
        Self {
            autonomy_hours: 8.0,
            depth_of_discharge_pct: 90.0,
            system_efficiency_pct: 95.0,
            redundancy_factor: 1.1,
            peak_power_factor: 1.2,
            future_expansion_pct: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicParameters {
    pub electricity_tariff: f64,       // euros per kWh
    pub demand_tariff: f64,            // euros per kW per month
    pub discount_rate: f64,
    pub analysis_period_years: usize,
    pub inflation_rate: f64,
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self {
            electricity_tariff: DEFAULT_ELECTRICITY_TARIFF,
            demand_tariff: DEFAULT_DEMAND_TARIFF,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            analysis_period_years: DEFAULT_ANALYSIS_PERIOD_YEARS,
            inflation_rate: DEFAULT_INFLATION_RATE,
        }
    }
}

/// Multi-criteria priority weights. The orchestrator validates that they sum
/// to 1.0 within tolerance; the scoring engine never re-normalizes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub cost: f64,
    pub reliability: f64,
    pub environment: f64,
    pub maintenance: f64,
}

impl PriorityWeights {
    pub fn sum(&self) -> f64 {
        self.cost + self.reliability + self.environment + self.maintenance
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            cost: 0.40,
            reliability: 0.30,
            environment: 0.20,
            maintenance: 0.10,
        }
    }
}

/// Time-of-day windows and rate caps for the hourly operation walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub days: usize,
    pub start_soc: f64,
    pub min_soc: f64,
    pub max_soc: f64,
    pub offpeak_start_hour: usize,     // Inclusive
    pub offpeak_end_hour: usize,       // Inclusive
    pub peak_start_hour: usize,        // Inclusive
    pub peak_end_hour: usize,          // Inclusive
    pub shaving_threshold: f64,        // Fraction of rated power
    pub charge_rate_fraction: f64,     // Fraction of capacity per hour
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            days: DEFAULT_SIMULATION_DAYS,
            start_soc: DEFAULT_START_SOC,
            min_soc: DEFAULT_MIN_SOC,
            max_soc: DEFAULT_MAX_SOC,
            offpeak_start_hour: OFFPEAK_WINDOW_START,
            offpeak_end_hour: OFFPEAK_WINDOW_END,
            peak_start_hour: PEAK_WINDOW_START,
            peak_end_hour: PEAK_WINDOW_END,
            shaving_threshold: SHAVING_THRESHOLD,
            charge_rate_fraction: CHARGE_RATE_FRACTION,
        }
    }
}

/// Top-level engine settings bundled for the orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    pub sizing: SizingParameters,
    pub simulation: SimulationSettings,
}
