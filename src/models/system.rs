use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::config::engine_config::{EconomicParameters, PriorityWeights};
use crate::config::system_type::SystemType;
use crate::models::diesel::DieselConfiguration;
use crate::models::load_profile::LoadProfile;
use crate::models::solar::SolarSpec;
use crate::models::battery::StorageConfiguration;

/// Dispatch sources in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerSource {
    Solar,
    Battery,
    Diesel,
    Grid,
}

/// Dispatch policy attached to every generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlStrategy {
    pub priority_order: Vec<PowerSource>,
    pub diesel_cutin_soc: f64,
    pub min_soc: f64,
    pub max_soc: f64,
    pub charge_window: (usize, usize),     // Inclusive off-peak hours
    pub discharge_window: (usize, usize),  // Inclusive peak hours
}

impl Default for ControlStrategy {
    fn default() -> Self {
        Self {
            priority_order: vec![
                PowerSource::Solar,
                PowerSource::Battery,
                PowerSource::Diesel,
                PowerSource::Grid,
            ],
            diesel_cutin_soc: DIESEL_CUTIN_SOC,
            min_soc: DEFAULT_MIN_SOC,
            max_soc: DEFAULT_MAX_SOC,
            charge_window: (OFFPEAK_WINDOW_START, OFFPEAK_WINDOW_END),
            discharge_window: (PEAK_WINDOW_START, PEAK_WINDOW_END),
        }
    }
}

/// One fully-sized candidate system.
///
/// Exactly the sub-objects implied by `system_type` are present; candidates
/// violating that shape never leave the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfiguration {
    pub system_type: SystemType,
    pub solar: Option<SolarSpec>,
    pub storage: Option<StorageConfiguration>,
    pub diesel: Option<DieselConfiguration>,
    pub control_strategy: ControlStrategy,
    pub total_cost: f64,
    pub annual_energy_production_kwh: f64,
    pub annual_fuel_cost: f64,
    pub annual_maintenance_cost: f64,
    pub carbon_footprint_kg_per_year: f64,
    pub reliability_index: f64,
}

impl SystemConfiguration {
    /// True when the optional sub-objects match the tagged type exactly.
    pub fn shape_matches_type(&self) -> bool {
        self.solar.is_some() == self.system_type.has_solar()
            && self.storage.is_some() == self.system_type.has_storage()
            && self.diesel.is_some() == self.system_type.has_diesel()
    }
}

/// Financial metrics for one candidate over the analysis horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub npv: f64,
    pub irr: f64,
    pub mirr: f64,
    pub simple_payback_years: f64,
    pub discounted_payback_years: f64,
    pub lcoe: f64,
    pub annual_savings_first_year: f64,
}

/// A candidate together with its evaluation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedConfiguration {
    pub configuration: SystemConfiguration,
    pub financial: FinancialMetrics,
    pub score: f64,
    pub annual_peak_shaving_kwh: f64,
}

/// Mean metrics over every generated candidate, not just the recommended one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub candidate_count: usize,
    pub mean_lcoe: f64,
    pub mean_reliability_index: f64,
    pub mean_carbon_footprint_kg: f64,
    pub baseline_annual_grid_cost: f64,
}

/// The four fixed operational scenarios projected for the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    Normal,
    GridOutage,
    PeakDemand,
    Maintenance,
}

impl ScenarioKind {
    pub fn all() -> [ScenarioKind; 4] {
        [
            ScenarioKind::Normal,
            ScenarioKind::GridOutage,
            ScenarioKind::PeakDemand,
            ScenarioKind::Maintenance,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScenarioKind::Normal => "Normal operation",
            ScenarioKind::GridOutage => "Grid outage",
            ScenarioKind::PeakDemand => "Peak demand",
            ScenarioKind::Maintenance => "Maintenance",
        }
    }
}

/// Illustrative supply split for one scenario, in percent of the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalScenario {
    pub kind: ScenarioKind,
    pub solar_pct: f64,
    pub battery_pct: f64,
    pub diesel_pct: f64,
    pub grid_pct: f64,
}

/// Engine input, assembled by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub load_profile: LoadProfile,
    pub solar_template: Option<SolarSpec>,
    pub allowed_types: Option<Vec<SystemType>>,
    pub weights: Option<PriorityWeights>,
    pub economics: Option<EconomicParameters>,
}

/// Engine output, returned to the caller for optional downstream storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub recommended: EvaluatedConfiguration,
    pub alternatives: Vec<EvaluatedConfiguration>,
    pub comparative: ComparativeMetrics,
    pub scenarios: Vec<OperationalScenario>,
}
