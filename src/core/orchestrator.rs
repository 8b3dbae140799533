use rayon::prelude::*;
use tracing::{debug, info};

use crate::analysis::{financial, scoring};
use crate::config::const_funcs;
use crate::config::constants::*;
use crate::config::engine_config::{EconomicParameters, EngineSettings, PriorityWeights};
use crate::config::system_type::SystemType;
use crate::core::config_generator::ConfigurationGenerator;
use crate::core::operation_sim::OperationSimulator;
use crate::data::battery_catalog::BatteryCatalog;
use crate::data::diesel_catalog::DieselCatalog;
use crate::error::{EngineError, Result};
use crate::models::load_profile::LoadProfile;
use crate::models::system::{
    AnalysisRequest, AnalysisResult, ComparativeMetrics, EvaluatedConfiguration,
    FinancialMetrics, OperationalScenario, ScenarioKind, SystemConfiguration,
};

/// Composes the engine: generate, simulate, evaluate, score, compare.
///
/// Catalogs are injected read-only references; every candidate evaluation is
/// a pure function of its own inputs, so the fan-out runs in parallel with
/// no shared mutable state.
pub struct MultiSystemOrchestrator<'a> {
    battery_catalog: &'a BatteryCatalog,
    diesel_catalog: &'a DieselCatalog,
    settings: EngineSettings,
}

impl<'a> MultiSystemOrchestrator<'a> {
    pub fn new(
        battery_catalog: &'a BatteryCatalog,
        diesel_catalog: &'a DieselCatalog,
        settings: EngineSettings,
    ) -> Self {
        Self {
            battery_catalog,
            diesel_catalog,
            settings,
        }
    }

    /// Runs the full pipeline for one request.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        Self::validate_request(request)?;

        let weights = request.weights.unwrap_or_default();
        let economics = request.economics.clone().unwrap_or_default();
        let allowed: Vec<SystemType> = request
            .allowed_types
            .clone()
            .unwrap_or_else(|| SystemType::all().to_vec());

        let generator =
            ConfigurationGenerator::new(self.battery_catalog, self.diesel_catalog, &self.settings.sizing);
        let candidates: Vec<SystemConfiguration> = allowed
            .iter()
            .flat_map(|&ty| generator.generate(ty, &request.load_profile, request.solar_template.as_ref()))
            .collect();

        if candidates.is_empty() {
            return Err(EngineError::NoViableConfiguration);
        }
        info!(candidate_count = candidates.len(), "generated candidate set");

        let evaluated: Vec<EvaluatedConfiguration> = candidates
            .into_par_iter()
            .map(|config| self.evaluate(config, &request.load_profile, &economics, &weights))
            .collect();

        let scores: Vec<f64> = evaluated.iter().map(|e| e.score).collect();
        let best = scoring::select_best(&scores).ok_or(EngineError::NoViableConfiguration)?;
        debug!(best_index = best, best_score = scores[best], "selected recommendation");

        let baseline_annual_grid_cost = const_funcs::calc_baseline_annual_cost(
            request.load_profile.daily_consumption,
            request.load_profile.peak_power,
            &economics,
        );
        let comparative = Self::comparative_metrics(&evaluated, baseline_annual_grid_cost);
        let scenarios = Self::operational_scenarios(evaluated[best].configuration.system_type);

        let mut alternatives = evaluated;
        let recommended = alternatives.remove(best);

        Ok(AnalysisResult {
            recommended,
            alternatives,
            comparative,
            scenarios,
        })
    }

    /// Fail-fast request validation; no partial results on failure.
    fn validate_request(request: &AnalysisRequest) -> Result<()> {
        request.load_profile.validate()?;

        if let Some(template) = &request.solar_template {
            template.validate()?;
        }

        if let Some(weights) = &request.weights {
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(EngineError::Validation(format!(
                    "priority weights must sum to 1.0 (±{}), got {:.4}",
                    WEIGHT_SUM_TOLERANCE, sum
                )));
            }
        }

        if let Some(types) = &request.allowed_types {
            if types.is_empty() {
                return Err(EngineError::Validation(
                    "allowed system type list must not be empty".to_string(),
                ));
            }
        }

        if let Some(economics) = &request.economics {
            if economics.analysis_period_years == 0 {
                return Err(EngineError::Validation(
                    "analysis period must be at least one year".to_string(),
                ));
            }
            if !economics.discount_rate.is_finite() || economics.discount_rate <= -1.0 {
                return Err(EngineError::Validation(format!(
                    "discount rate must be finite and greater than -1.0, got {}",
                    economics.discount_rate
                )));
            }
        }

        Ok(())
    }

    /// Technical, operational and financial evaluation of one candidate.
    fn evaluate(
        &self,
        config: SystemConfiguration,
        profile: &LoadProfile,
        economics: &EconomicParameters,
        weights: &PriorityWeights,
    ) -> EvaluatedConfiguration {
        let sim_settings = &self.settings.simulation;
        let simulation = config
            .storage
            .as_ref()
            .map(|storage| OperationSimulator::new(sim_settings).run(storage, profile));

        let (annual_peak_shaving_kwh, demand_savings) = match &simulation {
            Some(output) if sim_settings.days > 0 => {
                let daily_shaving = output.total_peak_shaving_kwh / sim_settings.days as f64;
                let annual = daily_shaving * DAYS_PER_YEAR;
                let window_hours =
                    (sim_settings.peak_end_hour - sim_settings.peak_start_hour + 1) as f64;
                let kw_reduction = daily_shaving / window_hours;
                (annual, kw_reduction * economics.demand_tariff * MONTHS_PER_YEAR)
            }
            _ => (0.0, 0.0),
        };

        // Energy the system supplies displaces grid purchases at the tariff.
        let annual_load_kwh = profile.daily_consumption * DAYS_PER_YEAR;
        let self_supplied_kwh = config.annual_energy_production_kwh.min(annual_load_kwh);
        let energy_savings = self_supplied_kwh * economics.electricity_tariff;

        let first_year_net =
            energy_savings + demand_savings - config.annual_fuel_cost - config.annual_maintenance_cost;
        let yearly_flows: Vec<f64> = (1..=economics.analysis_period_years)
            .map(|year| first_year_net * const_funcs::calc_inflation_factor(economics.inflation_rate, year - 1))
            .collect();
        let series = financial::CashFlowSeries::from_investment(config.total_cost, &yearly_flows);

        let financial_metrics = FinancialMetrics {
            npv: financial::npv(&series, economics.discount_rate),
            irr: financial::irr(&series),
            mirr: financial::mirr(&series, economics.discount_rate, economics.discount_rate),
            simple_payback_years: financial::simple_payback(&series),
            discounted_payback_years: financial::discounted_payback(&series, economics.discount_rate),
            lcoe: financial::lcoe(
                config.total_cost,
                config.annual_energy_production_kwh,
                economics.analysis_period_years,
            ),
            annual_savings_first_year: first_year_net,
        };

        let score = scoring::score_configuration(&config, weights);

        EvaluatedConfiguration {
            configuration: config,
            financial: financial_metrics,
            score,
            annual_peak_shaving_kwh,
        }
    }

    /// Means over every generated candidate, not just the recommendation,
    /// alongside the cost of serving the same load from the grid alone.
    fn comparative_metrics(
        evaluated: &[EvaluatedConfiguration],
        baseline_annual_grid_cost: f64,
    ) -> ComparativeMetrics {
        let count = evaluated.len().max(1) as f64;
        ComparativeMetrics {
            candidate_count: evaluated.len(),
            baseline_annual_grid_cost,
            mean_lcoe: evaluated.iter().map(|e| e.financial.lcoe).sum::<f64>() / count,
            mean_reliability_index: evaluated
                .iter()
                .map(|e| e.configuration.reliability_index)
                .sum::<f64>()
                / count,
            mean_carbon_footprint_kg: evaluated
                .iter()
                .map(|e| e.configuration.carbon_footprint_kg_per_year)
                .sum::<f64>()
                / count,
        }
    }

    /// The four fixed scenario projections for the recommended candidate.
    /// Contribution percentages are illustrative constants keyed by which
    /// subsystems are present, not outputs of the operation simulator.
    fn operational_scenarios(system_type: SystemType) -> Vec<OperationalScenario> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| {
                let (solar_pct, battery_pct, diesel_pct, grid_pct) =
                    Self::scenario_split(kind, system_type);
                OperationalScenario {
                    kind,
                    solar_pct,
                    battery_pct,
                    diesel_pct,
                    grid_pct,
                }
            })
            .collect()
    }

    fn scenario_split(kind: ScenarioKind, system_type: SystemType) -> (f64, f64, f64, f64) {
        match kind {
            ScenarioKind::Normal => match system_type {
                SystemType::SolarBatteryDiesel => (45.0, 30.0, 5.0, 20.0),
                SystemType::SolarBattery => (50.0, 30.0, 0.0, 20.0),
                SystemType::SolarDiesel => (50.0, 0.0, 10.0, 40.0),
                SystemType::BatteryDiesel => (0.0, 40.0, 10.0, 50.0),
                SystemType::Solar => (55.0, 0.0, 0.0, 45.0),
                SystemType::Battery => (0.0, 40.0, 0.0, 60.0),
                SystemType::Diesel => (0.0, 0.0, 30.0, 70.0),
            },
            ScenarioKind::GridOutage => match system_type {
                SystemType::SolarBatteryDiesel => (40.0, 35.0, 25.0, 0.0),
                SystemType::SolarBattery => (55.0, 45.0, 0.0, 0.0),
                SystemType::SolarDiesel => (60.0, 0.0, 40.0, 0.0),
                SystemType::BatteryDiesel => (0.0, 55.0, 45.0, 0.0),
                SystemType::Solar => (100.0, 0.0, 0.0, 0.0),
                SystemType::Battery => (0.0, 100.0, 0.0, 0.0),
                SystemType::Diesel => (0.0, 0.0, 100.0, 0.0),
            },
            ScenarioKind::PeakDemand => match system_type {
                SystemType::SolarBatteryDiesel => (35.0, 40.0, 15.0, 10.0),
                SystemType::SolarBattery => (40.0, 45.0, 0.0, 15.0),
                SystemType::SolarDiesel => (45.0, 0.0, 25.0, 30.0),
                SystemType::BatteryDiesel => (0.0, 50.0, 20.0, 30.0),
                SystemType::Solar => (50.0, 0.0, 0.0, 50.0),
                SystemType::Battery => (0.0, 55.0, 0.0, 45.0),
                SystemType::Diesel => (0.0, 0.0, 45.0, 55.0),
            },
            ScenarioKind::Maintenance => match system_type {
                SystemType::SolarBatteryDiesel => (30.0, 20.0, 10.0, 40.0),
                SystemType::SolarBattery => (35.0, 20.0, 0.0, 45.0),
                SystemType::SolarDiesel => (35.0, 0.0, 15.0, 50.0),
                SystemType::BatteryDiesel => (0.0, 25.0, 15.0, 60.0),
                SystemType::Solar => (30.0, 0.0, 0.0, 70.0),
                SystemType::Battery => (0.0, 25.0, 0.0, 75.0),
                SystemType::Diesel => (0.0, 0.0, 20.0, 80.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orchestrator_parts() -> (BatteryCatalog, DieselCatalog) {
        (BatteryCatalog::standard(), DieselCatalog::standard())
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            load_profile: LoadProfile::flat(5.0, 20.0, 10.0, 8.0),
            solar_template: None,
            allowed_types: None,
            weights: None,
            economics: None,
        }
    }

    #[test]
    fn test_recommended_score_dominates() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let result = orchestrator.analyze(&request()).unwrap();
        for alternative in &result.alternatives {
            assert!(result.recommended.score >= alternative.score);
        }
    }

    #[test]
    fn test_deterministic_analysis() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let first = orchestrator.analyze(&request()).unwrap();
        let second = orchestrator.analyze(&request()).unwrap();
        assert_eq!(
            first.recommended.configuration.system_type,
            second.recommended.configuration.system_type
        );
        assert_eq!(first.recommended.score, second.recommended.score);
        assert_eq!(first.alternatives.len(), second.alternatives.len());
        for (a, b) in first.alternatives.iter().zip(second.alternatives.iter()) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.configuration.total_cost, b.configuration.total_cost);
        }
    }

    #[test]
    fn test_bad_weights_fail_fast() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let mut req = request();
        req.weights = Some(PriorityWeights {
            cost: 0.5,
            reliability: 0.5,
            environment: 0.5,
            maintenance: 0.5,
        });
        assert!(matches!(
            orchestrator.analyze(&req),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_allowed_list_rejected() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let mut req = request();
        req.allowed_types = Some(vec![]);
        assert!(orchestrator.analyze(&req).is_err());
    }

    #[test]
    fn test_empty_candidate_set_is_descriptive_failure() {
        // A battery catalog with one hopeless model leaves battery-only
        // requests with nothing to recommend.
        let batteries = BatteryCatalog::from_entries(vec![crate::models::battery::BatterySpec {
            model: "hopeless".to_string(),
            capacity_kwh: 0.5,
            max_power_kw: 0.1,
            cost: 900.0,
            round_trip_loss_pct: 15.0,
            cycle_life: 1000,
            depth_of_discharge_pct: 80.0,
        }]);
        let diesels = DieselCatalog::standard();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let mut req = request();
        req.allowed_types = Some(vec![SystemType::Battery]);
        assert!(matches!(
            orchestrator.analyze(&req),
            Err(EngineError::NoViableConfiguration)
        ));
    }

    #[test]
    fn test_scenarios_cover_all_kinds_and_sum_to_100() {
        for ty in SystemType::all() {
            let scenarios = MultiSystemOrchestrator::operational_scenarios(ty);
            assert_eq!(scenarios.len(), 4);
            for scenario in &scenarios {
                let sum = scenario.solar_pct
                    + scenario.battery_pct
                    + scenario.diesel_pct
                    + scenario.grid_pct;
                assert!((sum - 100.0).abs() < 1e-9);
                // Absent subsystems never contribute.
                if !ty.has_solar() {
                    assert_eq!(scenario.solar_pct, 0.0);
                }
                if !ty.has_storage() {
                    assert_eq!(scenario.battery_pct, 0.0);
                }
                if !ty.has_diesel() {
                    assert_eq!(scenario.diesel_pct, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_baseline_grid_cost_uses_request_economics() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let result = orchestrator.analyze(&request()).unwrap();
        let expected = const_funcs::calc_baseline_annual_cost(
            120.0,
            20.0,
            &EconomicParameters::default(),
        );
        assert!((result.comparative.baseline_annual_grid_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_comparative_means_cover_all_candidates() {
        let (batteries, diesels) = orchestrator_parts();
        let orchestrator =
            MultiSystemOrchestrator::new(&batteries, &diesels, EngineSettings::default());
        let result = orchestrator.analyze(&request()).unwrap();
        let total = result.alternatives.len() + 1;
        assert_eq!(result.comparative.candidate_count, total);

        let mut reliability_sum = result.recommended.configuration.reliability_index;
        for alternative in &result.alternatives {
            reliability_sum += alternative.configuration.reliability_index;
        }
        let expected = reliability_sum / total as f64;
        assert!((result.comparative.mean_reliability_index - expected).abs() < 1e-9);
    }
}
