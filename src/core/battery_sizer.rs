use tracing::debug;

use crate::config::constants::*;
use crate::config::engine_config::SizingParameters;
use crate::data::battery_catalog::BatteryCatalog;
use crate::error::{EngineError, Result};
use crate::models::battery::{BatterySpec, StorageConfiguration};
use crate::models::load_profile::LoadProfile;

/// Capacity and power targets derived from a load profile.
#[derive(Debug, Clone, Copy)]
pub struct SizingRequirements {
    pub required_capacity_kwh: f64,
    pub required_power_kw: f64,
}

/// Recommended bank plus the rest of the enumerated candidates.
#[derive(Debug, Clone)]
pub struct SizedStorage {
    pub recommended: StorageConfiguration,
    pub alternatives: Vec<StorageConfiguration>,
}

/// Derives storage requirements from a load profile and scales catalog
/// batteries into candidate bank configurations.
pub struct BatterySizer<'a> {
    catalog: &'a BatteryCatalog,
}

impl<'a> BatterySizer<'a> {
    pub fn new(catalog: &'a BatteryCatalog) -> Self {
        Self { catalog }
    }

    pub fn calc_requirements(
        profile: &LoadProfile,
        params: &SizingParameters,
    ) -> SizingRequirements {
        let dod = params.depth_of_discharge_pct / 100.0;
        let efficiency = params.system_efficiency_pct / 100.0;
        let expansion = 1.0 + params.future_expansion_pct / 100.0;

        let required_capacity_kwh = (profile.essential_loads * params.autonomy_hours / dod
            / efficiency
            * params.redundancy_factor
            * expansion)
            .ceil();

        let required_power_kw = (profile.peak_power.max(profile.essential_loads)
            * params.peak_power_factor
            / INVERTER_EFFICIENCY)
            .ceil();

        SizingRequirements {
            required_capacity_kwh,
            required_power_kw,
        }
    }

    /// Scales one catalog model to the requirements. `None` when the model
    /// cannot meet them within the unit cap.
    fn build_configuration(
        spec: &BatterySpec,
        requirements: &SizingRequirements,
        params: &SizingParameters,
        essential_loads: f64,
    ) -> Option<StorageConfiguration> {
        let by_capacity = (requirements.required_capacity_kwh / spec.capacity_kwh).ceil() as usize;
        let by_power = (requirements.required_power_kw / spec.max_power_kw).ceil() as usize;
        let quantity = by_capacity.max(by_power).max(1);

        if quantity > MAX_BATTERIES {
            debug!(model = %spec.model, quantity, "battery model rejected, exceeds unit cap");
            return None;
        }

        let total_capacity_kwh = spec.capacity_kwh * quantity as f64;
        let total_power_kw = spec.max_power_kw * quantity as f64;
        let mut system_cost = spec.cost * quantity as f64;

        // Banks that only barely clear the requirement get a cost penalty
        // instead of rejection; the margin is the redundancy factor.
        let capacity_threshold = requirements.required_capacity_kwh * params.redundancy_factor;
        let power_threshold = requirements.required_power_kw * params.redundancy_factor;
        let cost_penalized =
            total_capacity_kwh < capacity_threshold || total_power_kw < power_threshold;
        if cost_penalized {
            system_cost *= UNDERSIZED_COST_PENALTY;
        }

        let mut config = StorageConfiguration {
            battery_spec: spec.clone(),
            quantity,
            total_capacity_kwh,
            total_power_kw,
            system_cost,
            backup_time_hours: 0.0,
            cost_penalized,
        };
        if essential_loads > 0.0 {
            config.backup_time_hours = config.usable_capacity_kwh() / essential_loads;
        }
        Some(config)
    }

    /// Enumerates every feasible bank and ranks them.
    pub fn size(&self, profile: &LoadProfile, params: &SizingParameters) -> Result<SizedStorage> {
        let requirements = Self::calc_requirements(profile, params);

        let candidates: Vec<StorageConfiguration> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|spec| {
                Self::build_configuration(spec, &requirements, params, profile.essential_loads)
            })
            .collect();

        if candidates.is_empty() {
            return Err(EngineError::Catalog(format!(
                "no battery model can deliver {} kWh / {} kW within {} units",
                requirements.required_capacity_kwh, requirements.required_power_kw, MAX_BATTERIES
            )));
        }

        let best = Self::select_by_score(&candidates);
        let recommended = candidates[best].clone();
        let alternatives = candidates
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != best)
            .map(|(_, config)| config)
            .collect();

        Ok(SizedStorage {
            recommended,
            alternatives,
        })
    }

    /// Weighted max-normalized score over capacity, cycle life, efficiency
    /// and inverse cost. First enumerated wins ties.
    fn select_by_score(candidates: &[StorageConfiguration]) -> usize {
        let max_capacity = candidates
            .iter()
            .map(|c| c.total_capacity_kwh)
            .fold(f64::MIN, f64::max)
            .max(f64::EPSILON);
        let max_life = candidates
            .iter()
            .map(|c| c.battery_spec.cycle_life as f64)
            .fold(f64::MIN, f64::max)
            .max(f64::EPSILON);
        let max_efficiency = candidates
            .iter()
            .map(|c| c.battery_spec.round_trip_efficiency())
            .fold(f64::MIN, f64::max)
            .max(f64::EPSILON);
        let max_inv_cost = candidates
            .iter()
            .map(|c| 1.0 / c.system_cost.max(f64::EPSILON))
            .fold(f64::MIN, f64::max)
            .max(f64::EPSILON);

        let mut best = 0;
        let mut best_score = f64::MIN;
        for (i, candidate) in candidates.iter().enumerate() {
            let score = SELECTION_CAPACITY_WEIGHT * candidate.total_capacity_kwh / max_capacity
                + SELECTION_LIFETIME_WEIGHT * candidate.battery_spec.cycle_life as f64 / max_life
                + SELECTION_EFFICIENCY_WEIGHT * candidate.battery_spec.round_trip_efficiency()
                    / max_efficiency
                + SELECTION_COST_WEIGHT * (1.0 / candidate.system_cost.max(f64::EPSILON))
                    / max_inv_cost;
            if score > best_score {
                best_score = score;
                best = i;
            }
        }
        best
    }

    /// Lowest installed cost.
    pub fn cheapest(candidates: &[StorageConfiguration]) -> Option<&StorageConfiguration> {
        candidates
            .iter()
            .min_by(|a, b| a.system_cost.total_cmp(&b.system_cost))
    }

    /// Highest lifetime energy throughput per euro.
    pub fn best_roi(candidates: &[StorageConfiguration]) -> Option<&StorageConfiguration> {
        candidates.iter().max_by(|a, b| {
            (a.lifetime_throughput_kwh() / a.system_cost.max(f64::EPSILON))
                .total_cmp(&(b.lifetime_throughput_kwh() / b.system_cost.max(f64::EPSILON)))
        })
    }

    /// Highest rated cycle life.
    pub fn most_reliable(candidates: &[StorageConfiguration]) -> Option<&StorageConfiguration> {
        candidates
            .iter()
            .max_by_key(|c| c.battery_spec.cycle_life)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::battery::BatterySpec;

    fn spec(model: &str, capacity: f64, power: f64, cost: f64, loss: f64, cycles: u32) -> BatterySpec {
        BatterySpec {
            model: model.to_string(),
            capacity_kwh: capacity,
            max_power_kw: power,
            cost,
            round_trip_loss_pct: loss,
            cycle_life: cycles,
            depth_of_discharge_pct: 90.0,
        }
    }

    fn reference_profile() -> LoadProfile {
        LoadProfile::flat(5.0, 20.0, 10.0, 8.0)
    }

    fn reference_params() -> SizingParameters {
        SizingParameters {
            autonomy_hours: 8.0,
            depth_of_discharge_pct: 90.0,
            system_efficiency_pct: 95.0,
            redundancy_factor: 1.1,
            peak_power_factor: 1.2,
            future_expansion_pct: 0.0,
        }
    }

    #[test]
    fn test_required_capacity_reference_case() {
        // ceil(10 * 8 / 0.9 / 0.95 * 1.1) = 103 kWh
        let requirements =
            BatterySizer::calc_requirements(&reference_profile(), &reference_params());
        assert_eq!(requirements.required_capacity_kwh, 103.0);
    }

    #[test]
    fn test_required_power_uses_peak() {
        // ceil(max(20, 10) * 1.2 / 0.95) = 26 kW
        let requirements =
            BatterySizer::calc_requirements(&reference_profile(), &reference_params());
        assert_eq!(requirements.required_power_kw, 26.0);
    }

    #[test]
    fn test_recommended_backup_time_covers_request() {
        let catalog = BatteryCatalog::standard();
        let sizer = BatterySizer::new(&catalog);
        let sized = sizer.size(&reference_profile(), &reference_params()).unwrap();
        assert!(sized.recommended.backup_time_hours >= 8.0);
        for alt in &sized.alternatives {
            assert!(alt.backup_time_hours >= 8.0);
        }
    }

    #[test]
    fn test_quantity_within_bounds() {
        let catalog = BatteryCatalog::standard();
        let sizer = BatterySizer::new(&catalog);
        let sized = sizer.size(&reference_profile(), &reference_params()).unwrap();
        for config in std::iter::once(&sized.recommended).chain(sized.alternatives.iter()) {
            assert!(config.quantity >= 1);
            assert!(config.quantity <= MAX_BATTERIES);
        }
    }

    #[test]
    fn test_oversized_demand_rejects_small_units() {
        // One tiny model only; a large load pushes quantity past the cap.
        let catalog = BatteryCatalog::from_entries(vec![spec("tiny", 1.0, 0.5, 600.0, 8.0, 4000)]);
        let sizer = BatterySizer::new(&catalog);
        let profile = LoadProfile::flat(50.0, 200.0, 100.0, 8.0);
        assert!(sizer.size(&profile, &reference_params()).is_err());
    }

    #[test]
    fn test_tight_fit_gets_cost_penalty_not_rejection() {
        // Unit sized so the bank lands between required and required * redundancy.
        let catalog = BatteryCatalog::from_entries(vec![spec("tight", 103.0, 60.0, 30_000.0, 8.0, 5000)]);
        let sizer = BatterySizer::new(&catalog);
        let sized = sizer.size(&reference_profile(), &reference_params()).unwrap();
        assert!(sized.recommended.cost_penalized);
        assert!((sized.recommended.system_cost - 30_000.0 * UNDERSIZED_COST_PENALTY).abs() < 1e-6);
    }

    #[test]
    fn test_independent_selectors() {
        // A cheapest, B best throughput per euro, C highest cycle count.
        let requirements = SizingRequirements {
            required_capacity_kwh: 100.0,
            required_power_kw: 20.0,
        };
        let params = reference_params();
        let a = BatterySizer::build_configuration(
            &spec("A", 100.0, 50.0, 20_000.0, 10.0, 3000),
            &requirements,
            &params,
            10.0,
        )
        .unwrap();
        let b = BatterySizer::build_configuration(
            &spec("B", 120.0, 60.0, 25_000.0, 6.0, 6000),
            &requirements,
            &params,
            10.0,
        )
        .unwrap();
        let c = BatterySizer::build_configuration(
            &spec("C", 110.0, 55.0, 40_000.0, 7.0, 9000),
            &requirements,
            &params,
            10.0,
        )
        .unwrap();
        let candidates = vec![a, b, c];

        assert_eq!(BatterySizer::cheapest(&candidates).unwrap().battery_spec.model, "A");
        assert_eq!(BatterySizer::best_roi(&candidates).unwrap().battery_spec.model, "B");
        assert_eq!(
            BatterySizer::most_reliable(&candidates).unwrap().battery_spec.model,
            "C"
        );
    }
}
