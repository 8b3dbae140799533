use tracing::debug;

use crate::config::const_funcs;
use crate::config::constants::*;
use crate::config::engine_config::SizingParameters;
use crate::config::system_type::SystemType;
use crate::core::battery_sizer::BatterySizer;
use crate::data::battery_catalog::BatteryCatalog;
use crate::data::diesel_catalog::DieselCatalog;
use crate::models::diesel::DieselConfiguration;
use crate::models::load_profile::LoadProfile;
use crate::models::solar::SolarSpec;
use crate::models::system::{ControlStrategy, SystemConfiguration};

/// Enumerates hybrid system candidates over the fixed sizing grids.
///
/// A hybrid type walks the Cartesian product of solar factor, battery
/// autonomy and diesel factor; single- and two-source types reuse the same
/// generator with the absent axes collapsed, which zeroes the absent
/// sub-objects and their cost, fuel and carbon terms.
pub struct ConfigurationGenerator<'a> {
    battery_catalog: &'a BatteryCatalog,
    diesel_catalog: &'a DieselCatalog,
    sizing: &'a SizingParameters,
}

impl<'a> ConfigurationGenerator<'a> {
    pub fn new(
        battery_catalog: &'a BatteryCatalog,
        diesel_catalog: &'a DieselCatalog,
        sizing: &'a SizingParameters,
    ) -> Self {
        Self {
            battery_catalog,
            diesel_catalog,
            sizing,
        }
    }

    /// All candidates for one system type. Construction failures drop the
    /// candidate, never the whole enumeration.
    pub fn generate(
        &self,
        system_type: SystemType,
        profile: &LoadProfile,
        solar_template: Option<&SolarSpec>,
    ) -> Vec<SystemConfiguration> {
        let solar_axis: &[f64] = if system_type.has_solar() {
            &SOLAR_SIZING_FACTORS
        } else {
            &[0.0]
        };
        let autonomy_axis: &[f64] = if system_type.has_storage() {
            &AUTONOMY_GRID_HOURS
        } else {
            &[0.0]
        };
        let diesel_axis: &[f64] = if system_type.has_diesel() {
            &DIESEL_SIZING_FACTORS
        } else {
            &[0.0]
        };

        let mut candidates = Vec::new();
        for &solar_factor in solar_axis {
            for &autonomy_hours in autonomy_axis {
                for &diesel_factor in diesel_axis {
                    match self.build_candidate(
                        system_type,
                        profile,
                        solar_template,
                        solar_factor,
                        autonomy_hours,
                        diesel_factor,
                    ) {
                        Some(candidate) => candidates.push(candidate),
                        None => debug!(
                            %system_type, solar_factor, autonomy_hours, diesel_factor,
                            "candidate construction failed, dropping"
                        ),
                    }
                }
            }
        }
        candidates
    }

    fn build_candidate(
        &self,
        system_type: SystemType,
        profile: &LoadProfile,
        solar_template: Option<&SolarSpec>,
        solar_factor: f64,
        autonomy_hours: f64,
        diesel_factor: f64,
    ) -> Option<SystemConfiguration> {
        let solar = if system_type.has_solar() {
            Some(self.build_solar(profile, solar_template, solar_factor)?)
        } else {
            None
        };

        let storage = if system_type.has_storage() {
            let params = SizingParameters {
                autonomy_hours,
                ..self.sizing.clone()
            };
            let sizer = BatterySizer::new(self.battery_catalog);
            Some(sizer.size(profile, &params).ok()?.recommended)
        } else {
            None
        };

        let diesel = if system_type.has_diesel() {
            let required_kw = profile.peak_power * diesel_factor;
            let spec = self.diesel_catalog.select_for_power(required_kw)?;
            Some(DieselConfiguration {
                diesel_spec: spec.clone(),
                required_power_kw: required_kw,
                sizing_factor: diesel_factor,
            })
        } else {
            None
        };

        let solar_cost = solar
            .as_ref()
            .map(|s| const_funcs::calc_solar_cost(s.capacity_kwp))
            .unwrap_or(0.0);
        let storage_cost = storage.as_ref().map(|s| s.system_cost).unwrap_or(0.0);
        let diesel_cost = diesel.as_ref().map(|d| d.diesel_spec.cost).unwrap_or(0.0);
        let total_cost = solar_cost + storage_cost + diesel_cost;
        if total_cost <= 0.0 {
            return None;
        }

        let fuel_litres = diesel
            .as_ref()
            .map(|d| const_funcs::calc_diesel_annual_fuel_litres(d.diesel_spec.fuel_consumption_l_per_h))
            .unwrap_or(0.0);
        let annual_fuel_cost = diesel
            .as_ref()
            .map(|d| const_funcs::calc_diesel_annual_fuel_cost(d.diesel_spec.fuel_consumption_l_per_h))
            .unwrap_or(0.0);

        let annual_maintenance_cost = solar_cost * SOLAR_MAINTENANCE_RATE
            + storage_cost * STORAGE_MAINTENANCE_RATE
            + diesel
                .as_ref()
                .map(|d| d.diesel_spec.maintenance_cost_per_year)
                .unwrap_or(0.0);

        let solar_kwp = solar.as_ref().map(|s| s.capacity_kwp).unwrap_or(0.0);
        let carbon_footprint_kg_per_year = const_funcs::calc_carbon_footprint(fuel_litres, solar_kwp);

        let solar_production = solar
            .as_ref()
            .map(|s| s.annual_production_kwh())
            .unwrap_or(0.0);
        let diesel_production = diesel
            .as_ref()
            .map(|d| const_funcs::calc_diesel_annual_energy_kwh(d.diesel_spec.rated_power_kw))
            .unwrap_or(0.0);
        let storage_throughput = storage
            .as_ref()
            .map(|s| {
                s.total_capacity_kwh
                    * (s.battery_spec.depth_of_discharge_pct / 100.0)
                    * STORAGE_EFFECTIVE_CYCLES_PER_YEAR
            })
            .unwrap_or(0.0);
        let annual_energy_production_kwh = solar_production + diesel_production + storage_throughput;

        let candidate = SystemConfiguration {
            system_type,
            solar,
            storage,
            diesel,
            control_strategy: ControlStrategy::default(),
            total_cost,
            annual_energy_production_kwh,
            annual_fuel_cost,
            annual_maintenance_cost,
            carbon_footprint_kg_per_year,
            reliability_index: const_funcs::calc_reliability_index(system_type),
        };
        debug_assert!(candidate.shape_matches_type());
        Some(candidate)
    }

    /// Sizes the PV array from the inflated daily-consumption basis.
    fn build_solar(
        &self,
        profile: &LoadProfile,
        template: Option<&SolarSpec>,
        solar_factor: f64,
    ) -> Option<SolarSpec> {
        let peak_sun_hours = template
            .map(|t| t.peak_sun_hours())
            .unwrap_or(PEAK_SUN_HOURS_DEFAULT);
        let daily_basis = profile.daily_consumption * solar_factor * SOLAR_BASIS_INFLATION;
        let capacity_kwp = const_funcs::calc_solar_capacity_kwp(daily_basis, peak_sun_hours);
        if capacity_kwp <= 0.0 {
            return None;
        }

        Some(match template {
            Some(t) => SolarSpec {
                capacity_kwp,
                ..t.clone()
            },
            None => SolarSpec::template(capacity_kwp),
        })
    }
}
