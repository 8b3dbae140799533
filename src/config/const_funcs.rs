use crate::config::constants::*;
use crate::config::engine_config::EconomicParameters;
use crate::config::system_type::SystemType;

pub fn calc_inflation_factor(rate: f64, year: usize) -> f64 {
    (1.0 + rate).powi(year as i32)
}

/// Converts a daily energy basis (kWh/day) into array capacity (kWp).
pub fn calc_solar_capacity_kwp(daily_basis_kwh: f64, peak_sun_hours: f64) -> f64 {
    if peak_sun_hours <= 0.0 {
        return 0.0;
    }
    daily_basis_kwh / peak_sun_hours
}

pub fn calc_solar_cost(capacity_kwp: f64) -> f64 {
    capacity_kwp * SOLAR_COST_PER_KWP
}

/// Expected yearly fuel burn in litres for a backup-duty diesel unit.
pub fn calc_diesel_annual_fuel_litres(fuel_consumption_l_per_h: f64) -> f64 {
    fuel_consumption_l_per_h * DIESEL_RUNTIME_HOURS_PER_YEAR
}

pub fn calc_diesel_annual_fuel_cost(fuel_consumption_l_per_h: f64) -> f64 {
    calc_diesel_annual_fuel_litres(fuel_consumption_l_per_h) * DIESEL_FUEL_PRICE_PER_LITRE
}

pub fn calc_diesel_annual_energy_kwh(rated_power_kw: f64) -> f64 {
    rated_power_kw * DIESEL_RUNTIME_HOURS_PER_YEAR
}

/// Yearly CO2 in kg: diesel combustion plus amortized PV manufacturing.
pub fn calc_carbon_footprint(diesel_fuel_litres: f64, solar_capacity_kwp: f64) -> f64 {
    diesel_fuel_litres * DIESEL_CO2_KG_PER_LITRE
        + solar_capacity_kwp * SOLAR_EMBODIED_CARBON_KG_PER_KWP
}

/// Weighted presence-of-subsystem sum, penalized when diesel backup is absent.
pub fn calc_reliability_index(system_type: SystemType) -> f64 {
    let mut index = 0.0;
    if system_type.has_solar() {
        index += RELIABILITY_SOLAR_WEIGHT;
    }
    if system_type.has_storage() {
        index += RELIABILITY_STORAGE_WEIGHT;
    }
    if system_type.has_diesel() {
        index += RELIABILITY_DIESEL_WEIGHT;
    }
    if !system_type.has_diesel() {
        index *= NO_DIESEL_RELIABILITY_PENALTY;
    }
    index
}

/// What the load would cost from the grid alone, per year.
pub fn calc_baseline_annual_cost(
    daily_consumption_kwh: f64,
    peak_power_kw: f64,
    economics: &EconomicParameters,
) -> f64 {
    daily_consumption_kwh * DAYS_PER_YEAR * economics.electricity_tariff
        + peak_power_kw * economics.demand_tariff * MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflation_factor_compounds() {
        assert!((calc_inflation_factor(0.03, 0) - 1.0).abs() < 1e-12);
        assert!((calc_inflation_factor(0.03, 2) - 1.0609).abs() < 1e-9);
    }

    #[test]
    fn test_reliability_index_full_hybrid() {
        let full = calc_reliability_index(SystemType::SolarBatteryDiesel);
        assert!((full - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reliability_penalty_without_diesel() {
        let with = calc_reliability_index(SystemType::BatteryDiesel);
        let without = calc_reliability_index(SystemType::SolarBattery);
        let raw_without = RELIABILITY_SOLAR_WEIGHT + RELIABILITY_STORAGE_WEIGHT;
        assert!((without - raw_without * NO_DIESEL_RELIABILITY_PENALTY).abs() < 1e-9);
        assert!(with > without);
    }

    #[test]
    fn test_solar_capacity_guards_zero_sun() {
        assert_eq!(calc_solar_capacity_kwp(100.0, 0.0), 0.0);
        assert!((calc_solar_capacity_kwp(90.0, 4.5) - 20.0).abs() < 1e-9);
    }
}
