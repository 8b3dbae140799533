use crate::config::system_type::SystemType;
use crate::models::system::{AnalysisResult, EvaluatedConfiguration};

pub fn print_analysis_summary(result: &AnalysisResult) {
    let recommended = &result.recommended;
    println!("\nRecommended Configuration");
    println!("----------------------------------------");
    println!("System Type: {}", recommended.configuration.system_type.display_name());
    print_candidate(recommended);

    println!("\nComparative Metrics ({} candidates)", result.comparative.candidate_count);
    println!("  Mean LCOE: {:.4} EUR/kWh", result.comparative.mean_lcoe);
    println!("  Mean Reliability Index: {:.3}", result.comparative.mean_reliability_index);
    println!("  Mean Carbon Footprint: {:.1} kg/yr", result.comparative.mean_carbon_footprint_kg);
    println!(
        "  Grid-Only Baseline: EUR {:.2}/yr",
        result.comparative.baseline_annual_grid_cost
    );

    println!("\nOperational Scenarios");
    println!("----------------------------------------");
    for scenario in &result.scenarios {
        println!(
            "{}: solar {:.0}%, battery {:.0}%, diesel {:.0}%, grid {:.0}%",
            scenario.kind.display_name(),
            scenario.solar_pct,
            scenario.battery_pct,
            scenario.diesel_pct,
            scenario.grid_pct,
        );
    }

    let (pros, cons) = pros_and_cons(recommended.configuration.system_type);
    println!("\nPros:");
    for pro in pros {
        println!("  + {}", pro);
    }
    println!("Cons:");
    for con in cons {
        println!("  - {}", con);
    }
    println!("\nAlternatives considered: {}", result.alternatives.len());
}

fn print_candidate(candidate: &EvaluatedConfiguration) {
    let config = &candidate.configuration;
    if let Some(solar) = &config.solar {
        println!("  Solar: {:.1} kWp", solar.capacity_kwp);
    }
    if let Some(storage) = &config.storage {
        println!(
            "  Storage: {} x {} ({:.1} kWh / {:.1} kW, backup {:.1} h)",
            storage.quantity,
            storage.battery_spec.model,
            storage.total_capacity_kwh,
            storage.total_power_kw,
            storage.backup_time_hours,
        );
    }
    if let Some(diesel) = &config.diesel {
        println!(
            "  Diesel: {} ({:.0} kW rated)",
            diesel.diesel_spec.model, diesel.diesel_spec.rated_power_kw
        );
    }
    println!("Financial Metrics:");
    println!("  Total Cost: EUR {:.2}", config.total_cost);
    println!("  NPV: EUR {:.2}", candidate.financial.npv);
    println!("  IRR: {:.2}%", candidate.financial.irr * 100.0);
    println!("  MIRR: {:.2}%", candidate.financial.mirr * 100.0);
    println!("  Simple Payback: {:.1} years", candidate.financial.simple_payback_years);
    println!("  LCOE: {:.4} EUR/kWh", candidate.financial.lcoe);
    println!("Environmental Metrics:");
    println!("  Carbon Footprint: {:.1} kg/yr", config.carbon_footprint_kg_per_year);
    println!("Reliability Index: {:.3}", config.reliability_index);
    println!("Score: {:.4}", candidate.score);
}

/// Presentation strings per system type, matched exhaustively so a new
/// combination cannot be forgotten here.
pub fn pros_and_cons(system_type: SystemType) -> (Vec<&'static str>, Vec<&'static str>) {
    match system_type {
        SystemType::Solar => (
            vec!["No fuel costs", "Lowest maintenance burden", "Zero operating emissions"],
            vec!["No supply after dark", "No backup during outages"],
        ),
        SystemType::Battery => (
            vec!["Peak shaving on every tariff day", "Silent operation"],
            vec!["No generation of its own", "Limited backup duration"],
        ),
        SystemType::Diesel => (
            vec!["Dispatchable at any hour", "Low upfront cost"],
            vec!["Continuous fuel expense", "Highest emissions per kWh"],
        ),
        SystemType::SolarBattery => (
            vec!["Solar self-consumption around the clock", "No fuel costs"],
            vec!["Backup bounded by battery capacity", "Weather-dependent recharge"],
        ),
        SystemType::SolarDiesel => (
            vec!["Daytime solar with firm diesel backup"],
            vec!["No storage to shift solar surplus", "Fuel costs persist"],
        ),
        SystemType::BatteryDiesel => (
            vec!["Firm backup with quiet daily cycling"],
            vec!["No renewable generation", "Fuel and battery replacement costs"],
        ),
        SystemType::SolarBatteryDiesel => (
            vec![
                "Highest reliability of any combination",
                "Solar-first dispatch minimizes fuel burn",
            ],
            vec!["Highest upfront investment", "Three subsystems to maintain"],
        ),
    }
}
