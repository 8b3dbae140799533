use anyhow::{Context, Result};
use clap::Parser;

use hesopt::analysis::reporting;
use hesopt::cli::cli::Args;
use hesopt::config::engine_config::EngineSettings;
use hesopt::core::orchestrator::MultiSystemOrchestrator;
use hesopt::data::battery_catalog::BatteryCatalog;
use hesopt::data::diesel_catalog::DieselCatalog;
use hesopt::models::load_profile::LoadProfile;
use hesopt::models::system::AnalysisRequest;
use hesopt::utils::{csv_export, logging};
use hesopt::utils::logging::OperationCategory;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.enable_timing());

    println!("Hybrid Energy System Optimizer");

    let request = load_request(args.request())?;

    let mut settings = EngineSettings::default();
    if let Some(days) = args.simulation_days() {
        settings.simulation.days = days;
    }

    let battery_catalog = BatteryCatalog::standard();
    let diesel_catalog = DieselCatalog::standard();
    let orchestrator = MultiSystemOrchestrator::new(&battery_catalog, &diesel_catalog, settings);

    let result = {
        let _timing = logging::start_timing("analyze", OperationCategory::Generation);
        orchestrator
            .analyze(&request)
            .context("analysis failed")?
    };

    if args.json() {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reporting::print_analysis_summary(&result);
    }

    if args.enable_csv_export() {
        let path = csv_export::export_comparison(&result, args.output_dir())?;
        println!("\nComparison table written to {}", path);
    }

    logging::print_timing_report();
    Ok(())
}

fn load_request(path: Option<&str>) -> Result<AnalysisRequest> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading request file {}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing request file {}", path))
        }
        None => {
            eprintln!("No request file given, using the built-in demo request.");
            Ok(demo_request())
        }
    }
}

// A small commercial site: 120 kWh/day, 20 kW peak, 10 kW essential.
fn demo_request() -> AnalysisRequest {
    let mut hourly = [3.0; 24];
    for hour in 8..18 {
        hourly[hour] = 7.0;
    }
    for hour in 18..22 {
        hourly[hour] = 9.0;
    }
    let daily = hourly.iter().sum();

    AnalysisRequest {
        load_profile: LoadProfile {
            hourly_consumption: hourly,
            daily_consumption: daily,
            peak_power: 20.0,
            essential_loads: 10.0,
            backup_duration_hours: 8.0,
        },
        solar_template: None,
        allowed_types: None,
        weights: None,
        economics: None,
    }
}
