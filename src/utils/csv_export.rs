use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::models::system::{AnalysisResult, EvaluatedConfiguration};

/// Writes the candidate comparison table next to the report, one row per
/// generated candidate with the recommendation first.
pub fn export_comparison(result: &AnalysisResult, output_dir: &str) -> Result<String> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = Path::new(output_dir).join(format!("comparison_{}.csv", timestamp));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating csv file {:?}", path))?;

    writer.write_record([
        "rank",
        "system_type",
        "total_cost_eur",
        "lcoe_eur_per_kwh",
        "npv_eur",
        "irr_pct",
        "mirr_pct",
        "simple_payback_years",
        "carbon_kg_per_year",
        "reliability_index",
        "annual_peak_shaving_kwh",
        "score",
    ])?;

    write_row(&mut writer, 1, &result.recommended)?;
    for (i, candidate) in result.alternatives.iter().enumerate() {
        write_row(&mut writer, i + 2, candidate)?;
    }
    writer.flush()?;

    let path_str = path.to_string_lossy().to_string();
    info!(path = %path_str, "exported comparison table");
    Ok(path_str)
}

fn write_row(
    writer: &mut csv::Writer<std::fs::File>,
    rank: usize,
    candidate: &EvaluatedConfiguration,
) -> Result<()> {
    let config = &candidate.configuration;
    writer.write_record([
        rank.to_string(),
        config.system_type.to_string(),
        format!("{:.2}", config.total_cost),
        format!("{:.4}", candidate.financial.lcoe),
        format!("{:.2}", candidate.financial.npv),
        format!("{:.2}", candidate.financial.irr * 100.0),
        format!("{:.2}", candidate.financial.mirr * 100.0),
        format!("{:.2}", candidate.financial.simple_payback_years),
        format!("{:.1}", config.carbon_footprint_kg_per_year),
        format!("{:.3}", config.reliability_index),
        format!("{:.1}", candidate.annual_peak_shaving_kwh),
        format!("{:.4}", candidate.score),
    ])?;
    Ok(())
}
