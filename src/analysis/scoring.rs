// Scoring module - normalizes and weight-combines candidate metrics
use crate::config::constants::*;
use crate::config::engine_config::PriorityWeights;
use crate::models::system::SystemConfiguration;

/// Normalized cost term: lower cost gives a higher score in (0, 1].
pub fn cost_score(total_cost: f64) -> f64 {
    1.0 / (total_cost / COST_SCORE_DIVISOR + 1.0)
}

/// Normalized environment term from the yearly carbon footprint.
pub fn environment_score(carbon_kg_per_year: f64) -> f64 {
    1.0 / (carbon_kg_per_year / CARBON_SCORE_DIVISOR + 1.0)
}

/// Normalized maintenance term from the yearly maintenance bill.
pub fn maintenance_score(maintenance_per_year: f64) -> f64 {
    1.0 / (maintenance_per_year / MAINTENANCE_SCORE_DIVISOR + 1.0)
}

/// Weighted multi-criteria score. Weights are taken as supplied; the
/// orchestrator has already checked that they sum to 1.0 within tolerance
/// and no re-normalization happens here.
pub fn score_configuration(config: &SystemConfiguration, weights: &PriorityWeights) -> f64 {
    weights.cost * cost_score(config.total_cost)
        + weights.reliability * config.reliability_index
        + weights.environment * environment_score(config.carbon_footprint_kg_per_year)
        + weights.maintenance * maintenance_score(config.annual_maintenance_cost)
}

/// Index of the maximum score; ties keep the first enumerated candidate.
pub fn select_best(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
