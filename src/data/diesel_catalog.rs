use serde::{Deserialize, Serialize};
use crate::models::diesel::DieselSpec;

/// Read-only diesel generator table, injected like the battery catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieselCatalog {
    entries: Vec<DieselSpec>,
}

impl DieselCatalog {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                DieselSpec {
                    model: "DG-10".to_string(),
                    rated_power_kw: 10.0,
                    cost: 6_500.0,
                    fuel_consumption_l_per_h: 3.2,
                    maintenance_cost_per_year: 450.0,
                },
                DieselSpec {
                    model: "DG-20".to_string(),
                    rated_power_kw: 20.0,
                    cost: 11_000.0,
                    fuel_consumption_l_per_h: 6.1,
                    maintenance_cost_per_year: 700.0,
                },
                DieselSpec {
                    model: "DG-50".to_string(),
                    rated_power_kw: 50.0,
                    cost: 21_500.0,
                    fuel_consumption_l_per_h: 14.4,
                    maintenance_cost_per_year: 1_300.0,
                },
                DieselSpec {
                    model: "DG-100".to_string(),
                    rated_power_kw: 100.0,
                    cost: 38_000.0,
                    fuel_consumption_l_per_h: 27.8,
                    maintenance_cost_per_year: 2_200.0,
                },
                DieselSpec {
                    model: "DG-250".to_string(),
                    rated_power_kw: 250.0,
                    cost: 82_000.0,
                    fuel_consumption_l_per_h: 66.0,
                    maintenance_cost_per_year: 4_800.0,
                },
            ],
        }
    }

    pub fn from_entries(entries: Vec<DieselSpec>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DieselSpec] {
        &self.entries
    }

    /// Smallest unit whose rating covers the requirement, falling back to
    /// the largest unit in the table when nothing qualifies.
    pub fn select_for_power(&self, required_kw: f64) -> Option<&DieselSpec> {
        let qualifying = self
            .entries
            .iter()
            .filter(|spec| spec.rated_power_kw >= required_kw)
            .min_by(|a, b| a.rated_power_kw.total_cmp(&b.rated_power_kw));

        qualifying.or_else(|| {
            self.entries
                .iter()
                .max_by(|a, b| a.rated_power_kw.total_cmp(&b.rated_power_kw))
        })
    }
}
