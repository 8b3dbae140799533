use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::error::{EngineError, Result};

/// A sized PV array. Monthly irradiance is in kWh/m²/month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarSpec {
    pub capacity_kwp: f64,
    pub panel_efficiency: f64,
    pub inverter_efficiency: f64,
    pub system_losses: f64,
    pub tilt_deg: f64,
    pub azimuth_deg: f64,
    pub monthly_irradiance: [f64; 12],
}

impl SolarSpec {
    /// Template with default electrical parameters and a flat irradiance
    /// profile equivalent to the default peak sun hours.
    pub fn template(capacity_kwp: f64) -> Self {
        Self {
            capacity_kwp,
            panel_efficiency: SOLAR_PANEL_EFFICIENCY,
            inverter_efficiency: SOLAR_INVERTER_EFFICIENCY,
            system_losses: SOLAR_SYSTEM_LOSSES,
            tilt_deg: SOLAR_DEFAULT_TILT_DEG,
            azimuth_deg: SOLAR_DEFAULT_AZIMUTH_DEG,
            monthly_irradiance: [PEAK_SUN_HOURS_DEFAULT * AVG_DAYS_PER_MONTH; 12],
        }
    }

    /// Average peak sun hours per day implied by the irradiance profile.
    pub fn peak_sun_hours(&self) -> f64 {
        let monthly_mean: f64 =
            self.monthly_irradiance.iter().sum::<f64>() / MONTHS_PER_YEAR;
        monthly_mean / AVG_DAYS_PER_MONTH
    }

    /// Annual AC energy production in kWh.
    pub fn annual_production_kwh(&self) -> f64 {
        self.capacity_kwp * self.peak_sun_hours() * DAYS_PER_YEAR * (1.0 - self.system_losses)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.capacity_kwp.is_finite()
            || self.capacity_kwp <= 0.0
            || self.capacity_kwp > SOLAR_MAX_CAPACITY_KWP
        {
            return Err(EngineError::Validation(format!(
                "solar capacity must be in (0, {}] kWp, got {}",
                SOLAR_MAX_CAPACITY_KWP, self.capacity_kwp
            )));
        }
        for (month, &value) in self.monthly_irradiance.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation(format!(
                    "monthly irradiance for month {} must be finite and non-negative, got {}",
                    month + 1,
                    value
                )));
            }
        }
        Ok(())
    }
}
