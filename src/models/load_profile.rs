use serde::{Deserialize, Serialize};
use crate::error::{EngineError, Result};

/// Electrical demand to be served, expressed per hour of a representative day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadProfile {
    pub hourly_consumption: [f64; 24],   // kWh per hour
    pub daily_consumption: f64,          // kWh per day
    pub peak_power: f64,                 // kW
    pub essential_loads: f64,            // kW that must survive an outage
    pub backup_duration_hours: f64,
}

impl LoadProfile {
    /// Builds a flat profile, mostly useful for tests and CLI fallbacks.
    pub fn flat(hourly_kwh: f64, peak_power: f64, essential_loads: f64, backup_hours: f64) -> Self {
        Self {
            hourly_consumption: [hourly_kwh; 24],
            daily_consumption: hourly_kwh * 24.0,
            peak_power,
            essential_loads,
            backup_duration_hours: backup_hours,
        }
    }

    /// Fail-fast validation, run before any sizing work starts.
    pub fn validate(&self) -> Result<()> {
        for (hour, &value) in self.hourly_consumption.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation(format!(
                    "hourly consumption at hour {} must be finite and non-negative, got {}",
                    hour, value
                )));
            }
        }
        for (name, value) in [
            ("daily_consumption", self.daily_consumption),
            ("peak_power", self.peak_power),
            ("essential_loads", self.essential_loads),
            ("backup_duration_hours", self.backup_duration_hours),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile_is_valid() {
        let profile = LoadProfile::flat(5.0, 20.0, 10.0, 8.0);
        assert!(profile.validate().is_ok());
        assert_eq!(profile.daily_consumption, 120.0);
    }

    #[test]
    fn test_negative_hourly_rejected() {
        let mut profile = LoadProfile::flat(5.0, 20.0, 10.0, 8.0);
        profile.hourly_consumption[3] = -1.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_nan_peak_rejected() {
        let mut profile = LoadProfile::flat(5.0, 20.0, 10.0, 8.0);
        profile.peak_power = f64::NAN;
        assert!(profile.validate().is_err());
    }
}
