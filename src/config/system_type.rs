// System type module - closed tagged union over subsystem combinations
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Every supported combination of {solar PV, battery storage, diesel}.
///
/// Scoring, reporting and scenario code match exhaustively on this enum so
/// adding a combination is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    Solar,
    Battery,
    Diesel,
    SolarBattery,
    SolarDiesel,
    BatteryDiesel,
    SolarBatteryDiesel,
}

impl SystemType {
    pub fn all() -> [SystemType; 7] {
        [
            SystemType::Solar,
            SystemType::Battery,
            SystemType::Diesel,
            SystemType::SolarBattery,
            SystemType::SolarDiesel,
            SystemType::BatteryDiesel,
            SystemType::SolarBatteryDiesel,
        ]
    }

    pub fn has_solar(&self) -> bool {
        matches!(
            self,
            SystemType::Solar
                | SystemType::SolarBattery
                | SystemType::SolarDiesel
                | SystemType::SolarBatteryDiesel
        )
    }

    pub fn has_storage(&self) -> bool {
        matches!(
            self,
            SystemType::Battery
                | SystemType::SolarBattery
                | SystemType::BatteryDiesel
                | SystemType::SolarBatteryDiesel
        )
    }

    pub fn has_diesel(&self) -> bool {
        matches!(
            self,
            SystemType::Diesel
                | SystemType::SolarDiesel
                | SystemType::BatteryDiesel
                | SystemType::SolarBatteryDiesel
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SystemType::Solar => "Solar PV",
            SystemType::Battery => "Battery Storage",
            SystemType::Diesel => "Diesel Generator",
            SystemType::SolarBattery => "Solar + Battery",
            SystemType::SolarDiesel => "Solar + Diesel",
            SystemType::BatteryDiesel => "Battery + Diesel",
            SystemType::SolarBatteryDiesel => "Solar + Battery + Diesel",
        }
    }
}

impl FromStr for SystemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Solar" => Ok(SystemType::Solar),
            "Battery" => Ok(SystemType::Battery),
            "Diesel" => Ok(SystemType::Diesel),
            "SolarBattery" => Ok(SystemType::SolarBattery),
            "SolarDiesel" => Ok(SystemType::SolarDiesel),
            "BatteryDiesel" => Ok(SystemType::BatteryDiesel),
            "SolarBatteryDiesel" => Ok(SystemType::SolarBatteryDiesel),
            _ => Err(format!("Unknown system type: {}", s)),
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SystemType::Solar => write!(f, "Solar"),
            SystemType::Battery => write!(f, "Battery"),
            SystemType::Diesel => write!(f, "Diesel"),
            SystemType::SolarBattery => write!(f, "SolarBattery"),
            SystemType::SolarDiesel => write!(f, "SolarDiesel"),
            SystemType::BatteryDiesel => write!(f, "BatteryDiesel"),
            SystemType::SolarBatteryDiesel => write!(f, "SolarBatteryDiesel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_presence() {
        assert!(SystemType::SolarBatteryDiesel.has_solar());
        assert!(SystemType::SolarBatteryDiesel.has_storage());
        assert!(SystemType::SolarBatteryDiesel.has_diesel());
        assert!(!SystemType::Battery.has_solar());
        assert!(!SystemType::SolarDiesel.has_storage());
        assert!(!SystemType::SolarBattery.has_diesel());
    }

    #[test]
    fn test_roundtrip_names() {
        for ty in SystemType::all() {
            let parsed: SystemType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }
}
