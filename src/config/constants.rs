// Battery Sizing Constants
pub const MAX_BATTERIES: usize = 40;               // Hard cap on units per bank
pub const INVERTER_EFFICIENCY: f64 = 0.95;         // Assumed inverter efficiency for power sizing
pub const UNDERSIZED_COST_PENALTY: f64 = 1.15;     // Cost multiplier for marginally adequate banks

// Battery Selection Score Weights
pub const SELECTION_CAPACITY_WEIGHT: f64 = 0.30;
pub const SELECTION_LIFETIME_WEIGHT: f64 = 0.25;
pub const SELECTION_EFFICIENCY_WEIGHT: f64 = 0.25;
pub const SELECTION_COST_WEIGHT: f64 = 0.20;

// Configuration Enumeration Grids
pub const SOLAR_SIZING_FACTORS: [f64; 4] = [0.5, 0.75, 1.0, 1.25];
pub const AUTONOMY_GRID_HOURS: [f64; 4] = [4.0, 8.0, 12.0, 24.0];
pub const DIESEL_SIZING_FACTORS: [f64; 3] = [0.5, 0.75, 1.0];
pub const SOLAR_BASIS_INFLATION: f64 = 1.2;        // Oversizing applied to the daily-consumption basis
pub const PEAK_SUN_HOURS_DEFAULT: f64 = 4.5;       // Used when no irradiance template is supplied

// Solar Constants
pub const SOLAR_COST_PER_KWP: f64 = 900.0;         // Installed cost, euros per kWp
pub const SOLAR_MAX_CAPACITY_KWP: f64 = 10_000.0;  // Upper bound accepted from a request template
pub const SOLAR_PANEL_EFFICIENCY: f64 = 0.21;
pub const SOLAR_INVERTER_EFFICIENCY: f64 = 0.97;
pub const SOLAR_SYSTEM_LOSSES: f64 = 0.14;
pub const SOLAR_DEFAULT_TILT_DEG: f64 = 30.0;
pub const SOLAR_DEFAULT_AZIMUTH_DEG: f64 = 180.0;
pub const SOLAR_EMBODIED_CARBON_KG_PER_KWP: f64 = 25.0;  // Amortized manufacturing CO2 per year

// Control Strategy Defaults
pub const DIESEL_CUTIN_SOC: f64 = 0.20;            // Diesel kicks in below this SOC
pub const DEFAULT_MIN_SOC: f64 = 0.20;
pub const DEFAULT_MAX_SOC: f64 = 0.95;
pub const DEFAULT_START_SOC: f64 = 0.50;
pub const OFFPEAK_WINDOW_START: usize = 0;         // Off-peak charging window, inclusive hours
pub const OFFPEAK_WINDOW_END: usize = 6;
pub const PEAK_WINDOW_START: usize = 18;           // Peak shaving window, inclusive hours
pub const PEAK_WINDOW_END: usize = 21;
pub const SHAVING_THRESHOLD: f64 = 0.80;           // Fraction of rated power that triggers shaving
pub const CHARGE_RATE_FRACTION: f64 = 0.25;        // Max charge per hour as a fraction of capacity

// Reliability Index Weights (presence of subsystem)
pub const RELIABILITY_SOLAR_WEIGHT: f64 = 0.25;
pub const RELIABILITY_STORAGE_WEIGHT: f64 = 0.45;
pub const RELIABILITY_DIESEL_WEIGHT: f64 = 0.30;
pub const NO_DIESEL_RELIABILITY_PENALTY: f64 = 0.85;

// Scoring Normalization Divisors
pub const COST_SCORE_DIVISOR: f64 = 100_000.0;
pub const CARBON_SCORE_DIVISOR: f64 = 1_000.0;
pub const MAINTENANCE_SCORE_DIVISOR: f64 = 10_000.0;
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// Diesel Constants
pub const DIESEL_FUEL_PRICE_PER_LITRE: f64 = 1.50;
pub const DIESEL_CO2_KG_PER_LITRE: f64 = 2.68;
pub const DIESEL_RUNTIME_HOURS_PER_YEAR: f64 = 200.0;  // Expected backup runtime

// Maintenance Rates (fraction of capex per year)
pub const SOLAR_MAINTENANCE_RATE: f64 = 0.010;
pub const STORAGE_MAINTENANCE_RATE: f64 = 0.005;

// Storage Throughput Estimate
pub const STORAGE_EFFECTIVE_CYCLES_PER_YEAR: f64 = 250.0;

// Economic Defaults
pub const DEFAULT_ELECTRICITY_TARIFF: f64 = 0.25;  // euros per kWh
pub const DEFAULT_DEMAND_TARIFF: f64 = 12.0;       // euros per kW per month
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;
pub const DEFAULT_ANALYSIS_PERIOD_YEARS: usize = 20;
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

// IRR Solver Constants
pub const IRR_INITIAL_GUESS: f64 = 0.10;
pub const IRR_MAX_ITERATIONS: usize = 100;
pub const IRR_NPV_TOLERANCE: f64 = 1e-4;
pub const IRR_MIN_DERIVATIVE: f64 = 1e-5;

// Simulation Defaults
pub const DEFAULT_SIMULATION_DAYS: usize = 7;
pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const AVG_DAYS_PER_MONTH: f64 = 30.4;
