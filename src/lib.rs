// Module declarations for the hybrid energy system engine

// Core sizing, generation and orchestration modules
pub mod core {
    pub mod battery_sizer;
    pub mod config_generator;
    pub mod operation_sim;
    pub mod orchestrator;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
    pub mod engine_config;
    pub mod system_type;
}

// Model definitions
pub mod models {
    pub mod battery;
    pub mod diesel;
    pub mod load_profile;
    pub mod solar;
    pub mod system;
}

// Static equipment catalogs
pub mod data {
    pub mod battery_catalog;
    pub mod diesel_catalog;
}

// Analysis and metrics
pub mod analysis {
    pub mod financial;
    pub mod reporting;
    pub mod scoring;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

pub mod error;

// Re-export commonly used types
pub use crate::core::orchestrator::MultiSystemOrchestrator;
pub use crate::config::system_type::SystemType;
pub use crate::models::load_profile::LoadProfile;
pub use crate::models::system::{AnalysisRequest, AnalysisResult};
pub use crate::error::{EngineError, Result};
