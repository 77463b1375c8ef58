//! Engine configuration.
//!
//! Every constant the calculators use has a default equal to the documented
//! value, so an empty `.unit-economics.toml` reproduces the reference
//! numbers exactly. Sections:
//!
//! - `[simulation]` horizon, decay floor, fallback LTV horizon, healthy payback
//! - `[offer]` strength-score weights and ratio bands
//! - `[benchmarks]` custom industry tables

mod benchmarks;
mod core;
mod loader;
pub mod presets;
mod scoring;
mod simulation;

pub use benchmarks::BenchmarkConfig;
pub use self::core::EngineConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use presets::{merge_preset_with_config, PresetLevel};
pub use scoring::OfferScoringConfig;
pub use simulation::{
    SimulationConfig, DEFAULT_DECAY_FLOOR_PERCENT, DEFAULT_FALLBACK_LTV_MONTHS,
    DEFAULT_HEALTHY_PAYBACK_MONTHS, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS,
};
