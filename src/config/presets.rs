//! Configuration presets for common business profiles.
//!
//! - **Strict**: Demanding offer thresholds, healthy payback within six months
//! - **Balanced**: The documented defaults
//! - **LongCycle**: Five-year horizon for high-LTV, slow-payback businesses
//!
//! # Example
//!
//! ```rust
//! use unit_economics::config::PresetLevel;
//!
//! let config = PresetLevel::LongCycle.to_config();
//! assert_eq!(config.simulation.horizon_months, 60);
//! ```

use serde::{Deserialize, Serialize};

use super::core::EngineConfig;
use super::scoring::OfferScoringConfig;
use super::simulation::SimulationConfig;

/// Preset configuration levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetLevel {
    Strict,
    Balanced,
    LongCycle,
}

impl PresetLevel {
    /// Convert preset level to full configuration.
    pub fn to_config(self) -> EngineConfig {
        EngineConfig {
            simulation: self.simulation(),
            offer: self.offer_scoring(),
            ..Default::default()
        }
    }

    pub fn simulation(self) -> SimulationConfig {
        match self {
            PresetLevel::Strict => SimulationConfig {
                healthy_payback_months: 6,
                ..Default::default()
            },
            PresetLevel::Balanced => SimulationConfig::default(),
            PresetLevel::LongCycle => SimulationConfig {
                healthy_payback_months: 18,
                ..SimulationConfig::extended()
            },
        }
    }

    pub fn offer_scoring(self) -> OfferScoringConfig {
        match self {
            PresetLevel::Strict => OfferScoringConfig::strict(),
            PresetLevel::Balanced | PresetLevel::LongCycle => OfferScoringConfig::default(),
        }
    }
}

/// Apply a preset, keeping any benchmark tables from `config`.
pub fn merge_preset_with_config(preset: PresetLevel, config: EngineConfig) -> EngineConfig {
    EngineConfig {
        benchmarks: config.benchmarks,
        ..preset.to_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_is_default() {
        assert_eq!(PresetLevel::Balanced.to_config(), EngineConfig::default());
    }

    #[test]
    fn test_all_presets_validate() {
        for preset in [PresetLevel::Strict, PresetLevel::Balanced, PresetLevel::LongCycle] {
            assert!(preset.to_config().validate().is_ok(), "{:?}", preset);
        }
    }

    #[test]
    fn test_merge_keeps_benchmarks() {
        let mut config = EngineConfig::default();
        config.benchmarks.default_industry = Some("saas".to_string());
        let merged = merge_preset_with_config(PresetLevel::Strict, config);
        assert_eq!(merged.benchmarks.default_industry.as_deref(), Some("saas"));
        assert_eq!(merged.simulation.healthy_payback_months, 6);
    }
}
