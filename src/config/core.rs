use serde::{Deserialize, Serialize};

use super::benchmarks::BenchmarkConfig;
use super::scoring::OfferScoringConfig;
use super::simulation::SimulationConfig;
use crate::errors::{Result, ResultExt};

/// Root configuration structure for the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cohort payback simulation settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Offer strength scoring weights
    #[serde(default)]
    pub offer: OfferScoringConfig,

    /// Custom industry benchmark tables
    #[serde(default)]
    pub benchmarks: BenchmarkConfig,
}

impl EngineConfig {
    /// Validate every section, naming the section that failed
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate().context("[simulation]")?;
        self.offer.validate().context("[offer]")?;
        self.benchmarks.validate().context("[benchmarks]")
    }
}
