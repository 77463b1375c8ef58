use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Default simulation horizon: three years of monthly steps.
pub const DEFAULT_HORIZON_MONTHS: u32 = 36;

/// Retention percentage below which a decayed cohort stops the simulation.
pub const DEFAULT_DECAY_FLOOR_PERCENT: f64 = 1.0;

/// Months of gross profit used as LTV when the geometric series diverges.
pub const DEFAULT_FALLBACK_LTV_MONTHS: u32 = 24;

/// Longest horizon a configuration may request: one hundred years.
pub const MAX_HORIZON_MONTHS: u32 = 1_200;

/// Latest payback month still considered healthy.
pub const DEFAULT_HEALTHY_PAYBACK_MONTHS: u32 = 12;

/// Cohort payback simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of monthly steps to simulate
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Stop once fewer than this percentage of the cohort remains (after month 1)
    #[serde(default = "default_decay_floor_percent")]
    pub decay_floor_percent: f64,

    /// LTV horizon used when retention is 0% or at least 100%
    #[serde(default = "default_fallback_ltv_months")]
    pub fallback_ltv_months: u32,

    /// Payback at or before this month is reported as healthy
    #[serde(default = "default_healthy_payback_months")]
    pub healthy_payback_months: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_months: default_horizon_months(),
            decay_floor_percent: default_decay_floor_percent(),
            fallback_ltv_months: default_fallback_ltv_months(),
            healthy_payback_months: default_healthy_payback_months(),
        }
    }
}

impl SimulationConfig {
    /// Five-year horizon for businesses with long payback cycles
    pub fn extended() -> Self {
        Self {
            horizon_months: 60,
            ..Default::default()
        }
    }

    /// Month number reported when payback never happens inside the horizon
    pub fn beyond_horizon_month(&self) -> u32 {
        self.horizon_months.saturating_add(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(Error::configuration(format!(
                "simulation.horizon_months must be between 1 and {}, got {}",
                MAX_HORIZON_MONTHS, self.horizon_months
            )));
        }
        if !(0.0..100.0).contains(&self.decay_floor_percent) {
            return Err(Error::configuration(format!(
                "simulation.decay_floor_percent must be in [0, 100), got {}",
                self.decay_floor_percent
            )));
        }
        if self.fallback_ltv_months == 0 {
            return Err(Error::configuration(
                "simulation.fallback_ltv_months must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}
fn default_decay_floor_percent() -> f64 {
    DEFAULT_DECAY_FLOOR_PERCENT
}
fn default_fallback_ltv_months() -> u32 {
    DEFAULT_FALLBACK_LTV_MONTHS
}
fn default_healthy_payback_months() -> u32 {
    DEFAULT_HEALTHY_PAYBACK_MONTHS
}
