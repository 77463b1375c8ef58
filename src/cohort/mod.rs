//! Cohort payback simulator.
//!
//! Follows one acquisition cohort month by month as it churns, weighting
//! each month's gross profit by the share of customers still active, and
//! reports when cumulative profit first recovers the acquisition cost.
//!
//! Degenerate inputs never fail. They resolve to explicit variants instead:
//!
//! - no positive gross profit: [`SimplePayback::Never`]
//! - retention of 0% or at least 100%: [`LtvMethod::FixedHorizon`]
//! - no recovery inside the horizon: [`PaybackMonth::BeyondHorizon`],
//!   whose month number is `horizon + 1` (37 by default)
//!
//! # Example
//!
//! ```rust
//! use unit_economics::cohort::{simulate_cac_payback, CohortPaybackInput, PaybackMonth};
//!
//! let results = simulate_cac_payback(&CohortPaybackInput {
//!     revenue_per_customer: 100.0,
//!     marginal_costs: 30.0,
//!     cac: 200.0,
//!     monthly_retention: 90.0,
//! });
//!
//! assert_eq!(results.gross_profit, 70.0);
//! assert_eq!(results.ltv, 630.0);
//! assert_eq!(results.ltv_cac_ratio, 3.15);
//! assert_eq!(results.actual_payback_month, PaybackMonth::Month(4));
//! assert!(results.is_healthy);
//! ```

pub mod health;
pub mod sensitivity;
mod simulator;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_HORIZON_MONTHS;
use crate::errors::{ensure_non_negative, ensure_percentage, Result};

pub use health::{
    format_payback_month, get_payback_health_color, get_payback_health_label, HealthColor,
    PaybackHealth,
};
pub use sensitivity::{
    minimum_retention_for_payback, retention_sweep, simulate_batch, RetentionScenario,
};
pub use simulator::CohortSimulator;

/// Length of the default simulation in months.
pub const SIMULATION_HORIZON_MONTHS: u32 = DEFAULT_HORIZON_MONTHS;

/// Month number reported when the default simulation never pays back.
pub const BEYOND_HORIZON_MONTH: u32 = DEFAULT_HORIZON_MONTHS + 1;

/// Per-customer monthly economics of one acquisition cohort
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortPaybackInput {
    /// Monthly revenue per active customer
    pub revenue_per_customer: f64,
    /// Monthly cost to serve one active customer
    pub marginal_costs: f64,
    pub cac: f64,
    /// Percentage of customers retained from one month to the next (0-100)
    pub monthly_retention: f64,
}

impl CohortPaybackInput {
    /// Monthly retention as a fraction
    pub fn retention_rate(&self) -> f64 {
        self.monthly_retention / 100.0
    }

    /// Check the documented input invariants.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(self.revenue_per_customer, "revenuePerCustomer")?;
        ensure_non_negative(self.marginal_costs, "marginalCosts")?;
        ensure_non_negative(self.cac, "cac")?;
        ensure_percentage(self.monthly_retention, "monthlyRetention")
    }
}

/// One simulated month. Currency fields carry two decimals and
/// `retention_percent` one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortMonth {
    /// 1-based month index
    pub month: u32,
    /// Share of the original cohort still active
    pub retention_percent: f64,
    pub monthly_gross_profit: f64,
    pub cumulative_gross_profit: f64,
    /// Cumulative gross profit minus CAC; negative until recovered
    pub cumulative_payback: f64,
}

/// Steady-state payback estimate that ignores churn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SimplePayback {
    Months(f64),
    /// Gross profit is zero or negative, so CAC is never recovered
    Never,
}

impl SimplePayback {
    /// Months as a number, `f64::INFINITY` for [`SimplePayback::Never`]
    pub fn as_months(&self) -> f64 {
        match self {
            SimplePayback::Months(months) => *months,
            SimplePayback::Never => f64::INFINITY,
        }
    }
}

/// How the churn-aware LTV was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LtvMethod {
    /// `grossProfit * r / (1 - r)` for `0 < r < 1`
    GeometricSeries,
    /// `grossProfit * fallbackMonths` when the series does not converge
    /// or retention is zero. A known simplification.
    FixedHorizon,
}

/// First month in which cumulative gross profit covers CAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PaybackMonth {
    Month(u32),
    /// Not recovered within a simulation of `horizon` months
    BeyondHorizon { horizon: u32 },
}

impl PaybackMonth {
    /// Month as a number; `horizon + 1` when beyond the horizon
    pub fn month_number(&self) -> u32 {
        match self {
            PaybackMonth::Month(month) => *month,
            PaybackMonth::BeyondHorizon { horizon } => horizon.saturating_add(1),
        }
    }

    pub fn is_within_horizon(&self) -> bool {
        matches!(self, PaybackMonth::Month(_))
    }

    pub fn health_color(&self) -> HealthColor {
        get_payback_health_color(self.month_number())
    }

    pub fn health_label(&self) -> PaybackHealth {
        get_payback_health_label(self.month_number())
    }
}

impl fmt::Display for PaybackMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackMonth::Month(month) => {
                write!(f, "{}", health::format_payback_month_within(*month, u32::MAX))
            }
            PaybackMonth::BeyondHorizon { horizon } => write!(f, "> {} months", horizon),
        }
    }
}

/// Output of one cohort payback simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacPaybackResults {
    /// Monthly gross profit per active customer
    pub gross_profit: f64,
    pub gross_margin_percent: f64,
    pub simple_payback_months: SimplePayback,
    /// Churn-aware lifetime value
    pub ltv: f64,
    pub ltv_method: LtvMethod,
    /// `0.0` when CAC is zero
    pub ltv_cac_ratio: f64,
    pub cohort: Vec<CohortMonth>,
    pub actual_payback_month: PaybackMonth,
    pub is_healthy: bool,
}

/// Run the simulation with the default configuration.
pub fn simulate_cac_payback(input: &CohortPaybackInput) -> CacPaybackResults {
    CohortSimulator::default().simulate(input)
}
