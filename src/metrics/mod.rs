//! Core metrics calculator.
//!
//! Converts steady-state business inputs into LTV, CAC, the LTV:CAC ratio
//! and the simple payback period. Every function here is total: division
//! guards return `0.0` instead of failing, and `0.0` is the documented
//! sentinel for "undefined" (for example free acquisition).
//!
//! # Example
//!
//! ```rust
//! use unit_economics::metrics::{calculate_business_metrics, BusinessMetricsInput};
//!
//! let input = BusinessMetricsInput {
//!     average_order_value: 100.0,
//!     purchase_frequency: 4.0,
//!     gross_margin_percent: 50.0,
//!     customer_lifespan: 3.0,
//!     monthly_marketing_spend: 5_000.0,
//!     monthly_sales_costs: 1_000.0,
//!     new_customers_per_month: 30.0,
//! };
//!
//! let output = calculate_business_metrics(&input);
//! assert_eq!(output.ltv, 600.0);
//! assert_eq!(output.cac, 200.0);
//! assert_eq!(output.ratio, 3.0);
//! ```

pub mod rating;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, ensure_percentage, Result};
use crate::rounding::{round_currency, round_tenths};

pub use rating::{get_rating_tier, RatingTier};

/// Steady-state inputs for the core metrics calculator.
///
/// Monetary fields are expected to be non-negative and the margin to lie in
/// `[0, 100]`. The calculator does not enforce this; call
/// [`BusinessMetricsInput::validate`] first if the values are untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetricsInput {
    pub average_order_value: f64,
    /// Purchases per customer per year.
    pub purchase_frequency: f64,
    pub gross_margin_percent: f64,
    /// Expected relationship length in years.
    pub customer_lifespan: f64,
    pub monthly_marketing_spend: f64,
    pub monthly_sales_costs: f64,
    pub new_customers_per_month: f64,
}

impl BusinessMetricsInput {
    /// Check the documented input invariants.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(self.average_order_value, "averageOrderValue")?;
        ensure_non_negative(self.purchase_frequency, "purchaseFrequency")?;
        ensure_percentage(self.gross_margin_percent, "grossMarginPercent")?;
        ensure_non_negative(self.customer_lifespan, "customerLifespan")?;
        ensure_non_negative(self.monthly_marketing_spend, "monthlyMarketingSpend")?;
        ensure_non_negative(self.monthly_sales_costs, "monthlySalesCosts")?;
        ensure_non_negative(self.new_customers_per_month, "newCustomersPerMonth")
    }

    fn annual_gross_profit(&self) -> f64 {
        let annual_revenue = self.average_order_value * self.purchase_frequency;
        annual_revenue * (self.gross_margin_percent / 100.0)
    }
}

/// Output of [`calculate_business_metrics`]. Currency fields carry two
/// decimals, the payback period one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetricsOutput {
    pub ltv: f64,
    pub cac: f64,
    /// `0.0` when `cac` is zero.
    pub ratio: f64,
    /// Months to recover CAC; `0.0` when there is no monthly gross profit.
    pub payback_period: f64,
    pub monthly_gross_profit: f64,
}

impl BusinessMetricsOutput {
    /// Rating tier of the LTV:CAC ratio.
    pub fn rating_tier(&self) -> RatingTier {
        get_rating_tier(self.ratio)
    }
}

/// Lifetime value: annual gross profit times lifespan in years.
pub fn calculate_ltv(input: &BusinessMetricsInput) -> f64 {
    round_currency(input.annual_gross_profit() * input.customer_lifespan)
}

/// Customer acquisition cost; `0.0` when no customers are acquired.
pub fn calculate_cac(input: &BusinessMetricsInput) -> f64 {
    if input.new_customers_per_month == 0.0 {
        return 0.0;
    }
    let monthly_spend = input.monthly_marketing_spend + input.monthly_sales_costs;
    round_currency(monthly_spend / input.new_customers_per_month)
}

/// LTV:CAC ratio; `0.0` when `cac` is zero.
pub fn calculate_ratio(ltv: f64, cac: f64) -> f64 {
    if cac == 0.0 {
        return 0.0;
    }
    round_currency(ltv / cac)
}

/// Annual gross profit spread over twelve months.
pub fn calculate_monthly_gross_profit(input: &BusinessMetricsInput) -> f64 {
    round_currency(input.annual_gross_profit() / 12.0)
}

/// Months of gross profit needed to recover `cac`; `0.0` when there is no
/// monthly gross profit.
pub fn calculate_payback_period(cac: f64, monthly_gross_profit: f64) -> f64 {
    if monthly_gross_profit == 0.0 {
        return 0.0;
    }
    round_tenths(cac / monthly_gross_profit)
}

/// Run every core metric for one input.
///
/// The ratio and payback period are derived from the already rounded LTV,
/// CAC and monthly gross profit, so the output is internally consistent.
pub fn calculate_business_metrics(input: &BusinessMetricsInput) -> BusinessMetricsOutput {
    let ltv = calculate_ltv(input);
    let cac = calculate_cac(input);
    let monthly_gross_profit = calculate_monthly_gross_profit(input);
    let output = BusinessMetricsOutput {
        ltv,
        cac,
        ratio: calculate_ratio(ltv, cac),
        payback_period: calculate_payback_period(cac, monthly_gross_profit),
        monthly_gross_profit,
    };

    tracing::debug!(
        ltv = output.ltv,
        cac = output.cac,
        ratio = output.ratio,
        payback_period = output.payback_period,
        "calculated business metrics"
    );

    output
}
