use crate::config::SimulationConfig;
use crate::rounding::{round_currency, round_tenths};

use super::{
    CacPaybackResults, CohortMonth, CohortPaybackInput, LtvMethod, PaybackMonth, SimplePayback,
};

const INITIAL_MONTHS_CAPACITY: u32 = 64;

/// Month-by-month cohort payback simulator.
///
/// Holds only configuration; every call to [`CohortSimulator::simulate`]
/// builds a fresh result, so one simulator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CohortSimulator {
    config: SimulationConfig,
}

impl CohortSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate one cohort and derive the churn-aware metrics.
    pub fn simulate(&self, input: &CohortPaybackInput) -> CacPaybackResults {
        let span = tracing::debug_span!(
            "cohort_payback",
            cac = input.cac,
            monthly_retention = input.monthly_retention
        );
        let _guard = span.enter();

        let retention_rate = input.retention_rate();
        let gross_profit = input.revenue_per_customer - input.marginal_costs;
        let gross_margin_percent = if input.revenue_per_customer == 0.0 {
            0.0
        } else {
            gross_profit / input.revenue_per_customer * 100.0
        };

        let simple_payback_months = if gross_profit > 0.0 {
            SimplePayback::Months(round_tenths(input.cac / gross_profit))
        } else {
            SimplePayback::Never
        };

        let (raw_ltv, ltv_method) = self.churn_aware_ltv(gross_profit, retention_rate);
        let ltv = round_currency(raw_ltv);
        let ltv_cac_ratio = if input.cac == 0.0 {
            0.0
        } else {
            round_currency(ltv / input.cac)
        };

        let (cohort, actual_payback_month) =
            self.simulate_cohort(gross_profit, retention_rate, input.cac);
        let is_healthy = actual_payback_month.month_number() <= self.config.healthy_payback_months;

        tracing::debug!(
            gross_profit,
            ltv,
            ltv_cac_ratio,
            months = cohort.len(),
            payback_month = actual_payback_month.month_number(),
            is_healthy,
            "simulated cohort payback"
        );

        CacPaybackResults {
            gross_profit: round_currency(gross_profit),
            gross_margin_percent: round_tenths(gross_margin_percent),
            simple_payback_months,
            ltv,
            ltv_method,
            ltv_cac_ratio,
            cohort,
            actual_payback_month,
            is_healthy,
        }
    }

    /// Expected profit of a customer over an infinite horizon weighted by
    /// monthly survival: `gp * r / (1 - r)`. Falls back to a fixed horizon
    /// when the series does not converge (`r >= 1`) or is degenerate (`r <= 0`).
    pub fn churn_aware_ltv(&self, gross_profit: f64, retention_rate: f64) -> (f64, LtvMethod) {
        if retention_rate > 0.0 && retention_rate < 1.0 {
            (
                gross_profit * retention_rate / (1.0 - retention_rate),
                LtvMethod::GeometricSeries,
            )
        } else {
            (
                gross_profit * f64::from(self.config.fallback_ltv_months),
                LtvMethod::FixedHorizon,
            )
        }
    }

    fn simulate_cohort(
        &self,
        gross_profit: f64,
        retention_rate: f64,
        cac: f64,
    ) -> (Vec<CohortMonth>, PaybackMonth) {
        let horizon = self.config.horizon_months;
        // Most cohorts decay below the floor long before a long horizon ends.
        let mut months = Vec::with_capacity(horizon.min(INITIAL_MONTHS_CAPACITY) as usize);
        let mut cumulative_gross_profit = 0.0;
        let mut payback_month = None;

        for month in 1..=horizon {
            let retention_percent = retention_rate.powf(f64::from(month - 1)) * 100.0;
            if month > 1 && retention_percent < self.config.decay_floor_percent {
                tracing::trace!(month, retention_percent, "cohort decayed below floor");
                break;
            }

            let monthly_gross_profit = retention_percent / 100.0 * gross_profit;
            cumulative_gross_profit += monthly_gross_profit;

            // Sticky: only the first recovering month counts.
            if payback_month.is_none() && cumulative_gross_profit >= cac {
                tracing::trace!(month, "cohort recovered acquisition cost");
                payback_month = Some(month);
            }

            months.push(CohortMonth {
                month,
                retention_percent: round_tenths(retention_percent),
                monthly_gross_profit: round_currency(monthly_gross_profit),
                cumulative_gross_profit: round_currency(cumulative_gross_profit),
                cumulative_payback: round_currency(cumulative_gross_profit - cac),
            });
        }

        let actual = payback_month
            .map(PaybackMonth::Month)
            .unwrap_or(PaybackMonth::BeyondHorizon { horizon });
        (months, actual)
    }
}
