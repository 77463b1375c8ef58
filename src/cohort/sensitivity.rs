//! Batch evaluation and retention what-if analysis.
//!
//! Simulations are independent pure calls, so these helpers fan out with
//! rayon. Results always come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{CacPaybackResults, CohortPaybackInput, CohortSimulator, PaybackMonth};
use crate::rounding::round_tenths;

/// Retention resolution used by [`minimum_retention_for_payback`], in percent.
const RETENTION_STEP_PERCENT: f64 = 0.1;

/// Simulation of one input under an alternative monthly retention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionScenario {
    pub monthly_retention: f64,
    pub results: CacPaybackResults,
}

/// Simulate many cohorts in parallel.
pub fn simulate_batch(
    simulator: &CohortSimulator,
    inputs: &[CohortPaybackInput],
) -> Vec<CacPaybackResults> {
    tracing::debug!(count = inputs.len(), "simulating cohort batch");
    inputs.par_iter().map(|input| simulator.simulate(input)).collect()
}

/// Re-run `base` once per monthly retention value.
pub fn retention_sweep(
    simulator: &CohortSimulator,
    base: &CohortPaybackInput,
    retentions: &[f64],
) -> Vec<RetentionScenario> {
    retentions
        .par_iter()
        .map(|&monthly_retention| RetentionScenario {
            monthly_retention,
            results: simulator.simulate(&CohortPaybackInput {
                monthly_retention,
                ..*base
            }),
        })
        .collect()
}

/// Lowest monthly retention (to 0.1%) at which `base` pays back by
/// `target_month`, or `None` if even 100% retention is not enough.
pub fn minimum_retention_for_payback(
    simulator: &CohortSimulator,
    base: &CohortPaybackInput,
    target_month: u32,
) -> Option<f64> {
    let steps = (100.0 / RETENTION_STEP_PERCENT).round() as u32;
    (0..=steps)
        .into_par_iter()
        .map(|step| round_tenths(f64::from(step) * RETENTION_STEP_PERCENT))
        .find_first(|&monthly_retention| {
            let results = simulator.simulate(&CohortPaybackInput {
                monthly_retention,
                ..*base
            });
            // The beyond-horizon month number is never a payback.
            matches!(results.actual_payback_month, PaybackMonth::Month(month) if month <= target_month)
        })
}
