//! Benchmark comparator.
//!
//! Places a computed metric against an industry reference table of
//! `{median, good, excellent}` thresholds and estimates where it falls in
//! the industry distribution. Comparisons are direction-aware: for
//! [`MetricDirection::LowerIsBetter`] metrics such as payback months the
//! threshold ordering is inverted.
//!
//! Percentile estimates are piecewise-linear between fixed anchors:
//!
//! | Tier | Percentile band |
//! |---|---|
//! | below median | 1 - 49 |
//! | median | 50 - 74 |
//! | good | 75 - 89 |
//! | excellent | 90 - 99 |

pub mod industries;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::rounding::round_whole;

pub use industries::{benchmark_ltv_cac_ratio, benchmark_payback, Industry, IndustryBenchmarks};

/// Which direction of a metric counts as an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricDirection {
    /// LTV:CAC ratio and similar
    HigherIsBetter,
    /// Payback period and similar
    LowerIsBetter,
}

/// Reference thresholds for one metric in one industry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub median: f64,
    pub good: f64,
    pub excellent: f64,
}

impl IndustryBenchmark {
    pub const fn new(median: f64, good: f64, excellent: f64) -> Self {
        Self {
            median,
            good,
            excellent,
        }
    }

    /// Check that thresholds are ordered from median to excellent in the
    /// metric's improving direction.
    pub fn validate(&self, direction: MetricDirection) -> Result<()> {
        let ordered = match direction {
            MetricDirection::HigherIsBetter => {
                self.median <= self.good && self.good <= self.excellent
            }
            MetricDirection::LowerIsBetter => {
                self.median >= self.good && self.good >= self.excellent
            }
        };
        if ordered {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "benchmark thresholds out of order for {:?}: median {}, good {}, excellent {}",
                direction, self.median, self.good, self.excellent
            )))
        }
    }
}

/// Position of a value relative to an industry table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkTier {
    BelowMedian,
    Median,
    Good,
    Excellent,
}

impl BenchmarkTier {
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkTier::BelowMedian => "Below Median",
            BenchmarkTier::Median => "Median",
            BenchmarkTier::Good => "Good",
            BenchmarkTier::Excellent => "Excellent",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BenchmarkTier::BelowMedian => "red",
            BenchmarkTier::Median => "amber",
            BenchmarkTier::Good => "sky",
            BenchmarkTier::Excellent => "green",
        }
    }

    /// Inclusive percentile band reported for the tier
    fn percentile_band(&self) -> (f64, f64) {
        match self {
            BenchmarkTier::BelowMedian => (1.0, 49.0),
            BenchmarkTier::Median => (50.0, 74.0),
            BenchmarkTier::Good => (75.0, 89.0),
            BenchmarkTier::Excellent => (90.0, 99.0),
        }
    }
}

/// Result of comparing one value against an [`IndustryBenchmark`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub value: f64,
    pub direction: MetricDirection,
    pub tier: BenchmarkTier,
    /// Estimated industry percentile, 1 - 99
    pub percentile: u8,
}

impl BenchmarkComparison {
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }
}

/// Classify `value` against `benchmark` and estimate its percentile.
///
/// A value sitting exactly on a threshold takes the better tier. Non-finite
/// values (for example an infinite payback) land at the bottom of the
/// below-median band.
pub fn compare_to_benchmark(
    value: f64,
    benchmark: &IndustryBenchmark,
    direction: MetricDirection,
) -> BenchmarkComparison {
    let (tier, raw_percentile) = match direction {
        MetricDirection::HigherIsBetter => classify_higher(value, benchmark),
        MetricDirection::LowerIsBetter => classify_lower(value, benchmark),
    };

    let (low, high) = tier.percentile_band();
    let percentile = if raw_percentile.is_finite() {
        round_whole(raw_percentile).clamp(low, high)
    } else {
        low
    };

    BenchmarkComparison {
        value,
        direction,
        tier,
        percentile: percentile as u8,
    }
}

// Fraction of the way from `from` to `to`, 0 when the span is empty.
fn progress(value: f64, from: f64, to: f64) -> f64 {
    let span = to - from;
    if span == 0.0 {
        0.0
    } else {
        ((value - from) / span).clamp(0.0, 1.0)
    }
}

fn classify_higher(value: f64, b: &IndustryBenchmark) -> (BenchmarkTier, f64) {
    if value >= b.excellent {
        // Beyond excellent: one more good-to-excellent span reaches the 99th.
        let beyond = progress(value, b.excellent, b.excellent + (b.excellent - b.good));
        (BenchmarkTier::Excellent, 90.0 + 9.0 * beyond)
    } else if value >= b.good {
        (BenchmarkTier::Good, 75.0 + 15.0 * progress(value, b.good, b.excellent))
    } else if value >= b.median {
        (BenchmarkTier::Median, 50.0 + 25.0 * progress(value, b.median, b.good))
    } else {
        let below = if b.median > 0.0 {
            50.0 * value.max(0.0) / b.median
        } else {
            0.0
        };
        (BenchmarkTier::BelowMedian, below)
    }
}

fn classify_lower(value: f64, b: &IndustryBenchmark) -> (BenchmarkTier, f64) {
    if value <= b.excellent {
        let beyond = progress(value, b.excellent, b.excellent - (b.good - b.excellent));
        (BenchmarkTier::Excellent, 90.0 + 9.0 * beyond)
    } else if value <= b.good {
        (BenchmarkTier::Good, 75.0 + 15.0 * progress(value, b.good, b.excellent))
    } else if value <= b.median {
        (BenchmarkTier::Median, 50.0 + 25.0 * progress(value, b.median, b.good))
    } else {
        // value > median >= 0 here, so the division is safe.
        (BenchmarkTier::BelowMedian, 50.0 * b.median / value)
    }
}
