//! Built-in industry reference tables.
//!
//! Each industry carries two tables: the LTV:CAC ratio (higher is better)
//! and the CAC payback period in months (lower is better). Callers can
//! override or extend these through [`crate::config::BenchmarkConfig`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{compare_to_benchmark, BenchmarkComparison, IndustryBenchmark, MetricDirection};
use crate::errors::{Error, Result, ResultExt};

/// Reference tables for one industry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmarks {
    pub ltv_cac_ratio: IndustryBenchmark,
    pub payback_months: IndustryBenchmark,
}

impl IndustryBenchmarks {
    pub fn validate(&self) -> Result<()> {
        self.ltv_cac_ratio
            .validate(MetricDirection::HigherIsBetter)
            .context("ltv_cac_ratio")?;
        self.payback_months
            .validate(MetricDirection::LowerIsBetter)
            .context("payback_months")
    }
}

/// Industries with built-in reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Saas,
    Ecommerce,
    Agency,
    Coaching,
    Subscription,
    LocalServices,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Saas,
        Industry::Ecommerce,
        Industry::Agency,
        Industry::Coaching,
        Industry::Subscription,
        Industry::LocalServices,
    ];

    /// Key used in configuration files and lookups
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Saas => "saas",
            Industry::Ecommerce => "ecommerce",
            Industry::Agency => "agency",
            Industry::Coaching => "coaching",
            Industry::Subscription => "subscription",
            Industry::LocalServices => "local-services",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Saas => "SaaS",
            Industry::Ecommerce => "E-commerce",
            Industry::Agency => "Agency",
            Industry::Coaching => "Coaching & Info Products",
            Industry::Subscription => "Consumer Subscription",
            Industry::LocalServices => "Local Services",
        }
    }

    pub fn benchmarks(&self) -> IndustryBenchmarks {
        BUILTIN_BENCHMARKS[self.key()]
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Industry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Industry::ALL
            .into_iter()
            .find(|industry| industry.key() == normalized)
            .ok_or_else(|| Error::validation(format!("unknown industry '{}'", s)))
    }
}

static BUILTIN_BENCHMARKS: Lazy<BTreeMap<&'static str, IndustryBenchmarks>> = Lazy::new(|| {
    let table = |ratio: (f64, f64, f64), payback: (f64, f64, f64)| IndustryBenchmarks {
        ltv_cac_ratio: IndustryBenchmark::new(ratio.0, ratio.1, ratio.2),
        payback_months: IndustryBenchmark::new(payback.0, payback.1, payback.2),
    };

    BTreeMap::from([
        ("saas", table((3.0, 4.0, 5.0), (15.0, 12.0, 6.0))),
        ("ecommerce", table((2.5, 3.5, 5.0), (6.0, 3.0, 1.0))),
        ("agency", table((3.0, 5.0, 8.0), (4.0, 2.0, 1.0))),
        ("coaching", table((4.0, 6.0, 10.0), (3.0, 2.0, 1.0))),
        ("subscription", table((3.0, 4.0, 6.0), (12.0, 8.0, 4.0))),
        ("local-services", table((3.0, 5.0, 8.0), (6.0, 3.0, 1.0))),
    ])
});

/// Look up the built-in tables by key (`"saas"`, `"local-services"`, ...).
pub fn builtin_benchmarks(key: &str) -> Option<IndustryBenchmarks> {
    BUILTIN_BENCHMARKS.get(key).copied()
}

/// Compare an LTV:CAC ratio against an industry table.
pub fn benchmark_ltv_cac_ratio(ratio: f64, tables: &IndustryBenchmarks) -> BenchmarkComparison {
    compare_to_benchmark(ratio, &tables.ltv_cac_ratio, MetricDirection::HigherIsBetter)
}

/// Compare a payback period in months against an industry table.
pub fn benchmark_payback(months: f64, tables: &IndustryBenchmarks) -> BenchmarkComparison {
    compare_to_benchmark(months, &tables.payback_months, MetricDirection::LowerIsBetter)
}
