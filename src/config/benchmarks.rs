use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::benchmark::industries::builtin_benchmarks;
use crate::benchmark::{Industry, IndustryBenchmarks};
use crate::errors::{Result, ResultExt};

/// Custom industry reference tables
///
/// ```toml
/// [benchmarks]
/// default_industry = "dental-clinics"
///
/// [benchmarks.industries.dental-clinics]
/// ltv_cac_ratio = { median = 4.0, good = 6.0, excellent = 9.0 }
/// payback_months = { median = 5.0, good = 3.0, excellent = 1.5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Industry used when a caller does not name one
    pub default_industry: Option<String>,

    /// Tables keyed by industry; a built-in key here overrides the built-in table
    pub industries: BTreeMap<String, IndustryBenchmarks>,
}

impl BenchmarkConfig {
    /// Find the tables for `industry`, preferring custom entries over built-ins.
    pub fn resolve(&self, industry: &str) -> Option<IndustryBenchmarks> {
        if let Some(custom) = self.industries.get(industry) {
            return Some(*custom);
        }
        industry
            .parse::<Industry>()
            .ok()
            .and_then(|builtin| builtin_benchmarks(builtin.key()))
    }

    /// Tables for the configured default industry, if any
    pub fn resolve_default(&self) -> Option<IndustryBenchmarks> {
        self.default_industry
            .as_deref()
            .and_then(|name| self.resolve(name))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, tables) in &self.industries {
            tables
                .validate()
                .context(format!("benchmarks.industries.{}", name))?;
        }
        Ok(())
    }
}
