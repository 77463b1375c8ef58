//! Payback health classification
//!
//! Pure lookups over a payback month number. The beyond-horizon sentinel
//! (37 by default) flows through these like any other month.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_HORIZON_MONTHS;

/// Display color for a payback month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthColor {
    Green,
    Sky,
    Red,
}

impl HealthColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthColor::Green => "green",
            HealthColor::Sky => "sky",
            HealthColor::Red => "red",
        }
    }
}

impl fmt::Display for HealthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative payback speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaybackHealth {
    /// Three months or less
    Excellent,
    /// Four to six months
    Good,
    /// Seven to twelve months
    Acceptable,
    /// Thirteen to twenty-four months
    Slow,
    NeedsImprovement,
}

impl PaybackHealth {
    pub fn label(&self) -> &'static str {
        match self {
            PaybackHealth::Excellent => "Excellent",
            PaybackHealth::Good => "Good",
            PaybackHealth::Acceptable => "Acceptable",
            PaybackHealth::Slow => "Slow",
            PaybackHealth::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PaybackHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn get_payback_health_color(month: u32) -> HealthColor {
    match month {
        0..=3 => HealthColor::Green,
        4..=12 => HealthColor::Sky,
        _ => HealthColor::Red,
    }
}

pub fn get_payback_health_label(month: u32) -> PaybackHealth {
    match month {
        0..=3 => PaybackHealth::Excellent,
        4..=6 => PaybackHealth::Good,
        7..=12 => PaybackHealth::Acceptable,
        13..=24 => PaybackHealth::Slow,
        _ => PaybackHealth::NeedsImprovement,
    }
}

/// Human-readable payback month for the default 36-month horizon.
///
/// ```rust
/// use unit_economics::cohort::format_payback_month;
///
/// assert_eq!(format_payback_month(1), "1 month");
/// assert_eq!(format_payback_month(8), "8 months");
/// assert_eq!(format_payback_month(37), "> 36 months");
/// ```
pub fn format_payback_month(month: u32) -> String {
    format_payback_month_within(month, DEFAULT_HORIZON_MONTHS)
}

/// Like [`format_payback_month`] for an arbitrary horizon.
pub fn format_payback_month_within(month: u32, horizon: u32) -> String {
    if month > horizon {
        format!("> {} months", horizon)
    } else if month == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", month)
    }
}
