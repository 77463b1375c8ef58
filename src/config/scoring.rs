//! Offer scoring configuration
//!
//! This module contains the weights and thresholds used by the offer
//! strength scorer:
//! - Perceived-value multipliers for guarantee, scarcity and urgency
//! - Additive strength-score points for each lever
//! - Price-to-value ratio bands
//! - Bonus count recommendations

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Offer strength scoring weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferScoringConfig {
    /// Score every offer starts from
    #[serde(default = "default_base_score")]
    pub base_score: f64,

    /// Upper clamp of the strength score
    #[serde(default = "default_max_score")]
    pub max_score: f64,

    /// Perceived-value multiplier added per guarantee strength step
    #[serde(default = "default_guarantee_multiplier_step")]
    pub guarantee_multiplier_step: f64,

    /// Perceived-value multiplier added by real scarcity
    #[serde(default = "default_lever_multiplier_boost")]
    pub scarcity_multiplier_boost: f64,

    /// Perceived-value multiplier added by real urgency
    #[serde(default = "default_lever_multiplier_boost")]
    pub urgency_multiplier_boost: f64,

    /// Score points per guarantee strength step
    #[serde(default = "default_guarantee_score_weight")]
    pub guarantee_score_weight: f64,

    /// Score points for real scarcity or urgency
    #[serde(default = "default_real_lever_points")]
    pub real_lever_points: f64,

    /// Score points for scarcity or urgency that is present but not real
    #[serde(default = "default_fake_lever_points")]
    pub fake_lever_points: f64,

    /// Score points per bonus
    #[serde(default = "default_points_per_bonus")]
    pub points_per_bonus: f64,

    /// Cap on the bonus contribution to the score
    #[serde(default = "default_bonus_points_cap")]
    pub bonus_points_cap: f64,

    /// More bonuses than this dilute the offer
    #[serde(default = "default_max_recommended_bonuses")]
    pub max_recommended_bonuses: usize,

    /// Price-to-value ratio below which the offer is flagged as weak
    #[serde(default = "default_fair_ratio")]
    pub fair_ratio: f64,

    /// Price-to-value ratio below which a stronger stack is suggested
    #[serde(default = "default_strong_ratio")]
    pub strong_ratio: f64,

    /// Price-to-value ratio earning the top ratio bonus
    #[serde(default = "default_excellent_ratio")]
    pub excellent_ratio: f64,

    #[serde(default = "default_fair_ratio_points")]
    pub fair_ratio_points: f64,

    #[serde(default = "default_strong_ratio_points")]
    pub strong_ratio_points: f64,

    #[serde(default = "default_excellent_ratio_points")]
    pub excellent_ratio_points: f64,

    /// Core deliverable should be worth at least this multiple of the price
    #[serde(default = "default_deliverable_price_factor")]
    pub deliverable_price_factor: f64,
}

impl Default for OfferScoringConfig {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            max_score: default_max_score(),
            guarantee_multiplier_step: default_guarantee_multiplier_step(),
            scarcity_multiplier_boost: default_lever_multiplier_boost(),
            urgency_multiplier_boost: default_lever_multiplier_boost(),
            guarantee_score_weight: default_guarantee_score_weight(),
            real_lever_points: default_real_lever_points(),
            fake_lever_points: default_fake_lever_points(),
            points_per_bonus: default_points_per_bonus(),
            bonus_points_cap: default_bonus_points_cap(),
            max_recommended_bonuses: default_max_recommended_bonuses(),
            fair_ratio: default_fair_ratio(),
            strong_ratio: default_strong_ratio(),
            excellent_ratio: default_excellent_ratio(),
            fair_ratio_points: default_fair_ratio_points(),
            strong_ratio_points: default_strong_ratio_points(),
            excellent_ratio_points: default_excellent_ratio_points(),
            deliverable_price_factor: default_deliverable_price_factor(),
        }
    }
}

impl OfferScoringConfig {
    /// Demanding thresholds for premium or high-ticket offers
    pub fn strict() -> Self {
        Self {
            max_recommended_bonuses: 5,
            fair_ratio: 5.0,
            strong_ratio: 10.0,
            excellent_ratio: 15.0,
            deliverable_price_factor: 3.0,
            ..Default::default()
        }
    }

    // Pure function: Check if a weight is usable
    fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    // Pure function: Collect all weight validations
    fn collect_weight_validations(&self) -> Vec<(f64, &'static str)> {
        vec![
            (self.base_score, "base_score"),
            (self.guarantee_multiplier_step, "guarantee_multiplier_step"),
            (self.scarcity_multiplier_boost, "scarcity_multiplier_boost"),
            (self.urgency_multiplier_boost, "urgency_multiplier_boost"),
            (self.guarantee_score_weight, "guarantee_score_weight"),
            (self.real_lever_points, "real_lever_points"),
            (self.fake_lever_points, "fake_lever_points"),
            (self.points_per_bonus, "points_per_bonus"),
            (self.bonus_points_cap, "bonus_points_cap"),
            (self.fair_ratio, "fair_ratio"),
            (self.strong_ratio, "strong_ratio"),
            (self.excellent_ratio, "excellent_ratio"),
            (self.fair_ratio_points, "fair_ratio_points"),
            (self.strong_ratio_points, "strong_ratio_points"),
            (self.excellent_ratio_points, "excellent_ratio_points"),
            (self.deliverable_price_factor, "deliverable_price_factor"),
        ]
    }

    /// Validate that weights are non-negative and ratio bands ascend
    pub fn validate(&self) -> Result<()> {
        if let Some((value, name)) = self
            .collect_weight_validations()
            .into_iter()
            .find(|(value, _)| !Self::is_valid_weight(*value))
        {
            return Err(Error::configuration(format!(
                "offer.{} must be a non-negative number, got {}",
                name, value
            )));
        }

        if self.max_score.is_nan() || self.max_score <= 0.0 {
            return Err(Error::configuration("offer.max_score must be positive"));
        }

        if self.fair_ratio > self.strong_ratio || self.strong_ratio > self.excellent_ratio {
            return Err(Error::configuration(format!(
                "offer ratio bands must ascend: fair {} <= strong {} <= excellent {}",
                self.fair_ratio, self.strong_ratio, self.excellent_ratio
            )));
        }

        Ok(())
    }
}

fn default_base_score() -> f64 {
    50.0
}
fn default_max_score() -> f64 {
    100.0
}
fn default_guarantee_multiplier_step() -> f64 {
    0.05
}
fn default_lever_multiplier_boost() -> f64 {
    0.15
}
fn default_guarantee_score_weight() -> f64 {
    3.0
}
fn default_real_lever_points() -> f64 {
    10.0
}
fn default_fake_lever_points() -> f64 {
    3.0
}
fn default_points_per_bonus() -> f64 {
    2.0
}
fn default_bonus_points_cap() -> f64 {
    10.0
}
fn default_max_recommended_bonuses() -> usize {
    6
}
fn default_fair_ratio() -> f64 {
    3.0
}
fn default_strong_ratio() -> f64 {
    5.0
}
fn default_excellent_ratio() -> f64 {
    10.0
}
fn default_fair_ratio_points() -> f64 {
    5.0
}
fn default_strong_ratio_points() -> f64 {
    10.0
}
fn default_excellent_ratio_points() -> f64 {
    15.0
}
fn default_deliverable_price_factor() -> f64 {
    2.0
}
