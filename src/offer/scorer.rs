use crate::config::OfferScoringConfig;
use crate::rounding::{round_tenths, round_whole};

use super::{LeverStatus, OfferAnalysis, OfferStack};

/// Appends paired weakness/suggestion messages in check order.
#[derive(Debug, Default)]
struct Findings {
    weaknesses: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    fn flag(&mut self, weakness: impl Into<String>, suggestion: impl Into<String>) {
        self.weaknesses.push(weakness.into());
        self.suggestions.push(suggestion.into());
    }

    fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

/// Rule-based offer strength scorer.
#[derive(Debug, Clone, Default)]
pub struct OfferScorer {
    config: OfferScoringConfig,
}

impl OfferScorer {
    pub fn new(config: OfferScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OfferScoringConfig {
        &self.config
    }

    pub fn analyze(&self, offer: &OfferStack) -> OfferAnalysis {
        let total_value = offer.total_value();
        let guarantee_strength = f64::from(offer.guarantee.guarantee_type.strength());
        let scarcity = offer.scarcity.status();
        let urgency = offer.urgency.status();

        let value_multiplier = self.value_multiplier(guarantee_strength, scarcity, urgency);
        let perceived_value = round_whole(total_value * value_multiplier);
        let price_to_value_ratio = if offer.target_price == 0.0 {
            0.0
        } else {
            round_tenths(perceived_value / offer.target_price)
        };

        let findings = self.review(offer, scarcity, urgency, price_to_value_ratio);

        let bonus_points = (offer.bonuses.len() as f64 * self.config.points_per_bonus)
            .min(self.config.bonus_points_cap);
        let strength_score = (self.config.base_score
            + guarantee_strength * self.config.guarantee_score_weight
            + self.lever_points(scarcity)
            + self.lever_points(urgency)
            + bonus_points
            + self.ratio_points(price_to_value_ratio))
        .min(self.config.max_score);

        tracing::debug!(
            total_value,
            perceived_value,
            price_to_value_ratio,
            strength_score,
            weaknesses = findings.weaknesses.len(),
            "analyzed offer"
        );

        OfferAnalysis {
            total_value,
            perceived_value,
            value_multiplier,
            price_to_value_ratio,
            strength_score,
            weaknesses: findings.weaknesses,
            suggestions: findings.suggestions,
        }
    }

    fn value_multiplier(
        &self,
        guarantee_strength: f64,
        scarcity: LeverStatus,
        urgency: LeverStatus,
    ) -> f64 {
        let mut multiplier = 1.0 + guarantee_strength * self.config.guarantee_multiplier_step;
        if scarcity == LeverStatus::Real {
            multiplier += self.config.scarcity_multiplier_boost;
        }
        if urgency == LeverStatus::Real {
            multiplier += self.config.urgency_multiplier_boost;
        }
        multiplier
    }

    fn lever_points(&self, status: LeverStatus) -> f64 {
        match status {
            LeverStatus::Real => self.config.real_lever_points,
            LeverStatus::Unverified => self.config.fake_lever_points,
            LeverStatus::Absent => 0.0,
        }
    }

    fn ratio_points(&self, ratio: f64) -> f64 {
        let config = &self.config;
        if ratio >= config.excellent_ratio {
            config.excellent_ratio_points
        } else if ratio >= config.strong_ratio {
            config.strong_ratio_points
        } else if ratio >= config.fair_ratio {
            config.fair_ratio_points
        } else {
            0.0
        }
    }

    fn review(
        &self,
        offer: &OfferStack,
        scarcity: LeverStatus,
        urgency: LeverStatus,
        ratio: f64,
    ) -> Findings {
        let config = &self.config;
        let mut findings = Findings::default();

        if !offer.guarantee.is_present() {
            findings.flag(
                "No guarantee: the buyer carries all of the risk",
                "Add a guarantee (conditional, unconditional or better than money back) to reverse the risk",
            );
        }

        match scarcity {
            LeverStatus::Real => {}
            LeverStatus::Unverified => findings.flag(
                "Scarcity is not genuine and can damage trust if buyers notice",
                "Tie scarcity to a real constraint such as delivery capacity or cohort size",
            ),
            LeverStatus::Absent => findings.flag(
                "No scarcity: nothing limits how many people can buy",
                "Add genuine scarcity such as limited seats or a capped number of bonuses",
            ),
        }

        match urgency {
            LeverStatus::Real => {}
            LeverStatus::Unverified => findings.flag(
                "Urgency is not genuine and can damage trust if the deadline moves",
                "Use a real deadline such as a cohort start date or a scheduled price increase",
            ),
            LeverStatus::Absent => findings.flag(
                "No urgency: buyers have no reason to act now",
                "Add a real deadline, an expiring bonus or a price increase",
            ),
        }

        match offer.bonuses.len() {
            0 => findings.flag(
                "No bonuses in the offer stack",
                format!(
                    "Add 2-{} bonuses that remove obstacles to getting the core result",
                    config.max_recommended_bonuses
                ),
            ),
            1 => findings.suggest(format!(
                "Stack more bonuses; 2-{} bonuses raise perceived value",
                config.max_recommended_bonuses
            )),
            count if count > config.max_recommended_bonuses => findings.flag(
                format!("Too many bonuses ({count}) dilute the offer"),
                format!(
                    "Keep only the {} most valuable bonuses",
                    config.max_recommended_bonuses
                ),
            ),
            _ => {}
        }

        if ratio < config.fair_ratio {
            findings.flag(
                format!("Value-to-price ratio of {ratio}:1 is too low"),
                format!(
                    "Raise the stack's value to at least {}:1, ideally {}:1",
                    config.fair_ratio, config.excellent_ratio
                ),
            );
        } else if ratio < config.strong_ratio {
            findings.suggest(format!(
                "Push the value-to-price ratio from {ratio}:1 toward {}:1 with more or higher-value bonuses",
                config.excellent_ratio
            ));
        }

        if offer.core_deliverable.title.is_empty() {
            findings.flag(
                "Core deliverable has no title",
                "Name the core deliverable after the outcome it delivers",
            );
        }

        if offer.core_deliverable.value < offer.target_price * config.deliverable_price_factor {
            findings.suggest(format!(
                "The core deliverable alone should be worth at least {}x the price",
                config.deliverable_price_factor
            ));
        }

        findings
    }
}
