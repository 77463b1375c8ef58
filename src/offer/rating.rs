//! Offer strength tiers.
//!
//! Maps a strength score onto five ordered tiers. The lookup is total: any
//! score below the lowest threshold, including NaN, lands in [`OfferTier::Weak`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferTier {
    Weak,
    Average,
    Solid,
    Strong,
    GrandSlam,
}

/// Minimum score for each tier, highest first
const TIER_THRESHOLDS: [(f64, OfferTier); 4] = [
    (90.0, OfferTier::GrandSlam),
    (75.0, OfferTier::Strong),
    (60.0, OfferTier::Solid),
    (45.0, OfferTier::Average),
];

impl OfferTier {
    pub fn from_score(score: f64) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(OfferTier::Weak, |(_, tier)| *tier)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfferTier::GrandSlam => "Grand Slam Offer",
            OfferTier::Strong => "Strong Offer",
            OfferTier::Solid => "Solid Offer",
            OfferTier::Average => "Average Offer",
            OfferTier::Weak => "Weak Offer",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            OfferTier::GrandSlam => "emerald",
            OfferTier::Strong => "green",
            OfferTier::Solid => "sky",
            OfferTier::Average => "amber",
            OfferTier::Weak => "red",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OfferTier::GrandSlam => "So good people feel stupid saying no.",
            OfferTier::Strong => "Compelling offer with minor room to improve.",
            OfferTier::Solid => "Decent offer that needs stronger risk reversal or value stacking.",
            OfferTier::Average => "Commodity territory. Buyers will compare on price.",
            OfferTier::Weak => "Needs a rebuild before it goes to market.",
        }
    }
}

/// Display bundle for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfferRating {
    pub tier: OfferTier,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl From<OfferTier> for OfferRating {
    fn from(tier: OfferTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            color: tier.color(),
            description: tier.description(),
        }
    }
}

pub fn get_offer_rating(score: f64) -> OfferRating {
    OfferTier::from_score(score).into()
}
