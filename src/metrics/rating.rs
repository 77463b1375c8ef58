//! LTV:CAC rating tiers
//!
//! Ratios are classified against the ascending thresholds 1, 2, 3, 5 and 10
//! with strict `<` comparisons, so a ratio sitting exactly on a threshold
//! belongs to the tier above it (`1.0` is `Ratio1To2`).

use serde::{Deserialize, Serialize};

/// Rating tier for an LTV:CAC ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    /// Every customer costs more to acquire than they return
    #[serde(rename = "below1")]
    Below1,
    /// Recovering acquisition spend but little margin for overhead
    #[serde(rename = "ratio1to2")]
    Ratio1To2,
    /// Viable but tight
    #[serde(rename = "ratio2to3")]
    Ratio2To3,
    /// The commonly cited healthy band
    #[serde(rename = "ratio3to5")]
    Ratio3To5,
    /// Strong economics, room to spend more on growth
    #[serde(rename = "ratio5to10")]
    Ratio5To10,
    /// Likely under-investing in acquisition
    #[serde(rename = "above10")]
    Above10,
}

impl RatingTier {
    /// Upper bounds of each tier except the last, in ascending order.
    pub const THRESHOLDS: [f64; 5] = [1.0, 2.0, 3.0, 5.0, 10.0];

    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Below1 => "Below 1:1",
            RatingTier::Ratio1To2 => "1:1 to 2:1",
            RatingTier::Ratio2To3 => "2:1 to 3:1",
            RatingTier::Ratio3To5 => "3:1 to 5:1",
            RatingTier::Ratio5To10 => "5:1 to 10:1",
            RatingTier::Above10 => "Above 10:1",
        }
    }

    /// Display color tag
    pub fn color(&self) -> &'static str {
        match self {
            RatingTier::Below1 => "red",
            RatingTier::Ratio1To2 => "orange",
            RatingTier::Ratio2To3 => "amber",
            RatingTier::Ratio3To5 => "green",
            RatingTier::Ratio5To10 => "emerald",
            RatingTier::Above10 => "sky",
        }
    }

    /// One-line assessment of the tier
    pub fn description(&self) -> &'static str {
        match self {
            RatingTier::Below1 => {
                "Losing money on every customer. Fix retention or acquisition cost before scaling."
            }
            RatingTier::Ratio1To2 => {
                "Acquisition pays for itself but leaves little to cover fixed costs."
            }
            RatingTier::Ratio2To3 => "Workable, though below the 3:1 level most investors expect.",
            RatingTier::Ratio3To5 => "Healthy unit economics with a sustainable growth engine.",
            RatingTier::Ratio5To10 => {
                "Excellent economics. There is room to spend more aggressively on growth."
            }
            RatingTier::Above10 => {
                "Exceptional ratio. You are probably under-investing in acquisition."
            }
        }
    }
}

/// Classify an LTV:CAC ratio into a [`RatingTier`].
pub fn get_rating_tier(ratio: f64) -> RatingTier {
    let [one, two, three, five, ten] = RatingTier::THRESHOLDS;
    if ratio < one {
        RatingTier::Below1
    } else if ratio < two {
        RatingTier::Ratio1To2
    } else if ratio < three {
        RatingTier::Ratio2To3
    } else if ratio < five {
        RatingTier::Ratio3To5
    } else if ratio < ten {
        RatingTier::Ratio5To10
    } else {
        RatingTier::Above10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_upper_tier() {
        assert_eq!(get_rating_tier(1.0), RatingTier::Ratio1To2);
        assert_eq!(get_rating_tier(2.0), RatingTier::Ratio2To3);
        assert_eq!(get_rating_tier(3.0), RatingTier::Ratio3To5);
        assert_eq!(get_rating_tier(5.0), RatingTier::Ratio5To10);
        assert_eq!(get_rating_tier(10.0), RatingTier::Above10);
    }

    #[test]
    fn values_inside_tiers() {
        assert_eq!(get_rating_tier(0.0), RatingTier::Below1);
        assert_eq!(get_rating_tier(0.99), RatingTier::Below1);
        assert_eq!(get_rating_tier(4.99), RatingTier::Ratio3To5);
        assert_eq!(get_rating_tier(250.0), RatingTier::Above10);
    }

    #[test]
    fn tiers_are_ordered_worst_to_best() {
        assert!(RatingTier::Below1 < RatingTier::Ratio3To5);
        assert!(RatingTier::Ratio5To10 < RatingTier::Above10);
    }

    #[test]
    fn labels_are_distinct() {
        let tiers = [
            RatingTier::Below1,
            RatingTier::Ratio1To2,
            RatingTier::Ratio2To3,
            RatingTier::Ratio3To5,
            RatingTier::Ratio5To10,
            RatingTier::Above10,
        ];
        let mut labels: Vec<_> = tiers.iter().map(|t| t.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), tiers.len());
    }
}
