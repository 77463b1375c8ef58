//! Offer strength scoring.
//!
//! Turns a structured [`OfferStack`] into an [`OfferAnalysis`]: nominal and
//! perceived value, a value-to-price ratio, a 0-100 strength score and
//! ordered weakness/suggestion lists.
//!
//! ```
//! use unit_economics::offer::{analyze_offer, get_offer_rating, CoreDeliverable, OfferStack};
//!
//! let offer = OfferStack {
//!     core_deliverable: CoreDeliverable {
//!         title: "Launch Sprint".to_string(),
//!         value: 50.0,
//!         ..Default::default()
//!     },
//!     target_price: 100.0,
//!     ..Default::default()
//! };
//!
//! let analysis = analyze_offer(&offer);
//! assert_eq!(analysis.strength_score, 50.0);
//! assert_eq!(get_offer_rating(analysis.strength_score).label, "Average Offer");
//! ```

use serde::{Deserialize, Serialize};

mod rating;
mod scorer;
mod types;

pub use rating::{get_offer_rating, OfferRating, OfferTier};
pub use scorer::OfferScorer;
pub use types::{
    Bonus, CoreDeliverable, Guarantee, GuaranteeType, LeverStatus, OfferStack, Scarcity,
    ScarcityType, Urgency, UrgencyType,
};

/// Result of scoring one offer. Rebuilt on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferAnalysis {
    /// Core deliverable plus all bonuses
    pub total_value: f64,
    /// Total value scaled by the guarantee and lever multiplier, whole units
    pub perceived_value: f64,
    pub value_multiplier: f64,
    /// Perceived value over target price, one decimal; `0.0` for a free offer
    pub price_to_value_ratio: f64,
    pub strength_score: f64,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl OfferAnalysis {
    pub fn rating(&self) -> OfferRating {
        get_offer_rating(self.strength_score)
    }
}

/// Score an offer with the default weights.
pub fn analyze_offer(offer: &OfferStack) -> OfferAnalysis {
    OfferScorer::default().analyze(offer)
}
