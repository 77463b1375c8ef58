//! Structured offer description consumed by the scorer.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, Result};

/// The main thing the buyer is paying for
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreDeliverable {
    pub title: String,
    pub description: String,
    pub delivery_method: String,
    pub timeline: String,
    /// Stand-alone value in the offer's currency
    pub value: f64,
}

/// Extra item stacked on top of the core deliverable. Only the count and
/// the sum of values affect scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bonus {
    pub title: String,
    pub description: String,
    pub value: f64,
}

/// Guarantee kinds, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuaranteeType {
    #[default]
    None,
    /// "All sales final" stated as a feature
    AntiGuarantee,
    /// Pay-for-performance terms
    Implied,
    /// Refund if the buyer does the work and still gets no result
    Conditional,
    /// No-questions-asked refund
    Unconditional,
    /// Refund plus compensation
    BetterThanMoneyBack,
}

impl GuaranteeType {
    /// Position on the strength scale, 0 for no guarantee
    pub fn strength(&self) -> u8 {
        match self {
            GuaranteeType::None => 0,
            GuaranteeType::AntiGuarantee => 1,
            GuaranteeType::Implied => 2,
            GuaranteeType::Conditional => 3,
            GuaranteeType::Unconditional => 4,
            GuaranteeType::BetterThanMoneyBack => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guarantee {
    #[serde(rename = "type")]
    pub guarantee_type: GuaranteeType,
    pub duration: String,
    pub conditions: String,
}

impl Guarantee {
    pub fn is_present(&self) -> bool {
        self.guarantee_type != GuaranteeType::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScarcityType {
    #[default]
    None,
    LimitedSupply,
    LimitedSeats,
    LimitedBonuses,
    Exclusivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyType {
    #[default]
    None,
    Deadline,
    CohortClose,
    PriceIncrease,
    ExpiringBonus,
    Seasonal,
}

/// Three-way state of a scarcity or urgency lever
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeverStatus {
    /// Present and backed by a real constraint
    Real,
    /// Present but manufactured
    Unverified,
    Absent,
}

impl LeverStatus {
    fn from_parts(present: bool, is_real: bool) -> Self {
        match (present, is_real) {
            (false, _) => LeverStatus::Absent,
            (true, true) => LeverStatus::Real,
            (true, false) => LeverStatus::Unverified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scarcity {
    #[serde(rename = "type")]
    pub scarcity_type: ScarcityType,
    pub is_real: bool,
    /// Units, seats or bonuses available
    pub limit: Option<u32>,
    pub reason: String,
}

impl Scarcity {
    pub fn status(&self) -> LeverStatus {
        LeverStatus::from_parts(self.scarcity_type != ScarcityType::None, self.is_real)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Urgency {
    #[serde(rename = "type")]
    pub urgency_type: UrgencyType,
    pub is_real: bool,
    pub deadline: String,
    /// What the buyer loses by waiting
    pub consequence: String,
}

impl Urgency {
    pub fn status(&self) -> LeverStatus {
        LeverStatus::from_parts(self.urgency_type != UrgencyType::None, self.is_real)
    }
}

/// Complete offer as presented to a buyer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferStack {
    pub core_deliverable: CoreDeliverable,
    pub bonuses: Vec<Bonus>,
    pub guarantee: Guarantee,
    pub scarcity: Scarcity,
    pub urgency: Urgency,
    pub target_price: f64,
}

impl OfferStack {
    pub fn bonus_value(&self) -> f64 {
        self.bonuses.iter().map(|bonus| bonus.value).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.core_deliverable.value + self.bonus_value()
    }

    /// Check the documented input invariants.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative(self.target_price, "targetPrice")?;
        ensure_non_negative(self.core_deliverable.value, "coreDeliverable.value")?;
        self.bonuses
            .iter()
            .try_for_each(|bonus| ensure_non_negative(bonus.value, "bonus.value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarantee_scale_is_ordered() {
        assert_eq!(GuaranteeType::None.strength(), 0);
        assert!(GuaranteeType::Conditional < GuaranteeType::Unconditional);
        assert_eq!(GuaranteeType::BetterThanMoneyBack.strength(), 5);
    }

    #[test]
    fn test_lever_status() {
        let real = Scarcity {
            scarcity_type: ScarcityType::LimitedSeats,
            is_real: true,
            ..Default::default()
        };
        assert_eq!(real.status(), LeverStatus::Real);

        let fake = Urgency {
            urgency_type: UrgencyType::Deadline,
            is_real: false,
            ..Default::default()
        };
        assert_eq!(fake.status(), LeverStatus::Unverified);

        // is_real is ignored when no lever is configured
        let absent = Scarcity {
            is_real: true,
            ..Default::default()
        };
        assert_eq!(absent.status(), LeverStatus::Absent);
    }

    #[test]
    fn test_total_value_sums_bonuses() {
        let offer = OfferStack {
            core_deliverable: CoreDeliverable {
                value: 1_000.0,
                ..Default::default()
            },
            bonuses: vec![
                Bonus {
                    value: 250.0,
                    ..Default::default()
                },
                Bonus {
                    value: 750.0,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(offer.bonus_value(), 1_000.0);
        assert_eq!(offer.total_value(), 2_000.0);
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let json = r#"{
            "coreDeliverable": {"title": "Coaching", "value": 3000},
            "guarantee": {"type": "conditional", "duration": "90 days"},
            "scarcity": {"type": "limited-seats", "isReal": true, "limit": 20},
            "targetPrice": 997
        }"#;
        let offer: OfferStack = serde_json::from_str(json).unwrap();
        assert_eq!(offer.guarantee.guarantee_type, GuaranteeType::Conditional);
        assert_eq!(offer.scarcity.limit, Some(20));
        assert_eq!(offer.urgency.status(), LeverStatus::Absent);
        assert!(offer.bonuses.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let offer = OfferStack {
            target_price: -1.0,
            ..Default::default()
        };
        assert!(offer.validate().is_err());
        assert!(OfferStack::default().validate().is_ok());
    }
}
