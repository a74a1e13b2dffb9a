//! Engine configuration
//!
//! Rule thresholds are data rather than hard-coded branches, so the rule
//! table can be tuned without touching the pipeline. `Default` carries the
//! canonical rule set.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shared::ItemCategory;

/// Bulk-category discount rule.
///
/// Once the order holds at least `minimum_count` items of `category`, the
/// cheapest not-yet-discounted item of that category has its price
/// multiplied by `multiplier` (0.0 makes it free).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityDiscount {
    pub category: ItemCategory,
    pub minimum_count: usize,
    pub multiplier: f64,
}

/// Matched-pair gift rule.
///
/// When the two categories appear in equal, positive quantity, the
/// cheapest not-yet-discounted item across the whole order becomes free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPairGift {
    pub left: ItemCategory,
    pub right: ItemCategory,
}

/// Promotional free-order rule parameters.
///
/// The window bounds are strict: an order placed exactly at `window_start`
/// or `window_end` does not qualify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftPromotion {
    /// Window opens strictly after this time
    pub window_start: NaiveTime,
    /// Window closes strictly before this time
    pub window_end: NaiveTime,
    /// A user qualifies while strictly younger than this
    pub maximum_age: u32,
    /// Lifetime cap on gifts granted per engine instance
    pub cap: u32,
}

impl Default for GiftPromotion {
    fn default() -> Self {
        Self {
            window_start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            window_end: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            maximum_age: 18,
            cap: 10,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bulk-category rules, applied in table order
    pub quantity_discounts: Vec<QuantityDiscount>,
    pub matched_pair: MatchedPairGift,
    pub gift: GiftPromotion,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quantity_discounts: vec![
                QuantityDiscount {
                    category: ItemCategory::Processor,
                    minimum_count: 5,
                    multiplier: 0.5,
                },
                QuantityDiscount {
                    category: ItemCategory::Mouse,
                    minimum_count: 10,
                    multiplier: 0.0,
                },
            ],
            matched_pair: MatchedPairGift {
                left: ItemCategory::Mouse,
                right: ItemCategory::Keyboard,
            },
            gift: GiftPromotion::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_table() {
        let config = EngineConfig::default();

        assert_eq!(config.quantity_discounts.len(), 2);
        assert_eq!(config.quantity_discounts[0].category, ItemCategory::Processor);
        assert_eq!(config.quantity_discounts[0].minimum_count, 5);
        assert_eq!(config.quantity_discounts[1].category, ItemCategory::Mouse);
        assert_eq!(config.quantity_discounts[1].multiplier, 0.0);
        assert_eq!(config.gift.cap, 10);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
