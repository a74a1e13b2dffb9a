//! Line Item Model

use serde::{Deserialize, Serialize};

/// Product category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    Processor,
    Motherboard,
    Mouse,
    Keyboard,
}

/// One purchased product instance.
///
/// `price` is always the current, possibly-discounted price. The pricing
/// engine mutates items in place: once `discounted` is set, no later rule
/// may rewrite this item's price or consider it a candidate again. The
/// caller observes discounted prices as a side effect of pricing — pricing
/// is not purely functional over items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub category: ItemCategory,
    /// Display label, carries no pricing semantics
    pub name: String,
    pub price: f64,
    /// Set once a discount rule has rewritten this item's price
    #[serde(default)]
    pub discounted: bool,
}

impl LineItem {
    pub fn new(category: ItemCategory, name: impl Into<String>, price: f64) -> Self {
        Self {
            category,
            name: name.into(),
            price,
            discounted: false,
        }
    }
}
