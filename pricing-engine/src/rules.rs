//! Itemized discount rules
//!
//! Each rule rewrites at most one item's price and marks it `discounted`.
//! A discounted item is never a candidate for a later rule, so the fixed
//! rule order decides which rule claims a contested item.

use std::cmp::Ordering;

use shared::{ItemCategory, LineItem};

use crate::config::{MatchedPairGift, QuantityDiscount};
use crate::money::{to_decimal, to_f64};

// ==================== Bulk-Category Discount ====================

/// Apply a bulk-category rule.
///
/// Once the order holds at least `minimum_count` items of the category,
/// the cheapest not-yet-discounted item of that category has its price
/// multiplied by the rule multiplier and is marked discounted.
///
/// Returns true when an item was discounted.
pub fn apply_quantity_discount(items: &mut [LineItem], rule: &QuantityDiscount) -> bool {
    let count = items.iter().filter(|i| i.category == rule.category).count();
    if count < rule.minimum_count {
        return false;
    }

    let Some(cheapest) = cheapest_candidate(items, Some(rule.category)) else {
        return false;
    };

    let new_price = to_decimal(cheapest.price) * to_decimal(rule.multiplier);
    cheapest.price = to_f64(new_price);
    cheapest.discounted = true;
    tracing::debug!(
        category = ?rule.category,
        name = %cheapest.name,
        price = cheapest.price,
        "bulk-category discount applied"
    );
    true
}

// ==================== Matched-Pair Gift ====================

/// Apply the matched-pair gift.
///
/// When the two configured categories appear in equal, positive quantity,
/// the cheapest not-yet-discounted item across the whole order becomes
/// free. Counts include items already discounted by earlier rules; only
/// the candidate selection excludes them.
///
/// Returns true when an item was gifted.
pub fn apply_matched_pair_gift(items: &mut [LineItem], rule: &MatchedPairGift) -> bool {
    let left = items.iter().filter(|i| i.category == rule.left).count();
    let right = items.iter().filter(|i| i.category == rule.right).count();
    if left != right || left == 0 {
        return false;
    }

    let Some(cheapest) = cheapest_candidate(items, None) else {
        return false;
    };

    cheapest.price = 0.0;
    cheapest.discounted = true;
    tracing::debug!(name = %cheapest.name, "matched-pair gift applied");
    true
}

/// Cheapest not-yet-discounted item, optionally restricted to a category.
/// Ties go to the first minimal item.
fn cheapest_candidate(
    items: &mut [LineItem],
    category: Option<ItemCategory>,
) -> Option<&mut LineItem> {
    items
        .iter_mut()
        .filter(|i| !i.discounted && category.is_none_or(|c| i.category == c))
        .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ItemCategory::{Keyboard, Motherboard, Mouse, Processor};

    fn make_item(category: ItemCategory, price: f64) -> LineItem {
        LineItem::new(category, format!("{category:?} @{price}"), price)
    }

    fn processor_rule() -> QuantityDiscount {
        QuantityDiscount {
            category: Processor,
            minimum_count: 5,
            multiplier: 0.5,
        }
    }

    fn mouse_rule() -> QuantityDiscount {
        QuantityDiscount {
            category: Mouse,
            minimum_count: 10,
            multiplier: 0.0,
        }
    }

    fn pair_rule() -> MatchedPairGift {
        MatchedPairGift {
            left: Mouse,
            right: Keyboard,
        }
    }

    // ==================== Bulk-Category Tests ====================

    #[test]
    fn test_quantity_discount_halves_cheapest_processor() {
        // 50,50,50,50,50,30 -> the 30 becomes 15
        let mut items: Vec<LineItem> = (0..5).map(|_| make_item(Processor, 50.0)).collect();
        items.push(make_item(Processor, 30.0));

        assert!(apply_quantity_discount(&mut items, &processor_rule()));

        assert_eq!(items[5].price, 15.0);
        assert!(items[5].discounted);
        // Exactly one item changed
        assert_eq!(items.iter().filter(|i| i.discounted).count(), 1);
        let total: f64 = items.iter().map(|i| i.price).sum();
        assert_eq!(total, 265.0);
    }

    #[test]
    fn test_quantity_discount_below_minimum_is_noop() {
        let mut items: Vec<LineItem> = (0..4).map(|_| make_item(Processor, 50.0)).collect();

        assert!(!apply_quantity_discount(&mut items, &processor_rule()));
        assert!(items.iter().all(|i| !i.discounted && i.price == 50.0));
    }

    #[test]
    fn test_quantity_discount_ignores_other_categories() {
        // 5 motherboards do not trigger the processor rule
        let mut items: Vec<LineItem> = (0..5).map(|_| make_item(Motherboard, 50.0)).collect();
        assert!(!apply_quantity_discount(&mut items, &processor_rule()));
    }

    #[test]
    fn test_mouse_rule_makes_cheapest_mouse_free() {
        let mut items: Vec<LineItem> = (0..9).map(|_| make_item(Mouse, 20.0)).collect();
        items.push(make_item(Mouse, 5.0));

        assert!(apply_quantity_discount(&mut items, &mouse_rule()));
        assert_eq!(items[9].price, 0.0);
        assert!(items[9].discounted);
    }

    #[test]
    fn test_quantity_discount_skips_discounted_candidates() {
        let mut items: Vec<LineItem> = (0..5).map(|_| make_item(Processor, 50.0)).collect();
        items.push(make_item(Processor, 30.0));
        // The cheapest one was already claimed by an earlier rule
        items[5].discounted = true;

        assert!(apply_quantity_discount(&mut items, &processor_rule()));
        // The 30 keeps its price; a 50 is halved instead
        assert_eq!(items[5].price, 30.0);
        assert_eq!(items[0].price, 25.0);
        assert!(items[0].discounted);
    }

    // ==================== Matched-Pair Tests ====================

    #[test]
    fn test_matched_pair_zeroes_cheapest_overall() {
        // 1 Mouse(50) + 1 Keyboard(50) + 1 Motherboard(20): the board goes free
        let mut items = vec![
            make_item(Mouse, 50.0),
            make_item(Keyboard, 50.0),
            make_item(Motherboard, 20.0),
        ];

        assert!(apply_matched_pair_gift(&mut items, &pair_rule()));

        assert_eq!(items[2].price, 0.0);
        assert!(items[2].discounted);
        let total: f64 = items.iter().map(|i| i.price).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_matched_pair_requires_equal_positive_counts() {
        let mut items = vec![make_item(Mouse, 50.0), make_item(Motherboard, 20.0)];
        assert!(!apply_matched_pair_gift(&mut items, &pair_rule()));

        let mut no_pairs = vec![make_item(Motherboard, 20.0)];
        assert!(!apply_matched_pair_gift(&mut no_pairs, &pair_rule()));
    }

    #[test]
    fn test_matched_pair_counts_discounted_items() {
        // An item claimed by an earlier rule still counts toward the pair,
        // it is only excluded from candidacy
        let mut items = vec![
            make_item(Mouse, 10.0),
            make_item(Keyboard, 40.0),
            make_item(Motherboard, 25.0),
        ];
        items[0].discounted = true;

        assert!(apply_matched_pair_gift(&mut items, &pair_rule()));
        // Cheapest non-discounted is the motherboard, not the mouse
        assert_eq!(items[0].price, 10.0);
        assert_eq!(items[2].price, 0.0);
        assert!(items[2].discounted);
    }

    #[test]
    fn test_matched_pair_noop_when_everything_discounted() {
        let mut items = vec![make_item(Mouse, 10.0), make_item(Keyboard, 10.0)];
        for item in items.iter_mut() {
            item.discounted = true;
        }

        assert!(!apply_matched_pair_gift(&mut items, &pair_rule()));
        assert!(items.iter().all(|i| i.price == 10.0));
    }
}
