//! Order Pricing Engine
//!
//! Runs the five-step pipeline per order:
//! 1. Validation (ordered, short-circuiting)
//! 2. Itemized discount rules (bulk-category, then matched-pair)
//! 3. Aggregation
//! 4. Order-level adjustments
//! 5. Promotional free-order rule (capped per instance)

use chrono::NaiveTime;
use rust_decimal::Decimal;
use shared::{LineItem, PricingError, User};

use crate::config::EngineConfig;
use crate::luck::Luck;
use crate::money::{to_decimal, to_f64};
use crate::rules::{apply_matched_pair_gift, apply_quantity_discount};
use crate::validate::checked_order;

/// Aggregates above this get the bulk-order discount
const LARGE_ORDER_THRESHOLD: f64 = 1000.0;
/// Large orders pay 90% of the aggregate
const LARGE_ORDER_MULTIPLIER: f64 = 0.9;
/// Aggregates below this pay the small-order commission
const SMALL_ORDER_THRESHOLD: f64 = 10.0;
/// Flat commission added to small orders
const SMALL_ORDER_FEE: f64 = 2.0;

/// The pricing engine.
///
/// Holds the rule configuration, the injected order time-of-day, the
/// injected randomness source, and the lifetime gift counter. The counter
/// is the only state shared across calls; it increases monotonically and
/// saturates at the configured cap. The `&mut self` receiver keeps the
/// check-and-increment a single read-modify-write, so one instance can
/// never grant more than `cap` gifts.
pub struct PricingEngine {
    config: EngineConfig,
    /// Time-of-day used for the promotional window check
    order_time: NaiveTime,
    luck: Box<dyn Luck + Send>,
    /// Lifetime count of promotional gifts granted by this instance
    gifts_granted: u32,
}

impl std::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("order_time", &self.order_time)
            .field("gifts_granted", &self.gifts_granted)
            .finish()
    }
}

impl PricingEngine {
    /// Engine with the canonical rule set.
    pub fn new(luck: Box<dyn Luck + Send>, order_time: NaiveTime) -> Self {
        Self::with_config(EngineConfig::default(), luck, order_time)
    }

    pub fn with_config(
        config: EngineConfig,
        luck: Box<dyn Luck + Send>,
        order_time: NaiveTime,
    ) -> Self {
        Self {
            config,
            order_time,
            luck,
            gifts_granted: 0,
        }
    }

    /// Number of promotional gifts granted so far by this instance
    pub fn gifts_granted(&self) -> u32 {
        self.gifts_granted
    }

    /// Price an order.
    ///
    /// On success the item slice holds the discounted prices (pricing
    /// mutates items in place) and the returned total reflects order-level
    /// adjustments — or 0 when the promotional gift fires. On a validation
    /// error the items are untouched.
    pub fn price_order(
        &mut self,
        items: Option<&mut [LineItem]>,
        user: Option<&User>,
    ) -> Result<f64, PricingError> {
        let (items, user) = checked_order(items, user)?;

        for rule in &self.config.quantity_discounts {
            apply_quantity_discount(items, rule);
        }
        apply_matched_pair_gift(items, &self.config.matched_pair);

        let aggregate: Decimal = items.iter().map(|i| to_decimal(i.price)).sum();

        // Both adjustments test the pre-adjustment aggregate
        let mut total = aggregate;
        if aggregate > to_decimal(LARGE_ORDER_THRESHOLD) {
            total *= to_decimal(LARGE_ORDER_MULTIPLIER);
        }
        if aggregate < to_decimal(SMALL_ORDER_THRESHOLD) {
            total += to_decimal(SMALL_ORDER_FEE);
        }

        if self.draw_gift(user) {
            return Ok(0.0);
        }

        Ok(to_f64(total))
    }

    /// Perform the promotional draw for one order.
    ///
    /// The draw is consumed on every priced order, even when the user or
    /// the time window does not qualify. The lifetime cap is consulted
    /// only once every other condition holds.
    fn draw_gift(&mut self, user: &User) -> bool {
        let lucky = self.luck.draw();
        let gift = user.age < self.config.gift.maximum_age
            && self.order_time > self.config.gift.window_start
            && self.order_time < self.config.gift.window_end
            && lucky;
        if gift && self.gifts_granted < self.config.gift.cap {
            self.gifts_granted += 1;
            tracing::info!(
                user = %user.name,
                gifts_granted = self.gifts_granted,
                "promotional gift granted, order is free"
            );
            true
        } else {
            false
        }
    }
}
