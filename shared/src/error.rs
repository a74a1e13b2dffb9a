//! Pricing error taxonomy
//!
//! All failures are synchronous return-path errors; nothing is swallowed
//! internally. Either the full price is computed or an error is produced
//! before any rule mutates an item.

use thiserror::Error;

/// Reason an order was rejected during validation.
///
/// Not recoverable for the call: the caller must correct the order and
/// resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Orders must contain at least one item
    #[error("you can't place an order with 0 items")]
    Empty,

    /// An item price was NaN or infinite
    #[error("all item prices must be finite numbers")]
    NonFinitePrice,

    /// An item carried a price below zero
    #[error("all items must have a non-negative price")]
    NegativePrice,

    /// The order exceeded the per-order item cap
    #[error("you can't place an order with more than 30 items")]
    TooManyItems,
}

/// Primary error type for the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A required argument was absent; the caller must fix the call site.
    #[error("required argument `{0}` was not provided")]
    MissingArgument(&'static str),

    /// Structurally invalid order contents.
    #[error("rejected order: {0}")]
    RejectedOrder(RejectReason),
}

impl PricingError {
    /// Create a missing-argument error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingArgument(field)
    }

    /// Create a rejected-order error
    pub fn rejected(reason: RejectReason) -> Self {
        Self::RejectedOrder(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            PricingError::missing("items").to_string(),
            "required argument `items` was not provided"
        );
        assert_eq!(
            PricingError::rejected(RejectReason::Empty).to_string(),
            "rejected order: you can't place an order with 0 items"
        );
    }
}
