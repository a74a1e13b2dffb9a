//! Order validation
//!
//! Five ordered checks, short-circuiting on the first failure. Validation
//! runs strictly before any rule mutates an item, so a rejected order is
//! returned to the caller untouched.

use shared::{LineItem, PricingError, RejectReason, User};

/// Maximum number of items in a single order
pub const MAX_ORDER_ITEMS: usize = 30;

/// Validate the pricing arguments and order contents.
///
/// Check order (the first failing check wins):
/// 1. `items` provided
/// 2. `user` provided
/// 3. order non-empty
/// 4. every item price finite and non-negative
/// 5. item count within [`MAX_ORDER_ITEMS`]
///
/// Returns the unwrapped handles so the pipeline never re-checks absence.
pub fn checked_order<'a>(
    items: Option<&'a mut [LineItem]>,
    user: Option<&'a User>,
) -> Result<(&'a mut [LineItem], &'a User), PricingError> {
    let items = items.ok_or(PricingError::MissingArgument("items"))?;
    let user = user.ok_or(PricingError::MissingArgument("user"))?;

    if items.is_empty() {
        return Err(PricingError::RejectedOrder(RejectReason::Empty));
    }

    for item in items.iter() {
        if !item.price.is_finite() {
            return Err(PricingError::RejectedOrder(RejectReason::NonFinitePrice));
        }
        if item.price < 0.0 {
            return Err(PricingError::RejectedOrder(RejectReason::NegativePrice));
        }
    }

    if items.len() > MAX_ORDER_ITEMS {
        return Err(PricingError::RejectedOrder(RejectReason::TooManyItems));
    }

    Ok((items, user))
}
