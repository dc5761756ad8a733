//! Order validation. The only module that changes when the rules for a
//! well-formed order do.

use crate::order::{OrderDetails, OrderError};

/// Checks that the order can actually be fulfilled.
///
/// An order needs at least one line item and a shipping address. The item
/// check runs first, so an order missing both reports [`OrderError::EmptyOrder`].
pub fn validate_order(order: &OrderDetails) -> Result<(), OrderError> {
    if order.items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    if order.shipping_address.is_none() {
        return Err(OrderError::MissingShippingAddress);
    }
    Ok(())
}
