//! Outward-facing side effects of a processed order.
//!
//! Pricing and validation are pure; everything that touches the outside
//! world ends up here, so a change to how customers are notified never
//! touches the arithmetic.

use tracing::info;

use crate::order::Customer;

/// Sends the order confirmation email to the customer.
pub fn send_order_confirmation(customer: &Customer) {
    info!(email = %customer.email, "Order confirmation email sent");
}

/// Refreshes inventory levels after an order has been processed.
pub fn update_inventory_levels() {
    info!("Inventory levels updated after order processing");
}
