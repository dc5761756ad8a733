//! Single Responsibility walkthrough.
//!
//! One hard-coded order flows through four collaborators in turn: pricing,
//! validation, confirmation, and the inventory refresh. Each step lives in
//! its own module of [`solid_recipe::order`], so each has exactly one reason
//! to change.

use solid_recipe::lifecycle::setup_tracing;
use solid_recipe::order::{notify, pricing, validate, Customer, Item, OrderDetails, ShippingAddress};
use tracing::{info, warn};

fn main() {
    setup_tracing();

    info!("Starting order pipeline demo");

    let customer = Customer::new("Logan Nitzsche", "lnitzsc@siue.edu", "123-456-7890");
    let items = vec![Item::new("Xbox", 10.0), Item::new("PlayStation", 20.0)];
    let shipping_address = ShippingAddress::new("123 Main St, Edwardsville, Illinois");
    let order = OrderDetails::new(customer, items, Some(shipping_address));

    let span = tracing::info_span!("order_processing").entered();

    let total = pricing::total_cost(&order);
    info!(total, "Total order cost");

    match validate::validate_order(&order) {
        Ok(()) => info!("Order data is valid"),
        Err(e) => warn!(error = %e, "Order data is not valid"),
    }

    notify::send_order_confirmation(&order.customer);
    notify::update_inventory_levels();

    drop(span);
    info!("Order pipeline demo completed");
}
