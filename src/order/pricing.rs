//! Order pricing. The only module that changes when pricing rules do.

use crate::order::OrderDetails;

/// Sums the price of every line item in the order.
pub fn total_cost(order: &OrderDetails) -> f64 {
    order.items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Customer, Item, ShippingAddress};

    fn order_with_items(items: Vec<Item>) -> OrderDetails {
        OrderDetails::new(
            Customer::new("Logan Nitzsche", "lnitzsc@siue.edu", "123-456-7890"),
            items,
            Some(ShippingAddress::new("123 Main St, Edwardsville, Illinois")),
        )
    }

    #[test]
    fn total_sums_item_prices() {
        let order = order_with_items(vec![
            Item::new("Xbox", 10.0),
            Item::new("PlayStation", 20.0),
        ]);
        assert_eq!(total_cost(&order), 30.0);
    }

    #[test]
    fn total_of_empty_order_is_zero() {
        let order = order_with_items(vec![]);
        assert_eq!(total_cost(&order), 0.0);
    }
}
