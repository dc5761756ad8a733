//! Pure data structures for the order pipeline.

use serde::{Deserialize, Serialize};

/// The customer placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// A single priced line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Where the order ships to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
}

impl ShippingAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Everything needed to process one order.
///
/// This type only carries data. Pricing, validation, and notification each
/// live in their own module and borrow it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub customer: Customer,
    pub items: Vec<Item>,
    pub shipping_address: Option<ShippingAddress>,
}

impl OrderDetails {
    pub fn new(
        customer: Customer,
        items: Vec<Item>,
        shipping_address: Option<ShippingAddress>,
    ) -> Self {
        Self {
            customer,
            items,
            shipping_address,
        }
    }
}
