//! Error types for order validation.

use thiserror::Error;

/// Ways an order can fail validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order has no line items.
    #[error("No items in the order")]
    EmptyOrder,

    /// The order has no shipping address.
    #[error("Shipping address is missing")]
    MissingShippingAddress,
}
