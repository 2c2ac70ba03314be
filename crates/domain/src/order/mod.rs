//! Order entity and related types.

mod entity;
mod events;

pub use self::entity::Order;
pub use self::events::{ORDER_CREATED, OrderCreated};

use thiserror::Error;

/// Errors that can occur when constructing an order.
///
/// These are always recoverable by rejecting the caller's input; an invalid
/// order is never persisted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// Price is negative or not a finite number.
    #[error("invalid price: {price} (must be a non-negative amount)")]
    InvalidPrice { price: f64 },

    /// Tax is negative or not a finite number.
    #[error("invalid tax: {tax} (must be a non-negative amount)")]
    InvalidTax { tax: f64 },
}
