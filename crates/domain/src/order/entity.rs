//! The order entity.

use common::OrderId;
use serde::Serialize;

use super::OrderError;

/// An immutable record of a priced transaction.
///
/// The final price is derived as `price + tax` exactly once, at
/// construction; there are no setters, so the invariant
/// `final_price == price + tax` holds for the lifetime of the value.
/// Identity is the order ID: two orders with the same ID compare equal
/// regardless of their amounts.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    price: f64,
    tax: f64,
    final_price: f64,
}

impl Order {
    /// Constructs an order, validating the caller-supplied amounts.
    ///
    /// `price` and `tax` must each be finite and non-negative; `tax` is an
    /// additive amount already computed by the caller, not a rate.
    pub fn new(id: OrderId, price: f64, tax: f64) -> Result<Self, OrderError> {
        if !price.is_finite() || price < 0.0 {
            return Err(OrderError::InvalidPrice { price });
        }
        if !tax.is_finite() || tax < 0.0 {
            return Err(OrderError::InvalidTax { tax });
        }

        Ok(Self {
            id,
            price,
            tax,
            final_price: price + tax,
        })
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the base price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the tax amount.
    pub fn tax(&self) -> f64 {
        self.tax
    }

    /// Returns the final price (`price + tax`).
    pub fn final_price(&self) -> f64 {
        self.final_price
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}
