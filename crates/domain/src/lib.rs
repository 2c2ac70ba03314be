//! Domain layer for the order system.
//!
//! This crate provides the core domain model:
//! - The immutable [`Order`] entity with its price/tax/final-price invariant
//! - [`OrderError`] for construction-time validation failures
//! - The [`OrderCreated`] event dispatched after a successful create

pub mod order;

pub use order::{ORDER_CREATED, Order, OrderCreated, OrderError};
