//! Application layer for the order system.
//!
//! Transport adapters call exactly two entry points:
//! [`CreateOrderUseCase::execute`] and [`ListOrdersUseCase::execute`].
//! Each use case receives its collaborators (repository, dispatcher) at
//! construction; nothing is resolved at call time.

pub mod create_order;
pub mod error;
pub mod list_orders;

pub use create_order::{CreateOrderInput, CreateOrderUseCase, OrderOutput};
pub use error::UseCaseError;
pub use list_orders::ListOrdersUseCase;
