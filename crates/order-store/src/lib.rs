//! Order persistence for the order system.
//!
//! The use-case layer depends only on the [`OrderRepository`] trait; the
//! backing store is chosen at bootstrap. Two implementations are provided:
//! - [`InMemoryOrderRepository`] for tests and broker-less local runs
//! - [`PostgresOrderRepository`] backed by sqlx

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;
pub use store::OrderRepository;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
