use async_trait::async_trait;
use domain::Order;

use crate::Result;

/// Persistence contract the application core depends on.
///
/// Implementations must be thread-safe (`Send + Sync`); the same instance
/// is shared across all use-case invocations.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order.
    ///
    /// Fails with [`StoreError::DuplicateKey`](crate::StoreError) if an
    /// order with the same ID already exists.
    async fn save(&self, order: &Order) -> Result<()>;

    /// Returns all persisted orders, in implementation-defined order.
    ///
    /// An empty store yields an empty `Vec`, not an error.
    async fn find_all(&self) -> Result<Vec<Order>>;
}
