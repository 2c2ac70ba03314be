use std::sync::Arc;

use async_trait::async_trait;
use domain::Order;
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    store::OrderRepository,
};

/// In-memory order repository.
///
/// Used by tests and by broker-less local runs; provides the same
/// interface as the PostgreSQL implementation. Orders are kept in
/// insertion order.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Removes all stored orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;

        if orders.iter().any(|existing| existing.id() == order.id()) {
            return Err(StoreError::DuplicateKey(order.id()));
        }

        orders.push(order.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }
}
