//! List-orders use case.

use std::sync::Arc;

use order_store::OrderRepository;

use crate::create_order::OrderOutput;
use crate::error::UseCaseError;

/// Fetches every persisted order and maps it to the output projection.
pub struct ListOrdersUseCase {
    repository: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
    /// Creates the use case with its injected repository.
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Lists all orders. An empty store yields an empty `Vec`.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<OrderOutput>, UseCaseError> {
        let orders = self.repository.find_all().await?;

        Ok(orders.iter().map(OrderOutput::from).collect())
    }
}
