use common::OrderId;
use domain::OrderError;
use thiserror::Error;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order with this ID has already been saved.
    #[error("order {0} already exists")]
    DuplicateKey(OrderId),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row no longer satisfies the entity invariants.
    #[error("stored order is invalid: {0}")]
    InvalidRecord(#[from] OrderError),
}
