use async_trait::async_trait;
use common::OrderId;
use domain::Order;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    Result, StoreError,
    store::OrderRepository,
};

/// PostgreSQL-backed order repository.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgreSQL order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let id = OrderId::from_uuid(row.try_get::<Uuid, _>("id")?);
        let price: f64 = row.try_get("price")?;
        let tax: f64 = row.try_get("tax")?;

        // Rebuilding through the constructor re-derives the final price,
        // so a row can never resurrect a violated invariant.
        Ok(Order::new(id, price, tax)?)
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: &Order) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (id, price, tax, final_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.id().as_uuid())
        .bind(order.price())
        .bind(order.tax())
        .bind(order.final_price())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return StoreError::DuplicateKey(order.id());
            }
            StoreError::Database(e)
        })?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT id, price, tax FROM orders ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }
}
