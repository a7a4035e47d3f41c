//! SQL implementation of the order repository

use crate::error::DbError;
use crate::repositories::order::{Order, OrderRepository};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};
use velora_common::models::ORDER_STATUS_PENDING;

/// SQL implementation of the order repository
#[derive(Debug, Clone)]
pub struct SqlOrderRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlOrderRepository {
    /// Create a new SQL order repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

const ORDER_COLUMNS: &str =
    "id, reference, sku, product_name, quantity, unit_amount, total_amount, \
     currency, customer_name, customer_email, status";

fn order_from_row(row: &sqlx::any::AnyRow) -> Order {
    Order {
        id: row.try_get("id").ok(),
        reference: row.try_get("reference").unwrap_or_default(),
        sku: row.try_get("sku").unwrap_or_default(),
        product_name: row.try_get("product_name").unwrap_or_default(),
        quantity: row.try_get("quantity").unwrap_or_default(),
        unit_amount: row.try_get("unit_amount").unwrap_or_default(),
        total_amount: row.try_get("total_amount").unwrap_or_default(),
        currency: row.try_get("currency").unwrap_or_default(),
        customer_name: row.try_get("customer_name").unwrap_or_default(),
        customer_email: row.try_get("customer_email").ok(),
        status: row.try_get("status").unwrap_or_default(),
        created_at: None, // DateTime<Utc> doesn't implement Decode for sqlx::Any
    }
}

impl OrderRepository for SqlOrderRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing order schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reference TEXT NOT NULL UNIQUE,
                sku TEXT NOT NULL,
                product_name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                unit_amount INTEGER NOT NULL,
                total_amount INTEGER NOT NULL,
                currency TEXT NOT NULL,
                customer_name TEXT NOT NULL,
                customer_email TEXT,
                status TEXT NOT NULL DEFAULT 'pending',
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Order schema initialized successfully");
        Ok(())
    }

    async fn create_order(&self, order: Order) -> Result<Order, DbError> {
        debug!("Creating order for sku: {}", order.sku);

        let query = format!(
            r#"
            INSERT INTO orders (reference, sku, product_name, quantity, unit_amount,
                                total_amount, currency, customer_name, customer_email, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ORDER_COLUMNS}
        "#
        );

        let row = sqlx::query(&query)
            .bind(&order.reference)
            .bind(&order.sku)
            .bind(&order.product_name)
            .bind(order.quantity)
            .bind(order.unit_amount)
            .bind(order.total_amount)
            .bind(&order.currency)
            .bind(&order.customer_name)
            .bind(&order.customer_email)
            .bind(ORDER_STATUS_PENDING)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert order: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let created = order_from_row(&row);
        info!("Order created: {}", created.reference);
        Ok(created)
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>, DbError> {
        debug!("Finding order: {}", reference);

        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE reference = $1");

        let result = sqlx::query(&query)
            .bind(reference)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find order: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.map(|row| order_from_row(&row)))
    }
}
