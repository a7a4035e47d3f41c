//! SQL implementation of the treatment catalog repository

use crate::error::DbError;
use crate::repositories::catalog::{ServiceCatalogRepository, ServiceOffering};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the service catalog repository
#[derive(Debug, Clone)]
pub struct SqlServiceCatalogRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlServiceCatalogRepository {
    /// Create a new SQL service catalog repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn offering_from_row(row: &sqlx::any::AnyRow) -> ServiceOffering {
    ServiceOffering {
        id: row.try_get("id").unwrap_or_default(),
        name: row.try_get("name").unwrap_or_default(),
        description: row.try_get("description").ok(),
        duration_minutes: row.try_get("duration_minutes").unwrap_or_default(),
        price_cents: row.try_get("price_cents").unwrap_or_default(),
        currency: row.try_get("currency").ok(),
        active: row.try_get::<i64, _>("active").unwrap_or_default() != 0,
    }
}

impl ServiceCatalogRepository for SqlServiceCatalogRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing service catalog schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS services (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                duration_minutes INTEGER NOT NULL,
                price_cents INTEGER NOT NULL,
                currency TEXT,
                active INTEGER NOT NULL DEFAULT 1
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Service catalog schema initialized successfully");
        Ok(())
    }

    async fn upsert_service(&self, offering: ServiceOffering) -> Result<ServiceOffering, DbError> {
        if offering.id == 0 {
            debug!("Creating service offering: {}", offering.name);

            let query = r#"
                INSERT INTO services (name, description, duration_minutes, price_cents, currency, active)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, description, duration_minutes, price_cents, currency, active
            "#;

            let row = sqlx::query(query)
                .bind(&offering.name)
                .bind(&offering.description)
                .bind(offering.duration_minutes)
                .bind(offering.price_cents)
                .bind(&offering.currency)
                .bind(offering.active as i64)
                .fetch_one(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to insert service offering: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(offering_from_row(&row))
        } else {
            debug!("Updating service offering: {}", offering.id);

            let query = r#"
                UPDATE services
                SET name = $1, description = $2, duration_minutes = $3,
                    price_cents = $4, currency = $5, active = $6
                WHERE id = $7
                RETURNING id, name, description, duration_minutes, price_cents, currency, active
            "#;

            let row = sqlx::query(query)
                .bind(&offering.name)
                .bind(&offering.description)
                .bind(offering.duration_minutes)
                .bind(offering.price_cents)
                .bind(&offering.currency)
                .bind(offering.active as i64)
                .bind(offering.id)
                .fetch_one(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to update service offering: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(offering_from_row(&row))
        }
    }

    async fn find_by_id(&self, service_id: i64) -> Result<Option<ServiceOffering>, DbError> {
        debug!("Finding service offering: {}", service_id);

        let query = r#"
            SELECT id, name, description, duration_minutes, price_cents, currency, active
            FROM services
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(service_id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find service offering: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.map(|row| offering_from_row(&row)))
    }

    async fn list_active(&self) -> Result<Vec<ServiceOffering>, DbError> {
        debug!("Listing active service offerings");

        let query = r#"
            SELECT id, name, description, duration_minutes, price_cents, currency, active
            FROM services
            WHERE active = 1
            ORDER BY name
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list service offerings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(offering_from_row).collect())
    }
}
