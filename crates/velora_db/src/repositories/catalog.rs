//! Repository for the treatment catalog
//!
//! This module provides the interface for storing and retrieving the
//! clinic's service offerings (treatments clients can book).

use crate::error::DbError;
use sqlx::FromRow;

// Re-export ServiceOffering from velora_common for convenience
pub use velora_common::models::ServiceOffering;

// DB-specific wrapper for ServiceOffering that implements FromRow
#[derive(Debug, Clone, FromRow)]
pub struct DbServiceOffering {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i64,
    pub price_cents: i64,
    pub currency: Option<String>,
    pub active: i64,
}

impl From<DbServiceOffering> for ServiceOffering {
    fn from(db: DbServiceOffering) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            duration_minutes: db.duration_minutes,
            price_cents: db.price_cents,
            currency: db.currency,
            active: db.active != 0,
        }
    }
}

/// Repository for service offerings
pub trait ServiceCatalogRepository {
    /// Initialize the database schema
    ///
    /// Creates the services table if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert or update a service offering
    ///
    /// An offering with id 0 is inserted; any other id updates the existing
    /// row.
    fn upsert_service(
        &self,
        offering: ServiceOffering,
    ) -> impl std::future::Future<Output = Result<ServiceOffering, DbError>> + Send;

    /// Find a service offering by id
    fn find_by_id(
        &self,
        service_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<ServiceOffering>, DbError>> + Send;

    /// List all active service offerings, ascending by name
    fn list_active(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ServiceOffering>, DbError>> + Send;
}
