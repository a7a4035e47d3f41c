//! Database integration for Velora
//!
//! This crate provides a database client that is designed to be database
//! agnostic, using SQLx as the underlying database library. It supports
//! SQLite, PostgreSQL, and MySQL databases through feature flags.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Velora configuration system
//! - Repositories for the treatment catalog, weekly schedule, bookings and
//!   shop orders
//!
//! # Example
//!
//! ```rust,no_run
//! use velora_config::load_config;
//! use velora_db::DbClient;
//! use std::sync::Arc;
//!
//! async fn setup_db() -> Result<DbClient, Box<dyn std::error::Error>> {
//!     let config = Arc::new(load_config()?);
//!     let db_client = DbClient::new(&config).await?;
//!     Ok(db_client)
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

// Register the SQLite driver when the crate is loaded
#[cfg(feature = "sqlite")]
mod sqlite_driver {
    // This import ensures the SQLite driver is linked and registered
    #[allow(unused_imports)]
    use sqlx::sqlite::SqlitePoolOptions as _;
}

// Re-export the client, error, factory, and repository traits for ease of use
pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;

// Re-export the repositories module components for ease of use
pub use repositories::{
    BlockedDate, Booking, BookingRepository, BookingRepositoryFactory, Order, OrderRepository,
    OrderRepositoryFactory, ScheduleRepository, ScheduleRepositoryFactory, ServiceCatalogRepository,
    ServiceCatalogRepositoryFactory, ServiceOffering, SqlBookingRepository, SqlOrderRepository,
    SqlScheduleRepository, SqlServiceCatalogRepository, WorkingHours,
};
