//! Repository for shop orders
//!
//! This module provides the interface for persisting product purchases.

use crate::error::DbError;

// Re-export Order from velora_common for convenience
pub use velora_common::models::Order;

/// Repository for shop orders
pub trait OrderRepository {
    /// Initialize the database schema
    ///
    /// Creates the orders table if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Persist a new order
    fn create_order(
        &self,
        order: Order,
    ) -> impl std::future::Future<Output = Result<Order, DbError>> + Send;

    /// Find an order by its public reference
    fn find_by_reference(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<Option<Order>, DbError>> + Send;
}
