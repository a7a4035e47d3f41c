//! Repository for appointment bookings
//!
//! This module provides the interface for storing and retrieving client
//! appointments. Creation is guarded: the insert and the overlap check run
//! in one transaction, so two clients racing for the same window cannot
//! both commit.

use crate::error::DbError;
use sqlx::FromRow;

// Re-export Booking from velora_common for convenience
pub use velora_common::models::Booking;

// DB-specific wrapper for Booking that implements FromRow
#[derive(Debug, Clone, FromRow)]
pub struct DbBooking {
    pub id: Option<i64>,
    pub reference: String,
    pub service_id: i64,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<DbBooking> for Booking {
    fn from(db: DbBooking) -> Self {
        Self {
            id: db.id,
            reference: db.reference,
            service_id: db.service_id,
            customer_name: db.customer_name,
            customer_email: db.customer_email,
            customer_phone: db.customer_phone,
            date: db.date,
            start_time: db.start_time,
            end_time: db.end_time,
            status: db.status,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Repository for appointment bookings
pub trait BookingRepository {
    /// Initialize the database schema
    ///
    /// Creates the bookings table and its date index if they don't already
    /// exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert a booking unless it overlaps an active booking on the same
    /// date
    ///
    /// The overlap re-check and the insert run inside one transaction;
    /// a conflicting row yields [`DbError::Conflict`] and nothing is
    /// written.
    fn create_booking(
        &self,
        booking: Booking,
    ) -> impl std::future::Future<Output = Result<Booking, DbError>> + Send;

    /// Find a booking by its public reference
    fn find_by_reference(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<Option<Booking>, DbError>> + Send;

    /// Active bookings on one date, ascending by start time
    fn active_on_date(
        &self,
        date: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, DbError>> + Send;

    /// Mark a booking cancelled, keeping the record
    ///
    /// # Returns
    ///
    /// `true` if a booking was cancelled, `false` if the reference is
    /// unknown
    fn cancel(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Delete a booking record entirely
    fn delete(
        &self,
        reference: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Bookings whose date falls within `[start_date, end_date]`
    fn list_between(
        &self,
        start_date: &str,
        end_date: &str,
        include_cancelled: bool,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, DbError>> + Send;
}
