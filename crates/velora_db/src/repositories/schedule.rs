//! Repository for the weekly schedule
//!
//! This module provides the interface for the clinic's opening hours (one
//! row per weekday) and for day-level blocks (holidays, renovations).
//! Times are zero-padded 24h `HH:MM` strings, dates `YYYY-MM-DD`.

use crate::error::DbError;

// Re-export the shared records for convenience
pub use velora_common::models::{BlockedDate, WorkingHours};

/// Repository for working hours and blocked dates
pub trait ScheduleRepository {
    /// Initialize the database schema
    ///
    /// Creates the working_hours and blocked_dates tables if they don't
    /// already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert or replace the opening hours for one weekday
    fn upsert_working_hours(
        &self,
        hours: WorkingHours,
    ) -> impl std::future::Future<Output = Result<WorkingHours, DbError>> + Send;

    /// Opening hours for a weekday (0 = Sunday .. 6 = Saturday)
    ///
    /// Returns None when no row exists for the weekday, which callers treat
    /// as "no schedule defined".
    fn working_hours_for(
        &self,
        day_of_week: i64,
    ) -> impl std::future::Future<Output = Result<Option<WorkingHours>, DbError>> + Send;

    /// All configured weekdays, ascending by day_of_week
    fn list_working_hours(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<WorkingHours>, DbError>> + Send;

    /// Mark a whole day as unavailable
    fn block_date(
        &self,
        blocked: BlockedDate,
    ) -> impl std::future::Future<Output = Result<BlockedDate, DbError>> + Send;

    /// Remove a day-level block. Returns false when the date was not blocked.
    fn unblock_date(
        &self,
        date: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Whether the given date is blocked
    fn is_date_blocked(
        &self,
        date: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// All blocked dates, ascending
    fn list_blocked_dates(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<BlockedDate>, DbError>> + Send;
}
