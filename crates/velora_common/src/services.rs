// --- File: crates/velora_common/src/services.rs ---
//! Service abstractions shared across the application.
//!
//! This module provides trait definitions for the services the feature
//! crates depend on. The traits allow for dependency injection and easier
//! testing by decoupling handlers from the concrete store and notifier
//! implementations.

use crate::models::{Booking, ServiceOffering, WorkingHours};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Outcome of a guarded booking insert.
///
/// The conflict case is part of the normal contract, not an error: two
/// clients can race for the same window and exactly one insert commits.
#[derive(Debug, Clone)]
pub enum BookingAttempt {
    Created(Booking),
    Conflict,
}

/// A trait for the clinic's scheduling data store.
///
/// This trait defines everything the appointment endpoints need: resolving
/// services, reading the weekly schedule and blocked dates, and the guarded
/// booking lifecycle. Dates are `YYYY-MM-DD`, times `HH:MM`.
pub trait ScheduleStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up a service offering by id. Returns None when unknown.
    fn find_service(
        &self,
        service_id: i64,
    ) -> BoxFuture<'_, Option<ServiceOffering>, Self::Error>;

    /// All active service offerings, for the public services page.
    fn list_services(&self) -> BoxFuture<'_, Vec<ServiceOffering>, Self::Error>;

    /// Opening hours for a weekday (0 = Sunday .. 6 = Saturday).
    fn working_hours_for(
        &self,
        day_of_week: i64,
    ) -> BoxFuture<'_, Option<WorkingHours>, Self::Error>;

    /// Whether the given date is vetoed entirely.
    fn is_date_blocked(&self, date: &str) -> BoxFuture<'_, bool, Self::Error>;

    /// Active bookings on the given date, ascending by start time.
    fn bookings_on(&self, date: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Insert a booking unless it overlaps an active booking on the same
    /// date (transactional check-and-insert).
    fn create_booking(&self, booking: Booking) -> BoxFuture<'_, BookingAttempt, Self::Error>;

    /// Flip a booking to cancelled, keeping the record. Returns false when
    /// the reference is unknown.
    fn cancel_booking(&self, reference: &str) -> BoxFuture<'_, bool, Self::Error>;

    /// Remove a booking record entirely. Returns false when unknown.
    fn delete_booking(&self, reference: &str) -> BoxFuture<'_, bool, Self::Error>;

    /// Bookings whose date falls in `[start_date, end_date]`.
    fn bookings_between(
        &self,
        start_date: &str,
        end_date: &str,
        include_cancelled: bool,
    ) -> BoxFuture<'_, Vec<Booking>, Self::Error>;
}

/// A notice pushed to the configured notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// e.g. "booking.created", "booking.cancelled", "order.created"
    pub kind: String,
    pub subject: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    pub delivered: bool,
    pub detail: Option<String>,
}

/// A trait for notification service operations.
///
/// Delivery failures must never fail the request that produced the notice;
/// callers log and move on.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver a notice.
    fn deliver(&self, notice: Notice) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A trait for the shop's order store.
pub trait OrderStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a new order.
    fn create_order(
        &self,
        order: crate::models::Order,
    ) -> BoxFuture<'_, crate::models::Order, Self::Error>;

    /// Look up an order by its public reference.
    fn find_order(
        &self,
        reference: &str,
    ) -> BoxFuture<'_, Option<crate::models::Order>, Self::Error>;
}

/// A factory for creating service instances.
///
/// Implemented by the backend; constructed once per process and handed to
/// the routers by reference, instead of module-level globals.
pub trait ServiceFactory: Send + Sync {
    /// Get the scheduling store, when the appointments feature is enabled.
    fn schedule_store(&self) -> Option<Arc<dyn ScheduleStore<Error = BoxedError>>>;

    /// Get the order store, when the shop feature is enabled.
    fn order_store(&self) -> Option<Arc<dyn OrderStore<Error = BoxedError>>>;

    /// Get the notification service, when a notifier is configured.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;
}
