// --- File: crates/velora_appointments/src/service.rs ---
//! Clinic schedule service implementation.
//!
//! This module provides the production implementation of the
//! [`ScheduleStore`] trait, backed by the SQL repositories in `velora_db`.

use std::sync::Arc;
use velora_common::models::{Booking, ServiceOffering, WorkingHours};
use velora_common::services::{BookingAttempt, BoxFuture, BoxedError, ScheduleStore};
use velora_db::{
    BookingRepository, BookingRepositoryFactory, DbClient, DbError, RepositoryFactory,
    ScheduleRepository, ScheduleRepositoryFactory, ServiceCatalogRepository,
    ServiceCatalogRepositoryFactory, SqlBookingRepository, SqlScheduleRepository,
    SqlServiceCatalogRepository,
};

fn boxed(err: DbError) -> BoxedError {
    BoxedError(Box::new(err))
}

/// Schedule store backed by the clinic database.
///
/// Cloning is cheap; the repositories share one pool.
#[derive(Clone)]
pub struct ClinicScheduleService {
    catalog: SqlServiceCatalogRepository,
    schedule: SqlScheduleRepository,
    bookings: SqlBookingRepository,
}

impl ClinicScheduleService {
    /// Create a new schedule service over the given database client.
    pub fn new(db_client: DbClient) -> Self {
        Self {
            catalog: ServiceCatalogRepositoryFactory.create_repository(db_client.clone()),
            schedule: ScheduleRepositoryFactory.create_repository(db_client.clone()),
            bookings: BookingRepositoryFactory.create_repository(db_client),
        }
    }

    /// Create the underlying tables when they don't exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        self.catalog.init_schema().await?;
        self.schedule.init_schema().await?;
        self.bookings.init_schema().await?;
        Ok(())
    }

    /// Convenience constructor used by the router: wraps the service in the
    /// trait object the handlers expect.
    pub fn into_store(self) -> Arc<dyn ScheduleStore<Error = BoxedError>> {
        Arc::new(self)
    }
}

impl ScheduleStore for ClinicScheduleService {
    type Error = BoxedError;

    fn find_service(&self, service_id: i64) -> BoxFuture<'_, Option<ServiceOffering>, BoxedError> {
        let catalog = self.catalog.clone();
        Box::pin(async move { catalog.find_by_id(service_id).await.map_err(boxed) })
    }

    fn list_services(&self) -> BoxFuture<'_, Vec<ServiceOffering>, BoxedError> {
        let catalog = self.catalog.clone();
        Box::pin(async move { catalog.list_active().await.map_err(boxed) })
    }

    fn working_hours_for(&self, day_of_week: i64) -> BoxFuture<'_, Option<WorkingHours>, BoxedError> {
        let schedule = self.schedule.clone();
        Box::pin(async move { schedule.working_hours_for(day_of_week).await.map_err(boxed) })
    }

    fn is_date_blocked(&self, date: &str) -> BoxFuture<'_, bool, BoxedError> {
        let schedule = self.schedule.clone();
        let date = date.to_string();
        Box::pin(async move { schedule.is_date_blocked(&date).await.map_err(boxed) })
    }

    fn bookings_on(&self, date: &str) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
        let bookings = self.bookings.clone();
        let date = date.to_string();
        Box::pin(async move { bookings.active_on_date(&date).await.map_err(boxed) })
    }

    fn create_booking(&self, booking: Booking) -> BoxFuture<'_, BookingAttempt, BoxedError> {
        let bookings = self.bookings.clone();
        Box::pin(async move {
            match bookings.create_booking(booking).await {
                Ok(created) => Ok(BookingAttempt::Created(created)),
                Err(DbError::Conflict(_)) => Ok(BookingAttempt::Conflict),
                Err(err) => Err(boxed(err)),
            }
        })
    }

    fn cancel_booking(&self, reference: &str) -> BoxFuture<'_, bool, BoxedError> {
        let bookings = self.bookings.clone();
        let reference = reference.to_string();
        Box::pin(async move { bookings.cancel(&reference).await.map_err(boxed) })
    }

    fn delete_booking(&self, reference: &str) -> BoxFuture<'_, bool, BoxedError> {
        let bookings = self.bookings.clone();
        let reference = reference.to_string();
        Box::pin(async move { bookings.delete(&reference).await.map_err(boxed) })
    }

    fn bookings_between(
        &self,
        start_date: &str,
        end_date: &str,
        include_cancelled: bool,
    ) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
        let bookings = self.bookings.clone();
        let start_date = start_date.to_string();
        let end_date = end_date.to_string();
        Box::pin(async move {
            bookings
                .list_between(&start_date, &end_date, include_cancelled)
                .await
                .map_err(boxed)
        })
    }
}
