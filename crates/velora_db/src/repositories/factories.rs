//! Factories for creating repository instances
//!
//! Each factory implements [`RepositoryFactory`] over the shared
//! [`DbClient`], so callers can construct repositories without naming the
//! concrete SQL types at every call site.

use crate::repositories::booking_sql::SqlBookingRepository;
use crate::repositories::catalog_sql::SqlServiceCatalogRepository;
use crate::repositories::order_sql::SqlOrderRepository;
use crate::repositories::schedule_sql::SqlScheduleRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating service catalog repositories
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalogRepositoryFactory;

impl RepositoryFactory<SqlServiceCatalogRepository, DbClient> for ServiceCatalogRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlServiceCatalogRepository {
        SqlServiceCatalogRepository::new(db_client)
    }
}

/// Factory for creating schedule repositories
#[derive(Debug, Clone, Default)]
pub struct ScheduleRepositoryFactory;

impl RepositoryFactory<SqlScheduleRepository, DbClient> for ScheduleRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlScheduleRepository {
        SqlScheduleRepository::new(db_client)
    }
}

/// Factory for creating booking repositories
#[derive(Debug, Clone, Default)]
pub struct BookingRepositoryFactory;

impl RepositoryFactory<SqlBookingRepository, DbClient> for BookingRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlBookingRepository {
        SqlBookingRepository::new(db_client)
    }
}

/// Factory for creating order repositories
#[derive(Debug, Clone, Default)]
pub struct OrderRepositoryFactory;

impl RepositoryFactory<SqlOrderRepository, DbClient> for OrderRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlOrderRepository {
        SqlOrderRepository::new(db_client)
    }
}
