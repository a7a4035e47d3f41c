//! Repository modules for database access
//!
//! This module contains repository traits and implementations for the
//! clinic's entities: the treatment catalog, the weekly schedule, bookings
//! and shop orders.

pub mod booking;
pub mod booking_sql;
pub mod catalog;
pub mod catalog_sql;
pub mod factories;
pub mod order;
pub mod order_sql;
pub mod schedule;
pub mod schedule_sql;

// Re-export the repositories and factories for ease of use
pub use booking::{Booking, BookingRepository};
pub use booking_sql::SqlBookingRepository;
pub use catalog::{ServiceCatalogRepository, ServiceOffering};
pub use catalog_sql::SqlServiceCatalogRepository;
pub use factories::{
    BookingRepositoryFactory, OrderRepositoryFactory, ScheduleRepositoryFactory,
    ServiceCatalogRepositoryFactory,
};
pub use order::{Order, OrderRepository};
pub use order_sql::SqlOrderRepository;
pub use schedule::{BlockedDate, ScheduleRepository, WorkingHours};
pub use schedule_sql::SqlScheduleRepository;
