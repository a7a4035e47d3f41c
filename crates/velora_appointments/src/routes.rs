// --- File: crates/velora_appointments/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, delete_booking_handler, get_availability_handler,
    get_booked_appointments_handler, get_services_handler, mark_booking_cancelled_handler,
    AppointmentsState,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use velora_common::services::{BoxedError, NotificationService, ScheduleStore};
use velora_config::AppConfig;

/// Creates a router containing all routes for the appointments feature.
///
/// The schedule store and the notifier are constructed once by the backend
/// and injected here, so every feature router shares the same instances.
pub fn routes(
    config: Arc<AppConfig>,
    schedule: Arc<dyn ScheduleStore<Error = BoxedError>>,
    notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
) -> Router {
    let state = Arc::new(AppointmentsState {
        config,
        schedule,
        notifier,
    });

    Router::new()
        .route("/appointments/services", get(get_services_handler))
        .route("/appointments/availability", get(get_availability_handler))
        .route("/appointments/book", post(book_slot_handler))
        .route(
            "/appointments/admin/cancel/{reference}",
            patch(mark_booking_cancelled_handler),
        )
        .route(
            "/appointments/admin/delete/{reference}",
            delete(delete_booking_handler),
        )
        .route(
            "/appointments/admin/bookings",
            get(get_booked_appointments_handler),
        )
        .with_state(state)
}
