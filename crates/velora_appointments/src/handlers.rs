// File: crates/velora_appointments/src/handlers.rs
use crate::logic::{
    compute_slots, format_hhmm, parse_hhmm, AvailabilityQuery, AvailableSlotsResponse,
    BookSlotRequest, BookedAppointment, BookedInterval, BookedListQuery, BookedListResponse,
    BookingResponse, CancellationResponse, ServicesResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Datelike, NaiveDate};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use velora_common::models::{Booking, BOOKING_STATUS_ACTIVE};
use velora_common::services::{
    BookingAttempt, BoxedError, Notice, NotificationService, ScheduleStore,
};
use velora_config::AppConfig;

// Define shared state needed by appointment handlers
#[derive(Clone)]
pub struct AppointmentsState {
    pub config: Arc<AppConfig>,
    pub schedule: Arc<dyn ScheduleStore<Error = BoxedError>>,
    pub notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl AppointmentsState {
    fn buffer_minutes(&self) -> i64 {
        self.config
            .scheduling
            .as_ref()
            .map(|scheduling| scheduling.buffer_minutes)
            .unwrap_or(0)
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, (StatusCode, String)> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid {} format (YYYY-MM-DD)", field),
        )
    })
}

fn store_error(err: BoxedError) -> (StatusCode, String) {
    info!("Schedule store error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to query the schedule".to_string(),
    )
}

async fn notify(state: &AppointmentsState, notice: Notice) {
    let Some(notifier) = &state.notifier else {
        return;
    };
    // Delivery failures never fail the request that produced the notice.
    match notifier.deliver(notice).await {
        Ok(result) if result.delivered => debug!("Notice delivered"),
        Ok(result) => warn!("Notice not delivered: {:?}", result.detail),
        Err(err) => warn!("Notice delivery failed: {}", err),
    }
}

/// Handler to list the bookable services.
#[axum::debug_handler]
pub async fn get_services_handler(
    State(state): State<Arc<AppointmentsState>>,
) -> Result<Json<ServicesResponse>, (StatusCode, String)> {
    if !state.config.use_appointments {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Appointments are disabled.".to_string(),
        ));
    }

    let services = state.schedule.list_services().await.map_err(store_error)?;

    Ok(Json(ServicesResponse {
        services: services.into_iter().map(Into::into).collect(),
    }))
}

/// Handler to get available time slots for a service on one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/appointments/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Bookable slots for the day", body = AvailableSlotsResponse),
        (status = 400, description = "Bad request (e.g., invalid date format, unknown service)"),
        (status = 500, description = "Internal error")
    ),
    tag = "Appointments"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<AppointmentsState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, (StatusCode, String)> {
    // Ensure the feature is enabled via runtime config
    if !state.config.use_appointments {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Appointments are disabled.".to_string(),
        ));
    }

    let date = parse_date(&query.date, "date")?;

    // --- Resolve the service ---
    let service = state
        .schedule
        .find_service(query.service_id)
        .await
        .map_err(store_error)?
        .filter(|service| service.active)
        .ok_or_else(|| {
            let err_msg = format!("No service offered with id {}.", query.service_id);
            info!("{}", err_msg);
            (StatusCode::BAD_REQUEST, err_msg)
        })?;

    // --- Day-level veto: blocked dates never reach the calculator ---
    if state
        .schedule
        .is_date_blocked(&query.date)
        .await
        .map_err(store_error)?
    {
        debug!("Date {} is blocked, returning no slots", query.date);
        return Ok(Json(AvailableSlotsResponse { slots: Vec::new() }));
    }

    // --- Gather the day's inputs ---
    let day_of_week = date.weekday().num_days_from_sunday() as i64;
    let working_hours = state
        .schedule
        .working_hours_for(day_of_week)
        .await
        .map_err(store_error)?;

    let bookings = state
        .schedule
        .bookings_on(&query.date)
        .await
        .map_err(store_error)?;
    let booked: Vec<BookedInterval> = bookings.iter().map(BookedInterval::from).collect();

    let slots = compute_slots(
        working_hours.as_ref(),
        service.duration_minutes,
        state.buffer_minutes(),
        &booked,
    );

    Ok(Json(AvailableSlotsResponse { slots }))
}

/// Handler to book a time slot.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<AppointmentsState>>, // Extract shared appointment state
    Json(payload): Json<BookSlotRequest>,        // Extract JSON body
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    if !state.config.use_appointments {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Appointments are disabled.".to_string(),
        ));
    }

    if payload.customer_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "customer_name must not be empty".to_string(),
        ));
    }

    let date = parse_date(&payload.date, "date")?;
    let start_minutes = parse_hhmm(&payload.start_time).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid start_time format (HH:MM)".to_string(),
        )
    })?;

    let service = state
        .schedule
        .find_service(payload.service_id)
        .await
        .map_err(store_error)?
        .filter(|service| service.active)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("No service offered with id {}.", payload.service_id),
            )
        })?;

    if state
        .schedule
        .is_date_blocked(&payload.date)
        .await
        .map_err(store_error)?
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "Selected date is not bookable.".to_string(),
        ));
    }

    // The end is always derived server-side from the service duration; the
    // client cannot shorten or stretch a slot.
    let start_time = format_hhmm(start_minutes);
    let end_time = format_hhmm(start_minutes + service.duration_minutes);

    // Re-run the calculator and require the requested window to be one of
    // the offered slots. This rejects off-grid starts, break-window starts
    // and already-taken windows in one pass.
    let day_of_week = date.weekday().num_days_from_sunday() as i64;
    let working_hours = state
        .schedule
        .working_hours_for(day_of_week)
        .await
        .map_err(store_error)?;
    let bookings = state
        .schedule
        .bookings_on(&payload.date)
        .await
        .map_err(store_error)?;
    let booked: Vec<BookedInterval> = bookings.iter().map(BookedInterval::from).collect();

    let offered = compute_slots(
        working_hours.as_ref(),
        service.duration_minutes,
        state.buffer_minutes(),
        &booked,
    );
    if !offered.iter().any(|slot| slot.start_time == start_time) {
        return Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        ));
    }

    let booking = Booking {
        id: None,
        reference: Uuid::new_v4().to_string(),
        service_id: service.id,
        customer_name: payload.customer_name.trim().to_string(),
        customer_email: payload.customer_email.clone(),
        customer_phone: payload.customer_phone.clone(),
        date: payload.date.clone(),
        start_time,
        end_time,
        status: BOOKING_STATUS_ACTIVE.to_string(),
        notes: payload.notes.clone(),
        created_at: None,
        updated_at: None,
    };

    // The store re-checks the overlap inside a transaction, so two clients
    // racing for the same window cannot both commit.
    match state
        .schedule
        .create_booking(booking)
        .await
        .map_err(store_error)?
    {
        BookingAttempt::Created(created) => {
            info!("Successfully created booking: {}", created.reference);
            notify(
                &state,
                Notice {
                    kind: "booking.created".to_string(),
                    subject: format!("New booking for {}", service.name),
                    body: json!({
                        "reference": created.reference,
                        "service": service.name,
                        "date": created.date,
                        "start_time": created.start_time,
                        "end_time": created.end_time,
                        "customer_name": created.customer_name,
                    }),
                },
            )
            .await;
            Ok(Json(BookingResponse {
                success: true,
                reference: Some(created.reference),
                message: "Appointment booked successfully.".to_string(),
            }))
        }
        BookingAttempt::Conflict => Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        )),
    }
}

/// Handler to mark a booking as cancelled without deleting it.
#[axum::debug_handler]
pub async fn mark_booking_cancelled_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(reference): Path<String>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    match state.schedule.cancel_booking(&reference).await {
        Ok(true) => {
            notify(
                &state,
                Notice {
                    kind: "booking.cancelled".to_string(),
                    subject: format!("Booking {} cancelled", reference),
                    body: json!({ "reference": reference }),
                },
            )
            .await;
            Ok(Json(CancellationResponse {
                success: true,
                message: "Appointment marked as cancelled successfully.".to_string(),
            }))
        }
        Ok(false) => Err((StatusCode::NOT_FOUND, "Booking not found.".to_string())),
        Err(e) => {
            info!("Error marking booking as cancelled: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to mark appointment as cancelled.".to_string(),
            ))
        }
    }
}

/// Handler to delete a booking completely.
#[axum::debug_handler]
pub async fn delete_booking_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(reference): Path<String>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    match state.schedule.delete_booking(&reference).await {
        Ok(true) => Ok(Json(CancellationResponse {
            success: true,
            message: "Booking deleted successfully.".to_string(),
        })),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Booking not found.".to_string())),
        Err(e) => {
            info!("Error deleting booking: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete booking.".to_string(),
            ))
        }
    }
}

/// Handler to get booked appointments in a date range.
#[axum::debug_handler]
pub async fn get_booked_appointments_handler(
    State(state): State<Arc<AppointmentsState>>,
    Query(query): Query<BookedListQuery>,
) -> Result<Json<BookedListResponse>, (StatusCode, String)> {
    let start_date = parse_date(&query.start_date, "start_date")?;
    let end_date = parse_date(&query.end_date, "end_date")?;

    if end_date < start_date {
        return Err((
            StatusCode::BAD_REQUEST,
            "end_date must be after start_date".to_string(),
        ));
    }

    // Get include_cancelled parameter, default to false if not provided
    let include_cancelled = query.include_cancelled.unwrap_or(false);

    let bookings = state
        .schedule
        .bookings_between(&query.start_date, &query.end_date, include_cancelled)
        .await
        .map_err(|e| {
            info!("Error fetching booked appointments: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch booked appointments".to_string(),
            )
        })?;

    Ok(Json(BookedListResponse {
        bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}
