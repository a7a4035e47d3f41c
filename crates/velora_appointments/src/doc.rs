// File: crates/velora_appointments/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AvailabilityQuery, AvailableSlotsResponse, BookSlotRequest, BookedAppointment,
    BookedListQuery, BookedListResponse, BookingResponse, CancellationResponse, ServiceSummary,
    ServicesResponse, Slot,
};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/appointments/services",
    responses(
        (status = 200, description = "Bookable services", body = ServicesResponse),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_services_handler() {}

#[utoipa::path(
    get,
    path = "/appointments/availability",
    params(
        ("date" = String, Query, description = "Target date in YYYY-MM-DD format", example = "2026-09-14", format = "date"),
        ("service_id" = i64, Query, description = "Service to compute slots for", example = 3)
    ),
    responses(
        (status = 200, description = "Bookable slots for the day", body = AvailableSlotsResponse),
        (status = 400, description = "Invalid date or unknown service", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/appointments/book",
    request_body(content = BookSlotRequest, example = json!({
        "service_id": 3,
        "date": "2026-09-14",
        "start_time": "10:15",
        "customer_name": "Dana Meier",
        "customer_email": "dana@example.com",
        "notes": "First visit"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "reference": "6fa2b79e-40f4-44a5-bb3e-2f8f4a8f8a21",
             "message": "Appointment booked successfully."
         })
        ),
        (status = 409, description = "Slot already booked",
         example = json!({
             "success": false,
             "reference": null,
             "message": "Requested time slot is no longer available."
         })
        ),
        (status = 400, description = "Validation failure")
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    patch,
    path = "/appointments/admin/cancel/{reference}",
    params(
        ("reference" = String, Path, description = "The reference of the booking to cancel")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = CancellationResponse,
         example = json!({
             "success": true,
             "message": "Appointment marked as cancelled successfully."
         })
        ),
        (status = 404, description = "Booking not found")
    ),
)]
fn doc_mark_booking_cancelled_handler() {}

#[utoipa::path(
    delete,
    path = "/appointments/admin/delete/{reference}",
    params(
        ("reference" = String, Path, description = "The reference of the booking to delete")
    ),
    responses(
        (status = 200, description = "Deletion result", body = CancellationResponse),
        (status = 404, description = "Booking not found")
    ),
)]
fn doc_delete_booking_handler() {}

#[utoipa::path(
    get,
    path = "/appointments/admin/bookings",
    params(
        ("start_date" = String, Query, description = "Start date in YYYY-MM-DD format", format = "date"),
        ("end_date" = String, Query, description = "End date in YYYY-MM-DD format", format = "date"),
        ("include_cancelled" = Option<bool>, Query, description = "Whether to include cancelled bookings")
    ),
    responses(
        (status = 200, description = "Bookings in the range", body = BookedListResponse),
        (status = 400, description = "Invalid date range")
    )
)]
fn doc_get_booked_appointments_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_services_handler,
        doc_get_availability_handler,
        doc_book_slot_handler,
        doc_mark_booking_cancelled_handler,
        doc_delete_booking_handler,
        doc_get_booked_appointments_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailableSlotsResponse,
            Slot,
            ServiceSummary,
            ServicesResponse,
            BookSlotRequest,
            BookingResponse,
            CancellationResponse,
            BookedListQuery,
            BookedAppointment,
            BookedListResponse
        )
    ),
    tags(
        (name = "appointments", description = "Appointment availability and booking API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct AppointmentsApiDoc;
