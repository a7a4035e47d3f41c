// --- File: crates/velora_appointments/src/logic.rs ---
use serde::{Deserialize, Serialize};
use velora_common::models::{Booking, WorkingHours};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Target date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-14"))]
    pub date: String,

    /// The service to compute slots for
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub service_id: i64,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AvailableSlotsResponse {
    pub slots: Vec<Slot>,
}

/// One bookable window on the requested day.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Slot {
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub start_time: String, // HH:MM, 24h
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub end_time: String, // HH:MM, 24h
    pub available: bool,
}

/// An already-booked interval on the target day.
#[derive(Debug, Clone)]
pub struct BookedInterval {
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
}

impl From<&Booking> for BookedInterval {
    fn from(booking: &Booking) -> Self {
        Self {
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
        }
    }
}

/// Public view of a bookable service.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServiceSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = 60))]
    pub duration_minutes: i64,
    #[cfg_attr(feature = "openapi", schema(example = 7500))] // e.g. 75.00 CHF in cents
    pub price_cents: i64,
    pub currency: Option<String>,
}

impl From<velora_common::models::ServiceOffering> for ServiceSummary {
    fn from(offering: velora_common::models::ServiceOffering) -> Self {
        Self {
            id: offering.id,
            name: offering.name,
            description: offering.description,
            duration_minutes: offering.duration_minutes,
            price_cents: offering.price_cents,
            currency: offering.currency,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServicesResponse {
    pub services: Vec<ServiceSummary>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub service_id: i64,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-14"))]
    pub date: String, // YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(example = "10:15"))]
    pub start_time: String, // HH:MM; the end is derived from the service duration
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub reference: Option<String>,
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct CancellationResponse {
    pub success: bool,
    pub message: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct BookedListQuery {
    pub start_date: String,              // YYYY-MM-DD format
    pub end_date: String,                // YYYY-MM-DD format
    pub include_cancelled: Option<bool>, // Whether to include cancelled bookings
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BookedAppointment {
    pub reference: String,
    pub service_id: i64,
    pub customer_name: String,
    pub date: String,       // YYYY-MM-DD
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub status: String,     // "active" or "cancelled"
    pub notes: Option<String>,
}

impl From<Booking> for BookedAppointment {
    fn from(booking: Booking) -> Self {
        Self {
            reference: booking.reference,
            service_id: booking.service_id,
            customer_name: booking.customer_name,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            notes: booking.notes,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct BookedListResponse {
    pub bookings: Vec<BookedAppointment>,
}

// --- Time Helpers ---

/// Converts a 24h `HH:MM` string to minutes since midnight.
/// Anything that does not parse as a valid time yields None.
pub fn parse_hhmm(value: &str) -> Option<i64> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as a zero-padded `HH:MM` string.
pub fn format_hhmm(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// --- Availability Logic ---

/// Computes the bookable windows for one day.
///
/// Candidates are laid out on a fixed grid from the opening time with a
/// stride of `duration + buffer`; a rejected candidate leaves a hole, it
/// does not shift the grid. A candidate is rejected when its start falls
/// inside the configured break window (start-only test, deliberately) or
/// when it overlaps an existing booking. Missing hours, a closed day or
/// unparseable open/close times yield an empty list rather than an error.
pub fn compute_slots(
    working_hours: Option<&WorkingHours>,
    service_duration_minutes: i64,
    buffer_minutes: i64,
    existing_bookings: &[BookedInterval],
) -> Vec<Slot> {
    let hours = match working_hours {
        Some(hours) if hours.is_open => hours,
        _ => return Vec::new(),
    };

    let day_start = match hours.open_time.as_deref().and_then(parse_hhmm) {
        Some(minutes) => minutes,
        None => return Vec::new(), // no schedule defined
    };
    let day_end = match hours.close_time.as_deref().and_then(parse_hhmm) {
        Some(minutes) => minutes,
        None => return Vec::new(), // no schedule defined
    };

    // A non-positive duration would never advance the cursor.
    if service_duration_minutes <= 0 || buffer_minutes < 0 {
        return Vec::new();
    }

    // Break window applies only when both bounds parse.
    let break_window = match (
        hours.break_start.as_deref().and_then(parse_hhmm),
        hours.break_end.as_deref().and_then(parse_hhmm),
    ) {
        (Some(break_start), Some(break_end)) => Some((break_start, break_end)),
        _ => None,
    };

    // Unparseable intervals are skipped, same degrade-to-no-slots posture
    // as the rest of the inputs.
    let booked: Vec<(i64, i64)> = existing_bookings
        .iter()
        .filter_map(|interval| {
            Some((
                parse_hhmm(&interval.start_time)?,
                parse_hhmm(&interval.end_time)?,
            ))
        })
        .collect();

    let stride = service_duration_minutes + buffer_minutes;
    let mut slots = Vec::new();
    let mut cursor = day_start;

    while cursor + service_duration_minutes <= day_end {
        let candidate_end = cursor + service_duration_minutes;

        // Only the candidate's start is tested against the break window; a
        // slot that starts before the break and runs into it is allowed.
        let starts_in_break = break_window
            .map(|(break_start, break_end)| cursor >= break_start && cursor < break_end)
            .unwrap_or(false);

        // Two half-open intervals [s1,e1) and [s2,e2) overlap iff
        // s1 < e2 && s2 < e1.
        let overlaps_booking = booked
            .iter()
            .any(|&(start, end)| cursor < end && start < candidate_end);

        if !starts_in_break && !overlaps_booking {
            slots.push(Slot {
                start_time: format_hhmm(cursor),
                end_time: format_hhmm(candidate_end),
                available: true,
            });
        }

        // Fixed stride from the opening time, advanced whether or not the
        // candidate was emitted.
        cursor += stride;
    }

    slots
}
