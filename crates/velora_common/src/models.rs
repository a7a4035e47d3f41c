// --- File: crates/velora_common/src/models.rs ---
//! Shared domain records.
//!
//! These structs are the canonical shape of the clinic's data as it crosses
//! crate boundaries. The db crate wraps them in row types; the feature
//! crates consume them as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BOOKING_STATUS_ACTIVE: &str = "active";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";
pub const ORDER_STATUS_PENDING: &str = "pending";

/// A bookable treatment offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Appointment length in minutes. Always positive for active services.
    pub duration_minutes: i64,
    /// Price in the smallest currency unit.
    pub price_cents: i64,
    pub currency: Option<String>,
    pub active: bool,
}

/// Opening hours for one weekday.
///
/// `day_of_week` uses 0 = Sunday .. 6 = Saturday. Times are zero-padded
/// 24h `HH:MM` strings; a closed day carries `is_open = false` and the
/// time fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub day_of_week: i64,
    pub is_open: bool,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
}

/// A client appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<i64>,
    /// Public identifier handed to the client (UUID v4).
    pub reference: String,
    pub service_id: i64,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, start inclusive.
    pub start_time: String,
    /// `HH:MM`, end exclusive.
    pub end_time: String,
    /// "active" or "cancelled". Only active bookings block slots.
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A whole day removed from booking (holiday, renovation, training day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedDate {
    pub date: String,
    pub reason: Option<String>,
}

/// A product purchase from the clinic's small shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<i64>,
    /// Public identifier handed to the client (UUID v4).
    pub reference: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_amount: i64,
    pub total_amount: i64,
    pub currency: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
