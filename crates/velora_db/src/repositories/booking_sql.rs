//! SQL implementation of the booking repository

use crate::error::DbError;
use crate::repositories::booking::{Booking, BookingRepository};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};
use velora_common::models::{BOOKING_STATUS_ACTIVE, BOOKING_STATUS_CANCELLED};

/// SQL implementation of the booking repository
#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlBookingRepository {
    /// Create a new SQL booking repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

const BOOKING_COLUMNS: &str =
    "id, reference, service_id, customer_name, customer_email, customer_phone, \
     date, start_time, end_time, status, notes";

fn booking_from_row(row: &sqlx::any::AnyRow) -> Booking {
    Booking {
        id: row.try_get("id").ok(),
        reference: row.try_get("reference").unwrap_or_default(),
        service_id: row.try_get("service_id").unwrap_or_default(),
        customer_name: row.try_get("customer_name").unwrap_or_default(),
        customer_email: row.try_get("customer_email").ok(),
        customer_phone: row.try_get("customer_phone").ok(),
        date: row.try_get("date").unwrap_or_default(),
        start_time: row.try_get("start_time").unwrap_or_default(),
        end_time: row.try_get("end_time").unwrap_or_default(),
        status: row.try_get("status").unwrap_or_default(),
        notes: row.try_get("notes").ok(),
        created_at: None, // DateTime<Utc> doesn't implement Decode for sqlx::Any
        updated_at: None, // DateTime<Utc> doesn't implement Decode for sqlx::Any
    }
}

impl BookingRepository for SqlBookingRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing booking schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reference TEXT NOT NULL UNIQUE,
                service_id INTEGER NOT NULL,
                customer_name TEXT NOT NULL,
                customer_email TEXT,
                customer_phone TEXT,
                date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active',
                notes TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#;

        self.db_client.execute(query).await?;
        self.db_client
            .execute("CREATE INDEX IF NOT EXISTS idx_bookings_date ON bookings (date, status)")
            .await?;

        info!("Booking schema initialized successfully");
        Ok(())
    }

    async fn create_booking(&self, booking: Booking) -> Result<Booking, DbError> {
        debug!(
            "Creating booking on {} at {} for service {}",
            booking.date, booking.start_time, booking.service_id
        );

        let mut tx = self.db_client.begin().await?;

        // Re-check the overlap predicate inside the transaction. Zero-padded
        // HH:MM strings compare lexicographically in chronological order.
        let conflict_query = r#"
            SELECT id FROM bookings
            WHERE date = $1 AND status = $2 AND start_time < $3 AND end_time > $4
            LIMIT 1
        "#;

        let conflicting = sqlx::query(conflict_query)
            .bind(&booking.date)
            .bind(BOOKING_STATUS_ACTIVE)
            .bind(&booking.end_time)
            .bind(&booking.start_time)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to check booking conflicts: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if conflicting.is_some() {
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
            return Err(DbError::Conflict(format!(
                "booking window {}-{} on {} overlaps an active booking",
                booking.start_time, booking.end_time, booking.date
            )));
        }

        let insert_query = format!(
            r#"
            INSERT INTO bookings (reference, service_id, customer_name, customer_email,
                                  customer_phone, date, start_time, end_time, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BOOKING_COLUMNS}
        "#
        );

        let row = sqlx::query(&insert_query)
            .bind(&booking.reference)
            .bind(booking.service_id)
            .bind(&booking.customer_name)
            .bind(&booking.customer_email)
            .bind(&booking.customer_phone)
            .bind(&booking.date)
            .bind(&booking.start_time)
            .bind(&booking.end_time)
            .bind(BOOKING_STATUS_ACTIVE)
            .bind(&booking.notes)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let created = booking_from_row(&row);

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Booking created: {}", created.reference);
        Ok(created)
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, DbError> {
        debug!("Finding booking: {}", reference);

        let query =
            format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE reference = $1");

        let result = sqlx::query(&query)
            .bind(reference)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.map(|row| booking_from_row(&row)))
    }

    async fn active_on_date(&self, date: &str) -> Result<Vec<Booking>, DbError> {
        debug!("Listing active bookings on: {}", date);

        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE date = $1 AND status = $2 ORDER BY start_time"
        );

        let rows = sqlx::query(&query)
            .bind(date)
            .bind(BOOKING_STATUS_ACTIVE)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list bookings: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(booking_from_row).collect())
    }

    async fn cancel(&self, reference: &str) -> Result<bool, DbError> {
        debug!("Cancelling booking: {}", reference);

        let query = r#"
            UPDATE bookings
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE reference = $2 AND status = $3
        "#;

        let result = sqlx::query(query)
            .bind(BOOKING_STATUS_CANCELLED)
            .bind(reference)
            .bind(BOOKING_STATUS_ACTIVE)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to cancel booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, reference: &str) -> Result<bool, DbError> {
        debug!("Deleting booking: {}", reference);

        let query = "DELETE FROM bookings WHERE reference = $1";

        let result = sqlx::query(query)
            .bind(reference)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_between(
        &self,
        start_date: &str,
        end_date: &str,
        include_cancelled: bool,
    ) -> Result<Vec<Booking>, DbError> {
        debug!(
            "Listing bookings between {} and {} (cancelled: {})",
            start_date, end_date, include_cancelled
        );

        let rows = if include_cancelled {
            let query = format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings \
                 WHERE date >= $1 AND date <= $2 ORDER BY date, start_time"
            );
            sqlx::query(&query)
                .bind(start_date)
                .bind(end_date)
                .fetch_all(self.db_client.pool())
                .await
        } else {
            let query = format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings \
                 WHERE date >= $1 AND date <= $2 AND status = $3 ORDER BY date, start_time"
            );
            sqlx::query(&query)
                .bind(start_date)
                .bind(end_date)
                .bind(BOOKING_STATUS_ACTIVE)
                .fetch_all(self.db_client.pool())
                .await
        }
        .map_err(|e| {
            error!("Failed to list bookings: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        Ok(rows.iter().map(booking_from_row).collect())
    }
}
