//! SQL implementation of the weekly schedule repository

use crate::error::DbError;
use crate::repositories::schedule::{BlockedDate, ScheduleRepository, WorkingHours};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the schedule repository
#[derive(Debug, Clone)]
pub struct SqlScheduleRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlScheduleRepository {
    /// Create a new SQL schedule repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn hours_from_row(row: &sqlx::any::AnyRow) -> WorkingHours {
    WorkingHours {
        day_of_week: row.try_get("day_of_week").unwrap_or_default(),
        is_open: row.try_get::<i64, _>("is_open").unwrap_or_default() != 0,
        open_time: row.try_get("open_time").ok(),
        close_time: row.try_get("close_time").ok(),
        break_start: row.try_get("break_start").ok(),
        break_end: row.try_get("break_end").ok(),
    }
}

impl ScheduleRepository for SqlScheduleRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing schedule schema");

        let working_hours = r#"
            CREATE TABLE IF NOT EXISTS working_hours (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                day_of_week INTEGER NOT NULL UNIQUE,
                is_open INTEGER NOT NULL DEFAULT 0,
                open_time TEXT,
                close_time TEXT,
                break_start TEXT,
                break_end TEXT
            )
        "#;

        let blocked_dates = r#"
            CREATE TABLE IF NOT EXISTS blocked_dates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL UNIQUE,
                reason TEXT
            )
        "#;

        self.db_client.execute(working_hours).await?;
        self.db_client.execute(blocked_dates).await?;

        info!("Schedule schema initialized successfully");
        Ok(())
    }

    async fn upsert_working_hours(&self, hours: WorkingHours) -> Result<WorkingHours, DbError> {
        debug!("Upserting working hours for weekday: {}", hours.day_of_week);

        let query = r#"
            INSERT INTO working_hours (day_of_week, is_open, open_time, close_time, break_start, break_end)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(day_of_week) DO UPDATE SET
                is_open = excluded.is_open,
                open_time = excluded.open_time,
                close_time = excluded.close_time,
                break_start = excluded.break_start,
                break_end = excluded.break_end
            RETURNING day_of_week, is_open, open_time, close_time, break_start, break_end
        "#;

        let row = sqlx::query(query)
            .bind(hours.day_of_week)
            .bind(hours.is_open as i64)
            .bind(&hours.open_time)
            .bind(&hours.close_time)
            .bind(&hours.break_start)
            .bind(&hours.break_end)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to upsert working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(hours_from_row(&row))
    }

    async fn working_hours_for(&self, day_of_week: i64) -> Result<Option<WorkingHours>, DbError> {
        debug!("Finding working hours for weekday: {}", day_of_week);

        let query = r#"
            SELECT day_of_week, is_open, open_time, close_time, break_start, break_end
            FROM working_hours
            WHERE day_of_week = $1
        "#;

        let result = sqlx::query(query)
            .bind(day_of_week)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.map(|row| hours_from_row(&row)))
    }

    async fn list_working_hours(&self) -> Result<Vec<WorkingHours>, DbError> {
        debug!("Listing working hours");

        let query = r#"
            SELECT day_of_week, is_open, open_time, close_time, break_start, break_end
            FROM working_hours
            ORDER BY day_of_week
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list working hours: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows.iter().map(hours_from_row).collect())
    }

    async fn block_date(&self, blocked: BlockedDate) -> Result<BlockedDate, DbError> {
        debug!("Blocking date: {}", blocked.date);

        let query = r#"
            INSERT INTO blocked_dates (date, reason)
            VALUES ($1, $2)
            ON CONFLICT(date) DO UPDATE SET reason = excluded.reason
            RETURNING date, reason
        "#;

        let row = sqlx::query(query)
            .bind(&blocked.date)
            .bind(&blocked.reason)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to block date: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(BlockedDate {
            date: row.try_get("date").unwrap_or_default(),
            reason: row.try_get("reason").ok(),
        })
    }

    async fn unblock_date(&self, date: &str) -> Result<bool, DbError> {
        debug!("Unblocking date: {}", date);

        let query = "DELETE FROM blocked_dates WHERE date = $1";

        let result = sqlx::query(query)
            .bind(date)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to unblock date: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_date_blocked(&self, date: &str) -> Result<bool, DbError> {
        let query = "SELECT id FROM blocked_dates WHERE date = $1";

        let result = sqlx::query(query)
            .bind(date)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to check blocked date: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.is_some())
    }

    async fn list_blocked_dates(&self) -> Result<Vec<BlockedDate>, DbError> {
        debug!("Listing blocked dates");

        let query = "SELECT date, reason FROM blocked_dates ORDER BY date";

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list blocked dates: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(rows
            .into_iter()
            .map(|row| BlockedDate {
                date: row.try_get("date").unwrap_or_default(),
                reason: row.try_get("reason").ok(),
            })
            .collect())
    }
}
