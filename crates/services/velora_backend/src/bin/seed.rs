// File: services/velora_backend/src/bin/seed.rs
//! One-shot seeding tool for a fresh clinic database.
//!
//! Creates the schemas and fills in a usable starting point: weekly opening
//! hours (Tuesday to Saturday, lunch break), a handful of treatments and an
//! example blocked date. Existing weekday rows are overwritten; run it once
//! per environment.

use std::sync::Arc;
use velora_common::models::{BlockedDate, ServiceOffering, WorkingHours};
use velora_config::load_config;
use velora_db::{
    DbClient, ScheduleRepository, ServiceCatalogRepository, SqlScheduleRepository,
    SqlServiceCatalogRepository,
};

fn weekday_hours(day_of_week: i64, open: &str, close: &str) -> WorkingHours {
    WorkingHours {
        day_of_week,
        is_open: true,
        open_time: Some(open.to_string()),
        close_time: Some(close.to_string()),
        break_start: Some("12:30".to_string()),
        break_end: Some("13:30".to_string()),
    }
}

fn closed_day(day_of_week: i64) -> WorkingHours {
    WorkingHours {
        day_of_week,
        is_open: false,
        open_time: None,
        close_time: None,
        break_start: None,
        break_end: None,
    }
}

fn offering(name: &str, duration_minutes: i64, price_cents: i64) -> ServiceOffering {
    ServiceOffering {
        id: 0, // 0 inserts
        name: name.to_string(),
        description: None,
        duration_minutes,
        price_cents,
        currency: Some("CHF".to_string()),
        active: true,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    velora_common::logging::init();

    let config = Arc::new(load_config()?);
    let db_client = DbClient::new(&config).await?;

    let catalog = SqlServiceCatalogRepository::new(db_client.clone());
    let schedule = SqlScheduleRepository::new(db_client);

    catalog.init_schema().await?;
    schedule.init_schema().await?;

    // Sunday (0) and Monday (1) closed, Tuesday to Saturday open.
    schedule.upsert_working_hours(closed_day(0)).await?;
    schedule.upsert_working_hours(closed_day(1)).await?;
    for day_of_week in 2..=5 {
        schedule
            .upsert_working_hours(weekday_hours(day_of_week, "09:00", "18:00"))
            .await?;
    }
    schedule
        .upsert_working_hours(weekday_hours(6, "09:00", "16:00"))
        .await?;

    for service in [
        offering("Classic Facial", 60, 9500),
        offering("Deep Tissue Massage", 90, 14500),
        offering("Express Manicure", 30, 4500),
        offering("Hot Stone Therapy", 75, 12000),
    ] {
        catalog.upsert_service(service).await?;
    }

    schedule
        .block_date(BlockedDate {
            date: "2026-12-25".to_string(),
            reason: Some("Christmas Day".to_string()),
        })
        .await?;

    println!("Seeded schedule:");
    for hours in schedule.list_working_hours().await? {
        if hours.is_open {
            println!(
                "  day {}: {} - {}",
                hours.day_of_week,
                hours.open_time.as_deref().unwrap_or("?"),
                hours.close_time.as_deref().unwrap_or("?"),
            );
        } else {
            println!("  day {}: closed", hours.day_of_week);
        }
    }
    println!("Blocked dates:");
    for blocked in schedule.list_blocked_dates().await? {
        println!(
            "  {} ({})",
            blocked.date,
            blocked.reason.as_deref().unwrap_or("no reason")
        );
    }
    println!("Seed complete.");

    Ok(())
}
