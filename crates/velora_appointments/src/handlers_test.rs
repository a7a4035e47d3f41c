#[cfg(test)]
mod tests {
    use crate::handlers::{
        book_slot_handler, get_availability_handler, get_booked_appointments_handler,
        mark_booking_cancelled_handler, AppointmentsState,
    };
    use crate::logic::{AvailabilityQuery, BookSlotRequest, BookedListQuery};
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use chrono::{Datelike, NaiveDate};
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};
    use velora_common::models::{
        Booking, ServiceOffering, WorkingHours, BOOKING_STATUS_ACTIVE, BOOKING_STATUS_CANCELLED,
    };
    use velora_common::services::{BookingAttempt, BoxFuture, BoxedError, ScheduleStore};
    use velora_config::{AppConfig, SchedulingConfig, ServerConfig};

    const TEST_DATE: &str = "2026-09-14"; // a Monday

    fn test_weekday() -> i64 {
        NaiveDate::parse_from_str(TEST_DATE, "%Y-%m-%d")
            .unwrap()
            .weekday()
            .num_days_from_sunday() as i64
    }

    /// In-memory stand-in for the SQL-backed schedule store.
    #[derive(Default)]
    struct InMemoryStore {
        services: Vec<ServiceOffering>,
        hours: HashMap<i64, WorkingHours>,
        blocked: HashSet<String>,
        bookings: Mutex<Vec<Booking>>,
    }

    impl InMemoryStore {
        fn with_open_day() -> Self {
            let mut store = Self::default();
            store.services.push(ServiceOffering {
                id: 3,
                name: "Relaxing Massage".to_string(),
                description: None,
                duration_minutes: 60,
                price_cents: 9500,
                currency: Some("CHF".to_string()),
                active: true,
            });
            store.hours.insert(
                test_weekday(),
                WorkingHours {
                    day_of_week: test_weekday(),
                    is_open: true,
                    open_time: Some("09:00".to_string()),
                    close_time: Some("13:00".to_string()),
                    break_start: None,
                    break_end: None,
                },
            );
            store
        }
    }

    impl ScheduleStore for InMemoryStore {
        type Error = BoxedError;

        fn find_service(&self, service_id: i64) -> BoxFuture<'_, Option<ServiceOffering>, BoxedError> {
            let found = self.services.iter().find(|s| s.id == service_id).cloned();
            Box::pin(async move { Ok(found) })
        }

        fn list_services(&self) -> BoxFuture<'_, Vec<ServiceOffering>, BoxedError> {
            let services = self.services.clone();
            Box::pin(async move { Ok(services) })
        }

        fn working_hours_for(&self, day_of_week: i64) -> BoxFuture<'_, Option<WorkingHours>, BoxedError> {
            let hours = self.hours.get(&day_of_week).cloned();
            Box::pin(async move { Ok(hours) })
        }

        fn is_date_blocked(&self, date: &str) -> BoxFuture<'_, bool, BoxedError> {
            let blocked = self.blocked.contains(date);
            Box::pin(async move { Ok(blocked) })
        }

        fn bookings_on(&self, date: &str) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
            let bookings = self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.date == date && b.status == BOOKING_STATUS_ACTIVE)
                .cloned()
                .collect();
            Box::pin(async move { Ok(bookings) })
        }

        fn create_booking(&self, booking: Booking) -> BoxFuture<'_, BookingAttempt, BoxedError> {
            let mut bookings = self.bookings.lock().unwrap();
            let conflict = bookings.iter().any(|existing| {
                existing.date == booking.date
                    && existing.status == BOOKING_STATUS_ACTIVE
                    && existing.start_time < booking.end_time
                    && booking.start_time < existing.end_time
            });
            let attempt = if conflict {
                BookingAttempt::Conflict
            } else {
                bookings.push(booking.clone());
                BookingAttempt::Created(booking)
            };
            Box::pin(async move { Ok(attempt) })
        }

        fn cancel_booking(&self, reference: &str) -> BoxFuture<'_, bool, BoxedError> {
            let mut bookings = self.bookings.lock().unwrap();
            let cancelled = match bookings
                .iter_mut()
                .find(|b| b.reference == reference && b.status == BOOKING_STATUS_ACTIVE)
            {
                Some(booking) => {
                    booking.status = BOOKING_STATUS_CANCELLED.to_string();
                    true
                }
                None => false,
            };
            Box::pin(async move { Ok(cancelled) })
        }

        fn delete_booking(&self, reference: &str) -> BoxFuture<'_, bool, BoxedError> {
            let mut bookings = self.bookings.lock().unwrap();
            let before = bookings.len();
            bookings.retain(|b| b.reference != reference);
            let deleted = bookings.len() < before;
            Box::pin(async move { Ok(deleted) })
        }

        fn bookings_between(
            &self,
            start_date: &str,
            end_date: &str,
            include_cancelled: bool,
        ) -> BoxFuture<'_, Vec<Booking>, BoxedError> {
            let bookings = self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| {
                    b.date.as_str() >= start_date
                        && b.date.as_str() <= end_date
                        && (include_cancelled || b.status == BOOKING_STATUS_ACTIVE)
                })
                .cloned()
                .collect();
            Box::pin(async move { Ok(bookings) })
        }
    }

    fn test_config(use_appointments: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            use_appointments,
            use_shop: false,
            use_notifier: false,
            database: None,
            scheduling: Some(SchedulingConfig { buffer_minutes: 15 }),
            shop: None,
            notifier: None,
        })
    }

    fn state_with(store: InMemoryStore) -> Arc<AppointmentsState> {
        Arc::new(AppointmentsState {
            config: test_config(true),
            schedule: Arc::new(store),
            notifier: None,
        })
    }

    fn availability_query(service_id: i64) -> Query<AvailabilityQuery> {
        Query(AvailabilityQuery {
            date: TEST_DATE.to_string(),
            service_id,
        })
    }

    fn book_request(start_time: &str) -> BookSlotRequest {
        BookSlotRequest {
            service_id: 3,
            date: TEST_DATE.to_string(),
            start_time: start_time.to_string(),
            customer_name: "Dana Meier".to_string(),
            customer_email: Some("dana@example.com".to_string()),
            customer_phone: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn availability_returns_the_fixed_grid() {
        let state = state_with(InMemoryStore::with_open_day());

        let response = get_availability_handler(State(state), availability_query(3))
            .await
            .expect("availability should succeed");

        let starts: Vec<&str> = response
            .0
            .slots
            .iter()
            .map(|slot| slot.start_time.as_str())
            .collect();
        assert_eq!(starts, vec!["09:00", "10:15", "11:30"]);
    }

    #[tokio::test]
    async fn availability_is_empty_for_blocked_date() {
        let mut store = InMemoryStore::with_open_day();
        store.blocked.insert(TEST_DATE.to_string());
        let state = state_with(store);

        let response = get_availability_handler(State(state), availability_query(3))
            .await
            .expect("blocked dates respond with an empty list, not an error");

        assert!(response.0.slots.is_empty());
    }

    #[tokio::test]
    async fn availability_rejects_unknown_service() {
        let state = state_with(InMemoryStore::with_open_day());

        let err = get_availability_handler(State(state), availability_query(99))
            .await
            .expect_err("unknown service is a client error");

        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn availability_rejects_malformed_date() {
        let state = state_with(InMemoryStore::with_open_day());

        let err = get_availability_handler(
            State(state),
            Query(AvailabilityQuery {
                date: "14.09.2026".to_string(),
                service_id: 3,
            }),
        )
        .await
        .expect_err("malformed date is a client error");

        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn availability_requires_the_feature_flag() {
        let store = InMemoryStore::with_open_day();
        let state = Arc::new(AppointmentsState {
            config: test_config(false),
            schedule: Arc::new(store),
            notifier: None,
        });

        let err = get_availability_handler(State(state), availability_query(3))
            .await
            .expect_err("disabled feature responds with 503");

        assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn booking_persists_and_hides_the_slot() {
        let state = state_with(InMemoryStore::with_open_day());

        let response = book_slot_handler(
            State(state.clone()),
            axum::Json(book_request("10:15")),
        )
        .await
        .expect("booking should succeed");
        assert!(response.0.success);
        assert!(response.0.reference.is_some());

        let availability = get_availability_handler(State(state), availability_query(3))
            .await
            .expect("availability should still succeed");
        let starts: Vec<&str> = availability
            .0
            .slots
            .iter()
            .map(|slot| slot.start_time.as_str())
            .collect();
        assert_eq!(starts, vec!["09:00", "11:30"]);
    }

    #[tokio::test]
    async fn booking_the_same_slot_twice_conflicts() {
        let state = state_with(InMemoryStore::with_open_day());

        book_slot_handler(State(state.clone()), axum::Json(book_request("09:00")))
            .await
            .expect("first booking should succeed");

        let err = book_slot_handler(State(state), axum::Json(book_request("09:00")))
            .await
            .expect_err("second booking must conflict");
        assert_eq!(err.0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn booking_off_the_grid_is_rejected() {
        let state = state_with(InMemoryStore::with_open_day());

        // 09:30 is not on the 75-minute grid anchored at 09:00.
        let err = book_slot_handler(State(state), axum::Json(book_request("09:30")))
            .await
            .expect_err("off-grid start must be rejected");
        assert_eq!(err.0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn booking_requires_a_customer_name() {
        let state = state_with(InMemoryStore::with_open_day());

        let mut request = book_request("09:00");
        request.customer_name = "   ".to_string();
        let err = book_slot_handler(State(state), axum::Json(request))
            .await
            .expect_err("blank customer name is a client error");
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cancelling_frees_the_slot_again() {
        let state = state_with(InMemoryStore::with_open_day());

        let booked = book_slot_handler(State(state.clone()), axum::Json(book_request("10:15")))
            .await
            .expect("booking should succeed");
        let reference = booked.0.reference.expect("reference is set");

        let cancelled =
            mark_booking_cancelled_handler(State(state.clone()), Path(reference.clone()))
                .await
                .expect("cancellation should succeed");
        assert!(cancelled.0.success);

        let availability = get_availability_handler(State(state.clone()), availability_query(3))
            .await
            .expect("availability should succeed");
        assert!(availability
            .0
            .slots
            .iter()
            .any(|slot| slot.start_time == "10:15"));

        // A second cancellation finds nothing active.
        let err = mark_booking_cancelled_handler(State(state), Path(reference))
            .await
            .expect_err("double cancellation is a 404");
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn booked_listing_respects_include_cancelled() {
        let state = state_with(InMemoryStore::with_open_day());

        let first = book_slot_handler(State(state.clone()), axum::Json(book_request("09:00")))
            .await
            .expect("booking should succeed");
        book_slot_handler(State(state.clone()), axum::Json(book_request("11:30")))
            .await
            .expect("booking should succeed");
        mark_booking_cancelled_handler(
            State(state.clone()),
            Path(first.0.reference.expect("reference is set")),
        )
        .await
        .expect("cancellation should succeed");

        let active_only = get_booked_appointments_handler(
            State(state.clone()),
            Query(BookedListQuery {
                start_date: TEST_DATE.to_string(),
                end_date: TEST_DATE.to_string(),
                include_cancelled: None,
            }),
        )
        .await
        .expect("listing should succeed");
        assert_eq!(active_only.0.bookings.len(), 1);

        let everything = get_booked_appointments_handler(
            State(state),
            Query(BookedListQuery {
                start_date: TEST_DATE.to_string(),
                end_date: TEST_DATE.to_string(),
                include_cancelled: Some(true),
            }),
        )
        .await
        .expect("listing should succeed");
        assert_eq!(everything.0.bookings.len(), 2);
    }
}
