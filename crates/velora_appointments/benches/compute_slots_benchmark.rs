use criterion::{black_box, criterion_group, criterion_main, Criterion};
use velora_appointments::logic::{compute_slots, format_hhmm, BookedInterval};
use velora_common::models::WorkingHours;

// Helper function to create a full working day
fn full_day() -> WorkingHours {
    WorkingHours {
        day_of_week: 1,
        is_open: true,
        open_time: Some("08:00".to_string()),
        close_time: Some("20:00".to_string()),
        break_start: Some("12:30".to_string()),
        break_end: Some("13:30".to_string()),
    }
}

// Helper function to lay out evenly spaced bookings across the day
fn create_bookings(count: usize, duration_minutes: i64) -> Vec<BookedInterval> {
    let day_start = 8 * 60;
    let mut bookings = Vec::new();
    let mut current = day_start;

    for _ in 0..count {
        let end = current + duration_minutes;
        bookings.push(BookedInterval {
            start_time: format_hhmm(current),
            end_time: format_hhmm(end),
        });
        current = end + 30;
    }

    bookings
}

fn benchmark_compute_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_slots");

    // Benchmark with no existing bookings
    group.bench_function("empty_day", |b| {
        let hours = full_day();
        b.iter(|| {
            compute_slots(
                black_box(Some(&hours)),
                black_box(60),
                black_box(15),
                black_box(&[]),
            )
        })
    });

    // Benchmark with a sparsely booked day
    group.bench_function("sparse_day", |b| {
        let hours = full_day();
        let bookings = create_bookings(4, 45);
        b.iter(|| {
            compute_slots(
                black_box(Some(&hours)),
                black_box(60),
                black_box(15),
                black_box(&bookings),
            )
        })
    });

    // Benchmark with a densely booked day and a short service
    group.bench_function("dense_day_short_service", |b| {
        let hours = full_day();
        let bookings = create_bookings(12, 30);
        b.iter(|| {
            compute_slots(
                black_box(Some(&hours)),
                black_box(15),
                black_box(5),
                black_box(&bookings),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_compute_slots);
criterion_main!(benches);
