#[cfg(test)]
mod tests {
    use crate::logic::{compute_slots, format_hhmm, parse_hhmm, BookedInterval};
    use proptest::prelude::*;
    use velora_common::models::WorkingHours;

    fn hours(open_minutes: i64, close_minutes: i64) -> WorkingHours {
        WorkingHours {
            day_of_week: 2,
            is_open: true,
            open_time: Some(format_hhmm(open_minutes)),
            close_time: Some(format_hhmm(close_minutes)),
            break_start: None,
            break_end: None,
        }
    }

    // Lay bookings on arbitrary minute offsets inside the day.
    fn bookings_from_offsets(offsets: &[(i64, i64)], day_start: i64, day_end: i64) -> Vec<BookedInterval> {
        offsets
            .iter()
            .filter_map(|&(start, len)| {
                let start = day_start + start % (day_end - day_start).max(1);
                let end = (start + 1 + len).min(day_end);
                if start < end && end <= 1439 {
                    Some(BookedInterval {
                        start_time: format_hhmm(start),
                        end_time: format_hhmm(end),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    proptest! {
        // All emitted slots fit inside the working day.
        #[test]
        fn prop_slots_within_working_hours(
            open_hour in 0..12i64,
            close_hour in 13..24i64,
            duration in 10..180i64,
            buffer in 0..30i64,
        ) {
            let day_start = open_hour * 60;
            let day_end = (close_hour * 60).min(1439);
            let working_hours = hours(day_start, day_end);

            let slots = compute_slots(Some(&working_hours), duration, buffer, &[]);

            for slot in &slots {
                let start = parse_hhmm(&slot.start_time).unwrap();
                let end = parse_hhmm(&slot.end_time).unwrap();
                prop_assert!(start >= day_start, "Slot starts before opening: {:?}", slot);
                prop_assert!(end <= day_end, "Slot ends after closing: {:?}", slot);
                prop_assert_eq!(end - start, duration);
            }
        }

        // Emitted slots sit on the fixed stride grid anchored at the
        // opening time, and are strictly ascending.
        #[test]
        fn prop_slots_on_stride_grid_and_sorted(
            duration in 10..120i64,
            buffer in 0..45i64,
            booking_offsets in prop::collection::vec((0..600i64, 0..90i64), 0..6),
        ) {
            let day_start = 8 * 60;
            let day_end = 19 * 60;
            let working_hours = hours(day_start, day_end);
            let bookings = bookings_from_offsets(&booking_offsets, day_start, day_end);

            let slots = compute_slots(Some(&working_hours), duration, buffer, &bookings);

            let stride = duration + buffer;
            let mut previous_start = None;
            for slot in &slots {
                let start = parse_hhmm(&slot.start_time).unwrap();
                prop_assert_eq!((start - day_start) % stride, 0, "Slot off the grid: {:?}", slot);
                if let Some(previous) = previous_start {
                    prop_assert!(start > previous, "Slots out of order");
                }
                previous_start = Some(start);
            }
        }

        // No emitted slot overlaps any supplied booking.
        #[test]
        fn prop_slots_disjoint_from_bookings(
            duration in 10..120i64,
            buffer in 0..30i64,
            booking_offsets in prop::collection::vec((0..660i64, 0..120i64), 0..8),
        ) {
            let day_start = 7 * 60;
            let day_end = 20 * 60;
            let working_hours = hours(day_start, day_end);
            let bookings = bookings_from_offsets(&booking_offsets, day_start, day_end);

            let slots = compute_slots(Some(&working_hours), duration, buffer, &bookings);

            for slot in &slots {
                let slot_start = parse_hhmm(&slot.start_time).unwrap();
                let slot_end = parse_hhmm(&slot.end_time).unwrap();
                for booking in &bookings {
                    let booked_start = parse_hhmm(&booking.start_time).unwrap();
                    let booked_end = parse_hhmm(&booking.end_time).unwrap();
                    prop_assert!(
                        slot_end <= booked_start || booked_end <= slot_start,
                        "Slot {:?} overlaps booking {:?}",
                        slot,
                        booking
                    );
                }
            }
        }

        // The calculator is a pure function of its inputs.
        #[test]
        fn prop_idempotent(
            duration in 10..120i64,
            buffer in 0..30i64,
            booking_offsets in prop::collection::vec((0..600i64, 0..90i64), 0..5),
        ) {
            let working_hours = hours(9 * 60, 18 * 60);
            let bookings = bookings_from_offsets(&booking_offsets, 9 * 60, 18 * 60);

            let first = compute_slots(Some(&working_hours), duration, buffer, &bookings);
            let second = compute_slots(Some(&working_hours), duration, buffer, &bookings);
            prop_assert_eq!(first, second);
        }

        // A closed day never yields slots, whatever the other inputs are.
        #[test]
        fn prop_closed_day_is_always_empty(
            duration in 1..240i64,
            buffer in 0..60i64,
            booking_offsets in prop::collection::vec((0..600i64, 0..90i64), 0..5),
        ) {
            let mut working_hours = hours(9 * 60, 18 * 60);
            working_hours.is_open = false;
            let bookings = bookings_from_offsets(&booking_offsets, 9 * 60, 18 * 60);

            let slots = compute_slots(Some(&working_hours), duration, buffer, &bookings);
            prop_assert!(slots.is_empty());
        }
    }
}
