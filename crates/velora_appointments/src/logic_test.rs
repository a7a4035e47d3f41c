#[cfg(test)]
mod tests {
    use crate::logic::{compute_slots, parse_hhmm, BookedInterval, Slot};
    use velora_common::models::WorkingHours;

    fn open_day(open: &str, close: &str) -> WorkingHours {
        WorkingHours {
            day_of_week: 1, // Monday
            is_open: true,
            open_time: Some(open.to_string()),
            close_time: Some(close.to_string()),
            break_start: None,
            break_end: None,
        }
    }

    fn open_day_with_break(open: &str, close: &str, break_start: &str, break_end: &str) -> WorkingHours {
        WorkingHours {
            break_start: Some(break_start.to_string()),
            break_end: Some(break_end.to_string()),
            ..open_day(open, close)
        }
    }

    fn booked(start: &str, end: &str) -> BookedInterval {
        BookedInterval {
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    fn starts(slots: &[Slot]) -> Vec<&str> {
        slots.iter().map(|slot| slot.start_time.as_str()).collect()
    }

    #[test]
    fn test_worked_example_morning_grid() {
        // open 09:00, close 13:00, 60 min service, 15 min buffer, no bookings
        let hours = open_day("09:00", "13:00");
        let slots = compute_slots(Some(&hours), 60, 15, &[]);

        assert_eq!(starts(&slots), vec!["09:00", "10:15", "11:30"]);
        assert_eq!(slots[0].end_time, "10:00");
        assert_eq!(slots[1].end_time, "11:15");
        assert_eq!(slots[2].end_time, "12:30");
        assert!(slots.iter().all(|slot| slot.available));
    }

    #[test]
    fn test_booking_removes_slot_without_repacking() {
        // A booking over 10:15-11:15 removes exactly that slot; the grid
        // stays anchored at the opening time.
        let hours = open_day("09:00", "13:00");
        let slots = compute_slots(Some(&hours), 60, 15, &[booked("10:15", "11:15")]);

        assert_eq!(starts(&slots), vec!["09:00", "11:30"]);
    }

    #[test]
    fn test_closed_day_yields_no_slots() {
        let mut hours = open_day("09:00", "17:00");
        hours.is_open = false;

        let slots = compute_slots(Some(&hours), 30, 0, &[]);
        assert!(slots.is_empty(), "Closed day must yield no slots");
    }

    #[test]
    fn test_missing_working_hours_yields_no_slots() {
        let slots = compute_slots(None, 30, 0, &[]);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_unparseable_open_time_yields_no_slots() {
        let mut hours = open_day("9 o'clock", "17:00");
        let slots = compute_slots(Some(&hours), 30, 0, &[]);
        assert!(slots.is_empty(), "Garbage open time means no schedule");

        hours = open_day("09:00", "25:00");
        let slots = compute_slots(Some(&hours), 30, 0, &[]);
        assert!(slots.is_empty(), "Out-of-range close time means no schedule");

        hours = open_day("09:00", "17:00");
        hours.close_time = None;
        let slots = compute_slots(Some(&hours), 30, 0, &[]);
        assert!(slots.is_empty(), "Missing close time means no schedule");
    }

    #[test]
    fn test_no_slot_starts_inside_break_window() {
        // 12:00-13:00 lunch; 60 min service, no buffer. The 12:00 candidate
        // is dropped, 13:00 resumes.
        let hours = open_day_with_break("09:00", "17:00", "12:00", "13:00");
        let slots = compute_slots(Some(&hours), 60, 0, &[]);

        assert_eq!(
            starts(&slots),
            vec!["09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00"]
        );

        let break_start = parse_hhmm("12:00").unwrap();
        let break_end = parse_hhmm("13:00").unwrap();
        for slot in &slots {
            let start = parse_hhmm(&slot.start_time).unwrap();
            assert!(
                start < break_start || start >= break_end,
                "Slot must not start inside the break: {:?}",
                slot
            );
        }
    }

    #[test]
    fn test_break_check_is_start_only() {
        // The break test is on the candidate's start only: with an
        // 11:00-12:00 break and a 90 min service, the 10:30 candidate runs
        // until 12:00 - into the break - and is still offered.
        let hours = open_day_with_break("09:00", "17:00", "11:00", "12:00");
        let slots = compute_slots(Some(&hours), 90, 0, &[]);

        assert!(
            slots.iter().any(|slot| slot.start_time == "10:30" && slot.end_time == "12:00"),
            "Slot starting before the break but extending into it is offered"
        );
        assert!(
            slots.iter().any(|slot| slot.start_time == "12:00"),
            "A start exactly at break end is outside the half-open window"
        );
        assert_eq!(starts(&slots), vec!["09:00", "10:30", "12:00", "13:30", "15:00"]);
    }

    #[test]
    fn test_start_at_break_start_is_rejected() {
        // 12:00-13:00 lunch, 60 min grid: the 12:00 candidate starts
        // exactly at break start and is dropped.
        let hours = open_day_with_break("09:00", "17:00", "12:00", "13:00");
        let slots = compute_slots(Some(&hours), 60, 0, &[]);

        assert!(!slots.iter().any(|slot| slot.start_time == "12:00"));
        assert!(slots.iter().any(|slot| slot.start_time == "13:00"));
    }

    #[test]
    fn test_candidate_ending_exactly_at_close_is_included() {
        // 16:00-17:00 ends exactly at close and is offered; the next
        // candidate would end past close and is not.
        let hours = open_day("09:00", "17:00");
        let slots = compute_slots(Some(&hours), 60, 0, &[]);

        assert_eq!(slots.last().map(|slot| slot.start_time.as_str()), Some("16:00"));
        assert_eq!(slots.last().map(|slot| slot.end_time.as_str()), Some("17:00"));
    }

    #[test]
    fn test_candidate_past_close_is_excluded() {
        // open 09:00, close 13:00, 60/15: the 12:45 candidate would end at
        // 13:45 > 13:00 and is excluded.
        let hours = open_day("09:00", "13:00");
        let slots = compute_slots(Some(&hours), 60, 15, &[]);

        assert!(!slots.iter().any(|slot| slot.start_time == "12:45"));
    }

    #[test]
    fn test_slots_are_disjoint_and_clear_of_bookings() {
        let hours = open_day_with_break("08:00", "18:00", "12:30", "13:15");
        let bookings = vec![
            booked("08:45", "09:30"), // partial overlap with the 09:00 candidate
            booked("10:00", "10:30"), // contained in the 10:00 candidate
            booked("14:00", "16:00"), // spans multiple candidates
        ];
        let slots = compute_slots(Some(&hours), 45, 5, &bookings);

        // Pairwise disjoint among returned slots.
        for (i, a) in slots.iter().enumerate() {
            for b in slots.iter().skip(i + 1) {
                let (a_start, a_end) = (
                    parse_hhmm(&a.start_time).unwrap(),
                    parse_hhmm(&a.end_time).unwrap(),
                );
                let (b_start, b_end) = (
                    parse_hhmm(&b.start_time).unwrap(),
                    parse_hhmm(&b.end_time).unwrap(),
                );
                assert!(
                    a_end <= b_start || b_end <= a_start,
                    "Slots overlap: {:?} and {:?}",
                    a,
                    b
                );
            }
        }

        // Disjoint from every supplied booking.
        for slot in &slots {
            let slot_start = parse_hhmm(&slot.start_time).unwrap();
            let slot_end = parse_hhmm(&slot.end_time).unwrap();
            for booking in &bookings {
                let booked_start = parse_hhmm(&booking.start_time).unwrap();
                let booked_end = parse_hhmm(&booking.end_time).unwrap();
                assert!(
                    slot_end <= booked_start || booked_end <= slot_start,
                    "Slot {:?} overlaps booking {:?}",
                    slot,
                    booking
                );
            }
        }
    }

    #[test]
    fn test_overlap_rejection_covers_all_shapes() {
        let hours = open_day("09:00", "12:00");

        // Partial-start overlap: booking ends just inside the candidate.
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("08:30", "09:01")]);
        assert!(!slots.iter().any(|slot| slot.start_time == "09:00"));

        // Partial-end overlap: booking starts just before the candidate ends.
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("09:59", "10:30")]);
        assert!(!slots.iter().any(|slot| slot.start_time == "09:00"));

        // Booking fully inside the candidate.
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("09:20", "09:40")]);
        assert!(!slots.iter().any(|slot| slot.start_time == "09:00"));

        // Candidate fully inside the booking.
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("08:00", "12:00")]);
        assert!(slots.is_empty());

        // Touching intervals do not overlap: a booking ending at 09:00
        // leaves the 09:00 candidate available.
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("08:00", "09:00")]);
        assert!(slots.iter().any(|slot| slot.start_time == "09:00"));
    }

    #[test]
    fn test_zero_buffer_packs_back_to_back() {
        let hours = open_day("09:00", "11:00");
        let slots = compute_slots(Some(&hours), 30, 0, &[]);

        assert_eq!(starts(&slots), vec!["09:00", "09:30", "10:00", "10:30"]);
    }

    #[test]
    fn test_emitted_slots_sit_on_the_stride_grid() {
        let hours = open_day("09:00", "17:00");
        let duration = 50;
        let buffer = 10;
        let slots = compute_slots(Some(&hours), duration, buffer, &[booked("11:00", "11:50")]);

        let day_start = parse_hhmm("09:00").unwrap();
        for slot in &slots {
            let offset = parse_hhmm(&slot.start_time).unwrap() - day_start;
            assert_eq!(
                offset % (duration + buffer),
                0,
                "Slot off the fixed grid: {:?}",
                slot
            );
        }
    }

    #[test]
    fn test_identical_inputs_yield_identical_output() {
        let hours = open_day_with_break("09:00", "18:30", "12:00", "12:45");
        let bookings = vec![booked("09:55", "10:50"), booked("15:00", "15:55")];

        let first = compute_slots(Some(&hours), 55, 5, &bookings);
        let second = compute_slots(Some(&hours), 55, 5, &bookings);

        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_booking_interval_is_skipped() {
        let hours = open_day("09:00", "11:00");
        let slots = compute_slots(Some(&hours), 60, 0, &[booked("corrupt", "10:00")]);

        // The unparseable interval cannot block anything.
        assert_eq!(starts(&slots), vec!["09:00", "10:00"]);
    }

    #[test]
    fn test_degenerate_durations_yield_no_slots() {
        let hours = open_day("09:00", "17:00");
        assert!(compute_slots(Some(&hours), 0, 0, &[]).is_empty());
        assert!(compute_slots(Some(&hours), -30, 0, &[]).is_empty());
        assert!(compute_slots(Some(&hours), 30, -5, &[]).is_empty());
    }

    #[test]
    fn test_service_longer_than_day_yields_no_slots() {
        let hours = open_day("09:00", "10:00");
        let slots = compute_slots(Some(&hours), 90, 0, &[]);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_parse_hhmm_accepts_valid_and_rejects_garbage() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("09:05"), Some(545));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("noon"), None);
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("-1:30"), None);
    }
}
