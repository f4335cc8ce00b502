//! Property-based tests for `DateRange` and `ReservationStatus`.

use super::{DateRange, ReservationStatus};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

// Strategy for generating valid ranges within a two-year window
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..730, 1i64..60).prop_map(|(offset, length)| {
        let start = base_date() + Duration::days(offset);
        DateRange::new(start, start + Duration::days(length)).unwrap()
    })
}

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ReservationStatus::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn overlap_is_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_is_reflexive(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // Ranges sharing a boundary day always conflict
    #[test]
    fn shared_boundary_overlaps(a in range_strategy(), length in 1i64..60) {
        let next = DateRange::new(a.end_date(), a.end_date() + Duration::days(length)).unwrap();
        prop_assert!(a.overlaps(&next));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap(a in range_strategy(), gap in 1i64..30, length in 1i64..60) {
        let start = a.end_date() + Duration::days(gap);
        let later = DateRange::new(start, start + Duration::days(length)).unwrap();
        prop_assert!(!a.overlaps(&later));
    }

    // Matches a brute-force day-by-day intersection
    #[test]
    fn overlap_matches_day_intersection(a in range_strategy(), b in range_strategy()) {
        let days = |r: &DateRange| r.start_date().iter_days().take_while(|d| *d <= r.end_date()).collect::<Vec<_>>();
        let shared = days(&a).iter().any(|d| days(&b).contains(d));
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn non_increasing_dates_rejected(offset in 0i64..730, back in 0i64..60) {
        let start = base_date() + Duration::days(offset);
        let end = start - Duration::days(back);
        prop_assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn status_display_parses_back(status in status_strategy()) {
        prop_assert_eq!(status.to_string().parse::<ReservationStatus>().unwrap(), status);
        prop_assert_eq!(status.to_string().to_lowercase().parse::<ReservationStatus>().unwrap(), status);
    }
}
