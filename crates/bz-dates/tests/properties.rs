//! Property tests for notation recognition, validation and conversion.

use bz_dates::{
    CalendarDate, Notation, classify, decompose, from_vendor, is_valid_date, to_vendor,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn valid_ymd() -> impl Strategy<Value = (i32, u32, u32)> {
    (2000i32..=2099, 1u32..=12, 1u32..=31).prop_filter("day must exist", |(y, m, d)| {
        NaiveDate::from_ymd_opt(*y, *m, *d).is_some()
    })
}

proptest! {
    #[test]
    fn iso_dates_round_trip_through_vendor((year, month, day) in valid_ymd()) {
        let original = format!("{year:04}-{month:02}-{day:02}");
        prop_assert_eq!(classify(&original), Notation::Iso);

        let parts = decompose(&original, Notation::Iso).unwrap();
        let date = CalendarDate::try_from(parts).unwrap();
        let vendor = to_vendor(&date);
        prop_assert_eq!(from_vendor(&vendor, Notation::Iso).unwrap(), original);
    }

    #[test]
    fn compact_iso_dates_normalize_to_hyphens((year, month, day) in valid_ymd()) {
        let compact = format!("{year:04}{month:02}{day:02}");
        prop_assert_eq!(classify(&compact), Notation::Iso);

        let date = CalendarDate::try_from(decompose(&compact, Notation::Iso).unwrap()).unwrap();
        prop_assert_eq!(
            from_vendor(&to_vendor(&date), Notation::Iso).unwrap(),
            format!("{year:04}-{month:02}-{day:02}")
        );
    }

    #[test]
    fn dotted_dates_round_trip_through_vendor((year, month, day) in valid_ymd()) {
        let original = format!("{day:02}.{month:02}.{year:04}");
        prop_assert_eq!(classify(&original), Notation::Dotted);

        let parts = decompose(&original, Notation::Dotted).unwrap();
        let date = CalendarDate::try_from(parts).unwrap();
        let vendor = to_vendor(&date);
        prop_assert_eq!(from_vendor(&vendor, Notation::Dotted).unwrap(), original);
    }

    #[test]
    fn validity_agrees_with_chrono(year in 1900i32..=2200, month in 0u32..=13, day in 0u32..=32) {
        prop_assert_eq!(
            is_valid_date(year, month, day),
            NaiveDate::from_ymd_opt(year, month, day).is_some()
        );
    }

    #[test]
    fn calendar_order_matches_chrono(a in valid_ymd(), b in valid_ymd()) {
        let left = CalendarDate::new(a.0, a.1, a.2).unwrap();
        let right = CalendarDate::new(b.0, b.1, b.2).unwrap();
        prop_assert_eq!(
            left.cmp(&right),
            left.to_naive_date().cmp(&right.to_naive_date())
        );
    }
}
