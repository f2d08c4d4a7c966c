//! Property tests over the validator and age calculator.

use agecalc::{CalendarDate, Field, ValidationError, calculate_age, days_in_month, validate};
use proptest::prelude::*;

fn reference() -> CalendarDate {
    CalendarDate::new(2024, 5, 15).unwrap()
}

/// Any real calendar day between 1000-01-01 and 2024-05-15.
fn past_date() -> impl Strategy<Value = (i64, i64, i64)> {
    (1000i32..=2024, 1u32..=12)
        .prop_flat_map(|(year, month)| {
            (Just(year), Just(month), 1..=days_in_month(year, month))
        })
        .prop_filter("not after the reference date", |&(year, month, day)| {
            CalendarDate::new(year, month, day).is_some_and(|date| date <= reference())
        })
        .prop_map(|(year, month, day)| (i64::from(day), i64::from(month), i64::from(year)))
}

proptest! {
    #[test]
    fn real_past_dates_validate((day, month, year) in past_date()) {
        let date = validate(day, month, year, reference());
        prop_assert!(date.is_ok(), "{day}/{month}/{year} rejected: {date:?}");
    }

    #[test]
    fn validation_is_pure(day in -50i64..50, month in -5i64..20, year in 900i64..2100) {
        prop_assert_eq!(
            validate(day, month, year, reference()),
            validate(day, month, year, reference())
        );
    }

    #[test]
    fn every_error_names_one_field(day in -50i64..50, month in -5i64..20, year in 900i64..2100) {
        if let Err(errors) = validate(day, month, year, reference()) {
            prop_assert!(!errors.is_empty());
            for (field, error) in errors.iter() {
                prop_assert_eq!(error.field(), field);
            }
        }
    }

    #[test]
    fn future_dates_are_rejected_on_year(offset in 1i64..230) {
        // Days after 2024-05-15 within the same year.
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
            + chrono::Days::new(offset as u64);
        let date = CalendarDate::from(naive);
        let errors = validate(
            i64::from(date.day()),
            i64::from(date.month()),
            i64::from(date.year()),
            reference(),
        )
        .unwrap_err();
        prop_assert_eq!(errors.get(Field::Year), Some(ValidationError::FutureDate));
    }

    #[test]
    fn ages_are_normalized((day, month, year) in past_date()) {
        let birth = validate(day, month, year, reference()).unwrap();
        let age = calculate_age(birth, reference());
        prop_assert!(age.years >= 0);
        prop_assert!((0..=11).contains(&age.months));
        prop_assert!(age.days >= 0 && age.days <= 30, "{age:?} for {birth}");
    }
}
