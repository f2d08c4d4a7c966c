//! Elapsed age in whole years, months and days.
//!
//! Raw day/month/year input goes through [`validate`] (or
//! [`DateComponents::validate`] for text input), and a validated birth date is
//! handed to [`calculate_age`]. [`Outcome`] and [`render`] compose the two for
//! the command-line front end.
//!
//! ```
//! use agecalc::{CalendarDate, calculate_age, validate};
//!
//! let today = CalendarDate::new(2024, 5, 15).unwrap();
//! let birth = validate(20, 5, 2000, today).unwrap();
//! assert_eq!(calculate_age(birth, today).to_string(), "23 years, 11 months, 25 days");
//! ```

pub mod age;
pub mod calendar;
pub mod report;
pub mod validate;

pub use age::{AgeResult, calculate_age};
pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use report::{Format, Outcome, TextStyle, render};
pub use validate::{DateComponents, Field, FieldErrors, ValidationError, ValidationResult, validate};
