//! Validation of raw day/month/year input.
//!
//! Every field is checked independently so callers can show all problems at
//! once. The calendar check only runs when all three components are in range,
//! and the future-date check only runs on a real calendar date.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::calendar::CalendarDate;

/// Earliest accepted birth year.
pub const MIN_YEAR: i64 = 1000;

/// Outcome of validating one set of date components.
pub type ValidationResult = Result<CalendarDate, FieldErrors>;

/// An input field that can carry an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        }
    }

    fn range_message(self) -> &'static str {
        match self {
            Field::Day => "Please enter a valid day between 1 and 31.",
            Field::Month => "Please enter a valid month between 1 and 12.",
            Field::Year => "Please enter a valid year.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected input. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is outside the permitted numeric range, or was not a number.
    #[error("{}", .0.range_message())]
    Range(Field),

    /// Components are individually in range but do not name a real day.
    #[error("The date entered is not valid.")]
    Calendar(Field),

    /// A real date that lies after the reference date.
    #[error("Date must be in the past")]
    FutureDate,
}

impl ValidationError {
    /// The field this error is reported against.
    pub fn field(self) -> Field {
        match self {
            ValidationError::Range(field) | ValidationError::Calendar(field) => field,
            ValidationError::FutureDate => Field::Year,
        }
    }
}

/// Per-field error slots. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    day: Option<ValidationError>,
    month: Option<ValidationError>,
    year: Option<ValidationError>,
}

impl FieldErrors {
    fn slot_mut(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// Record `error` against its field, replacing any earlier message there.
    pub fn insert(&mut self, error: ValidationError) {
        *self.slot_mut(error.field()) = Some(error);
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Populated slots in day, month, year order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

/// Raw user input. `None` marks a component that was not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

impl DateComponents {
    pub fn new(day: i64, month: i64, year: i64) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    /// Parse raw text. Anything that is not a base-10 integer becomes `None`
    /// and later fails its range check.
    pub fn parse(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_component(day),
            month: parse_component(month),
            year: parse_component(year),
        }
    }

    /// Run every check against `reference` and aggregate the failures.
    pub fn validate(self, reference: CalendarDate) -> ValidationResult {
        let mut errors = FieldErrors::default();

        let day = in_range(self.day, 1, 31);
        if day.is_none() {
            errors.insert(ValidationError::Range(Field::Day));
        }
        let month = in_range(self.month, 1, 12);
        if month.is_none() {
            errors.insert(ValidationError::Range(Field::Month));
        }
        let year = in_range(self.year, MIN_YEAR, i64::from(reference.year()));
        if year.is_none() {
            errors.insert(ValidationError::Range(Field::Year));
        }

        let (Some(day), Some(month), Some(year)) = (day, month, year) else {
            debug!(components = ?self, %errors, "rejected out-of-range input");
            return Err(errors);
        };

        // Bounds were checked above, so these conversions cannot truncate.
        let Some(date) = CalendarDate::new(year as i32, month as u32, day as u32) else {
            errors.insert(ValidationError::Calendar(Field::Day));
            debug!(day, month, year, "rejected non-existent calendar date");
            return Err(errors);
        };

        if date > reference {
            errors.insert(ValidationError::FutureDate);
            debug!(%date, %reference, "rejected future date");
            return Err(errors);
        }

        Ok(date)
    }
}

/// Validate integer components against `reference`.
pub fn validate(day: i64, month: i64, year: i64, reference: CalendarDate) -> ValidationResult {
    DateComponents::new(day, month, year).validate(reference)
}

fn parse_component(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn in_range(value: Option<i64>, min: i64, max: i64) -> Option<i64> {
    value.filter(|v| (min..=max).contains(v))
}
