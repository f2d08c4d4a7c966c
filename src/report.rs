//! Rendering of a validation/age outcome for the terminal.

use serde::Serialize;

use crate::age::{AgeResult, calculate_age};
use crate::calendar::CalendarDate;
use crate::validate::{DateComponents, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Human readable lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// How a successful age is laid out in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// One line each for years, months and days.
    #[default]
    Panel,
    /// "X years, Y months, Z days" on one line.
    Summary,
}

/// Result of one request: either an age or the fields that need fixing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    #[serde(rename = "ok")]
    Age {
        birth_date: CalendarDate,
        reference_date: CalendarDate,
        age: AgeResult,
    },
    Invalid {
        errors: FieldErrors,
    },
}

impl Outcome {
    /// Validate `components` and, when they pass, compute the age.
    pub fn evaluate(components: DateComponents, reference: CalendarDate) -> Self {
        match components.validate(reference) {
            Ok(birth_date) => Outcome::Age {
                birth_date,
                reference_date: reference,
                age: calculate_age(birth_date, reference),
            },
            Err(errors) => Outcome::Invalid { errors },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Age { .. })
    }
}

/// Render `outcome` in the requested format. `style` only affects text.
pub fn render(outcome: &Outcome, format: Format, style: TextStyle) -> serde_json::Result<String> {
    match format {
        Format::Json => serde_json::to_string(outcome),
        Format::Text => Ok(render_text(outcome, style)),
    }
}

fn render_text(outcome: &Outcome, style: TextStyle) -> String {
    let mut out = String::new();
    match (outcome, style) {
        (Outcome::Age { age, .. }, TextStyle::Panel) => {
            out.push_str(&format!("{} years\n", age.years));
            out.push_str(&format!("{} months\n", age.months));
            out.push_str(&format!("{} days\n", age.days));
        }
        (Outcome::Age { age, .. }, TextStyle::Summary) => {
            out.push_str(&format!("{age}\n"));
        }
        (Outcome::Invalid { errors }, _) => {
            for (field, error) in errors.iter() {
                out.push_str(&format!("{field}: {error}\n"));
            }
        }
    }
    out
}
