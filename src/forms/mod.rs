//! Form binding and validation
//!
//! Forms deserialize straight from `application/x-www-form-urlencoded`
//! bodies. Every field is optional at the serde level so a missing field
//! becomes a field error rather than a rejected request.

pub mod book;
pub mod category;

pub use book::BookForm;
pub use category::CategoryForm;

use chrono::NaiveDate;

use crate::domain::FieldErrors;

pub const MAX_LENGTH: usize = 255;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_DATE: &str = "Enter a valid date.";
pub const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn cleaned(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// A required, non-blank, length-limited text field.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &Option<String>,
) -> String {
    match cleaned(value) {
        Some(v) => {
            check_length(errors, field, &v);
            v
        }
        None => {
            errors.add(field, REQUIRED);
            String::new()
        }
    }
}

/// A field that must be submitted but may be left empty.
pub(crate) fn present_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &Option<String>,
) -> String {
    match value.as_deref() {
        Some(v) => {
            let v = v.trim().to_owned();
            check_length(errors, field, &v);
            v
        }
        None => {
            errors.add(field, REQUIRED);
            String::new()
        }
    }
}

fn check_length(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let len = value.chars().count();
    if len > MAX_LENGTH {
        errors.add(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                MAX_LENGTH, len
            ),
        );
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
