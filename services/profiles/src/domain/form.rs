//! Validation schema for the employee profile form.
//!
//! [`validate_profile_form`] turns an arbitrary JSON object into a
//! [`NewProfile`] or a [`FieldErrors`] map. It never performs I/O and never
//! fails for reasons other than the candidate itself.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;

use crate::domain::types::{FieldErrors, NewProfile};

pub const REQUIRED: &str = "Required";
pub const INVALID_DATE: &str = "Invalid date";

const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Local part, `@`, then dot-separated labels ending in an alphabetic TLD of
/// two or more letters. Leading and doubled dots are rejected separately
/// because the `regex` crate has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

/// Free-text rules of the form. Enumerations and dates are checked while
/// normalizing, where they are parsed into their typed representation.
#[derive(Debug, Validate)]
struct ProfileForm {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters"))]
    full_name: String,
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    username: String,
    #[validate(custom(
        function = "validate_email_address",
        message = "Invalid email address"
    ))]
    email: String,
}

/// Validate and normalize a candidate form.
///
/// Every offending field is reported, not only the first one. Unknown keys are
/// ignored. A missing `role` becomes [`Role::default`].
pub fn validate_profile_form(candidate: &Map<String, Value>) -> Result<NewProfile, FieldErrors> {
    let mut errors = FieldErrors::default();

    let full_name = required_text(candidate, "full_name", &mut errors);
    let username = required_text(candidate, "username", &mut errors);
    let email = required_text(candidate, "email", &mut errors);
    let phone = optional_text(candidate, "phone", &mut errors);
    let address = optional_text(candidate, "address", &mut errors);
    let department = required_text(candidate, "department", &mut errors);
    let role = optional_raw_text(candidate, "role", &mut errors);
    let hire_date = optional_text(candidate, "hire_date", &mut errors);

    let form = ProfileForm {
        full_name: full_name.clone().unwrap_or_default(),
        username: username.clone().unwrap_or_default(),
        email: email.clone().unwrap_or_default(),
    };
    if let Err(report) = form.validate() {
        for (field, field_errors) in report.field_errors() {
            let field: &str = &field;
            // A missing or mistyped value already carries its own message.
            if errors.contains(field) {
                continue;
            }
            for error in field_errors {
                let message = error
                    .message
                    .as_deref()
                    .map(str::to_owned)
                    .unwrap_or_else(|| error.code.to_string());
                errors.add(field, message);
            }
        }
    }

    let department = department.and_then(|raw| match raw.parse::<Department>() {
        Ok(department) => Some(department),
        Err(e) => {
            errors.add("department", e.to_string());
            None
        }
    });

    let role = match role {
        None => Some(Role::default()),
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                errors.add("role", e.to_string());
                None
            }
        },
    };

    let hire_date = match hire_date {
        None => Some(None),
        Some(raw) => match NaiveDate::parse_from_str(&raw, HIRE_DATE_FORMAT) {
            Ok(date) => Some(Some(date)),
            Err(_) => {
                errors.add("hire_date", INVALID_DATE);
                None
            }
        },
    };

    match (full_name, username, email, department, role, hire_date) {
        (
            Some(full_name),
            Some(username),
            Some(email),
            Some(department),
            Some(role),
            Some(hire_date),
        ) if errors.is_empty() => Ok(NewProfile {
            full_name,
            username,
            email,
            phone,
            address,
            department,
            role,
            hire_date,
        }),
        _ => Err(errors),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected_string(field: &str, value: &Value, errors: &mut FieldErrors) {
    errors.add(
        field,
        format!("Expected string, received {}", json_kind(value)),
    );
}

/// A field that must be present as a string. Empty strings are kept so the
/// length and syntax rules can report on them.
fn required_text(
    candidate: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match candidate.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, REQUIRED);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            expected_string(field, other, errors);
            None
        }
    }
}

/// A string-or-absent field, returned verbatim.
fn optional_raw_text(
    candidate: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match candidate.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            expected_string(field, other, errors);
            None
        }
    }
}

/// Like [`optional_raw_text`], but an empty input counts as absent.
fn optional_text(
    candidate: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    optional_raw_text(candidate, field, errors).filter(|s| !s.is_empty())
}

// ── Form metadata ────────────────────────────────────────────────────────────

/// Initial values shown in an empty form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFormDefaults {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: Department,
    pub role: Role,
    pub hire_date: NaiveDate,
}

impl ProfileFormDefaults {
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            full_name: String::new(),
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            department: Department::It,
            role: Role::default(),
            hire_date: today,
        }
    }
}

/// One entry of a select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub departments: Vec<SelectOption>,
    pub roles: Vec<SelectOption>,
}

pub fn form_options() -> FormOptions {
    FormOptions {
        departments: Department::ALL
            .into_iter()
            .map(|d| SelectOption {
                value: d.as_str(),
                label: d.label(),
            })
            .collect(),
        roles: Role::DISPLAY_ORDER
            .into_iter()
            .map(|r| SelectOption {
                value: r.as_str(),
                label: r.label(),
            })
            .collect(),
    }
}
