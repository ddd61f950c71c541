//! Field validation for incoming request bodies.
//!
//! A [`Validator`] collects every failure for a request before reporting, so a client
//! gets all field errors in one response instead of fixing them one at a time.

use std::{collections::BTreeMap, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::server::error::validation::ValidationError;

pub const MISSING_FIELD: &str = "Missing data for required field.";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_POSITION_NAME_LEN: usize = 50;

pub const MIN_YEAR: i32 = 1088;
pub const MAX_YEAR: i32 = 10000;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Accumulates per-field error messages.
#[derive(Debug, Default)]
pub struct Validator {
    fields: BTreeMap<String, Vec<String>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Passes `value` through, recording a missing-field error when absent.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add(field, MISSING_FIELD);
        }
        value
    }

    /// Returns `Err` with every recorded message if any check failed.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.fields,
            })
        }
    }

    pub fn name(&mut self, field: &str, value: &str) {
        if value.chars().count() < MIN_NAME_LEN {
            self.add(field, "Too short name (min 2 symbols)");
        }
    }

    pub fn first_name(&mut self, field: &str, value: &str) {
        if value.chars().count() < MIN_NAME_LEN {
            self.add(field, "Too short first name (min 2 symbols)");
        }
    }

    pub fn last_name(&mut self, field: &str, value: &str) {
        if value.chars().count() < MIN_NAME_LEN {
            self.add(field, "Too short last name (min 2 symbols)");
        }
    }

    pub fn position_name(&mut self, field: &str, value: &str) {
        let len = value.chars().count();
        if len < MIN_NAME_LEN {
            self.add(field, "Too short position name (min 2 symbols)");
        } else if len > MAX_POSITION_NAME_LEN {
            self.add(field, "Too long position name (max 50 symbols)");
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !EMAIL.is_match(value) {
            self.add(field, "Invalid Email Address");
        }
    }

    /// Length-only check used by login, where strength rules would leak policy.
    pub fn password_length(&mut self, field: &str, value: &str) {
        if value.chars().count() < MIN_PASSWORD_LEN {
            self.add(field, "Too short password(min 8 symbols)");
        }
    }

    /// Reports the first unmet strength rule only.
    pub fn password_strength(&mut self, field: &str, value: &str) {
        let message = if value.chars().count() < MIN_PASSWORD_LEN {
            "Too short password(min 8 symbols)"
        } else if !value.chars().any(char::is_uppercase) {
            "Password should have at least one uppercase letter"
        } else if !value.chars().any(char::is_lowercase) {
            "Password should have at least one lowercase letter"
        } else if !value.chars().any(|c| c.is_ascii_digit()) {
            "Password should have at least one number"
        } else if value.chars().all(char::is_alphanumeric) {
            "Password should have at least one special symbol"
        } else {
            return;
        };
        self.add(field, message);
    }

    pub fn age(&mut self, field: &str, value: i16) {
        if value < 1 {
            self.add(field, "Age Should Be Positive Number");
        } else if value > 130 {
            self.add(field, "Too Big Number Provided For Age");
        }
    }

    pub fn year_of_study(&mut self, field: &str, value: i16) {
        if !(1..=8).contains(&value) {
            self.add(field, "Year of Study should be between 1 and 8");
        }
    }

    pub fn year(&mut self, field: &str, value: i32) {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            self.add(
                field,
                "Wrong year provided (year should be in this interval 1088 <= year <= 10000)",
            );
        }
    }

    pub fn credits(&mut self, field: &str, value: i16) {
        if !(0..=12).contains(&value) {
            self.add(
                field,
                "Wrong value provided for credits (credits should be in this interval 0 <= credits <= 12)",
            );
        }
    }

    pub fn credits_per_student(&mut self, field: &str, value: i16) {
        if !(0..=150).contains(&value) {
            self.add(
                field,
                "Wrong value provided for credits_per_student (credits_per_student should be in this interval 0 <= credits_per_student <= 150)",
            );
        }
    }

    pub fn max_mark(&mut self, field: &str, value: i16) {
        if value < 1 {
            self.add(field, "Max mark should be greater than or equal to 1");
        } else if value > 100 {
            self.add(field, "Max mark should be less than or equal to 100");
        }
    }

    pub fn deadline(&mut self, field: &str, value: DateTime<Utc>, now: DateTime<Utc>) {
        if value < now {
            self.add(
                field,
                "Wrong deadline provided, it is not possible to set a deadline for the past",
            );
        }
    }

    pub fn non_empty<T>(&mut self, field: &str, values: &[T]) {
        if values.is_empty() {
            self.add(field, "Shorter than minimum length 1.");
        }
    }
}
