//! Record validation.
//!
//! A candidate record is admissible when:
//! - `id` is non-empty
//! - `email` is a well-formed address (or merely non-empty under [`EmailCheck::Lenient`])
//! - `age` is at least the configured minimum ([`DEFAULT_MIN_AGE`] unless overridden)
//!
//! Checks run in that order and the first failure is reported.

use crate::model::User;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN_AGE: i64 = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// How strictly the `email` field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailCheck {
    /// Full address grammar: local part, `@`, dot-separated domain labels of 1-63 chars.
    #[default]
    Strict,
    /// Only requires a non-empty value.
    Lenient,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id cannot be empty")]
    EmptyId,

    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("age {age} is below the minimum of {min}")]
    AgeBelowMinimum { age: i64, min: i64 },
}

/// Decides whether a candidate record may be admitted to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    email_check: EmailCheck,
    min_age: i64,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(EmailCheck::Strict, DEFAULT_MIN_AGE)
    }
}

impl Validator {
    pub fn new(email_check: EmailCheck, min_age: i64) -> Self {
        Self {
            email_check,
            min_age,
        }
    }

    pub fn validate(&self, user: &User) -> Result<(), ValidationError> {
        if user.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }

        match self.email_check {
            EmailCheck::Strict => {
                if !is_valid_email(&user.email) {
                    return Err(ValidationError::InvalidEmail(user.email.clone()));
                }
            }
            EmailCheck::Lenient => {
                if user.email.is_empty() {
                    return Err(ValidationError::EmptyEmail);
                }
            }
        }

        if user.age < self.min_age {
            return Err(ValidationError::AgeBelowMinimum {
                age: user.age,
                min: self.min_age,
            });
        }

        Ok(())
    }
}

/// Checks an address against the strict email grammar.
///
/// # Examples
/// ```
/// use userstore::validation::is_valid_email;
///
/// assert!(is_valid_email("a@example.com"));
/// assert!(is_valid_email("first.last+tag@sub-domain.example.org"));
///
/// assert!(!is_valid_email("bad-email"));
/// assert!(!is_valid_email("a@-example.com"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
