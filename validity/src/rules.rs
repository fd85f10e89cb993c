//! Built-in validation rules.
//!
//! Factory functions returning ready-made [`Rule`]s for the common cases.
//! Every message is host-supplied; the library never invents UI text.
//! Rules compose through a field's ordered rule list with the first
//! failure winning, so `email` deliberately passes an empty value and
//! leaves emptiness to `required`.

use std::sync::Arc;

use email_address::EmailAddress;
use regex::Regex;
use thiserror::Error;

use crate::outcome::Outcome;
use crate::registry::Rule;
use crate::snapshot::FieldSnapshot;

/// Failure to construct a rule.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The expression handed to [`pattern`] does not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Wrap a raw outcome function as a rule.
///
/// The escape hatch for anything the boolean shape of [`check`] cannot
/// express, such as rules that return [`Outcome::Pending`].
pub fn from_fn<F>(f: F) -> Rule
where
    F: Fn(&FieldSnapshot) -> Outcome + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Rule from a boolean predicate; `message` is the failure text.
pub fn check<F>(predicate: F, message: impl Into<String>) -> Rule
where
    F: Fn(&FieldSnapshot) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Arc::new(move |field: &FieldSnapshot| {
        if predicate(field) {
            Outcome::Ok
        } else {
            Outcome::Failed(message.clone())
        }
    })
}

/// Require the value to be non-empty after trimming whitespace.
pub fn required(message: impl Into<String>) -> Rule {
    check(|field| !field.value.trim().is_empty(), message)
}

/// Require minimum length (in characters, not bytes).
pub fn min_length(min: usize, message: impl Into<String>) -> Rule {
    check(move |field| field.value.chars().count() >= min, message)
}

/// Require maximum length (in characters, not bytes).
pub fn max_length(max: usize, message: impl Into<String>) -> Rule {
    check(move |field| field.value.chars().count() <= max, message)
}

/// Require the value to match a regex.
///
/// The match is unanchored; anchor the expression itself when the whole
/// value must match.
pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Rule, RuleError> {
    let re = Regex::new(pattern)?;
    Ok(check(move |field| re.is_match(&field.value), message))
}

/// Require a well-formed email address. An empty value passes; compose
/// with [`required`] to also demand one.
pub fn email(message: impl Into<String>) -> Rule {
    check(
        |field| field.value.is_empty() || EmailAddress::is_valid(&field.value),
        message,
    )
}

/// Require the value to equal a fixed expected value, e.g. a confirmation
/// field checked against the value it confirms.
pub fn equals(expected: impl Into<String>, message: impl Into<String>) -> Rule {
    let expected = expected.into();
    check(move |field| field.value == expected, message)
}

/// Require the value to look like a non-negative decimal number: digits
/// with at most one point. An empty value passes.
pub fn positive_number(message: impl Into<String>) -> Rule {
    let re = Regex::new(r"^\d*\.?\d*$").expect("static pattern compiles");
    check(move |field| re.is_match(&field.value), message)
}

/// Require a positive integer with no leading zeros.
pub fn positive_integer(message: impl Into<String>) -> Rule {
    let re = Regex::new(r"^[1-9][0-9]*$").expect("static pattern compiles");
    check(move |field| re.is_match(&field.value), message)
}
