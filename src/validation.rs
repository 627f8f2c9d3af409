//! Input validation for rotation planning.
//!
//! Checks a match format and a roster before planning. Detects:
//! - Zero-length matches
//! - Zero outfield capacity
//! - Blank or duplicate player names
//! - Outfield sets too large to rotate
//!
//! Validation is advisory. The scheduler accepts any input and only
//! declines to plan when the outfield exceeds `3C`; these checks let a
//! caller explain why up front.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::models::{AttendanceRoster, MatchConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Match duration is zero.
    ZeroDuration,
    /// No outfield players allowed on the pitch.
    ZeroCapacity,
    /// An attendee or goalkeeper name is blank.
    EmptyName,
    /// Two attendees share a name.
    DuplicateName,
    /// More outfield players than any plan can cover.
    CapacityExceeded,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ZeroDuration => "zero duration",
            Self::ZeroCapacity => "zero capacity",
            Self::EmptyName => "empty name",
            Self::DuplicateName => "duplicate name",
            Self::CapacityExceeded => "capacity exceeded",
        };
        f.write_str(label)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a match format.
pub fn validate_config(config: &MatchConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_config(config, &mut errors);
    into_result(errors)
}

/// Validates a roster against a match format.
///
/// Checks:
/// 1. The format itself (duration, capacity)
/// 2. No blank attendee or goalkeeper names
/// 3. No duplicate attendee names
/// 4. The outfield fits within `3C`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &AttendanceRoster, config: &MatchConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_config(config, &mut errors);

    let mut seen = HashSet::new();
    for (idx, name) in roster.attendees.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Attendee #{} has a blank name", idx + 1),
            ));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate attendee name: {name}"),
            ));
        }
    }

    if matches!(roster.goalkeeper.as_deref(), Some(gk) if gk.trim().is_empty()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Goalkeeper name is blank",
        ));
    }

    let outfield = roster.outfield_count();
    let limit = config.max_rotating_players();
    if outfield > limit {
        errors.push(ValidationError::new(
            ValidationErrorKind::CapacityExceeded,
            format!("{outfield} outfield players exceed the rotation limit of {limit}"),
        ));
    }

    into_result(errors)
}

fn check_config(config: &MatchConfig, errors: &mut Vec<ValidationError>) {
    if config.duration_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDuration,
            "Match duration must be at least one minute",
        ));
    }
    if config.outfield_capacity == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCapacity,
            "Outfield capacity must be at least one player",
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
