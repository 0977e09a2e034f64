//! Input validation for team assignment.
//!
//! Checks structural integrity of the roster and configuration before
//! any team is formed. Detects:
//! - Empty rosters
//! - Non-positive team sizes
//! - Duplicate or blank student IDs
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;

use crate::models::Student;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no students.
    EmptyRoster,
    /// Team size is zero.
    InvalidTeamSize,
    /// Two students share the same ID.
    DuplicateStudentId,
    /// A student ID is empty or whitespace.
    EmptyStudentId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and team size.
///
/// Checks:
/// 1. Team size is positive
/// 2. Roster is not empty
/// 3. Every student ID is non-blank
/// 4. No two students share an ID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roster: &[Student], team_size: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if team_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTeamSize,
            "Team size must be at least 1",
        ));
    }

    if roster.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no students",
        ));
    }

    let mut ids = HashSet::new();
    for (pos, student) in roster.iter().enumerate() {
        if student.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyStudentId,
                format!("Student at roster position {pos} has a blank ID"),
            ));
            continue;
        }
        if !ids.insert(student.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudentId,
                format!("Duplicate student ID: {}", student.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
