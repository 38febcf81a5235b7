//! Input validation for assignment problems.
//!
//! Checks structural integrity of the patient and auxiliary lists before
//! assignment. Detects:
//! - Duplicate bed numbers
//! - Bed number zero
//! - Blank auxiliary names
//! - Duplicate auxiliary names (case-insensitive)
//!
//! The engine itself only defends against empty inputs; these are the
//! invariants it assumes were enforced upstream.

use std::collections::HashSet;

use crate::models::{Auxiliary, Patient};

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
    /// Two patients share a bed number.
    DuplicateBed,
    /// A bed number is zero.
    InvalidBed,
    /// Two auxiliaries share a name (case-insensitive).
    DuplicateAuxiliary,
    /// An auxiliary name is blank.
    BlankAuxiliary,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an assignment problem.
///
/// Checks:
/// 1. All bed numbers are strictly positive
/// 2. No two patients share a bed number
/// 3. All auxiliary names are non-blank
/// 4. No two auxiliaries share a name, compared case-insensitively
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(patients: &[Patient], auxiliaries: &[Auxiliary]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut beds = HashSet::new();
    for p in patients {
        if p.bed_number == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBed,
                "Bed number 0 is not a valid bed",
            ));
            continue;
        }
        if !beds.insert(p.bed_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateBed,
                format!("Duplicate bed number: {}", p.bed_number),
            ));
        }
    }

    let mut names = HashSet::new();
    for a in auxiliaries {
        let trimmed = a.name.trim();
        if trimmed.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankAuxiliary,
                "Auxiliary with blank name",
            ));
            continue;
        }
        if !names.insert(trimmed.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAuxiliary,
                format!("Duplicate auxiliary name: {}", a.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
