//! Validation and submit errors for record forms.
//!
//! ERROR HANDLING
//! ==============
//! Validation never panics and never touches the store: failures are
//! collected per field into `FieldErrors` and rendered inline next to the
//! offending input.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Why a single form field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
    /// The field is mandatory and was empty after trimming.
    #[error("is required")]
    RequiredField,

    /// The date lies before the current calendar day.
    #[error("cannot be in the past")]
    PastDate,

    /// The value is not a whole number.
    #[error("must be a whole number")]
    InvalidNumber,

    /// The value is not an ISO `YYYY-MM-DD` date.
    #[error("must be a valid date")]
    InvalidDate,

    /// The value is not one of the listed options.
    #[error("must be one of the listed options")]
    UnknownOption,
}

impl FieldErrorKind {
    /// Inline message shown under an input, e.g. `"Date cannot be in the past"`.
    #[must_use]
    pub fn message(self, label: &str) -> String {
        format!("{label} {self}")
    }
}

/// Field-keyed validation failures for one draft.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors<F: Ord + Debug>(BTreeMap<F, FieldErrorKind>);

impl<F: Ord + Debug> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Copy + Ord + Debug> FieldErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an error set holding a single failure.
    #[must_use]
    pub fn single(field: F, kind: FieldErrorKind) -> Self {
        let mut errors = Self::new();
        errors.insert(field, kind);
        errors
    }

    pub fn insert(&mut self, field: F, kind: FieldErrorKind) {
        self.0.insert(field, kind);
    }

    pub fn clear_field(&mut self, field: F) {
        self.0.remove(&field);
    }

    /// Record the outcome of re-checking one field.
    pub fn apply(&mut self, field: F, outcome: Result<(), FieldErrorKind>) {
        match outcome {
            Ok(()) => self.clear_field(field),
            Err(kind) => self.insert(field, kind),
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, field: F) -> Option<FieldErrorKind> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, FieldErrorKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }
}

/// Why a form submission was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError<F: Ord + Debug> {
    /// Submit was requested while no editor dialog was open.
    #[error("no record form is open")]
    NotEditing,

    /// One or more fields failed validation.
    #[error(transparent)]
    Invalid(#[from] FieldErrors<F>),
}
