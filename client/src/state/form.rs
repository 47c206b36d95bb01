//! Draft editing with field-level validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use time::Date;

use super::error::{FieldErrorKind, FieldErrors};
use super::record::Record;

/// The record being edited plus the errors currently shown for it.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<E: Record> {
    pub draft: E::Draft,
    pub errors: FieldErrors<E::Field>,
}

impl<E: Record> Default for FormState<E> {
    fn default() -> Self {
        Self { draft: E::Draft::default(), errors: FieldErrors::new() }
    }
}

impl<E: Record> FormState<E> {
    /// Start a blank draft with the entity's defaults.
    pub fn open_for_create(&mut self) {
        *self = Self::default();
    }

    /// Start a draft holding a copy of every field of `record`.
    pub fn open_for_edit(&mut self, record: &E) {
        self.draft = record.to_draft();
        self.errors.clear();
    }

    /// Store a new value and re-check just that field.
    pub fn set_field(&mut self, field: E::Field, value: String, today: Date) {
        E::set_draft_value(&mut self.draft, field, value);
        self.errors.apply(field, E::check_field(&self.draft, field, today));
    }

    #[must_use]
    pub fn value(&self, field: E::Field) -> String {
        E::draft_value(&self.draft, field)
    }

    #[must_use]
    pub fn error(&self, field: E::Field) -> Option<FieldErrorKind> {
        self.errors.get(field)
    }

    /// Check every field and, when all pass, build the record.
    ///
    /// The visible errors are replaced by the outcome of this check.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the draft is not valid.
    pub fn validate(&mut self, today: Date) -> Result<E, FieldErrors<E::Field>> {
        let built = E::validate(&self.draft, today).and_then(|()| E::from_draft(&self.draft));
        match &built {
            Ok(_) => self.errors.clear(),
            Err(errors) => self.errors = errors.clone(),
        }
        built
    }
}
