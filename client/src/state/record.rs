//! The `Record` trait: everything an entity must describe about itself so the
//! generic CRUD state and components can list, filter, edit and validate it.

use std::fmt::Debug;

use time::Date;

use super::error::{FieldErrorKind, FieldErrors};

/// Store-assigned record identifier.
pub type RecordId = u64;

/// Id carried by a record that has not been added to a store yet.
pub const UNASSIGNED_ID: RecordId = 0;

/// How a form field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
    Time,
    /// A `<select>` over fixed options; the first entry may be an empty prompt.
    Select(&'static [SelectOption]),
}

/// One `<option>` of a select input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static description of one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec<F: 'static> {
    pub field: F,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
}

/// An entity managed by a [`CrudState`](super::crud::CrudState).
///
/// Records are plain values: the draft type holds raw form input and
/// [`Record::from_draft`] is the only way to turn it back into a record.
pub trait Record: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Raw form input, one string per field.
    type Draft: Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    /// Field identifiers, in form order.
    type Field: Copy + Debug + Eq + Ord + Send + Sync + 'static;

    /// Singular noun used in dialog titles, e.g. `"Patient"`.
    const NOUN: &'static str;
    /// Placeholder for the search box.
    const SEARCH_PLACEHOLDER: &'static str;
    /// Category options for the filter select; empty value means "all".
    const CATEGORY_OPTIONS: &'static [SelectOption];
    /// Table column headings, matching [`Record::cells`].
    const COLUMNS: &'static [&'static str];
    /// Index in [`Record::COLUMNS`] of the category cell.
    const CATEGORY_COLUMN: usize;
    /// Message shown when the filtered list is empty.
    const EMPTY_MESSAGE: &'static str;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Text fields the search box matches against.
    fn search_text(&self) -> [&str; 2];

    /// Value compared against the category filter.
    fn category(&self) -> &str;

    /// Display values for each column in [`Record::COLUMNS`].
    fn cells(&self) -> Vec<String>;

    /// CSS modifier for the category cell.
    fn category_class(&self) -> &'static str;

    fn schema() -> &'static [FieldSpec<Self::Field>];

    /// Copy every field into a fresh draft.
    fn to_draft(&self) -> Self::Draft;

    fn draft_value(draft: &Self::Draft, field: Self::Field) -> String;

    fn set_draft_value(draft: &mut Self::Draft, field: Self::Field, value: String);

    /// Validate one field of a draft against the rules for this entity.
    ///
    /// # Errors
    ///
    /// Returns the reason the field is rejected.
    fn check_field(draft: &Self::Draft, field: Self::Field, today: Date) -> Result<(), FieldErrorKind>;

    /// Build a record from a draft that passed [`Record::check_field`] for
    /// every field. The returned record carries [`UNASSIGNED_ID`].
    ///
    /// # Errors
    ///
    /// Returns field errors if a value still cannot be converted.
    fn from_draft(draft: &Self::Draft) -> Result<Self, FieldErrors<Self::Field>>;

    /// Label for a field as declared in the schema.
    fn label(field: Self::Field) -> &'static str {
        Self::schema()
            .iter()
            .find(|spec| spec.field == field)
            .map_or("", |spec| spec.label)
    }

    /// Validate every schema field.
    ///
    /// # Errors
    ///
    /// Returns all failures at once, keyed by field.
    fn validate(draft: &Self::Draft, today: Date) -> Result<(), FieldErrors<Self::Field>> {
        let mut errors = FieldErrors::new();
        for spec in Self::schema() {
            errors.apply(spec.field, Self::check_field(draft, spec.field, today));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Shared rule: trimmed text must be non-empty.
///
/// # Errors
///
/// Returns [`FieldErrorKind::RequiredField`] for blank input.
pub fn require_text(value: &str) -> Result<(), FieldErrorKind> {
    if value.trim().is_empty() { Err(FieldErrorKind::RequiredField) } else { Ok(()) }
}

/// Shared rule: value must be one of the non-empty select options.
///
/// # Errors
///
/// Returns [`FieldErrorKind::RequiredField`] for blank input and
/// [`FieldErrorKind::UnknownOption`] for anything not listed.
pub fn require_option(value: &str, options: &[SelectOption]) -> Result<(), FieldErrorKind> {
    require_text(value)?;
    if options.iter().any(|o| !o.value.is_empty() && o.value == value) {
        Ok(())
    } else {
        Err(FieldErrorKind::UnknownOption)
    }
}
