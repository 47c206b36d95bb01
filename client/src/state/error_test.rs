use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Name,
    Date,
}

#[test]
fn message_prefixes_field_label() {
    assert_eq!(FieldErrorKind::PastDate.message("Date"), "Date cannot be in the past");
    assert_eq!(FieldErrorKind::RequiredField.message("Patient name"), "Patient name is required");
}

#[test]
fn apply_inserts_and_clears() {
    let mut errors = FieldErrors::new();
    errors.apply(Field::Name, Err(FieldErrorKind::RequiredField));
    assert_eq!(errors.get(Field::Name), Some(FieldErrorKind::RequiredField));

    errors.apply(Field::Name, Ok(()));
    assert_eq!(errors.get(Field::Name), None);
    assert!(errors.is_empty());
}

#[test]
fn iter_yields_fields_in_declaration_order() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Date, FieldErrorKind::PastDate);
    errors.insert(Field::Name, FieldErrorKind::RequiredField);
    let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(fields, vec![Field::Name, Field::Date]);
}

#[test]
fn field_errors_display_counts_failures() {
    let mut errors = FieldErrors::single(Field::Name, FieldErrorKind::RequiredField);
    errors.insert(Field::Date, FieldErrorKind::InvalidDate);
    assert_eq!(errors.to_string(), "2 field(s) failed validation");
}

#[test]
fn submit_error_wraps_field_errors_transparently() {
    let errors = FieldErrors::single(Field::Date, FieldErrorKind::PastDate);
    let err: SubmitError<Field> = errors.clone().into();
    assert_eq!(err, SubmitError::Invalid(errors));
    assert_eq!(err.to_string(), "1 field(s) failed validation");
    assert_eq!(SubmitError::<Field>::NotEditing.to_string(), "no record form is open");
}
