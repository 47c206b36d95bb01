use time::macros::date;

use super::*;
use crate::state::appointments::{Appointment, AppointmentField};
use crate::state::patients::{self, Patient, PatientField};

const TODAY: Date = date!(2025 - 10 - 18);

#[test]
fn create_starts_from_entity_defaults() {
    let mut form = FormState::<Appointment>::default();
    form.open_for_create();
    assert_eq!(form.value(AppointmentField::Status), "Scheduled");
    assert_eq!(form.value(AppointmentField::PatientName), "");
    assert!(form.errors.is_empty());
}

#[test]
fn edit_copies_every_field() {
    let record = patients::seed().remove(0);
    let mut form = FormState::<Patient>::default();
    form.open_for_edit(&record);

    assert_eq!(form.value(PatientField::Name), "John Doe");
    assert_eq!(form.value(PatientField::Age), "30");
    assert_eq!(form.value(PatientField::Gender), "Male");
    assert_eq!(form.value(PatientField::Condition), "Fever");
}

#[test]
fn set_field_revalidates_only_that_field() {
    let mut form = FormState::<Patient>::default();
    form.set_field(PatientField::Age, "abc".to_owned(), TODAY);
    assert_eq!(form.error(PatientField::Age), Some(FieldErrorKind::InvalidNumber));
    assert_eq!(form.error(PatientField::Name), None);

    form.set_field(PatientField::Age, "41".to_owned(), TODAY);
    assert_eq!(form.error(PatientField::Age), None);
}

#[test]
fn set_field_flags_past_date_immediately() {
    let mut form = FormState::<Appointment>::default();
    form.set_field(AppointmentField::Date, "2025-10-17".to_owned(), TODAY);
    assert_eq!(form.error(AppointmentField::Date), Some(FieldErrorKind::PastDate));

    form.set_field(AppointmentField::Date, "2025-10-18".to_owned(), TODAY);
    assert_eq!(form.error(AppointmentField::Date), None);
}

#[test]
fn validate_reports_every_missing_field() {
    let mut form = FormState::<Patient>::default();
    let errors = form.validate(TODAY).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert_eq!(form.errors, errors);
    assert_eq!(errors.get(PatientField::Gender), Some(FieldErrorKind::RequiredField));
}

#[test]
fn validate_builds_trimmed_record_and_clears_errors() {
    let mut form = FormState::<Patient>::default();
    form.set_field(PatientField::Name, "  Alice ".to_owned(), TODAY);
    form.set_field(PatientField::Age, "abc".to_owned(), TODAY);
    form.set_field(PatientField::Age, "40".to_owned(), TODAY);
    form.set_field(PatientField::Gender, "Female".to_owned(), TODAY);
    form.set_field(PatientField::Condition, "Flu".to_owned(), TODAY);

    let patient = form.validate(TODAY).unwrap();
    assert_eq!(patient.name, "Alice");
    assert_eq!(patient.age, 40);
    assert!(form.errors.is_empty());
}
