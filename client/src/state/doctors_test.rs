use time::macros::date;

use super::*;

const TODAY: Date = date!(2025 - 10 - 18);

#[test]
fn new_draft_defaults_to_available() {
    let draft = DoctorDraft::default();
    assert_eq!(draft.status, "Available");
    assert_eq!(Doctor::check_field(&draft, DoctorField::Status, TODAY), Ok(()));
}

#[test]
fn status_round_trips_through_display() {
    for status in [DoctorStatus::Available, DoctorStatus::OnLeave] {
        assert_eq!(status.to_string().parse::<DoctorStatus>(), Ok(status));
    }
    assert_eq!("Retired".parse::<DoctorStatus>(), Err(FieldErrorKind::UnknownOption));
}

#[test]
fn validate_requires_name_and_specialization() {
    let errors = Doctor::validate(&DoctorDraft::default(), TODAY).unwrap_err();
    assert_eq!(errors.get(DoctorField::Name), Some(FieldErrorKind::RequiredField));
    assert_eq!(errors.get(DoctorField::Specialization), Some(FieldErrorKind::RequiredField));
    assert_eq!(errors.get(DoctorField::Status), None);
}

#[test]
fn unknown_status_is_rejected() {
    let draft = DoctorDraft {
        name: "Dr. Esi Mensah".to_owned(),
        specialization: "Dermatologist".to_owned(),
        status: "Busy".to_owned(),
    };
    assert_eq!(Doctor::check_field(&draft, DoctorField::Status, TODAY), Err(FieldErrorKind::UnknownOption));
}

#[test]
fn category_class_reflects_status() {
    let doctors = seed();
    assert_eq!(doctors[0].category_class(), "cell--ok");
    assert_eq!(doctors[1].category_class(), "cell--danger");
    assert_eq!(doctors[1].category(), "On Leave");
}
