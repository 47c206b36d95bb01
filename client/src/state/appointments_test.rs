use time::macros::date;

use super::*;

const TODAY: Date = date!(2025 - 10 - 18);

fn draft_on(date: &str) -> AppointmentDraft {
    AppointmentDraft {
        patient_name: "Kofi Annan".to_owned(),
        doctor_name: "Dr. Yaw Owusu".to_owned(),
        date: date.to_owned(),
        time: "09:30".to_owned(),
        ..AppointmentDraft::default()
    }
}

// =============================================================
// Date rule
// =============================================================

#[test]
fn yesterday_is_in_the_past() {
    let draft = draft_on("2025-10-17");
    assert_eq!(Appointment::check_field(&draft, AppointmentField::Date, TODAY), Err(FieldErrorKind::PastDate));
}

#[test]
fn today_and_later_are_accepted() {
    for date in ["2025-10-18", "2025-10-19", "2026-01-01"] {
        assert_eq!(Appointment::check_field(&draft_on(date), AppointmentField::Date, TODAY), Ok(()));
    }
}

#[test]
fn malformed_or_missing_date() {
    assert_eq!(
        Appointment::check_field(&draft_on("18/10/2025"), AppointmentField::Date, TODAY),
        Err(FieldErrorKind::InvalidDate)
    );
    assert_eq!(
        Appointment::check_field(&draft_on(""), AppointmentField::Date, TODAY),
        Err(FieldErrorKind::RequiredField)
    );
}

#[test]
fn past_date_message_names_the_field() {
    let errors = Appointment::validate(&draft_on("2025-10-01"), TODAY).unwrap_err();
    let (field, kind) = errors.iter().next().unwrap();
    assert_eq!(kind.message(Appointment::label(field)), "Date cannot be in the past");
}

// =============================================================
// Conversion
// =============================================================

#[test]
fn from_draft_parses_date_and_default_status() {
    let appointment = Appointment::from_draft(&draft_on("2025-11-02")).unwrap();
    assert_eq!(appointment.date, date!(2025 - 11 - 02));
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.id, UNASSIGNED_ID);
}

#[test]
fn seed_records_edit_without_changes() {
    let record = seed().remove(0);
    let draft = record.to_draft();
    assert_eq!(draft.date, "2025-10-20");

    let mut rebuilt = Appointment::from_draft(&draft).unwrap();
    rebuilt.set_id(record.id);
    assert_eq!(rebuilt, record);
}

#[test]
fn cells_render_iso_date() {
    let record = seed().remove(1);
    assert_eq!(record.cells(), vec!["Ama Boateng", "Dr. Yaw Owusu", "2025-10-21", "2:00 PM", "Completed"]);
    assert_eq!(record.category_class(), "cell--info");
}
