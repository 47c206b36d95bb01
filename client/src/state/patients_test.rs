use time::macros::date;

use super::*;

const TODAY: Date = date!(2025 - 10 - 18);

fn draft(name: &str, age: &str, gender: &str, condition: &str) -> PatientDraft {
    PatientDraft {
        name: name.to_owned(),
        age: age.to_owned(),
        gender: gender.to_owned(),
        condition: condition.to_owned(),
    }
}

#[test]
fn gender_parses_listed_values_only() {
    assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
    assert_eq!("".parse::<Gender>(), Err(FieldErrorKind::RequiredField));
    assert_eq!("female".parse::<Gender>(), Err(FieldErrorKind::UnknownOption));
}

#[test]
fn age_must_be_a_whole_number() {
    let bad = draft("Alice", "forty", "Female", "Flu");
    assert_eq!(Patient::check_field(&bad, PatientField::Age, TODAY), Err(FieldErrorKind::InvalidNumber));

    let negative = draft("Alice", "-1", "Female", "Flu");
    assert_eq!(Patient::check_field(&negative, PatientField::Age, TODAY), Err(FieldErrorKind::InvalidNumber));

    let blank = draft("Alice", " ", "Female", "Flu");
    assert_eq!(Patient::check_field(&blank, PatientField::Age, TODAY), Err(FieldErrorKind::RequiredField));
}

#[test]
fn whitespace_name_is_required() {
    let errors = Patient::validate(&draft("   ", "40", "Female", "Flu"), TODAY).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(PatientField::Name), Some(FieldErrorKind::RequiredField));
}

#[test]
fn from_draft_round_trips_seed_record() {
    let record = seed().remove(1);
    let mut rebuilt = Patient::from_draft(&record.to_draft()).unwrap();
    assert_eq!(rebuilt.id, UNASSIGNED_ID);
    rebuilt.set_id(record.id);
    assert_eq!(rebuilt, record);
}

#[test]
fn cells_follow_columns() {
    let record = seed().remove(0);
    assert_eq!(record.cells(), vec!["John Doe", "30", "Male", "Fever"]);
    assert_eq!(record.cells().len(), Patient::COLUMNS.len());
    assert_eq!(Patient::COLUMNS[Patient::CATEGORY_COLUMN], "Gender");
}

#[test]
fn label_comes_from_schema() {
    assert_eq!(Patient::label(PatientField::Condition), "Condition");
}

#[test]
fn seed_ids_are_unique() {
    let ids = seed().iter().map(|p| p.id()).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2]);
}
