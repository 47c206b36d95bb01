//! Patient records: schema, validation and seed data.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use std::fmt;
use std::str::FromStr;

use time::Date;

use super::error::{FieldErrorKind, FieldErrors};
use super::record::{FieldSpec, InputKind, Record, RecordId, SelectOption, UNASSIGNED_ID, require_option, require_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "" => Err(FieldErrorKind::RequiredField),
            _ => Err(FieldErrorKind::UnknownOption),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub condition: String,
}

/// Raw patient form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub condition: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatientField {
    Name,
    Age,
    Gender,
    Condition,
}

const GENDER_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select gender" },
    SelectOption { value: "Male", label: "Male" },
    SelectOption { value: "Female", label: "Female" },
];

const SCHEMA: &[FieldSpec<PatientField>] = &[
    FieldSpec { field: PatientField::Name, label: "Name", input: InputKind::Text, placeholder: "Full name" },
    FieldSpec { field: PatientField::Age, label: "Age", input: InputKind::Number, placeholder: "Age" },
    FieldSpec { field: PatientField::Gender, label: "Gender", input: InputKind::Select(GENDER_OPTIONS), placeholder: "" },
    FieldSpec {
        field: PatientField::Condition,
        label: "Condition",
        input: InputKind::Text,
        placeholder: "Medical condition",
    },
];

impl Record for Patient {
    type Draft = PatientDraft;
    type Field = PatientField;

    const NOUN: &'static str = "Patient";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name or condition...";
    const CATEGORY_OPTIONS: &'static [SelectOption] = &[
        SelectOption { value: "", label: "All Genders" },
        SelectOption { value: "Male", label: "Male" },
        SelectOption { value: "Female", label: "Female" },
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Age", "Gender", "Condition"];
    const CATEGORY_COLUMN: usize = 2;
    const EMPTY_MESSAGE: &'static str = "No patients found.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.name, &self.condition]
    }

    fn category(&self) -> &str {
        self.gender.as_str()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.age.to_string(), self.gender.to_string(), self.condition.clone()]
    }

    fn category_class(&self) -> &'static str {
        "cell--neutral"
    }

    fn schema() -> &'static [FieldSpec<PatientField>] {
        SCHEMA
    }

    fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            age: self.age.to_string(),
            gender: self.gender.as_str().to_owned(),
            condition: self.condition.clone(),
        }
    }

    fn draft_value(draft: &PatientDraft, field: PatientField) -> String {
        match field {
            PatientField::Name => draft.name.clone(),
            PatientField::Age => draft.age.clone(),
            PatientField::Gender => draft.gender.clone(),
            PatientField::Condition => draft.condition.clone(),
        }
    }

    fn set_draft_value(draft: &mut PatientDraft, field: PatientField, value: String) {
        match field {
            PatientField::Name => draft.name = value,
            PatientField::Age => draft.age = value,
            PatientField::Gender => draft.gender = value,
            PatientField::Condition => draft.condition = value,
        }
    }

    fn check_field(draft: &PatientDraft, field: PatientField, _today: Date) -> Result<(), FieldErrorKind> {
        match field {
            PatientField::Name => require_text(&draft.name),
            PatientField::Age => parse_age(&draft.age).map(|_| ()),
            PatientField::Gender => require_option(&draft.gender, GENDER_OPTIONS),
            PatientField::Condition => require_text(&draft.condition),
        }
    }

    fn from_draft(draft: &PatientDraft) -> Result<Self, FieldErrors<PatientField>> {
        let age = parse_age(&draft.age).map_err(|kind| FieldErrors::single(PatientField::Age, kind))?;
        let gender = draft
            .gender
            .parse::<Gender>()
            .map_err(|kind| FieldErrors::single(PatientField::Gender, kind))?;
        Ok(Self {
            id: UNASSIGNED_ID,
            name: draft.name.trim().to_owned(),
            age,
            gender,
            condition: draft.condition.trim().to_owned(),
        })
    }
}

fn parse_age(raw: &str) -> Result<u32, FieldErrorKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldErrorKind::RequiredField);
    }
    raw.parse::<u32>().map_err(|_| FieldErrorKind::InvalidNumber)
}

/// Records a freshly mounted patients view starts with.
#[must_use]
pub fn seed() -> Vec<Patient> {
    vec![
        Patient { id: 1, name: "John Doe".to_owned(), age: 30, gender: Gender::Male, condition: "Fever".to_owned() },
        Patient { id: 2, name: "Jane Smith".to_owned(), age: 25, gender: Gender::Female, condition: "Cough".to_owned() },
    ]
}
