//! Doctor records: schema, validation and seed data.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

use std::fmt;
use std::str::FromStr;

use time::Date;

use super::error::{FieldErrorKind, FieldErrors};
use super::record::{FieldSpec, InputKind, Record, RecordId, SelectOption, UNASSIGNED_ID, require_option, require_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoctorStatus {
    #[default]
    Available,
    OnLeave,
}

impl DoctorStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoctorStatus {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "On Leave" => Ok(Self::OnLeave),
            "" => Err(FieldErrorKind::RequiredField),
            _ => Err(FieldErrorKind::UnknownOption),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
    pub status: DoctorStatus,
}

/// Raw doctor form input. New drafts start as `Available`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorDraft {
    pub name: String,
    pub specialization: String,
    pub status: String,
}

impl Default for DoctorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            specialization: String::new(),
            status: DoctorStatus::default().as_str().to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DoctorField {
    Name,
    Specialization,
    Status,
}

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Available", label: "Available" },
    SelectOption { value: "On Leave", label: "On Leave" },
];

const SCHEMA: &[FieldSpec<DoctorField>] = &[
    FieldSpec { field: DoctorField::Name, label: "Name", input: InputKind::Text, placeholder: "Dr. Full Name" },
    FieldSpec {
        field: DoctorField::Specialization,
        label: "Specialization",
        input: InputKind::Text,
        placeholder: "e.g. Cardiologist",
    },
    FieldSpec { field: DoctorField::Status, label: "Status", input: InputKind::Select(STATUS_OPTIONS), placeholder: "" },
];

impl Record for Doctor {
    type Draft = DoctorDraft;
    type Field = DoctorField;

    const NOUN: &'static str = "Doctor";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name or specialization...";
    const CATEGORY_OPTIONS: &'static [SelectOption] = &[
        SelectOption { value: "", label: "All Status" },
        SelectOption { value: "Available", label: "Available" },
        SelectOption { value: "On Leave", label: "On Leave" },
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Specialization", "Status"];
    const CATEGORY_COLUMN: usize = 2;
    const EMPTY_MESSAGE: &'static str = "No doctors found.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.name, &self.specialization]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.specialization.clone(), self.status.to_string()]
    }

    fn category_class(&self) -> &'static str {
        match self.status {
            DoctorStatus::Available => "cell--ok",
            DoctorStatus::OnLeave => "cell--danger",
        }
    }

    fn schema() -> &'static [FieldSpec<DoctorField>] {
        SCHEMA
    }

    fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            name: self.name.clone(),
            specialization: self.specialization.clone(),
            status: self.status.as_str().to_owned(),
        }
    }

    fn draft_value(draft: &DoctorDraft, field: DoctorField) -> String {
        match field {
            DoctorField::Name => draft.name.clone(),
            DoctorField::Specialization => draft.specialization.clone(),
            DoctorField::Status => draft.status.clone(),
        }
    }

    fn set_draft_value(draft: &mut DoctorDraft, field: DoctorField, value: String) {
        match field {
            DoctorField::Name => draft.name = value,
            DoctorField::Specialization => draft.specialization = value,
            DoctorField::Status => draft.status = value,
        }
    }

    fn check_field(draft: &DoctorDraft, field: DoctorField, _today: Date) -> Result<(), FieldErrorKind> {
        match field {
            DoctorField::Name => require_text(&draft.name),
            DoctorField::Specialization => require_text(&draft.specialization),
            DoctorField::Status => require_option(&draft.status, STATUS_OPTIONS),
        }
    }

    fn from_draft(draft: &DoctorDraft) -> Result<Self, FieldErrors<DoctorField>> {
        let status = draft
            .status
            .parse::<DoctorStatus>()
            .map_err(|kind| FieldErrors::single(DoctorField::Status, kind))?;
        Ok(Self {
            id: UNASSIGNED_ID,
            name: draft.name.trim().to_owned(),
            specialization: draft.specialization.trim().to_owned(),
            status,
        })
    }
}

/// Records a freshly mounted doctors view starts with.
#[must_use]
pub fn seed() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "Dr. Kwame Mensah".to_owned(),
            specialization: "Cardiologist".to_owned(),
            status: DoctorStatus::Available,
        },
        Doctor {
            id: 2,
            name: "Dr. Ama Boateng".to_owned(),
            specialization: "Neurologist".to_owned(),
            status: DoctorStatus::OnLeave,
        },
        Doctor {
            id: 3,
            name: "Dr. Yaw Owusu".to_owned(),
            specialization: "Pediatrician".to_owned(),
            status: DoctorStatus::Available,
        },
    ]
}
