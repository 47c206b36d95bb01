//! Appointment records: schema, validation and seed data.
//!
//! Patient and doctor are free-text names; nothing links them to the other
//! views' records.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use std::fmt;
use std::str::FromStr;

use time::Date;
use time::macros::date;

use super::error::{FieldErrorKind, FieldErrors};
use super::record::{FieldSpec, InputKind, Record, RecordId, SelectOption, UNASSIGNED_ID, require_option, require_text};
use crate::util::clock::{format_iso_date, parse_iso_date};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            "" => Err(FieldErrorKind::RequiredField),
            _ => Err(FieldErrorKind::UnknownOption),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: Date,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Raw appointment form input. New drafts start as `Scheduled`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            doctor_name: String::new(),
            date: String::new(),
            time: String::new(),
            status: AppointmentStatus::default().as_str().to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppointmentField {
    PatientName,
    DoctorName,
    Date,
    Time,
    Status,
}

const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Scheduled", label: "Scheduled" },
    SelectOption { value: "Completed", label: "Completed" },
    SelectOption { value: "Cancelled", label: "Cancelled" },
];

const SCHEMA: &[FieldSpec<AppointmentField>] = &[
    FieldSpec {
        field: AppointmentField::PatientName,
        label: "Patient name",
        input: InputKind::Text,
        placeholder: "Enter patient's name",
    },
    FieldSpec {
        field: AppointmentField::DoctorName,
        label: "Doctor name",
        input: InputKind::Text,
        placeholder: "Enter doctor's name",
    },
    FieldSpec { field: AppointmentField::Date, label: "Date", input: InputKind::Date, placeholder: "" },
    FieldSpec { field: AppointmentField::Time, label: "Time", input: InputKind::Time, placeholder: "" },
    FieldSpec {
        field: AppointmentField::Status,
        label: "Status",
        input: InputKind::Select(STATUS_OPTIONS),
        placeholder: "",
    },
];

impl Record for Appointment {
    type Draft = AppointmentDraft;
    type Field = AppointmentField;

    const NOUN: &'static str = "Appointment";
    const SEARCH_PLACEHOLDER: &'static str = "Search by patient or doctor...";
    const CATEGORY_OPTIONS: &'static [SelectOption] = &[
        SelectOption { value: "", label: "All Status" },
        SelectOption { value: "Scheduled", label: "Scheduled" },
        SelectOption { value: "Completed", label: "Completed" },
        SelectOption { value: "Cancelled", label: "Cancelled" },
    ];
    const COLUMNS: &'static [&'static str] = &["Patient", "Doctor", "Date", "Time", "Status"];
    const CATEGORY_COLUMN: usize = 4;
    const EMPTY_MESSAGE: &'static str = "No appointments found.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_text(&self) -> [&str; 2] {
        [&self.patient_name, &self.doctor_name]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.patient_name.clone(),
            self.doctor_name.clone(),
            format_iso_date(self.date),
            self.time.clone(),
            self.status.to_string(),
        ]
    }

    fn category_class(&self) -> &'static str {
        match self.status {
            AppointmentStatus::Scheduled => "cell--ok",
            AppointmentStatus::Completed => "cell--info",
            AppointmentStatus::Cancelled => "cell--danger",
        }
    }

    fn schema() -> &'static [FieldSpec<AppointmentField>] {
        SCHEMA
    }

    fn to_draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            patient_name: self.patient_name.clone(),
            doctor_name: self.doctor_name.clone(),
            date: format_iso_date(self.date),
            time: self.time.clone(),
            status: self.status.as_str().to_owned(),
        }
    }

    fn draft_value(draft: &AppointmentDraft, field: AppointmentField) -> String {
        match field {
            AppointmentField::PatientName => draft.patient_name.clone(),
            AppointmentField::DoctorName => draft.doctor_name.clone(),
            AppointmentField::Date => draft.date.clone(),
            AppointmentField::Time => draft.time.clone(),
            AppointmentField::Status => draft.status.clone(),
        }
    }

    fn set_draft_value(draft: &mut AppointmentDraft, field: AppointmentField, value: String) {
        match field {
            AppointmentField::PatientName => draft.patient_name = value,
            AppointmentField::DoctorName => draft.doctor_name = value,
            AppointmentField::Date => draft.date = value,
            AppointmentField::Time => draft.time = value,
            AppointmentField::Status => draft.status = value,
        }
    }

    fn check_field(draft: &AppointmentDraft, field: AppointmentField, today: Date) -> Result<(), FieldErrorKind> {
        match field {
            AppointmentField::PatientName => require_text(&draft.patient_name),
            AppointmentField::DoctorName => require_text(&draft.doctor_name),
            AppointmentField::Date => check_date(&draft.date, today),
            AppointmentField::Time => require_text(&draft.time),
            AppointmentField::Status => require_option(&draft.status, STATUS_OPTIONS),
        }
    }

    fn from_draft(draft: &AppointmentDraft) -> Result<Self, FieldErrors<AppointmentField>> {
        let date = parse_date(&draft.date).map_err(|kind| FieldErrors::single(AppointmentField::Date, kind))?;
        let status = draft
            .status
            .parse::<AppointmentStatus>()
            .map_err(|kind| FieldErrors::single(AppointmentField::Status, kind))?;
        Ok(Self {
            id: UNASSIGNED_ID,
            patient_name: draft.patient_name.trim().to_owned(),
            doctor_name: draft.doctor_name.trim().to_owned(),
            date,
            time: draft.time.trim().to_owned(),
            status,
        })
    }
}

fn parse_date(raw: &str) -> Result<Date, FieldErrorKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldErrorKind::RequiredField);
    }
    parse_iso_date(raw).ok_or(FieldErrorKind::InvalidDate)
}

/// Dates are compared at day granularity: today itself is accepted.
fn check_date(raw: &str, today: Date) -> Result<(), FieldErrorKind> {
    let date = parse_date(raw)?;
    if date < today { Err(FieldErrorKind::PastDate) } else { Ok(()) }
}

/// Records a freshly mounted appointments view starts with.
#[must_use]
pub fn seed() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            patient_name: "John Doe".to_owned(),
            doctor_name: "Dr. Kwame Mensah".to_owned(),
            date: date!(2025 - 10 - 20),
            time: "10:00 AM".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 2,
            patient_name: "Ama Boateng".to_owned(),
            doctor_name: "Dr. Yaw Owusu".to_owned(),
            date: date!(2025 - 10 - 21),
            time: "2:00 PM".to_owned(),
            status: AppointmentStatus::Completed,
        },
    ]
}
