//! Dashboard snapshot and its load state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard does not read the other views' stores. It shows a fixed
//! snapshot that becomes available after an artificial delay, standing in
//! for a backend fetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

/// Delay before the mock snapshot is shown.
pub const DASHBOARD_LOAD_DELAY_MS: u64 = 800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_patients: u32,
    pub total_doctors: u32,
    pub total_appointments: u32,
    pub completed_appointments: u32,
}

impl DashboardStats {
    /// Completed share of all appointments, rounded to a whole percent.
    #[must_use]
    pub fn completion_rate_percent(&self) -> u32 {
        if self.total_appointments == 0 {
            return 0;
        }
        let rate = f64::from(self.completed_appointments) * 100.0 / f64::from(self.total_appointments);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = rate.round() as u32;
        rounded
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Completed,
    Pending,
    Cancelled,
}

impl ActivityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for the status cell.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "cell--ok",
            Self::Pending => "cell--warn",
            Self::Cancelled => "cell--danger",
        }
    }
}

/// One row of the recent-activity table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAppointment {
    pub id: u64,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub status: ActivityStatus,
}

/// Appointments booked on one weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub day: String,
    pub appointments: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub recent: Vec<RecentAppointment>,
    pub weekly: Vec<WeeklyPoint>,
}

impl DashboardSnapshot {
    /// The built-in snapshot the dashboard displays.
    #[must_use]
    pub fn mock() -> Self {
        let recent = [
            (1, "Kwame Boateng", "Dr. Ama Nyarko", "2025-10-14", ActivityStatus::Completed),
            (2, "Abena Owusu", "Dr. Kwame Mensah", "2025-10-15", ActivityStatus::Pending),
            (3, "Yaw Asante", "Dr. Efua Adjei", "2025-10-16", ActivityStatus::Cancelled),
        ]
        .into_iter()
        .map(|(id, patient, doctor, date, status)| RecentAppointment {
            id,
            patient: patient.to_owned(),
            doctor: doctor.to_owned(),
            date: date.to_owned(),
            status,
        })
        .collect();

        let weekly = [("Mon", 8), ("Tue", 10), ("Wed", 6), ("Thu", 12), ("Fri", 9), ("Sat", 4), ("Sun", 5)]
            .into_iter()
            .map(|(day, appointments)| WeeklyPoint { day: day.to_owned(), appointments })
            .collect();

        Self {
            stats: DashboardStats {
                total_patients: 128,
                total_doctors: 12,
                total_appointments: 57,
                completed_appointments: 44,
            },
            recent,
            weekly,
        }
    }
}

/// Dashboard load progress. There is no error state: the mock source cannot fail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(DashboardSnapshot),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub load: LoadState,
}

impl DashboardState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Move to `Loaded`. Returns `false` if a snapshot was already shown.
    pub fn finish_loading(&mut self, snapshot: DashboardSnapshot) -> bool {
        if !self.is_loading() {
            return false;
        }
        log::debug!("dashboard snapshot loaded");
        self.load = LoadState::Loaded(snapshot);
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match &self.load {
            LoadState::Loading => None,
            LoadState::Loaded(snapshot) => Some(snapshot),
        }
    }
}
