//! Local UI chrome state shared through context.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the per-view record state so the frame
//! (sidebar, header) can evolve independently of the pages.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar entries in display order; one per route.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/" },
    NavItem { label: "Patients", path: "/patients" },
    NavItem { label: "Doctors", path: "/doctors" },
    NavItem { label: "Appointments", path: "/appointments" },
];

/// Application title shown in the header.
pub const APP_TITLE: &str = "Hospital Management System";

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

/// Whether the sidebar entry for `item_path` should render as active.
pub fn is_active_path(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        current == "/" || current.is_empty()
    } else {
        current == item_path || current.starts_with(&format!("{item_path}/"))
    }
}
