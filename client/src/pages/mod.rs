//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Leaving a route drops its state.

pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod patients;
