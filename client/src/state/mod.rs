//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The patient, doctor and appointment views share one CRUD state machine
//! (`crud`) built from small pieces: an ordered record `store`, a pure
//! `filter`, a draft `form` with field-level validation and the dialog
//! `modal` state. Each entity module only supplies its field schema,
//! validators and table cells through the `record::Record` trait.

pub mod appointments;
pub mod crud;
pub mod dashboard;
pub mod doctors;
pub mod error;
pub mod filter;
pub mod form;
pub mod modal;
pub mod patients;
pub mod record;
pub mod store;
pub mod ui;
