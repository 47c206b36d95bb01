//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure geometry
//! from page and component logic to improve reuse and testability.

pub mod chart;
pub mod clock;
pub mod storage;
