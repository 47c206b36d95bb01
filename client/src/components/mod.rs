//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sidebar` and `navbar` form the fixed frame around every route. The
//! `crud_*`/`record_*` components are generic over `state::record::Record`
//! and render any entity's list, filter bar and dialogs from one
//! `RwSignal<CrudState<E>>` owned by the page.

pub mod crud_view;
pub mod delete_dialog;
pub mod editor_dialog;
pub mod filter_bar;
pub mod line_chart;
pub mod navbar;
pub mod record_table;
pub mod sidebar;
pub mod stat_card;
