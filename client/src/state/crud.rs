//! Generic list + editor + delete-confirmation state for one record type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each CRUD page owns one `RwSignal<CrudState<E>>`. Components read the
//! visible rows and dialog state from it and route every user action through
//! the methods below, so the transitions stay testable without a browser.
//!
//! Closing a dialog always resets its transient state (draft and errors for
//! the editor, pending id for delete) so nothing leaks into the next open.

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use time::Date;

use super::error::SubmitError;
use super::filter::{FilterQuery, filter};
use super::form::FormState;
use super::modal::{EditorMode, ModalState};
use super::record::{Record, RecordId};
use super::store::EntityStore;

#[derive(Clone, Debug, PartialEq)]
pub struct CrudState<E: Record> {
    pub store: EntityStore<E>,
    pub query: FilterQuery,
    pub form: FormState<E>,
    pub modals: ModalState,
}

impl<E: Record> CrudState<E> {
    #[must_use]
    pub fn new(seed: Vec<E>) -> Self {
        Self {
            store: EntityStore::with_seed(seed),
            query: FilterQuery::default(),
            form: FormState::default(),
            modals: ModalState::default(),
        }
    }

    /// Rows to render for the current query, in store order.
    #[must_use]
    pub fn visible(&self) -> Vec<E> {
        filter(self.store.list(), &self.query.search, &self.query.category)
    }

    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
    }

    pub fn set_category(&mut self, category: String) {
        self.query.category = category;
    }

    pub fn open_create(&mut self) {
        self.form.open_for_create();
        self.modals.open_editor(EditorMode::Create);
    }

    /// Open the editor on a copy of the record with `id`.
    /// Returns `false` and leaves the dialogs untouched when it is absent.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let Some(record) = self.store.get(id) else {
            return false;
        };
        self.form.open_for_edit(record);
        self.modals.open_editor(EditorMode::Edit(id));
        true
    }

    pub fn set_field(&mut self, field: E::Field, value: String, today: Date) {
        self.form.set_field(field, value, today);
    }

    /// Validate the draft and commit it: add in create mode, replace in edit
    /// mode. Closes the editor on success and returns the record's id.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotEditing`] when no editor is open and
    /// [`SubmitError::Invalid`] when any field fails; the store is untouched
    /// in both cases.
    pub fn submit(&mut self, today: Date) -> Result<RecordId, SubmitError<E::Field>> {
        let Some(mode) = self.modals.editor() else {
            return Err(SubmitError::NotEditing);
        };
        let record = self.form.validate(today).inspect_err(|errors| {
            log::warn!("{} form rejected: {errors}", E::NOUN);
        })?;
        let id = match mode {
            EditorMode::Create => self.store.add(record).id(),
            EditorMode::Edit(id) => {
                if self.store.update(id, record).is_none() {
                    log::warn!("{} {id} vanished before its edit was saved", E::NOUN);
                }
                id
            }
        };
        self.close_editor();
        Ok(id)
    }

    pub fn close_editor(&mut self) {
        self.modals.close_editor();
        self.form.open_for_create();
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.modals.open_delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.modals.close_delete();
    }

    /// Remove the pending record and close the dialog.
    pub fn confirm_delete(&mut self) -> Option<E> {
        let id = self.modals.take_pending_delete()?;
        self.store.remove(id)
    }

    /// Title for the editor dialog, e.g. `"Edit Doctor"`.
    #[must_use]
    pub fn editor_title(&self) -> String {
        match self.modals.editor() {
            Some(EditorMode::Edit(_)) => format!("Edit {}", E::NOUN),
            _ => format!("Add {}", E::NOUN),
        }
    }
}
