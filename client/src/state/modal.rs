//! Open/closed state of the editor and delete-confirmation dialogs.
//!
//! The two dialogs are independent; the UI never opens both from one action.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use super::record::RecordId;

/// What the open editor dialog is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(RecordId),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    editor: Option<EditorMode>,
    pending_delete: Option<RecordId>,
}

impl ModalState {
    pub fn open_editor(&mut self, mode: EditorMode) {
        self.editor = Some(mode);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    #[must_use]
    pub fn editor(&self) -> Option<EditorMode> {
        self.editor
    }

    #[must_use]
    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    pub fn open_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn close_delete(&mut self) {
        self.pending_delete = None;
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    #[must_use]
    pub fn is_delete_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Close the delete dialog, handing back the id it was confirming.
    pub fn take_pending_delete(&mut self) -> Option<RecordId> {
        self.pending_delete.take()
    }
}
