use super::*;

#[test]
fn default_has_both_dialogs_closed() {
    let modals = ModalState::default();
    assert!(!modals.is_editor_open());
    assert!(!modals.is_delete_open());
    assert_eq!(modals.editor(), None);
}

#[test]
fn editor_open_and_close() {
    let mut modals = ModalState::default();
    modals.open_editor(EditorMode::Edit(4));
    assert_eq!(modals.editor(), Some(EditorMode::Edit(4)));

    modals.close_editor();
    assert!(!modals.is_editor_open());
}

#[test]
fn take_pending_delete_closes_dialog() {
    let mut modals = ModalState::default();
    modals.open_delete(7);
    assert_eq!(modals.pending_delete(), Some(7));

    assert_eq!(modals.take_pending_delete(), Some(7));
    assert!(!modals.is_delete_open());
    assert_eq!(modals.take_pending_delete(), None);
}

#[test]
fn close_delete_discards_pending_id() {
    let mut modals = ModalState::default();
    modals.open_delete(1);
    modals.close_delete();
    assert_eq!(modals.pending_delete(), None);
}
