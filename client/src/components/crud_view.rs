//! Complete list view for one record type: header, filter bar, table and
//! both dialogs, all driven by a single `CrudState` owned here.
//!
//! The records live only as long as the view; the filter selection is
//! remembered in `localStorage` so it survives navigation.

use leptos::prelude::*;

use crate::components::delete_dialog::DeleteDialog;
use crate::components::editor_dialog::EditorDialog;
use crate::components::filter_bar::FilterBar;
use crate::components::record_table::RecordTable;
use crate::state::crud::CrudState;
use crate::state::filter::FilterQuery;
use crate::state::record::Record;
use crate::util::storage::{filter_key, load_json, save_json};

#[component]
pub fn CrudView<E: Record>(title: &'static str, seed: Vec<E>) -> impl IntoView {
    let state = RwSignal::new(CrudState::new(seed));

    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let key = filter_key(E::NOUN);
    Effect::new(move |restored: Option<()>| {
        let current = query.get();
        if restored.is_none() {
            if let Some(saved) = load_json::<FilterQuery>(&key) {
                state.update(|s| s.query = saved);
                return;
            }
        }
        save_json(&key, &current);
    });

    let on_add = move |_| state.update(CrudState::open_create);

    view! {
        <div class="crud-view">
            <div class="crud-view__header">
                <h1 class="crud-view__title">{title}</h1>
                <button class="btn btn--primary" on:click=on_add>
                    {format!("+ Add {}", E::NOUN)}
                </button>
            </div>
            <FilterBar<E> state=state/>
            <RecordTable<E> state=state/>
            <Show when=move || state.with(|s| s.modals.is_editor_open())>
                <EditorDialog<E> state=state/>
            </Show>
            <Show when=move || state.with(|s| s.modals.is_delete_open())>
                <DeleteDialog<E> state=state/>
            </Show>
        </div>
    }
}
