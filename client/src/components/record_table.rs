//! Table of the currently visible records with per-row actions.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::crud::CrudState;
use crate::state::record::Record;

#[component]
pub fn RecordTable<E: Record>(state: RwSignal<CrudState<E>>) -> impl IntoView {
    let rows = move || state.with(|s| s.visible());
    let span = (E::COLUMNS.len() + 1).to_string();

    view! {
        <div class="table-card">
            <table class="record-table">
                <thead>
                    <tr>
                        {E::COLUMNS.iter().map(|heading| view! { <th>{*heading}</th> }).collect::<Vec<_>>()}
                        <th class="record-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td class="record-table__empty" colspan=span.clone()>
                                        {E::EMPTY_MESSAGE}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|record| view! { <RecordRow<E> record=record state=state/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RecordRow<E: Record>(record: E, state: RwSignal<CrudState<E>>) -> impl IntoView {
    let id = record.id();
    let category_class = record.category_class();
    let cells = record
        .cells()
        .into_iter()
        .enumerate()
        .map(|(index, value)| view! { <td class=cell_class(index, E::CATEGORY_COLUMN, category_class)>{value}</td> })
        .collect::<Vec<_>>();

    view! {
        <tr class="record-table__row">
            {cells}
            <td class="record-table__actions">
                <button
                    class="btn btn--small"
                    on:click=move |_| {
                        state.update(|s| {
                            s.open_edit(id);
                        });
                    }
                >
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| state.update(|s| s.request_delete(id))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Class for a body cell; the category column gets its status color.
fn cell_class(index: usize, category_column: usize, category_class: &'static str) -> String {
    if index == category_column {
        format!("record-table__cell {category_class}")
    } else {
        "record-table__cell".to_owned()
    }
}
