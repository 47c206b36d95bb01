//! Confirmation dialog shown before a record is removed.

use leptos::prelude::*;

use crate::state::crud::CrudState;
use crate::state::record::Record;

#[component]
pub fn DeleteDialog<E: Record>(state: RwSignal<CrudState<E>>) -> impl IntoView {
    let cancel = move || state.update(CrudState::cancel_delete);
    let on_confirm = move |_| {
        state.update(|s| {
            s.confirm_delete();
        });
    };
    let target = move || {
        state.with(|s| {
            s.modals
                .pending_delete()
                .and_then(|id| s.store.get(id))
                .map(|record| record.search_text()[0].to_owned())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--narrow" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Delete {}", E::NOUN)}</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete "
                    <strong>{target}</strong>
                    "? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=on_confirm>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
