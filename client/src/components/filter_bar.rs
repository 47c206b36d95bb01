//! Search box and category select above a record table.

use leptos::prelude::*;

use crate::state::crud::CrudState;
use crate::state::record::Record;

#[component]
pub fn FilterBar<E: Record>(state: RwSignal<CrudState<E>>) -> impl IntoView {
    let search = move || state.with(|s| s.query.search.clone());
    let category = move || state.with(|s| s.query.category.clone());

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="text"
                placeholder=E::SEARCH_PLACEHOLDER
                prop:value=search
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_search(value));
                }
            />
            <select
                class="filter-bar__category"
                prop:value=category
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_category(value));
                }
            >
                {E::CATEGORY_OPTIONS
                    .iter()
                    .map(|option| {
                        view! {
                            <option value=option.value selected=move || category() == option.value>
                                {option.label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
