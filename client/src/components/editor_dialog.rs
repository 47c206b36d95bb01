//! Modal form for creating or editing a record.
//!
//! Inputs are generated from the entity's field schema. Every change
//! re-validates that field, and submit re-validates all of them before
//! anything reaches the store.

#[cfg(test)]
#[path = "editor_dialog_test.rs"]
mod editor_dialog_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::crud::CrudState;
use crate::state::record::{FieldSpec, InputKind, Record};
use crate::util::clock::today;

#[component]
pub fn EditorDialog<E: Record>(state: RwSignal<CrudState<E>>) -> impl IntoView {
    let title = move || state.with(CrudState::editor_title);
    let close = move || state.update(CrudState::close_editor);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let today = today();
        state.update(|s| {
            let _ = s.submit(today);
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let fields = E::schema()
        .iter()
        .map(|spec| view! { <FieldInput<E> spec=*spec state=state/> })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <h2>{title}</h2>
                <form class="form" on:submit=on_submit novalidate=true>
                    {fields}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FieldInput<E: Record>(spec: FieldSpec<E::Field>, state: RwSignal<CrudState<E>>) -> impl IntoView {
    let field = spec.field;
    let value = move || state.with(|s| s.form.value(field));
    let error = move || state.with(|s| s.form.error(field)).map(|kind| kind.message(spec.label));
    let class = move || input_class(error().is_some());

    let on_value = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        let today = today();
        state.update(|s| s.set_field(field, next, today));
    };

    let control = match spec.input {
        InputKind::Select(options) => view! {
            <select class=class prop:value=value on:change=on_value>
                {options
                    .iter()
                    .map(|option| {
                        view! {
                            <option value=option.value selected=move || value() == option.value>
                                {option.label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                class=class
                type=input_type(kind)
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_value
            />
        }
        .into_any(),
    };

    view! {
        <label class="form__field">
            <span class="form__label">{spec.label}</span>
            {control}
            <Show when=move || error().is_some()>
                <p class="form__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

/// HTML `type` attribute for a non-select input.
fn input_type(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Number => "number",
        InputKind::Date => "date",
        InputKind::Time => "time",
        InputKind::Text | InputKind::Select(_) => "text",
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "form__input form__input--invalid" } else { "form__input" }
}
