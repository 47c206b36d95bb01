//! Header bar with the application title and theme toggle.

use leptos::prelude::*;

use crate::state::ui::{APP_TITLE, UiState};

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = crate::util::storage::toggle_dark_mode(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="navbar">
            <h1 class="navbar__title">{APP_TITLE}</h1>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            // No session exists; the button is layout chrome only.
            <button class="btn btn--primary navbar__logout" type="button">
                "Logout"
            </button>
        </header>
    }
}
