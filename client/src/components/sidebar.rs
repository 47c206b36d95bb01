//! Fixed left navigation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::{NAV_ITEMS, is_active_path};

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__brand">"HMS"</h2>
            <nav>
                <ul class="sidebar__list">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            let class = move || {
                                if is_active_path(path, &pathname.get()) {
                                    "sidebar__link sidebar__link--active"
                                } else {
                                    "sidebar__link"
                                }
                            };
                            view! {
                                <li>
                                    <A href=path attr:class=class>
                                        {item.label}
                                    </A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </aside>
    }
}
