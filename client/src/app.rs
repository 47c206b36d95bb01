//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::{
    appointments::AppointmentsPage, dashboard::DashboardPage, doctors::DoctorsPage, patients::PatientsPage,
};
use crate::state::ui::{APP_TITLE, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI chrome context and lays out the fixed sidebar + header
/// frame around the routed page. Each page owns its own record state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Sync the stored theme once the browser is available.
    Effect::new(move || {
        let dark = crate::util::storage::read_dark_mode();
        crate::util::storage::apply_dark_mode(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hms.css"/>
        <Title text=APP_TITLE/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <Navbar/>
                    <main class="layout__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("patients") view=PatientsPage/>
                            <Route path=StaticSegment("doctors") view=DoctorsPage/>
                            <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
