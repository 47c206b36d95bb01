//! Patient registry page.

use leptos::prelude::*;

use crate::components::crud_view::CrudView;
use crate::state::patients::{self, Patient};

#[component]
pub fn PatientsPage() -> impl IntoView {
    view! { <CrudView<Patient> title="Patients" seed=patients::seed()/> }
}
