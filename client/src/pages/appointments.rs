//! Appointment book page.

use leptos::prelude::*;

use crate::components::crud_view::CrudView;
use crate::state::appointments::{self, Appointment};

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! { <CrudView<Appointment> title="Appointments" seed=appointments::seed()/> }
}
