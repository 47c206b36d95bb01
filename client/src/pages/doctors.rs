//! Doctor roster page.

use leptos::prelude::*;

use crate::components::crud_view::CrudView;
use crate::state::doctors::{self, Doctor};

#[component]
pub fn DoctorsPage() -> impl IntoView {
    view! { <CrudView<Doctor> title="Doctors" seed=doctors::seed()/> }
}
