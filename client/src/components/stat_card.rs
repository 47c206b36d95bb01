//! Single headline number on the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, #[prop(optional)] accent: &'static str) -> impl IntoView {
    let class = if accent.is_empty() { "stat-card".to_owned() } else { format!("stat-card stat-card--{accent}") };
    view! {
        <div class=class>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}
