//! Dashboard page with headline statistics, the weekly chart and recent
//! appointments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It shows a loading indicator until the mock
//! snapshot arrives after `DASHBOARD_LOAD_DELAY_MS`. Navigating away before
//! then cancels the pending update.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::line_chart::LineChart;
use crate::components::stat_card::StatCard;
use crate::state::dashboard::{DashboardSnapshot, DashboardState, RecentAppointment};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                crate::state::dashboard::DASHBOARD_LOAD_DELAY_MS,
            ))
            .await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.finish_loading(DashboardSnapshot::mock());
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Dashboard"</h1>
            <Show
                when=move || state.with(|s| !s.is_loading())
                fallback=|| view! { <p class="dashboard__loading">"Loading dashboard data..."</p> }
            >
                {move || state.with(|s| s.snapshot().cloned()).map(|snapshot| view! { <DashboardBody snapshot=snapshot/> })}
            </Show>
        </div>
    }
}

#[component]
fn DashboardBody(snapshot: DashboardSnapshot) -> impl IntoView {
    let stats = snapshot.stats;
    let rows = snapshot.recent.into_iter().map(|row| view! { <RecentRow row=row/> }).collect::<Vec<_>>();

    view! {
        <section class="dashboard__stats">
            <StatCard label="Total Patients" value=stats.total_patients.to_string()/>
            <StatCard label="Doctors" value=stats.total_doctors.to_string()/>
            <StatCard label="Appointments" value=stats.total_appointments.to_string()/>
            <StatCard label="Completed" value=stats.completed_appointments.to_string() accent="ok"/>
            <StatCard label="Completion Rate" value=completion_label(stats.completion_rate_percent()) accent="ok"/>
        </section>
        <section class="dashboard__panel">
            <h2>"Appointments This Week"</h2>
            <LineChart points=snapshot.weekly/>
        </section>
        <section class="dashboard__panel">
            <h2>"Recent Appointments"</h2>
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"Patient"</th>
                        <th>"Doctor"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn RecentRow(row: RecentAppointment) -> impl IntoView {
    let status_class = format!("record-table__cell {}", row.status.css_class());
    view! {
        <tr class="record-table__row">
            <td class="record-table__cell">{row.patient}</td>
            <td class="record-table__cell">{row.doctor}</td>
            <td class="record-table__cell">{row.date}</td>
            <td class=status_class>{row.status.as_str()}</td>
        </tr>
    }
}

fn completion_label(percent: u32) -> String {
    format!("{percent}%")
}
