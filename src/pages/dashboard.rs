//! Dashboard Page
//!
//! Read-only summary fetched once on mount: counts, projects by status,
//! and short recent/upcoming lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, dashboard::DashboardData, use_api, ApiError};
use crate::format::{format_currency, format_date};
use crate::models::ProjectStatus;
use crate::notify::use_toasts;

#[component]
fn StatCard(#[prop(into)] title: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-title">{title}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let (data, set_data) = signal(None::<DashboardData>);
    let (is_loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api::dashboard::fetch(&api).await {
                Ok(resp) => {
                    let _ = set_data.try_set(Some(resp.data));
                }
                Err(err) => {
                    if !matches!(err, ApiError::Unauthorized) {
                        toasts.error("Failed to load dashboard", err.to_string());
                    }
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let clients_count = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.clients_count).unwrap_or(0).to_string())
    });
    let projects_count = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.projects_count).unwrap_or(0).to_string())
    });
    let active_count = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .and_then(|d| d.projects_by_status.get(&ProjectStatus::InProgress))
                .copied()
                .unwrap_or(0)
                .to_string()
        })
    });
    let completed_count = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .and_then(|d| d.projects_by_status.get(&ProjectStatus::Completed))
                .copied()
                .unwrap_or(0)
                .to_string()
        })
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
            </div>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <p class="list-empty">"Loading dashboard..."</p> }
            >
                <div class="stat-grid">
                    <StatCard title="Clients" value=clients_count />
                    <StatCard title="Projects" value=projects_count />
                    <StatCard title="In Progress" value=active_count />
                    <StatCard title="Completed" value=completed_count />
                </div>

                <div class="dashboard-grid">
                    <section class="dashboard-panel">
                        <h2>"Upcoming Reminders"</h2>
                        <ul class="panel-list">
                            {move || data.with(|d| {
                                d.as_ref()
                                    .map(|d| d.upcoming_reminders.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|r| view! {
                                        <li>
                                            <span class="panel-primary">{r.title.clone()}</span>
                                            <span class="panel-secondary">
                                                {format!("Due {}", format_date(&r.due_date))}
                                            </span>
                                        </li>
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </section>

                    <section class="dashboard-panel">
                        <h2>"Recent Interactions"</h2>
                        <ul class="panel-list">
                            {move || data.with(|d| {
                                d.as_ref()
                                    .map(|d| d.recent_interactions.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|i| view! {
                                        <li>
                                            <span class="panel-primary">{i.kind.label()}</span>
                                            <span class="panel-secondary">{format_date(&i.date)}</span>
                                        </li>
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </section>

                    <section class="dashboard-panel">
                        <h2>"Recent Clients"</h2>
                        <ul class="panel-list">
                            {move || data.with(|d| {
                                d.as_ref()
                                    .map(|d| d.recent_clients.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|c| view! {
                                        <li>
                                            <span class="panel-primary">{c.name.clone()}</span>
                                            <span class="panel-secondary">{c.email.clone()}</span>
                                        </li>
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </section>

                    <section class="dashboard-panel">
                        <h2>"Active Projects"</h2>
                        <ul class="panel-list">
                            {move || data.with(|d| {
                                d.as_ref()
                                    .map(|d| d.active_projects.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|p| view! {
                                        <li>
                                            <span class="panel-primary">{p.title.clone()}</span>
                                            <span class="panel-secondary">
                                                {format_currency(p.budget)}
                                            </span>
                                        </li>
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </section>
                </div>
            </Show>
        </div>
    }
}
