use chrono::Local;
use dioxus::prelude::*;

use crate::config::{AppConfig, Theme};
use crate::domain::project::Project;
use crate::domain::queries::recent_tasks;
use crate::domain::stats::WorkspaceStats;
use crate::domain::task::Task;
use crate::repository::WorkspaceStore;
use crate::ui_dioxus::components::ProjectCreateModal;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::{ProjectQuery, TaskQuery};
use crate::ui_dioxus::theme::{Palette, card_style, palette};

const OVERVIEW_LIMIT: usize = 4;
const RECENT_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let config = use_context::<AppConfig>();
    let theme = use_context::<Signal<Theme>>();
    let mut show_create = use_signal(|| false);

    let today = Local::now().date_naive();
    let pal = palette(theme());

    // Derived on every render; the store is the only source of truth.
    let projects: Vec<Project> = store.read().projects().to_vec();
    let stats = WorkspaceStats::compute(&projects, &config.user.id, today);
    let workspace_name = store
        .read()
        .current_workspace()
        .map(|w| w.name.clone())
        .unwrap_or_default();

    let cards = [
        ("Total Projects", stats.total_projects, "📁", "#3b82f6"),
        ("Completed Projects", stats.completed_projects, "✅", "#059669"),
        ("My Tasks", stats.my_tasks, "👤", "#7c3aed"),
        ("Overdue", stats.overdue_tasks, "⏰", "#dc2626"),
    ];

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; display: flex; flex-direction: column; gap: 32px; color: {pal.text};",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    h1 { style: "margin: 0; font-size: 28px;", "Welcome back, {config.user.name}" }
                    p { style: "margin: 4px 0 0 0; color: {pal.muted};", "Here's what's happening in {workspace_name}" }
                }
                button {
                    style: "padding: 10px 20px; border: none; border-radius: 12px;
                           background: linear-gradient(90deg, #3b82f6, #9333ea); color: white; cursor: pointer;",
                    onclick: move |_| show_create.set(true),
                    "＋ New"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                for (label, value, icon, color) in cards {
                    div {
                        key: "{label}",
                        style: "{card_style(pal)}",
                        div { style: "font-size: 20px;", "{icon}" }
                        p { style: "margin: 8px 0 0 0; font-size: 14px; color: {pal.muted};", "{label}" }
                        p { style: "margin: 4px 0 0 0; font-size: 28px; font-weight: bold; color: {color};", "{value}" }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                div {
                    style: "display: flex; flex-direction: column; gap: 24px;",
                    ProjectOverview { projects: projects.iter().take(OVERVIEW_LIMIT).cloned().collect::<Vec<_>>(), pal }
                    RecentActivity { projects: projects.clone(), pal }
                }
                TasksSummary { stats, pal }
            }

            if show_create() {
                ProjectCreateModal { on_close: move |_| show_create.set(false) }
            }
        }
    }
}

#[component]
fn ProjectOverview(projects: Vec<Project>, pal: Palette) -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            style: "{card_style(pal)}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "Project Overview" }
                button {
                    style: "font-size: 13px; color: {pal.accent}; background: none; border: none; cursor: pointer;",
                    onclick: move |_| {
                        navigator.push(Route::Projects {});
                    },
                    "View all"
                }
            }
            if projects.is_empty() {
                p { style: "color: {pal.muted}; font-size: 14px;", "No projects yet" }
            }
            for project in projects {
                div {
                    key: "{project.id}",
                    style: "padding: 12px 0; border-bottom: 1px solid {pal.border}; cursor: pointer;",
                    onclick: {
                        let id = project.id.clone();
                        move |_| {
                            navigator.push(Route::ProjectDetails { query: ProjectQuery::for_project(id.clone()) });
                        }
                    },
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 14px;",
                        span { style: "font-weight: 500;", "{project.name}" }
                        span { style: "color: {pal.muted};", "{project.progress}%" }
                    }
                    div {
                        style: "height: 6px; background: {pal.border}; border-radius: 3px; overflow: hidden; margin-top: 6px;",
                        div { style: "height: 100%; background: {pal.accent}; width: {project.progress}%;" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentActivity(projects: Vec<Project>, pal: Palette) -> Element {
    let navigator = use_navigator();
    let recent: Vec<(String, Task)> = recent_tasks(&projects, RECENT_LIMIT)
        .into_iter()
        .map(|(p, t)| (p.id.clone(), t.clone()))
        .collect();

    rsx! {
        div {
            style: "{card_style(pal)}",
            h3 { style: "margin-top: 0;", "Recent Activity" }
            if recent.is_empty() {
                p { style: "color: {pal.muted}; font-size: 14px;", "Nothing here yet" }
            }
            for (project_id, task) in recent {
                div {
                    key: "{task.id}",
                    style: "display: flex; justify-content: space-between; padding: 8px 0; font-size: 14px; cursor: pointer;",
                    onclick: {
                        let query = TaskQuery::new(project_id.clone(), task.id.clone());
                        move |_| {
                            navigator.push(Route::TaskDetails { query: query.clone() });
                        }
                    },
                    span { "{task.title}" }
                    span { style: "color: {pal.muted};", "{task.status.label()} · {task.due_date.format(\"%d %b\")}" }
                }
            }
        }
    }
}

#[component]
fn TasksSummary(stats: WorkspaceStats, pal: Palette) -> Element {
    let rows = [
        ("My Tasks", stats.my_tasks, "#7c3aed"),
        ("Overdue", stats.overdue_tasks, "#dc2626"),
        ("In Progress", stats.in_progress_tasks, "#d97706"),
    ];

    rsx! {
        div {
            style: "{card_style(pal)} align-self: start;",
            h3 { style: "margin-top: 0;", "Tasks Summary" }
            for (label, count, color) in rows {
                div {
                    key: "{label}",
                    style: "display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid {pal.border};",
                    span { "{label}" }
                    span { style: "font-weight: bold; color: {color};", "{count}" }
                }
            }
        }
    }
}
