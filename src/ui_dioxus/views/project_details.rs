use dioxus::prelude::*;
use tracing::debug;

use crate::config::Theme;
use crate::domain::stats::ProjectStats;
use crate::repository::WorkspaceStore;
use crate::ui_dioxus::components::TaskCreateModal;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::{ProjectQuery, ProjectTab, TabBridge};
use crate::ui_dioxus::theme::{card_style, palette};
use crate::ui_dioxus::views::project_tabs::{ProjectAnalytics, ProjectCalendar, ProjectSettings, ProjectTasks};

#[component]
pub fn ProjectDetails(query: ProjectQuery) -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let theme = use_context::<Signal<Theme>>();
    let navigator = use_navigator();

    let mut bridge = use_signal(|| TabBridge::from_query(&query));
    let mut show_create_task = use_signal(|| false);

    // Back/forward swaps the query without remounting this screen.
    use_effect(use_reactive((&query,), move |(query,)| {
        if bridge.peek().active() != ProjectTab::resolve(query.tab.as_deref()) {
            bridge.write().sync_external(&query);
            debug!(tab = %bridge.peek().active(), "Active tab re-synced from route");
        }
    }));

    let Some(project) = store.read().find_project(query.id()).cloned() else {
        debug!(project_id = %query.id(), "Project not found");
        return rsx! { ProjectNotFound {} };
    };

    let pal = palette(theme());
    let stats = ProjectStats::for_project(&project);
    let active = bridge.read().active();
    let (badge_bg, badge_fg) = project.status.badge_colors();

    let select_tab = {
        let query = query.clone();
        move |tab: ProjectTab| {
            let next = bridge.write().select(tab, &query);
            navigator.push(Route::ProjectDetails { query: next });
        }
    };

    let cards = [
        ("Total Tasks", stats.total, pal.text),
        ("Completed", stats.completed, "#059669"),
        ("In Progress", stats.in_progress, "#d97706"),
        ("Team Members", stats.team_members, "#2563eb"),
    ];

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; display: flex; flex-direction: column; gap: 32px; color: {pal.text};",

            // Header
            div {
                style: "border-radius: 16px; padding: 24px;
                       background: linear-gradient(90deg, rgba(59,130,246,0.1), rgba(168,85,247,0.1), rgba(236,72,153,0.1));
                       display: flex; justify-content: space-between; align-items: center; gap: 24px; flex-wrap: wrap;",
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    button {
                        style: "padding: 8px; border-radius: 8px; border: none; background: transparent; cursor: pointer; color: {pal.text};",
                        onclick: move |_| {
                            navigator.push(Route::Projects {});
                        },
                        "←"
                    }
                    div {
                        h1 { style: "margin: 0; font-size: 24px; font-weight: bold;", "{project.name}" }
                        span {
                            style: "display: inline-block; margin-top: 4px; padding: 2px 8px; border-radius: 4px;
                                   font-size: 12px; background: {badge_bg}; color: {badge_fg};",
                            "{project.status.label()}"
                        }
                    }
                }
                button {
                    style: "display: flex; align-items: center; gap: 8px; padding: 10px 20px; border: none; border-radius: 12px;
                           background: linear-gradient(90deg, #3b82f6, #9333ea); color: white; cursor: pointer;",
                    onclick: move |_| show_create_task.set(true),
                    "＋ New Task"
                }
            }

            // Stats
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                for (label, value, color) in cards {
                    div {
                        key: "{label}",
                        style: "{card_style(pal)} display: flex; justify-content: space-between; align-items: center;",
                        div {
                            p { style: "margin: 0; font-size: 14px; color: {pal.muted};", "{label}" }
                            p { style: "margin: 4px 0 0 0; font-size: 24px; font-weight: bold; color: {color};", "{value}" }
                        }
                        span { style: "color: {color}; opacity: 0.7;", "⚡" }
                    }
                }
            }

            // Tabs
            div {
                style: "border-bottom: 1px solid {pal.border}; display: flex; gap: 24px;",
                for tab in ProjectTab::ALL {
                    TabButton {
                        key: "{tab}",
                        tab,
                        active: active == tab,
                        on_select: select_tab.clone(),
                    }
                }
            }

            // Content
            div {
                style: "{card_style(pal)}",
                match active {
                    ProjectTab::Tasks => rsx! { ProjectTasks { project_id: project.id.clone(), tasks: project.tasks.clone() } },
                    ProjectTab::Calendar => rsx! { ProjectCalendar { tasks: project.tasks.clone() } },
                    ProjectTab::Analytics => rsx! { ProjectAnalytics { project: project.clone() } },
                    ProjectTab::Settings => rsx! { ProjectSettings { project: project.clone() } },
                }
            }

            if show_create_task() {
                TaskCreateModal {
                    project_id: project.id.clone(),
                    members: project.members.clone(),
                    on_close: move |_| show_create_task.set(false),
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: ProjectTab, active: bool, on_select: EventHandler<ProjectTab>) -> Element {
    let style = if active {
        "color: #2563eb; font-weight: 600; border-bottom: 2px solid #3b82f6;"
    } else {
        "color: #71717a; border-bottom: 2px solid transparent;"
    };

    rsx! {
        button {
            style: "position: relative; padding: 0 0 12px 0; display: flex; align-items: center; gap: 8px;
                   font-size: 14px; background: none; border: none; cursor: pointer; {style}",
            onclick: move |_| on_select.call(tab),
            span { "{tab.icon()}" }
            "{tab.label()}"
        }
    }
}

#[component]
fn ProjectNotFound() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            style: "height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;",
            h2 { style: "font-size: 36px; font-weight: bold; margin-bottom: 24px;", "Project not found" }
            button {
                style: "padding: 8px 20px; border-radius: 12px; border: none; background: #18181b; color: white; cursor: pointer;",
                onclick: move |_| {
                    navigator.push(Route::Projects {});
                },
                "Back to projects"
            }
        }
    }
}
