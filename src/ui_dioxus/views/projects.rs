use dioxus::prelude::*;

use crate::config::Theme;
use crate::domain::project::{Project, ProjectStatus};
use crate::domain::queries::ProjectFilter;
use crate::domain::stats::ProjectStats;
use crate::repository::WorkspaceStore;
use crate::ui_dioxus::components::ProjectCreateModal;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::ProjectQuery;
use crate::ui_dioxus::theme::{Palette, card_style, palette};

#[component]
pub fn Projects() -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let theme = use_context::<Signal<Theme>>();
    let mut filter = use_signal(ProjectFilter::default);
    let mut show_create = use_signal(|| false);

    let pal = palette(theme());
    let visible: Vec<Project> = filter
        .read()
        .apply(store.read().projects())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px; color: {pal.text};",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0; font-size: 28px;", "Projects" }
                button {
                    style: "padding: 10px 20px; border: none; border-radius: 12px;
                           background: linear-gradient(90deg, #3b82f6, #9333ea); color: white; cursor: pointer;",
                    onclick: move |_| show_create.set(true),
                    "＋ New Project"
                }
            }

            div {
                style: "display: flex; gap: 12px;",
                input {
                    r#type: "search",
                    style: "flex: 1; padding: 8px 12px; border: 1px solid {pal.border}; border-radius: 8px;
                           background: {pal.surface}; color: {pal.text};",
                    placeholder: "Search projects...",
                    value: "{filter.read().search}",
                    oninput: move |e| filter.write().search = e.value(),
                }
                select {
                    style: "padding: 8px 12px; border: 1px solid {pal.border}; border-radius: 8px;
                           background: {pal.surface}; color: {pal.text};",
                    onchange: move |e| filter.write().status = ProjectStatus::parse(&e.value()),
                    option { value: "", "All statuses" }
                    for s in ProjectStatus::ALL {
                        option { value: s.as_str(), "{s.label()}" }
                    }
                }
            }

            if visible.is_empty() {
                div {
                    style: "{card_style(pal)} text-align: center; color: {pal.muted};",
                    "No projects match your filters"
                }
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px;",
                    for project in visible {
                        ProjectCard { key: "{project.id}", project: project.clone(), pal }
                    }
                }
            }

            if show_create() {
                ProjectCreateModal { on_close: move |_| show_create.set(false) }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, pal: Palette) -> Element {
    let navigator = use_navigator();
    let stats = ProjectStats::for_project(&project);
    let (badge_bg, badge_fg) = project.status.badge_colors();
    let id = project.id.clone();

    rsx! {
        div {
            style: "{card_style(pal)} cursor: pointer; display: flex; flex-direction: column; gap: 8px;",
            onclick: move |_| {
                navigator.push(Route::ProjectDetails { query: ProjectQuery::for_project(id.clone()) });
            },
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 18px;", "{project.name}" }
                span {
                    style: "padding: 2px 8px; border-radius: 4px; font-size: 12px; background: {badge_bg}; color: {badge_fg};",
                    "{project.status.label()}"
                }
            }
            if !project.description.is_empty() {
                p { style: "margin: 0; font-size: 14px; color: {pal.muted};", "{project.description}" }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 13px; color: {pal.muted};",
                span { "{stats.completed}/{stats.total} tasks done" }
                span { "{stats.team_members} members" }
            }
            div {
                style: "height: 6px; background: {pal.border}; border-radius: 3px; overflow: hidden;",
                div { style: "height: 100%; background: {pal.accent}; width: {project.progress}%;" }
            }
        }
    }
}
