//! The four sub-views of the project detail screen.

use chrono::Local;
use dioxus::prelude::*;

use crate::domain::project::{Project, ProjectStatus};
use crate::domain::queries::{TaskFilter, overdue_tasks, tasks_by_due_date};
use crate::domain::stats::TaskBreakdown;
use crate::domain::task::{Priority, Task, TaskStatus, TaskType};
use crate::repository::{ProjectDetails, WorkspaceStore};
use crate::ui_dioxus::components::task_create_modal::{FIELD_STYLE, LABEL_STYLE};
use crate::ui_dioxus::components::toast::Toasts;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::TaskQuery;

#[component]
pub fn ProjectTasks(project_id: String, tasks: Vec<Task>) -> Element {
    let mut filter = use_signal(TaskFilter::default);
    let navigator = use_navigator();

    let visible: Vec<Task> = filter.read().apply(&tasks).into_iter().cloned().collect();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 12px; margin-bottom: 16px;",
                select {
                    style: "padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px;",
                    onchange: move |e| filter.write().status = TaskStatus::parse(&e.value()),
                    option { value: "", "All statuses" }
                    for s in TaskStatus::ALL {
                        option { value: s.as_str(), "{s.label()}" }
                    }
                }
                select {
                    style: "padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px;",
                    onchange: move |e| filter.write().task_type = TaskType::parse(&e.value()),
                    option { value: "", "All types" }
                    for t in TaskType::ALL {
                        option { value: t.as_str(), "{t}" }
                    }
                }
            }

            if visible.is_empty() {
                p { style: "color: #71717a; font-size: 14px;", "No tasks found" }
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            style: "text-align: left; color: #71717a;",
                            th { style: "padding: 8px;", "Title" }
                            th { style: "padding: 8px;", "Type" }
                            th { style: "padding: 8px;", "Priority" }
                            th { style: "padding: 8px;", "Status" }
                            th { style: "padding: 8px;", "Assignee" }
                            th { style: "padding: 8px;", "Due Date" }
                        }
                    }
                    tbody {
                        for task in visible {
                            tr {
                                key: "{task.id}",
                                style: "border-top: 1px solid #e4e4e7; cursor: pointer;",
                                onclick: {
                                    let query = TaskQuery::new(project_id.clone(), task.id.clone());
                                    move |_| {
                                        navigator.push(Route::TaskDetails { query: query.clone() });
                                    }
                                },
                                td { style: "padding: 8px;", "{task.title}" }
                                td { style: "padding: 8px;", "{task.task_type}" }
                                td { style: "padding: 8px;", "{task.priority}" }
                                td { style: "padding: 8px;", "{task.status.label()}" }
                                td { style: "padding: 8px;", "{task.assignee_name()}" }
                                td { style: "padding: 8px;", "{task.due_date.format(\"%d %b %Y\")}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCalendar(tasks: Vec<Task>) -> Element {
    let today = Local::now().date_naive();
    let days: Vec<(String, Vec<Task>)> = tasks_by_due_date(&tasks)
        .into_iter()
        .map(|(day, tasks)| {
            (
                day.format("%a, %d %b %Y").to_string(),
                tasks.into_iter().cloned().collect(),
            )
        })
        .collect();
    let overdue: Vec<Task> = overdue_tasks(&tasks, today).into_iter().cloned().collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
            div {
                h3 { style: "margin-top: 0;", "Upcoming" }
                if days.is_empty() {
                    p { style: "color: #71717a; font-size: 14px;", "Nothing scheduled" }
                }
                for (label, day_tasks) in days {
                    div {
                        key: "{label}",
                        style: "margin-bottom: 16px;",
                        div { style: "font-weight: 600; font-size: 13px; color: #52525b; margin-bottom: 6px;", "{label}" }
                        for task in day_tasks {
                            div {
                                key: "{task.id}",
                                style: "padding: 8px 12px; border-radius: 8px; background: rgba(59,130,246,0.08); margin-bottom: 4px; font-size: 14px;",
                                "{task.title} · {task.status.label()}"
                            }
                        }
                    }
                }
            }
            div {
                h3 { style: "margin-top: 0; color: #dc2626;", "Overdue ({overdue.len()})" }
                for task in overdue {
                    div {
                        key: "{task.id}",
                        style: "padding: 8px 12px; border-radius: 8px; background: rgba(239,68,68,0.08); margin-bottom: 4px; font-size: 14px;",
                        div { "{task.title}" }
                        div { style: "font-size: 12px; color: #71717a;", "Due {task.due_date.format(\"%d %b %Y\")}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectAnalytics(project: Project) -> Element {
    let breakdown = TaskBreakdown::compute(&project.tasks);

    let row = |label: String, count: usize| BreakdownRow { label, count, share: breakdown.share(count) };
    let status_rows: Vec<BreakdownRow> = TaskStatus::ALL
        .iter()
        .map(|s| row(s.label().to_string(), breakdown.status_count(*s)))
        .collect();
    let type_rows: Vec<BreakdownRow> = TaskType::ALL
        .iter()
        .map(|t| row(t.to_string(), breakdown.type_count(*t)))
        .collect();
    let priority_rows: Vec<BreakdownRow> = Priority::ALL
        .iter()
        .map(|p| row(p.to_string(), breakdown.priority_count(*p)))
        .collect();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 24px; margin-bottom: 24px;",
                div {
                    div { style: "font-size: 14px; color: #71717a;", "Completion rate" }
                    div { style: "font-size: 28px; font-weight: bold;", "{breakdown.completion_rate()}%" }
                }
                div {
                    div { style: "font-size: 14px; color: #71717a;", "Project progress" }
                    div { style: "font-size: 28px; font-weight: bold;", "{project.progress}%" }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px;",
                BreakdownCard { title: "By Status", rows: status_rows, color: "#3b82f6" }
                BreakdownCard { title: "By Type", rows: type_rows, color: "#a855f7" }
                BreakdownCard { title: "By Priority", rows: priority_rows, color: "#f59e0b" }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BreakdownRow {
    label: String,
    count: usize,
    share: u32,
}

#[component]
fn BreakdownCard(title: String, rows: Vec<BreakdownRow>, color: String) -> Element {
    rsx! {
        div {
            h3 { style: "margin-top: 0; font-size: 16px;", "{title}" }
            for row in rows {
                div {
                    key: "{row.label}",
                    style: "margin-bottom: 12px;",
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 4px;",
                        span { "{row.label}" }
                        span { style: "color: #71717a;", "{row.count}" }
                    }
                    div {
                        style: "height: 8px; background: #f0f0f0; border-radius: 4px; overflow: hidden;",
                        div { style: "height: 100%; background: {color}; width: {row.share}%;" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectSettings(project: Project) -> Element {
    let mut store = use_context::<Signal<WorkspaceStore>>();
    let mut toasts = use_context::<Signal<Toasts>>();
    let mut details = use_signal(|| ProjectDetails::from_project(&project));
    let mut error = use_signal(|| None::<String>);

    let project_id = project.id.clone();
    let save = move |_| {
        let result = store.write().update_project(&project_id, details.read().clone());
        match result {
            Ok(()) => {
                error.set(None);
                toasts.write().success("Project updated");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 32px;",
            div {
                h3 { style: "margin-top: 0;", "Project Settings" }
                if let Some(err) = error.read().as_ref() {
                    div {
                        style: "background: #fee; color: #c00; padding: 10px; border-radius: 4px; margin-bottom: 15px;",
                        "{err}"
                    }
                }
                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Project Name" }
                    input {
                        r#type: "text",
                        style: FIELD_STYLE,
                        value: "{details.read().name}",
                        oninput: move |e| details.write().name = e.value(),
                    }
                }
                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Description" }
                    textarea {
                        style: "{FIELD_STYLE} min-height: 80px; font-family: inherit;",
                        value: "{details.read().description}",
                        oninput: move |e| details.write().description = e.value(),
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                    div {
                        label { style: LABEL_STYLE, "Status" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(s) = ProjectStatus::parse(&e.value()) {
                                    details.write().status = s;
                                }
                            },
                            for s in ProjectStatus::ALL {
                                option { value: s.as_str(), selected: details.read().status == s, "{s.label()}" }
                            }
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "Priority" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(p) = Priority::parse(&e.value()) {
                                    details.write().priority = p;
                                }
                            },
                            for p in Priority::ALL {
                                option { value: p.as_str(), selected: details.read().priority == p, "{p}" }
                            }
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "Progress: {details.read().progress}%" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            step: "5",
                            style: "width: 100%;",
                            value: "{details.read().progress}",
                            oninput: move |e| {
                                if let Ok(progress) = e.value().parse::<i32>() {
                                    details.write().progress = progress;
                                }
                            },
                        }
                    }
                }
                button {
                    style: "padding: 8px 20px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                    onclick: save,
                    "Save Changes"
                }
            }
            div {
                h3 { style: "margin-top: 0;", "Team Members ({project.members.len()})" }
                for m in project.members.iter() {
                    div {
                        key: "{m.id}",
                        style: "display: flex; flex-direction: column; padding: 8px 0; border-bottom: 1px solid #e4e4e7; font-size: 14px;",
                        span { style: "font-weight: 500;", "{m.name}" }
                        span { style: "color: #71717a; font-size: 12px;", "{m.email}" }
                    }
                }
            }
        }
    }
}
