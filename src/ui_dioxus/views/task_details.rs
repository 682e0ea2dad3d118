use dioxus::prelude::*;
use tracing::debug;

use crate::config::Theme;
use crate::domain::comment::Comment;
use crate::domain::project::Project;
use crate::domain::task::{Task, TaskStatus};
use crate::repository::WorkspaceStore;
use crate::services::{CancelHandle, CommentService, TaskDiscussion};
use crate::ui_dioxus::components::toast::Toasts;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::{ProjectQuery, TaskQuery};
use crate::ui_dioxus::theme::{card_style, palette};

const DATE_FORMAT: &str = "%d %b %Y";

#[component]
pub fn TaskDetails(query: TaskQuery) -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let theme = use_context::<Signal<Theme>>();
    let service = use_context::<CommentService>();
    let mut toasts = use_context::<Signal<Toasts>>();

    let mut discussion = use_signal(TaskDiscussion::default);
    let mut cancel = use_signal(CancelHandle::new);
    let mut in_flight = use_signal(|| 0usize);

    if store.read().is_loading() {
        return rsx! {
            div {
                style: "height: 60vh; display: flex; align-items: center; justify-content: center; color: #71717a;",
                "Loading task..."
            }
        };
    }

    let project_id = query.project_id.clone().unwrap_or_default();
    let task_id = query.task_id.clone().unwrap_or_default();
    let found = store
        .read()
        .task(&project_id, &task_id)
        .map(|(p, t)| (p.clone(), t.clone()));
    let (project, task) = match found {
        Ok(pair) => pair,
        Err(err) => {
            debug!(error = %err, "Task lookup failed");
            return rsx! { MissingTask {} };
        }
    };

    let pal = palette(theme());
    let user_id = service.author().id.clone();

    let post_comment = move |_| {
        let Some(content) = discussion.read().pending_content() else {
            return;
        };
        let service = service.clone();
        let task_id = task_id.clone();
        let token = cancel.read().token();

        toasts.write().loading("Adding comment...");
        in_flight += 1;
        spawn(async move {
            let result = service.post(&task_id, content, token).await;
            toasts.write().dismiss_all();
            match result {
                Ok(comment) => {
                    discussion.write().apply_posted(comment);
                    toasts.write().success("Comment added!");
                }
                Err(err) => {
                    toasts.write().error(format!("Failed to add comment: {err}"));
                }
            }
            in_flight -= 1;
        });
    };

    let cancel_posts = move |_| {
        cancel.read().cancel();
        cancel.set(CancelHandle::new());
    };

    let comments = discussion.read().comments.clone();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr; gap: 24px; color: {pal.text};",

            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                TaskSummary { project_id: project.id.clone(), task: task.clone() }

                // Comments
                div {
                    style: "{card_style(pal)}",
                    h3 { style: "margin-top: 0;", "Comments ({comments.len()})" }
                    if comments.is_empty() {
                        p { style: "color: {pal.muted}; font-size: 14px;", "No comments yet" }
                    }
                    for comment in comments {
                        CommentRow { key: "{comment.id}", own: comment.is_by(&user_id), comment: comment.clone() }
                    }
                    textarea {
                        style: "width: 100%; min-height: 80px; margin-top: 12px; padding: 8px 12px; border: 1px solid {pal.border};
                               border-radius: 8px; font-family: inherit; font-size: 14px; box-sizing: border-box;",
                        placeholder: "Add a comment...",
                        value: "{discussion.read().draft}",
                        oninput: move |e| discussion.write().set_draft(e.value()),
                    }
                    div {
                        style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px;",
                        if in_flight() > 0 {
                            button {
                                style: "padding: 8px 16px; border: 1px solid #ddd; background: white; color: #333; border-radius: 8px; cursor: pointer;",
                                onclick: cancel_posts,
                                "Cancel"
                            }
                        }
                        button {
                            style: "padding: 8px 16px; border: none; background: #3b82f6; color: white; border-radius: 8px; cursor: pointer;",
                            onclick: post_comment,
                            "Comment"
                        }
                    }
                }
            }

            ProjectInfo { project }
        }
    }
}

#[component]
fn TaskSummary(project_id: String, task: Task) -> Element {
    let navigator = use_navigator();
    let status_color = match task.status {
        TaskStatus::Done => "#059669",
        TaskStatus::InProgress => "#d97706",
        TaskStatus::Blocked => "#dc2626",
        TaskStatus::Review => "#7c3aed",
        TaskStatus::Todo => "#71717a",
    };

    rsx! {
        div {
            style: "border-radius: 16px; padding: 24px; background: linear-gradient(90deg, rgba(59,130,246,0.1), rgba(168,85,247,0.1));",
            button {
                style: "padding: 4px 0; border: none; background: transparent; cursor: pointer; color: inherit; font-size: 13px;",
                onclick: move |_| {
                    navigator.push(Route::ProjectDetails { query: ProjectQuery::for_project(project_id.clone()) });
                },
                "← Back to project"
            }
            h1 { style: "margin: 8px 0; font-size: 24px;", "{task.title}" }
            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; font-size: 12px;",
                span { style: "padding: 2px 8px; border-radius: 4px; color: white; background: {status_color};", "{task.status.label()}" }
                span { style: "padding: 2px 8px; border-radius: 4px; background: rgba(0,0,0,0.06);", "{task.task_type}" }
                span { style: "padding: 2px 8px; border-radius: 4px; background: rgba(0,0,0,0.06);", "{task.priority}" }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 16px; font-size: 14px;",
                div { span { style: "color: #71717a;", "Assignee: " } "{task.assignee_name()}" }
                div { span { style: "color: #71717a;", "Due: " } "{task.due_date.format(DATE_FORMAT)}" }
            }
            if let Some(description) = task.description.as_ref() {
                p { style: "margin: 16px 0 0 0; font-size: 14px; white-space: pre-wrap;", "{description}" }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, own: bool) -> Element {
    let initial = comment.author.name.chars().next().unwrap_or('?');
    rsx! {
        div {
            style: "display: flex; gap: 12px; padding: 10px 0; border-bottom: 1px solid rgba(0,0,0,0.06);",
            div {
                style: "width: 32px; height: 32px; border-radius: 50%; background: #3b82f6; color: white;
                       display: flex; align-items: center; justify-content: center; flex-shrink: 0;",
                "{initial}"
            }
            div {
                div {
                    style: "font-size: 13px;",
                    span { style: "font-weight: 600;", "{comment.author.name}" }
                    if own {
                        span { style: "color: #71717a;", " (you)" }
                    }
                    span { style: "color: #71717a; margin-left: 8px;", "{comment.display_time()}" }
                }
                p { style: "margin: 4px 0 0 0; font-size: 14px; white-space: pre-wrap;", "{comment.content}" }
            }
        }
    }
}

#[component]
fn ProjectInfo(project: Project) -> Element {
    let end = project
        .end_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "Not set".to_string());

    rsx! {
        div {
            style: "border-radius: 12px; padding: 20px; border: 1px solid rgba(0,0,0,0.08); align-self: start; font-size: 14px;",
            h3 { style: "margin-top: 0;", "{project.name}" }
            InfoRow { label: "Status", value: project.status.label() }
            InfoRow { label: "Priority", value: project.priority.to_string() }
            InfoRow { label: "Start date", value: project.start_date.format(DATE_FORMAT).to_string() }
            InfoRow { label: "End date", value: end }
            div {
                style: "margin-top: 12px;",
                div { style: "display: flex; justify-content: space-between;", span { "Progress" } span { "{project.progress}%" } }
                div {
                    style: "height: 8px; background: #f0f0f0; border-radius: 4px; overflow: hidden; margin-top: 4px;",
                    div { style: "height: 100%; background: #3b82f6; width: {project.progress}%;" }
                }
            }
        }
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; padding: 6px 0;",
            span { style: "color: #71717a;", "{label}" }
            span { "{value}" }
        }
    }
}

#[component]
fn MissingTask() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            style: "height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center;",
            h2 { style: "font-size: 28px; margin-bottom: 24px;", "Task not found or deleted." }
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
