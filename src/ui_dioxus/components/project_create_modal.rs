use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::domain::project::{Member, ProjectStatus};
use crate::domain::task::Priority;
use crate::repository::WorkspaceStore;
use crate::services::{NewProjectForm, create_project};
use crate::ui_dioxus::components::task_create_modal::{FIELD_STYLE, LABEL_STYLE};
use crate::ui_dioxus::components::toast::Toasts;

/// Everyone who is a member of at least one project, first occurrence kept.
fn known_members(store: &WorkspaceStore) -> Vec<Member> {
    let mut members: Vec<Member> = Vec::new();
    for m in store.projects().iter().flat_map(|p| p.members.iter()) {
        if !members.iter().any(|known| known.id == m.id) {
            members.push(m.clone());
        }
    }
    members
}

#[component]
pub fn ProjectCreateModal(on_close: EventHandler<()>) -> Element {
    let mut store = use_context::<Signal<WorkspaceStore>>();
    let mut toasts = use_context::<Signal<Toasts>>();

    let mut form = use_signal(|| NewProjectForm::new(Local::now().date_naive()));
    let mut error = use_signal(|| None::<String>);

    let members = known_members(&store.read());

    let handle_save = move |_| {
        let result = create_project(&mut store.write(), &form.read());
        match result {
            Ok(project) => {
                toasts.write().success(format!("Project \"{}\" created", project.name));
                on_close.call(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let start = form.read().start_date.format("%Y-%m-%d").to_string();
    let end = form
        .read()
        .end_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 999;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),

            div {
                style: "background: white; color: #18181b; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 560px; max-height: 90vh; overflow-y: auto;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Create New Project" }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                if let Some(err) = error.read().as_ref() {
                    div {
                        style: "background: #fee; color: #c00; padding: 10px; border-radius: 4px; margin-bottom: 15px;",
                        "{err}"
                    }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Project Name ", span { style: "color: #e00;", "*" } }
                    input {
                        r#type: "text",
                        style: FIELD_STYLE,
                        value: "{form.read().name}",
                        oninput: move |e| form.write().name = e.value(),
                        placeholder: "Enter project name",
                    }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Description" }
                    textarea {
                        style: "{FIELD_STYLE} min-height: 80px; resize: vertical; font-family: inherit;",
                        value: "{form.read().description}",
                        oninput: move |e| form.write().description = e.value(),
                        placeholder: "Describe your project",
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                    div {
                        label { style: LABEL_STYLE, "Status" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(s) = ProjectStatus::parse(&e.value()) {
                                    form.write().status = s;
                                }
                            },
                            for s in ProjectStatus::ALL {
                                option { value: s.as_str(), selected: form.read().status == s, "{s.label()}" }
                            }
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "Priority" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(p) = Priority::parse(&e.value()) {
                                    form.write().priority = p;
                                }
                            },
                            for p in Priority::ALL {
                                option { value: p.as_str(), selected: form.read().priority == p, "{p}" }
                            }
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "Start Date" }
                        input {
                            r#type: "date",
                            style: FIELD_STYLE,
                            value: "{start}",
                            oninput: move |e| {
                                if let Ok(date) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                    form.write().start_date = date;
                                }
                            },
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "End Date" }
                        input {
                            r#type: "date",
                            style: FIELD_STYLE,
                            value: "{end}",
                            oninput: move |e| {
                                form.write().end_date = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d").ok();
                            },
                        }
                    }
                }

                if !members.is_empty() {
                    div {
                        style: "margin-bottom: 16px;",
                        label { style: LABEL_STYLE, "Team Members" }
                        for m in members {
                            label {
                                key: "{m.id}",
                                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; margin: 4px 0;",
                                input {
                                    r#type: "checkbox",
                                    checked: form.read().member_ids.contains(&m.id),
                                    onchange: {
                                        let id = m.id.clone();
                                        move |_| {
                                            let mut form = form.write();
                                            if form.member_ids.contains(&id) {
                                                form.member_ids.retain(|known| known != &id);
                                            } else {
                                                form.member_ids.push(id.clone());
                                            }
                                        }
                                    },
                                }
                                "{m.name} ({m.email})"
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px; margin-top: 24px;",
                    button {
                        style: "padding: 8px 20px; border: 1px solid #ddd; background: white; color: #333;
                               border-radius: 4px; cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        style: "padding: 8px 20px; border: none; background: #7c3aed; color: white;
                               border-radius: 4px; cursor: pointer; font-size: 14px;",
                        onclick: handle_save,
                        "Create Project"
                    }
                }
            }
        }
    }
}
