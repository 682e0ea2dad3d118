use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::domain::project::Member;
use crate::domain::task::{Priority, TaskStatus, TaskType};
use crate::repository::WorkspaceStore;
use crate::services::{NewTaskForm, create_task};
use crate::ui_dioxus::components::toast::Toasts;

pub(crate) const FIELD_STYLE: &str = "width: 100%; padding: 8px 12px; border: 1px solid #ddd;
                                   border-radius: 4px; font-size: 14px; box-sizing: border-box;";
pub(crate) const LABEL_STYLE: &str = "display: block; margin-bottom: 5px; font-weight: 500;";

#[component]
pub fn TaskCreateModal(
    project_id: String,
    members: Vec<Member>,
    on_close: EventHandler<()>,
) -> Element {
    let mut store = use_context::<Signal<WorkspaceStore>>();
    let mut toasts = use_context::<Signal<Toasts>>();

    let mut form = use_signal(|| NewTaskForm::new(Local::now().date_naive()));
    let mut error = use_signal(|| None::<String>);

    let handle_save = move |_| {
        let result = create_task(&mut store.write(), &project_id, &form.read());
        match result {
            Ok(task) => {
                toasts.write().success(format!("Task \"{}\" created", task.title));
                on_close.call(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let due = form.read().due_date.format("%Y-%m-%d").to_string();

    rsx! {
        // Modal backdrop
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
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Create New Task" }
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
                    label { style: LABEL_STYLE, "Title ", span { style: "color: #e00;", "*" } }
                    input {
                        r#type: "text",
                        style: FIELD_STYLE,
                        value: "{form.read().title}",
                        oninput: move |e| form.write().title = e.value(),
                        placeholder: "Enter task title...",
                    }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Description" }
                    textarea {
                        style: "{FIELD_STYLE} min-height: 80px; resize: vertical; font-family: inherit;",
                        value: "{form.read().description}",
                        oninput: move |e| form.write().description = e.value(),
                        placeholder: "Describe the task...",
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                    div {
                        label { style: LABEL_STYLE, "Type" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(t) = TaskType::parse(&e.value()) {
                                    form.write().task_type = t;
                                }
                            },
                            for t in TaskType::ALL {
                                option { value: t.as_str(), selected: form.read().task_type == t, "{t}" }
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
                        label { style: LABEL_STYLE, "Status" }
                        select {
                            style: FIELD_STYLE,
                            onchange: move |e| {
                                if let Some(s) = TaskStatus::parse(&e.value()) {
                                    form.write().status = s;
                                }
                            },
                            for s in TaskStatus::ALL {
                                option { value: s.as_str(), selected: form.read().status == s, "{s.label()}" }
                            }
                        }
                    }
                    div {
                        label { style: LABEL_STYLE, "Due Date" }
                        input {
                            r#type: "date",
                            style: FIELD_STYLE,
                            value: "{due}",
                            oninput: move |e| {
                                if let Ok(date) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                    form.write().due_date = date;
                                }
                            },
                        }
                    }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Assignee" }
                    select {
                        style: FIELD_STYLE,
                        onchange: move |e| {
                            let id = e.value();
                            form.write().assignee_id = (!id.is_empty()).then_some(id);
                        },
                        option { value: "", "Unassigned" }
                        for m in members {
                            option { key: "{m.id}", value: "{m.id}", "{m.name}" }
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
                        style: "padding: 8px 20px; border: none; background: #3b82f6; color: white;
                               border-radius: 4px; cursor: pointer; font-size: 14px;",
                        onclick: handle_save,
                        "Create Task"
                    }
                }
            }
        }
    }
}
