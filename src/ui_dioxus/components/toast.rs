use dioxus::prelude::*;
use std::time::Duration;

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications, newest last.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn loading(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Loading, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_context::<Signal<Toasts>>();
    let items = toasts.read().items().to_vec();

    rsx! {
        div {
            style: "position: fixed; bottom: 24px; right: 24px; z-index: 2000;
                   display: flex; flex-direction: column; gap: 8px;",
            for toast in items {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let config = use_context::<AppConfig>();

    // Loading toasts stay until dismissed by whoever raised them.
    use_hook(|| {
        if toast.kind != ToastKind::Loading {
            let id = toast.id;
            let ttl: Duration = config.toast_duration();
            spawn(async move {
                tokio::time::sleep(ttl).await;
                toasts.write().dismiss(id);
            });
        }
    });

    let (icon, color) = match toast.kind {
        ToastKind::Loading => ("⏳", "#3b82f6"),
        ToastKind::Success => ("✅", "#10b981"),
        ToastKind::Error => ("⚠️", "#ef4444"),
    };

    rsx! {
        div {
            style: format!("background: white; color: #18181b; border-left: 4px solid {}; border-radius: 8px;
                   padding: 10px 16px; box-shadow: 0 4px 16px rgba(0,0,0,0.15); min-width: 220px;
                   display: flex; align-items: center; gap: 8px; font-size: 14px;", color),
            span { "{icon}" }
            span { "{toast.message}" }
        }
    }
}
