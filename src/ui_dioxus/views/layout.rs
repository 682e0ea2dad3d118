use dioxus::prelude::*;

use crate::config::{AppConfig, Theme};
use crate::repository::WorkspaceStore;
use crate::ui_dioxus::components::ToastContainer;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::theme::{Palette, palette};

#[component]
pub fn Layout() -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let theme = use_context::<Signal<Theme>>();
    let mut sidebar_open = use_signal(|| true);

    let pal = palette(theme());

    if store.read().is_loading() {
        return rsx! {
            div {
                style: "height: 100vh; display: flex; align-items: center; justify-content: center;
                       background: {pal.background}; color: {pal.muted}; font-size: 1.5rem;",
                "Loading workspace..."
            }
        };
    }

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: {pal.background}; font-family: system-ui, sans-serif;",
            if sidebar_open() {
                Sidebar { pal }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",
                Navbar { pal, on_toggle_sidebar: move |_| sidebar_open.set(!sidebar_open()) }
                main {
                    style: "flex: 1; padding: 32px; overflow-y: auto;",
                    Outlet::<Route> {}
                }
            }
            ToastContainer {}
        }
    }
}

#[component]
fn Sidebar(pal: Palette) -> Element {
    let store = use_context::<Signal<WorkspaceStore>>();
    let workspace_name = store
        .read()
        .current_workspace()
        .map(|w| w.name.clone())
        .unwrap_or_default();

    rsx! {
        aside {
            style: "width: 240px; flex-shrink: 0; padding: 24px 16px; background: {pal.surface};
                   border-right: 1px solid {pal.border}; color: {pal.text};",
            div { style: "font-size: 20px; font-weight: bold; margin-bottom: 4px;", "Projex" }
            div { style: "font-size: 13px; color: {pal.muted}; margin-bottom: 24px;", "{workspace_name}" }
            nav {
                style: "display: flex; flex-direction: column; gap: 4px;",
                SidebarLink { to: Route::Dashboard {}, label: "Dashboard", icon: "🏠" }
                SidebarLink { to: Route::Projects {}, label: "Projects", icon: "📁" }
            }
        }
    }
}

#[component]
fn SidebarLink(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "sidebar-link",
            active_class: "active",
            "{icon} {label}"
        }
    }
}

#[component]
fn Navbar(pal: Palette, on_toggle_sidebar: EventHandler<()>) -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let config = use_context::<AppConfig>();
    let icon = match theme() {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    rsx! {
        header {
            style: "height: 56px; display: flex; align-items: center; justify-content: space-between; padding: 0 24px;
                   background: {pal.surface}; border-bottom: 1px solid {pal.border}; color: {pal.text};",
            button {
                style: "background: none; border: none; font-size: 20px; cursor: pointer; color: inherit;",
                onclick: move |_| on_toggle_sidebar.call(()),
                "☰"
            }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                button {
                    style: "background: none; border: none; font-size: 18px; cursor: pointer;",
                    title: "Toggle theme",
                    onclick: move |_| {
                        let next = theme().toggled();
                        tracing::debug!(theme = ?next, "Theme toggled");
                        theme.set(next);
                    },
                    "{icon}"
                }
                span { style: "font-size: 14px;", "{config.user.name}" }
            }
        }
    }
}
