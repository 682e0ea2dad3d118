use chrono::Local;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::repository::WorkspaceStore;
use crate::repository::mock_data::sample_workspace;
use crate::services::{CommentService, SimulatedCommentApi};
use crate::ui_dioxus::components::Toasts;
use crate::ui_dioxus::router::Route;

const GLOBAL_CSS: &str = r#"
body { margin: 0; }
.sidebar-link { display: block; padding: 8px 12px; border-radius: 8px; color: inherit; text-decoration: none; font-size: 14px; }
.sidebar-link:hover { background: rgba(59, 130, 246, 0.08); }
.sidebar-link.active { background: rgba(59, 130, 246, 0.15); color: #2563eb; font-weight: 600; }
"#;

/// Root component. Expects an `AppConfig` in the root context and provides
/// the store, toasts, theme and comment service to everything below it.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let mut store = use_context_provider(|| Signal::new(WorkspaceStore::loading()));
    use_context_provider(|| Signal::new(Toasts::default()));
    use_context_provider(|| Signal::new(config.theme));
    use_context_provider(|| {
        let api = SimulatedCommentApi::new(config.comment_delay());
        CommentService::new(Arc::new(api), config.comment_author())
    });

    use_hook(|| {
        spawn(async move {
            store.write().load(sample_workspace(Local::now().date_naive()));
        });
    });

    rsx! {
        style { {GLOBAL_CSS} }
        Router::<Route> {}
    }
}
