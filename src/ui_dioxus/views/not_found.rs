use dioxus::prelude::*;
use tracing::warn;

use crate::ui_dioxus::router::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| warn!(path = %path, "Unknown route"));

    rsx! {
        div {
            style: "height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px;",
            h1 { style: "font-size: 48px; margin: 0;", "404" }
            p { style: "color: #71717a;", "Nothing lives at {path}" }
            Link { to: Route::Dashboard {}, "Go to dashboard" }
        }
    }
}
