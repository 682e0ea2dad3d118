use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui_dioxus::state::{ProjectQuery, TaskQuery};
use crate::ui_dioxus::views::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},

        #[route("/projects")]
        Projects {},

        #[route("/projectsDetail?:..query")]
        ProjectDetails { query: ProjectQuery },

        #[route("/taskDetails?:..query")]
        TaskDetails { query: TaskQuery },
    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
