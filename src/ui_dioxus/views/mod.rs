pub mod dashboard;
pub mod layout;
pub mod not_found;
pub mod project_details;
pub mod project_tabs;
pub mod projects;
pub mod task_details;

pub use dashboard::Dashboard;
pub use layout::Layout;
pub use not_found::PageNotFound;
pub use project_details::ProjectDetails;
pub use projects::Projects;
pub use task_details::TaskDetails;
