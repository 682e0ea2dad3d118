pub mod comment_service;
pub mod error_handling;
pub mod project_service;

pub use comment_service::{CancelHandle, CancelToken, CommentApi, CommentService, SimulatedCommentApi, TaskDiscussion};
pub use error_handling::{ProjexError, Result};
pub use project_service::{NewProjectForm, NewTaskForm, create_project, create_task};
