pub mod project_create_modal;
pub mod task_create_modal;
pub mod toast;

pub use project_create_modal::ProjectCreateModal;
pub use task_create_modal::TaskCreateModal;
pub use toast::{ToastContainer, Toasts};
