pub mod mock_data;
pub mod workspace_store;

pub use workspace_store::{ProjectDetails, WorkspaceStore};
