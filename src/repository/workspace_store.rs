use tracing::{debug, info};

use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Priority, Task};
use crate::domain::workspace::Workspace;
use crate::services::error_handling::{ProjexError, Result};

/// In-memory holder of the current workspace. Views receive it through
/// context; it is never a global.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceStore {
    current: Option<Workspace>,
    loading: bool,
}

/// Editable project metadata, as saved from the settings tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub progress: i32,
}

impl WorkspaceStore {
    /// Empty store that reports itself as loading until `load` is called.
    pub fn loading() -> Self {
        Self {
            current: None,
            loading: true,
        }
    }

    pub fn with_workspace(workspace: Workspace) -> Self {
        Self {
            current: Some(workspace),
            loading: false,
        }
    }

    pub fn load(&mut self, workspace: Workspace) {
        info!(
            workspace_id = %workspace.id,
            projects = workspace.projects.len(),
            "Workspace loaded"
        );
        self.current = Some(workspace);
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.current.as_ref()
    }

    /// Projects of the current workspace; empty while nothing is loaded.
    pub fn projects(&self) -> &[Project] {
        self.current
            .as_ref()
            .map(|w| w.projects.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.current.as_ref()?.find_project(project_id)
    }

    pub fn find_task(&self, project_id: &str, task_id: &str) -> Option<(&Project, &Task)> {
        self.current.as_ref()?.find_task(project_id, task_id)
    }

    /// Like `find_task`, but says which half of the lookup failed.
    pub fn task(&self, project_id: &str, task_id: &str) -> Result<(&Project, &Task)> {
        let project = self
            .find_project(project_id)
            .ok_or_else(|| ProjexError::ProjectNotFound {
                id: project_id.to_string(),
            })?;
        let task = project
            .find_task(task_id)
            .ok_or_else(|| ProjexError::TaskNotFound {
                project_id: project_id.to_string(),
                task_id: task_id.to_string(),
            })?;
        Ok((project, task))
    }

    pub fn add_project(&mut self, project: Project) -> Result<()> {
        let workspace = self
            .current
            .as_mut()
            .ok_or_else(|| ProjexError::validation("workspace", "no workspace is loaded"))?;
        info!(project_id = %project.id, name = %project.name, "Project created");
        workspace.projects.push(project);
        Ok(())
    }

    pub fn add_task(&mut self, project_id: &str, task: Task) -> Result<()> {
        let project = self.project_mut(project_id)?;
        info!(project_id = %project_id, task_id = %task.id, title = %task.title, "Task created");
        project.tasks.push(task);
        Ok(())
    }

    /// Replaces the metadata of a project; its tasks and members are kept.
    pub fn update_project(&mut self, project_id: &str, details: ProjectDetails) -> Result<()> {
        if details.name.trim().is_empty() {
            return Err(ProjexError::validation("name", "must not be empty"));
        }
        let project = self.project_mut(project_id)?;
        project.name = details.name.trim().to_string();
        project.description = details.description;
        project.status = details.status;
        project.priority = details.priority;
        project.set_progress(details.progress);
        debug!(project_id = %project_id, "Project settings saved");
        Ok(())
    }

    fn project_mut(&mut self, project_id: &str) -> Result<&mut Project> {
        self.current
            .as_mut()
            .and_then(|w| w.find_project_mut(project_id))
            .ok_or_else(|| ProjexError::ProjectNotFound {
                id: project_id.to_string(),
            })
    }
}

impl ProjectDetails {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status,
            priority: project.priority,
            progress: i32::from(project.progress),
        }
    }
}
