use chrono::NaiveDate;

use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Priority, Task, TaskStatus, TaskType};
use crate::repository::WorkspaceStore;
use crate::services::error_handling::{LogHelper, ProjexError, Result};

/// Input of the "Create New Project" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProjectForm {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub member_ids: Vec<String>,
}

/// Input of the "Create New Task" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee_id: Option<String>,
    pub due_date: NaiveDate,
}

impl NewProjectForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            start_date: today,
            end_date: None,
            member_ids: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            LogHelper::log_validation_failure("name", &self.name, "empty");
            return Err(ProjexError::validation("name", "Project name is required"));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                LogHelper::log_validation_failure("end_date", &end.to_string(), "before start date");
                return Err(ProjexError::validation(
                    "end_date",
                    "End date cannot be before the start date",
                ));
            }
        }
        Ok(())
    }
}

impl NewTaskForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            task_type: TaskType::Task,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            assignee_id: None,
            due_date: today,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            LogHelper::log_validation_failure("title", &self.title, "empty");
            return Err(ProjexError::validation("title", "Task title is required"));
        }
        Ok(())
    }
}

/// Builds the project from the form and appends it to the current workspace.
/// Members are picked from everyone already known to the workspace.
pub fn create_project(store: &mut WorkspaceStore, form: &NewProjectForm) -> Result<Project> {
    form.validate()?;

    let mut project = Project::new(form.name.trim(), form.start_date);
    project.description = form.description.trim().to_string();
    project.status = form.status;
    project.priority = form.priority;
    project.end_date = form.end_date;
    project.members = form
        .member_ids
        .iter()
        .filter_map(|id| {
            store
                .projects()
                .iter()
                .find_map(|p| p.find_member(id))
                .cloned()
        })
        .collect();

    store.add_project(project.clone())?;
    Ok(project)
}

/// Builds the task from the form and appends it to `project_id`. The assignee
/// must be a member of that project.
pub fn create_task(store: &mut WorkspaceStore, project_id: &str, form: &NewTaskForm) -> Result<Task> {
    form.validate()?;

    let project = store
        .find_project(project_id)
        .ok_or_else(|| ProjexError::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    let assignee = match form.assignee_id.as_deref() {
        None | Some("") => None,
        Some(id) => Some(
            project
                .find_member(id)
                .cloned()
                .ok_or_else(|| ProjexError::validation("assignee", "Assignee is not a project member"))?,
        ),
    };

    let mut task = Task::new(form.title.trim(), form.due_date);
    let description = form.description.trim();
    task.description = (!description.is_empty()).then(|| description.to_string());
    task.task_type = form.task_type;
    task.status = form.status;
    task.priority = form.priority;
    task.assignee = assignee;

    store.add_task(project_id, task.clone())?;
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock_data::sample_workspace;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn store() -> WorkspaceStore {
        WorkspaceStore::with_workspace(sample_workspace(today()))
    }

    #[test]
    fn test_create_project() {
        let mut store = store();
        let mut form = NewProjectForm::new(today());
        form.name = "  Q3 Planning ".into();
        form.member_ids = vec!["user_2".into(), "ghost".into()];

        let project = create_project(&mut store, &form).unwrap();
        assert_eq!(project.name, "Q3 Planning");
        assert_eq!(project.progress, 0);
        assert!(project.tasks.is_empty());
        assert_eq!(project.members.len(), 1);
        assert_eq!(project.members[0].name, "Alex");
        assert!(store.find_project(&project.id).is_some());
    }

    #[test]
    fn test_create_project_rejects_blank_name() {
        let mut store = store();
        let before = store.projects().len();
        let form = NewProjectForm::new(today());
        assert!(matches!(
            create_project(&mut store, &form),
            Err(ProjexError::ValidationError { .. })
        ));
        assert_eq!(store.projects().len(), before);
    }

    #[test]
    fn test_create_project_rejects_end_before_start() {
        let mut form = NewProjectForm::new(today());
        form.name = "X".into();
        form.end_date = today().pred_opt();
        assert!(form.validate().is_err());

        form.end_date = Some(today());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_create_task() {
        let mut store = store();
        let mut form = NewTaskForm::new(today());
        form.title = "Write release notes".into();
        form.description = "   ".into();
        form.assignee_id = Some("user_3".into());
        form.task_type = TaskType::Improvement;

        let task = create_task(&mut store, "p1", &form).unwrap();
        assert_eq!(task.assignee_name(), "Sam");
        assert!(task.description.is_none());
        assert_eq!(store.find_project("p1").unwrap().tasks.len(), 6);
    }

    #[test]
    fn test_create_task_errors() {
        let mut store = store();
        let mut form = NewTaskForm::new(today());
        assert!(create_task(&mut store, "p1", &form).is_err());

        form.title = "T".into();
        assert_eq!(
            create_task(&mut store, "missing", &form).unwrap_err(),
            ProjexError::ProjectNotFound { id: "missing".into() }
        );

        // user_2 is not on p2
        form.assignee_id = Some("user_2".into());
        assert!(create_task(&mut store, "p2", &form).is_err());
        assert_eq!(store.find_project("p2").unwrap().tasks.len(), 2);
    }
}
