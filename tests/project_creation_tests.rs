#[cfg(test)]
mod project_creation_tests {
    use chrono::NaiveDate;
    use projex::domain::project::ProjectStatus;
    use projex::domain::task::{Priority, TaskType};
    use projex::repository::mock_data::sample_workspace;
    use projex::repository::{ProjectDetails, WorkspaceStore};
    use projex::services::{NewProjectForm, NewTaskForm, ProjexError, create_project, create_task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn store() -> WorkspaceStore {
        WorkspaceStore::with_workspace(sample_workspace(today()))
    }

    #[test]
    fn test_create_project_with_members() {
        let mut store = store();
        let mut form = NewProjectForm::new(today());
        form.name = "  Q3 Launch  ".into();
        form.priority = Priority::High;
        form.member_ids = vec!["user_2".into(), "ghost".into()];

        let project = create_project(&mut store, &form).unwrap();

        assert_eq!(project.name, "Q3 Launch");
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.progress, 0);
        assert!(project.tasks.is_empty());
        let member_ids: Vec<_> = project.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(member_ids, vec!["user_2"]);
        assert_eq!(store.projects().len(), 4);
        assert!(store.find_project(&project.id).is_some());
    }

    #[test]
    fn test_create_project_rejects_invalid_forms() {
        let mut store = store();

        let blank = NewProjectForm::new(today());
        assert!(matches!(
            create_project(&mut store, &blank),
            Err(ProjexError::ValidationError { .. })
        ));

        let mut backwards = NewProjectForm::new(today());
        backwards.name = "Backwards".into();
        backwards.end_date = today().pred_opt();
        assert!(matches!(
            create_project(&mut store, &backwards),
            Err(ProjexError::ValidationError { .. })
        ));

        assert_eq!(store.projects().len(), 3);
    }

    #[test]
    fn test_create_task_in_project() {
        let mut store = store();
        let mut form = NewTaskForm::new(today());
        form.title = "Write release notes".into();
        form.task_type = TaskType::Improvement;
        form.assignee_id = Some("user_3".into());
        form.description = "   ".into();

        let task = create_task(&mut store, "p1", &form).unwrap();

        assert_eq!(task.assignee_name(), "Sam");
        assert_eq!(task.description, None);
        assert_eq!(store.find_task("p1", &task.id).map(|(_, t)| t.title.as_str()), Some("Write release notes"));
    }

    #[test]
    fn test_create_task_errors() {
        let mut store = store();
        let mut form = NewTaskForm::new(today());
        form.title = "Orphan".into();

        assert_eq!(
            create_task(&mut store, "p404", &form),
            Err(ProjexError::ProjectNotFound { id: "p404".into() })
        );

        // Alex is not on the mobile project.
        form.assignee_id = Some("user_2".into());
        assert!(matches!(
            create_task(&mut store, "p2", &form),
            Err(ProjexError::ValidationError { .. })
        ));
        assert_eq!(store.find_project("p2").unwrap().tasks.len(), 2);
    }

    #[test]
    fn test_settings_save_keeps_tasks() {
        let mut store = store();
        let mut details = ProjectDetails::from_project(store.find_project("p1").unwrap());
        details.status = ProjectStatus::OnHold;
        details.progress = -20;

        store.update_project("p1", details).unwrap();

        let project = store.find_project("p1").unwrap();
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(project.progress, 0);
        assert_eq!(project.tasks.len(), 5);
    }
}
