#[cfg(test)]
mod project_view_state_tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use projex::domain::stats::ProjectStats;
    use projex::domain::task::{Task, TaskStatus};
    use projex::domain::workspace::find_project;
    use projex::repository::WorkspaceStore;
    use projex::repository::mock_data::sample_workspace;
    use projex::ui_dioxus::state::{ProjectQuery, ProjectTab, TabBridge};
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn tasks_with(statuses: &[TaskStatus]) -> Vec<Task> {
        statuses
            .iter()
            .map(|s| {
                let mut t = Task::new("t", today());
                t.status = *s;
                t
            })
            .collect()
    }

    #[test]
    fn test_selecting_analytics_updates_query() {
        let current = ProjectQuery::from("id=p1");
        let mut bridge = TabBridge::from_query(&current);
        assert_eq!(bridge.active(), ProjectTab::Tasks);

        let next = bridge.select(ProjectTab::Analytics, &current);
        assert_eq!(bridge.active(), ProjectTab::Analytics);
        assert_eq!(next.id.as_deref(), Some("p1"));
        assert_eq!(next.tab.as_deref(), Some("analytics"));
        assert_eq!(next.to_string(), "id=p1&tab=analytics");
    }

    #[test]
    fn test_reload_preselects_tab() {
        let mut bridge = TabBridge::default();
        let shared = bridge.select(ProjectTab::Calendar, &ProjectQuery::for_project("p2"));

        // A reload parses the serialized query from scratch.
        let reloaded = ProjectQuery::from(shared.to_string().as_str());
        assert_eq!(reloaded, shared);
        assert_eq!(TabBridge::from_query(&reloaded).active(), ProjectTab::Calendar);
    }

    #[test]
    fn test_back_navigation_resyncs_tab() {
        let mut bridge = TabBridge::from_query(&ProjectQuery::new("p1", ProjectTab::Settings));
        assert!(bridge.sync_external(&ProjectQuery::for_project("p1")));
        assert_eq!(bridge.active(), ProjectTab::Tasks);
        assert!(!bridge.sync_external(&ProjectQuery::from("id=p1&tab=bogus")));
    }

    #[rstest]
    #[case("p1", Some("Website Relaunch"))]
    #[case("p3", Some("Data Migration"))]
    #[case("missing", None)]
    #[case("", None)]
    fn test_project_lookup(#[case] id: &str, #[case] expected: Option<&str>) {
        let workspace = sample_workspace(today());
        let found = find_project(&workspace.projects, id).map(|p| p.name.as_str());
        assert_eq!(found, expected);
    }

    #[test]
    fn test_lookup_before_load_is_not_found() {
        let mut store = WorkspaceStore::loading();
        assert!(store.find_project("p1").is_none());

        store.load(sample_workspace(today()));
        assert!(store.find_project("p1").is_some());
    }

    #[test]
    fn test_stats_for_done_todo_in_progress() {
        let stats = ProjectStats::compute(
            &tasks_with(&[TaskStatus::Done, TaskStatus::Todo, TaskStatus::InProgress]),
            2,
        );
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.team_members, 2);
    }

    #[test]
    fn test_review_and_blocked_fall_in_no_bucket() {
        let stats = ProjectStats::compute(&tasks_with(&[TaskStatus::Review, TaskStatus::Blocked]), 0);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.in_progress, 0);
    }

    #[test]
    fn test_stats_follow_store_changes() {
        let mut store = WorkspaceStore::with_workspace(sample_workspace(today()));
        let before = ProjectStats::for_project(store.find_project("p2").unwrap());

        store.add_task("p2", Task::new("Extra", today())).unwrap();
        let after = ProjectStats::for_project(store.find_project("p2").unwrap());

        assert_eq!(after.total, before.total + 1);
        assert_eq!(after.in_progress, before.in_progress + 1);
    }
}
