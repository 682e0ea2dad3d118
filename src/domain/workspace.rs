use serde::{Deserialize, Serialize};

use crate::domain::project::Project;
use crate::domain::task::Task;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub projects: Vec<Project>,
}

impl Workspace {
    /// First project whose id matches.
    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        find_project(&self.projects, project_id)
    }

    pub fn find_project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }

    pub fn find_task(&self, project_id: &str, task_id: &str) -> Option<(&Project, &Task)> {
        let project = self.find_project(project_id)?;
        let task = project.find_task(task_id)?;
        Some((project, task))
    }

    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.projects.iter().flat_map(|p| p.tasks.iter())
    }
}

/// Looks up a project by id; `None` covers a missing id, an unknown id and an
/// empty (not yet loaded) list alike.
pub fn find_project<'a>(projects: &'a [Project], project_id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == project_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project(id: &str, name: &str) -> Project {
        let mut p = Project::new(name, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        p.id = id.to_string();
        p
    }

    #[test]
    fn test_find_project_returns_first_match() {
        let projects = vec![project("p1", "First"), project("p1", "Duplicate"), project("p2", "Second")];
        assert_eq!(find_project(&projects, "p1").map(|p| p.name.as_str()), Some("First"));
        assert_eq!(find_project(&projects, "p2").map(|p| p.name.as_str()), Some("Second"));
    }

    #[test]
    fn test_find_project_misses() {
        assert!(find_project(&[], "p1").is_none());
        let projects = vec![project("p1", "First")];
        assert!(find_project(&projects, "").is_none());
        assert!(find_project(&projects, "P1").is_none());
    }

    #[test]
    fn test_find_task_needs_both_ids() {
        let mut p = project("p1", "First");
        let mut task = Task::new("T", p.start_date);
        task.id = "t1".to_string();
        p.tasks.push(task);
        let workspace = Workspace {
            id: "w".into(),
            name: "W".into(),
            projects: vec![p],
        };

        assert!(workspace.find_task("p1", "t1").is_some());
        assert!(workspace.find_task("p1", "t2").is_none());
        assert!(workspace.find_task("p2", "t1").is_none());
        assert_eq!(workspace.all_tasks().count(), 1);
    }
}
