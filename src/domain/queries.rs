use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Task, TaskStatus, TaskType};

/// Status/type filter of the tasks tab. `None` matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub task_type: Option<TaskType>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| s == task.status)
            && self.task_type.is_none_or(|t| t == task.task_type)
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Search box and status select of the project listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    pub search: String,
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    /// Case-insensitive substring match on name or description.
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || project.name.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);
        text_ok && self.status.is_none_or(|s| s == project.status)
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Tasks keyed by due date, earliest first; order within a day is kept.
pub fn tasks_by_due_date(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        days.entry(task.due_date).or_default().push(task);
    }
    days
}

pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_overdue(today)).collect()
}

/// Latest-due tasks across all projects, paired with their project.
pub fn recent_tasks(projects: &[Project], limit: usize) -> Vec<(&Project, &Task)> {
    let mut all: Vec<(&Project, &Task)> = projects
        .iter()
        .flat_map(|p| p.tasks.iter().map(move |t| (p, t)))
        .collect();
    all.sort_by(|a, b| b.1.due_date.cmp(&a.1.due_date));
    all.truncate(limit);
    all
}
