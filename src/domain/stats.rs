//! Counts derived from task lists. Everything here is a pure function of its
//! inputs and is recomputed on each render; nothing is cached.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::domain::project::{Project, ProjectStatus};
use crate::domain::task::{Priority, Task, TaskStatus, TaskType};

/// Header cards on the project detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    /// `TODO` and `IN_PROGRESS` together. Other statuses land in neither
    /// this bucket nor `completed`.
    pub in_progress: usize,
    pub team_members: usize,
}

impl ProjectStats {
    pub fn compute(tasks: &[Task], member_count: usize) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            team_members: member_count,
            ..Default::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Done => stats.completed += 1,
                TaskStatus::InProgress | TaskStatus::Todo => stats.in_progress += 1,
                TaskStatus::Review | TaskStatus::Blocked => {}
            }
        }

        stats
    }

    pub fn for_project(project: &Project) -> Self {
        Self::compute(&project.tasks, project.members.len())
    }
}

/// Analytics tab breakdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskBreakdown {
    pub total: usize,
    pub by_status: HashMap<TaskStatus, usize>,
    pub by_type: HashMap<TaskType, usize>,
    pub by_priority: HashMap<Priority, usize>,
}

impl TaskBreakdown {
    pub fn compute(tasks: &[Task]) -> Self {
        let mut breakdown = Self {
            total: tasks.len(),
            ..Default::default()
        };
        for task in tasks {
            *breakdown.by_status.entry(task.status).or_default() += 1;
            *breakdown.by_type.entry(task.task_type).or_default() += 1;
            *breakdown.by_priority.entry(task.priority).or_default() += 1;
        }
        breakdown
    }

    pub fn status_count(&self, status: TaskStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn type_count(&self, task_type: TaskType) -> usize {
        self.by_type.get(&task_type).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }

    /// Share of `DONE` tasks as a whole percentage; 0 for an empty list.
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.status_count(TaskStatus::Done) * 100 / self.total) as u32
    }

    /// Width of a bar for `count`, as a percentage of the total.
    pub fn share(&self, count: usize) -> u32 {
        if self.total == 0 {
            0
        } else {
            (count * 100 / self.total) as u32
        }
    }
}

/// Dashboard stats grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkspaceStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub my_tasks: usize,
    pub overdue_tasks: usize,
    pub in_progress_tasks: usize,
}

impl WorkspaceStats {
    pub fn compute(projects: &[Project], user_id: &str, today: NaiveDate) -> Self {
        let tasks = || projects.iter().flat_map(|p| p.tasks.iter());
        Self {
            total_projects: projects.len(),
            completed_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
            my_tasks: tasks().filter(|t| t.is_assigned_to(user_id)).count(),
            overdue_tasks: tasks().filter(|t| t.is_overdue(today)).count(),
            in_progress_tasks: tasks().filter(|t| t.status == TaskStatus::InProgress).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::Member;
    use rstest::rstest;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn task(status: TaskStatus) -> Task {
        let mut t = Task::new("t", date(10));
        t.status = status;
        t
    }

    #[test]
    fn test_mixed_status_counts() {
        let tasks = vec![
            task(TaskStatus::Done),
            task(TaskStatus::Todo),
            task(TaskStatus::InProgress),
        ];
        let stats = ProjectStats::compute(&tasks, 0);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
    }

    #[test]
    fn test_empty_list_is_all_zeros() {
        assert_eq!(ProjectStats::compute(&[], 0), ProjectStats::default());
    }

    #[rstest]
    #[case(TaskStatus::Review)]
    #[case(TaskStatus::Blocked)]
    fn test_other_statuses_fall_in_no_bucket(#[case] status: TaskStatus) {
        let tasks = vec![task(status), task(TaskStatus::Done)];
        let stats = ProjectStats::compute(&tasks, 0);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 0);
    }

    #[test]
    fn test_team_members_come_from_project() {
        let mut project = Project::new("P", date(1));
        project.members = vec![
            Member::new("u1", "A", "a@example.com"),
            Member::new("u2", "B", "b@example.com"),
        ];
        project.tasks = vec![task(TaskStatus::Todo)];
        let stats = ProjectStats::for_project(&project);
        assert_eq!(stats.team_members, 2);
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_breakdown_and_completion_rate() {
        let mut bug = task(TaskStatus::Done);
        bug.task_type = TaskType::Bug;
        bug.priority = Priority::High;
        let tasks = vec![bug, task(TaskStatus::Todo), task(TaskStatus::Todo), task(TaskStatus::Blocked)];

        let breakdown = TaskBreakdown::compute(&tasks);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.status_count(TaskStatus::Todo), 2);
        assert_eq!(breakdown.status_count(TaskStatus::Review), 0);
        assert_eq!(breakdown.type_count(TaskType::Bug), 1);
        assert_eq!(breakdown.type_count(TaskType::Task), 3);
        assert_eq!(breakdown.priority_count(Priority::High), 1);
        assert_eq!(breakdown.completion_rate(), 25);
        assert_eq!(breakdown.share(2), 50);
    }

    #[test]
    fn test_breakdown_empty() {
        let breakdown = TaskBreakdown::compute(&[]);
        assert_eq!(breakdown.completion_rate(), 0);
        assert_eq!(breakdown.share(0), 0);
    }

    #[test]
    fn test_workspace_stats() {
        let me = Member::new("me", "Me", "me@example.com");

        let mut mine = task(TaskStatus::InProgress);
        mine.assignee = Some(me.clone());
        let mut overdue = task(TaskStatus::Todo);
        overdue.due_date = date(1);
        let mut done_late = task(TaskStatus::Done);
        done_late.due_date = date(1);

        let mut active = Project::new("A", date(1));
        active.tasks = vec![mine, overdue, done_late];
        let mut finished = Project::new("B", date(1));
        finished.status = ProjectStatus::Completed;

        let stats = WorkspaceStats::compute(&[active, finished], "me", date(5));
        assert_eq!(stats.total_projects, 2);
        assert_eq!(stats.completed_projects, 1);
        assert_eq!(stats.my_tasks, 1);
        assert_eq!(stats.overdue_tasks, 1);
        assert_eq!(stats.in_progress_tasks, 1);
    }
}
