use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::project::Member;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: Priority,
    pub assignee: Option<Member>,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Blocked,
    Done,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Task,
    Bug,
    Feature,
    Improvement,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Blocked,
        TaskStatus::Done,
    ];

    /// Wire spelling, e.g. `IN_PROGRESS`.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Review => "REVIEW",
            TaskStatus::Blocked => "BLOCKED",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Done => "Done",
        }
    }
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        TaskType::Task,
        TaskType::Bug,
        TaskType::Feature,
        TaskType::Improvement,
        TaskType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Task => "TASK",
            TaskType::Bug => "BUG",
            TaskType::Feature => "FEATURE",
            TaskType::Improvement => "IMPROVEMENT",
            TaskType::Other => "OTHER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            task_type: TaskType::Task,
            priority: Priority::Medium,
            assignee: None,
            due_date,
        }
    }

    pub fn assignee_name(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("Unassigned")
    }

    /// Overdue means due strictly before `today` and not yet done.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != TaskStatus::Done
    }

    pub fn is_assigned_to(&self, member_id: &str) -> bool {
        self.assignee.as_ref().is_some_and(|m| m.id == member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_new_task() {
        let task = Task::new("Write docs", day(10));
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.task_type, TaskType::Task);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.description.is_none());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_fresh_ids() {
        let a = Task::new("A", day(1));
        let b = Task::new("B", day(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_assignee_placeholder() {
        let mut task = Task::new("Task", day(1));
        assert_eq!(task.assignee_name(), "Unassigned");

        task.assignee = Some(Member::new("u1", "Alex", "alex@example.com"));
        assert_eq!(task.assignee_name(), "Alex");
        assert!(task.is_assigned_to("u1"));
        assert!(!task.is_assigned_to("u2"));
    }

    #[test]
    fn test_is_overdue() {
        let mut task = Task::new("Task", day(5));
        assert!(!task.is_overdue(day(5)));
        assert!(task.is_overdue(day(6)));

        task.status = TaskStatus::Done;
        assert!(!task.is_overdue(day(6)));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("in_progress"), None);
    }

    #[test]
    fn test_task_serializes_type_field() {
        let task = Task::new("Bug hunt", day(2));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "TASK");
        assert_eq!(json["due_date"], "2025-03-02");
    }
}
