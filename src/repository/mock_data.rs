use chrono::{Duration, NaiveDate};

use crate::domain::project::{Member, Project, ProjectStatus};
use crate::domain::task::{Priority, Task, TaskStatus, TaskType};
use crate::domain::workspace::Workspace;

fn member(id: &str, name: &str) -> Member {
    Member::new(id, name, format!("{}@example.com", name.to_lowercase()))
}

fn task(
    id: &str,
    title: &str,
    status: TaskStatus,
    task_type: TaskType,
    priority: Priority,
    assignee: Option<&Member>,
    due_date: NaiveDate,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status,
        task_type,
        priority,
        assignee: assignee.cloned(),
        due_date,
    }
}

/// Demo workspace; due dates are spread around `today` so the overdue and
/// upcoming lists have content.
pub fn sample_workspace(today: NaiveDate) -> Workspace {
    let me = member("user_1", "User");
    let alex = member("user_2", "Alex");
    let sam = member("user_3", "Sam");
    let days = Duration::days;

    let mut launch = Project {
        id: "p1".to_string(),
        name: "Website Relaunch".to_string(),
        description: "Redesign and relaunch the marketing website".to_string(),
        status: ProjectStatus::Active,
        priority: Priority::High,
        progress: 45,
        start_date: today - days(30),
        end_date: Some(today + days(45)),
        members: vec![me.clone(), alex.clone(), sam.clone()],
        tasks: Vec::new(),
    };
    launch.tasks = vec![
        task("t1", "Design dashboard layout", TaskStatus::Done, TaskType::Feature, Priority::Medium, Some(&alex), today - days(10)),
        task("t2", "Implement user authentication", TaskStatus::InProgress, TaskType::Feature, Priority::High, Some(&me), today + days(7)),
        task("t3", "Fix navbar overflow on mobile", TaskStatus::Todo, TaskType::Bug, Priority::High, Some(&sam), today - days(2)),
        task("t4", "API documentation", TaskStatus::Review, TaskType::Improvement, Priority::Medium, None, today + days(3)),
        task("t5", "Set up CI/CD pipeline", TaskStatus::Todo, TaskType::Task, Priority::Low, Some(&me), today + days(14)),
    ];
    launch.tasks[0].description = Some("Create mockups for the main dashboard".to_string());
    launch.tasks[1].description = Some("Add login and registration functionality".to_string());

    let mut mobile = Project {
        id: "p2".to_string(),
        name: "Mobile App".to_string(),
        description: "Companion app for iOS and Android".to_string(),
        status: ProjectStatus::Planning,
        priority: Priority::Medium,
        progress: 10,
        start_date: today - days(5),
        end_date: None,
        members: vec![me.clone(), sam.clone()],
        tasks: Vec::new(),
    };
    mobile.tasks = vec![
        task("t6", "Requirements gathering", TaskStatus::Done, TaskType::Task, Priority::High, Some(&sam), today - days(3)),
        task("t7", "Pick cross-platform framework", TaskStatus::Blocked, TaskType::Other, Priority::Medium, Some(&me), today + days(1)),
    ];

    let archive = Project {
        id: "p3".to_string(),
        name: "Data Migration".to_string(),
        description: "Move legacy records to the new warehouse".to_string(),
        status: ProjectStatus::Completed,
        priority: Priority::Low,
        progress: 100,
        start_date: today - days(120),
        end_date: Some(today - days(20)),
        members: vec![alex],
        tasks: vec![task("t8", "Verify row counts", TaskStatus::Done, TaskType::Task, Priority::Medium, None, today - days(25))],
    };

    Workspace {
        id: "ws_1".to_string(),
        name: "Acme Corp".to_string(),
        projects: vec![launch, mobile, archive],
    }
}
