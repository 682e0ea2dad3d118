//! View state of the project and task detail screens, kept in step with the
//! query string of the current route.

use std::fmt;

/// Sub-views of the project detail screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProjectTab {
    #[default]
    Tasks,
    Calendar,
    Analytics,
    Settings,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::Tasks,
        ProjectTab::Calendar,
        ProjectTab::Analytics,
        ProjectTab::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectTab::Tasks => "tasks",
            ProjectTab::Calendar => "calendar",
            ProjectTab::Analytics => "analytics",
            ProjectTab::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectTab::Tasks => "Tasks",
            ProjectTab::Calendar => "Calendar",
            ProjectTab::Analytics => "Analytics",
            ProjectTab::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectTab::Tasks => "🗂️",
            ProjectTab::Calendar => "📅",
            ProjectTab::Analytics => "📊",
            ProjectTab::Settings => "⚙️",
        }
    }

    /// Exact, case-sensitive match on the tab key.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == value)
    }

    /// Tab named by a query parameter; absent or unknown names give `Tasks`.
    pub fn resolve(param: Option<&str>) -> Self {
        param.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Query string of the project detail route: `id=<id>&tab=<tab>`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub id: Option<String>,
    pub tab: Option<String>,
}

/// Query string of the task detail route: `projectId=<id>&taskId=<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub task_id: Option<String>,
}

impl ProjectQuery {
    pub fn new(id: impl Into<String>, tab: ProjectTab) -> Self {
        Self {
            id: Some(id.into()),
            tab: Some(tab.key().to_string()),
        }
    }

    pub fn for_project(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            tab: None,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

impl TaskQuery {
    pub fn new(project_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            task_id: Some(task_id.into()),
        }
    }
}

impl From<&str> for ProjectQuery {
    fn from(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in parse_pairs(query) {
            match key.as_str() {
                "id" if parsed.id.is_none() => parsed.id = Some(value),
                "tab" if parsed.tab.is_none() => parsed.tab = Some(value),
                _ => {}
            }
        }
        parsed
    }
}

impl From<&str> for TaskQuery {
    fn from(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in parse_pairs(query) {
            match key.as_str() {
                "projectId" if parsed.project_id.is_none() => parsed.project_id = Some(value),
                "taskId" if parsed.task_id.is_none() => parsed.task_id = Some(value),
                _ => {}
            }
        }
        parsed
    }
}

impl fmt::Display for ProjectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, &[("id", self.id.as_deref()), ("tab", self.tab.as_deref())])
    }
}

impl fmt::Display for TaskQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(
            f,
            &[
                ("projectId", self.project_id.as_deref()),
                ("taskId", self.task_id.as_deref()),
            ],
        )
    }
}

/// First occurrence of a key wins; pairs without `=` get an empty value.
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn write_pairs(f: &mut fmt::Formatter<'_>, pairs: &[(&str, Option<&str>)]) -> fmt::Result {
    let mut first = true;
    for (key, value) in pairs {
        if let Some(value) = value {
            if !first {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, urlencoding::encode(value))?;
            first = false;
        }
    }
    Ok(())
}

/// Active tab of one mounted project detail screen. The route query is the
/// external copy: selecting a tab produces the query to navigate to, and a
/// query that changes on its own (back/forward) is synced back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TabBridge {
    active: ProjectTab,
}

impl TabBridge {
    pub fn from_query(query: &ProjectQuery) -> Self {
        Self {
            active: ProjectTab::resolve(query.tab.as_deref()),
        }
    }

    pub fn active(&self) -> ProjectTab {
        self.active
    }

    /// Makes `tab` active and returns the query that mirrors it, keeping the
    /// project id of `current`.
    pub fn select(&mut self, tab: ProjectTab, current: &ProjectQuery) -> ProjectQuery {
        self.active = tab;
        ProjectQuery {
            id: current.id.clone(),
            tab: Some(tab.key().to_string()),
        }
    }

    /// Re-reads the tab from the external query. Returns whether the active
    /// tab changed.
    pub fn sync_external(&mut self, query: &ProjectQuery) -> bool {
        let tab = ProjectTab::resolve(query.tab.as_deref());
        let changed = tab != self.active;
        self.active = tab;
        changed
    }
}
