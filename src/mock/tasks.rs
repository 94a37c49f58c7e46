use crate::debug_log;
use crate::error::TaskError;
use serde::{Deserialize, Serialize};

/// Task urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// Task progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    Open,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to-do",
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A stored task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub attachments: u32,
    #[serde(default)]
    pub comments: u32,
}

/// Input for [`TaskStore::add`]; unset fields get defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub tags: Option<Vec<String>>,
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,
    pub attachments: Option<u32>,
    pub comments: Option<u32>,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee: assignee.into(),
            ..Self::default()
        }
    }

    /// Check the fields the add form requires
    pub fn validate(&self) -> Result<(), TaskError> {
        check_length("title", "Title", &self.title, 3)?;
        check_length("description", "Description", self.description.trim(), 1)?;
        check_length("assignee", "Assignee", &self.assignee, 1)?;
        Ok(())
    }
}

fn check_length(field: &'static str, label: &str, value: &str, min: usize) -> Result<(), TaskError> {
    let len = value.chars().count();
    let message = if len == 0 {
        format!("{label} field is required")
    } else if len < min {
        format!("{label} must be at least {min} characters")
    } else {
        return Ok(());
    };
    Err(TaskError::Invalid { field, message })
}

/// Partial update for [`TaskStore::update`]; only set fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskUpdate {
    pub id: u32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub tags: Option<Vec<String>>,
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,
    pub attachments: Option<u32>,
    pub comments: Option<u32>,
}

impl TaskUpdate {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn apply(self, task: &mut Task) {
        let Self {
            id: _,
            title,
            description,
            assignee,
            due_date,
            priority,
            status,
            tags,
            avatar,
            avatar_color,
            attachments,
            comments,
        } = self;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(assignee) = assignee {
            task.assignee = assignee;
        }
        if let Some(due_date) = due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        if let Some(status) = status {
            task.status = status;
        }
        if let Some(tags) = tags {
            task.tags = tags;
        }
        if let Some(avatar) = avatar {
            task.avatar = avatar;
        }
        if avatar_color.is_some() {
            task.avatar_color = avatar_color;
        }
        if let Some(attachments) = attachments {
            task.attachments = attachments;
        }
        if let Some(comments) = comments {
            task.comments = comments;
        }
    }
}

/// List filters. Empty `q` and `None` filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskQuery {
    pub q: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
}

impl TaskQuery {
    /// Free-text search over title, description and assignee
    pub fn search(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    fn matches(&self, task: &Task) -> bool {
        let q = self.q.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&q);

        let text = contains(&task.title)
            || contains(&task.description)
            || contains(&task.assignee)
            || (contains(task.priority.as_str()) && contains(task.status.as_str()));

        text && self.priority.map_or(true, |p| p == task.priority)
            && self.status.map_or(true, |s| s == task.status)
            && self.assignee.as_ref().map_or(true, |a| *a == task.assignee)
    }
}

/// Result of [`TaskStore::list`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    /// Every stored task, unfiltered
    pub all_data: Vec<Task>,
    /// Tasks passing the query
    pub tasks: Vec<Task>,
    /// The query that produced `tasks`
    pub params: TaskQuery,
    pub total: usize,
}

/// In-memory task table with auto-incrementing ids
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The fixture tasks the dashboard ships with
    pub fn seeded() -> Self {
        Self::new(seed_tasks())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn list(&self, query: &TaskQuery) -> TaskList {
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| query.matches(task))
            .cloned()
            .collect();
        TaskList {
            all_data: self.tasks.clone(),
            total: tasks.len(),
            tasks,
            params: query.clone(),
        }
    }

    /// Validate and store a new task at the front of the list.
    ///
    /// The id is one more than the largest id present (1 for an empty store).
    pub fn add(&mut self, new: NewTask) -> Result<Task, TaskError> {
        new.validate()?;

        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title: new.title,
            description: new.description,
            assignee: new.assignee,
            due_date: new.due_date,
            priority: new.priority.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            tags: new.tags.unwrap_or_default(),
            avatar: new.avatar.unwrap_or_default(),
            avatar_color: Some(new.avatar_color.unwrap_or_else(|| "primary".to_string())),
            attachments: new.attachments.unwrap_or(0),
            comments: new.comments.unwrap_or(0),
        };

        debug_log!("Adding task {} '{}'", task.id, task.title);
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Merge the set fields of `update` into the stored task
    pub fn update(&mut self, update: TaskUpdate) -> Result<Task, TaskError> {
        let id = update.id;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound { id })?;

        update.apply(task);
        debug_log!("Updated task {}", id);
        Ok(task.clone())
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: u32) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound { id })?;
        debug_log!("Deleting task {}", id);
        Ok(self.tasks.remove(index))
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: u32,
    title: &str,
    description: &str,
    assignee: &str,
    due_date: &str,
    priority: Priority,
    status: TaskStatus,
    tags: &[&str],
    avatar: u8,
    avatar_color: Option<&str>,
    attachments: u32,
    comments: u32,
) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.to_string(),
        assignee: assignee.to_string(),
        due_date: due_date.to_string(),
        priority,
        status,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        avatar: format!("/images/avatars/{avatar}.png"),
        avatar_color: avatar_color.map(str::to_string),
        attachments,
        comments,
    }
}

fn seed_tasks() -> Vec<Task> {
    use Priority::*;
    use TaskStatus::*;

    vec![
        task(1, "Update dashboard UI", "Improve the dashboard UI with new charts and widgets",
            "John Doe", "2023-12-25", High, InProgress, &["UI", "dashboard"], 1, Some("primary"), 3, 5),
        task(2, "Fix login authentication", "Resolve issues with user login and authentication flow",
            "Jane Smith", "2023-12-15", Critical, ToDo, &["security", "authentication"], 3, None, 1, 8),
        task(3, "Implement dark mode", "Add dark mode support to the application",
            "Mike Johnson", "2024-01-10", Medium, Completed, &["UI", "theme"], 1, None, 0, 3),
        task(4, "Optimize API performance", "Improve API response time and reduce server load",
            "Sarah Williams", "2023-12-30", High, InProgress, &["backend", "performance"], 3, None, 2, 0),
        task(5, "Create user documentation", "Write comprehensive user documentation for the application",
            "Alex Brown", "2024-01-20", Low, ToDo, &["documentation"], 1, None, 5, 2),
        task(6, "Refactor authentication service", "Improve code structure and security of the authentication service",
            "Robert Chen", "2024-01-05", Medium, ToDo, &["security", "refactoring"], 4, Some("error"), 1, 4),
        task(7, "Update dependencies", "Update all npm packages to their latest compatible versions",
            "Emma Wilson", "2023-12-10", Low, Completed, &["maintenance"], 2, Some("warning"), 0, 1),
        task(8, "Implement file upload feature", "Add ability to upload and manage files in the application",
            "David Park", "2024-01-15", High, InProgress, &["feature", "storage"], 4, None, 2, 7),
        task(9, "Fix responsive layout issues", "Address layout problems on mobile and tablet devices",
            "Lisa Johnson", "2023-12-20", Medium, ToDo, &["UI", "responsive"], 2, None, 0, 3),
        task(10, "Implement user roles and permissions", "Create a comprehensive role-based access control system",
            "Michael Brown", "2024-02-01", Critical, ToDo, &["security", "authorization"], 5, None, 4, 9),
    ]
}
