//! Mock task API: listing with filters, add/update/delete.

#![cfg(feature = "mock")]

use dashboard_navigator::error::TaskError;
use dashboard_navigator::mock::{NewTask, Priority, TaskQuery, TaskStatus, TaskStore, TaskUpdate};

fn ids(tasks: &[dashboard_navigator::mock::Task]) -> Vec<u32> {
    tasks.iter().map(|t| t.id).collect()
}

#[test]
fn test_list_without_filters_returns_everything() {
    let store = TaskStore::seeded();
    let list = store.list(&TaskQuery::default());
    assert_eq!(list.total, 10);
    assert_eq!(list.tasks, list.all_data);
}

#[test]
fn test_search_is_case_insensitive_over_text_fields() {
    let store = TaskStore::seeded();

    let list = store.list(&TaskQuery::search("AUTHENTICATION"));
    assert_eq!(ids(&list.tasks), vec![2, 6]);

    let list = store.list(&TaskQuery::search("emma"));
    assert_eq!(ids(&list.tasks), vec![7]);
    assert_eq!(list.all_data.len(), 10);
}

#[test]
fn test_filters_are_exact_and_combined() {
    let store = TaskStore::seeded();

    let list = store.list(&TaskQuery::default().status(TaskStatus::InProgress));
    assert_eq!(ids(&list.tasks), vec![1, 4, 8]);

    let list = store.list(
        &TaskQuery::default()
            .status(TaskStatus::ToDo)
            .priority(Priority::Critical),
    );
    assert_eq!(ids(&list.tasks), vec![2, 10]);

    let list = store.list(&TaskQuery::search("login").assignee("Jane Smith"));
    assert_eq!(ids(&list.tasks), vec![2]);
    assert_eq!(list.params.assignee.as_deref(), Some("Jane Smith"));
    assert_eq!(list.total, 1);
}

#[test]
fn test_add_assigns_next_id_and_defaults() {
    let mut store = TaskStore::seeded();
    let mut new = NewTask::new("Write release notes", "Summarise the sprint", "Ann Lee");
    new.due_date = "2024-03-01".to_string();

    let task = store.add(new).unwrap();
    assert_eq!(task.id, 11);
    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.avatar_color.as_deref(), Some("primary"));
    assert!(task.tags.is_empty());
    assert_eq!((task.attachments, task.comments), (0, 0));

    // New tasks go to the front
    let list = store.list(&TaskQuery::default());
    assert_eq!(list.tasks[0].id, 11);
    assert_eq!(list.total, 11);
}

#[test]
fn test_add_into_empty_store_starts_at_one() {
    let mut store = TaskStore::default();
    let task = store.add(NewTask::new("First", "Something", "Ann")).unwrap();
    assert_eq!(task.id, 1);
}

#[test]
fn test_add_rejects_invalid_task() {
    let mut store = TaskStore::seeded();
    let err = store.add(NewTask::new("No", "desc", "Ann")).unwrap_err();
    assert!(matches!(err, TaskError::Invalid { field: "title", .. }));
    assert_eq!(err.status(), 400);
    assert_eq!(store.len(), 10);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut store = TaskStore::seeded();
    let err = store.update(TaskUpdate::new(99)).unwrap_err();
    assert_eq!(err, TaskError::NotFound { id: 99 });
    assert_eq!(err.status(), 404);
}

#[test]
fn test_update_replaces_tags_and_keeps_rest() {
    let mut store = TaskStore::seeded();
    let mut update = TaskUpdate::new(1);
    update.tags = Some(vec!["charts".to_string()]);
    update.priority = Some(Priority::Low);

    let task = store.update(update).unwrap();
    assert_eq!(task.tags, vec!["charts"]);
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.assignee, "John Doe");
    assert_eq!(store.get(1), Some(&task));
}

#[test]
fn test_delete_removes_only_that_task() {
    let mut store = TaskStore::seeded();
    let removed = store.delete(4).unwrap();
    assert_eq!(removed.title, "Optimize API performance");
    assert!(store.get(4).is_none());
    assert_eq!(store.len(), 9);

    assert_eq!(store.delete(4).unwrap_err(), TaskError::NotFound { id: 4 });
    assert_eq!(store.len(), 9);
}

#[test]
fn test_task_json_is_camel_case() {
    let store = TaskStore::seeded();
    let json = serde_json::to_value(store.get(1).unwrap()).unwrap();
    assert_eq!(json["dueDate"], "2023-12-25");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["avatarColor"], "primary");

    let query: TaskQuery = serde_json::from_str(r#"{"q": "ui", "status": "to-do"}"#).unwrap();
    assert_eq!(query.status, Some(TaskStatus::ToDo));
}
