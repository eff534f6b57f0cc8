use chrono::NaiveDate;
use tempfile::NamedTempFile;
use todo_core::{
    test_utils::{create_empty_database, create_test_database},
    Category, NewTodo, Priority, Status, TodoChanges, TodoDatabase, TodoError, TodoFilter,
    TodoQueryBuilder,
};

async fn seeded_database() -> (TodoDatabase, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    create_test_database(temp_file.path()).await.unwrap();
    let db = TodoDatabase::new(temp_file.path()).await.unwrap();
    (db, temp_file)
}

async fn empty_database() -> (TodoDatabase, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    create_empty_database(temp_file.path()).await.unwrap();
    let db = TodoDatabase::new(temp_file.path()).await.unwrap();
    (db, temp_file)
}

fn buy_milk() -> NewTodo {
    NewTodo {
        id: 1,
        todo: "Buy milk".to_string(),
        priority: Some(Priority::High),
        status: Some(Status::ToDo),
        category: Some(Category::Home),
        due_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    }
}

fn ids(todos: &[todo_core::Todo]) -> Vec<i64> {
    todos.iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (db, _temp_file) = empty_database().await;
    db.create_todo(&buy_milk()).await.unwrap();

    let stored = db.get_todo(1).await.unwrap().unwrap();
    assert_eq!(stored.todo, "Buy milk");
    assert_eq!(stored.priority, "HIGH");
    assert_eq!(stored.status, "TO DO");
    assert_eq!(stored.category, "HOME");
    assert_eq!(stored.due_date, "2021-01-01");
}

#[tokio::test]
async fn test_create_with_missing_enums_stores_empty_strings() {
    let (db, _temp_file) = empty_database().await;
    let todo = NewTodo {
        priority: None,
        category: None,
        ..buy_milk()
    };
    db.create_todo(&todo).await.unwrap();

    let stored = db.get_todo(1).await.unwrap().unwrap();
    assert_eq!(stored.priority, "");
    assert_eq!(stored.category, "");
    assert_eq!(stored.status, "TO DO");
}

#[tokio::test]
async fn test_duplicate_id_is_a_database_error() {
    let (db, _temp_file) = empty_database().await;
    db.create_todo(&buy_milk()).await.unwrap();

    let result = db.create_todo(&buy_milk()).await;
    assert!(matches!(result, Err(TodoError::Database(_))));
}

#[tokio::test]
async fn test_get_missing_todo_is_none() {
    let (db, _temp_file) = empty_database().await;
    assert_eq!(db.get_todo(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_search_is_case_sensitive_substring() {
    let (db, _temp_file) = seeded_database().await;

    let learn = db
        .list_todos(&TodoQueryBuilder::new().search("Learn").build())
        .await
        .unwrap();
    assert_eq!(ids(&learn), vec![1, 2]);

    let lower = db
        .list_todos(&TodoQueryBuilder::new().search("learn").build())
        .await
        .unwrap();
    assert!(lower.is_empty());
}

#[tokio::test]
async fn test_empty_filter_returns_everything_in_id_order() {
    let (db, _temp_file) = seeded_database().await;
    let all = db.list_todos(&TodoFilter::default()).await.unwrap();
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_filter_by_status() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new().status(Status::ToDo).build();
    assert_eq!(ids(&db.list_todos(&filter).await.unwrap()), vec![1, 3]);
}

#[tokio::test]
async fn test_filter_by_priority_and_status() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new()
        .priority(Priority::High)
        .status(Status::InProgress)
        .build();
    assert_eq!(ids(&db.list_todos(&filter).await.unwrap()), vec![4]);
}

#[tokio::test]
async fn test_filter_by_category() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new().category(Category::Home).build();
    assert_eq!(ids(&db.list_todos(&filter).await.unwrap()), vec![3, 5, 6]);
}

#[tokio::test]
async fn test_category_with_status_filters_by_status_only() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new()
        .category(Category::Home)
        .status(Status::Done)
        .build();

    // Status alone: todo 2 is DONE but LEARNING, and still comes back.
    assert_eq!(ids(&db.list_todos(&filter).await.unwrap()), vec![2, 6]);
}

#[tokio::test]
async fn test_category_with_priority_filters_by_priority_only() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new()
        .category(Category::Work)
        .priority(Priority::High)
        .build();
    assert_eq!(ids(&db.list_todos(&filter).await.unwrap()), vec![1, 4, 6]);
}

#[tokio::test]
async fn test_search_with_injection_text_is_literal() {
    let (db, _temp_file) = seeded_database().await;
    let filter = TodoQueryBuilder::new().search("' OR 1=1 --").build();
    assert!(db.list_todos(&filter).await.unwrap().is_empty());

    let all = db.list_todos(&TodoFilter::default()).await.unwrap();
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn test_agenda_matches_exact_date() {
    let (db, _temp_file) = seeded_database().await;

    let due = db
        .list_todos_due_on(NaiveDate::from_ymd_opt(2021, 2, 22).unwrap())
        .await
        .unwrap();
    assert_eq!(ids(&due), vec![1, 3]);

    let none = db
        .list_todos_due_on(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let (db, _temp_file) = seeded_database().await;
    let before = db.get_todo(1).await.unwrap().unwrap();

    let changes = TodoChanges {
        status: Some(Status::Done),
        ..TodoChanges::default()
    };
    let written = db.update_todo(1, &changes).await.unwrap();
    let written = written.expect("row 1 exists");
    let after = db.get_todo(1).await.unwrap().unwrap();

    assert_eq!(written, after);
    assert_eq!(after.status, "DONE");
    assert_eq!(after.todo, before.todo);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.category, before.category);
    assert_eq!(after.due_date, before.due_date);
}

#[tokio::test]
async fn test_update_due_date_is_normalized() {
    let (db, _temp_file) = seeded_database().await;
    let changes = TodoChanges {
        due_date: NaiveDate::from_ymd_opt(2022, 3, 4),
        ..TodoChanges::default()
    };
    db.update_todo(2, &changes).await.unwrap();
    assert_eq!(db.get_todo(2).await.unwrap().unwrap().due_date, "2022-03-04");
}

#[tokio::test]
async fn test_empty_update_rewrites_the_same_row() {
    let (db, _temp_file) = seeded_database().await;
    let before = db.get_todo(5).await.unwrap().unwrap();
    db.update_todo(5, &TodoChanges::default()).await.unwrap();
    assert_eq!(db.get_todo(5).await.unwrap().unwrap(), before);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (db, _temp_file) = seeded_database().await;

    assert_eq!(db.delete_todo(3).await.unwrap(), 1);
    assert_eq!(db.get_todo(3).await.unwrap(), None);
    assert_eq!(db.delete_todo(3).await.unwrap(), 0);
}

#[tokio::test]
async fn test_null_columns_read_as_empty() {
    let (db, _temp_file) = empty_database().await;
    sqlx::query("INSERT INTO todo (id, todo) VALUES (9, 'bare')")
        .execute(db.pool())
        .await
        .unwrap();

    let stored = db.get_todo(9).await.unwrap().unwrap();
    assert_eq!(stored.todo, "bare");
    assert_eq!(stored.priority, "");
    assert_eq!(stored.due_date, "");
}

#[tokio::test]
async fn test_close_disconnects() {
    let (db, _temp_file) = seeded_database().await;
    assert!(db.is_connected().await);
    db.close().await;
    assert!(!db.is_connected().await);
}
