use chrono::NaiveDate;
use tasklens::model::TaskList;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_add_prepends_trimmed_task() {
    let mut list = TaskList::new();
    let id = list.add("  buy milk  ", date(2024, 1, 5));

    assert!(id.is_some());
    assert_eq!(list.len(), 1);
    let task = &list.tasks()[0];
    assert_eq!(task.title, "buy milk");
    assert_eq!(task.due_ymd(), "2024-01-05");
    assert_eq!(task.id, id.unwrap());
}

#[test]
fn test_add_empty_title_is_noop() {
    let mut list = TaskList::new();
    assert!(list.add("", date(2024, 1, 5)).is_none());
    assert!(list.add("   ", date(2024, 1, 5)).is_none());
    assert!(list.add("\t\n", date(2024, 1, 5)).is_none());
    assert!(list.is_empty());
}

#[test]
fn test_newest_first_order() {
    let mut list = TaskList::new();
    list.add("A", date(2024, 1, 1));
    list.add("B", date(2024, 1, 2));

    let titles: Vec<&str> = list.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A"]);
}

#[test]
fn test_remove_present_id() {
    let mut list = TaskList::new();
    let a = list.add("A", date(2024, 1, 1)).unwrap();
    let b = list.add("B", date(2024, 1, 2)).unwrap();

    list.remove(a);

    assert_eq!(list.len(), 1);
    assert!(list.get(a).is_none());
    assert!(list.get(b).is_some());
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut list = TaskList::new();
    list.add("A", date(2024, 1, 1));

    list.remove(Uuid::new_v4());
    assert_eq!(list.len(), 1);

    // Idempotent: removing twice leaves the list unchanged
    let a = list.tasks()[0].id;
    list.remove(a);
    list.remove(a);
    assert!(list.is_empty());
}

#[test]
fn test_ids_are_unique() {
    let mut list = TaskList::new();
    for i in 0..50 {
        list.add(&format!("task {i}"), date(2024, 1, 1));
    }

    let mut ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_tasks_are_immutable_snapshots() {
    let mut list = TaskList::new();
    let id = list.add("write report", date(2025, 3, 14)).unwrap();

    // Adding more tasks never touches an existing task
    list.add("another", date(2025, 3, 15));
    let task = list.get(id).unwrap();
    assert_eq!(task.title, "write report");
    assert_eq!(task.due_ymd(), "2025-03-14");
}
