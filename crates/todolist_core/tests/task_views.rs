use todolist_core::view::projection::{EMPTY_DESCRIPTION_TEXT, EMPTY_LIST_HINT, EMPTY_LIST_TITLE};
use todolist_core::{detail_view, list_view, Route, TaskPriority, TaskStatistics, TaskStore};
use uuid::Uuid;

#[test]
fn list_view_of_seeded_store_reports_statistics_and_rows() {
    let store = TaskStore::seeded();
    let view = list_view(store.list());

    assert_eq!(
        view.statistics,
        TaskStatistics {
            total: 3,
            completed: 1,
            pending: 2,
        }
    );
    assert!(view.empty_state.is_none());
    let titles = view
        .items
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Study Rust", "Buy groceries", "Exercise"]);
    assert_eq!(view.items[0].priority_label, "HIGH");
    assert!(view.items[2].strikethrough);
    assert!(!view.items[0].strikethrough);
}

#[test]
fn list_view_of_empty_store_carries_empty_state() {
    let view = list_view(TaskStore::new().list());

    assert!(view.items.is_empty());
    assert_eq!(view.statistics, TaskStatistics::default());
    let empty = view.empty_state.expect("empty list should show empty state");
    assert_eq!(empty.title, EMPTY_LIST_TITLE);
    assert_eq!(empty.hint, EMPTY_LIST_HINT);
}

#[test]
fn list_row_hides_blank_description() {
    let mut store = TaskStore::new();
    store.add("No notes", "   ", TaskPriority::Low);
    store.add("With notes", "line one\nline two", TaskPriority::Low);

    let view = list_view(store.list());
    assert_eq!(view.items[0].description_preview, None);
    assert_eq!(
        view.items[1].description_preview.as_deref(),
        Some("line one line two")
    );
}

#[test]
fn detail_view_follows_toggle_and_delete() {
    let mut store = TaskStore::new();
    let id = store.add("Call dentist", "", TaskPriority::Medium).unwrap();

    let pending = detail_view(&store, id, 0).expect("detail should exist");
    assert_eq!(pending.title, "Call dentist");
    assert_eq!(pending.description, EMPTY_DESCRIPTION_TEXT);
    assert_eq!(pending.status_label, "Pending");
    assert_eq!(pending.priority_label, "MEDIUM");
    assert_eq!(pending.toggle_action_label, "Complete");
    assert_eq!(pending.created_at_label.len(), "dd/mm/yyyy hh:mm".len());

    store.toggle_completion(id);
    let done = detail_view(&store, id, 0).expect("detail should exist");
    assert!(done.completed);
    assert_eq!(done.status_label, "Completed");
    assert_eq!(done.toggle_action_label, "Mark as pending");

    store.delete(id);
    assert!(detail_view(&store, id, 0).is_none());
}

#[test]
fn detail_route_for_unknown_id_renders_blank() {
    let store = TaskStore::seeded();
    let route = Route::parse(&format!("task_detail/{}", Uuid::new_v4())).unwrap();

    let Route::TaskDetail(id) = route else {
        panic!("expected detail route");
    };
    assert!(detail_view(&store, id, 0).is_none());
}

#[test]
fn list_view_serializes_for_host_snapshot() {
    let store = TaskStore::seeded();
    let json = serde_json::to_value(list_view(store.list())).unwrap();

    assert_eq!(json["statistics"]["total"], 3);
    assert_eq!(json["statistics"]["pending"], 2);
    assert_eq!(json["items"].as_array().map(Vec::len), Some(3));
    assert!(json["empty_state"].is_null());
}
