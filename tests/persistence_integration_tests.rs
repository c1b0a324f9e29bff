use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;
use tickoff::core::action::{Action, Effect, update};
use tickoff::core::persistence::{PersistenceAdapter, STORAGE_KEY, SaveWorker};
use tickoff::core::state::App;
use tickoff::core::storage::{FileStore, KeyValueStore};
use tickoff::core::store::TodoStore;
use tickoff::core::todo::Todo;

// ============================================================================
// Helper Functions
// ============================================================================

fn adapter_for(dir: &std::path::Path) -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(FileStore::new(dir)))
}

/// Starts an app the way `main` does: one load, then a save worker.
async fn start(dir: &std::path::Path) -> (App, SaveWorker) {
    let adapter = adapter_for(dir);
    let todos = adapter.load().await.unwrap_or_default();
    let worker = SaveWorker::spawn(adapter, Duration::ZERO);
    (App::new(TodoStore::from(todos)), worker)
}

/// Applies actions, scheduling a save after every persisting one.
fn apply(app: &mut App, worker: &SaveWorker, actions: Vec<Action>) {
    for action in actions {
        if update(app, action) == Effect::Persist {
            worker.schedule(app.store.todos().to_vec());
        }
    }
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_first_start_is_empty() {
    let dir = tempdir().unwrap();
    let (app, worker) = start(dir.path()).await;
    assert!(app.store.is_empty());
    worker.shutdown().await;
}

#[tokio::test]
async fn test_changes_survive_restart() {
    let dir = tempdir().unwrap();

    let (mut app, worker) = start(dir.path()).await;
    apply(
        &mut app,
        &worker,
        vec![
            Action::Create("buy milk".to_string()),
            Action::Create("call mom".to_string()),
            Action::Create("fix bike".to_string()),
            Action::ToggleDone(1),
            Action::BeginEdit(2),
            Action::ApplyEdit {
                id: 2,
                text: "fix bike tyre".to_string(),
            },
            Action::Delete(0),
        ],
    );
    let expected = app.store.todos().to_vec();
    worker.shutdown().await;

    let (app, worker) = start(dir.path()).await;
    assert_eq!(app.store.todos(), expected.as_slice());
    assert_eq!(
        expected,
        vec![
            Todo {
                id: 1,
                text: "call mom".to_string(),
                is_done: true,
                is_editing: false,
            },
            Todo::new(2, "fix bike tyre"),
        ]
    );
    worker.shutdown().await;
}

#[tokio::test]
async fn test_editing_flag_is_persisted() {
    let dir = tempdir().unwrap();

    let (mut app, worker) = start(dir.path()).await;
    apply(&mut app, &worker, vec![Action::Create("a".to_string())]);
    // BeginEdit alone does not persist; the next persisting change carries it
    apply(
        &mut app,
        &worker,
        vec![Action::BeginEdit(0), Action::Create("b".to_string())],
    );
    worker.shutdown().await;

    let (app, worker) = start(dir.path()).await;
    assert!(app.store.get(0).unwrap().is_editing);
    worker.shutdown().await;
}

#[tokio::test]
async fn test_id_reuse_after_restart() {
    let dir = tempdir().unwrap();

    let (mut app, worker) = start(dir.path()).await;
    apply(
        &mut app,
        &worker,
        vec![
            Action::Create("a".to_string()),
            Action::Create("b".to_string()),
            Action::Create("c".to_string()),
            Action::Delete(2),
        ],
    );
    worker.shutdown().await;

    let (mut app, worker) = start(dir.path()).await;
    apply(&mut app, &worker, vec![Action::Create("d".to_string())]);
    assert_eq!(app.store.todos().last().unwrap().id, 2);
    worker.shutdown().await;
}

// ============================================================================
// Storage Format Tests
// ============================================================================

#[tokio::test]
async fn test_file_contents_match_storage_shape() {
    let dir = tempdir().unwrap();
    let adapter = adapter_for(dir.path());
    adapter.save(&[Todo::new(0, "buy milk")]).await;

    let raw = std::fs::read_to_string(dir.path().join("todos.json")).unwrap();
    assert_eq!(
        raw,
        r#"[{"id":0,"text":"buy milk","isDone":false,"isEditing":false}]"#
    );
}

#[tokio::test]
async fn test_malformed_file_starts_empty() {
    let dir = tempdir().unwrap();
    FileStore::new(dir.path())
        .set(STORAGE_KEY, "not json at all")
        .await
        .unwrap();

    let (app, worker) = start(dir.path()).await;
    assert!(app.store.is_empty());
    worker.shutdown().await;
}

#[tokio::test]
async fn test_unwritable_data_dir_does_not_fail() {
    let dir = tempdir().unwrap();
    // A regular file where the data directory should be
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "").unwrap();

    let (mut app, worker) = start(&blocker).await;
    apply(&mut app, &worker, vec![Action::Create("a".to_string())]);
    worker.shutdown().await;

    assert_eq!(app.store.len(), 1);
}
