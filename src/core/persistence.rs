//! # Persistence
//!
//! Saves and restores the whole todo list as one JSON value under a fixed
//! key. Both directions swallow their failures: a bad read means "nothing
//! saved yet", a bad write is logged and forgotten.
//!
//! Writes go through `SaveWorker`, a background task that only ever writes
//! the newest snapshot it has been handed:
//!
//! ```text
//! schedule(v1) ─┐
//! schedule(v2) ─┼─► [channel] ─► debounce ─► drain, keep v3 ─► save(v3)
//! schedule(v3) ─┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::storage::KeyValueStore;
use crate::core::todo::{Todo, duplicate_id};

/// The single key the list is stored under.
pub const STORAGE_KEY: &str = "todos";

#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the saved list. `None` covers "never saved", read errors and
    /// values that don't parse as a list of todos with unique ids below
    /// `u64::MAX`.
    pub async fn load(&self) -> Option<Vec<Todo>> {
        let raw = match self.store.get(STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved todos found");
                return None;
            }
            Err(e) => {
                warn!("Failed to read saved todos: {}", e);
                return None;
            }
        };

        let todos = match serde_json::from_str::<Vec<Todo>>(&raw) {
            Ok(todos) => todos,
            Err(e) => {
                warn!("Ignoring malformed saved todos: {}", e);
                return None;
            }
        };

        if let Some(id) = duplicate_id(&todos) {
            warn!("Ignoring saved todos: id {} appears more than once", id);
            return None;
        }
        if todos.iter().any(|todo| todo.id == u64::MAX) {
            warn!("Ignoring saved todos: id {} is out of range", u64::MAX);
            return None;
        }

        info!("Loaded {} todos", todos.len());
        Some(todos)
    }

    /// Overwrite the saved list. Errors are logged, never returned.
    pub async fn save(&self, todos: &[Todo]) {
        let json = match serde_json::to_string(todos) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize todos: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &json).await {
            warn!("Failed to save todos: {}", e);
        } else {
            debug!("Saved {} todos", todos.len());
        }
    }
}

/// Background writer. Each scheduled snapshot supersedes any still pending.
pub struct SaveWorker {
    tx: mpsc::UnboundedSender<Vec<Todo>>,
    handle: JoinHandle<()>,
}

impl SaveWorker {
    /// Spawn the writer task. Must be called from within a tokio runtime.
    pub fn spawn(adapter: PersistenceAdapter, debounce: Duration) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Todo>>();

        let handle = tokio::spawn(async move {
            while let Some(mut todos) = rx.recv().await {
                if !debounce.is_zero() {
                    tokio::time::sleep(debounce).await;
                }

                let mut superseded = 0usize;
                while let Ok(newer) = rx.try_recv() {
                    todos = newer;
                    superseded += 1;
                }
                if superseded > 0 {
                    debug!("Coalesced {} pending saves", superseded);
                }

                adapter.save(&todos).await;
            }
            debug!("Save worker stopped");
        });

        Self { tx, handle }
    }

    /// Queue a snapshot for writing. Never blocks.
    pub fn schedule(&self, todos: Vec<Todo>) {
        if self.tx.send(todos).is_err() {
            warn!("Failed to schedule save: worker stopped");
        }
    }

    /// Close the queue and wait until the last snapshot has been written.
    pub async fn shutdown(self) {
        let Self { tx, handle } = self;
        drop(tx);
        if let Err(e) = handle.await {
            warn!("Save worker ended abnormally: {}", e);
        }
    }
}
