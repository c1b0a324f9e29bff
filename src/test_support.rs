//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use async_trait::async_trait;

use crate::core::state::App;
use crate::core::storage::KeyValueStore;
use crate::core::store::TodoStore;
use crate::core::todo::Todo;

/// A store whose every read and write fails.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read refused"))
    }

    async fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused"))
    }
}

/// Three todos with a mix of flags set.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new(0, "buy milk"),
        Todo {
            id: 1,
            text: "call mom".to_string(),
            is_done: true,
            is_editing: false,
        },
        Todo {
            id: 4,
            text: "fix bike".to_string(),
            is_done: false,
            is_editing: true,
        },
    ]
}

/// Creates a test App hydrated with `sample_todos()`.
pub fn test_app() -> App {
    App::new(TodoStore::from(sample_todos()))
}
