//! # Todo Records
//!
//! The one record type the app knows about. Field names on the wire are
//! camelCase (`isDone`, `isEditing`) so the stored list keeps its
//! established shape:
//!
//! ```text
//! [{"id":0,"text":"buy milk","isDone":false,"isEditing":false}, ...]
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single item in the list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub is_done: bool,
    /// Transient UI flag. Persisted alongside the rest of the record.
    pub is_editing: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_done: false,
            is_editing: false,
        }
    }
}

/// Next id for a list: one past the current maximum, or 0 for an empty list.
///
/// Ids freed by deleting the highest item are handed out again. If the
/// maximum is already `u64::MAX`, the lowest unused id is used instead.
pub fn next_id(todos: &[Todo]) -> u64 {
    let max = todos.iter().fold(None, |max: Option<u64>, todo| {
        Some(max.map_or(todo.id, |m| m.max(todo.id)))
    });
    match max {
        None => 0,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(todos)),
    }
}

/// Smallest id not taken by any item. A list of n items always leaves one
/// free in `0..=n`.
fn lowest_free_id(todos: &[Todo]) -> u64 {
    let taken: HashSet<u64> = todos.iter().map(|todo| todo.id).collect();
    (0..).find(|id| !taken.contains(id)).unwrap_or_default()
}

/// The first id that appears more than once, if any.
pub fn duplicate_id(todos: &[Todo]) -> Option<u64> {
    let mut seen = HashSet::with_capacity(todos.len());
    todos
        .iter()
        .map(|todo| todo.id)
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty_list_is_zero() {
        assert_eq!(next_id(&[]), 0);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let todos = vec![Todo::new(3, "a"), Todo::new(7, "b"), Todo::new(1, "c")];
        assert_eq!(next_id(&todos), 8);
    }

    #[test]
    fn test_next_id_ignores_gaps() {
        let todos = vec![Todo::new(0, "a"), Todo::new(5, "b")];
        assert_eq!(next_id(&todos), 6);
    }

    #[test]
    fn test_next_id_at_u64_max_uses_lowest_free_id() {
        let todos = vec![Todo::new(u64::MAX, "a"), Todo::new(0, "b"), Todo::new(2, "c")];
        assert_eq!(next_id(&todos), 1);
    }

    #[test]
    fn test_duplicate_id() {
        assert_eq!(duplicate_id(&[Todo::new(0, "a"), Todo::new(1, "b")]), None);
        let todos = vec![Todo::new(1, "a"), Todo::new(0, "b"), Todo::new(1, "c")];
        assert_eq!(duplicate_id(&todos), Some(1));
    }

    #[test]
    fn test_todo_serializes_with_camel_case_fields() {
        let todo = Todo::new(2, "water plants");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"text":"water plants","isDone":false,"isEditing":false}"#
        );
    }

    #[test]
    fn test_todo_missing_field_fails_to_parse() {
        let json = r#"{"id":2,"text":"water plants","isDone":false}"#;
        assert!(serde_json::from_str::<Todo>(json).is_err());
    }
}
