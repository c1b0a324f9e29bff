//! # Todo Store
//!
//! Owns the ordered list and every mutation on it. Nothing here does I/O:
//! whether a mutation needs to be written out is decided in `action::update`.
//!
//! ```text
//! TodoStore
//! └── todos: Vec<Todo>   // insertion order, ids unique
//! ```

use log::debug;

use crate::core::todo::{Todo, next_id};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoStore {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of items not yet marked done.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.is_done).count()
    }

    /// Append a new item. Any text is accepted here, including empty.
    pub fn create(&mut self, text: impl Into<String>) -> Todo {
        let todo = Todo::new(next_id(&self.todos), text);
        debug!("Created todo {}", todo.id);
        self.todos.push(todo.clone());
        todo
    }

    /// Flip the done flag. Returns false if no item has this id.
    pub fn toggle_done(&mut self, id: u64) -> bool {
        self.with_todo(id, |todo| todo.is_done = !todo.is_done)
    }

    pub fn begin_edit(&mut self, id: u64) -> bool {
        self.with_todo(id, |todo| todo.is_editing = true)
    }

    /// Leave edit mode without touching the text.
    pub fn cancel_edit(&mut self, id: u64) -> bool {
        self.with_todo(id, |todo| todo.is_editing = false)
    }

    /// Commit new text and leave edit mode. Empty text deletes the item.
    pub fn apply_edit(&mut self, id: u64, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.is_empty() {
            return self.delete(id).is_some();
        }
        self.with_todo(id, |todo| {
            todo.text = text;
            todo.is_editing = false;
        })
    }

    pub fn delete(&mut self, id: u64) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        debug!("Deleted todo {}", id);
        Some(self.todos.remove(index))
    }

    fn with_todo(&mut self, id: u64, f: impl FnOnce(&mut Todo)) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                f(todo);
                true
            }
            None => false,
        }
    }
}
