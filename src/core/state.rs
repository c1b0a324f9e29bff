//! # Application State
//!
//! Core business state for tickoff. Domain data only, no TUI types.
//! Presentation state (focus, cursor, selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: TodoStore         // the todo list
//! └── status_message: String   // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::store::TodoStore;

pub struct App {
    pub store: TodoStore,
    pub status_message: String,
}

impl App {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            status_message: String::from("Welcome!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome!");
        assert_eq!(app.store.len(), 3);
    }
}
