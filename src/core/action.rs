//! # Actions
//!
//! Everything that can happen to the list becomes an `Action`.
//! User presses Space on a row? That's `Action::ToggleDone(id)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the caller has to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(String),
    ToggleDone(u64),
    BeginEdit(u64),
    ApplyEdit { id: u64, text: String },
    CancelEdit(u64),
    Delete(u64),
    Quit,
}

/// Follow-up work for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the current list to storage.
    Persist,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Create(text) => {
            let todo = app.store.create(text);
            app.status_message = format!("Added #{}", todo.id);
            Effect::Persist
        }
        Action::ToggleDone(id) => {
            if app.store.toggle_done(id) {
                let done = app.store.get(id).is_some_and(|todo| todo.is_done);
                app.status_message = if done {
                    format!("Completed #{id}")
                } else {
                    format!("Reopened #{id}")
                };
            }
            Effect::Persist
        }
        Action::BeginEdit(id) => {
            if app.store.begin_edit(id) {
                app.status_message = format!("Editing #{id}");
            }
            Effect::None
        }
        Action::ApplyEdit { id, text } => {
            let deleting = text.is_empty();
            if app.store.apply_edit(id, text) {
                app.status_message = if deleting {
                    format!("Removed #{id}")
                } else {
                    format!("Updated #{id}")
                };
            }
            Effect::Persist
        }
        Action::CancelEdit(id) => {
            app.store.cancel_edit(id);
            app.status_message.clear();
            Effect::None
        }
        Action::Delete(id) => {
            if app.store.delete(id).is_some() {
                app.status_message = format!("Removed #{id}");
            }
            Effect::Persist
        }
        Action::Quit => Effect::Quit,
    }
}
