//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Modes
//!
//! - **Compose**: typing goes to the "new todo" field. Esc or ↓ moves to the list.
//! - **Browse**: arrow keys select rows; Space, Enter and `d` act on the selected row.
//!   Typing any other character jumps back to Compose.
//! - **Edit**: typing goes to the inline edit field. Enter commits, Esc cancels.
//!
//! ## Persistence
//!
//! The loop never waits on storage. Whenever `update()` returns
//! `Effect::Persist`, a snapshot of the list is handed to the `SaveWorker`.
//! One more snapshot is handed over on exit.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::persistence::SaveWorker;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ListEvent, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const COMPOSE_TITLE: &str = " New ";
const COMPOSE_PLACEHOLDER: &str = "Type your new todo";
const EDIT_TITLE: &str = " Edit your todo ";
const EDIT_PLACEHOLDER: &str = "Empty removes this todo";

/// Idle poll interval. Nothing animates, so this only bounds shutdown latency.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Compose,
    Browse,
    Edit,
}

/// An open inline edit.
pub struct EditSession {
    pub id: u64,
    pub input: InputBox,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub compose: InputBox,
    pub list: TodoListState,
    pub input_mode: InputMode,
    pub edit: Option<EditSession>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            compose: InputBox::new(COMPOSE_TITLE, COMPOSE_PLACEHOLDER),
            list: TodoListState::new(),
            input_mode: InputMode::Compose, // User expects to type immediately
            edit: None,
        }
    }

    fn close_edit(&mut self) {
        self.edit = None;
        self.input_mode = InputMode::Browse;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Run the event loop until the user quits. Every persisting change, and the
/// final state, is handed to `saver`; the caller shuts it down afterwards.
pub fn run(app: &mut App, saver: &SaveWorker) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    tui.list.select_last(app.store.len());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_tui_event(app, &mut tui, event) {
                Effect::Persist => saver.schedule(app.store.todos().to_vec()),
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    // Always leave the final state behind
    saver.schedule(app.store.todos().to_vec());

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Event loop finished with {} todos", app.store.len());
    result
}

/// Route one terminal event through the current mode and into `update()`.
pub fn handle_tui_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Compose => match event {
            TuiEvent::Escape | TuiEvent::CursorDown => {
                tui.input_mode = InputMode::Browse;
                Effect::None
            }
            _ => match tui.compose.handle_event(&event) {
                Some(InputEvent::Submit(text)) => {
                    let effect = update(app, Action::Create(text));
                    tui.list.select_last(app.store.len());
                    effect
                }
                Some(InputEvent::ContentChanged) | None => Effect::None,
            },
        },
        InputMode::Browse => match event {
            TuiEvent::Escape => {
                tui.input_mode = InputMode::Compose;
                Effect::None
            }
            // Typing jumps back to the compose field, except the row keys
            TuiEvent::InputChar(c) if c != ' ' && c != 'd' => {
                tui.input_mode = InputMode::Compose;
                tui.compose.handle_event(&event);
                Effect::None
            }
            TuiEvent::Paste(_) => {
                tui.input_mode = InputMode::Compose;
                tui.compose.handle_event(&event);
                Effect::None
            }
            _ => {
                let todos = app.store.todos();
                match tui.list.handle_event(&event, todos) {
                    Some(ListEvent::Toggle(id)) => update(app, Action::ToggleDone(id)),
                    Some(ListEvent::Remove(id)) => {
                        let effect = update(app, Action::Delete(id));
                        tui.list.clamp(app.store.len());
                        effect
                    }
                    Some(ListEvent::BeginEdit(id)) => begin_edit(app, tui, id),
                    None => Effect::None,
                }
            }
        },
        InputMode::Edit => {
            let Some(edit) = tui.edit.as_mut() else {
                warn!("Edit mode without an open edit, returning to list");
                tui.input_mode = InputMode::Browse;
                return Effect::None;
            };
            let id = edit.id;

            if matches!(event, TuiEvent::Escape) {
                tui.close_edit();
                return update(app, Action::CancelEdit(id));
            }

            match edit.input.handle_event(&event) {
                Some(InputEvent::Submit(text)) => {
                    tui.close_edit();
                    let effect = update(app, Action::ApplyEdit { id, text });
                    tui.list.clamp(app.store.len());
                    effect
                }
                Some(InputEvent::ContentChanged) | None => Effect::None,
            }
        }
    }
}

fn begin_edit(app: &mut App, tui: &mut TuiState, id: u64) -> Effect {
    let effect = update(app, Action::BeginEdit(id));
    if let Some(todo) = app.store.get(id) {
        debug!("Opening editor for todo {}", id);
        tui.edit = Some(EditSession {
            id,
            input: InputBox::with_text(EDIT_TITLE, EDIT_PLACEHOLDER, &todo.text),
        });
        tui.input_mode = InputMode::Edit;
    }
    effect
}
