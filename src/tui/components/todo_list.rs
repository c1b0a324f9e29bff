//! # TodoList Component
//!
//! The list of items under the compose field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TodoListState` lives in `TuiState` (selection, scroll offset)
//! - `TodoList` is created each frame with borrowed state and the todos as props
//!
//! Rows in edit mode cannot be toggled or removed from here; they have to be
//! committed or cancelled through the edit field first.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, HighlightSpacing, List, ListItem, ListState, Padding, Paragraph,
};

use crate::core::todo::Todo;
use crate::tui::event::TuiEvent;

const HIGHLIGHT_SYMBOL: &str = "> ";
/// Width of the "[x] " / "✎   " marker in front of each row
const MARKER_WIDTH: usize = 4;

/// Persistent state for the list.
pub struct TodoListState {
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Toggle(u64),
    BeginEdit(u64),
    Remove(u64),
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Keep the selection in range after the list changed length.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Select the row holding `id`, if present.
    #[cfg(test)]
    pub fn select_id(&mut self, todos: &[Todo], id: u64) {
        if let Some(index) = todos.iter().position(|todo| todo.id == id) {
            self.selected = index;
        }
    }

    pub fn selected_todo<'t>(&self, todos: &'t [Todo]) -> Option<&'t Todo> {
        todos.get(self.selected)
    }

    /// Handle a key event in browse mode, returning a ListEvent if the row should act.
    pub fn handle_event(&mut self, event: &TuiEvent, todos: &[Todo]) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !todos.is_empty() {
                    self.selected = (self.selected + 1).min(todos.len() - 1);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.selected = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.select_last(todos.len());
                None
            }
            TuiEvent::InputChar(' ') => self
                .selected_todo(todos)
                .filter(|todo| !todo.is_editing)
                .map(|todo| ListEvent::Toggle(todo.id)),
            TuiEvent::Submit => self
                .selected_todo(todos)
                .map(|todo| ListEvent::BeginEdit(todo.id)),
            TuiEvent::InputChar('d') | TuiEvent::Delete => self
                .selected_todo(todos)
                .filter(|todo| !todo.is_editing)
                .map(|todo| ListEvent::Remove(todo.id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the list.
pub struct TodoList<'a> {
    state: &'a mut TodoListState,
    todos: &'a [Todo],
    focused: bool,
}

impl<'a> TodoList<'a> {
    pub fn new(state: &'a mut TodoListState, todos: &'a [Todo], focused: bool) -> Self {
        Self {
            state,
            todos,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.todos.is_empty() {
            let empty = Paragraph::new("Nothing to do.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let block = block
            .title(" Your todos ")
            .title_alignment(Alignment::Center);

        // Borders::TOP only, so width loses just the padding
        let text_width = (area.width as usize)
            .saturating_sub(2 + HIGHLIGHT_SYMBOL.len() + MARKER_WIDTH)
            .max(1);

        let items: Vec<ListItem> = self
            .todos
            .iter()
            .map(|todo| ListItem::new(row_lines(todo, text_width)))
            .collect();

        let (symbol, highlight) = if self.focused {
            (
                HIGHLIGHT_SYMBOL,
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            ("  ", Style::default())
        };

        let list = List::new(items)
            .block(block)
            .highlight_symbol(symbol)
            .highlight_style(highlight)
            .highlight_spacing(HighlightSpacing::Always);

        self.state.clamp(self.todos.len());
        self.state.list_state.select(Some(self.state.selected));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Marker, wrapped text, and remove hint for one row.
fn row_lines(todo: &Todo, text_width: usize) -> Vec<Line<'static>> {
    let (marker, text_style) = if todo.is_editing {
        ("✎   ", Style::default().fg(Color::Yellow))
    } else if todo.is_done {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::White))
    };

    let wrapped: Vec<String> = if todo.text.is_empty() {
        vec![String::new()]
    } else {
        textwrap::wrap(&todo.text, text_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    };

    let mut lines: Vec<Line<'static>> = wrapped
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { marker } else { "    " };
            Line::from(vec![
                Span::styled(lead, Style::default().fg(Color::Cyan)),
                Span::styled(text, text_style),
            ])
        })
        .collect();

    if todo.is_editing {
        lines.push(Line::from(Span::styled(
            "    editing (remove disabled)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_todos;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(todos: &[Todo], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TodoListState::new();
        terminal
            .draw(|f| TodoList::new(&mut state, todos, true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        state.handle_event(&TuiEvent::CursorUp, &todos);
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown, &todos);
        }
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorHome, &todos);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_space_toggles_selected() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        state.handle_event(&TuiEvent::CursorDown, &todos);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' '), &todos),
            Some(ListEvent::Toggle(1))
        );
    }

    #[test]
    fn test_enter_begins_edit() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &todos),
            Some(ListEvent::BeginEdit(0))
        );
    }

    #[test]
    fn test_remove_and_toggle_disabled_while_editing() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        state.select_id(&todos, 4);
        assert_eq!(state.selected, 2);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('d'), &todos), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar(' '), &todos), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &todos),
            Some(ListEvent::BeginEdit(4))
        );
    }

    #[test]
    fn test_delete_key_removes() {
        let todos = sample_todos();
        let mut state = TodoListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Delete, &todos),
            Some(ListEvent::Remove(0))
        );
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let mut state = TodoListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[]), None);
        state.handle_event(&TuiEvent::CursorDown, &[]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_render_empty_list() {
        let text = render_to_string(&[], 40, 5);
        assert!(text.contains("Nothing to do."));
        assert!(!text.contains("Your todos"));
    }

    #[test]
    fn test_render_rows() {
        let text = render_to_string(&sample_todos(), 60, 10);
        assert!(text.contains("Your todos"));
        assert!(text.contains("[ ] buy milk"));
        assert!(text.contains("[x] call mom"));
        assert!(text.contains("fix bike"));
        assert!(text.contains("remove disabled"));
    }

    #[test]
    fn test_row_lines_wrap_long_text() {
        let todo = Todo::new(0, "one two three four five");
        let lines = row_lines(&todo, 10);
        assert!(lines.len() > 1);
    }
}
