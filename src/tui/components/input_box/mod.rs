//! # InputBox Component
//!
//! Single-line text field, used twice: once for composing new todos and once
//! for editing an existing one inline.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Display the buffer, or a placeholder when empty
//!
//! ## State Management
//!
//! The buffer is internal state. Title, placeholder and focus are props.
//! Cursor position and horizontal scroll are encapsulated in `CursorState`.
//!
//! Submitting never validates: an empty buffer submits an empty string and
//! the caller decides what that means.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary, visible_slice};

/// Total height of the rendered box (borders + one line of text)
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). May be empty.
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Block title (Prop)
    pub title: &'static str,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: &'static str,
    /// Whether keystrokes currently go here (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(title: &'static str, placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            title,
            placeholder,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// A box prefilled with `text`, cursor at the end.
    pub fn with_text(title: &'static str, placeholder: &'static str, text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            title,
            placeholder,
            focused: true,
            cursor: CursorState::at_end(text),
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.cursor.update_scroll(&self.buffer, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(self.title);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let text_style = if self.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Paragraph::new(visible_slice(&self.buffer, self.cursor.scroll, width))
                .style(text_style)
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold pasted newlines into spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor.reset();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
