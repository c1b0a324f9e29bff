//! # TitleBar Component
//!
//! Top status bar: app name, how many items are left, and the transient
//! status message from `App`.
//!
//! Stateless. Every field is a prop filled in by the parent each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     remaining: app.store.remaining(),
//!     total: app.store.len(),
//!     status_message: &app.status_message,
//! };
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub remaining: usize,
    pub total: usize,
    pub status_message: &'a str,
}

impl TitleBar<'_> {
    fn counts(&self) -> String {
        if self.total == 0 {
            "empty".to_string()
        } else {
            format!("{} of {} left", self.remaining, self.total)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Todo App",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", self.counts())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
