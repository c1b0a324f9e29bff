use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{INPUT_HEIGHT, TitleBar, TodoList};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(INPUT_HEIGHT), Min(0), Length(1)]);
    let [title_area, input_area, list_area, help_area] = layout.areas(frame.area());

    TitleBar {
        remaining: app.store.remaining(),
        total: app.store.len(),
        status_message: &app.status_message,
    }
    .render(frame, title_area);

    // The edit field takes the compose field's place while an edit is open
    tui.compose.focused = tui.input_mode == InputMode::Compose;
    match tui.edit.as_mut() {
        Some(edit) => edit.input.render(frame, input_area),
        None => tui.compose.render(frame, input_area),
    }

    let list_focused = tui.input_mode != InputMode::Compose;
    TodoList::new(&mut tui.list, app.store.todos(), list_focused).render(frame, list_area);

    frame.render_widget(
        Line::styled(help_text(tui.input_mode), Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn help_text(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Compose => " Enter Add  Esc/↓ List  Ctrl+C Quit ",
        InputMode::Browse => " Space Done  Enter Edit  d Remove  Esc Back  Ctrl+C Quit ",
        InputMode::Edit => " Enter Save (empty removes)  Esc Cancel ",
    }
}
