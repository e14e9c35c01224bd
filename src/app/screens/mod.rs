//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod capsules;
pub mod chatbot;
pub mod home;
pub mod journal;
pub mod menu;
pub mod notifications;
pub mod profile;
pub mod relaxation;
pub mod routines;

pub use capsules::CapsulesScreen;
pub use chatbot::ChatbotScreen;
pub use home::HomeScreen;
pub use journal::JournalScreen;
pub use menu::SideMenu;
pub use notifications::NotificationsScreen;
pub use profile::{ProfileScreen, ProfileStats};
pub use relaxation::RelaxationScreen;
pub use routines::RoutinesScreen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::config::Preference;
use crate::exercise::Exercise;

/// What a screen asks the app to do after handling a key
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// Key consumed, nothing else to do
    Handled,
    /// Key not used by the screen; the app applies global navigation
    Ignored,
    Navigate(AppState),
    StartExercise(Exercise),
    StopExercise,
    /// A journal entry was added
    JournalChanged,
    PreferenceToggled(Preference),
}

/// Move a wrapping selection one step back
pub(crate) fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index > 0 {
        index - 1
    } else {
        len - 1
    }
}

/// Move a wrapping selection one step forward
pub(crate) fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Title box with a subtitle line underneath
pub(crate) fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(subtitle.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[1]);
}

/// Key hint bar: pairs of (key, description)
pub(crate) fn render_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::raw(format!(" {}  ", description)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(help, area);
}

/// Popup area centered horizontally by percent and vertically by height
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn char_key(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    /// Render into an in-memory terminal and return the buffer
    pub fn render_to_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Flatten a buffer into one string per row
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }
}
