//! Journal screen
//!
//! A mood picker, a free-text reflection field and the list of saved
//! entries. Tab moves focus between the three areas.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::error::user_friendly_message;
use crate::journal::{mood_color, mood_label, Journal, Mood};

/// Which part of the form receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalFocus {
    Mood,
    Text,
    Entries,
}

impl JournalFocus {
    fn next(self) -> Self {
        match self {
            JournalFocus::Mood => JournalFocus::Text,
            JournalFocus::Text => JournalFocus::Entries,
            JournalFocus::Entries => JournalFocus::Mood,
        }
    }

    fn previous(self) -> Self {
        match self {
            JournalFocus::Mood => JournalFocus::Entries,
            JournalFocus::Text => JournalFocus::Mood,
            JournalFocus::Entries => JournalFocus::Text,
        }
    }
}

#[derive(Debug)]
pub struct JournalScreen {
    journal: Journal,
    focus: JournalFocus,
    mood_cursor: usize,
    selected_mood: Option<Mood>,
    text: String,
    entries_state: ListState,
    /// Feedback line and whether it is an error
    status: Option<(String, bool)>,
}

impl JournalScreen {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            focus: JournalFocus::Mood,
            mood_cursor: 0,
            selected_mood: None,
            text: String::new(),
            entries_state: ListState::default(),
            status: None,
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn focus(&self) -> JournalFocus {
        self.focus
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.selected_mood
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Typing goes to the text field instead of global shortcuts
    pub fn is_editing(&self) -> bool {
        self.focus == JournalFocus::Text
    }

    /// Validate the form and add an entry. Clears the form on success.
    pub fn save(&mut self, now: DateTime<Utc>) -> ScreenEvent {
        match self.journal.add(&self.text, self.selected_mood, now) {
            Ok(_) => {
                self.text.clear();
                self.selected_mood = None;
                self.focus = JournalFocus::Mood;
                self.status = Some(("Entrada guardada en tu diario".to_string(), false));
                ScreenEvent::JournalChanged
            }
            Err(e) => {
                self.status = Some((user_friendly_message(&e), true));
                ScreenEvent::Handled
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return ScreenEvent::Handled;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return ScreenEvent::Handled;
            }
            _ => {}
        }

        match self.focus {
            JournalFocus::Text => self.handle_text_key(key),
            JournalFocus::Mood => self.handle_mood_key(key),
            JournalFocus::Entries => self.handle_entries_key(key),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> ScreenEvent {
        match key.code {
            KeyCode::Enter => return self.save(Utc::now()),
            KeyCode::Esc => self.focus = JournalFocus::Mood,
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.push(c);
                self.status = None;
            }
            _ => {}
        }
        ScreenEvent::Handled
    }

    fn handle_mood_key(&mut self, key: KeyEvent) -> ScreenEvent {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Left | NavigationAction::Up => {
                self.mood_cursor = wrap_previous(self.mood_cursor, Mood::ALL.len());
            }
            NavigationAction::Right | NavigationAction::Down => {
                self.mood_cursor = wrap_next(self.mood_cursor, Mood::ALL.len());
            }
            NavigationAction::Select => {
                self.selected_mood = Some(Mood::ALL[self.mood_cursor]);
                self.focus = JournalFocus::Text;
                self.status = None;
            }
            _ => return ScreenEvent::Ignored,
        }
        ScreenEvent::Handled
    }

    fn handle_entries_key(&mut self, key: KeyEvent) -> ScreenEvent {
        let len = self.journal.len();
        let current = self.entries_state.selected().unwrap_or(0);
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up if len > 0 => {
                self.entries_state.select(Some(wrap_previous(current, len)));
            }
            NavigationAction::Down if len > 0 => {
                self.entries_state.select(Some(wrap_next(current, len)));
            }
            NavigationAction::Up | NavigationAction::Down => {}
            _ => return ScreenEvent::Ignored,
        }
        ScreenEvent::Handled
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title
                Constraint::Length(3), // Mood picker
                Constraint::Length(5), // Text input
                Constraint::Length(1), // Status
                Constraint::Min(5),    // Entries
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        render_header(f, chunks[0], "Diario Emocional", "¿Cómo te sientes hoy?");
        self.render_moods(f, chunks[1]);
        self.render_input(f, chunks[2]);
        self.render_status(f, chunks[3]);
        self.render_entries(f, chunks[4]);

        let hints: &[(&str, &str)] = match self.focus {
            JournalFocus::Text => &[("Enter", "Guardar"), ("Tab", "Siguiente"), ("Esc", "Terminar")],
            _ => &[("←→", "Ánimo"), ("Enter", "Elegir"), ("Tab", "Siguiente"), ("Esc", "Volver")],
        };
        render_help(f, chunks[5], hints);
    }

    fn focus_style(&self, focus: JournalFocus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn render_moods(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (index, mood) in Mood::ALL.iter().enumerate() {
            let mut style = Style::default().fg(mood.color());
            if self.selected_mood == Some(*mood) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if self.focus == JournalFocus::Mood && index == self.mood_cursor {
                style = style.bg(Color::DarkGray);
            }
            spans.push(Span::styled(format!(" {} ", mood.label()), style));
            spans.push(Span::raw(" "));
        }

        let moods = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Estado de ánimo")
                .border_style(self.focus_style(JournalFocus::Mood)),
        );
        f.render_widget(moods, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let content = if self.text.is_empty() && !self.is_editing() {
            Line::from(Span::styled(
                "Escribe sobre tu día, tus pensamientos o sentimientos...",
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.is_editing() {
            Line::from(format!("{}▏", self.text))
        } else {
            Line::from(self.text.as_str())
        };

        let input = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Reflexión")
                    .border_style(self.focus_style(JournalFocus::Text)),
            );
        f.render_widget(input, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if let Some((message, is_error)) = &self.status {
            let color = if *is_error { Color::Red } else { Color::Green };
            let status = Paragraph::new(message.as_str())
                .style(Style::default().fg(color))
                .alignment(Alignment::Center);
            f.render_widget(status, area);
        }
    }

    fn render_entries(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Mis Entradas ({})", self.journal.len()))
            .border_style(self.focus_style(JournalFocus::Entries));

        if self.journal.is_empty() {
            let empty = Paragraph::new("Aún no tienes entradas. ¡Escribe la primera!")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .journal
            .entries()
            .iter()
            .map(|entry| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(entry.date_label(), Style::default().fg(Color::Gray)),
                        Span::raw("  "),
                        Span::styled(
                            mood_label(entry.mood),
                            Style::default().fg(mood_color(entry.mood)),
                        ),
                    ]),
                    Line::from(format!("  {}", entry.text)),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, area, &mut self.entries_state);
    }
}

impl Default for JournalScreen {
    fn default() -> Self {
        Self::new(Journal::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{buffer_text, char_key, key, render_to_buffer};
    use crate::journal::INCOMPLETE_FORM_MESSAGE;

    fn type_text(screen: &mut JournalScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(char_key(c));
        }
    }

    #[test]
    fn test_pick_mood_then_write_and_save() {
        let mut screen = JournalScreen::default();
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.selected_mood(), Some(Mood::Sad));
        assert!(screen.is_editing());

        type_text(&mut screen, "hoy fue largo");
        assert_eq!(screen.text(), "hoy fue largo");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenEvent::JournalChanged);

        assert_eq!(screen.journal().len(), 1);
        assert_eq!(screen.journal().entries()[0].mood, Some(Mood::Sad));
        assert!(screen.text().is_empty());
        assert_eq!(screen.selected_mood(), None);
    }

    #[test]
    fn test_incomplete_form_shows_message() {
        let mut screen = JournalScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "sin ánimo elegido");

        assert_eq!(screen.save(Utc::now()), ScreenEvent::Handled);
        assert_eq!(screen.status(), Some(INCOMPLETE_FORM_MESSAGE));
        assert!(screen.journal().is_empty());
        assert_eq!(screen.text(), "sin ánimo elegido");
    }

    #[test]
    fn test_text_focus_captures_shortcuts() {
        let mut screen = JournalScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "qm");
        assert_eq!(screen.text(), "qm");

        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.text(), "q");

        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.focus(), JournalFocus::Mood);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenEvent::Ignored);
    }

    #[test]
    fn test_focus_cycles() {
        let mut screen = JournalScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), JournalFocus::Entries);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), JournalFocus::Mood);
        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.focus(), JournalFocus::Entries);
    }

    #[test]
    fn test_render_empty_and_filled() {
        let mut screen = JournalScreen::default();
        let buffer = render_to_buffer(100, 30, |f| screen.render(f));
        assert!(buffer_text(&buffer).contains("Aún no tienes entradas"));

        screen.handle_key(key(KeyCode::Enter));
        type_text(&mut screen, "caminé por el parque");
        screen.handle_key(key(KeyCode::Enter));
        let buffer = render_to_buffer(100, 30, |f| screen.render(f));
        let text = buffer_text(&buffer);
        assert!(text.contains("caminé por el parque"));
        assert!(text.contains("Mis Entradas (1)"));
    }
}
