//! Profile screen
//!
//! User details, activity statistics and preference toggles. Toggles are
//! reported to the app, which owns and saves the settings.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::config::{Preference, Settings};

/// Numbers shown in the statistics panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    /// Exercises finished this session
    pub completed_activities: u32,
    pub journal_entries: usize,
    pub routines_done: usize,
}

#[derive(Debug)]
pub struct ProfileScreen {
    selected_index: usize,
    list_state: ListState,
    status: Option<String>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            status: None,
        }
    }

    pub fn selected_preference(&self) -> Preference {
        Preference::ALL[self.selected_index]
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        let len = Preference::ALL.len();
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.selected_index = wrap_previous(self.selected_index, len),
            NavigationAction::Down => self.selected_index = wrap_next(self.selected_index, len),
            NavigationAction::Select => {
                self.status = None;
                return ScreenEvent::PreferenceToggled(self.selected_preference());
            }
            _ => return ScreenEvent::Ignored,
        }
        self.list_state.select(Some(self.selected_index));
        ScreenEvent::Handled
    }

    pub fn render(&mut self, f: &mut Frame, settings: &Settings, stats: &ProfileStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title
                Constraint::Length(5), // User info
                Constraint::Length(5), // Stats
                Constraint::Min(6),    // Preferences
                Constraint::Length(1), // Status
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        render_header(f, chunks[0], "Mi Perfil", "Tu espacio personal");
        Self::render_user(f, chunks[1], settings);
        Self::render_stats(f, chunks[2], stats);
        self.render_preferences(f, chunks[3], settings);

        if let Some(status) = &self.status {
            let status = Paragraph::new(status.as_str())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(status, chunks[4]);
        }

        render_help(
            f,
            chunks[5],
            &[("↑↓", "Navegar"), ("Enter", "Cambiar"), ("Esc", "Volver"), ("M", "Menú")],
        );
    }

    fn render_user(f: &mut Frame, area: Rect, settings: &Settings) {
        let info = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("👤 {}", settings.display_name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(settings.email.as_str()),
            Line::from(Span::styled(
                format!("Miembro desde {}", settings.member_since),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Cuenta"));
        f.render_widget(info, area);
    }

    fn render_stats(f: &mut Frame, area: Rect, stats: &ProfileStats) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let cells = [
            (stats.completed_activities.to_string(), "Actividades Completadas"),
            (stats.journal_entries.to_string(), "Entradas de Diario"),
            (stats.routines_done.to_string(), "Rutinas de Hoy"),
        ];
        for ((value, label), column) in cells.into_iter().zip(columns.iter()) {
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(label),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(cell, *column);
        }
    }

    fn render_preferences(&mut self, f: &mut Frame, area: Rect, settings: &Settings) {
        let items: Vec<ListItem> = Preference::ALL
            .iter()
            .map(|pref| {
                let (switch, color) = if settings.is_enabled(*pref) {
                    ("[ON] ", Color::Green)
                } else {
                    ("[OFF]", Color::DarkGray)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(switch, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                        Span::raw(" "),
                        Span::styled(pref.title(), Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", pref.description()),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Configuración"))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{buffer_text, key, render_to_buffer};
    use crossterm::event::KeyCode;

    #[test]
    fn test_select_reports_toggle() {
        let mut screen = ProfileScreen::new();
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenEvent::PreferenceToggled(Preference::Sound)
        );
    }

    #[test]
    fn test_wraps_to_last_preference() {
        let mut screen = ProfileScreen::new();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected_preference(), Preference::PersistJournal);
    }

    #[test]
    fn test_render_reflects_settings() {
        let mut screen = ProfileScreen::new();
        let settings = Settings::default().with_display_name("Ana");
        let stats = ProfileStats {
            completed_activities: 3,
            journal_entries: 2,
            routines_done: 1,
        };
        let buffer = render_to_buffer(100, 40, |f| screen.render(f, &settings, &stats));
        let text = buffer_text(&buffer);
        assert!(text.contains("Ana"));
        assert!(text.contains("Actividades Completadas"));
        assert!(text.contains("[ON]  Notificaciones"));
        assert!(text.contains("[OFF] Sonidos"));
    }
}
