//! Home screen
//!
//! Welcome message, quick actions and the breathing tip.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{AppState, NavigationAction, StateManager};
use crate::content::BREATHING_TIP;

const QUICK_ACTIONS: [(AppState, &str); 2] = [
    (AppState::Journal, "📝 Escribir en mi Diario"),
    (AppState::Relaxation, "🧘 Ejercicio de Relajación"),
];

/// Landing screen
#[derive(Debug)]
pub struct HomeScreen {
    selected_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Screen the highlighted quick action leads to
    pub fn selected_target(&self) -> AppState {
        QUICK_ACTIONS[self.selected_index].0
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up | NavigationAction::Left => {
                self.selected_index = wrap_previous(self.selected_index, QUICK_ACTIONS.len());
            }
            NavigationAction::Down | NavigationAction::Right | NavigationAction::Next => {
                self.selected_index = wrap_next(self.selected_index, QUICK_ACTIONS.len());
            }
            NavigationAction::Select => return ScreenEvent::Navigate(self.selected_target()),
            _ => return ScreenEvent::Ignored,
        }
        self.list_state.select(Some(self.selected_index));
        ScreenEvent::Handled
    }

    pub fn render(&mut self, f: &mut Frame, display_name: &str, unread: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Length(4), // Quick actions
                Constraint::Min(5),    // Tip and notifications
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let subtitle = format!(
            "Hola, {}. Tu compañero personal para el bienestar mental",
            display_name
        );
        render_header(f, chunks[0], "SaludMente", &subtitle);
        self.render_actions(f, chunks[1]);
        self.render_tip(f, chunks[2], unread);
        render_help(
            f,
            chunks[3],
            &[("↑↓", "Navegar"), ("Enter", "Abrir"), ("M", "Menú"), ("Q", "Salir")],
        );
    }

    fn render_actions(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = QUICK_ACTIONS
            .iter()
            .map(|(_, label)| ListItem::new(*label))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Acciones Rápidas"),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_tip(&self, f: &mut Frame, area: Rect, unread: usize) {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("💡 {}", BREATHING_TIP),
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(
                "Continúa explorando los módulos del menú para fortalecer tu bienestar mental día a día.",
            ),
        ];
        if unread > 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("🔔 Tienes {} notificación(es) sin leer", unread),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let tip = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Consejo del Día"),
            );
        f.render_widget(tip, area);
    }
}

impl Default for HomeScreen {
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
    fn test_quick_action_navigation() {
        let mut screen = HomeScreen::new();
        assert_eq!(screen.selected_target(), AppState::Journal);

        assert_eq!(screen.handle_key(key(KeyCode::Down)), ScreenEvent::Handled);
        assert_eq!(screen.selected_target(), AppState::Relaxation);

        // Wraps around
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_target(), AppState::Journal);
    }

    #[test]
    fn test_select_navigates() {
        let mut screen = HomeScreen::new();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenEvent::Navigate(AppState::Relaxation)
        );
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenEvent::Ignored);
    }

    #[test]
    fn test_render_shows_name() {
        let mut screen = HomeScreen::new();
        let buffer = render_to_buffer(100, 30, |f| screen.render(f, "Ana", 1));
        let text = buffer_text(&buffer);
        assert!(text.contains("SaludMente"));
        assert!(text.contains("Hola, Ana."));
        assert!(text.contains("Acciones"));
    }
}
