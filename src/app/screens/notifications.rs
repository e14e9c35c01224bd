//! Notifications screen

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
use crate::content::notifications::{unread_count, NOTIFICATIONS};
use crate::content::Notification;

#[derive(Debug)]
pub struct NotificationsScreen {
    notifications: Vec<Notification>,
    selected_index: usize,
    list_state: ListState,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self::with_notifications(NOTIFICATIONS.to_vec())
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let mut list_state = ListState::default();
        if !notifications.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            notifications,
            selected_index: 0,
            list_state,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        let len = self.notifications.len();
        if len == 0 {
            return ScreenEvent::Ignored;
        }

        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.selected_index = wrap_previous(self.selected_index, len),
            NavigationAction::Down => self.selected_index = wrap_next(self.selected_index, len),
            NavigationAction::Select => {
                if let Some(notification) = self.notifications.get_mut(self.selected_index) {
                    notification.read = true;
                }
            }
            _ => return ScreenEvent::Ignored,
        }
        self.list_state.select(Some(self.selected_index));
        ScreenEvent::Handled
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(f.size());

        let subtitle = format!("{} sin leer", self.unread());
        render_header(f, chunks[0], "Notificaciones", &subtitle);
        self.render_list(f, chunks[1]);
        render_help(
            f,
            chunks[2],
            &[("↑↓", "Navegar"), ("Enter", "Marcar leída"), ("Esc", "Volver")],
        );
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Recientes");

        if self.notifications.is_empty() {
            let empty = Paragraph::new("No tienes notificaciones")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .notifications
            .iter()
            .map(|n| {
                let mut title_style = Style::default().fg(n.kind.color());
                if !n.read {
                    title_style = title_style.add_modifier(Modifier::BOLD);
                }
                let marker = if n.read { "  " } else { "● " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Yellow)),
                        Span::raw(format!("{} ", n.kind.icon())),
                        Span::styled(n.title, title_style),
                        Span::styled(
                            format!("  {}", n.time_label),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(format!("     {}", n.message)),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for NotificationsScreen {
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
    fn test_mark_read() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(screen.unread(), 1);
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.unread(), 0);
        assert!(screen.notifications()[0].read);
    }

    #[test]
    fn test_empty_placeholder() {
        let mut screen = NotificationsScreen::with_notifications(Vec::new());
        assert_eq!(screen.handle_key(key(KeyCode::Down)), ScreenEvent::Ignored);
        let buffer = render_to_buffer(80, 20, |f| screen.render(f));
        assert!(buffer_text(&buffer).contains("No tienes notificaciones"));
    }

    #[test]
    fn test_render_lists_titles() {
        let mut screen = NotificationsScreen::new();
        let buffer = render_to_buffer(100, 24, |f| screen.render(f));
        let text = buffer_text(&buffer);
        assert!(text.contains("Recordatorio de Diario"));
        assert!(text.contains("1 sin leer"));
    }
}
