//! Self-care routines screen

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState},
    Frame,
};

use super::{render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::habits::HabitTracker;
use crate::util::format::percent;

#[derive(Debug)]
pub struct RoutinesScreen {
    tracker: HabitTracker,
    selected_index: usize,
    list_state: ListState,
}

impl RoutinesScreen {
    pub fn new(tracker: HabitTracker) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tracker,
            selected_index: 0,
            list_state,
        }
    }

    pub fn tracker(&self) -> &HabitTracker {
        &self.tracker
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
            self.tracker.reset();
            return ScreenEvent::Handled;
        }

        let len = self.tracker.total();
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.selected_index = wrap_previous(self.selected_index, len),
            NavigationAction::Down => self.selected_index = wrap_next(self.selected_index, len),
            NavigationAction::Select => {
                if let Some(id) = self.tracker.routines().get(self.selected_index).map(|r| r.id) {
                    if let Err(e) = self.tracker.toggle(id) {
                        tracing::warn!(error = %e, "failed to toggle routine");
                    }
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
                Constraint::Length(5), // Title
                Constraint::Length(3), // Daily progress
                Constraint::Min(8),    // Checklist
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        render_header(
            f,
            chunks[0],
            "Rutinas de Autocuidado",
            "Pequeños hábitos para un gran bienestar",
        );
        self.render_progress(f, chunks[1]);
        self.render_checklist(f, chunks[2]);
        render_help(
            f,
            chunks[3],
            &[("↑↓", "Navegar"), ("Espacio", "Marcar"), ("R", "Reiniciar"), ("Esc", "Volver")],
        );
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let label = format!(
            "{} de {} completadas",
            self.tracker.completed_count(),
            self.tracker.total()
        );
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progreso de Hoy")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .percent(percent(self.tracker.progress()))
            .label(label);
        f.render_widget(gauge, area);
    }

    fn render_checklist(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .tracker
            .routines()
            .iter()
            .map(|routine| {
                let done = self.tracker.is_completed(routine.id);
                let (mark, title_style) = if done {
                    (
                        "[x]",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ]", Style::default().add_modifier(Modifier::BOLD))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} {} ", mark, routine.icon)),
                        Span::styled(routine.title, title_style),
                        Span::styled(
                            format!("  {} · {}", routine.category, routine.time_label),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", routine.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Rutinas"))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for RoutinesScreen {
    fn default() -> Self {
        Self::new(HabitTracker::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{buffer_text, char_key, key, render_to_buffer};

    #[test]
    fn test_toggle_and_reset() {
        let mut screen = RoutinesScreen::default();
        screen.handle_key(char_key(' '));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.tracker().completed_count(), 2);

        // Toggling again unchecks
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.tracker().completed_count(), 1);

        screen.handle_key(char_key('r'));
        assert_eq!(screen.tracker().completed_count(), 0);
    }

    #[test]
    fn test_back_is_ignored() {
        let mut screen = RoutinesScreen::default();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenEvent::Ignored);
    }

    #[test]
    fn test_render_progress_label() {
        let mut screen = RoutinesScreen::default();
        screen.handle_key(char_key(' '));
        let buffer = render_to_buffer(100, 30, |f| screen.render(f));
        let text = buffer_text(&buffer);
        assert!(text.contains("1 de 8 completadas"));
        assert!(text.contains("[x]"));
    }
}
