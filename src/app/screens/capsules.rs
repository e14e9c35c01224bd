//! Educational capsules screen
//!
//! List of articles and a scrollable detail popup.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::content::capsules::{parse_line, LineKind, CAPSULES};
use crate::content::Capsule;

#[derive(Debug)]
pub struct CapsulesScreen {
    capsules: Vec<Capsule>,
    selected_index: usize,
    list_state: ListState,
    detail_open: bool,
    scroll: u16,
}

impl CapsulesScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            capsules: CAPSULES.to_vec(),
            selected_index: 0,
            list_state,
            detail_open: false,
            scroll: 0,
        }
    }

    pub fn selected_capsule(&self) -> Option<&Capsule> {
        self.capsules.get(self.selected_index)
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        let action = StateManager::key_to_navigation(key);

        if self.detail_open {
            match action {
                NavigationAction::Up => self.scroll = self.scroll.saturating_sub(1),
                NavigationAction::Down => self.scroll = self.scroll.saturating_add(1),
                NavigationAction::Back | NavigationAction::Select => {
                    self.detail_open = false;
                    self.scroll = 0;
                }
                _ => return ScreenEvent::Ignored,
            }
            return ScreenEvent::Handled;
        }

        match action {
            NavigationAction::Up => {
                self.selected_index = wrap_previous(self.selected_index, self.capsules.len());
            }
            NavigationAction::Down => {
                self.selected_index = wrap_next(self.selected_index, self.capsules.len());
            }
            NavigationAction::Select if !self.capsules.is_empty() => {
                self.detail_open = true;
                self.scroll = 0;
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
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(f.size());

        render_header(
            f,
            chunks[0],
            "Cápsulas Educativas",
            "Aprende sobre salud mental y bienestar",
        );
        self.render_list(f, chunks[1]);

        if self.detail_open {
            render_help(f, chunks[2], &[("↑↓", "Desplazar"), ("Esc", "Cerrar")]);
            let popup = Rect {
                x: chunks[1].x + 2,
                width: chunks[1].width.saturating_sub(4),
                ..chunks[1]
            };
            self.render_detail(f, popup);
        } else {
            render_help(
                f,
                chunks[2],
                &[("↑↓", "Navegar"), ("Enter", "Leer"), ("Esc", "Volver"), ("M", "Menú")],
            );
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .capsules
            .iter()
            .map(|capsule| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            capsule.title,
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  [{}]", capsule.category),
                            Style::default().fg(Color::Magenta),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", capsule.excerpt),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Artículos"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let Some(capsule) = self.selected_capsule() else {
            return;
        };

        let lines: Vec<Line> = capsule
            .content
            .lines()
            .map(|raw| match parse_line(raw) {
                (LineKind::Heading, text) => Line::from(Span::styled(
                    text.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                (LineKind::Bullet, text) => Line::from(vec![
                    Span::styled("  • ", Style::default().fg(Color::Green)),
                    Span::raw(text.to_string()),
                ]),
                (LineKind::Text, text) => Line::from(text.to_string()),
                (LineKind::Blank, _) => Line::from(""),
            })
            .collect();

        f.render_widget(Clear, area);
        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} · {}", capsule.title, capsule.category))
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(detail, area);
    }
}

impl Default for CapsulesScreen {
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
    fn test_open_scroll_and_close_detail() {
        let mut screen = CapsulesScreen::new();
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_capsule().unwrap().id, CAPSULES[1].id);

        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.is_detail_open());

        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.scroll(), 1);

        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenEvent::Handled);
        assert!(!screen.is_detail_open());
        assert_eq!(screen.scroll(), 0);

        // With the popup closed, Esc belongs to the app
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenEvent::Ignored);
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut screen = CapsulesScreen::new();
        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_render_detail_strips_markup() {
        let mut screen = CapsulesScreen::new();
        screen.handle_key(key(KeyCode::Enter));
        let buffer = render_to_buffer(100, 40, |f| screen.render(f));
        let text = buffer_text(&buffer);
        assert!(text.contains(CAPSULES[0].title));
        assert!(!text.contains("**"));
    }
}
