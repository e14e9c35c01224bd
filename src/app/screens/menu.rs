//! Side menu
//!
//! Overlay listing every screen. Navigation goes through the [`Navigator`]
//! passed in by the caller.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{wrap_next, wrap_previous};
use crate::app::state::{AppState, NavigationAction, Navigator};
use crate::content::MOTTO;

const MENU_WIDTH: u16 = 36;

#[derive(Debug)]
pub struct SideMenu {
    open: bool,
    selected_index: usize,
    list_state: ListState,
}

impl SideMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with the current screen highlighted
    pub fn open(&mut self, current: AppState) {
        self.selected_index = AppState::MENU
            .iter()
            .position(|s| *s == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn selected(&self) -> AppState {
        AppState::MENU[self.selected_index]
    }

    /// Handle an action while open. Quit is left to the caller.
    pub fn handle_action(&mut self, action: NavigationAction, navigator: &mut dyn Navigator) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => {
                self.selected_index = wrap_previous(self.selected_index, AppState::MENU.len());
                self.list_state.select(Some(self.selected_index));
            }
            NavigationAction::Down | NavigationAction::Next => {
                self.selected_index = wrap_next(self.selected_index, AppState::MENU.len());
                self.list_state.select(Some(self.selected_index));
            }
            NavigationAction::Select | NavigationAction::Right => {
                navigator.navigate(self.selected());
                self.close();
            }
            NavigationAction::Back | NavigationAction::Menu | NavigationAction::Left => self.close(),
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let area = Rect {
            width: MENU_WIDTH.min(size.width),
            ..size
        };
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Brand
                Constraint::Min(10),   // Entries
                Constraint::Length(3), // Motto
            ])
            .split(area);

        let brand = Paragraph::new(vec![
            Line::from(Span::styled(
                "🧠 SaludMente",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Tu bienestar mental"),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(brand, chunks[0]);

        let items: Vec<ListItem> = AppState::MENU
            .iter()
            .map(|s| ListItem::new(format!("{} {}", s.icon(), s.title())))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menú"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let motto = Paragraph::new(MOTTO)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(motto, chunks[2]);
    }
}

impl Default for SideMenu {
    fn default() -> Self {
        Self::new()
    }
}
