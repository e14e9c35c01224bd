//! Chatbot screen
//!
//! Conversation history, a typing indicator and the input line. The input
//! line is focused on entry; Esc releases focus so global keys work again.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use super::{render_header, render_help, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::chat::{Conversation, Sender};

#[derive(Debug)]
pub struct ChatbotScreen {
    conversation: Conversation,
    input: String,
    editing: bool,
    /// Lines scrolled up from the bottom of the history
    scroll_back: u16,
}

impl ChatbotScreen {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: String::new(),
            editing: true,
            scroll_back: 0,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Deliver a due bot reply. Returns true when one arrived.
    pub fn poll(&mut self, now: Instant) -> bool {
        let delivered = self.conversation.poll(now);
        if delivered {
            self.scroll_back = 0;
        }
        delivered
    }

    /// Send the input line
    pub fn submit(&mut self, now: Instant) {
        if self.conversation.send(&self.input, now) {
            self.input.clear();
            self.scroll_back = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        if self.editing {
            match key.code {
                KeyCode::Enter => self.submit(Instant::now()),
                KeyCode::Esc => self.editing = false,
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Up => self.scroll_back = self.scroll_back.saturating_add(1),
                KeyCode::Down => self.scroll_back = self.scroll_back.saturating_sub(1),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(c)
                }
                _ => {}
            }
            return ScreenEvent::Handled;
        }

        match StateManager::key_to_navigation(key) {
            NavigationAction::Select | NavigationAction::Next => self.editing = true,
            NavigationAction::Up => self.scroll_back = self.scroll_back.saturating_add(1),
            NavigationAction::Down => self.scroll_back = self.scroll_back.saturating_sub(1),
            _ => return ScreenEvent::Ignored,
        }
        ScreenEvent::Handled
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title
                Constraint::Min(6),    // History
                Constraint::Length(1), // Typing indicator
                Constraint::Length(3), // Input
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        render_header(
            f,
            chunks[0],
            "Chatbot Empático",
            "Un espacio seguro para expresarte",
        );
        self.render_history(f, chunks[1]);

        if self.conversation.is_typing() {
            let typing = Paragraph::new("🤖 Escribiendo...")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            f.render_widget(typing, chunks[2]);
        }

        self.render_input(f, chunks[3]);

        let hints: &[(&str, &str)] = if self.editing {
            &[("Enter", "Enviar"), ("↑↓", "Historial"), ("Esc", "Soltar foco")]
        } else {
            &[("Enter", "Escribir"), ("↑↓", "Historial"), ("Esc", "Volver"), ("M", "Menú")]
        };
        render_help(f, chunks[4], hints);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let mut lines = Vec::new();
        let mut height = 0usize;

        for message in self.conversation.messages() {
            let (prefix, style, alignment) = match message.sender {
                Sender::Bot => ("🤖 ", Style::default().fg(Color::Cyan), Alignment::Left),
                Sender::User => ("Tú: ", Style::default().fg(Color::Green), Alignment::Right),
            };
            let text = format!("{}{}", prefix, message.text);
            height += wrapped_height(&text, inner_width) + 1;
            lines.push(Line::from(Span::styled(text, style)).alignment(alignment));
            lines.push(Line::from(""));
        }

        let visible = area.height.saturating_sub(2) as usize;
        let max_offset = height.saturating_sub(visible);
        let offset = max_offset.saturating_sub(self.scroll_back as usize);

        let history = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .block(Block::default().borders(Borders::ALL).title("Conversación"));
        f.render_widget(history, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let border = if self.editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let content = if self.editing {
            Line::from(format!("{}▏", self.input))
        } else if self.input.is_empty() {
            Line::from(Span::styled(
                "Escribe tu mensaje...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input.as_str())
        };

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Mensaje")
                .border_style(border),
        );
        f.render_widget(input, area);
    }
}

impl Default for ChatbotScreen {
    fn default() -> Self {
        Self::new(Conversation::new())
    }
}

/// Rows a line of text takes when wrapped to `width` columns
fn wrapped_height(text: &str, width: usize) -> usize {
    let chars = text.chars().count();
    chars.div_ceil(width).max(1)
}
