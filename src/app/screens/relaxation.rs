//! Relaxation screen
//!
//! Exercise selection, the active step view with a progress gauge, and the
//! completion dialog. Playback itself runs in the app's exercise ticker;
//! this screen only renders the snapshots it receives.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, render_header, render_help, wrap_next, wrap_previous, ScreenEvent};
use crate::app::state::{NavigationAction, StateManager};
use crate::content::exercises;
use crate::exercise::{Exercise, PlaybackEvent, PlaybackState};
use crate::util::format::{format_clock, percent};

#[derive(Debug)]
pub struct RelaxationScreen {
    exercises: Vec<Exercise>,
    selected_index: usize,
    list_state: ListState,
    playback: PlaybackState,
    /// Title of a just-finished exercise awaiting acknowledgement
    completed: Option<String>,
    error_message: Option<String>,
}

impl RelaxationScreen {
    pub fn new() -> Self {
        Self::with_exercises(exercises::catalog())
    }

    pub fn with_exercises(exercises: Vec<Exercise>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            exercises,
            selected_index: 0,
            list_state,
            playback: PlaybackState::default(),
            completed: None,
            error_message: None,
        }
    }

    pub fn selected_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.selected_index)
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Whether the completion dialog is showing
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    /// Apply an update from the exercise ticker
    pub fn apply(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Progress(state) => self.playback = state,
            PlaybackEvent::Completed { title, .. } => self.completed = Some(title),
        }
    }

    /// Back to the selection view
    pub fn reset_playback(&mut self) {
        self.playback = PlaybackState::default();
        self.completed = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenEvent {
        let action = StateManager::key_to_navigation(key);

        if self.is_completed() {
            return match action {
                NavigationAction::Select | NavigationAction::Back => ScreenEvent::StopExercise,
                _ => ScreenEvent::Handled,
            };
        }

        if self.playback.is_running {
            return match action {
                NavigationAction::Select | NavigationAction::Back => ScreenEvent::StopExercise,
                _ => ScreenEvent::Handled,
            };
        }

        match action {
            NavigationAction::Up => {
                self.selected_index = wrap_previous(self.selected_index, self.exercises.len());
            }
            NavigationAction::Down => {
                self.selected_index = wrap_next(self.selected_index, self.exercises.len());
            }
            NavigationAction::Select => {
                self.error_message = None;
                return match self.selected_exercise() {
                    Some(exercise) => ScreenEvent::StartExercise(exercise.clone()),
                    None => ScreenEvent::Handled,
                };
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
                Constraint::Min(10),   // List or active exercise
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        render_header(
            f,
            chunks[0],
            "Ejercicios de Relajación",
            "Encuentra tu calma con ejercicios guiados",
        );

        if self.playback.active_exercise.is_some() {
            self.render_active(f, chunks[1]);
            render_help(f, chunks[2], &[("Enter/Esc", "Detener"), ("Q", "Salir")]);
        } else {
            self.render_list(f, chunks[1]);
            render_help(
                f,
                chunks[2],
                &[("↑↓", "Navegar"), ("Enter", "Comenzar"), ("Esc", "Volver"), ("M", "Menú")],
            );
        }

        if let Some(title) = &self.completed {
            Self::render_completed(f, title);
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(1)])
            .split(area);

        let items: Vec<ListItem> = self
            .exercises
            .iter()
            .map(|exercise| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", exercise.icon)),
                        Span::styled(
                            exercise.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  ⏱ {}", exercise.total_duration_label),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", exercise.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Ejercicios"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        if let Some(error) = &self.error_message {
            let error = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(error, chunks[1]);
        }
    }

    fn render_active(&self, f: &mut Frame, area: Rect) {
        let Some(exercise) = &self.playback.active_exercise else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Exercise title and step label
                Constraint::Min(4),    // Instruction
                Constraint::Length(3), // Step gauge
            ])
            .split(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", exercise.icon, exercise.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(self.playback.step_label().unwrap_or_default()),
        ])
        .alignment(Alignment::Center);
        f.render_widget(heading, chunks[0]);

        let instruction = self
            .playback
            .current_step()
            .map(|step| step.text.clone())
            .unwrap_or_default();
        let instruction = Paragraph::new(instruction)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        f.render_widget(instruction, chunks[1]);

        let remaining = exercise.total_seconds().saturating_sub(self.elapsed_total());
        let label = format!(
            "{} | Restante: {}",
            self.playback.timer_label().unwrap_or_default(),
            format_clock(remaining)
        );
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progreso del paso")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .percent(percent(self.playback.progress_fraction()))
            .label(label);
        f.render_widget(gauge, chunks[2]);
    }

    /// Seconds played so far across all steps
    fn elapsed_total(&self) -> u64 {
        let Some(exercise) = &self.playback.active_exercise else {
            return 0;
        };
        if self.completed.is_some() {
            return exercise.total_seconds();
        }
        let finished: u64 = exercise
            .steps
            .iter()
            .take(self.playback.current_step_index)
            .map(|s| u64::from(s.duration_seconds))
            .sum();
        finished + u64::from(self.playback.elapsed_in_step)
    }

    fn render_completed(f: &mut Frame, title: &str) {
        let area = centered_rect(50, 7, f.size());
        f.render_widget(Clear, area);

        let dialog = Paragraph::new(vec![
            Line::from(Span::styled(
                "¡Completado!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Has terminado \"{}\".", title)),
            Line::from(""),
            Line::from(Span::styled("Enter para continuar", Style::default().fg(Color::Yellow))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(dialog, area);
    }
}

impl Default for RelaxationScreen {
    fn default() -> Self {
        Self::new()
    }
}
