//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard event processing for the TUI application.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        Self::with_tick_rate(DEFAULT_TICK_RATE)
    }

    /// Create a TUI that redraws at least every `tick_rate`
    pub fn with_tick_rate(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: false,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // From here on restore() has something to undo
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for a key press
    pub fn handle_events(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_creation() {
        let tui = Tui::new();
        assert!(tui.is_ok());
    }

    #[test]
    fn test_tick_rate() {
        let tui = Tui::with_tick_rate(Duration::from_millis(100)).unwrap();
        assert_eq!(tui.tick_rate(), Duration::from_millis(100));
        assert_eq!(Tui::new().unwrap().tick_rate(), DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_restore_without_init_is_noop() {
        let mut tui = Tui::new().unwrap();
        assert!(tui.restore().is_ok());
    }
}
