//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens, in side menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Welcome screen with quick actions
    #[default]
    Home,
    /// Emotional journal
    Journal,
    /// Educational capsules
    Capsules,
    /// Self-care routines checklist
    Routines,
    /// Guided relaxation exercises
    Relaxation,
    /// Scripted support chat
    Chatbot,
    Notifications,
    Profile,
}

impl AppState {
    pub const MENU: [AppState; 8] = [
        AppState::Home,
        AppState::Journal,
        AppState::Capsules,
        AppState::Routines,
        AppState::Relaxation,
        AppState::Chatbot,
        AppState::Notifications,
        AppState::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppState::Home => "Inicio",
            AppState::Journal => "Diario Emocional",
            AppState::Capsules => "Cápsulas Educativas",
            AppState::Routines => "Rutinas de Autocuidado",
            AppState::Relaxation => "Ejercicios de Relajación",
            AppState::Chatbot => "Chatbot Empático",
            AppState::Notifications => "Notificaciones",
            AppState::Profile => "Mi Perfil",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppState::Home => "🏠",
            AppState::Journal => "📔",
            AppState::Capsules => "🎓",
            AppState::Routines => "💗",
            AppState::Relaxation => "🧘",
            AppState::Chatbot => "🤖",
            AppState::Notifications => "🔔",
            AppState::Profile => "👤",
        }
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Open the side menu (m)
    Menu,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Navigation capability handed to widgets that switch screens
pub trait Navigator {
    fn current(&self) -> AppState;
    fn navigate(&mut self, target: AppState);
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the home screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Home,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            tracing::debug!(from = ?self.current_state, to = ?new_state, "screen transition");
            self.previous_state = Some(self.current_state);
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go Home
    pub fn go_back(&mut self) {
        self.current_state = self.previous_state.take().unwrap_or_default();
    }

    /// Handle the global part of a navigation action
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Back => match self.current_state {
                AppState::Home => self.should_quit = true,
                _ => self.go_back(),
            },
            // Everything else belongs to the individual screens
            _ => {}
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            KeyCode::Char('m') | KeyCode::Char('M') => NavigationAction::Menu,

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            _ => NavigationAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let action = Self::key_to_navigation(key);
        self.handle_navigation(action);
    }
}

impl Navigator for StateManager {
    fn current(&self) -> AppState {
        self.current_state
    }

    fn navigate(&mut self, target: AppState) {
        self.transition_to(target);
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(!state_manager.should_quit());
        assert!(state_manager.previous_state().is_none());
    }

    #[test]
    fn test_state_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Journal);
        assert_eq!(*state_manager.current_state(), AppState::Journal);
        assert_eq!(state_manager.previous_state(), Some(&AppState::Home));

        state_manager.transition_to(AppState::Relaxation);
        assert_eq!(*state_manager.current_state(), AppState::Relaxation);
        assert_eq!(state_manager.previous_state(), Some(&AppState::Journal));

        // Same-state transition keeps history
        state_manager.transition_to(AppState::Relaxation);
        assert_eq!(state_manager.previous_state(), Some(&AppState::Journal));
    }

    #[test]
    fn test_go_back() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Capsules);
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(state_manager.previous_state().is_none());

        // Go back from Home stays at Home
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Home);
    }

    #[test]
    fn test_back_navigation() {
        let mut state_manager = StateManager::new();
        state_manager.transition_to(AppState::Profile);
        state_manager.handle_navigation(NavigationAction::Back);
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(!state_manager.should_quit());

        // Back from Home quits
        state_manager.handle_navigation(NavigationAction::Back);
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_quit_handling() {
        let mut state_manager = StateManager::new();
        state_manager.handle_navigation(NavigationAction::Quit);
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('q'))), NavigationAction::Quit);
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Up)), NavigationAction::Up);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Enter)), NavigationAction::Select);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char(' '))), NavigationAction::Select);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Esc)), NavigationAction::Back);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('m'))), NavigationAction::Menu);
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Tab)), NavigationAction::Next);
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(StateManager::key_to_navigation(key(KeyCode::Char('x'))), NavigationAction::None);
    }

    #[test]
    fn test_navigator_impl() {
        let mut state_manager = StateManager::new();
        let nav: &mut dyn Navigator = &mut state_manager;
        nav.navigate(AppState::Chatbot);
        assert_eq!(nav.current(), AppState::Chatbot);
        assert_eq!(state_manager.previous_state(), Some(&AppState::Home));
    }

    #[test]
    fn test_menu_order_and_titles() {
        assert_eq!(AppState::MENU[0], AppState::Home);
        assert_eq!(AppState::MENU.len(), 8);
        assert_eq!(AppState::Relaxation.title(), "Ejercicios de Relajación");
    }
}
