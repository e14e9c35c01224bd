//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::{
    app::{
        screens::{
            CapsulesScreen, ChatbotScreen, HomeScreen, JournalScreen, NotificationsScreen,
            ProfileScreen, ProfileStats, RelaxationScreen, RoutinesScreen, ScreenEvent, SideMenu,
        },
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    config::{Preference, Settings},
    error::user_friendly_message,
    exercise::{Exercise, ExerciseTicker, PlaybackEvent},
    journal::{Journal, JournalStorage},
    Result,
};

const PLAYBACK_CHANNEL_CAPACITY: usize = 64;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    settings: Settings,
    side_menu: SideMenu,
    /// Screen components
    home_screen: HomeScreen,
    journal_screen: JournalScreen,
    capsules_screen: CapsulesScreen,
    routines_screen: RoutinesScreen,
    relaxation_screen: RelaxationScreen,
    chatbot_screen: ChatbotScreen,
    notifications_screen: NotificationsScreen,
    profile_screen: ProfileScreen,
    /// Guided exercise timer
    ticker: ExerciseTicker,
    /// Events of the current run; replaced on every start
    playback_rx: Option<mpsc::Receiver<PlaybackEvent>>,
    /// Present only while journal persistence is enabled
    journal_storage: Option<JournalStorage>,
    completed_activities: u32,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let settings = Settings::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        });

        let journal_storage = if settings.persist_journal {
            open_journal_storage()
        } else {
            None
        };
        let journal = journal_storage
            .as_ref()
            .map(load_journal)
            .unwrap_or_default();

        Ok(Self {
            tui: Tui::with_tick_rate(settings.ui_tick())?,
            state_manager: StateManager::new(),
            settings,
            side_menu: SideMenu::new(),
            home_screen: HomeScreen::new(),
            journal_screen: JournalScreen::new(journal),
            capsules_screen: CapsulesScreen::new(),
            routines_screen: RoutinesScreen::default(),
            relaxation_screen: RelaxationScreen::new(),
            chatbot_screen: ChatbotScreen::default(),
            notifications_screen: NotificationsScreen::new(),
            profile_screen: ProfileScreen::new(),
            ticker: ExerciseTicker::new(),
            playback_rx: None,
            journal_storage,
            completed_activities: 0,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        tracing::info!("tui initialized");
        Ok(())
    }

    /// Give the terminal back
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.drain_playback_events();
            self.chatbot_screen.poll(Instant::now());
            self.draw()?;
            self.handle_events().await?;
        }
        self.stop_exercise().await;
        tracing::info!("application exiting");
        Ok(())
    }

    fn drain_playback_events(&mut self) {
        let Some(rx) = &mut self.playback_rx else {
            return;
        };
        while let Ok(event) = rx.try_recv() {
            if let PlaybackEvent::Completed { exercise_id, .. } = &event {
                self.completed_activities += 1;
                tracing::info!(exercise = exercise_id, "exercise completed");
            }
            self.relaxation_screen.apply(event);
        }
    }

    fn stats(&self) -> ProfileStats {
        ProfileStats {
            completed_activities: self.completed_activities,
            journal_entries: self.journal_screen.journal().len(),
            routines_done: self.routines_screen.tracker().completed_count(),
        }
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let stats = self.stats();
        let unread = self.notifications_screen.unread();
        let Self {
            tui,
            state_manager,
            settings,
            side_menu,
            home_screen,
            journal_screen,
            capsules_screen,
            routines_screen,
            relaxation_screen,
            chatbot_screen,
            notifications_screen,
            profile_screen,
            ..
        } = self;

        tui.draw(|f| {
            match state_manager.current_state() {
                AppState::Home => home_screen.render(f, &settings.display_name, unread),
                AppState::Journal => journal_screen.render(f),
                AppState::Capsules => capsules_screen.render(f),
                AppState::Routines => routines_screen.render(f),
                AppState::Relaxation => relaxation_screen.render(f),
                AppState::Chatbot => chatbot_screen.render(f),
                AppState::Notifications => notifications_screen.render(f),
                AppState::Profile => profile_screen.render(f, settings, &stats),
            }
            if side_menu.is_open() {
                side_menu.render(f);
            }
        })
    }

    /// Handle keyboard events and update state
    async fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.handle_events()? {
            let before = *self.state_manager.current_state();
            self.handle_key(key).await;

            // Leaving the relaxation screen ends the exercise
            if before == AppState::Relaxation
                && *self.state_manager.current_state() != AppState::Relaxation
            {
                self.stop_exercise().await;
            }
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state_manager.quit();
            return;
        }

        // Text fields get raw keys before any global shortcut
        if !self.side_menu.is_open() && self.is_editing_text() {
            let event = self.dispatch_to_screen(key);
            self.apply_screen_event(event).await;
            return;
        }

        let action = StateManager::key_to_navigation(key);

        if action == NavigationAction::Quit {
            self.state_manager.quit();
            return;
        }

        if self.side_menu.is_open() {
            self.side_menu.handle_action(action, &mut self.state_manager);
            return;
        }

        if action == NavigationAction::Menu {
            self.side_menu.open(*self.state_manager.current_state());
            return;
        }

        let event = self.dispatch_to_screen(key);
        if event == ScreenEvent::Ignored {
            self.state_manager.handle_navigation(action);
        } else {
            self.apply_screen_event(event).await;
        }
    }

    fn is_editing_text(&self) -> bool {
        match self.state_manager.current_state() {
            AppState::Journal => self.journal_screen.is_editing(),
            AppState::Chatbot => self.chatbot_screen.is_editing(),
            _ => false,
        }
    }

    fn dispatch_to_screen(&mut self, key: KeyEvent) -> ScreenEvent {
        match self.state_manager.current_state() {
            AppState::Home => self.home_screen.handle_key(key),
            AppState::Journal => self.journal_screen.handle_key(key),
            AppState::Capsules => self.capsules_screen.handle_key(key),
            AppState::Routines => self.routines_screen.handle_key(key),
            AppState::Relaxation => self.relaxation_screen.handle_key(key),
            AppState::Chatbot => self.chatbot_screen.handle_key(key),
            AppState::Notifications => self.notifications_screen.handle_key(key),
            AppState::Profile => self.profile_screen.handle_key(key),
        }
    }

    async fn apply_screen_event(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::Handled | ScreenEvent::Ignored => {}
            ScreenEvent::Navigate(target) => self.state_manager.transition_to(target),
            ScreenEvent::StartExercise(exercise) => self.start_exercise(exercise).await,
            ScreenEvent::StopExercise => self.stop_exercise().await,
            ScreenEvent::JournalChanged => self.persist_journal(),
            ScreenEvent::PreferenceToggled(preference) => self.toggle_preference(preference),
        }
    }

    async fn start_exercise(&mut self, exercise: Exercise) {
        let (tx, rx) = mpsc::channel(PLAYBACK_CHANNEL_CAPACITY);
        let exercise_id = exercise.id;
        match self.ticker.start(exercise, tx).await {
            Ok(()) => self.playback_rx = Some(rx),
            Err(e) => {
                tracing::warn!(exercise = exercise_id, error = %e, "exercise rejected");
                self.relaxation_screen.set_error(user_friendly_message(&e));
            }
        }
    }

    async fn stop_exercise(&mut self) {
        // Dropping the receiver first unblocks a timer stuck on a full channel
        self.playback_rx = None;
        self.ticker.stop().await;
        self.relaxation_screen.reset_playback();
    }

    fn persist_journal(&mut self) {
        let Some(storage) = &self.journal_storage else {
            return;
        };
        if let Err(e) = storage.save_entries(self.journal_screen.journal().entries()) {
            tracing::error!(error = %e, "failed to save journal");
        }
    }

    fn toggle_preference(&mut self, preference: Preference) {
        let enabled = self.settings.toggle(preference);
        tracing::info!(?preference, enabled, "preference changed");

        if preference == Preference::PersistJournal {
            self.journal_storage = if enabled { open_journal_storage() } else { None };
            self.persist_journal();
        }

        if let Err(e) = self.settings.save() {
            tracing::error!(error = %e, "failed to save settings");
            self.profile_screen.set_status(user_friendly_message(&e));
        }
    }
}

fn open_journal_storage() -> Option<JournalStorage> {
    match JournalStorage::new() {
        Ok(storage) => Some(storage),
        Err(e) => {
            tracing::warn!(error = %e, "journal storage unavailable");
            None
        }
    }
}

fn load_journal(storage: &JournalStorage) -> Journal {
    match storage.load_entries() {
        Ok(entries) => {
            tracing::info!(count = entries.len(), "journal loaded");
            Journal::from_entries(entries)
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %storage.path().display(), "failed to load journal");
            Journal::new()
        }
    }
}
