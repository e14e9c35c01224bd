use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use saludmente::app::screens::{HomeScreen, ScreenEvent, SideMenu};
use saludmente::app::{AppState, NavigationAction, Navigator, StateManager};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_side_menu_reaches_every_screen() {
    for (index, target) in AppState::MENU.iter().enumerate() {
        let mut nav = StateManager::new();
        let mut menu = SideMenu::new();
        menu.open(nav.current());
        for _ in 0..index {
            menu.handle_action(NavigationAction::Down, &mut nav);
        }
        menu.handle_action(NavigationAction::Select, &mut nav);
        assert_eq!(nav.current(), *target);
        assert!(!menu.is_open());
    }
}

#[test]
fn test_home_quick_action_then_back() {
    let mut nav = StateManager::new();
    let mut home = HomeScreen::new();

    match home.handle_key(key(KeyCode::Enter)) {
        ScreenEvent::Navigate(target) => nav.navigate(target),
        other => panic!("unexpected event: {:?}", other),
    }
    assert_eq!(*nav.current_state(), AppState::Journal);

    nav.handle_key_event(key(KeyCode::Esc));
    assert_eq!(*nav.current_state(), AppState::Home);
    assert!(!nav.should_quit());

    nav.handle_key_event(key(KeyCode::Esc));
    assert!(nav.should_quit());
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut nav = StateManager::new();
    nav.transition_to(AppState::Chatbot);
    nav.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(nav.should_quit());
}
