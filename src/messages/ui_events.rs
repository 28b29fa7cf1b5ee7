//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens.
///
/// `Points` carries the confirmed selection as opaque parameters, the same
/// way the enclosing app would receive them from a `navigate(name, params)`
/// call. Nothing beyond these two strings crosses the screen boundary.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Screen {
    #[default]
    Home,
    Points { uf: String, city: String },
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Selector navigation
    NextPanel,
    PrevPanel,
    CursorUp,
    CursorDown,
    Confirm,

    // Proceed to the Points screen
    Submit,

    // Points screen
    Back,

    // Error recovery
    Retry,

    // Popups
    DismissAlert,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused selector panel on the home screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    States,
    Cities,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::States => Panel::Cities,
            Panel::Cities => Panel::States,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::States => Panel::Cities,
            Panel::Cities => Panel::States,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: &Screen,
    show_alert: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups take precedence; both close on any key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }
    if show_alert {
        return Some(UiEvent::DismissAlert);
    }

    match screen {
        Screen::Home => handle_home_keys(key),
        Screen::Points { .. } => handle_points_keys(key),
    }
}

/// Handle keys for the home (location selection) screen
fn handle_home_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::Enter => Some(UiEvent::Confirm),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Char('r') => Some(UiEvent::Retry),
        _ => None,
    }
}

/// Handle keys for the points screen
fn handle_points_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(UiEvent::Back),
        _ => None,
    }
}
