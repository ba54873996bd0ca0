//! Input handling module
//!
//! Maps raw key events to application actions. The mapping is
//! mode-sensitive: while the summary dock is expanded only a reduced set
//! of actions applies, and Esc collapses the dock instead of quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppMode;

/// User-intent actions dispatched by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    NextGroup,
    PrevGroup,
    Toggle,
    IncreaseQuantity,
    DecreaseQuantity,
    ToggleSummary,
    Export,
    ToggleHelp,
    Quit,
}

/// Map a key event to an action for the given mode.
///
/// Returns `None` for keys with no binding; unknown input is ignored.
pub fn map_key(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        AppMode::Browse => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevGroup),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::NextGroup),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::IncreaseQuantity),
            KeyCode::Char('-') => Some(Action::DecreaseQuantity),
            KeyCode::Char('s') => Some(Action::ToggleSummary),
            KeyCode::Char('e') => Some(Action::Export),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        AppMode::Summary => match key.code {
            KeyCode::Char('s') | KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleSummary),
            KeyCode::Char('e') => Some(Action::Export),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}
