use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Keystroke;

/// What a key press asks the app to do, before screen context is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(Keystroke),
    Reset,
    Quit,
    ToggleOptions,
    Escape,
    Confirm,
    Previous,
    Next,
    Ignore,
}

pub fn classify(key: &KeyEvent) -> Action {
    let shortcut = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META);

    match key.code {
        KeyCode::Char(c) if shortcut => match c.to_ascii_lowercase() {
            'r' => Action::Reset,
            'c' if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            'o' => Action::ToggleOptions,
            _ => Action::Ignore,
        },
        // alt combos produce no text
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => Action::Ignore,
        KeyCode::Char(c) => Action::Type(Keystroke::Char(c)),
        KeyCode::Backspace => Action::Type(Keystroke::Backspace),
        KeyCode::Esc => Action::Escape,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Left | KeyCode::Up => Action::Previous,
        KeyCode::Right | KeyCode::Down => Action::Next,
        // Tab and everything else never reaches the prompt
        _ => Action::Ignore,
    }
}
