//! Keyboard commands

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reseed,
    Glider,
    Speed,
    ToggleColors,
    TogglePalette,
    TogglePause,
    Step,
}

impl Command {
    /// Map a terminal event to a command, ignoring releases and unbound keys
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(key),
            _ => None,
        }
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reseed),
            KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::Glider),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Speed),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ToggleColors),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::TogglePalette),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Step),
            _ => None,
        }
    }
}
