//! Translation of terminal events into game input.
use calcul_core::Key;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave immediately, bypassing the game.
    Quit,
    /// Forward to the automaton.
    Key(Key),
    /// Nothing to do (releases, repeats, resizes, mouse...).
    Ignore,
}

/// Classify a terminal event.
pub fn classify(event: &Event) -> Input {
    match event {
        Event::Key(key) => classify_key(key),
        _ => Input::Ignore,
    }
}

fn classify_key(key: &KeyEvent) -> Input {
    if key.kind != KeyEventKind::Press {
        return Input::Ignore;
    }

    match key.code {
        KeyCode::Esc => Input::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char(c) => Input::Key(Key::from_char(c)),
        KeyCode::Backspace => Input::Key(Key::Backspace),
        _ => Input::Key(Key::Other),
    }
}
