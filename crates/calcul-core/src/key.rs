//! Key input accepted by the automaton

use serde::{Deserialize, Serialize};

/// A discrete key press, already decoded by the front end
///
/// Escape is deliberately absent: it terminates the process before
/// anything reaches the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Digit key, value in `0..=9`
    Digit(u8),
    /// Remove the last typed digit
    Backspace,
    /// Any other key
    Other,
}

impl Key {
    /// Decode a typed character
    pub fn from_char(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Key::Digit(d as u8),
            None => Key::Other,
        }
    }

    /// The ASCII character for a digit key
    pub fn as_digit_char(&self) -> Option<char> {
        match self {
            Key::Digit(d) if *d <= 9 => char::from_digit(u32::from(*d), 10),
            _ => None,
        }
    }
}
