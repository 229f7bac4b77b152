//! Named keys a host can report to an app

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// Keys addressable by name from app code (`"enter"`, `"up"`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
}

impl Key {
    /// Every named key, in table order
    pub const ALL: [Key; 11] = [
        Key::Enter,
        Key::Backspace,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::Escape,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Key::Enter => "enter",
            Key::Backspace => "backspace",
            Key::Left => "left",
            Key::Right => "right",
            Key::Up => "up",
            Key::Down => "down",
            Key::Home => "home",
            Key::End => "end",
            Key::PageUp => "page_up",
            Key::PageDown => "page_down",
            Key::Escape => "escape",
        }
    }

    /// Look up a key by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl FromStr for Key {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CoreError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
