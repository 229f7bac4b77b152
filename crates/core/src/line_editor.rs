//! Single-line input editor
//!
//! Text is only ever appended at the end and removed from the end; there is
//! no cursor position.

/// Current input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    current: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append typed text verbatim
    ///
    /// Hosts deliver submit and navigation as key events, never as text.
    pub fn append_text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.current.pop();
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Replace the whole line (history recall)
    pub fn set(&mut self, text: &str) {
        self.current.clear();
        self.current.push_str(text);
    }

    pub fn value(&self) -> &str {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Take the line out, leaving the editor empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.current)
    }
}
