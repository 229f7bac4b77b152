//! Scrollback buffer for console display lines
//!
//! Bounded by the layout capacity, which is applied once per frame rather
//! than stored: lines accumulate freely between frames and the oldest are
//! evicted just before rendering.

use crate::output::split_output;
use std::collections::VecDeque;

/// Ordered display lines, oldest first
#[derive(Debug, Clone, Default)]
pub struct ScrollbackBuffer {
    lines: VecDeque<String>,
}

impl ScrollbackBuffer {
    /// Create empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry as-is
    pub fn append_line(&mut self, text: impl Into<String>) {
        self.lines.push_back(text.into());
    }

    /// Append a block of output, one entry per line
    pub fn append_output(&mut self, output: &str) {
        for line in split_output(output) {
            self.append_line(line);
        }
    }

    /// Drop oldest entries until at most `capacity` remain
    ///
    /// Returns the number of entries discarded.
    pub fn evict_overflow(&mut self, capacity: usize) -> usize {
        let excess = self.lines.len().saturating_sub(capacity);
        self.lines.drain(..excess);
        excess
    }

    /// Retained lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Get number of retained entries
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(buf: &ScrollbackBuffer) -> Vec<&str> {
        buf.lines().collect()
    }

    #[test]
    fn test_append_and_read_back() {
        let mut buf = ScrollbackBuffer::new();
        assert!(buf.is_empty());

        buf.append_line("hello");
        buf.append_line("world");
        assert_eq!(buf.len(), 2);
        assert_eq!(contents(&buf), vec!["hello", "world"]);
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let mut buf = ScrollbackBuffer::new();
        for i in 0..10 {
            buf.append_line(format!("line {}", i));
        }

        assert_eq!(buf.evict_overflow(3), 7);
        assert_eq!(contents(&buf), vec!["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_eviction_below_capacity_is_noop() {
        let mut buf = ScrollbackBuffer::new();
        buf.append_line("only");
        assert_eq!(buf.evict_overflow(16), 0);
        assert_eq!(contents(&buf), vec!["only"]);
    }

    #[test]
    fn test_zero_capacity_empties() {
        let mut buf = ScrollbackBuffer::new();
        buf.append_line("a");
        buf.append_line("b");
        assert_eq!(buf.evict_overflow(0), 2);
        assert!(buf.is_empty());
        assert_eq!(buf.evict_overflow(0), 0);
    }

    #[test]
    fn test_output_block_splits_into_entries() {
        let mut buf = ScrollbackBuffer::new();
        buf.append_line("> help");
        buf.append_output("line1\nline2");
        assert_eq!(contents(&buf), vec!["> help", "line1", "line2"]);
    }

    #[test]
    fn test_clear() {
        let mut buf = ScrollbackBuffer::new();
        buf.append_output("a\nb\nc");
        assert_eq!(buf.len(), 3);

        buf.clear();
        assert!(buf.is_empty());
    }
}
