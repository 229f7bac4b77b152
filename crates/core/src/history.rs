//! Command history with up/down recall

/// Submitted command lines plus a browsing cursor
///
/// `cursor` is `None` while the user is not browsing. Recall walks back to
/// the oldest entry and holds there; walking forward holds at the newest
/// entry rather than returning to the not-browsing state. Only `record`
/// ends a browse.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing
    ///
    /// Every line is kept, including empty lines and repeats.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Step to an older entry
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = match self.cursor {
            None => last,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.entries[index].as_str())
    }

    /// Step to a newer entry; nothing happens unless browsing
    pub fn recall_next(&mut self) -> Option<&str> {
        let index = self.cursor?;
        let index = if index + 1 < self.entries.len() {
            index + 1
        } else {
            index
        };
        self.cursor = Some(index);
        Some(self.entries[index].as_str())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> HistoryNavigator {
        let mut history = HistoryNavigator::new();
        history.record("a");
        history.record("b");
        history.record("c");
        history
    }

    #[test]
    fn test_empty_history_recalls_nothing() {
        let mut history = HistoryNavigator::new();
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_walk_back_holds_at_oldest() {
        let mut history = abc();
        assert_eq!(history.recall_previous(), Some("c"));
        assert_eq!(history.recall_previous(), Some("b"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_walk_forward_holds_at_newest() {
        let mut history = abc();
        for _ in 0..3 {
            history.recall_previous();
        }
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn test_next_without_browsing_is_noop() {
        let mut history = abc();
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_record_resets_browse() {
        let mut history = abc();
        history.recall_previous();
        history.recall_previous();
        history.recall_next();

        history.record("x");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.recall_previous(), Some("x"));
    }

    #[test]
    fn test_empty_and_repeated_lines_recorded() {
        let mut history = HistoryNavigator::new();
        history.record("ls");
        history.record("ls");
        history.record("");
        assert_eq!(history.entries(), ["ls", "ls", ""]);
        assert_eq!(history.recall_previous(), Some(""));
        assert_eq!(history.recall_previous(), Some("ls"));
    }
}
