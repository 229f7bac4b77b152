//! Channel-based delivery of command output
//!
//! Command runners finish at arbitrary points, possibly between frames and
//! possibly on other threads. They post output chunks on an `OutputStream`;
//! the console drains the matching `OutputInbox` at the start of each frame,
//! so the scrollback is only ever touched from the frame loop.

use tokio::sync::mpsc;

/// Sending half, handed to command runners
///
/// Cloning is cheap; every clone feeds the same inbox.
#[derive(Debug, Clone)]
pub struct OutputStream {
    tx: mpsc::UnboundedSender<String>,
}

/// Receiving half, owned by the console session
#[derive(Debug)]
pub struct OutputInbox {
    rx: mpsc::UnboundedReceiver<String>,
}

impl OutputStream {
    /// Create a connected stream/inbox pair
    pub fn new() -> (Self, OutputInbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, OutputInbox { rx })
    }

    /// Post one chunk of output
    ///
    /// Returns false if the inbox is gone (the app was unloaded).
    pub fn send(&self, chunk: impl Into<String>) -> bool {
        self.tx.send(chunk.into()).is_ok()
    }

    /// Check if the receiving app has been dropped
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl OutputInbox {
    /// Take every chunk received so far, oldest first, without waiting
    pub fn drain(&mut self) -> Vec<String> {
        let mut chunks = Vec::new();
        while let Ok(chunk) = self.rx.try_recv() {
            chunks.push(chunk);
        }
        chunks
    }
}

/// Split an output chunk into display lines
///
/// Splits on `'\n'` and strips one trailing `'\r'` per piece. Empty pieces
/// are kept: `""` is one empty line and `"a\n"` is `"a"` followed by `""`.
pub fn split_output(chunk: &str) -> impl Iterator<Item = &str> {
    chunk
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
