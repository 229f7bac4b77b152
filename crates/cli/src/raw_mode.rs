//! Raw mode terminal wrapper for crossterm
//!
//! Ensures terminal is restored to normal mode on drop (even on panic).

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// Guard that puts the terminal into console mode and restores it on drop.
///
/// Console mode is raw input, the alternate screen, mouse capture and a
/// hidden cursor.
///
/// # Example
/// ```no_run
/// let _guard = RawModeGuard::enable()?;
/// // ... drive frames ...
/// // Terminal restored when the guard is dropped
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enable console mode.
    ///
    /// Raw mode disables:
    /// - Line buffering (keys arrive as they are pressed)
    /// - Local echo (the console draws its own prompt line)
    /// - Signal generation (Ctrl+C arrives as a key event)
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide
        )?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best-effort restore - ignore errors during cleanup
        let _ = execute!(
            std::io::stdout(),
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
