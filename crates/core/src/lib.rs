//! Watchterm Core - console app for a watch-face host
//!
//! This crate provides:
//! - Host-boundary types (input snapshots, frame context, icon registry)
//! - The app contract (`WatchApp`) and the command execution seam
//! - Console building blocks (scrollback, line editor, history)
//! - `TerminalSession`, the console app itself
//! - Error types

pub mod assets;
pub mod error;
pub mod frame;
pub mod history;
pub mod layout;
pub mod line_editor;
pub mod output;
pub mod runner;
pub mod scrollback;
pub mod terminal;
pub mod types;

// Re-export common types
pub use assets::{Assets, ImageId, CROSS_ICON};
pub use error::{CoreError, Result};
pub use frame::{Frame, RenderInstruction};
pub use history::HistoryNavigator;
pub use layout::ConsoleLayout;
pub use line_editor::LineEditor;
pub use output::{split_output, OutputInbox, OutputStream};
pub use runner::{CommandRunner, MockRunner};
pub use scrollback::ScrollbackBuffer;
pub use terminal::{run_frame, FrameResult, TerminalSession, WatchApp};
pub use types::{in_rect, FrameInput, InputState, Key, Vec2};
