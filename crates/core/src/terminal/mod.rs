//! Watch app contract and the console app

mod app;
mod session;

pub use app::{run_frame, FrameResult, WatchApp};
pub use session::TerminalSession;
