//! App contract between a watch host and its apps

use crate::assets::Assets;
use crate::frame::{Frame, RenderInstruction};
use crate::types::FrameInput;

/// An app driven by the host, one `frame` call per tick
pub trait WatchApp {
    /// Process one tick; return `false` to ask the host to unload the app
    fn frame(&mut self, frame: &mut Frame<'_>) -> bool;

    /// Output of a command started by this app
    fn on_run_output(&mut self, _output: &str) {}
}

/// Outcome of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub keep_running: bool,
    pub render_queue: Vec<RenderInstruction>,
}

/// Run one tick of `app` against an input snapshot
pub fn run_frame<A: WatchApp + ?Sized>(
    app: &mut A,
    input: &FrameInput,
    assets: &Assets,
) -> FrameResult {
    let mut frame = Frame::new(input, assets);
    let keep_running = app.frame(&mut frame);
    FrameResult {
        keep_running,
        render_queue: frame.into_render_queue(),
    }
}
