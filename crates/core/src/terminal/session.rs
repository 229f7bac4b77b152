//! Console app: scrollback, line editor and command history
//!
//! Each tick runs in a fixed order: fold in command output that arrived
//! since the last tick, evict scrollback overflow, render, then apply this
//! tick's input. Rendering happens before input, so keys typed in a tick
//! show up on the following one.

use super::app::WatchApp;
use crate::assets::{Assets, ImageId};
use crate::error::Result;
use crate::frame::Frame;
use crate::history::HistoryNavigator;
use crate::layout::ConsoleLayout;
use crate::line_editor::LineEditor;
use crate::output::OutputInbox;
use crate::runner::CommandRunner;
use crate::scrollback::ScrollbackBuffer;
use crate::types::{in_rect, Key, Vec2};
use tracing::{debug, trace};

/// One running console app instance
pub struct TerminalSession<R: CommandRunner> {
    layout: ConsoleLayout,
    exit_icon: ImageId,
    scrollback: ScrollbackBuffer,
    editor: LineEditor,
    history: HistoryNavigator,
    runner: R,
    inbox: Option<OutputInbox>,
}

impl<R: CommandRunner> TerminalSession<R> {
    /// Create an empty session
    ///
    /// Fails if the layout's exit icon is not registered in `assets`.
    pub fn new(layout: ConsoleLayout, assets: &Assets, runner: R) -> Result<Self> {
        let exit_icon = assets.icon(&layout.exit_icon)?;
        debug!(
            "Console session created, {} scrollback lines",
            layout.capacity()
        );
        Ok(Self {
            layout,
            exit_icon,
            scrollback: ScrollbackBuffer::new(),
            editor: LineEditor::new(),
            history: HistoryNavigator::new(),
            runner,
            inbox: None,
        })
    }

    /// Drain command output from `inbox` at the start of every frame
    pub fn with_inbox(mut self, inbox: OutputInbox) -> Self {
        self.inbox = Some(inbox);
        self
    }

    pub fn layout(&self) -> &ConsoleLayout {
        &self.layout
    }

    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn drain_output(&mut self) {
        let Some(inbox) = self.inbox.as_mut() else {
            return;
        };
        for chunk in inbox.drain() {
            trace!("Drained {} bytes of command output", chunk.len());
            self.scrollback.append_output(&chunk);
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let layout = &self.layout;
        frame.draw_image(Vec2::ZERO, self.exit_icon);

        let mut cursor = Vec2::new(0.0, layout.header_height);
        for line in self.scrollback.lines() {
            frame.draw_text(cursor, line, layout.font_size, layout.text_color);
            cursor.y += layout.line_height;
        }
        let prompt_line = format!("{}{}", layout.prompt, self.editor.value());
        frame.draw_text(cursor, &prompt_line, layout.font_size, layout.text_color);
    }

    /// Echo the line, record it and hand it to the runner
    fn submit(&mut self) {
        let line = self.editor.take();
        debug!("Submitting command {:?}", line);
        self.scrollback
            .append_line(format!("{}{}", self.layout.prompt, line));
        self.history.record(line.clone());
        self.runner.run(&line);
    }

    fn exit_requested(&self, frame: &Frame<'_>) -> bool {
        let size = frame.image_size(self.exit_icon);
        in_rect(frame.mouse_pos(), Vec2::ZERO, size) && frame.click()
    }
}

impl<R: CommandRunner> WatchApp for TerminalSession<R> {
    fn frame(&mut self, frame: &mut Frame<'_>) -> bool {
        self.drain_output();

        let evicted = self.scrollback.evict_overflow(self.layout.capacity());
        if evicted > 0 {
            trace!("Evicted {} scrollback lines", evicted);
        }

        self.render(frame);

        self.editor.append_text(frame.typed_text());
        if frame.jpressed(Key::Enter) {
            self.submit();
        }
        if frame.jpressed(Key::Backspace) {
            self.editor.backspace();
        }
        if frame.jpressed(Key::Up) {
            if let Some(line) = self.history.recall_previous() {
                self.editor.set(line);
            }
        }
        if frame.jpressed(Key::Down) {
            if let Some(line) = self.history.recall_next() {
                self.editor.set(line);
            }
        }

        if self.exit_requested(frame) {
            debug!("Exit icon clicked, stopping console");
            return false;
        }
        true
    }

    fn on_run_output(&mut self, output: &str) {
        debug!("Command output: {}", output);
        self.scrollback.append_output(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::RenderInstruction;
    use crate::runner::MockRunner;
    use crate::terminal::run_frame;
    use crate::types::FrameInput;
    use crate::CoreError;

    fn session(capacity: usize) -> (TerminalSession<MockRunner>, Assets) {
        let assets = Assets::watch_default();
        let session =
            TerminalSession::new(ConsoleLayout::with_capacity(capacity), &assets, MockRunner::new())
                .unwrap();
        (session, assets)
    }

    fn texts(queue: &[RenderInstruction]) -> Vec<(f32, &str)> {
        queue
            .iter()
            .filter_map(|instruction| match instruction {
                RenderInstruction::Text { text, position, .. } => Some((position.y, text.as_str())),
                RenderInstruction::Image { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_exit_icon() {
        let result = TerminalSession::new(ConsoleLayout::default(), &Assets::new(), MockRunner::new());
        assert!(matches!(result, Err(CoreError::UnknownIcon(_))));
    }

    #[test]
    fn test_render_layout() {
        let (mut session, assets) = session(7);
        session.on_run_output("first\nsecond");

        let result = run_frame(&mut session, &FrameInput::new(), &assets);
        assert!(result.keep_running);
        assert!(matches!(
            result.render_queue[0],
            RenderInstruction::Image { position, .. } if position == Vec2::ZERO
        ));
        assert_eq!(
            texts(&result.render_queue),
            vec![(16.0, "first"), (23.0, "second"), (30.0, "> ")]
        );
    }

    #[test]
    fn test_typed_text_renders_next_frame() {
        let (mut session, assets) = session(7);
        let typed = run_frame(&mut session, &FrameInput::new().with_typed("ls"), &assets);
        assert_eq!(texts(&typed.render_queue), vec![(16.0, "> ")]);
        assert_eq!(session.editor().value(), "ls");

        let next = run_frame(&mut session, &FrameInput::new(), &assets);
        assert_eq!(texts(&next.render_queue), vec![(16.0, "> ls")]);
    }

    #[test]
    fn test_typed_text_and_enter_in_same_frame() {
        let (mut session, assets) = session(7);
        run_frame(
            &mut session,
            &FrameInput::new().with_typed("help").with_key(Key::Enter),
            &assets,
        );
        assert_eq!(session.runner().commands(), ["help"]);
        assert_eq!(session.scrollback().lines().collect::<Vec<_>>(), vec!["> help"]);
        assert!(session.editor().is_empty());
        assert_eq!(session.history().entries(), ["help"]);
    }

    #[test]
    fn test_backspace_and_history_keys() {
        let (mut session, assets) = session(7);
        for command in ["a", "b"] {
            run_frame(
                &mut session,
                &FrameInput::new().with_typed(command).with_key(Key::Enter),
                &assets,
            );
        }

        run_frame(&mut session, &FrameInput::new().with_key(Key::Up), &assets);
        assert_eq!(session.editor().value(), "b");
        run_frame(&mut session, &FrameInput::new().with_key(Key::Up), &assets);
        assert_eq!(session.editor().value(), "a");
        run_frame(&mut session, &FrameInput::new().with_key(Key::Down), &assets);
        assert_eq!(session.editor().value(), "b");

        run_frame(&mut session, &FrameInput::new().with_key(Key::Backspace), &assets);
        assert!(session.editor().is_empty());
        run_frame(&mut session, &FrameInput::new().with_key(Key::Backspace), &assets);
        assert!(session.editor().is_empty());
    }

    #[test]
    fn test_down_without_browsing_keeps_draft() {
        let (mut session, assets) = session(7);
        run_frame(
            &mut session,
            &FrameInput::new().with_typed("old").with_key(Key::Enter),
            &assets,
        );
        run_frame(
            &mut session,
            &FrameInput::new().with_typed("draft").with_key(Key::Down),
            &assets,
        );
        assert_eq!(session.editor().value(), "draft");
    }

    #[test]
    fn test_empty_submit_is_recorded_and_run() {
        let (mut session, assets) = session(7);
        run_frame(&mut session, &FrameInput::new().with_key(Key::Enter), &assets);
        assert_eq!(session.runner().commands(), [""]);
        assert_eq!(session.history().entries(), [""]);
        assert_eq!(session.scrollback().lines().collect::<Vec<_>>(), vec!["> "]);
    }

    #[test]
    fn test_custom_prompt_for_input_and_echo() {
        let assets = Assets::watch_default();
        let layout = ConsoleLayout::with_capacity(7).with_prompt("$ ");
        let mut session = TerminalSession::new(layout, &assets, MockRunner::new()).unwrap();

        run_frame(
            &mut session,
            &FrameInput::new().with_typed("pwd").with_key(Key::Enter),
            &assets,
        );
        let result = run_frame(&mut session, &FrameInput::new().with_typed("l"), &assets);

        assert_eq!(session.runner().commands(), ["pwd"]);
        assert_eq!(texts(&result.render_queue), vec![(16.0, "$ pwd"), (23.0, "$ ")]);
    }

    #[test]
    fn test_zero_capacity_renders_only_prompt() {
        let assets = Assets::watch_default();
        let layout = ConsoleLayout::default().with_header_height(500.0);
        let mut session = TerminalSession::new(layout, &assets, MockRunner::new()).unwrap();
        session.on_run_output("a\nb");

        let result = run_frame(&mut session, &FrameInput::new(), &assets);
        assert!(session.scrollback().is_empty());
        assert_eq!(texts(&result.render_queue), vec![(500.0, "> ")]);
    }

    #[test]
    fn test_click_on_exit_icon() {
        let (mut session, assets) = session(7);
        let inside = FrameInput::new().with_mouse(Vec2::new(4.0, 4.0)).with_click();
        assert!(!run_frame(&mut session, &inside, &assets).keep_running);
    }

    #[test]
    fn test_click_elsewhere_or_hover_continues() {
        let (mut session, assets) = session(7);
        let outside = FrameInput::new().with_mouse(Vec2::new(40.0, 4.0)).with_click();
        assert!(run_frame(&mut session, &outside, &assets).keep_running);

        let hover = FrameInput::new().with_mouse(Vec2::new(4.0, 4.0));
        assert!(run_frame(&mut session, &hover, &assets).keep_running);
    }
}
