//! Command execution seam

use crate::output::OutputStream;
use std::collections::HashMap;

/// Executes submitted command lines
///
/// `run` is fire-and-forget: it must return promptly, and any output is
/// posted later on the runner's `OutputStream`. A runner that never posts
/// simply produces no output. Failures are reported as output text.
pub trait CommandRunner {
    fn run(&mut self, command_line: &str);
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&mut self, command_line: &str) {
        (**self).run(command_line)
    }
}

/// Mock runner for testing
///
/// Records every command line. With an output stream attached it answers
/// scripted commands immediately (before the next frame drains the inbox).
#[derive(Debug, Default)]
pub struct MockRunner {
    commands: Vec<String>,
    output: Option<OutputStream>,
    replies: HashMap<String, String>,
}

impl MockRunner {
    /// Create a runner that records and never answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that answers on `output`
    pub fn with_output(output: OutputStream) -> Self {
        Self {
            output: Some(output),
            ..Self::default()
        }
    }

    /// Script the output posted when `command_line` is run
    pub fn reply(mut self, command_line: &str, output: &str) -> Self {
        self.replies
            .insert(command_line.to_string(), output.to_string());
        self
    }

    /// Command lines run so far, oldest first
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, command_line: &str) {
        self.commands.push(command_line.to_string());
        if let (Some(output), Some(reply)) = (&self.output, self.replies.get(command_line)) {
            output.send(reply.clone());
        }
    }
}
