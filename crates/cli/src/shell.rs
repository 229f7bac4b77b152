//! Shell-backed command runner
//!
//! Each submitted line runs as `<shell> -c <line>` on the tokio runtime. The
//! combined stdout and stderr is posted back as one chunk when the command
//! finishes; commands are never cancelled or timed out.
//!
//! A command that prints nothing posts nothing, so it adds no scrollback
//! line. Other runners may post an empty chunk instead, which the console
//! shows as one empty line.

use std::process::Stdio;
use tokio::process::Command;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use watchterm_core::{CommandRunner, OutputStream};

pub struct ShellRunner {
    shell: String,
    output: OutputStream,
    runtime: Handle,
}

impl ShellRunner {
    pub fn new(shell: String, output: OutputStream, runtime: Handle) -> Self {
        Self {
            shell,
            output,
            runtime,
        }
    }

    #[cfg(unix)]
    pub fn default_shell() -> String {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }

    #[cfg(windows)]
    pub fn default_shell() -> String {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command_line: &str) {
        let shell = self.shell.clone();
        let line = command_line.to_string();
        let output = self.output.clone();

        self.runtime.spawn(async move {
            let text = execute(&shell, &line).await;
            if !text.is_empty() && !output.send(text) {
                debug!("Console closed before output of {:?} arrived", line);
            }
        });
    }
}

async fn execute(shell: &str, line: &str) -> String {
    let flag = if cfg!(windows) { "/C" } else { "-c" };
    let result = Command::new(shell)
        .arg(flag)
        .arg(line)
        .stdin(Stdio::null())
        .output()
        .await;

    match result {
        Ok(out) => {
            debug!("Command {:?} finished with {}", line, out.status);
            let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&out.stderr));
            // The final newline would otherwise show as an empty line
            if text.ends_with('\n') {
                text.pop();
            }
            text
        }
        Err(e) => {
            warn!("Failed to run {:?} with {}: {}", line, shell, e);
            format!("{}: {}", shell, e)
        }
    }
}
