// crates/generate_betting_prompt/src/services.rs

use anyhow::{anyhow, Result};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Copy text to the clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by an external program that reads the text on stdin
/// (`pbcopy`, `wl-copy`, `xclip`, `clip`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandClipboard {
            program: program.into(),
            args,
        }
    }

    /// Parses a whitespace-separated command line such as `xclip -selection clipboard`.
    /// Returns `None` for a blank string.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(CommandClipboard::new(program, parts.collect()))
    }

    /// The usual clipboard program for this platform.
    pub fn platform_default(wayland: bool) -> Self {
        if cfg!(target_os = "macos") {
            CommandClipboard::new("pbcopy", vec![])
        } else if cfg!(windows) {
            CommandClipboard::new("clip", vec![])
        } else if wayland {
            CommandClipboard::new("wl-copy", vec![])
        } else {
            CommandClipboard::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| anyhow!("Error running {}: {}", self.program, e))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin not captured")),
        };
        // stdin is closed here; reap the child on every path.
        if let Err(e) = written {
            let status = child
                .wait()
                .map_err(|wait_err| anyhow!("Failed to wait on {}: {}", self.program, wait_err))?;
            return Err(anyhow!(
                "Failed to write to {}: {} ({} exited with status {})",
                self.program,
                e,
                self.program,
                status
            ));
        }

        let status = child
            .wait()
            .map_err(|e| anyhow!("Failed to wait on {}: {}", self.program, e))?;
        if !status.success() {
            return Err(anyhow!("{} exited with status {}", self.program, status));
        }
        Ok(())
    }
}
